use crate::chain::ast::{FilterChain, FilterName, FilterStage};
use crate::chain::ChainParseError;
use crate::format::MAX_DECIMALS;
use std::str::Chars;

const STAGE_SEPARATOR: char = '|';
const ARG_SEPARATOR: char = ':';

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    text: String,
    quoted: bool,
}

impl Token {
    // Unquoted empty arguments stand for "use the default".
    fn is_absent(&self) -> bool {
        !self.quoted && self.text.is_empty()
    }
}

/// Parses `tel | truncate:16:"... [read more]"` into a chain of stages.
///
/// Stages are separated by `|` and arguments by `:`. Single or double quotes
/// protect separators inside an argument; a backslash escapes the next
/// character within quotes.
pub fn parse_chain(input: &str) -> Result<FilterChain, ChainParseError> {
    let mut stages = Vec::new();
    for tokens in tokenize(input)? {
        stages.push(parse_stage(tokens)?);
    }
    Ok(FilterChain { stages })
}

fn parse_stage(tokens: Vec<Token>) -> Result<FilterStage, ChainParseError> {
    let mut tokens = tokens.into_iter();
    let name_token = match tokens.next() {
        Some(token) if !token.quoted && !token.text.is_empty() => token,
        _ => return Err(ChainParseError::EmptyStage),
    };
    let name: FilterName = name_token
        .text
        .parse()
        .map_err(ChainParseError::UnknownFilter)?;

    let args: Vec<Token> = tokens.collect();
    if args.len() > name.max_args() {
        return Err(ChainParseError::TooManyArguments {
            filter: name,
            max: name.max_args(),
        });
    }
    let arg = |idx: usize| args.get(idx).filter(|token| !token.is_absent());

    let stage = match name {
        FilterName::Percentage => FilterStage::Percentage {
            decimals: arg(0)
                .map(|token| parse_count(name, token, MAX_DECIMALS))
                .transpose()?,
        },
        FilterName::Tel => FilterStage::Tel,
        FilterName::Truncate => FilterStage::Truncate {
            length: arg(0)
                .map(|token| parse_count(name, token, usize::MAX))
                .transpose()?,
            end: arg(1).map(|token| token.text.clone()),
        },
        FilterName::Unsafe => FilterStage::Unsafe,
        FilterName::Multiple => FilterStage::Multiple {
            query: arg(0).map(|token| token.text.clone()),
        },
        FilterName::SecondConversion => FilterStage::SecondConversion,
        FilterName::TrustedResourceUrl => FilterStage::TrustedResourceUrl,
        FilterName::Regex => FilterStage::Regex {
            field: arg(0)
                .map(|token| token.text.clone())
                .ok_or(ChainParseError::MissingArgument {
                    filter: name,
                    name: "field",
                })?,
            pattern: args
                .get(1)
                .map(|token| token.text.clone())
                .ok_or(ChainParseError::MissingArgument {
                    filter: name,
                    name: "pattern",
                })?,
        },
    };
    Ok(stage)
}

fn parse_count(filter: FilterName, token: &Token, max: usize) -> Result<usize, ChainParseError> {
    token
        .text
        .trim()
        .parse()
        .ok()
        .filter(|count| *count <= max)
        .ok_or_else(|| ChainParseError::InvalidNumber {
            filter,
            value: token.text.clone(),
        })
}

fn tokenize(input: &str) -> Result<Vec<Vec<Token>>, ChainParseError> {
    let mut stages = Vec::new();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted: Option<String> = None;
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        match ch {
            STAGE_SEPARATOR => {
                tokens.push(finish_token(&mut current, &mut quoted));
                stages.push(std::mem::take(&mut tokens));
            }
            ARG_SEPARATOR => tokens.push(finish_token(&mut current, &mut quoted)),
            '"' | '\'' if quoted.is_none() && current.trim().is_empty() => {
                quoted = Some(read_quoted(&mut chars, ch)?);
                current.clear();
            }
            _ if quoted.is_some() => {
                if !ch.is_whitespace() {
                    return Err(ChainParseError::UnexpectedCharacter(ch));
                }
            }
            _ => current.push(ch),
        }
    }
    tokens.push(finish_token(&mut current, &mut quoted));
    stages.push(tokens);
    Ok(stages)
}

fn read_quoted(chars: &mut Chars<'_>, quote: char) -> Result<String, ChainParseError> {
    let mut out = String::new();
    loop {
        match chars.next() {
            Some('\\') => match chars.next() {
                Some(escaped) => out.push(escaped),
                None => return Err(ChainParseError::UnterminatedQuote),
            },
            Some(ch) if ch == quote => return Ok(out),
            Some(ch) => out.push(ch),
            None => return Err(ChainParseError::UnterminatedQuote),
        }
    }
}

fn finish_token(current: &mut String, quoted: &mut Option<String>) -> Token {
    let token = match quoted.take() {
        Some(text) => Token { text, quoted: true },
        None => Token {
            text: current.trim().to_string(),
            quoted: false,
        },
    };
    current.clear();
    token
}
