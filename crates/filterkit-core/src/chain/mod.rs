mod ast;
mod parser;

use thiserror::Error;

pub use ast::{FilterChain, FilterName, FilterStage};
pub use parser::parse_chain;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainParseError {
    #[error("empty filter stage")]
    EmptyStage,
    #[error("unknown filter: {0}")]
    UnknownFilter(String),
    #[error("unterminated quoted argument")]
    UnterminatedQuote,
    #[error("unexpected character after quoted argument: {0:?}")]
    UnexpectedCharacter(char),
    #[error("{filter} takes at most {max} argument(s)")]
    TooManyArguments { filter: FilterName, max: usize },
    #[error("{filter} requires the {name} argument")]
    MissingArgument {
        filter: FilterName,
        name: &'static str,
    },
    #[error("{filter} expects a non-negative integer within range, got {value:?}")]
    InvalidNumber { filter: FilterName, value: String },
}
