use crate::commands::{print_value, Context};
use crate::util::read_json_input;
use anyhow::{Context as _, Result};
use clap::Args;
use filterkit_config::AppConfig;
use filterkit_core::{parse_chain, FilterChain, FilterStage};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Filter chain, e.g. `truncate:16:"..." | tel`
    #[arg(long)]
    pub chain: String,
    /// Text value; when omitted a JSON value is read from --input or stdin
    pub value: Option<String>,
    #[arg(long, conflicts_with = "value")]
    pub input: Option<PathBuf>,
}

pub fn apply(ctx: &Context<'_>, args: ApplyArgs) -> Result<()> {
    let chain = parse_chain(&args.chain)
        .with_context(|| format!("parse filter chain {:?}", args.chain))?;
    let chain = with_config_defaults(chain, ctx.config);
    debug!(stages = chain.stages.len(), "filter chain parsed");

    let value = match args.value {
        Some(text) => Value::String(text),
        None => read_json_input(args.input.as_deref())?,
    };
    let output = chain.apply(value)?;
    print_value(ctx, &output)
}

fn with_config_defaults(chain: FilterChain, config: &AppConfig) -> FilterChain {
    let stages = chain
        .stages
        .into_iter()
        .map(|stage| match stage {
            FilterStage::Percentage { decimals: None } => FilterStage::Percentage {
                decimals: config.percentage.decimals,
            },
            FilterStage::Truncate { length, end } => FilterStage::Truncate {
                length: length.or(Some(config.truncate.length)),
                end: end.or_else(|| Some(config.truncate.end.clone())),
            },
            other => other,
        })
        .collect();
    FilterChain { stages }
}

#[cfg(test)]
mod tests {
    use super::with_config_defaults;
    use filterkit_config::AppConfig;
    use filterkit_core::{parse_chain, FilterStage};

    #[test]
    fn config_fills_unset_arguments() {
        let mut config = AppConfig::default();
        config.truncate.length = 4;
        config.percentage.decimals = Some(1);

        let chain = parse_chain("truncate::\"!\" | percentage | percentage:0").unwrap();
        let chain = with_config_defaults(chain, &config);
        assert_eq!(
            chain.stages,
            vec![
                FilterStage::Truncate {
                    length: Some(4),
                    end: Some("!".to_string()),
                },
                FilterStage::Percentage { decimals: Some(1) },
                FilterStage::Percentage { decimals: Some(0) },
            ]
        );
    }
}
