use crate::commands::{print_value, Context};
use crate::util::read_list_input;
use anyhow::Result;
use clap::Args;
use filterkit_core::{filter_multiple, filter_regex};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct MultipleArgs {
    /// Whitespace-separated search terms; prefix a term with ! to exclude
    #[arg(long)]
    pub query: Option<String>,
    /// JSON array to filter (defaults to stdin)
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RegexArgs {
    #[arg(long)]
    pub field: String,
    #[arg(long)]
    pub pattern: String,
    /// JSON array to filter (defaults to stdin)
    #[arg(long)]
    pub input: Option<PathBuf>,
}

pub fn multiple(ctx: &Context<'_>, args: MultipleArgs) -> Result<()> {
    let items = read_list_input(args.input.as_deref())?;
    let kept = filter_multiple(&items, args.query.as_deref());
    debug!(before = items.len(), after = kept.len(), "multiple filter applied");
    print_value(ctx, &Value::Array(kept))
}

pub fn regex(ctx: &Context<'_>, args: RegexArgs) -> Result<()> {
    let items = read_list_input(args.input.as_deref())?;
    let kept = filter_regex(Some(items.as_slice()), &args.field, &args.pattern)?
        .unwrap_or_default();
    debug!(before = items.len(), after = kept.len(), "regex filter applied");
    print_value(ctx, &Value::Array(kept))
}
