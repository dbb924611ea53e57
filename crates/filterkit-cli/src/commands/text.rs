use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use filterkit_core::format::{
    escape_html, format_duration_clock, percentage as format_percentage, seconds_to_date,
    trust_as_html, truncate as truncate_text, MAX_DECIMALS,
};
use filterkit_core::FilterValue;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct PercentageArgs {
    pub value: String,
    #[arg(long)]
    pub decimals: Option<usize>,
}

#[derive(Debug, Args)]
pub struct TruncateArgs {
    pub text: String,
    #[arg(long)]
    pub length: Option<usize>,
    #[arg(long)]
    pub end: Option<String>,
}

#[derive(Debug, Args)]
pub struct EscapeArgs {
    pub text: String,
    /// Emit the markup as-is
    #[arg(long)]
    pub trusted: bool,
}

#[derive(Debug, Args)]
pub struct SecondsArgs {
    #[arg(allow_negative_numbers = true)]
    pub seconds: i64,
}

#[derive(Debug, Serialize)]
struct SecondsDto {
    seconds: i64,
    epoch_millis: i64,
    local: String,
    clock: Option<String>,
}

pub fn percentage(ctx: &Context<'_>, args: PercentageArgs) -> Result<()> {
    let decimals = args.decimals.or(ctx.config.percentage.decimals);
    if let Some(decimals) = decimals {
        if decimals > MAX_DECIMALS {
            return Err(invalid_input(format!(
                "decimals must be at most {}",
                MAX_DECIMALS
            )));
        }
    }
    let value = FilterValue::from(args.value);
    if value.as_number().is_none() {
        debug!(input = %value, "non-numeric percentage input");
    }
    emit_text(ctx, format_percentage(value, decimals))
}

pub fn truncate(ctx: &Context<'_>, args: TruncateArgs) -> Result<()> {
    let length = args.length.unwrap_or(ctx.config.truncate.length);
    let end = args
        .end
        .as_deref()
        .unwrap_or(ctx.config.truncate.end.as_str());
    emit_text(ctx, truncate_text(&args.text, Some(length), Some(end)))
}

pub fn escape(ctx: &Context<'_>, args: EscapeArgs) -> Result<()> {
    let output = if args.trusted {
        trust_as_html(args.text).into_inner()
    } else {
        escape_html(&args.text)
    };
    emit_text(ctx, output)
}

pub fn seconds(ctx: &Context<'_>, args: SecondsArgs) -> Result<()> {
    let date = seconds_to_date(args.seconds)
        .ok_or_else(|| invalid_input(format!("seconds out of range: {}", args.seconds)))?;
    let dto = SecondsDto {
        seconds: args.seconds,
        epoch_millis: date.timestamp_millis(),
        local: date.format("%Y-%m-%d %H:%M:%S").to_string(),
        clock: format_duration_clock(args.seconds),
    };

    if ctx.json {
        print_json(&dto)?;
    } else {
        match dto.clock {
            Some(clock) => println!("{} ({})", dto.local, clock),
            None => println!("{}", dto.local),
        }
    }
    Ok(())
}

fn emit_text(ctx: &Context<'_>, output: String) -> Result<()> {
    if ctx.json {
        print_json(&serde_json::json!({ "output": output }))?;
    } else {
        println!("{}", output);
    }
    Ok(())
}
