use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use filterkit_core::format::phone::{digit_string, format_phone, parse_phone, PhoneParts};
use filterkit_core::FilterValue;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct TelArgs {
    pub value: String,
}

#[derive(Debug, Serialize)]
struct TelDto {
    input: String,
    formatted: String,
    parts: Option<PhoneParts>,
}

pub fn tel(ctx: &Context<'_>, args: TelArgs) -> Result<()> {
    let value = FilterValue::from(args.value.as_str());
    let formatted = format_phone(value.clone());
    let parts = if value.is_empty_input() {
        None
    } else {
        parse_phone(digit_string(&args.value))
    };
    if parts.is_none() {
        debug!(input = %args.value, "value left unformatted");
    }

    if ctx.json {
        print_json(&TelDto {
            input: args.value,
            formatted,
            parts,
        })?;
    } else {
        println!("{}", formatted);
    }
    Ok(())
}
