use anyhow::Result;
use filterkit_config::AppConfig;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};

pub mod chain;
pub mod completions;
pub mod lists;
pub mod phone;
pub mod text;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Strings print raw, everything else as JSON.
pub fn print_value(ctx: &Context<'_>, value: &Value) -> Result<()> {
    if ctx.json {
        return print_json(value);
    }
    match value {
        Value::String(text) => println!("{}", text),
        Value::Null => println!(),
        other => print_json(other)?,
    }
    Ok(())
}
