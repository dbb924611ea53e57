use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Reads a JSON document from `path`, or stdin when no path is given.
pub fn read_json_input(path: Option<&Path>) -> Result<Value> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read input file {}", path.display()))?,
        None => {
            let mut raw = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut raw)
                .with_context(|| "read stdin")?;
            raw
        }
    };
    let value = serde_json::from_str(&raw).with_context(|| "parse json input")?;
    Ok(value)
}

pub fn read_list_input(path: Option<&Path>) -> Result<Vec<Value>> {
    match read_json_input(path)? {
        Value::Array(items) => {
            debug!(count = items.len(), "list input loaded");
            Ok(items)
        }
        _ => Err(invalid_input("expected a JSON array")),
    }
}
