pub mod logger;
pub mod output;

use crate::text::StrExt;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Collect inputs: positional arguments first, then `file`, then stdin.
///
/// Blank lines read from a file or stdin are dropped when `skip_blank` is set;
/// positional arguments are always kept as given.
pub fn read_inputs(args: Vec<String>, file: Option<&Path>, skip_blank: bool) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }

    let lines = if let Some(path) = file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        content.lines().map(str::to_string).collect()
    } else {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("Failed to read from stdin")?
    };

    Ok(filter_blank(lines, skip_blank))
}

fn filter_blank(lines: Vec<String>, skip_blank: bool) -> Vec<String> {
    if skip_blank {
        lines.into_iter().filter(|line| line.is_not_blank()).collect()
    } else {
        lines
    }
}
