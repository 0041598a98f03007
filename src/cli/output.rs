use crate::casing::CasingStyle;
use crate::{Conversion, Detection};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a, T> {
    count: usize,
    items: &'a [T],
}

pub fn render_detections(
    detections: &[Detection],
    format: OutputFormat,
    colored_output: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(detections
            .iter()
            .map(|d| format!("{}\t{}", style_label(d.style, colored_output), d.input))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => render_json(detections),
    }
}

pub fn render_conversions(
    conversions: &[Conversion],
    format: OutputFormat,
    colored_output: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(conversions
            .iter()
            .map(|c| {
                if colored_output {
                    c.output.green().to_string()
                } else {
                    c.output.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => render_json(conversions),
    }
}

fn render_json<T: Serialize>(items: &[T]) -> Result<String> {
    let output = JsonOutput {
        count: items.len(),
        items,
    };
    serde_json::to_string_pretty(&output).context("Failed to serialize output")
}

fn style_label(style: CasingStyle, colored: bool) -> String {
    let name = style.name();
    if !colored {
        return name.to_string();
    }
    match style {
        CasingStyle::Unrecognized => name.red().bold().to_string(),
        _ => name.cyan().bold().to_string(),
    }
}

pub fn print_detect_summary(detections: &[Detection], colored: bool) {
    let unrecognized = detections
        .iter()
        .filter(|d| d.style == CasingStyle::Unrecognized)
        .count();
    if unrecognized == 0 {
        return;
    }

    let noun = if unrecognized == 1 { "input" } else { "inputs" };
    if colored {
        eprintln!(
            "{} {} {} with unrecognized casing",
            "✗".red().bold(),
            unrecognized.to_string().red().bold(),
            noun
        );
    } else {
        eprintln!("✗ {} {} with unrecognized casing", unrecognized, noun);
    }
}
