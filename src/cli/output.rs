use crate::Conversion;
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
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

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    convention: String,
    output: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    input: String,
    fields: Vec<String>,
    conversions: Vec<JsonOutput>,
}

/// What the text renderer shows for each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The tokenized words, space separated.
    Fields,
    /// Converted outputs; a labeled table when there is more than one.
    Conversions,
}

pub fn print_conversions(
    out: &mut impl Write,
    conversions: &[Conversion],
    view: View,
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(out, conversions, view, colored_output),
        OutputFormat::Json => print_json(out, conversions),
    }
}

fn print_text(
    out: &mut impl Write,
    conversions: &[Conversion],
    view: View,
    colored_output: bool,
) -> Result<()> {
    for conversion in conversions {
        match view {
            View::Fields => writeln!(out, "{}", conversion.fields.join(" "))?,
            View::Conversions if conversion.outputs.len() == 1 => {
                writeln!(out, "{}", conversion.outputs[0].1)?
            }
            View::Conversions => print_table(out, conversion, colored_output)?,
        }
    }
    Ok(())
}

fn print_table(out: &mut impl Write, conversion: &Conversion, colored_output: bool) -> Result<()> {
    if colored_output {
        writeln!(out, "{}", conversion.input.bold().underline())?;
    } else {
        writeln!(out, "{}", conversion.input)?;
    }

    let width = conversion
        .outputs
        .iter()
        .map(|(convention, _)| convention.name().len())
        .max()
        .unwrap_or(0);

    for (convention, output) in &conversion.outputs {
        let label = format!("{:<width$}", convention.name(), width = width);
        if colored_output {
            writeln!(out, "  {} {}", label.cyan(), output.green().bold())?;
        } else {
            writeln!(out, "  {} {}", label, output)?;
        }
    }
    Ok(())
}

fn print_json(out: &mut impl Write, conversions: &[Conversion]) -> Result<()> {
    let json: Vec<JsonConversion> = conversions
        .iter()
        .map(|c| JsonConversion {
            input: c.input.clone(),
            fields: c.fields.clone(),
            conversions: c
                .outputs
                .iter()
                .map(|(convention, output)| JsonOutput {
                    convention: convention.to_string(),
                    output: output.clone(),
                })
                .collect(),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}
