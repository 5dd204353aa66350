use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use naming::cli::output::{print_conversions, OutputFormat, View};
use naming::config::Overrides;
use naming::{Config, Convention, Conversion};
use std::io::{self, BufRead, IsTerminal};

#[derive(Parser, Debug)]
#[command(name = "naming")]
#[command(version, about = "Convert identifiers between naming conventions", long_about = None)]
struct Cli {
    /// Text to convert (lines are read from stdin when omitted)
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// Convention to convert to (e.g., camelCase, snake_case, kebab, constant)
    #[arg(short, long, value_name = "CONVENTION")]
    case: Option<Convention>,

    /// Print the input in every convention
    #[arg(short, long, conflicts_with = "case")]
    all: bool,

    /// Print the tokenized words instead of converting
    #[arg(long, conflicts_with_all = ["case", "all"])]
    fields: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Warnings are always shown, each -v adds a level
    stderrlog::new()
        .verbosity(cli.verbose as usize + 1)
        .init()
        .context("Failed to initialize logger")?;

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "naming", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(Overrides {
        convention: cli.case,
        format: cli.format,
        no_color: cli.no_color,
    })?;

    let inputs = if cli.inputs.is_empty() {
        read_stdin()?
    } else {
        cli.inputs
    };
    log::info!("converting {} input(s)", inputs.len());

    let (conventions, view) = if cli.fields {
        (Vec::new(), View::Fields)
    } else if cli.all {
        (Convention::ALL.to_vec(), View::Conversions)
    } else {
        (vec![config.convention], View::Conversions)
    };

    let conversions: Vec<Conversion> = inputs
        .iter()
        .map(|input| Conversion::new(input, &conventions))
        .collect();

    for conversion in &conversions {
        if conversion.fields.is_empty() {
            log::warn!("no words found in {:?}", conversion.input);
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_conversions(&mut out, &conversions, view, config.color, &config.format)
        .context("Failed to write output")?;

    Ok(())
}

fn read_stdin() -> Result<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("No input given. Pass words as arguments or pipe them on stdin.");
    }

    log::debug!("reading inputs from stdin");
    let mut inputs = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if !line.trim().is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}
