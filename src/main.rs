// src/main.rs

//! Command line driver: reads a `while` statement, analyzes it and prints
//! the verdict and the classified tokens.

use anyhow::{bail, Context};
use log::{error, info};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use while_lexer::config::{Config, OutputFormat};
use while_lexer::{report, WhileAnalyzer};

const HELP: &str = "\
while-lexer - tokenize and classify a `while` statement

USAGE:
    while-lexer [--config FILE] [--json] [--verbose] [FILE]

OPTIONS:
    --config FILE   JSON configuration file.
    --json          Print the analysis as JSON.
    --verbose       Log every scanner step.
    -h, --help      Print this help.

ARGS:
    FILE            Source file to analyze, or '-' for stdin (the default).
";

#[derive(Debug)]
struct Args {
    config: Option<PathBuf>,
    json: bool,
    verbose: bool,
    source: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{}", HELP);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_micros()
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether the input was accepted.
fn run(args: &Args) -> anyhow::Result<bool> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if args.json {
        config.output.format = OutputFormat::Json;
    }
    if args.verbose {
        config.scanner.verbose = true;
    }
    info!("Configuration: {:?}", config);

    let source = read_source(args.source.as_deref())?;
    if source.trim().is_empty() {
        bail!("input is empty, nothing to analyze");
    }

    let analysis = WhileAnalyzer::new()
        .verbose(config.scanner.verbose)
        .analyze(&source);
    let rendered = report::render(&analysis, config.output.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("Failed to write analysis to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(analysis.is_accepted())
}

fn read_source(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file {}", path.display())),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read source from stdin")?;
            Ok(source)
        }
    }
}

/// `Ok(None)` when help was requested.
fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let args = Args {
        config: pargs.opt_value_from_str("--config")?,
        json: pargs.contains("--json"),
        verbose: pargs.contains("--verbose"),
        source: pargs.opt_free_from_str()?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        bail!("unused arguments left: {:?}", remaining);
    }
    Ok(Some(args))
}
