use anyhow::{Context, Result};
use clap::Parser;
use docwright::analyzers::{analyze_code_quality, detect_language};
use docwright::cli::{Cli, Commands};
use docwright::config::{discover_config, load_config, AnalyzerConfig};
use docwright::core::Language;
use docwright::errors::to_json_value;
use docwright::testgen::generate_test_cases;
use docwright::{CodeReviewer, DocumentAnalyzer};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = resolve_config(cli.config.as_deref())?;
    let output = run(cli.command, config)?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    if output.get("error").is_some() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("DOCWRIGHT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn resolve_config(path: Option<&Path>) -> Result<AnalyzerConfig> {
    let config = match path {
        Some(path) => load_config(path)?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            discover_config(&cwd)?
        }
    };
    Ok(config)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// An explicit `--language` wins, then the file extension, then content
/// detection. Stdin has no extension.
fn resolve_language(explicit: Option<Language>, input: &Path, code: &str) -> Language {
    explicit
        .or_else(|| {
            input
                .extension()
                .and_then(|ext| ext.to_str())
                .map(Language::from_extension)
                .filter(|language| *language != Language::Unknown)
        })
        .unwrap_or_else(|| detect_language(code))
}

fn run(command: Commands, config: AnalyzerConfig) -> Result<Value> {
    let value = match command {
        Commands::Readability { input } => {
            let text = read_input(&input)?;
            to_json_value(&DocumentAnalyzer::with_defaults().and_then(|a| a.readability(&text)))
        }
        Commands::Terminology { input } => {
            let text = read_input(&input)?;
            to_json_value(&DocumentAnalyzer::with_defaults().and_then(|a| a.terminology(&text)))
        }
        Commands::Tone { input } => {
            let text = read_input(&input)?;
            to_json_value(&DocumentAnalyzer::with_defaults().and_then(|a| a.tone(&text)))
        }
        Commands::Review { input, thresholds } => {
            let code = read_input(&input)?;
            to_json_value(&thresholds.apply(config).and_then(|config| {
                CodeReviewer::with_config(config).generate_review_comments(&code)
            }))
        }
        Commands::Context { input, thresholds } => {
            let code = read_input(&input)?;
            to_json_value(&thresholds.apply(config).and_then(|config| {
                CodeReviewer::with_config(config).analyze_code_context(&code)
            }))
        }
        Commands::Quality {
            input,
            language,
            thresholds,
        } => {
            let code = read_input(&input)?;
            let language = resolve_language(language, &input, &code);
            to_json_value(
                &thresholds
                    .apply(config)
                    .and_then(|config| analyze_code_quality(&code, language, &config)),
            )
        }
        Commands::Tests { input, language } => {
            let code = read_input(&input)?;
            let language = resolve_language(language, &input, &code);
            to_json_value(&generate_test_cases(&code, language, &config))
        }
        Commands::Detect { input } => {
            let code = read_input(&input)?;
            serde_json::json!({ "language": detect_language(&code) })
        }
    };
    Ok(value)
}
