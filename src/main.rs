#![allow(missing_docs)]

//! Replyforge CLI entry point.
//!
//! Provides `compile` and `validate` subcommands over a raw request JSON
//! file: the same inputs the extension boundary would hand the pipeline,
//! driven from the command line for inspection and debugging.

use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use replyforge::config::Settings;
use replyforge::pipeline;
use replyforge::types::RawPromptRequest;

/// Replyforge: compile reply-generation requests into prompt triples.
#[derive(Parser)]
#[command(name = "replyforge", version, about)]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Command {
    /// Compile a raw request into its system prompt, user prompt, and
    /// temperature.
    Compile {
        /// Path to the raw request JSON, or `-` for stdin.
        request: PathBuf,
        /// Print the compiled triple as JSON instead of labeled sections.
        #[arg(long)]
        json: bool,
    },
    /// Check a raw request's structure and report diagnostics.
    Validate {
        /// Path to the raw request JSON, or `-` for stdin.
        request: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().context("failed to load settings")?;
    replyforge::logging::init(&settings.runtime.log_level);

    match cli.command {
        Command::Compile { request, json } => handle_compile(&request, json, &settings),
        Command::Validate { request } => handle_validate(&request),
    }
}

/// Read and parse a raw request from a file or stdin.
fn read_request(path: &Path) -> anyhow::Result<RawPromptRequest> {
    let contents = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read request from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request file {}", path.display()))?
    };
    serde_json::from_str(&contents).context("failed to parse request JSON")
}

/// Compile a request and print the triple.
fn handle_compile(path: &Path, json: bool, settings: &Settings) -> anyhow::Result<()> {
    let mut raw = read_request(path)?;

    // The stored baselines apply when the request does not carry its own.
    if raw.base_system_prompt.is_none() && !settings.prompt.base_system_prompt.is_empty() {
        raw.base_system_prompt = Some(settings.prompt.base_system_prompt.clone());
    }
    if raw.baseline_temperature.is_none() {
        raw.baseline_temperature = Some(settings.prompt.baseline_temperature);
    }

    let compiled = pipeline::compile(&raw)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&compiled)?);
    } else {
        println!("System prompt:\n{}\n", compiled.system_prompt);
        println!("User prompt:\n{}\n", compiled.user_prompt);
        println!("Temperature: {}", compiled.temperature);
    }
    Ok(())
}

/// Validate a request's structure and exit non-zero when invalid.
fn handle_validate(path: &Path) -> anyhow::Result<()> {
    let raw = read_request(path)?;

    let result = pipeline::validate(&raw);
    if result.is_valid {
        println!("valid");
        return Ok(());
    }
    for error in &result.errors {
        eprintln!("{error}");
    }
    anyhow::bail!("request is structurally invalid")
}
