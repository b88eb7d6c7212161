//! pitwall - motorsport telemetry client
//!
//! Terminal front end with three pages:
//! - Live telemetry
//! - Session replay
//! - Driver analytics
//!
//! Usage: pitwall [--help] [--version] [PATH]

mod app;
mod bootstrap;
mod config;
mod pages;
mod router;
mod types;
mod ui;

use anyhow::{bail, Context, Result};
use std::fs;

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Version,
    Run { path: Option<String> },
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = parse_args(&args).and_then(|command| match command {
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            println!("pitwall {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Run { path } => start(path),
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut path = None;
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            flag if flag.starts_with('-') => bail!("Unknown option {:?} (see --help)", flag),
            value => {
                if path.is_some() {
                    bail!("Only one start path may be given");
                }
                path = Some(value.to_string());
            }
        }
    }
    Ok(Command::Run { path })
}

fn start(path: Option<String>) -> Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let config = config::Config::load().context("Failed to load configuration")?;
    let initial_path = path.unwrap_or_else(|| config.start_path.clone());

    bootstrap::run(config, &initial_path)
}

/// Log to a file (truncated on each run); the terminal belongs to the UI
fn init_logging() -> Result<()> {
    let dir = dirs::cache_dir()
        .context("Could not determine cache directory")?
        .join("pitwall");
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {:?}", dir))?;

    let path = dir.join("pitwall.log");
    let log_file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()
        .context("Logger already initialized")?;
    Ok(())
}

fn print_help() {
    println!(
        r#"pitwall - motorsport telemetry client

USAGE:
    pitwall [OPTIONS] [PATH]

ARGS:
    PATH             Page to open (default: start_path from config, "/")

OPTIONS:
    -h, --help       Print help information
    -v, --version    Print version information

PATHS:
    /                   Redirects to /live
    /live               Live telemetry
    /replay             Session replay
    /driver-analytics   Driver analytics

KEYBINDINGS:
    1-3              Switch pages
    Tab/Shift-Tab    Next/previous page
    g or :           Go to a path
    h/Backspace, l   History back/forward
    q, Ctrl-C        Quit

CONFIG:
    ~/.config/pitwall/config.toml
LOG:
    ~/.cache/pitwall/pitwall.log   (level via RUST_LOG)
"#
    );
}
