//! w3query command-line tool
//!
//! Inspect, validate and submit w3 query payloads:
//! - Print the match-all query
//! - Check a payload and print its canonical encoding
//! - Submit a payload to the configured engine
//!
//! # Examples
//!
//! ```bash
//! # Canonical "no filter" query
//! w3query all
//!
//! # Validate a payload read from stdin
//! echo '{"Search":{"Op":"AND","Query":[]}}' | w3query check
//!
//! # Send a payload file to the engine
//! W3QUERY_ENGINE__PROGRAM=./testquery w3query run query.json
//! ```

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use w3query::config::Config;
use w3query::{match_all, submit, wire, Payload};

/// w3query - typed query payloads for the w3 engine
#[derive(Parser, Debug)]
#[command(name = "w3query")]
#[command(version = w3query::VERSION)]
#[command(about = "Build, check and submit w3 query payloads", long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "W3QUERY_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG directives are added on top
    #[arg(long, global = true, default_value = "warn", env = "W3QUERY_LOG_LEVEL")]
    log_level: String,

    /// Also write logs to daily files in this directory
    #[arg(long, global = true, env = "W3QUERY_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Indent encoded output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the match-all query
    All,

    /// Validate a payload and print its canonical encoding
    Check(InputArgs),

    /// Validate a payload and submit it to the engine
    Run(InputArgs),

    /// Print the effective configuration
    Config,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Payload file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Print the condition tree instead of JSON
    #[arg(long)]
    tree: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so file logs are flushed on exit
    let _guard = setup_logging(&cli)?;

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let pretty = cli.pretty || config.output.pretty;

    match cli.command {
        Commands::All => print_payload(&Payload::from(match_all()), pretty),
        Commands::Check(args) => {
            let payload = read_payload(&args)?;
            if args.tree {
                print_tree(&payload);
                Ok(())
            } else {
                print_payload(&payload, pretty)
            }
        }
        Commands::Run(args) => {
            let payload = read_payload(&args)?;
            let engine = config.engine()?;
            info!(kind = payload.kind(), program = %engine.program().display(), "Submitting payload");
            let answer = submit(&engine, &payload).context("Engine request failed")?;
            println!("{}", answer.trim_end());
            Ok(())
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Setup logging to stderr, plus rolling files when a directory is given
fn setup_logging(cli: &Cli) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let log_level = cli
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::WARN);

    let console = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match &cli.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "w3query.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .init();

    Ok(guard)
}

/// Read, decode and validate a payload
fn read_payload(args: &InputArgs) -> anyhow::Result<Payload> {
    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    let payload = wire::decode_payload(&text)?;
    debug!(kind = payload.kind(), "Decoded payload");

    if let Some(condition) = payload.condition() {
        condition.validate().context("Invalid search condition")?;
    }
    Ok(payload)
}

fn print_payload(payload: &Payload, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        wire::encode_pretty(payload)?
    } else {
        wire::encode(payload)?
    };
    println!("{}", text);
    Ok(())
}

fn print_tree(payload: &Payload) {
    match payload {
        Payload::Search(query) => {
            println!("{}", query.search.pretty_print(0));
            if let Some(offset) = query.offset {
                println!("offset: {}", offset);
            }
            if let Some(limit) = query.limit {
                println!("limit: {}", limit);
            }
            for key in &query.sort {
                println!("sort: {} {}", key.col, key.dir);
            }
        }
        other => println!("{} payload", other.kind()),
    }
}
