use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use swt::Swt;

mod config;

use config::{CliConfig, SECRET_ENV};

/// Issue and verify signed tokens.
#[derive(Debug, Parser)]
#[command(name = "swt", version, about)]
struct Cli {
    /// Path to the YAML config file (defaults to ./swt.yaml when present).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Read and print payloads as hex instead of text.
    #[arg(long, global = true)]
    hex: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a fresh random secret.
    Keygen,
    /// Issue a token for a payload.
    Issue {
        #[arg(allow_hyphen_values = true)]
        payload: String,
    },
    /// Check a token's signature.
    Verify {
        #[arg(allow_hyphen_values = true)]
        token: String,
    },
    /// Print a token's payload WITHOUT checking its signature.
    Extract {
        #[arg(allow_hyphen_values = true)]
        token: String,
    },
    /// Verify a token and print its payload.
    Open {
        #[arg(allow_hyphen_values = true)]
        token: String,
    },
}

fn main() -> ExitCode {
    // Enable basic logging; set RUST_LOG=debug to see why tokens are rejected.
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match &cli.command {
        Command::Keygen => println!("{}", swt::generate_secret()),
        // Extraction needs no key.
        Command::Extract { token } => {
            let payload = swt::extract(token).context("cannot extract payload")?;
            println!("{}", render_payload(&payload, cli.hex));
        }
        Command::Issue { payload } => {
            let payload = parse_payload(payload, cli.hex)?;
            let token = build_engine(&cli)?.issue(&payload)?;
            info!("issued token for {} byte payload", payload.len());
            println!("{token}");
        }
        Command::Verify { token } => match build_engine(&cli)?.verify(token) {
            Ok(()) => println!("valid"),
            Err(err) => return Ok(reject(&err)),
        },
        Command::Open { token } => match build_engine(&cli)?.open(token) {
            Ok(payload) => println!("{}", render_payload(&payload, cli.hex)),
            Err(err) => return Ok(reject(&err)),
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn build_engine(cli: &Cli) -> Result<Swt> {
    let config = CliConfig::discover(cli.config.as_deref())?;
    let secret = config.resolve_secret(std::env::var(SECRET_ENV).ok())?;
    Swt::with_config(secret.as_bytes(), config.engine_config()).context("failed to create engine")
}

// Every rejection looks the same to the caller; the cause only goes to the log.
fn reject(err: &swt::SwtError) -> ExitCode {
    warn!("token rejected: {}", err.kind());
    eprintln!("token rejected");
    ExitCode::FAILURE
}

fn parse_payload(input: &str, as_hex: bool) -> Result<Vec<u8>> {
    if as_hex {
        hex::decode(input).context("payload is not valid hex")
    } else {
        Ok(input.as_bytes().to_vec())
    }
}

fn render_payload(payload: &[u8], as_hex: bool) -> String {
    if as_hex {
        hex::encode(payload)
    } else {
        String::from_utf8_lossy(payload).into_owned()
    }
}
