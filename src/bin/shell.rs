//! lsmkv Shell Binary
//!
//! Reads commands from stdin, one per line, and prints replies to stdout.

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use lsmkv::command::Command;
use lsmkv::{Config, Engine, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// lsmkv Shell
#[derive(Parser, Debug)]
#[command(name = "lsmkv-shell")]
#[command(about = "Interactive shell over the lsmkv memtable")]
#[command(version)]
struct Args {
    /// Storage path reserved for persistent files
    #[arg(short, long, default_value = "./lsmkv_data")]
    storage: String,

    /// Log filter used when RUST_LOG is unset
    #[arg(short, long, default_value = "info")]
    log: String,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only replies
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::info!("lsmkv shell v{}", lsmkv::VERSION);

    let config = match Config::builder().storage_path(&args.storage).try_build() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let mut engine = Engine::with_config(config);

    if let Err(e) = run(&mut engine) {
        tracing::error!("Shell error: {}", e);
        process::exit(1);
    }

    tracing::info!(keys = engine.size(), "Shell stopped");
}

fn run(engine: &mut Engine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(command) => writeln!(stdout, "{}", engine.execute(command))?,
            Err(e) => {
                tracing::warn!(line = %line, "rejected command");
                writeln!(stdout, "ERR {}", e)?;
            }
        }
        stdout.flush()?;
    }

    Ok(())
}
