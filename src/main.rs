//! # BASIC
//!
//! Runs a program file, or starts an interactive session when no file is
//! given.
//!

use basic::term;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "basic")]
#[command(about = "A line-numbered BASIC interpreter", long_about = None)]
struct Args {
    /// Program file to load and run (if not provided, reads from stdin)
    file: Option<PathBuf>,

    /// Columns between tab stops
    #[arg(long, default_value_t = 8)]
    tab_size: usize,
}

fn main() {
    let args = Args::parse();

    // BASIC_LOG takes precedence over RUST_LOG; default to WARN
    let filter = EnvFilter::try_from_env("BASIC_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = match &args.file {
        Some(path) => term::run_file(path, args.tab_size),
        None if atty::is(atty::Stream::Stdin) => term::interactive(args.tab_size).map(|_| true),
        None => term::piped(args.tab_size).map(|_| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            match &args.file {
                Some(path) => eprintln!("basic: {}: {}", path.display(), error),
                None => eprintln!("basic: {}", error),
            }
            std::process::exit(2);
        }
    }
}
