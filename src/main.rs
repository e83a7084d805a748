//! Command-line entry point: `haags [TEXT]... [--strict]`.

use clap::Parser;
use haags::{Haags, HaagsError};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

/// Translate Dutch text to Haags.
#[derive(Parser)]
#[command(name = "haags")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Text to translate; read from stdin when omitted.
    text: Vec<String>,

    /// Fail on invalid hyphenation instead of treating the word as one syllable.
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
    #[error(transparent)]
    Haags(#[from] HaagsError),
}

fn run(cli: Cli) -> Result<String, CliError> {
    let input = if cli.text.is_empty() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        cli.text.join(" ")
    };

    let mut builder = Haags::builder();
    if cli.strict {
        builder = builder.strict();
    }
    let haags = builder.build()?;
    Ok(haags.translate(&input)?)
}

fn main() {
    // WARN by default, RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(translated) => {
            print!("{translated}");
            if !translated.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
