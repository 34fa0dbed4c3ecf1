//! Print each character in a closed range with its code point in binary.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use primer::core::binary_table::build_table;
use primer::exit_codes;
use primer::io::config::{DEFAULT_CONFIG_PATH, load_config};
use primer::io::render::{Format, write_table};
use primer::logging;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "binary-reps",
    version,
    about = "Print characters with the binary form of their code points"
)]
struct Cli {
    /// Config file overriding the built-in 'A'..='F' range.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() {
    let cli = parse_cli();
    logging::init();
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

/// Parse arguments, mapping usage errors to `exit_codes::INVALID`.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(exit_codes::INVALID);
        }
        Err(err) => err.exit(),
    }
}

fn run(cli: Cli) -> Result<()> {
    let cfg = load_config(&cli.config)?;
    let range = cfg.binary_table.range();
    let table = build_table(range.clone());
    debug!(start = ?range.start(), end = ?range.end(), entries = table.len(), "table built");

    let mut stdout = io::stdout().lock();
    write_table(&mut stdout, &table, cli.format)?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}
