//! Print the oldest person from the roster.
//!
//! A missing age counts as zero; ties go to the first person listed. The
//! roster is fixed unless `primer.toml` overrides it.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use primer::core::oldest::oldest;
use primer::exit_codes;
use primer::io::config::{DEFAULT_CONFIG_PATH, load_config};
use primer::io::render::{Format, write_oldest};
use primer::logging;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "oldest", version, about = "Print the oldest person from the roster")]
struct Cli {
    /// Config file overriding the built-in roster.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() {
    let cli = parse_cli();
    logging::init();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
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

fn run(cli: Cli) -> Result<i32> {
    let cfg = load_config(&cli.config)?;
    let roster = &cfg.oldest.roster;
    debug!(people = roster.len(), "roster loaded");

    let Some(person) = oldest(roster) else {
        eprintln!("no oldest person: roster is empty");
        return Ok(exit_codes::EMPTY);
    };
    info!(name = %person.name, age = ?person.age, "selected oldest");

    let mut stdout = io::stdout().lock();
    write_oldest(&mut stdout, person, cli.format)?;
    stdout.flush().context("flush stdout")?;
    Ok(exit_codes::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_args_uses_defaults() {
        let cli = Cli::parse_from(["oldest"]);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(cli.format, Format::Text);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::parse_from(["oldest", "--format", "json", "--config", "x.toml"]);
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.config, PathBuf::from("x.toml"));
    }
}
