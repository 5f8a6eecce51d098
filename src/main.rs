use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use full_name_parser::ParsedName;
use std::io::{self, BufRead, BufWriter, Write};
use std::process;
use tracing::warn;
use tracing_subscriber::EnvFilter;

const USAGE_ERROR: i32 = 64;
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Parser, Debug)]
#[command(
    name = "full_name_parser",
    version,
    about = "Split full names into title, first, middle, last, nickname and suffix"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Parse a name and print it as JSON, exiting with status 1 if it can't
    /// be parsed. With `-`, parse newline-separated names from stdin instead,
    /// printing an empty line for each one that can't be parsed.
    Parse {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            err.print().ok();
            process::exit(USAGE_ERROR);
        }
        Err(err) => err.exit(),
    };

    match cli.cmd {
        Cmd::Parse { name } if name.len() == 1 && name[0] == "-" => parse_stdin(),
        Cmd::Parse { name } => parse_one(&name.join(" ")),
    }
}

// RUST_LOG if set, otherwise warnings only
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

fn parse_one(input: &str) -> Result<()> {
    match ParsedName::parse(input) {
        Ok(name) => {
            println!("{}", name.to_json());
            Ok(())
        }
        Err(err) => {
            warn!(input, "{}", err);
            process::exit(1);
        }
    }
}

fn parse_stdin() -> Result<()> {
    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());

    for line in stdin.lock().lines() {
        let input = line.context("reading names from stdin")?;
        let output = match ParsedName::parse(&input) {
            Ok(name) => name.to_json(),
            Err(err) => {
                warn!(input = %input, "{}", err);
                String::new()
            }
        };

        if writeln!(out, "{}", output).is_err() {
            // Reader went away
            break;
        }
    }

    out.flush().ok();
    Ok(())
}
