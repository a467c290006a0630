//! `json-dot-path` — look up a dotted path (`a.b.c`) in a JSON document.
//!
//! Usage:
//!   json-dot-path [--raw] [--file <FILE>] '<path>'
//!   json-dot-path --paths [--include-empty] [--under <PREFIX>] [--file <FILE>]
//!
//! The document is read from stdin unless `--file` is given.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use json_dot_path::cli::{list_paths, lookup, lookup_string, CliError};
use json_dot_path::EnumerateOptions;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "json-dot-path")]
#[command(version)]
#[command(about = "Look up dotted paths in a JSON document", long_about = None)]
struct Cli {
    /// Dotted path to look up, e.g. `server.tls.cert`
    #[arg(required_unless_present = "paths", conflicts_with = "paths")]
    path: Option<String>,

    /// Read the document from a file instead of stdin
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print strings without quotes and other values as compact JSON
    #[arg(short, long)]
    raw: bool,

    /// List every leaf path instead of looking one up
    #[arg(long)]
    paths: bool,

    /// With --paths, list empty objects as leaves
    #[arg(long, requires = "paths")]
    include_empty: bool,

    /// With --paths, only list paths below this prefix
    #[arg(long, requires = "paths")]
    under: Option<String>,
}

fn read_document(file: Option<&PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli, doc: &str) -> Result<String, CliError> {
    if cli.paths {
        let options = EnumerateOptions {
            include_empty_objects: cli.include_empty,
        };
        return Ok(list_paths(doc, &options, cli.under.as_deref())?.join("\n"));
    }
    let path = cli.path.as_deref().unwrap_or_default();
    if cli.raw {
        lookup_string(doc, path)
    } else {
        lookup(doc, path)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let doc = match read_document(cli.file.as_ref()) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, doc.trim()) {
        Ok(out) => {
            let mut stdout = io::stdout().lock();
            if writeln!(stdout, "{out}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "lookup failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
