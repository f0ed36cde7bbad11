//! `api-base`: print the configured API base URL, or paths joined onto it.
//!
//! Configuration is read from the process environment after loading a
//! dotenv file (`--env-file`, or `./.env` when present).

mod cli;
mod output;

use std::io::{self, Write};
use std::process;

use anyhow::Context;
use api_base::ApiBase;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::output::Report;

const EXIT_OK: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_INVALID_URL: i32 = 2;

/// `RUST_LOG` (default `warn`), with `--verbose` raising everything to at
/// least `debug`.
fn log_filter(verbose: bool) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_env(args: &Args) -> anyhow::Result<()> {
    match &args.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("failed to load env file '{}'", path.display()))?;
            info!(path = %path.display(), "loaded environment file");
        }
        None => match dotenvy::dotenv() {
            Ok(path) => info!(path = %path.display(), "loaded environment file"),
            Err(e) if e.not_found() => debug!("no .env file found, using process environment"),
            Err(e) => return Err(e).context("failed to load .env file"),
        },
    }
    Ok(())
}

/// Resolve, check and print. Returns the process exit code; `Err` means
/// configuration could not be loaded.
fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<i32> {
    load_env(args)?;

    let base = match &args.base {
        Some(url) => ApiBase::new(url.as_str()),
        None => ApiBase::from_env(),
    };
    debug!(base = %base, default = base.is_default(), "using API base URL");

    let report = Report::build(base, &args.paths);

    if args.check {
        let failures = report.check();
        for e in &failures {
            error!("{e}");
        }
        if !failures.is_empty() {
            return Ok(EXIT_INVALID_URL);
        }
    }

    let rendered = if args.json {
        report.render_json().context("failed to render JSON")?
    } else {
        report.render_lines()
    };
    writeln!(out, "{rendered}").context("failed to write output")?;
    Ok(EXIT_OK)
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let code = match run(&args, &mut io::stdout().lock()) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            EXIT_ERROR
        }
    };
    process::exit(code);
}
