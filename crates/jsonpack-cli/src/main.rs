use std::io::{Write, stderr, stdout};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use jsonpack::{Object, Options};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "jsonpack-cli",
    about = "Print a packed JSON record",
    version
)]
struct Args {}

fn record() -> jsonpack::Result<Object> {
    jsonpack::pack!("{s:i, s:s}", "id", 1, "name", "Alice")
}

/// Build, serialize, then write the whole line at once; nothing reaches `out` on failure.
fn run<W: Write>(build: impl FnOnce() -> jsonpack::Result<Object>, out: &mut W) -> Result<()> {
    let obj = build().context("construction failed")?;
    let mut line = jsonpack::to_string_with(&obj, &Options::default())
        .context("serialization failed")?;
    line.push('\n');

    out.write_all(line.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Exit status for `result`, reporting a failure as one line on `err`.
fn report<E: Write>(result: Result<()>, err: &mut E) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            let _ = writeln!(err, "{:#}", e);
            1
        }
    }
}

fn main() -> ExitCode {
    let _args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(record, &mut stdout().lock());
    ExitCode::from(report(result, &mut stderr().lock()))
}
