use anyhow::{Context, Result};
use pacsv::{
    cli::{help_text, Cli, Invocation},
    process_record, report, SchemaRegistry,
};
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging (stderr; stdout carries the report) ─────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();
    info!("startup");

    // ─── 2) resolve arguments ────────────────────────────────────────
    let config = match Cli::parse_args().into_invocation() {
        Invocation::Run(config) => config,
        Invocation::Help => {
            print!("{}", help_text());
            return Ok(());
        }
        Invocation::Rejected(err) => {
            println!("ERROR: {}\n", err);
            print!("{}", help_text());
            return Ok(());
        }
    };
    debug!(category = %config.category, format = ?config.format, "resolved invocation");

    // ─── 3) label + validate ─────────────────────────────────────────
    let registry = SchemaRegistry::new();
    let record = process_record(&registry, config.category, &config.input)
        .with_context(|| format!("processing {} log", config.category))?;

    // ─── 4) present ──────────────────────────────────────────────────
    let rendered = report::render(&record, config.format)?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("writing report to stdout")?;
    stdout.flush()?;

    info!("done");
    Ok(())
}
