//! Command-line surface.
//!
//! `pacsv -t <IDS|FIREWALL> -i "<csv line>" [--format text|json]`

use clap::{CommandFactory, Parser};

use crate::error::PacsvError;
use crate::report::OutputFormat;
use crate::schema::Category;

/// A simple tool to help parse Palo Alto CSV logs.
#[derive(Parser, Debug)]
#[command(name = "pacsv", version, about, long_about = None)]
#[command(after_help = "Hopefully this makes it easier on your eyes :)")]
pub struct Cli {
    /// Type of data to be parsed (IDS, FIREWALL)
    #[arg(short = 't', long = "type", value_name = "IDS|FIREWALL")]
    pub log_type: Option<String>,

    /// One log line, e.g. "data1,data2,data3..."
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Validated invocation, ready to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub category: Category,
    pub input: String,
    pub format: OutputFormat,
}

/// What `main` should do after looking at the arguments.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(RunConfig),
    /// Nothing useful supplied; show help.
    Help,
    /// Unrecognised `--type`; show the error and help.
    Rejected(PacsvError),
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn into_invocation(self) -> Invocation {
        let (log_type, input) = match (self.log_type, self.input) {
            (Some(t), Some(i)) => (t, i),
            _ => return Invocation::Help,
        };
        match log_type.parse::<Category>() {
            Ok(category) => Invocation::Run(RunConfig {
                category,
                input,
                format: self.format,
            }),
            Err(e) => Invocation::Rejected(e),
        }
    }
}

pub fn help_text() -> String {
    Cli::command().render_help().to_string()
}
