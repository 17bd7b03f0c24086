use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Report projection selected on the command line
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Summary,
    Csv,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" | "md" => Ok(OutputFormat::Summary),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'summary', 'csv' or 'json'",
                s
            )),
        }
    }
}

/// Audit pinned dependency declarations against a denylist and PyPI
#[derive(Parser, Debug)]
#[command(name = "req-audit")]
#[command(version)]
#[command(about = "Audit requirements files against a denylist and the latest registry versions", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Audit a requirements file and persist the report artifacts
    Audit {
        /// Path to the requirements-style file to audit
        file: PathBuf,

        /// Output format: summary, csv or json
        #[arg(short, long, default_value = "summary")]
        format: OutputFormat,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Directory where report artifacts are stored
        #[arg(long, value_name = "DIR")]
        storage_dir: Option<PathBuf>,

        /// Config file path (defaults to ./req-audit.config.yml when present)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Denylisted package name (replaces the configured denylist)
        /// Can be specified multiple times: -d "malware-lib" -d "banned-lib"
        #[arg(short, long = "deny", value_name = "NAME")]
        deny: Vec<String>,
    },

    /// Serve the audit HTTP API
    Serve {
        /// Listen address, e.g. 127.0.0.1:8080
        #[arg(short, long)]
        listen: Option<SocketAddr>,

        /// Directory where uploads and report artifacts are stored
        #[arg(long, value_name = "DIR")]
        storage_dir: Option<PathBuf>,

        /// Config file path (defaults to ./req-audit.config.yml when present)
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
