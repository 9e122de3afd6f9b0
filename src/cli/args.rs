//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};

/// Startup Idea Analyzer - LLM-backed founder research with provider failover.
#[derive(Parser, Debug)]
#[command(name = "sia")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // === Global flags ===
    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long, global = true)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the effective output format.
    #[must_use]
    pub const fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    Human,
    /// Stable JSON.
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a startup idea (falls back to sample content offline)
    Analyze(AnalyzeArgs),

    /// Probe all providers and show their health
    Status(StatusArgs),

    /// Keep probing on an interval while offline, showing status
    Watch(WatchArgs),
}

/// Arguments for the `analyze` command.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// The startup idea to analyze (reads stdin when omitted)
    #[arg(value_name = "IDEA")]
    pub idea: Option<String>,

    /// Skip all providers and print the bundled sample analysis
    #[arg(long)]
    pub offline: bool,
}

/// Arguments for the `status` command.
#[derive(Parser, Debug)]
pub struct StatusArgs {}

/// Arguments for the `watch` command.
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Seconds between status refreshes
    #[arg(long, default_value = "60")]
    pub interval: u64,
}

impl WatchArgs {
    /// Validate argument combinations.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.interval == 0 {
            return Err(crate::error::SiaError::Config(
                "watch interval must be greater than 0 seconds".to_string(),
            ));
        }
        Ok(())
    }
}
