use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-sieve")]
#[command(about = "Filter integer sequences and validate person records")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    /// Defaults to `filter` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Keep the numbers strictly below a threshold
    Filter {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        numbers: Vec<i64>,

        #[arg(long, allow_hyphen_values = true)]
        less_than: Option<i64>,
    },

    /// Validate a single person
    Validate {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long)]
        age: u32,

        #[arg(long, default_value = "")]
        phone: String,
    },

    /// Validate every person in a CSV file (name,age,phone_number)
    ValidateFile {
        path: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Filter {
            numbers: Vec::new(),
            less_than: None,
        })
    }
}
