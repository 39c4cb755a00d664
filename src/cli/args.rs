//! CLI argument definitions using clap.

use clap::Parser;

/// Fetch a randomly generated insult from the LibInsult API.
#[derive(Parser, Debug)]
#[command(name = "barb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the person or group the insult is aimed at
    #[arg(long, value_name = "NAME")]
    pub who: Option<String>,

    /// Treat the target as grammatically plural (only with --who)
    #[arg(long)]
    pub plural: bool,

    /// Insult language
    #[arg(long, value_name = "CODE", default_value = "en")]
    pub lang: String,

    /// Response format for --raw output (html, json, txt)
    #[arg(long, value_name = "FORMAT", default_value = "json")]
    pub format: String,

    /// Print the raw service response instead of the extracted insult
    #[arg(long)]
    pub raw: bool,

    /// Print the composed request URL and exit without calling the service
    #[arg(long)]
    pub url: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value = "30")]
    pub timeout: u64,

    /// Override the service base URL
    #[arg(long, value_name = "URL", env = "BARB_BASE_URL", hide = true)]
    pub base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit JSONL logs to stderr
    #[arg(long)]
    pub json_output: bool,

    /// Verbose output (sets log level to debug)
    #[arg(short, long)]
    pub verbose: bool,
}
