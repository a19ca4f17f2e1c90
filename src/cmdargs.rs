use std::path::PathBuf;

use clap::Parser;

use crate::{git::Platform, output::OutputFormat};

/// Find the latest code submission of a repository and check it against a deadline
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Args {
    /// Telemetry URL (disabled as default)
    #[clap(long)]
    pub telemetry_url: Option<String>,

    /// GitHub API URL (https://api.github.com as default)
    #[clap(long)]
    pub github_api_url: Option<String>,

    /// Gitee API URL (https://gitee.com/api/v5 as default)
    #[clap(long)]
    pub gitee_api_url: Option<String>,

    /// Request timeout in seconds (30 as default)
    #[clap(long)]
    pub timeout: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: SubCommand,
}

#[derive(Parser, Debug)]
pub enum SubCommand {
    /// Check the latest code submission of one repository
    Check(CheckCommand),
    /// Check every repository listed in a CSV or Excel roster
    Batch(BatchCommand),
}

#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Repository full name (owner/repo)
    pub repository: String,

    /// Hosting platform (github or gitee)
    #[clap(long, default_value = "github")]
    pub platform: Platform,

    /// API token (optional for public repositories)
    #[clap(long)]
    pub token: Option<String>,

    /// Deadline (ISO 8601, e.g. 2024-03-15T18:00:00Z)
    #[clap(long)]
    pub deadline: Option<String>,

    /// Output format (table or json)
    #[clap(long, default_value = "table")]
    pub output: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct BatchCommand {
    /// Roster with a header row (.csv, .xlsx or .xls)
    pub file: PathBuf,

    /// First row to check, 1-indexed with the header as row 1 (2 as default)
    pub start_row: Option<usize>,

    /// Last row to check, inclusive (last roster row as default)
    pub end_row: Option<usize>,

    /// Deadline (ISO 8601, e.g. 2024-03-15T18:00:00Z)
    #[clap(long)]
    pub deadline: Option<String>,

    /// Header of the column holding repository addresses (substring match)
    #[clap(long, default_value = "repository")]
    pub repository_column: String,

    /// Write the updated roster here instead of <name>_processed.<ext>
    #[clap(long)]
    pub output_file: Option<PathBuf>,

    /// Repositories checked at the same time
    #[clap(long, default_value = "4")]
    pub concurrency: usize,

    /// GitHub API token
    #[clap(long)]
    pub github_token: Option<String>,

    /// Gitee API token
    #[clap(long)]
    pub gitee_token: Option<String>,
}
