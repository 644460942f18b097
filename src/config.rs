use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::render::View;
use crate::types::MAX_FILE_SIZE;

/// Load a sales CSV and print dashboard views as JSON.
#[derive(Debug, Parser)]
#[command(name = "sales-dashboard", version, about)]
pub struct Cli {
    /// Sales CSV with `date,product,quantity,revenue` columns
    pub input: PathBuf,

    /// View to print
    #[arg(long, value_enum, env = "SALES_DASHBOARD_VIEW", default_value_t = View::All)]
    pub view: View,

    /// One of: error, warn, info, debug, trace
    #[arg(long, env = "SALES_DASHBOARD_LOG", default_value = "error")]
    pub log_level: String,

    /// Largest accepted upload in bytes
    #[arg(long, default_value_t = MAX_FILE_SIZE)]
    pub max_file_size: u64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool
}

impl Cli {
    pub fn log_filter(&self) -> LevelFilter {
        parse_log_level(&self.log_level)
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
