use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use naiken::core::config;
use naiken::tui;

#[derive(Parser)]
#[command(name = "naiken", about = "Record and compare rental apartment viewings")]
struct Args {
    /// Alternate config file (default: ~/.naiken/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to naiken.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("naiken.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config(args.config.as_deref())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let resolved = config::resolve(&file_config);

    log::info!("naiken starting up (currency: {})", resolved.currency);

    tui::run(resolved)
}
