mod answer;
mod core;
mod intake;
#[cfg(test)]
mod test_support;
mod tui;

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::core::config;

#[derive(Parser)]
#[command(name = "consulta", about = "Terminal client for the document Q&A workshop")]
struct Args {
    /// Document to upload on startup (PDF or TXT)
    document: Option<PathBuf>,

    /// Query endpoint URL (implies remote mode)
    #[arg(long)]
    endpoint: Option<String>,

    /// Never contact the remote service; answer from the local responder
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to consulta.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("consulta.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        config::WorkshopConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        config::CliOverrides {
            endpoint: args.endpoint.as_deref(),
            offline: args.offline,
        },
    );

    log::info!(
        "Consulta starting up (remote: {}, endpoint: {})",
        resolved.use_remote,
        resolved.query_endpoint
    );

    tui::run(resolved, args.document)
}
