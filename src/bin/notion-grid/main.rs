use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use spdlog::{info, warn};

use notion_grid::logger::configure_logger;
use notion_grid::server::server_run;

use crate::config::open_config;
use crate::config_data::write_sample_cfg;

mod config;
mod config_data;

const CFG_FILE_NAME: &str = "notion-grid.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Write a sample configuration to this path and exit
    #[arg(long)]
    sample_config: Option<String>,
}

#[ntex::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = args.sample_config {
        let path = PathBuf::from(path);
        write_sample_cfg(&path)?;
        println!("Sample config written to {}", path.display());
        return Ok(());
    }

    let config_path = args.config_path.map(PathBuf::from);
    let config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run notion-grid --help");
            return Ok(());
        }
    };

    if let Err(err) = configure_logger(config.log.as_ref()) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Starting notion-grid =-=-=-=-=-=-=-=-=-=-=-=-=-=-=-");
    info!("Listening on {}:{}", config.server.address, config.server.port);

    server_run(config).await
}
