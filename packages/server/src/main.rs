#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Sentencing dashboard server binary.
//!
//! ```text
//! sentencing_server [--config server.toml] [--data cases.csv]
//!                   [--bind-addr 127.0.0.1] [--port 8080] [--page-size 50]
//! sentencing_server --interactive
//! ```

use std::path::PathBuf;

use clap::Parser;
use sentencing_server::{ConfigOverrides, ServerConfig};

#[derive(Parser)]
#[command(
    name = "sentencing_server",
    about = "Serve the sentencing analytics dashboard API"
)]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Cases CSV to load
    #[arg(long)]
    data: Option<PathBuf>,
    /// Address to bind
    #[arg(long)]
    bind_addr: Option<String>,
    /// Port to bind
    #[arg(long)]
    port: Option<u16>,
    /// Default detail table page size
    #[arg(long)]
    page_size: Option<usize>,
    /// Prompt for the configuration before starting
    #[arg(long)]
    interactive: bool,
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    let config = ServerConfig::resolve(
        cli.config.as_deref(),
        ConfigOverrides {
            data_path: cli.data,
            bind_addr: cli.bind_addr,
            port: cli.port,
            page_size: cli.page_size,
        },
    )?;

    if cli.interactive {
        sentencing_server::interactive::run(config).await?;
    } else {
        sentencing_server::run_server(config).await?;
    }

    Ok(())
}
