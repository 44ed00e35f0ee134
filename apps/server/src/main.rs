//! Sitesmith — branded front-end template generation service.
//!
//! Accepts a business's branding details and a URL to scrape, extracts up
//! to three article links, and streams back a ready-to-build React
//! starter project as a zip archive.

mod config;
mod error;
mod handler;
mod router;
mod server;

use clap::Parser;
use color_eyre::eyre::Result;

use config::{DEFAULT_PORT, ServerConfig};
use server::Server;

/// Sitesmith template generation server.
#[derive(Parser)]
#[command(
    name = "sitesmith",
    version,
    about = "Generate branded React starter projects from scraped content.",
    long_about = None,
)]
struct Args {
    /// TCP port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let args = Args::parse();
    let server = Server::new(ServerConfig { port: args.port })?;
    server.serve().await?;
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
