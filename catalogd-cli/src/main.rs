//! catalogd - catalog tagging service
//!
//! Serves items, categories, and their many-to-many tagging
//! relationship over HTTP, persisting to a local SQLite database.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use catalogd_server::db::{create_pool, migrations};
use catalogd_server::{run_server, ServerConfig};
use clap::Parser;

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "catalogd",
    author,
    version,
    about = "Catalog tagging service: items, categories, and the links between them"
)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Path to the SQLite database file (default: ~/.catalogd/catalog.db)
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Allow requests from any origin instead of localhost only
    #[arg(long)]
    cors_permissive: bool,

    /// Enable debug logging (same as RUST_LOG=debug)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init_tracing(&tracing_setup::TracingConfig { debug: cli.debug })?;

    let db_path = match cli.db_path {
        Some(path) => path,
        None => default_db_path().context("could not determine home directory")?,
    };

    let pool = create_pool(&db_path)
        .await
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;
    migrations::run(&pool)
        .await
        .context("failed to run migrations")?;

    tracing::info!(db = %db_path.display(), addr = %cli.bind, "catalogd starting");

    let config = ServerConfig {
        bind_addr: cli.bind,
        cors_permissive: cli.cors_permissive,
    };
    run_server(pool, config).await?;

    Ok(())
}

fn default_db_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".catalogd").join("catalog.db"))
}
