use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agenda_store::{paths, Store};
use agenda_web::router::build_router;
use agenda_web::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "agenda-web", version, about = "agenda contact-book backend")]
struct Cli {
    /// Path to a config.toml; defaults to the XDG config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Database file; overrides the config and the XDG default.
    #[arg(long)]
    db_path: Option<PathBuf>,
    /// Listen address; overrides the config.
    #[arg(long)]
    listen: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agenda_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = agenda_config::load(cli.config).context("failed to load configuration")?;
    let listen_addr = cli.listen.unwrap_or(config.listen_addr);

    let db_path = match cli.db_path.or(config.db_path) {
        Some(path) => path,
        None => paths::db_path().context("failed to resolve database path")?,
    };

    let store = Store::open(&db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;
    store.migrate().context("failed to run migrations")?;
    tracing::info!(path = %db_path.display(), "database ready");

    let app = build_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    tracing::info!("listening on {listen_addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
