//! Card deck HTTP server.
//!
//! Serves the deck API from an in-memory deck store.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Error};
use card_deck::{DeckManager, InMemoryDeckStore, SeededShuffler, Shuffler, ThreadRngShuffler};
use deck_server::{
    api::{self, AppState},
    config::ServerConfig,
    logging, metrics,
};
use pico_args::Arguments;
use tracing::info;

const HELP: &str = "\
Run a card deck server

USAGE:
  deck_server [OPTIONS]

OPTIONS:
  --bind          IP:PORT  Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:8080]
  --shuffle-seed  N        Fixed seed for reproducible shuffles  [default: env DECK_SHUFFLE_SEED or random]
  --metrics-bind  IP:PORT  Prometheus exporter address  [default: env METRICS_BIND or disabled]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  DECK_SHUFFLE_SEED        Shuffle seed (u64)
  METRICS_BIND             Prometheus exporter address (e.g., 0.0.0.0:9090)
  RUST_LOG                 Log filter (e.g., info,card_deck=debug)
";

struct Args {
    bind: Option<SocketAddr>,
    shuffle_seed: Option<u64>,
    metrics_bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        bind: pargs.opt_value_from_str("--bind")?,
        shuffle_seed: pargs.opt_value_from_str("--shuffle-seed")?,
        metrics_bind: pargs.opt_value_from_str("--metrics-bind")?,
    };

    let config = ServerConfig::from_env(args.bind, args.shuffle_seed, args.metrics_bind)?;
    config.validate()?;

    logging::init();
    info!("Starting card deck server at {}", config.bind);

    if let Some(metrics_bind) = config.metrics_bind {
        metrics::init_metrics(metrics_bind).map_err(Error::msg)?;
        info!("Prometheus metrics exposed at http://{}/metrics", metrics_bind);
    }

    let shuffler: Arc<dyn Shuffler> = match config.shuffle_seed {
        Some(seed) => {
            info!("Shuffling with fixed seed {}", seed);
            Arc::new(SeededShuffler::new(seed))
        }
        None => Arc::new(ThreadRngShuffler),
    };

    let deck_manager = Arc::new(DeckManager::with_shuffler(
        Arc::new(InMemoryDeckStore::new()),
        shuffler,
    ));

    let app = api::create_router(AppState { deck_manager });

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
}
