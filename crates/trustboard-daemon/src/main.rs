// crates/trustboard-daemon/src/main.rs
//
// Binary entrypoint for the Trustboard daemon.
//
// Parses CLI arguments, loads configuration, initializes tracing, restores
// the snapshot, rebuilds the leaderboard index and serves HTTP until Ctrl-C.

mod config;
mod persistence;

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use config::DaemonConfig;
use persistence::SnapshotFlusher;

use trustboard_rpc::TrustboardRpcServer;
use trustboard_scoring::TrustScoreEngine;
use trustboard_service::TrustService;
use trustboard_store::InMemoryRepository;

/// Trustboard daemon: serves the influencer trust leaderboard over HTTP.
#[derive(Parser, Debug)]
#[command(name = "trustboard-daemon", version = "0.1.0", about = "Trustboard leaderboard daemon")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "~/.trustboard/config.toml")]
    config: String,

    /// Override the HTTP bind host.
    #[arg(long)]
    rpc_host: Option<String>,

    /// Override the HTTP port.
    #[arg(long)]
    rpc_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    let args = Args::parse();

    // The config decides the fallback log level, so load it before tracing
    // is up and report the outcome afterwards.
    let loaded = DaemonConfig::load(&args.config);
    let mut daemon_config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => DaemonConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&daemon_config.log_level)),
        )
        .init();

    match loaded {
        Ok(_) => tracing::info!("Loaded configuration from {}", args.config),
        Err(e) => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            args.config,
            e
        ),
    }

    // CLI flags override the config file.
    if let Some(host) = args.rpc_host {
        daemon_config.rpc_host = host;
    }
    if let Some(port) = args.rpc_port {
        daemon_config.rpc_port = port;
    }

    tracing::info!("Trustboard Daemon v0.1.0");
    tracing::info!(
        "HTTP endpoint: {}:{}",
        daemon_config.rpc_host,
        daemon_config.rpc_port
    );
    tracing::info!("Scoring: {:?}", daemon_config.scoring);

    // ---------------------------------------------------------------
    // Repository and service
    // ---------------------------------------------------------------
    let snapshot_path = daemon_config.snapshot_path();
    let repository = if daemon_config.snapshot_enabled {
        Arc::new(persistence::restore(&snapshot_path).await?)
    } else {
        tracing::info!("Snapshots disabled; state lives in memory only");
        Arc::new(InMemoryRepository::new())
    };

    let engine = TrustScoreEngine::new(daemon_config.scoring.clone());
    let service = TrustService::new(repository.clone(), Arc::new(engine));
    let indexed = service.ingest.rebuild_index().await?;
    tracing::info!("{} influencers on the leaderboard", indexed);

    // ---------------------------------------------------------------
    // Background snapshot flushing
    // ---------------------------------------------------------------
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let flusher_task = if daemon_config.snapshot_enabled {
        let flusher = SnapshotFlusher::new(
            repository.clone(),
            snapshot_path,
            daemon_config.snapshot_interval_secs,
        );
        Some(tokio::spawn(flusher.run(shutdown_rx)))
    } else {
        None
    };

    // ---------------------------------------------------------------
    // HTTP server (foreground)
    // ---------------------------------------------------------------
    let server = TrustboardRpcServer::new(daemon_config.rpc_config(), service)
        .with_start_time(start_time);
    let shutdown = async move {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
    };
    let served = server.start_with_shutdown(shutdown).await;

    // The shutdown future owns the sender, so the flusher also stops when
    // the server exits early.
    if let Some(task) = flusher_task {
        if let Err(e) = task.await {
            tracing::error!("Snapshot flusher panicked: {}", e);
        }
    }

    served?;
    tracing::info!("Trustboard daemon shut down gracefully");
    Ok(())
}
