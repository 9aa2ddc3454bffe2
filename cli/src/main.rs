//! AximoIX API CLI server
//!
//! Headless website backend suitable for deployment as a systemd service,
//! Docker container, or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/aximoix-api/config.toml)
//! aximoix-api
//!
//! # Custom config path, port override
//! aximoix-api --config /etc/aximoix/config.toml --port 8080
//!
//! # Serve static content only
//! aximoix-api --demo
//!
//! # Validate config without starting
//! aximoix-api --check
//!
//! # Show document store connectivity and collection counts
//! aximoix-api status
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use aximoix_api::application::{DiagnosticsService, StoreStatus};
use aximoix_api::config::AppConfig;
use aximoix_api::server::{build_store, init_tracing, ServerHandle, ServerOptions};

/// AximoIX API: services catalog, company profile and contact intake.
#[derive(Parser, Debug)]
#[command(
    name = "aximoix-api",
    version,
    about = "AximoIX website backend",
    long_about = "AximoIX API: REST backend for the AximoIX website, backed by MongoDB \
                  with static-content fallback.\n\n\
                  Default config: ~/.config/aximoix-api/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = aximoix_api::CONFIG_PATH_ENV, global = true)]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Run without a document store; serve static content only.
    #[arg(long)]
    demo: bool,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ping the document store and list collections with document counts.
    Status,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(aximoix_api::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    // Init tracing first so subsequent logs are formatted properly
    init_tracing(&config);

    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            if cli.check {
                eprintln!("❌ {}", e);
                return ExitCode::FAILURE;
            }
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Apply environment and CLI overrides ────────────────────
    if let Err(e) = config.apply_env() {
        error!("{}", e);
        return ExitCode::FAILURE;
    }
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        let db = config.database_config();
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Database    : {} / {}", db.redacted_url(), db.name);
        let demo = if cli.demo {
            "forced"
        } else if db.demo_mode_on_failure {
            "on store failure"
        } else {
            "off"
        };
        println!("   Demo mode   : {}", demo);
        println!("   Log level   : {} ({})", config.logging.level, config.logging.format);
        return ExitCode::SUCCESS;
    }

    if let Some(Command::Status) = cli.command {
        return store_status(&config, cli.demo).await;
    }

    // ── Start server ───────────────────────────────────────────
    let handle = match ServerHandle::start(ServerOptions {
        config,
        force_demo: cli.demo,
    })
    .await
    {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start server: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.wait().await;

    ExitCode::SUCCESS
}

async fn store_status(config: &AppConfig, force_demo: bool) -> ExitCode {
    let store = match build_store(config, force_demo).await {
        Ok(store) => std::sync::Arc::new(store),
        Err(e) => {
            eprintln!("❌ Document store client could not be created: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let diagnostics = DiagnosticsService::new(store, config.database.name.clone());

    let probe = diagnostics.probe().await;
    match probe.status {
        StoreStatus::Connected => println!(
            "✅ Connected to {} ({} ms)",
            diagnostics.database(),
            probe.latency_ms.unwrap_or_default()
        ),
        StoreStatus::Demo => {
            println!("ℹ️  Demo mode: no document store configured");
            return ExitCode::SUCCESS;
        }
        StoreStatus::Disconnected => {
            println!("❌ Document store unreachable");
            return ExitCode::FAILURE;
        }
    }

    match diagnostics.collection_counts().await {
        Ok(report) if report.collections.is_empty() => {
            println!("   (no collections)");
            ExitCode::SUCCESS
        }
        Ok(report) => {
            for (name, count) in report.collections {
                println!("   {:<12} {}", name, count);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("❌ Failed to list collections: {}", e);
            ExitCode::FAILURE
        }
    }
}
