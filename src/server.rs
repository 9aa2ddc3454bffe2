//! Server runtime.
//!
//! [`ServerHandle`] owns the full lifecycle: metrics recorder, document
//! store, services, REST API and graceful shutdown.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::{error, info, warn};

use crate::application::{ContentService, DiagnosticsService};
use crate::config::AppConfig;
use crate::domain::{StaticCatalog, StoreResult};
use crate::infrastructure::{init_store, DocumentStoreAdapter};
use crate::interfaces::http::{create_api_router, AppState};
use crate::support::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the API server.
#[derive(Default)]
pub struct ServerOptions {
    pub config: AppConfig,
    /// Skip the document store entirely and serve static content only.
    pub force_demo: bool,
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running API server.
///
/// ```rust,no_run
/// use aximoix_api::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.shutdown_signal().wait().await;
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the REST API is listening on.
    pub local_addr: SocketAddr,
    /// Store adapter shared by all services.
    pub store: Arc<DocumentStoreAdapter>,

    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Start the API server.
    ///
    /// 1. Install the Prometheus metrics recorder
    /// 2. Build the document store adapter (or demo mode)
    /// 3. Wire the content and diagnostics services
    /// 4. Serve the REST API with Swagger UI
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;

        info!("Starting AximoIX API...");

        let prometheus_handle = prometheus_handle();

        let store = Arc::new(build_store(&app_cfg, opts.force_demo).await?);
        info!(mode = store.state().as_str(), "Document store ready");

        let content = Arc::new(ContentService::new(
            store.clone(),
            Arc::new(StaticCatalog::bundled()),
        ));
        let diagnostics = Arc::new(DiagnosticsService::new(
            store.clone(),
            app_cfg.database.name.clone(),
        ));

        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        let api_router = create_api_router(
            AppState::new(content, diagnostics),
            &app_cfg.cors,
            prometheus_handle,
        );

        let listener = tokio::net::TcpListener::bind(app_cfg.server.address()).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/api/docs", local_addr);

        let api_server = axum::serve(
            listener,
            api_router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            shutdown_signal.wait().await;
            info!("🛑 REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        info!("🚀 AximoIX API started.");

        Ok(Self {
            config: app_cfg,
            local_addr,
            store,
            shutdown,
            api_task,
        })
    }

    /// Get a cloneable shutdown signal.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown (non-blocking).
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for shutdown to be triggered and in-flight requests to drain,
    /// bounded by `server.shutdown_timeout`.
    pub async fn wait(self) {
        let Self {
            shutdown, api_task, ..
        } = self;

        let drained = shutdown
            .shutdown_with_cleanup(|| async move {
                match api_task.await {
                    Ok(()) => info!("REST API server stopped"),
                    Err(e) => error!("REST API server task panicked: {}", e),
                }
            })
            .await;

        if !drained {
            warn!("Some requests were still in flight at shutdown");
        }
        info!("👋 AximoIX API shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("🛑 Shutting down AximoIX API...");
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

/// Build the store adapter from config, or a demo adapter when forced.
pub async fn build_store(config: &AppConfig, force_demo: bool) -> StoreResult<DocumentStoreAdapter> {
    if force_demo {
        info!("Demo mode requested, document store disabled");
        return Ok(DocumentStoreAdapter::demo());
    }
    init_store(&config.database_config()).await
}

/// The global recorder can only be installed once per process; later
/// starts in the same process reuse it.
fn prometheus_handle() -> Option<PrometheusHandle> {
    static PROM_HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

    PROM_HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                info!("📊 Prometheus metrics recorder installed");
                Some(handle)
            }
            Err(e) => {
                warn!(error = %e, "Prometheus recorder unavailable, /metrics disabled");
                None
            }
        })
        .clone()
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`ServerHandle::start`]).
/// `RUST_LOG` takes precedence over `logging.level`.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;
        config.server.shutdown_timeout = 5;
        config
    }

    #[tokio::test]
    async fn forced_demo_skips_the_store() {
        let adapter = build_store(&AppConfig::default(), true).await.unwrap();
        assert!(adapter.is_demo());
    }

    #[tokio::test]
    async fn starts_and_shuts_down_in_demo_mode() {
        let handle = ServerHandle::start(ServerOptions {
            config: local_config(),
            force_demo: true,
        })
        .await
        .unwrap();

        assert!(handle.is_running());
        assert_ne!(handle.local_addr.port(), 0);
        assert!(handle.store.is_demo());

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn serves_requests_until_shutdown() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let handle = ServerHandle::start(ServerOptions {
            config: local_config(),
            force_demo: true,
        })
        .await
        .unwrap();

        let mut stream = tokio::net::TcpStream::connect(handle.local_addr).await.unwrap();
        stream
            .write_all(b"GET /api/services HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains("ICT Solutions"));

        handle.shutdown().await;
    }
}
