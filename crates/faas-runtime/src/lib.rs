//! Function runtime - serves a single handler over HTTP
//!
//! The runtime:
//! - Accepts HTTP requests on any path and method
//! - Builds an invocation [`Context`](faas_sdk::Context) and reads the body
//! - Invokes the handler under a timeout
//! - Writes the structured response back (status 200 unless overridden)
//! - Answers `/health/readiness` and `/health/liveness`
//!
//! # Example
//!
//! ```ignore
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     faas_runtime::run(my_function::handle).await
//! }
//! ```

pub mod config;
pub mod router;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use faas_sdk::Handler;

pub use config::RuntimeConfig;
pub use router::create_router;

/// Shared runtime state
pub struct RuntimeState {
    pub config: RuntimeConfig,
    pub handler: Arc<dyn Handler>,
}

impl RuntimeState {
    pub fn new<H: Handler>(handler: H, config: RuntimeConfig) -> Self {
        Self {
            config,
            handler: Arc::new(handler),
        }
    }
}

/// A running function server
///
/// Dropping the server leaves it running in the background; call
/// [`Server::close`] to stop it.
pub struct Server {
    local_addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl Server {
    /// Address the listener is bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Base URL of the server, e.g. `http://127.0.0.1:8080`
    pub fn url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stop accepting connections and wait for in-flight requests to finish
    pub async fn close(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await??;
        tracing::info!("Function server on {} closed", self.local_addr);
        Ok(())
    }
}

/// Initialize tracing from `RUST_LOG`. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,faas_runtime=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Bind the listener and serve `handler` in a background task
pub async fn start<H: Handler>(handler: H, config: RuntimeConfig) -> Result<Server> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let local_addr = listener.local_addr()?;

    let state = Arc::new(RuntimeState::new(handler, config));
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = rx.await;
            })
            .await
    });

    tracing::info!("Function listening on {}", local_addr);

    Ok(Server {
        local_addr,
        shutdown: Some(tx),
        handle,
    })
}

/// Run `handler` with configuration from the environment until Ctrl-C
pub async fn run<H: Handler>(handler: H) -> Result<()> {
    init_tracing();

    let config = RuntimeConfig::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    let server = start(handler, config).await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received");

    server.close().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use faas_sdk::{Context, StructuredResponse};

    fn local() -> RuntimeConfig {
        RuntimeConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..RuntimeConfig::default()
        }
    }

    #[tokio::test]
    async fn test_start_and_close() {
        let handler = |_: &Context, _: &str| StructuredResponse::text("up");
        let server = start(handler, local()).await.unwrap();

        assert!(server.local_addr().ip().is_loopback());
        assert_ne!(server.local_addr().port(), 0);
        assert_eq!(server.url(), format!("http://{}", server.local_addr()));

        server.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_port_in_use() {
        let handler = |_: &Context, _: &str| StructuredResponse::new();
        let first = start(handler, local()).await.unwrap();

        let config = RuntimeConfig {
            port: first.local_addr().port(),
            ..local()
        };
        assert!(start(handler, config).await.is_err());

        first.close().await.unwrap();
    }
}
