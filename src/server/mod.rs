//! HTTP server for the form.
//!
//! Accepts connections on a TCP listener and serves each one on its own
//! task with hyper's HTTP/1.1 connection driver.

pub mod handlers;

pub use handlers::{handle_request, AppState, FORM_PATH};

use crate::config::Config;
use crate::error::{ServerError, ServerResult};
use crate::metrics::Metrics;
use crate::services::FormValidator;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// A bound form server, ready to accept connections.
pub struct FormServer {
    listener: TcpListener,
    state: Arc<AppState>,
}

impl FormServer {
    /// Bind the listener described by `config`, with fresh metrics.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Bind` if the address cannot be bound.
    pub async fn bind(config: &Config) -> ServerResult<Self> {
        let listener = TcpListener::bind(config.bind_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: config.bind_addr,
                source,
            })?;

        let validator = FormValidator::new(Arc::new(config.patterns.clone()));
        let state = AppState::new(validator, Metrics::new(), config.max_body_bytes);

        Ok(Self {
            listener,
            state: Arc::new(state),
        })
    }

    /// The address the listener is bound to.
    pub fn local_addr(&self) -> ServerResult<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Metrics shared with every connection.
    pub fn metrics(&self) -> &Metrics {
        &self.state.metrics
    }

    /// Serve connections until `shutdown` completes.
    ///
    /// Connections already accepted keep running on their own tasks.
    pub async fn run_until<F>(self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested, no longer accepting connections");
                    break;
                }
                accepted = self.listener.accept() => {
                    let (stream, peer) = match accepted {
                        Ok(accepted) => accepted,
                        Err(e) => {
                            tracing::warn!("Accept failed: {}", e);
                            continue;
                        }
                    };
                    self.spawn_connection(stream, peer);
                }
            }
        }
    }

    fn spawn_connection(&self, stream: tokio::net::TcpStream, peer: SocketAddr) {
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            let io = TokioIo::new(stream);
            let service = service_fn(move |req| handle_request(req, Arc::clone(&state)));

            // Clients closing early is routine
            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                tracing::debug!("Connection from {} ended with error: {}", peer, e);
            }
        });
    }
}
