//! `GatewayServer` builder and accept loop.
//!
//! This is the entry point for running a wordmime server. It ties the
//! layers together: transport → protocol → rooms.

use std::sync::Arc;

use tokio::sync::Mutex;
use wordmime_protocol::{Codec, JsonCodec};
use wordmime_room::RoomRegistry;
use wordmime_transport::{Transport, WebSocketTransport};

use crate::gateway::handle_connection;
use crate::WordmimeError;

/// Shared server state passed to each connection handler task.
///
/// Wrapped in `Arc` so it can be cheaply cloned across tasks. The
/// registry sits behind a `Mutex`; it is touched only on join and on
/// per-event routing, and each room's gameplay runs lock-free inside
/// its own actor.
pub(crate) struct GatewayState<C: Codec> {
    pub(crate) registry: Mutex<RoomRegistry>,
    pub(crate) codec: C,
}

/// Builder for configuring and starting a wordmime server.
///
/// # Example
///
/// ```rust,ignore
/// use wordmime::prelude::*;
///
/// let server = GatewayServer::builder()
///     .bind("0.0.0.0:8080")
///     .build()
///     .await?;
/// server.run().await
/// ```
pub struct GatewayServerBuilder {
    bind_addr: String,
}

impl GatewayServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Binds the listener and builds the server.
    ///
    /// Uses `JsonCodec` over `WebSocketTransport`, which is what
    /// deployed web clients speak.
    pub async fn build(
        self,
    ) -> Result<GatewayServer<JsonCodec>, WordmimeError> {
        let transport = WebSocketTransport::bind(&self.bind_addr).await?;

        let state = Arc::new(GatewayState {
            registry: Mutex::new(RoomRegistry::new()),
            codec: JsonCodec,
        });

        Ok(GatewayServer { transport, state })
    }
}

impl Default for GatewayServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running wordmime server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct GatewayServer<C: Codec> {
    transport: WebSocketTransport,
    state: Arc<GatewayState<C>>,
}

impl<C: Codec> GatewayServer<C> {
    /// Creates a new builder.
    pub fn builder() -> GatewayServerBuilder {
        GatewayServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    ///
    /// Useful when binding to port 0 in tests.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.transport.local_addr()
    }

    /// Runs the server accept loop.
    ///
    /// Accepts incoming connections and spawns a handler task for each
    /// one. Runs until the process is terminated.
    pub async fn run(mut self) -> Result<(), WordmimeError> {
        tracing::info!("wordmime server running");

        loop {
            match self.transport.accept().await {
                Ok(conn) => {
                    let state = Arc::clone(&self.state);
                    tokio::spawn(async move {
                        handle_connection(conn, state).await;
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
