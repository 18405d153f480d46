//! A runnable wordmime server.
//!
//! Rooms spring into existence when the first player joins; point any
//! WebSocket client at the bind address and send a `join` event.
//!
//! ```sh
//! RUST_LOG=wordmime=debug cargo run -p party-server -- 0.0.0.0:9090
//! ```

use tracing_subscriber::EnvFilter;
use wordmime::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "0.0.0.0:8080".to_string());

    let server = GatewayServerBuilder::new().bind(&addr).build().await?;
    tracing::info!(%addr, "party server listening");

    server.run().await?;
    Ok(())
}
