//! # Wordmime
//!
//! Real-time emoji charades session engine over WebSockets.
//!
//! Players gather in a room, then take turns as the "maker": the maker
//! gets a secret word, encodes it as a string of emojis, and everyone
//! else races to decode it. Faster correct guesses are worth more, the
//! maker banks a bonus per correct guess, and after a fixed number of
//! rounds the final scoreboard goes out and the room dissolves.
//!
//! This meta-crate ties the layers together:
//!
//! - `wordmime-transport` — WebSocket listener and connections
//! - `wordmime-protocol` — the JSON wire events
//! - `wordmime-room` — one actor task per room running the game
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wordmime::prelude::*;
//!
//! # async fn run() -> Result<(), WordmimeError> {
//! let server = GatewayServer::<JsonCodec>::builder()
//!     .bind("0.0.0.0:8080")
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod error;
mod gateway;
mod server;

pub use error::WordmimeError;
pub use server::{GatewayServer, GatewayServerBuilder};

/// Everything needed to stand up a server.
pub mod prelude {
    pub use crate::{GatewayServer, GatewayServerBuilder, WordmimeError};
    pub use wordmime_protocol::{
        ClientEvent, JsonCodec, PlayerEntry, RoomCode, ServerEvent,
    };
    pub use wordmime_room::{RoomPhase, RoomRegistry};
}
