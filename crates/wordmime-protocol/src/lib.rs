//! Wire protocol for wordmime.
//!
//! This crate defines the language clients and the gateway speak:
//!
//! - **Types** ([`ClientEvent`], [`ServerEvent`], [`RoomCode`], etc.) —
//!   the event structures that travel on the wire.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how those events are
//!   converted to/from bytes.
//! - **Errors** ([`ProtocolError`]) — what can go wrong during
//!   encoding/decoding.
//!
//! The protocol layer sits between transport (raw frames) and the room
//! layer (game state). It doesn't know about connections or rooms — it
//! only knows how to serialize and deserialize events.
//!
//! ```text
//! Transport (frames) → Protocol (ClientEvent) → Room (state machine)
//! ```

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{
    ClientEvent, PlayerEntry, Recipient, RoomCode, ServerEvent,
};
