//! Room lifecycle and round state machine for wordmime.
//!
//! Each room runs as an isolated Tokio task (actor model) owning one
//! charades game: the roster, the round counters, the current secret,
//! and the single pending round timer. All mutation of a room flows
//! through its actor's command channel, so no locks are needed on game
//! state and rooms never contend with each other.
//!
//! # Key types
//!
//! - [`GameSession`] — the pure room state machine (no I/O, no clocks)
//! - [`RoomRegistry`] — creates rooms on first join, prunes finished ones
//! - [`RoomHandle`] — send events to a running room actor
//! - [`RoomPhase`] — waiting | making | guessing | reveal | finished
//! - [`TimerKind`] — which deferred transition is pending

mod actor;
mod config;
mod error;
mod game;
mod registry;
pub mod score;

pub use actor::{spawn_room, GameAction, PlayerSender, RoomHandle};
pub use config::{
    RoomPhase, TimerKind, FALLBACK_WORD, GUESS_WINDOW_TIMEOUT,
    MAKER_ENCODE_TIMEOUT, REVEAL_PAUSE,
};
pub use error::RoomError;
pub use game::{GameSession, Participant, Step, TimerAction};
pub use registry::RoomRegistry;
