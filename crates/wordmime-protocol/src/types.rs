//! Core wire types for wordmime's event protocol.
//!
//! Every inbound event is a `{ "type": ..., "payload": {...} }` envelope;
//! every outbound event is `{ "type": ..., ...fields }`. The serde
//! attributes below are what pin those exact JSON shapes — a mismatch
//! means existing web clients can't parse the gateway's messages.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// Opaque identifier for a room (one game instance).
///
/// Codes are assigned by the client side (e.g. a lobby link); the engine
/// never generates them, it only keys the registry on them. The newtype
/// keeps a room code from being confused with a player name or a guess,
/// even though all three are strings underneath.
///
/// `#[serde(transparent)]` makes `RoomCode("KWZ4")` serialize as the
/// plain string `"KWZ4"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(pub String);

impl RoomCode {
    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoomCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Recipient — who should receive an outbound event?
// ---------------------------------------------------------------------------

/// Specifies who should receive a server event.
///
/// When the room state machine processes an event, it returns a list of
/// `(Recipient, ServerEvent)` pairs; the fan-out layer resolves each
/// recipient against the room roster in join order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// Every player in the room.
    All,

    /// One specific player, by name.
    Player(String),

    /// Everyone except the named player.
    AllExcept(String),
}

// ---------------------------------------------------------------------------
// PlayerEntry — roster/scoreboard entries
// ---------------------------------------------------------------------------

/// A player's name and score, as carried in rosters and scoreboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    /// The player's name (unique within a room, case-sensitive).
    pub name: String,
    /// Accumulated score.
    pub score: u32,
}

// ---------------------------------------------------------------------------
// ClientEvent — inbound
// ---------------------------------------------------------------------------

/// Events a client sends to the gateway.
///
/// `#[serde(tag = "type", content = "payload")]` produces the adjacently
/// tagged envelope the protocol requires:
///
/// ```json
/// { "type": "join", "payload": { "roomCode": "KWZ4", "player": "amelie" } }
/// ```
///
/// Anything that fails to deserialize into this closed union is dropped
/// at the gateway boundary before it can reach a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Join a room, creating it if the code is unseen.
    #[serde(rename_all = "camelCase")]
    Join {
        room_code: RoomCode,
        player: String,
    },

    /// Begin the game with a round count and the scripted word list.
    #[serde(rename_all = "camelCase")]
    StartGame {
        room_code: RoomCode,
        total_rounds: u32,
        word_list: Vec<String>,
    },

    /// The maker locks in their emoji encoding of the secret word.
    #[serde(rename_all = "camelCase")]
    EmojiLocked {
        room_code: RoomCode,
        emojis: String,
    },

    /// A guesser submits a decode attempt.
    #[serde(rename_all = "camelCase")]
    PlayerGuess {
        room_code: RoomCode,
        player: String,
        guess: String,
    },
}

impl ClientEvent {
    /// The room this event is addressed to.
    pub fn room_code(&self) -> &RoomCode {
        match self {
            Self::Join { room_code, .. }
            | Self::StartGame { room_code, .. }
            | Self::EmojiLocked { room_code, .. }
            | Self::PlayerGuess { room_code, .. } => room_code,
        }
    }
}

// ---------------------------------------------------------------------------
// ServerEvent — outbound
// ---------------------------------------------------------------------------

/// Events the gateway sends to clients.
///
/// `#[serde(tag = "type")]` produces the internally tagged shape — the
/// payload fields sit next to the tag:
///
/// ```json
/// { "type": "guess_result", "player": "bo", "guess": "pizza",
///   "correct": true, "points": 1000 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// A new participant joined the room.
    #[serde(rename_all = "camelCase")]
    PlayerJoined { player: String },

    /// The game started; carries the full roster with zeroed scores.
    #[serde(rename_all = "camelCase")]
    GameStarted {
        total_rounds: u32,
        players: Vec<PlayerEntry>,
    },

    /// A new round began. `word` is present only in the copy sent to
    /// the maker; everyone else receives no word field at all.
    #[serde(rename_all = "camelCase")]
    RoundStart {
        round: u32,
        maker_index: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        word: Option<String>,
    },

    /// The maker's emoji sequence is revealed to the room.
    #[serde(rename_all = "camelCase")]
    EmojiRevealed { emojis: String, maker: String },

    /// The outcome of one guess, broadcast to everyone.
    #[serde(rename_all = "camelCase")]
    GuessResult {
        player: String,
        guess: String,
        correct: bool,
        points: u32,
    },

    /// The round ended; `winner` is `null` on a timeout with no winner.
    #[serde(rename_all = "camelCase")]
    RoundEnd {
        winner: Option<String>,
        word: String,
        scores: BTreeMap<String, u32>,
    },

    /// The game is over; the room is gone after this message.
    #[serde(rename_all = "camelCase")]
    GameOver { final_players: Vec<PlayerEntry> },
}

// =========================================================================
// Tests
// =========================================================================
