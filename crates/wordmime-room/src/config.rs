//! Room phases, timer kinds, and the fixed protocol timing.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Protocol timing (fixed, not configurable)
// ---------------------------------------------------------------------------

/// How long the maker has to submit their emoji encoding.
pub const MAKER_ENCODE_TIMEOUT: Duration = Duration::from_millis(70_000);

/// How long guessers have once the emojis are revealed.
pub const GUESS_WINDOW_TIMEOUT: Duration = Duration::from_millis(90_000);

/// Pause between the round-end reveal and the next round.
pub const REVEAL_PAUSE: Duration = Duration::from_millis(6_000);

/// Word substituted when the scripted list runs out before the rounds do.
pub const FALLBACK_WORD: &str = "CHARADE";

// ---------------------------------------------------------------------------
// RoomPhase
// ---------------------------------------------------------------------------

/// The lifecycle phase of a room.
///
/// ```text
/// Waiting → Making ⇄ Guessing
///              ↑         │
///              │         ▼
///              └────── Reveal ──(rounds exhausted)──→ Finished
/// ```
///
/// - **Waiting**: room exists, accepting joins, game not started.
/// - **Making**: the maker is encoding this round's secret word.
/// - **Guessing**: emojis are revealed, guessers are racing.
/// - **Reveal**: round results shown; next round starts after the pause.
/// - **Finished**: terminal. The room is removed the instant it is
///   reached; no further event may mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomPhase {
    Waiting,
    Making,
    Guessing,
    Reveal,
    Finished,
}

impl RoomPhase {
    /// Returns `true` if the room is accepting new players.
    pub fn is_joinable(&self) -> bool {
        matches!(self, Self::Waiting)
    }

    /// Returns `true` if a round is in flight (a maker index is valid).
    pub fn in_round(&self) -> bool {
        matches!(self, Self::Making | Self::Guessing | Self::Reveal)
    }
}

impl std::fmt::Display for RoomPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Waiting => write!(f, "waiting"),
            Self::Making => write!(f, "making"),
            Self::Guessing => write!(f, "guessing"),
            Self::Reveal => write!(f, "reveal"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

// ---------------------------------------------------------------------------
// TimerKind
// ---------------------------------------------------------------------------

/// Which deferred transition a room's single pending timer will apply.
///
/// The kind travels with the deadline and is validated against the
/// room's phase at fire time, so a firing that outlived its phase is a
/// no-op rather than a corruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// The maker failed to submit within the encode window.
    MakerDeadline,
    /// The guess window elapsed with no full sweep of correct guesses.
    GuessDeadline,
    /// The post-round reveal pause elapsed; advance to the next round.
    RevealPause,
}

impl TimerKind {
    /// The fixed delay before this transition fires.
    pub fn duration(self) -> Duration {
        match self {
            Self::MakerDeadline => MAKER_ENCODE_TIMEOUT,
            Self::GuessDeadline => GUESS_WINDOW_TIMEOUT,
            Self::RevealPause => REVEAL_PAUSE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_phase_is_joinable() {
        assert!(RoomPhase::Waiting.is_joinable());
        assert!(!RoomPhase::Making.is_joinable());
        assert!(!RoomPhase::Guessing.is_joinable());
        assert!(!RoomPhase::Reveal.is_joinable());
        assert!(!RoomPhase::Finished.is_joinable());
    }

    #[test]
    fn test_room_phase_in_round() {
        assert!(!RoomPhase::Waiting.in_round());
        assert!(RoomPhase::Making.in_round());
        assert!(RoomPhase::Guessing.in_round());
        assert!(RoomPhase::Reveal.in_round());
        assert!(!RoomPhase::Finished.in_round());
    }

    #[test]
    fn test_room_phase_display() {
        assert_eq!(RoomPhase::Waiting.to_string(), "waiting");
        assert_eq!(RoomPhase::Guessing.to_string(), "guessing");
    }

    #[test]
    fn test_timer_kind_durations_match_protocol() {
        assert_eq!(
            TimerKind::MakerDeadline.duration(),
            Duration::from_millis(70_000)
        );
        assert_eq!(
            TimerKind::GuessDeadline.duration(),
            Duration::from_millis(90_000)
        );
        assert_eq!(
            TimerKind::RevealPause.duration(),
            Duration::from_millis(6_000)
        );
    }
}
