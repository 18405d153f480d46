//! Unified error type for the wordmime engine.

use wordmime_protocol::ProtocolError;
use wordmime_room::RoomError;
use wordmime_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `wordmime` meta-crate, you deal with this single
/// error type instead of importing errors from each sub-crate.
/// The `#[from]` attribute on each variant auto-generates `From` impls,
/// so the `?` operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum WordmimeError {
    /// A transport-level error (bind, accept, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode, invalid event).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A room-level error (not found, unavailable).
    #[error(transparent)]
    Room(#[from] RoomError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordmime_protocol::RoomCode;

    #[test]
    fn test_from_transport_error() {
        let err = TransportError::SendFailed(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "peer gone",
        ));
        let top: WordmimeError = err.into();
        assert!(matches!(top, WordmimeError::Transport(_)));
        assert!(top.to_string().contains("send failed"));
    }

    #[test]
    fn test_from_protocol_error() {
        let err = ProtocolError::InvalidEvent("bad".into());
        let top: WordmimeError = err.into();
        assert!(matches!(top, WordmimeError::Protocol(_)));
    }

    #[test]
    fn test_from_room_error() {
        let err = RoomError::NotFound(RoomCode::from("GONE"));
        let top: WordmimeError = err.into();
        assert!(matches!(top, WordmimeError::Room(_)));
        assert!(top.to_string().contains("GONE"));
    }
}
