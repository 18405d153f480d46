use thiserror::Error;
use wordmime_protocol::RoomCode;

/// Errors surfaced by the room registry and handles.
#[derive(Debug, Error)]
pub enum RoomError {
    /// No live room exists under this code.
    #[error("room {0} not found")]
    NotFound(RoomCode),

    /// The room's actor has shut down and can no longer take commands.
    #[error("room {0} is no longer available")]
    Unavailable(RoomCode),
}
