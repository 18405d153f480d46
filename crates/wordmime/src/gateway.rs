//! Per-connection handler: decode inbound events and route them to rooms.
//!
//! Each accepted connection gets its own Tokio task running this handler.
//! The flow is:
//!   1. Loop: receive frames → decode [`ClientEvent`]
//!   2. First `join` binds the connection to a player name and room and
//!      spawns a writer task pumping that player's server events out
//!   3. Everything else is routed to the room named in the event
//!
//! Anything that can't be decoded or routed is logged and dropped; the
//! client never sees an error frame.

use std::sync::Arc;

use tokio::sync::mpsc;
use wordmime_protocol::{ClientEvent, Codec, RoomCode, ServerEvent};
use wordmime_room::{GameAction, RoomHandle};
use wordmime_transport::{Connection, WebSocketConnection};

use crate::server::GatewayState;

/// What the gateway remembers about a connection after its first
/// accepted `join`.
struct PlayerBinding {
    name: String,
    room: RoomCode,
}

/// Handles a single connection from accept to close.
///
/// Never returns an error: every failure mode is a silent drop (of one
/// event, or of the whole connection).
pub(crate) async fn handle_connection<C: Codec>(
    conn: WebSocketConnection,
    state: Arc<GatewayState<C>>,
) {
    let conn_id = conn.id();
    tracing::debug!(%conn_id, "handling new connection");

    let conn = Arc::new(conn);
    let mut binding: Option<PlayerBinding> = None;

    loop {
        let data = match conn.recv().await {
            Ok(Some(data)) => data,
            Ok(None) => {
                tracing::info!(%conn_id, "connection closed cleanly");
                break;
            }
            Err(e) => {
                tracing::debug!(%conn_id, error = %e, "recv error");
                break;
            }
        };

        let event: ClientEvent = match state.codec.decode(&data) {
            Ok(event) => event,
            Err(e) => {
                tracing::debug!(%conn_id, error = %e,
                    "dropping undecodable frame");
                continue;
            }
        };

        match event {
            ClientEvent::Join { room_code, player } => {
                if binding.is_some() {
                    tracing::debug!(%conn_id,
                        "dropping join: connection already bound");
                    continue;
                }
                binding = try_join(&conn, &state, room_code, player).await;
            }
            ClientEvent::StartGame {
                room_code,
                total_rounds,
                word_list,
            } => {
                if binding.is_none() {
                    tracing::debug!(%conn_id,
                        "dropping start_game: connection not bound");
                    continue;
                }
                route(
                    &state,
                    &room_code,
                    GameAction::StartGame {
                        total_rounds,
                        word_list,
                    },
                )
                .await;
            }
            ClientEvent::EmojiLocked { room_code, emojis } => {
                // The sender's identity comes from the connection's
                // binding, not the payload; only the bound name can be
                // checked against the round's maker.
                let Some(bound) = &binding else {
                    tracing::debug!(%conn_id,
                        "dropping emoji_locked: connection not bound");
                    continue;
                };
                route(
                    &state,
                    &room_code,
                    GameAction::LockEmojis {
                        sender: bound.name.clone(),
                        emojis,
                    },
                )
                .await;
            }
            ClientEvent::PlayerGuess {
                room_code,
                player,
                guess,
            } => {
                route(&state, &room_code, GameAction::Guess { player, guess })
                    .await;
            }
        }
    }

    if let Some(bound) = &binding {
        tracing::info!(%conn_id, player = %bound.name, room = %bound.room,
            "player connection ended");
    }
    // Dropping the connection tears down the writer task on its next
    // send; the player stays on the roster and simply stops hearing
    // events.
}

/// Attempts the connection's first join: registers the player with the
/// room (creating it if needed) and spawns the writer task that pumps
/// the player's event stream onto the socket.
async fn try_join<C: Codec>(
    conn: &Arc<WebSocketConnection>,
    state: &Arc<GatewayState<C>>,
    room_code: RoomCode,
    player: String,
) -> Option<PlayerBinding> {
    let (tx, rx) = mpsc::unbounded_channel();

    let joined: Option<RoomHandle> = {
        let mut registry = state.registry.lock().await;
        match registry.join(&room_code, &player, tx).await {
            Ok(joined) => joined,
            Err(e) => {
                tracing::debug!(room = %room_code, %player, error = %e,
                    "dropping join");
                None
            }
        }
    };
    if joined.is_none() {
        tracing::debug!(room = %room_code, %player, "join not accepted");
        return None;
    }

    tokio::spawn(pump_events(Arc::clone(conn), Arc::clone(state), rx));

    Some(PlayerBinding {
        name: player,
        room: room_code,
    })
}

/// Routes a gameplay action to the room named in the event. A missing
/// room is a silent drop.
async fn route<C: Codec>(
    state: &Arc<GatewayState<C>>,
    room_code: &RoomCode,
    action: GameAction,
) {
    let handle = {
        let mut registry = state.registry.lock().await;
        registry.get(room_code)
    };
    match handle {
        Ok(handle) => handle.act(action).await,
        Err(e) => {
            tracing::debug!(room = %room_code, error = %e,
                "dropping event for unknown room");
        }
    }
}

/// Writer task: forwards one player's server events onto their socket.
///
/// Ends when the room closes the stream (actor shutdown) or the socket
/// stops accepting frames.
async fn pump_events<C: Codec>(
    conn: Arc<WebSocketConnection>,
    state: Arc<GatewayState<C>>,
    mut rx: mpsc::UnboundedReceiver<ServerEvent>,
) {
    while let Some(event) = rx.recv().await {
        let bytes = match state.codec.encode(&event) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode server event");
                continue;
            }
        };
        if let Err(e) = conn.send(&bytes).await {
            tracing::debug!(conn_id = %conn.id(), error = %e,
                "writer stopping: send failed");
            break;
        }
    }
}
