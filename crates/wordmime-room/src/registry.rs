//! The room registry: owns every live room's handle.
//!
//! Rooms come into existence lazily on first join and disappear when
//! their actor shuts down. The registry is a plain owned value; the
//! caller (the gateway) decides how to share it.

use std::collections::HashMap;

use wordmime_protocol::RoomCode;

use crate::actor::{spawn_room, PlayerSender, RoomHandle};
use crate::error::RoomError;

/// All live rooms, keyed by code.
#[derive(Default)]
pub struct RoomRegistry {
    rooms: HashMap<RoomCode, RoomHandle>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Joins a player to the room under `code`, creating it if no live
    /// room exists. A dead entry under the code is replaced by a fresh
    /// room rather than resurrected.
    ///
    /// Returns the handle if the roster accepted the player, so the
    /// caller can route their later actions, or `None` when the room
    /// dropped the join (name taken, game in progress).
    pub async fn join(
        &mut self,
        code: &RoomCode,
        name: &str,
        sender: PlayerSender,
    ) -> Result<Option<RoomHandle>, RoomError> {
        let handle = self.get_or_create(code);
        let accepted = handle.join(name, sender).await?;
        if accepted {
            tracing::debug!(room = %code, player = name, "join routed");
            Ok(Some(handle))
        } else {
            Ok(None)
        }
    }

    /// Looks up a live room, pruning a dead entry on the way.
    pub fn get(&mut self, code: &RoomCode) -> Result<RoomHandle, RoomError> {
        match self.rooms.get(code) {
            Some(handle) if !handle.is_closed() => Ok(handle.clone()),
            Some(_) => {
                self.rooms.remove(code);
                tracing::debug!(room = %code, "pruned finished room");
                Err(RoomError::NotFound(code.clone()))
            }
            None => Err(RoomError::NotFound(code.clone())),
        }
    }

    fn get_or_create(&mut self, code: &RoomCode) -> RoomHandle {
        if let Some(handle) = self.rooms.get(code) {
            if !handle.is_closed() {
                return handle.clone();
            }
            self.rooms.remove(code);
            tracing::debug!(room = %code, "pruned finished room");
        }
        tracing::info!(room = %code, "creating room");
        let handle = spawn_room(code.clone());
        self.rooms.insert(code.clone(), handle.clone());
        handle
    }
}
