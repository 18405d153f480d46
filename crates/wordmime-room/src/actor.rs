//! One tokio task per room.
//!
//! The actor owns a [`GameSession`], the per-player outbound channels,
//! and the room's single pending timer. Everything reaches it through
//! an mpsc command channel held by cloned [`RoomHandle`]s; when the
//! game finishes the actor drops its receiver, every handle starts
//! reporting closed, and the registry prunes the room on next lookup.

use std::collections::HashMap;

use tokio::sync::{mpsc, oneshot};
use wordmime_protocol::{Recipient, RoomCode, ServerEvent};
use wordmime_timer::OneShot;

use crate::config::TimerKind;
use crate::error::RoomError;
use crate::game::{GameSession, Step, TimerAction};

/// Commands the actor takes beyond plain game actions get this much
/// buffering before senders start waiting.
const COMMAND_BUFFER: usize = 64;

/// Outbound channel for one player's events. The gateway owns the
/// receiving half and pumps it onto the player's connection.
pub type PlayerSender = mpsc::UnboundedSender<ServerEvent>;

/// A gameplay action forwarded into the room, fire-and-forget.
#[derive(Debug)]
pub enum GameAction {
    StartGame {
        total_rounds: u32,
        word_list: Vec<String>,
    },
    LockEmojis {
        sender: String,
        emojis: String,
    },
    Guess {
        player: String,
        guess: String,
    },
}

enum RoomCommand {
    Join {
        name: String,
        sender: PlayerSender,
        reply: oneshot::Sender<bool>,
    },
    Act(GameAction),
}

// ---------------------------------------------------------------------------
// RoomHandle
// ---------------------------------------------------------------------------

/// A cheap clonable handle to one room's actor.
#[derive(Clone)]
pub struct RoomHandle {
    code: RoomCode,
    sender: mpsc::Sender<RoomCommand>,
}

impl RoomHandle {
    /// The room's code.
    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    /// Whether the actor has shut down. A finished room's handles all
    /// report closed, which is how the registry knows to prune it.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Registers a player and their outbound channel with the room.
    ///
    /// Returns `Ok(true)` if the player was added to the roster,
    /// `Ok(false)` if the room dropped the join (name taken, game in
    /// progress).
    pub async fn join(
        &self,
        name: impl Into<String>,
        sender: PlayerSender,
    ) -> Result<bool, RoomError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(RoomCommand::Join {
                name: name.into(),
                sender,
                reply,
            })
            .await
            .map_err(|_| RoomError::Unavailable(self.code.clone()))?;
        response
            .await
            .map_err(|_| RoomError::Unavailable(self.code.clone()))
    }

    /// Forwards a gameplay action to the room. Fire-and-forget: an
    /// action sent to a dead room vanishes silently, matching the
    /// protocol's drop semantics.
    pub async fn act(&self, action: GameAction) {
        let _ = self.sender.send(RoomCommand::Act(action)).await;
    }
}

// ---------------------------------------------------------------------------
// RoomActor
// ---------------------------------------------------------------------------

struct RoomActor {
    game: GameSession,
    receiver: mpsc::Receiver<RoomCommand>,
    senders: HashMap<String, PlayerSender>,
    timer: OneShot<TimerKind>,
}

impl RoomActor {
    async fn run(mut self) {
        loop {
            tokio::select! {
                cmd = self.receiver.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    // Every handle dropped: nobody can reach this room
                    // again, so the game can never progress.
                    None => break,
                },
                kind = self.timer.fired() => {
                    let step = self.game.timer_fired(kind);
                    self.apply(step);
                }
            }
            if self.game.is_finished() {
                break;
            }
        }
        tracing::info!(room = %self.game.code(), "room actor shutting down");
    }

    fn handle_command(&mut self, cmd: RoomCommand) {
        match cmd {
            RoomCommand::Join {
                name,
                sender,
                reply,
            } => {
                let step = self.game.join(&name);
                // A successful join always produces the notify event;
                // a dropped one produces nothing.
                let accepted = !step.events.is_empty();
                if accepted {
                    self.senders.insert(name, sender);
                }
                self.apply(step);
                let _ = reply.send(accepted);
            }
            RoomCommand::Act(action) => {
                let step = match action {
                    GameAction::StartGame {
                        total_rounds,
                        word_list,
                    } => self.game.start_game(total_rounds, word_list),
                    GameAction::LockEmojis { sender, emojis } => {
                        self.game.lock_emojis(&sender, emojis)
                    }
                    GameAction::Guess { player, guess } => {
                        self.game.guess(&player, &guess)
                    }
                };
                self.apply(step);
            }
        }
    }

    /// Fans out a step's events and applies its timer action.
    fn apply(&mut self, step: Step) {
        for (recipient, event) in step.events {
            self.dispatch(&recipient, event);
        }
        match step.timer {
            TimerAction::Keep => {}
            TimerAction::Disarm => {
                self.timer.disarm();
            }
            TimerAction::Arm(kind) => {
                self.timer.arm(kind, kind.duration());
            }
        }
    }

    /// Delivers one event, walking the roster in join order so every
    /// player observes the same event sequence. A send onto a closed
    /// channel (player gone) is quietly ignored.
    fn dispatch(&self, recipient: &Recipient, event: ServerEvent) {
        for player in self.game.players() {
            let wanted = match recipient {
                Recipient::All => true,
                Recipient::Player(name) => name == &player.name,
                Recipient::AllExcept(name) => name != &player.name,
            };
            if !wanted {
                continue;
            }
            if let Some(sender) = self.senders.get(&player.name) {
                let _ = sender.send(event.clone());
            }
        }
    }
}

/// Spawns a fresh room actor and returns its handle.
pub fn spawn_room(code: RoomCode) -> RoomHandle {
    let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);
    let actor = RoomActor {
        game: GameSession::new(code.clone()),
        receiver,
        senders: HashMap::new(),
        timer: OneShot::new(),
    };
    tokio::spawn(actor.run());
    RoomHandle { code, sender }
}
