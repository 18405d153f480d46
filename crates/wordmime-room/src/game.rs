//! The pure room state machine: one charades game, no I/O, no clocks.
//!
//! [`GameSession`] owns a room's full game state and exposes one method
//! per event. Every method returns a [`Step`]: the outbound events to
//! fan out and what to do with the room's single pending timer. The
//! actor applies the step; this module never touches a channel or a
//! clock, which is what makes the whole state machine testable
//! synchronously.
//!
//! Guard failures — wrong phase, unknown player, duplicate guess — are
//! silent: the method returns an empty step and mutates nothing.

use std::collections::{BTreeMap, HashSet};

use wordmime_protocol::{PlayerEntry, Recipient, RoomCode, ServerEvent};

use crate::config::{RoomPhase, TimerKind, FALLBACK_WORD};
use crate::score;

// ---------------------------------------------------------------------------
// Participant
// ---------------------------------------------------------------------------

/// One player in a room: a name and a monotonically growing score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Unique within the room, case-sensitive, externally supplied.
    pub name: String,
    /// Accumulated score across rounds.
    pub score: u32,
}

// ---------------------------------------------------------------------------
// Step — what a transition asks the actor to do
// ---------------------------------------------------------------------------

/// What the actor should do to the room's pending timer after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Leave the pending deadline (if any) untouched.
    Keep,
    /// Cancel the pending deadline.
    Disarm,
    /// Replace any pending deadline with this kind's fixed delay.
    /// Arming always cancels first; a stale deadline can never survive
    /// a transition that arms a new one.
    Arm(TimerKind),
}

/// The result of one state-machine transition.
#[derive(Debug)]
pub struct Step {
    /// Outbound events, fanned out in roster insertion order per event.
    pub events: Vec<(Recipient, ServerEvent)>,
    /// What to do with the room's single pending timer.
    pub timer: TimerAction,
}

impl Step {
    /// A silent no-op: nothing sent, timer untouched.
    fn none() -> Self {
        Self {
            events: Vec::new(),
            timer: TimerAction::Keep,
        }
    }
}

// ---------------------------------------------------------------------------
// GameSession
// ---------------------------------------------------------------------------

/// The full state of one room's game.
pub struct GameSession {
    code: RoomCode,
    phase: RoomPhase,
    players: Vec<Participant>,
    /// 1-based once the game starts; 0 means "before round one".
    current_round: u32,
    total_rounds: u32,
    /// One secret per round, indexed by `current_round - 1`.
    word_list: Vec<String>,
    current_maker_index: usize,
    current_word: String,
    current_emojis: String,
    /// Names that already scored this round. Reset every round.
    correct_guessers: HashSet<String>,
}

impl GameSession {
    /// Creates an empty room in the waiting phase.
    pub fn new(code: RoomCode) -> Self {
        Self {
            code,
            phase: RoomPhase::Waiting,
            players: Vec::new(),
            current_round: 0,
            total_rounds: 0,
            word_list: Vec::new(),
            current_maker_index: 0,
            current_word: String::new(),
            current_emojis: String::new(),
            correct_guessers: HashSet::new(),
        }
    }

    // -- Accessors --------------------------------------------------------

    /// The room's code.
    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> RoomPhase {
        self.phase
    }

    /// The roster in join order (which is also maker-rotation order).
    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    /// The 1-based current round (0 before the first round).
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// This round's maker, if a round is in flight.
    pub fn maker(&self) -> Option<&Participant> {
        if self.phase.in_round() {
            self.players.get(self.current_maker_index)
        } else {
            None
        }
    }

    /// Whether the room has reached its terminal phase.
    pub fn is_finished(&self) -> bool {
        self.phase == RoomPhase::Finished
    }

    // -- Transitions ------------------------------------------------------

    /// A participant joins a waiting room.
    ///
    /// Silent drop if the game already started or the name is taken.
    /// Existing players are notified; the joiner gets no echo.
    pub fn join(&mut self, name: &str) -> Step {
        if !self.phase.is_joinable() {
            tracing::debug!(room = %self.code, player = name, phase = %self.phase,
                "join ignored: game already started");
            return Step::none();
        }
        if self.players.iter().any(|p| p.name == name) {
            tracing::debug!(room = %self.code, player = name,
                "join ignored: name already taken");
            return Step::none();
        }

        self.players.push(Participant {
            name: name.to_string(),
            score: 0,
        });
        tracing::info!(room = %self.code, player = name,
            players = self.players.len(), "player joined");

        Step {
            events: vec![(
                Recipient::AllExcept(name.to_string()),
                ServerEvent::PlayerJoined {
                    player: name.to_string(),
                },
            )],
            timer: TimerAction::Keep,
        }
    }

    /// Starts the game: fixes the round count and word list, broadcasts
    /// the roster, and immediately advances into round one.
    ///
    /// Silent drop unless the room is waiting with at least one player,
    /// `total_rounds >= 1`, and the word list is non-empty.
    pub fn start_game(
        &mut self,
        total_rounds: u32,
        word_list: Vec<String>,
    ) -> Step {
        if self.phase != RoomPhase::Waiting {
            tracing::debug!(room = %self.code, phase = %self.phase,
                "start_game ignored: not waiting");
            return Step::none();
        }
        if total_rounds < 1 || word_list.is_empty() || self.players.is_empty()
        {
            tracing::debug!(room = %self.code, total_rounds,
                words = word_list.len(), "start_game ignored: invalid setup");
            return Step::none();
        }

        self.total_rounds = total_rounds;
        self.word_list = word_list;
        self.current_round = 0;
        tracing::info!(room = %self.code, total_rounds,
            players = self.players.len(), "game started");

        let mut events = vec![(
            Recipient::All,
            ServerEvent::GameStarted {
                total_rounds,
                players: self.roster(),
            },
        )];
        let advance = self.advance_round();
        events.extend(advance.events);
        Step {
            events,
            timer: advance.timer,
        }
    }

    /// The maker locks in their emoji encoding; guessing opens.
    ///
    /// Silent drop unless the room is making and `sender` is this
    /// round's maker.
    pub fn lock_emojis(&mut self, sender: &str, emojis: String) -> Step {
        if self.phase != RoomPhase::Making {
            tracing::debug!(room = %self.code, phase = %self.phase,
                "emoji_locked ignored: not making");
            return Step::none();
        }
        let maker = self.players[self.current_maker_index].name.clone();
        if sender != maker {
            tracing::debug!(room = %self.code, sender, %maker,
                "emoji_locked ignored: sender is not the maker");
            return Step::none();
        }

        self.current_emojis = emojis.clone();
        self.correct_guessers.clear();
        self.phase = RoomPhase::Guessing;
        tracing::info!(room = %self.code, round = self.current_round,
            %maker, "emojis locked, guess window open");

        Step {
            events: vec![(
                Recipient::All,
                ServerEvent::EmojiRevealed { emojis, maker },
            )],
            timer: TimerAction::Arm(TimerKind::GuessDeadline),
        }
    }

    /// A guesser submits a decode attempt.
    ///
    /// Silent drop unless the room is guessing, the player is a
    /// non-maker participant, and they haven't already scored this
    /// round (repeat guesses from a correct guesser are idempotent).
    pub fn guess(&mut self, player: &str, guess: &str) -> Step {
        if self.phase != RoomPhase::Guessing {
            tracing::debug!(room = %self.code, phase = %self.phase,
                "guess ignored: not guessing");
            return Step::none();
        }
        if !self.players.iter().any(|p| p.name == player) {
            tracing::debug!(room = %self.code, player,
                "guess ignored: not a participant");
            return Step::none();
        }
        let maker = self.players[self.current_maker_index].name.clone();
        if player == maker {
            tracing::debug!(room = %self.code, player,
                "guess ignored: maker cannot guess");
            return Step::none();
        }
        if self.correct_guessers.contains(player) {
            tracing::debug!(room = %self.code, player,
                "guess ignored: already scored this round");
            return Step::none();
        }

        let correct = score::is_correct(guess, &self.current_word);
        let points = if correct {
            let nth = self.correct_guessers.len() as u32 + 1;
            let points = score::guesser_points(nth);
            self.correct_guessers.insert(player.to_string());
            self.award(player, points);
            self.award(&maker, score::MAKER_BONUS);
            tracing::info!(room = %self.code, player, nth, points,
                "correct guess");
            points
        } else {
            0
        };

        let mut events = vec![(
            Recipient::All,
            ServerEvent::GuessResult {
                player: player.to_string(),
                guess: guess.to_string(),
                correct,
                points,
            },
        )];

        // Every non-maker has decoded it: close the round early rather
        // than sitting out the rest of the guess window.
        if correct && self.correct_guessers.len() == self.players.len() - 1 {
            let end = self.end_round(Some(player.to_string()));
            events.extend(end.events);
            return Step {
                events,
                timer: end.timer,
            };
        }

        Step {
            events,
            timer: TimerAction::Keep,
        }
    }

    /// Applies a fired timer, validating the kind against the current
    /// phase. A stale firing (the room transitioned before the deadline
    /// was replaced) is a guaranteed no-op.
    pub fn timer_fired(&mut self, kind: TimerKind) -> Step {
        match (kind, self.phase) {
            (TimerKind::MakerDeadline, RoomPhase::Making) => {
                tracing::info!(room = %self.code, round = self.current_round,
                    "maker deadline elapsed, ending round without a winner");
                self.end_round(None)
            }
            (TimerKind::GuessDeadline, RoomPhase::Guessing) => {
                tracing::info!(room = %self.code, round = self.current_round,
                    "guess window elapsed, ending round without a winner");
                self.end_round(None)
            }
            (TimerKind::RevealPause, RoomPhase::Reveal) => {
                self.advance_round()
            }
            (kind, phase) => {
                tracing::debug!(room = %self.code, ?kind, %phase,
                    "stale timer firing ignored");
                Step::none()
            }
        }
    }

    // -- Internal transitions ---------------------------------------------

    /// Begins the next round, or finishes the game when the round
    /// counter would exceed the configured total.
    fn advance_round(&mut self) -> Step {
        if self.current_round + 1 > self.total_rounds {
            self.phase = RoomPhase::Finished;
            tracing::info!(room = %self.code,
                rounds = self.total_rounds, "game over");
            return Step {
                events: vec![(
                    Recipient::All,
                    ServerEvent::GameOver {
                        final_players: self.roster(),
                    },
                )],
                timer: TimerAction::Disarm,
            };
        }

        self.current_round += 1;
        self.current_maker_index =
            (self.current_round as usize - 1) % self.players.len();
        self.current_word = self
            .word_list
            .get(self.current_round as usize - 1)
            .cloned()
            .unwrap_or_else(|| {
                tracing::warn!(room = %self.code, round = self.current_round,
                    "word list exhausted, substituting fallback word");
                FALLBACK_WORD.to_string()
            });
        self.current_emojis.clear();
        self.correct_guessers.clear();
        self.phase = RoomPhase::Making;

        let maker = self.players[self.current_maker_index].name.clone();
        tracing::info!(room = %self.code, round = self.current_round,
            %maker, "round started");

        // The secret travels only to the maker; everyone else gets the
        // same event with no word field.
        let events = vec![
            (
                Recipient::Player(maker.clone()),
                ServerEvent::RoundStart {
                    round: self.current_round,
                    maker_index: self.current_maker_index,
                    word: Some(self.current_word.clone()),
                },
            ),
            (
                Recipient::AllExcept(maker),
                ServerEvent::RoundStart {
                    round: self.current_round,
                    maker_index: self.current_maker_index,
                    word: None,
                },
            ),
        ];

        Step {
            events,
            timer: TimerAction::Arm(TimerKind::MakerDeadline),
        }
    }

    /// Ends the current round: reveal the word and scores, pause, then
    /// advance.
    fn end_round(&mut self, winner: Option<String>) -> Step {
        self.phase = RoomPhase::Reveal;
        tracing::info!(room = %self.code, round = self.current_round,
            winner = winner.as_deref().unwrap_or("none"), "round ended");

        Step {
            events: vec![(
                Recipient::All,
                ServerEvent::RoundEnd {
                    winner,
                    word: self.current_word.clone(),
                    scores: self.scoreboard(),
                },
            )],
            timer: TimerAction::Arm(TimerKind::RevealPause),
        }
    }

    // -- Helpers ----------------------------------------------------------

    fn award(&mut self, name: &str, points: u32) {
        if let Some(p) = self.players.iter_mut().find(|p| p.name == name) {
            p.score += points;
        }
    }

    fn roster(&self) -> Vec<PlayerEntry> {
        self.players
            .iter()
            .map(|p| PlayerEntry {
                name: p.name.clone(),
                score: p.score,
            })
            .collect()
    }

    fn scoreboard(&self) -> BTreeMap<String, u32> {
        self.players
            .iter()
            .map(|p| (p.name.clone(), p.score))
            .collect()
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> GameSession {
        GameSession::new(RoomCode::from("TEST"))
    }

    /// Room with the given players joined, still waiting.
    fn lobby(names: &[&str]) -> GameSession {
        let mut game = room();
        for name in names {
            game.join(name);
        }
        game
    }

    /// Three-player room started with one word per round.
    fn started(names: &[&str], words: &[&str], rounds: u32) -> GameSession {
        let mut game = lobby(names);
        game.start_game(
            rounds,
            words.iter().map(|w| w.to_string()).collect(),
        );
        game
    }

    fn score_of(game: &GameSession, name: &str) -> u32 {
        game.players()
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.score)
            .expect("player exists")
    }

    // =====================================================================
    // Joining
    // =====================================================================

    #[test]
    fn test_new_room_waits_with_empty_roster() {
        let game = room();
        assert_eq!(game.phase(), RoomPhase::Waiting);
        assert!(game.players().is_empty());
        assert_eq!(game.current_round(), 0);
    }

    #[test]
    fn test_join_appends_in_order_with_zero_score() {
        let game = lobby(&["amelie", "bo", "cy"]);
        let names: Vec<_> =
            game.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["amelie", "bo", "cy"]);
        assert!(game.players().iter().all(|p| p.score == 0));
    }

    #[test]
    fn test_join_notifies_existing_players_not_the_joiner() {
        let mut game = lobby(&["amelie"]);
        let step = game.join("bo");
        assert_eq!(step.events.len(), 1);
        let (recipient, event) = &step.events[0];
        assert_eq!(recipient, &Recipient::AllExcept("bo".to_string()));
        assert_eq!(
            event,
            &ServerEvent::PlayerJoined {
                player: "bo".into()
            }
        );
    }

    #[test]
    fn test_join_duplicate_name_is_dropped() {
        let mut game = lobby(&["amelie"]);
        let step = game.join("amelie");
        assert!(step.events.is_empty());
        assert_eq!(game.players().len(), 1);
    }

    #[test]
    fn test_join_after_start_is_dropped() {
        let mut game = started(&["amelie", "bo"], &["PIZZA"], 1);
        let step = game.join("late");
        assert!(step.events.is_empty());
        assert_eq!(game.players().len(), 2);
    }

    // =====================================================================
    // Starting and round advance
    // =====================================================================

    #[test]
    fn test_start_game_enters_making_and_arms_maker_deadline() {
        let mut game = lobby(&["amelie", "bo"]);
        let step = game.start_game(2, vec!["PIZZA".into(), "ROBOT".into()]);

        assert_eq!(game.phase(), RoomPhase::Making);
        assert_eq!(game.current_round(), 1);
        assert_eq!(step.timer, TimerAction::Arm(TimerKind::MakerDeadline));

        // game_started, then round_start to maker and to the rest.
        assert!(matches!(
            step.events[0],
            (Recipient::All, ServerEvent::GameStarted { total_rounds: 2, .. })
        ));
        assert!(matches!(
            &step.events[1],
            (Recipient::Player(name), ServerEvent::RoundStart { word: Some(w), .. })
                if name == "amelie" && w == "PIZZA"
        ));
        assert!(matches!(
            &step.events[2],
            (Recipient::AllExcept(name), ServerEvent::RoundStart { word: None, .. })
                if name == "amelie"
        ));
    }

    #[test]
    fn test_start_game_rejects_zero_rounds_and_empty_words() {
        let mut game = lobby(&["amelie", "bo"]);
        assert!(game.start_game(0, vec!["PIZZA".into()]).events.is_empty());
        assert!(game.start_game(1, vec![]).events.is_empty());
        assert_eq!(game.phase(), RoomPhase::Waiting);
    }

    #[test]
    fn test_start_game_twice_is_dropped() {
        let mut game = started(&["amelie", "bo"], &["PIZZA"], 1);
        let step = game.start_game(5, vec!["AGAIN".into()]);
        assert!(step.events.is_empty());
        assert_eq!(game.current_round(), 1);
    }

    #[test]
    fn test_maker_rotation_cycles_join_order() {
        // N=3, R=5 ⇒ maker indices 0,1,2,0,1.
        let words = ["A", "B", "C", "D", "E"];
        let mut game = started(&["p0", "p1", "p2"], &words, 5);

        let mut seen = Vec::new();
        for _ in 0..5 {
            let maker = game.maker().expect("round in flight").name.clone();
            seen.push(maker.clone());
            // Time out the making phase, then the reveal pause.
            game.timer_fired(TimerKind::MakerDeadline);
            game.timer_fired(TimerKind::RevealPause);
        }

        assert_eq!(seen, ["p0", "p1", "p2", "p0", "p1"]);
        assert!(game.is_finished());
    }

    #[test]
    fn test_word_list_exhaustion_uses_fallback() {
        let mut game = started(&["amelie", "bo"], &["PIZZA"], 2);
        game.timer_fired(TimerKind::MakerDeadline);
        let step = game.timer_fired(TimerKind::RevealPause);

        // Round 2 has no scripted word; the maker still gets one.
        assert!(step.events.iter().any(|(r, e)| matches!(
            (r, e),
            (Recipient::Player(_), ServerEvent::RoundStart { word: Some(w), .. })
                if w == FALLBACK_WORD
        )));
    }

    // =====================================================================
    // Emoji locking
    // =====================================================================

    #[test]
    fn test_lock_emojis_opens_guess_window() {
        let mut game = started(&["amelie", "bo"], &["PIZZA"], 1);
        let step = game.lock_emojis("amelie", "🍕🔥".into());

        assert_eq!(game.phase(), RoomPhase::Guessing);
        assert_eq!(step.timer, TimerAction::Arm(TimerKind::GuessDeadline));
        assert!(matches!(
            &step.events[0],
            (Recipient::All, ServerEvent::EmojiRevealed { maker, .. })
                if maker == "amelie"
        ));
    }

    #[test]
    fn test_lock_emojis_from_non_maker_is_dropped() {
        let mut game = started(&["amelie", "bo"], &["PIZZA"], 1);
        let step = game.lock_emojis("bo", "🍕".into());
        assert!(step.events.is_empty());
        assert_eq!(game.phase(), RoomPhase::Making);
    }

    // =====================================================================
    // Guessing and scoring
    // =====================================================================

    /// Four players, amelie making round one with secret PIZZA,
    /// guess window open.
    fn guessing_pizza() -> GameSession {
        let mut game = started(&["amelie", "bo", "cy", "dee"], &["PIZZA"], 1);
        game.lock_emojis("amelie", "🍕".into());
        game
    }

    #[test]
    fn test_scoring_ladder_and_maker_bonus() {
        // Three distinct correct guessers, sloppy spelling and all:
        // 1000, 700, 400 — and the maker banks 150 per correct guess.
        let mut game = guessing_pizza();

        game.guess("bo", "pizza");
        game.guess("cy", "Piz za!");
        game.guess("dee", "PIZZA ");

        assert_eq!(score_of(&game, "bo"), 1000);
        assert_eq!(score_of(&game, "cy"), 700);
        assert_eq!(score_of(&game, "dee"), 400);
        assert_eq!(score_of(&game, "amelie"), 450);
    }

    #[test]
    fn test_wrong_guess_broadcasts_zero_points() {
        let mut game = guessing_pizza();
        let step = game.guess("bo", "pasta");

        assert!(matches!(
            &step.events[0],
            (
                Recipient::All,
                ServerEvent::GuessResult {
                    correct: false,
                    points: 0,
                    ..
                }
            )
        ));
        assert_eq!(score_of(&game, "bo"), 0);
        assert_eq!(score_of(&game, "amelie"), 0);
    }

    #[test]
    fn test_repeat_guess_after_scoring_is_idempotent() {
        let mut game = guessing_pizza();
        game.guess("bo", "pizza");
        let step = game.guess("bo", "pizza");

        assert!(step.events.is_empty(), "no result, not even correct:true");
        assert_eq!(score_of(&game, "bo"), 1000, "no re-score");
        assert_eq!(score_of(&game, "amelie"), 150, "no double bonus");
    }

    #[test]
    fn test_maker_guess_is_dropped() {
        let mut game = guessing_pizza();
        let step = game.guess("amelie", "pizza");
        assert!(step.events.is_empty());
        assert_eq!(score_of(&game, "amelie"), 0);
    }

    #[test]
    fn test_guess_outside_guessing_phase_is_dropped() {
        let mut game = started(&["amelie", "bo"], &["PIZZA"], 1);
        // Still making: no emojis locked yet.
        let step = game.guess("bo", "pizza");
        assert!(step.events.is_empty());
        assert_eq!(score_of(&game, "bo"), 0);
    }

    #[test]
    fn test_all_guessers_correct_closes_round_early() {
        let mut game = guessing_pizza();
        game.guess("bo", "pizza");
        game.guess("cy", "pizza");
        let step = game.guess("dee", "pizza");

        assert_eq!(game.phase(), RoomPhase::Reveal);
        assert_eq!(step.timer, TimerAction::Arm(TimerKind::RevealPause));
        assert!(step.events.iter().any(|(_, e)| matches!(
            e,
            ServerEvent::RoundEnd { winner: Some(w), .. } if w == "dee"
        )));
    }

    // =====================================================================
    // Timers
    // =====================================================================

    #[test]
    fn test_maker_deadline_ends_round_without_winner() {
        let mut game = started(&["amelie", "bo"], &["PIZZA"], 1);
        let step = game.timer_fired(TimerKind::MakerDeadline);

        assert_eq!(game.phase(), RoomPhase::Reveal);
        assert_eq!(step.timer, TimerAction::Arm(TimerKind::RevealPause));
        assert!(matches!(
            &step.events[0],
            (Recipient::All, ServerEvent::RoundEnd { winner: None, word, .. })
                if word == "PIZZA"
        ));
    }

    #[test]
    fn test_guess_deadline_ends_round_without_winner() {
        let mut game = guessing_pizza();
        game.guess("bo", "pizza"); // one correct, not all
        let step = game.timer_fired(TimerKind::GuessDeadline);

        assert_eq!(game.phase(), RoomPhase::Reveal);
        assert!(matches!(
            &step.events[0],
            (_, ServerEvent::RoundEnd { winner: None, .. })
        ));
        // Scores from mid-round guesses survive into the scoreboard.
        assert_eq!(score_of(&game, "bo"), 1000);
    }

    #[test]
    fn test_stale_maker_deadline_after_transition_is_noop() {
        // The critical invariant: a making-phase deadline that fires
        // after the room moved into guessing must change nothing.
        let mut game = guessing_pizza();
        let phase_before = game.phase();
        let scores_before: Vec<u32> =
            game.players().iter().map(|p| p.score).collect();

        let step = game.timer_fired(TimerKind::MakerDeadline);

        assert!(step.events.is_empty());
        assert_eq!(step.timer, TimerAction::Keep);
        assert_eq!(game.phase(), phase_before);
        let scores_after: Vec<u32> =
            game.players().iter().map(|p| p.score).collect();
        assert_eq!(scores_before, scores_after);
    }

    #[test]
    fn test_stale_guess_deadline_in_reveal_is_noop() {
        let mut game = guessing_pizza();
        game.timer_fired(TimerKind::GuessDeadline); // now in reveal
        let step = game.timer_fired(TimerKind::GuessDeadline);
        assert!(step.events.is_empty());
        assert_eq!(game.phase(), RoomPhase::Reveal);
    }

    // =====================================================================
    // Game completion
    // =====================================================================

    #[test]
    fn test_final_reveal_finishes_game_with_scoreboard() {
        let mut game = started(&["amelie", "bo"], &["PIZZA", "ROBOT"], 2);

        // Round 1: bo decodes it.
        game.lock_emojis("amelie", "🍕".into());
        game.guess("bo", "pizza");
        game.timer_fired(TimerKind::RevealPause);

        // Round 2: bo makes, amelie never decodes, window times out.
        assert_eq!(game.maker().unwrap().name, "bo");
        game.lock_emojis("bo", "🤖".into());
        game.timer_fired(TimerKind::GuessDeadline);

        let step = game.timer_fired(TimerKind::RevealPause);

        assert!(game.is_finished());
        assert_eq!(step.timer, TimerAction::Disarm);
        match &step.events[0] {
            (Recipient::All, ServerEvent::GameOver { final_players }) => {
                assert_eq!(final_players.len(), 2);
                let bo = final_players
                    .iter()
                    .find(|p| p.name == "bo")
                    .unwrap();
                assert_eq!(bo.score, 1000);
                let amelie = final_players
                    .iter()
                    .find(|p| p.name == "amelie")
                    .unwrap();
                assert_eq!(amelie.score, 150);
            }
            other => panic!("expected game_over, got {other:?}"),
        }
    }

    #[test]
    fn test_no_event_mutates_a_finished_room() {
        let mut game = started(&["amelie", "bo"], &["PIZZA"], 1);
        game.timer_fired(TimerKind::MakerDeadline);
        game.timer_fired(TimerKind::RevealPause);
        assert!(game.is_finished());

        assert!(game.join("late").events.is_empty());
        assert!(game.guess("bo", "pizza").events.is_empty());
        assert!(game.lock_emojis("amelie", "🍕".into()).events.is_empty());
        assert!(game
            .timer_fired(TimerKind::RevealPause)
            .events
            .is_empty());
        assert!(game.is_finished());
    }
}
