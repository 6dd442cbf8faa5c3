//! The façade a caller actually drives: owns the phase, the table, the
//! clock, and an observer notified after every state mutation.

use crate::card::Card;
use crate::clock::Clock;
use crate::error::GameError;
use crate::ledger::Answer;
use crate::lobby::Lobby;
use crate::phase::{GameContext, Guess, Phase};
use crate::player::{Player, PlayersPool};
use crate::state::GameState;
use crate::table::GameTable;

/// Called, synchronously, with every new snapshot. A boxed closure rather
/// than a single-method trait, since callers never need more than one
/// implementation in flight and a closure is the lighter-weight fit.
pub type GameObserver = Box<dyn FnMut(GameState) + Send>;

pub struct Game {
    table: GameTable,
    phase: Phase,
    clock: Box<dyn Clock>,
    observer: GameObserver,
}

impl Game {
    /// Freezes `lobby` into a running game: builds the player pool in lobby
    /// member order, shuffles the deck, and fires the initial snapshot.
    pub fn new(lobby: Lobby, clock: Box<dyn Clock>, observer: GameObserver) -> Self {
        let max_rounds = lobby.max_rounds();
        let players: Vec<Player> = lobby.members().into_iter().map(Player::from_member).collect();
        let deck = lobby.into_deck();
        let pool = PlayersPool::new(players);
        let mut table = GameTable::new(pool, deck);
        table.shuffle_deck();
        let context = GameContext {
            round_number: 1,
            max_rounds,
        };
        let mut game = Self {
            table,
            phase: Phase::initial(context),
            clock,
            observer,
        };
        game.notify();
        game
    }

    fn notify(&mut self) {
        let state = self.phase.state(&self.table, self.clock.as_ref());
        (self.observer)(state);
    }

    pub fn answer(&mut self, player: &Player, answer: Answer) -> Result<(), GameError> {
        self.phase = self.phase.answer(&mut self.table, player, answer)?;
        self.notify();
        Ok(())
    }

    pub fn guess(&mut self, player: &Player, guess: Guess) -> Result<(), GameError> {
        self.phase = self.phase.guess(&mut self.table, player, guess)?;
        self.notify();
        Ok(())
    }

    /// Advances the deck cursor, then reshuffles the whole deck — matching
    /// the façade's extra shuffle beyond what the phase transition itself does.
    pub fn change_card(&mut self, player: &Player) -> Result<(), GameError> {
        self.phase = self.phase.change_card(&mut self.table, player)?;
        self.table.shuffle_deck();
        self.notify();
        Ok(())
    }

    pub fn mark_ready(&mut self, player: &Player) -> Result<(), GameError> {
        self.phase = self.phase.mark_ready(&mut self.table, player)?;
        self.notify();
        Ok(())
    }

    pub fn state(&self) -> GameState {
        self.phase.state(&self.table, self.clock.as_ref())
    }

    pub fn over(&self) -> bool {
        self.phase.game_over()
    }

    pub fn players(&self) -> Vec<Player> {
        self.table.players()
    }

    pub fn current_player(&self) -> Player {
        self.table.current_player().clone()
    }

    pub fn guessing_players(&self) -> Vec<Player> {
        self.table.guessing_players()
    }

    pub fn current_card(&self) -> Card {
        self.table.current_card().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Deck;
    use crate::clock::SystemClock;
    use crate::lobby::{GameSettings, LobbyMember};
    use std::sync::{Arc, Mutex};

    fn deck() -> Deck {
        Deck::new(
            "d",
            vec![
                Card {
                    question: "q1".into(),
                    answer_a: "a".into(),
                    answer_b: "b".into(),
                    answer_c: "c".into(),
                },
                Card {
                    question: "q2".into(),
                    answer_a: "a".into(),
                    answer_b: "b".into(),
                    answer_c: "c".into(),
                },
            ],
        )
        .unwrap()
    }

    fn lobby(max_rounds_factor: u32, extra_members: &[&str]) -> Lobby {
        let host = LobbyMember::new("host");
        let mut lobby = Lobby::new(
            host,
            GameSettings {
                deck: deck(),
                max_rounds_factor,
            },
        );
        for name in extra_members {
            lobby.add_member(LobbyMember::new(*name));
        }
        lobby
    }

    fn recording_observer() -> (GameObserver, Arc<Mutex<Vec<GameState>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_clone = log.clone();
        let observer: GameObserver = Box::new(move |state| log_clone.lock().unwrap().push(state));
        (observer, log)
    }

    #[test]
    fn construction_notifies_once_with_initial_answer_phase() {
        let (observer, log) = recording_observer();
        let game = Game::new(lobby(1, &["p2"]), Box::new(SystemClock), observer);
        assert_eq!(log.lock().unwrap().len(), 1);
        assert!(!game.over());
    }

    #[test]
    fn game_ends_when_last_round_settles() {
        let (observer, _log) = recording_observer();
        // max_rounds_factor=1 * 2 members = 2 rounds.
        let mut game = Game::new(lobby(1, &["p2"]), Box::new(SystemClock), observer);

        for round in 0..2 {
            let current = game.current_player();
            let other = game
                .players()
                .into_iter()
                .find(|p| p.id() != current.id())
                .unwrap();

            game.answer(&current, Answer::A).unwrap();
            game.guess(&other, Guess { answer: Answer::A, bet: 1 }).unwrap();
            assert!(!game.over(), "game ended early on round {round}");
            game.mark_ready(&current).unwrap();
            game.mark_ready(&other).unwrap();
        }
        assert!(game.over());
    }

    #[test]
    fn illegal_action_is_rejected_without_state_change() {
        let (observer, log) = recording_observer();
        let mut game = Game::new(lobby(3, &["p2"]), Box::new(SystemClock), observer);
        let not_current = game
            .players()
            .into_iter()
            .find(|p| p.id() != game.current_player().id())
            .unwrap();
        let before = log.lock().unwrap().len();
        let err = game.answer(&not_current, Answer::A).unwrap_err();
        assert!(matches!(err, GameError::IllegalPlayerAction { .. }));
        assert_eq!(log.lock().unwrap().len(), before);
    }
}
