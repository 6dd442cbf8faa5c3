//! The game state machine: `AnswerPhase -> GuessPhase -> ResultPhase ->
//! {AnswerPhase, GameOver}`. Modeled as a closed `enum` rather than trait
//! objects, since the set of phases is fixed and known at compile time.

use std::collections::HashMap;

use uuid::Uuid;

use crate::clock::Clock;
use crate::error::GameError;
use crate::ledger::Answer;
use crate::player::Player;
use crate::state::{GamePhaseName, GameState, PlayerState};
use crate::table::GameTable;

/// Round bookkeeping threaded unchanged through every phase of a round
/// (except when a round completes, where `round_number` increments).
#[derive(Debug, Clone, Copy)]
pub struct GameContext {
    pub round_number: u32,
    pub max_rounds: u32,
}

/// A guesser's simultaneous answer-and-bet submission.
#[derive(Debug, Clone, Copy)]
pub struct Guess {
    pub answer: Answer,
    pub bet: u32,
}

#[derive(Debug)]
pub enum Phase {
    Answer(AnswerPhase),
    Guess(GuessPhase),
    Result(ResultPhase),
    GameOver(GameOverPhase),
}

impl Phase {
    pub fn initial(context: GameContext) -> Self {
        Phase::Answer(AnswerPhase {
            context,
            card_changed: false,
        })
    }

    pub fn answer(
        &self,
        table: &mut GameTable,
        player: &Player,
        answer: Answer,
    ) -> Result<Phase, GameError> {
        match self {
            Phase::Answer(p) => p.answer(table, player, answer),
            Phase::Guess(p) => Err(illegal(player, "ANSWER", p.name())),
            Phase::Result(p) => Err(illegal(player, "ANSWER", p.name())),
            Phase::GameOver(p) => Err(illegal(player, "ANSWER", p.name())),
        }
    }

    pub fn guess(&self, table: &mut GameTable, player: &Player, guess: Guess) -> Result<Phase, GameError> {
        match self {
            Phase::Answer(p) => Err(illegal(player, "GUESS", p.name())),
            Phase::Guess(p) => p.guess(table, player, guess),
            Phase::Result(p) => Err(illegal(player, "GUESS", p.name())),
            Phase::GameOver(p) => Err(illegal(player, "GUESS", p.name())),
        }
    }

    pub fn change_card(&self, table: &mut GameTable, player: &Player) -> Result<Phase, GameError> {
        match self {
            Phase::Answer(p) => p.change_card(table, player),
            Phase::Guess(p) => Err(illegal(player, "CHANGE_CARD", p.name())),
            Phase::Result(p) => Err(illegal(player, "CHANGE_CARD", p.name())),
            Phase::GameOver(p) => Err(illegal(player, "CHANGE_CARD", p.name())),
        }
    }

    pub fn mark_ready(&self, table: &mut GameTable, player: &Player) -> Result<Phase, GameError> {
        match self {
            Phase::Answer(p) => Err(illegal(player, "MARK_READY", p.name())),
            Phase::Guess(p) => Err(illegal(player, "MARK_READY", p.name())),
            Phase::Result(p) => p.mark_ready(table, player),
            Phase::GameOver(p) => Err(illegal(player, "MARK_READY", p.name())),
        }
    }

    pub fn game_over(&self) -> bool {
        matches!(self, Phase::GameOver(_))
    }

    pub fn state(&self, table: &GameTable, clock: &dyn Clock) -> GameState {
        match self {
            Phase::Answer(p) => p.state(table, clock),
            Phase::Guess(p) => p.state(table, clock),
            Phase::Result(p) => p.state(table, clock),
            Phase::GameOver(p) => p.state(table, clock),
        }
    }
}

fn illegal(player: &Player, action: &'static str, phase: GamePhaseName) -> GameError {
    GameError::IllegalPlayerAction {
        player: player.id(),
        action,
        phase,
    }
}

fn ensure_current_player(table: &GameTable, player: &Player, action: &'static str, phase: GamePhaseName) -> Result<(), GameError> {
    if player.id() != table.current_player().id() {
        return Err(illegal(player, action, phase));
    }
    Ok(())
}

fn player_states<F>(table: &GameTable, mut per_player: F) -> Vec<PlayerState>
where
    F: FnMut(&Player) -> PlayerState,
{
    table.players().iter().map(|p| per_player(p)).collect()
}

#[derive(Debug)]
pub struct AnswerPhase {
    context: GameContext,
    card_changed: bool,
}

impl AnswerPhase {
    fn name(&self) -> GamePhaseName {
        GamePhaseName::Answer
    }

    fn answer(&self, table: &mut GameTable, player: &Player, answer: Answer) -> Result<Phase, GameError> {
        ensure_current_player(table, player, "ANSWER", self.name())?;
        table.add_answer(player, answer)?;
        Ok(Phase::Guess(GuessPhase {
            context: self.context,
        }))
    }

    fn change_card(&self, table: &mut GameTable, player: &Player) -> Result<Phase, GameError> {
        ensure_current_player(table, player, "CHANGE_CARD", self.name())?;
        if self.card_changed {
            return Err(GameError::CardAlreadyChanged);
        }
        table.change_card();
        Ok(Phase::Answer(AnswerPhase {
            context: self.context,
            card_changed: true,
        }))
    }

    fn state(&self, table: &GameTable, clock: &dyn Clock) -> GameState {
        let current = table.current_player().id();
        let player_states = player_states(table, |player| PlayerState {
            guid: player.id(),
            name: player.name().to_string(),
            points: player.points(),
            points_change: 0,
            awaited_to_answer: player.id() == current && !table.player_answered(player),
            awaited_to_guess: false,
            ready: false,
        });
        GameState {
            time: clock.now(),
            phase: GamePhaseName::Answer,
            player_states,
            points_in_bank: table.points_in_bank(),
            round_number: self.context.round_number,
            current_card: table.current_card().clone(),
            card_changed: self.card_changed,
        }
    }
}

#[derive(Debug)]
pub struct GuessPhase {
    context: GameContext,
}

impl GuessPhase {
    fn name(&self) -> GamePhaseName {
        GamePhaseName::Guess
    }

    fn guess(&self, table: &mut GameTable, player: &Player, guess: Guess) -> Result<Phase, GameError> {
        if player.id() == table.current_player().id() {
            return Err(illegal(player, "GUESS", self.name()));
        }
        if table.player_bet(player) {
            return Err(GameError::PlayerAlreadyBet { player: player.id() });
        }
        if !table.player_can_bet(player, guess.bet) {
            return Err(GameError::PlayerCannotAffordBet {
                player: player.id(),
                bet: guess.bet as u8,
                points: player.points(),
            });
        }
        table.add_answer(player, guess.answer)?;
        table.place_bet(player, guess.bet)?;
        if table.all_players_answered() {
            return ResultPhase::settle(self.context, table).map(Phase::Result);
        }
        Ok(Phase::Guess(GuessPhase {
            context: self.context,
        }))
    }

    fn state(&self, table: &GameTable, clock: &dyn Clock) -> GameState {
        let current = table.current_player().id();
        let player_states = player_states(table, |player| PlayerState {
            guid: player.id(),
            name: player.name().to_string(),
            points: player.points(),
            points_change: 0,
            awaited_to_answer: false,
            awaited_to_guess: player.id() != current && !table.player_answered(player),
            ready: false,
        });
        GameState {
            time: clock.now(),
            phase: GamePhaseName::Guess,
            player_states,
            points_in_bank: table.points_in_bank(),
            round_number: self.context.round_number,
            current_card: table.current_card().clone(),
            card_changed: false,
        }
    }
}

#[derive(Debug)]
pub struct ResultPhase {
    context: GameContext,
    ready: HashMap<Uuid, bool>,
    point_changes: HashMap<Uuid, i64>,
}

impl ResultPhase {
    fn name(&self) -> GamePhaseName {
        GamePhaseName::Result
    }

    /// Settles every guesser's bet against the current answerer's answer.
    /// Runs once, at transition into this phase — matching the constructor
    /// settlement in the original state machine.
    fn settle(context: GameContext, table: &mut GameTable) -> Result<Self, GameError> {
        let correct_answer = table.get_answer(table.current_player());
        let mut point_changes = HashMap::new();
        for guesser in table.guessing_players() {
            let bet = table.get_bet(&guesser) as i64;
            let answered_correctly = table.get_answer(&guesser) == correct_answer;
            if answered_correctly {
                table.execute_win(guesser.id());
                point_changes.insert(guesser.id(), bet);
            } else {
                table.execute_loss(guesser.id())?;
                point_changes.insert(guesser.id(), -bet);
            }
        }
        Ok(Self {
            context,
            ready: HashMap::new(),
            point_changes,
        })
    }

    fn mark_ready(&self, table: &mut GameTable, player: &Player) -> Result<Phase, GameError> {
        if self.ready.get(&player.id()).copied().unwrap_or(false) {
            return Err(GameError::PlayerAlreadyMarkedAsReady { player: player.id() });
        }
        let mut ready = self.ready.clone();
        ready.insert(player.id(), true);
        let ready_count = ready.values().filter(|r| **r).count();
        if ready_count != table.in_game_players_count() {
            return Ok(Phase::Result(ResultPhase {
                context: self.context,
                ready,
                point_changes: self.point_changes.clone(),
            }));
        }
        if self.is_game_to_end(table) {
            return Ok(Phase::GameOver(GameOverPhase {
                context: self.context,
            }));
        }
        table.flush();
        table.change_card();
        table.advance_player();
        let next_context = GameContext {
            round_number: self.context.round_number + 1,
            max_rounds: self.context.max_rounds,
        };
        Ok(Phase::Answer(AnswerPhase {
            context: next_context,
            card_changed: false,
        }))
    }

    fn is_game_to_end(&self, table: &GameTable) -> bool {
        self.context.round_number == self.context.max_rounds
            || table.in_game_players_count() <= 1
            || table.points_in_bank() <= 0
    }

    fn state(&self, table: &GameTable, clock: &dyn Clock) -> GameState {
        let player_states = player_states(table, |player| PlayerState {
            guid: player.id(),
            name: player.name().to_string(),
            points: player.points(),
            points_change: self.point_changes.get(&player.id()).copied().unwrap_or(0),
            awaited_to_answer: false,
            awaited_to_guess: false,
            ready: self.ready.get(&player.id()).copied().unwrap_or(false),
        });
        GameState {
            time: clock.now(),
            phase: GamePhaseName::Result,
            player_states,
            points_in_bank: table.points_in_bank(),
            round_number: self.context.round_number,
            current_card: table.current_card().clone(),
            card_changed: false,
        }
    }
}

#[derive(Debug)]
pub struct GameOverPhase {
    context: GameContext,
}

impl GameOverPhase {
    fn name(&self) -> GamePhaseName {
        GamePhaseName::GameOver
    }

    fn state(&self, table: &GameTable, clock: &dyn Clock) -> GameState {
        let player_states = player_states(table, |player| PlayerState {
            guid: player.id(),
            name: player.name().to_string(),
            points: player.points(),
            points_change: 0,
            awaited_to_answer: false,
            awaited_to_guess: false,
            ready: false,
        });
        GameState {
            time: clock.now(),
            phase: GamePhaseName::GameOver,
            player_states,
            points_in_bank: table.points_in_bank(),
            round_number: self.context.round_number,
            current_card: table.current_card().clone(),
            card_changed: false,
        }
    }
}
