use uuid::Uuid;

use crate::card::{Card, Deck};
use crate::error::GameError;
use crate::ledger::{Answer, AnswersPool, BetPool, PointsBank};
use crate::player::{Player, PlayersPool};

/// Owns the players, the ledgers, the shared bank, and the deck. The only
/// object that mutates player points or removes players from the pool.
pub struct GameTable {
    players: PlayersPool,
    answers: AnswersPool,
    bets: BetPool,
    bank: PointsBank,
    deck: Deck,
}

impl GameTable {
    pub fn new(players: PlayersPool, deck: Deck) -> Self {
        let bank = PointsBank::new(players.count());
        Self {
            players,
            answers: AnswersPool::default(),
            bets: BetPool::default(),
            bank,
            deck,
        }
    }

    pub fn change_card(&mut self) {
        self.deck.advance_card();
    }

    pub fn shuffle_deck(&mut self) {
        self.deck.shuffle();
    }

    pub fn current_card(&self) -> &Card {
        self.deck.current_card()
    }

    pub fn add_answer(&mut self, player: &Player, answer: Answer) -> Result<(), GameError> {
        self.answers.add(player, answer)
    }

    pub fn get_answer(&self, player: &Player) -> Option<Answer> {
        self.answers.get(player)
    }

    pub fn player_answered(&self, player: &Player) -> bool {
        self.answers.has_answered(player)
    }

    pub fn all_players_answered(&self) -> bool {
        self.answers.all_answered(&self.players)
    }

    pub fn place_bet(&mut self, player: &Player, bet: u32) -> Result<(), GameError> {
        self.bets.add(player, bet)
    }

    pub fn get_bet(&self, player: &Player) -> u32 {
        self.bets.get(player)
    }

    pub fn player_bet(&self, player: &Player) -> bool {
        self.bets.has_bet(player)
    }

    pub fn player_can_bet(&self, player: &Player, bet: u32) -> bool {
        if self.bets.has_bet(player) {
            return false;
        }
        player.can_bet(bet)
    }

    /// Resets the answer and bet ledgers. The deck cursor is *not* reset
    /// here — that is a separate `change_card` call made by the caller.
    pub fn flush(&mut self) {
        self.answers.flush();
        self.bets.flush();
    }

    /// Credits `player` with their recorded bet from the bank.
    pub fn execute_win(&mut self, player_id: Uuid) {
        let bet = {
            let player = self.players.get(player_id).expect("player in pool");
            self.bets.get(player)
        };
        let player = self
            .players
            .get_mut(player_id)
            .expect("player in pool");
        self.bank.give(player, bet);
    }

    /// Debits `player` their recorded bet into the bank; kicks them from the
    /// pool if that leaves them with zero points.
    pub fn execute_loss(&mut self, player_id: Uuid) -> Result<(), GameError> {
        let bet = {
            let player = self.players.get(player_id).expect("player in pool");
            self.bets.get(player)
        };
        let kicked = {
            let player = self
                .players
                .get_mut(player_id)
                .expect("player in pool");
            self.bank.take(player, bet)?;
            !player.has_points()
        };
        if kicked {
            let player = self.players.get(player_id).expect("player in pool").clone();
            self.players.kick(&player);
        }
        Ok(())
    }

    pub fn advance_player(&mut self) {
        self.players.advance_player();
    }

    pub fn current_player(&self) -> &Player {
        self.players.current_player()
    }

    pub fn players(&self) -> Vec<Player> {
        self.players.all_players()
    }

    /// Every player except the current answerer, in pool order.
    pub fn guessing_players(&self) -> Vec<Player> {
        self.players.all_players().into_iter().skip(1).collect()
    }

    pub fn in_game_players_count(&self) -> usize {
        self.players.count()
    }

    pub fn points_in_bank(&self) -> i64 {
        self.bank.points_left()
    }
}
