//! Issuer authorization, sitting between the event router and the game
//! actor. Each use case mirrors one inbound action.

use uuid::Uuid;

use superego_core::{Answer, Guess};

use crate::actor::GameHandle;
use crate::error::NetError;

fn convert_answer(text: &str) -> Result<Answer, NetError> {
    match text {
        "A" => Ok(Answer::A),
        "B" => Ok(Answer::B),
        "C" => Ok(Answer::C),
        other => Err(NetError::InvalidAnswerValue(other.to_string())),
    }
}

pub struct AnswerUseCase {
    game: GameHandle,
}

impl AnswerUseCase {
    pub fn new(game: GameHandle) -> Self {
        Self { game }
    }

    pub async fn call(&self, answer_text: &str, issuer: Uuid) -> Result<(), NetError> {
        let answer = convert_answer(answer_text)?;
        let current = self.game.current_player().await;
        if current.id() != issuer {
            return Err(NetError::AnswerEventIssuerIsNotCurrentPlayer {
                issuer,
                current_player: current.id(),
            });
        }
        self.game.answer(current, answer).await?;
        Ok(())
    }
}

pub struct GuessUseCase {
    game: GameHandle,
}

impl GuessUseCase {
    pub fn new(game: GameHandle) -> Self {
        Self { game }
    }

    pub async fn call(&self, answer_text: &str, bet: u32, issuer: Uuid) -> Result<(), NetError> {
        let answer = convert_answer(answer_text)?;
        let guessing_players = self.game.guessing_players().await;
        let player = guessing_players
            .into_iter()
            .find(|p| p.id() == issuer)
            .ok_or(NetError::GuessEventIssuerIsNotCurrentlyGuessingPlayer { issuer })?;
        self.game.guess(player, Guess { answer, bet }).await?;
        Ok(())
    }
}

/// Shares `AnswerEventIssuerIsNotCurrentPlayer` with [`AnswerUseCase`] per
/// changing the card is only ever legal for the current answerer.
pub struct ChangeCardUseCase {
    game: GameHandle,
}

impl ChangeCardUseCase {
    pub fn new(game: GameHandle) -> Self {
        Self { game }
    }

    pub async fn call(&self, issuer: Uuid) -> Result<(), NetError> {
        let current = self.game.current_player().await;
        if current.id() != issuer {
            return Err(NetError::AnswerEventIssuerIsNotCurrentPlayer {
                issuer,
                current_player: current.id(),
            });
        }
        self.game.change_card(current).await?;
        Ok(())
    }
}

pub struct ReadyUseCase {
    game: GameHandle,
}

impl ReadyUseCase {
    pub fn new(game: GameHandle) -> Self {
        Self { game }
    }

    pub async fn call(&self, issuer: Uuid) -> Result<(), NetError> {
        let players = self.game.players().await;
        let player = players
            .into_iter()
            .find(|p| p.id() == issuer)
            .ok_or(NetError::UnknownIssuer(issuer))?;
        self.game.mark_ready(player).await?;
        Ok(())
    }
}

pub struct GetGameStateUseCase {
    game: GameHandle,
}

impl GetGameStateUseCase {
    pub fn new(game: GameHandle) -> Self {
        Self { game }
    }

    pub async fn call(&self) -> superego_core::GameState {
        self.game.state().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::spawn_game_actor;
    use superego_core::{Deck, Game, GameSettings, Lobby, LobbyMember, SystemClock};

    fn game_handle() -> GameHandle {
        let deck = Deck::new(
            "d",
            vec![superego_core::Card {
                question: "q".into(),
                answer_a: "a".into(),
                answer_b: "b".into(),
                answer_c: "c".into(),
            }],
        )
        .unwrap();
        let host = LobbyMember::new("host");
        let mut lobby = Lobby::new(host, GameSettings { deck, max_rounds_factor: 1 });
        lobby.add_member(LobbyMember::new("p2"));
        let game = Game::new(lobby, Box::new(SystemClock), Box::new(|_| {}));
        spawn_game_actor(game)
    }

    #[tokio::test]
    async fn answer_from_the_wrong_player_is_rejected() {
        let handle = game_handle();
        let use_case = AnswerUseCase::new(handle.clone());
        let not_current = handle
            .players()
            .await
            .into_iter()
            .find(|p| p.id() != handle.current_player().await.id())
            .unwrap();
        let result = use_case.call("A", not_current.id()).await;
        assert!(matches!(
            result,
            Err(NetError::AnswerEventIssuerIsNotCurrentPlayer { .. })
        ));
    }

    #[tokio::test]
    async fn invalid_answer_text_is_rejected_before_touching_the_game() {
        let handle = game_handle();
        let use_case = AnswerUseCase::new(handle.clone());
        let current = handle.current_player().await;
        let result = use_case.call("Z", current.id()).await;
        assert!(matches!(result, Err(NetError::InvalidAnswerValue(_))));
    }

    #[tokio::test]
    async fn ready_from_a_non_participant_is_unknown_issuer() {
        let handle = game_handle();
        let use_case = ReadyUseCase::new(handle);
        let result = use_case.call(Uuid::new_v4()).await;
        assert!(matches!(result, Err(NetError::UnknownIssuer(_))));
    }
}
