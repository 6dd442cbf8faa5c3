//! Single-writer actor: one task owns the live [`Game`]; every other task
//! talks to it by sending a [`GameCommand`] and awaiting the reply. This is
//! the concurrency model the core's design notes call for — no fine-grained
//! locking, and game mutations never interleave.

use tokio::sync::{mpsc, oneshot};

use superego_core::{Answer, Card, Game, GameError, GameState, Guess, Player};

enum GameCommand {
    Answer(Player, Answer, oneshot::Sender<Result<(), GameError>>),
    Guess(Player, Guess, oneshot::Sender<Result<(), GameError>>),
    ChangeCard(Player, oneshot::Sender<Result<(), GameError>>),
    MarkReady(Player, oneshot::Sender<Result<(), GameError>>),
    State(oneshot::Sender<GameState>),
    CurrentPlayer(oneshot::Sender<Player>),
    Players(oneshot::Sender<Vec<Player>>),
    GuessingPlayers(oneshot::Sender<Vec<Player>>),
    CurrentCard(oneshot::Sender<Card>),
}

/// A cheaply cloneable front door to a [`Game`] running on its own task.
#[derive(Clone)]
pub struct GameHandle {
    commands: mpsc::UnboundedSender<GameCommand>,
}

/// `game` is moved onto a dedicated task and driven to completion there;
/// the returned handle is the only way back in. Panics if the task can no
/// longer be reached (it should never exit while a handle is alive).
pub fn spawn_game_actor(mut game: Game) -> GameHandle {
    let (tx, mut rx) = mpsc::unbounded_channel::<GameCommand>();
    tokio::spawn(async move {
        while let Some(command) = rx.recv().await {
            match command {
                GameCommand::Answer(player, answer, reply) => {
                    let _ = reply.send(game.answer(&player, answer));
                }
                GameCommand::Guess(player, guess, reply) => {
                    let _ = reply.send(game.guess(&player, guess));
                }
                GameCommand::ChangeCard(player, reply) => {
                    let _ = reply.send(game.change_card(&player));
                }
                GameCommand::MarkReady(player, reply) => {
                    let _ = reply.send(game.mark_ready(&player));
                }
                GameCommand::State(reply) => {
                    let _ = reply.send(game.state());
                }
                GameCommand::CurrentPlayer(reply) => {
                    let _ = reply.send(game.current_player());
                }
                GameCommand::Players(reply) => {
                    let _ = reply.send(game.players());
                }
                GameCommand::GuessingPlayers(reply) => {
                    let _ = reply.send(game.guessing_players());
                }
                GameCommand::CurrentCard(reply) => {
                    let _ = reply.send(game.current_card());
                }
            }
        }
        tracing::debug!("game actor shutting down: no handles remain");
    });
    GameHandle { commands: tx }
}

const DISCONNECTED: &str = "game actor task is gone";

impl GameHandle {
    pub async fn answer(&self, player: Player, answer: Answer) -> Result<(), GameError> {
        let (tx, rx) = oneshot::channel();
        self.commands.send(GameCommand::Answer(player, answer, tx)).expect(DISCONNECTED);
        rx.await.expect(DISCONNECTED)
    }

    pub async fn guess(&self, player: Player, guess: Guess) -> Result<(), GameError> {
        let (tx, rx) = oneshot::channel();
        self.commands.send(GameCommand::Guess(player, guess, tx)).expect(DISCONNECTED);
        rx.await.expect(DISCONNECTED)
    }

    pub async fn change_card(&self, player: Player) -> Result<(), GameError> {
        let (tx, rx) = oneshot::channel();
        self.commands.send(GameCommand::ChangeCard(player, tx)).expect(DISCONNECTED);
        rx.await.expect(DISCONNECTED)
    }

    pub async fn mark_ready(&self, player: Player) -> Result<(), GameError> {
        let (tx, rx) = oneshot::channel();
        self.commands.send(GameCommand::MarkReady(player, tx)).expect(DISCONNECTED);
        rx.await.expect(DISCONNECTED)
    }

    pub async fn state(&self) -> GameState {
        let (tx, rx) = oneshot::channel();
        self.commands.send(GameCommand::State(tx)).expect(DISCONNECTED);
        rx.await.expect(DISCONNECTED)
    }

    pub async fn current_player(&self) -> Player {
        let (tx, rx) = oneshot::channel();
        self.commands.send(GameCommand::CurrentPlayer(tx)).expect(DISCONNECTED);
        rx.await.expect(DISCONNECTED)
    }

    pub async fn players(&self) -> Vec<Player> {
        let (tx, rx) = oneshot::channel();
        self.commands.send(GameCommand::Players(tx)).expect(DISCONNECTED);
        rx.await.expect(DISCONNECTED)
    }

    pub async fn guessing_players(&self) -> Vec<Player> {
        let (tx, rx) = oneshot::channel();
        self.commands.send(GameCommand::GuessingPlayers(tx)).expect(DISCONNECTED);
        rx.await.expect(DISCONNECTED)
    }

    #[allow(dead_code)]
    pub async fn current_card(&self) -> Card {
        let (tx, rx) = oneshot::channel();
        self.commands.send(GameCommand::CurrentCard(tx)).expect(DISCONNECTED);
        rx.await.expect(DISCONNECTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use superego_core::{Deck, GameSettings, Lobby, LobbyMember, SystemClock};

    fn lobby() -> Lobby {
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
        lobby
    }

    #[tokio::test]
    async fn actor_answers_queries_without_blocking_on_each_other() {
        let game = Game::new(lobby(), Box::new(SystemClock), Box::new(|_| {}));
        let handle = spawn_game_actor(game);
        let current = handle.current_player().await;
        let players = handle.players().await;
        assert!(players.iter().any(|p| p.id() == current.id()));
    }

    #[tokio::test]
    async fn commands_are_applied_in_submission_order() {
        let game = Game::new(lobby(), Box::new(SystemClock), Box::new(|_| {}));
        let handle = spawn_game_actor(game);
        let current = handle.current_player().await;
        handle.answer(current.clone(), Answer::A).await.unwrap();
        let state = handle.state().await;
        assert_eq!(state.phase, superego_core::GamePhaseName::Guess);
    }
}
