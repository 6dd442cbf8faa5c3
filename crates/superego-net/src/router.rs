//! Dispatches a decoded [`Event`] to its use case and turns the outcome
//! into the feedback frame owed back to the originating socket.

use tokio::sync::mpsc;

use crate::actor::GameHandle;
use crate::broadcast::Broadcast;
use crate::error::NetError;
use crate::events::{Event, EventAction};
use crate::feedback;
use crate::handlers;
use crate::usecases::{AnswerUseCase, ChangeCardUseCase, GetGameStateUseCase, GuessUseCase, ReadyUseCase};

pub struct Router {
    answer: AnswerUseCase,
    guess: GuessUseCase,
    change_card: ChangeCardUseCase,
    ready: ReadyUseCase,
    get_state: GetGameStateUseCase,
    broadcast: Broadcast,
}

impl Router {
    pub fn new(game: GameHandle, broadcast: Broadcast) -> Self {
        Self {
            answer: AnswerUseCase::new(game.clone()),
            guess: GuessUseCase::new(game.clone()),
            change_card: ChangeCardUseCase::new(game.clone()),
            ready: ReadyUseCase::new(game.clone()),
            get_state: GetGameStateUseCase::new(game),
            broadcast,
        }
    }

    /// `listener` is the sending half of the calling connection's outbound
    /// queue, used only by SUBSCRIBE. Returns the feedback frame to send
    /// back to that same connection; the caller is responsible for turning
    /// an `Err` into an ERR frame.
    pub async fn route(
        &self,
        event: Event,
        listener: mpsc::UnboundedSender<String>,
    ) -> Result<String, NetError> {
        match event.action {
            EventAction::Answer => {
                handlers::answer(&self.answer, &event).await?;
                Ok(feedback::acknowledgement())
            }
            EventAction::Guess => {
                handlers::guess(&self.guess, &event).await?;
                Ok(feedback::acknowledgement())
            }
            EventAction::ChangeCard => {
                handlers::change_card(&self.change_card, &event).await?;
                Ok(feedback::acknowledgement())
            }
            EventAction::Ready => {
                handlers::ready(&self.ready, &event).await?;
                Ok(feedback::acknowledgement())
            }
            EventAction::Subscribe => {
                handlers::subscribe(&self.broadcast, listener).await;
                Ok(feedback::acknowledgement())
            }
            EventAction::Read => {
                let state = handlers::read(&self.get_state).await;
                Ok(feedback::game_state(&state))
            }
        }
    }

    pub fn broadcast(&self) -> &Broadcast {
        &self.broadcast
    }
}
