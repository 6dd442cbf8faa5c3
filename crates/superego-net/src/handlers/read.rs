use superego_core::GameState;

use crate::usecases::GetGameStateUseCase;

/// `params: []`. Unlike the other actions this returns a STAT frame rather
/// than an ACK, so the router serializes the state directly instead of a
/// bare acknowledgement.
pub async fn handle(use_case: &GetGameStateUseCase) -> GameState {
    use_case.call().await
}
