use crate::error::NetError;
use crate::events::Event;
use crate::usecases::ReadyUseCase;

/// `params: []`.
pub async fn handle(use_case: &ReadyUseCase, event: &Event) -> Result<(), NetError> {
    use_case.call(event.issuer).await
}
