use crate::error::NetError;
use crate::events::Event;
use crate::usecases::ChangeCardUseCase;

/// `params: []`.
pub async fn handle(use_case: &ChangeCardUseCase, event: &Event) -> Result<(), NetError> {
    use_case.call(event.issuer).await
}
