use crate::error::NetError;
use crate::events::Event;
use crate::usecases::AnswerUseCase;

/// `params: [answer_text]`.
pub async fn handle(use_case: &AnswerUseCase, event: &Event) -> Result<(), NetError> {
    let answer_text = event
        .params
        .first()
        .ok_or(NetError::EventParametersMissing(&["answer"]))?;
    use_case.call(answer_text, event.issuer).await
}
