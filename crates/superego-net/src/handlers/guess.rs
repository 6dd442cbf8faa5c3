use crate::error::NetError;
use crate::events::Event;
use crate::usecases::GuessUseCase;

/// `params: [answer_text, bet]`.
pub async fn handle(use_case: &GuessUseCase, event: &Event) -> Result<(), NetError> {
    let answer_text = event
        .params
        .first()
        .ok_or(NetError::EventParametersMissing(&["answer", "bet"]))?;
    let bet_text = event
        .params
        .get(1)
        .ok_or(NetError::EventParametersMissing(&["bet"]))?;
    let bet: u32 = bet_text
        .parse()
        .map_err(|_| NetError::EventParametersMissing(&["bet"]))?;
    use_case.call(answer_text, bet, event.issuer).await
}
