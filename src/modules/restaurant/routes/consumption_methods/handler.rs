use super::types::response;
use crate::modules::restaurant::consumption_method::ConsumptionMethod;

pub async fn handler() -> response::Response {
    Ok(response::Success::ConsumptionMethods(
        ConsumptionMethod::ALL
            .iter()
            .map(ConsumptionMethod::as_str)
            .collect(),
    ))
}
