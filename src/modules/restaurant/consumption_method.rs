use serde::{Deserialize, Serialize};
use std::{borrow::Cow, str::FromStr};
use validator::ValidationError;

pub const CONSUMPTION_METHODS: [&str; 2] = ["DINE_IN", "TAKEAWAY"];

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsumptionMethod {
    DineIn,
    Takeaway,
}

impl ConsumptionMethod {
    pub const ALL: [ConsumptionMethod; 2] = [Self::DineIn, Self::Takeaway];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DineIn => CONSUMPTION_METHODS[0],
            Self::Takeaway => CONSUMPTION_METHODS[1],
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct InvalidConsumptionMethod;

impl FromStr for ConsumptionMethod {
    type Err = InvalidConsumptionMethod;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.to_uppercase();
        match CONSUMPTION_METHODS
            .iter()
            .position(|method| *method == normalized)
        {
            Some(0) => Ok(Self::DineIn),
            Some(1) => Ok(Self::Takeaway),
            _ => Err(InvalidConsumptionMethod),
        }
    }
}

pub fn validate_consumption_method(raw: &str) -> Result<(), ValidationError> {
    match raw.parse::<ConsumptionMethod>() {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("INVALID_CONSUMPTION_METHOD")
            .with_message(Cow::from("Invalid consumption method"))),
    }
}
