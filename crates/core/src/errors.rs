use thiserror::Error;

use crate::domain::attributes::Attribute;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FulfillmentError {
    #[error("invalid {attribute} value `{value}` in slot `{slot}`")]
    InvalidSlotValue { attribute: Attribute, slot: String, value: String },
    #[error("no recommendation for `{key}` in intent `{intent_name}`")]
    MissingRecommendation { intent_name: String, key: String },
    #[error("intent `{0}` is not supported by this handler")]
    UnsupportedIntent(String),
}

impl FulfillmentError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidSlotValue { .. } => "That answer is not one of the options I know about.",
            Self::MissingRecommendation { .. } => {
                "Sorry, I could not find a printer for that combination of answers."
            }
            Self::UnsupportedIntent(_) => "Sorry, I cannot help with that request.",
        }
    }

    pub fn error_class(&self) -> &'static str {
        match self {
            Self::InvalidSlotValue { .. } => "invalid_slot_value",
            Self::MissingRecommendation { .. } => "missing_recommendation",
            Self::UnsupportedIntent(_) => "unsupported_intent",
        }
    }

    /// User-facing text followed by the diagnostic detail, for Failed closes.
    pub fn failure_message(&self) -> String {
        format!("{} ({self})", self.user_message())
    }
}
