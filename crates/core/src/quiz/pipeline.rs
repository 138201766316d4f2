use crate::catalog::RecommendationTable;
use crate::domain::attributes::{
    Attribute, AttributeValue, ColorMode, Connectivity, KeyResolution, PaperSize, PrintType,
    RecommendationKey,
};
use crate::domain::recommendation::Recommendation;
use crate::domain::slots::{ExtractedAttributes, SlotSet};
use crate::errors::FulfillmentError;
use crate::quiz::QuizFlow;
use crate::validation::{validate, Validation};

pub trait RecommendationSource: Send + Sync {
    fn recommend(&self, key: &RecommendationKey) -> Option<&Recommendation>;
}

impl RecommendationSource for RecommendationTable {
    fn recommend(&self, key: &RecommendationKey) -> Option<&Recommendation> {
        self.get(key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElicitReason {
    /// The engine has not collected this slot yet.
    Unset,
    /// The collected value failed validation and must be cleared.
    Rejected(FulfillmentError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Elicitation {
    pub attribute: Attribute,
    pub slot: &'static str,
    pub message: String,
    pub reason: ElicitReason,
}

impl Elicitation {
    pub fn clears_slot(&self) -> bool {
        matches!(self.reason, ElicitReason::Rejected(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Elicit(Elicitation),
    Recommend { key: RecommendationKey, recommendation: Recommendation },
}

/// One quiz flow: extraction, validation and lookup over a recommendation
/// source. Both flows share this pipeline and differ only in schema and data.
#[derive(Clone, Debug)]
pub struct QuizPipeline<S = RecommendationTable> {
    flow: QuizFlow,
    source: S,
}

impl<S> QuizPipeline<S>
where
    S: RecommendationSource,
{
    pub fn new(flow: QuizFlow, source: S) -> Self {
        Self { flow, source }
    }

    pub fn flow(&self) -> QuizFlow {
        self.flow
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn evaluate(&self, slots: &SlotSet) -> Result<QuizOutcome, FulfillmentError> {
        let schema = self.flow.schema();
        let attributes = schema.extract(slots);

        if let Validation::Invalid { attribute, message } = validate(&attributes) {
            let slot = schema.slot_name(attribute);
            let value = attributes.get(attribute).unwrap_or_default().to_string();
            return Ok(QuizOutcome::Elicit(Elicitation {
                attribute,
                slot,
                message: message.to_string(),
                reason: ElicitReason::Rejected(FulfillmentError::InvalidSlotValue {
                    attribute,
                    slot: slot.to_string(),
                    value,
                }),
            }));
        }

        match RecommendationKey::resolve(&attributes) {
            KeyResolution::Incomplete { missing } => Ok(QuizOutcome::Elicit(Elicitation {
                attribute: missing,
                slot: schema.slot_name(missing),
                message: elicitation_prompt(missing),
                reason: ElicitReason::Unset,
            })),
            KeyResolution::Unrecognized { .. } => Err(self.missing(describe(&attributes))),
            KeyResolution::Complete(key) => self
                .source
                .recommend(&key)
                .map(|recommendation| QuizOutcome::Recommend {
                    key,
                    recommendation: recommendation.clone(),
                })
                .ok_or_else(|| self.missing(key.to_string())),
        }
    }

    fn missing(&self, key: String) -> FulfillmentError {
        FulfillmentError::MissingRecommendation {
            intent_name: self.flow.intent_name().to_string(),
            key,
        }
    }
}

pub fn elicitation_prompt(attribute: Attribute) -> String {
    match attribute {
        Attribute::PaperSize => {
            format!("What paper size do you need: {}?", options(&PaperSize::labels()))
        }
        Attribute::PrintType => {
            format!("What do you need the printer to do: {}?", options(&PrintType::labels()))
        }
        Attribute::Connectivity => {
            format!("How will the printer connect: {}?", options(&Connectivity::labels()))
        }
        Attribute::Color => {
            format!("Do you print in {}?", options(&ColorMode::labels()))
        }
    }
}

fn options(labels: &[&str]) -> String {
    match labels {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}

fn describe(attributes: &ExtractedAttributes) -> String {
    [Attribute::Color, Attribute::Connectivity, Attribute::PaperSize, Attribute::PrintType]
        .into_iter()
        .map(|attribute| attributes.get(attribute).unwrap_or("<unset>"))
        .collect::<Vec<_>>()
        .join(" / ")
}
