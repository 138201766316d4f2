use printadvisor_core::catalog::{Catalog, RecommendationTable};
use printadvisor_core::domain::attributes::Attribute;
use printadvisor_core::domain::slots::SlotSet;
use printadvisor_core::errors::FulfillmentError;
use printadvisor_core::quiz::{QuizFlow, QuizOutcome, QuizPipeline, RecommendationSource};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::cards::recommendation_card;
use crate::event::{LexEvent, SessionAttributes};
use crate::response::{close, elicit_slot, FulfillmentState, LexResponse, Message};

/// Session attribute carrying the answers collected so far, as a JSON string.
pub const CURRENT_RESERVATION: &str = "currentReservation";

/// Routes code hook events to the quiz pipeline for their intent.
///
/// Holds only immutable tables, so one instance can serve concurrent requests.
#[derive(Clone, Debug)]
pub struct FulfillmentHandler<S = RecommendationTable> {
    standard: QuizPipeline<S>,
    alternate: QuizPipeline<S>,
    timezone: String,
}

impl FulfillmentHandler {
    pub fn from_catalog(catalog: Catalog, timezone: impl Into<String>) -> Self {
        let (standard, alternate) = catalog.into_tables();
        Self::new(
            QuizPipeline::new(QuizFlow::Standard, standard),
            QuizPipeline::new(QuizFlow::Alternate, alternate),
            timezone,
        )
    }
}

impl<S> FulfillmentHandler<S>
where
    S: RecommendationSource,
{
    pub fn new(
        standard: QuizPipeline<S>,
        alternate: QuizPipeline<S>,
        timezone: impl Into<String>,
    ) -> Self {
        Self { standard, alternate, timezone: timezone.into() }
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn pipeline(&self, flow: QuizFlow) -> &QuizPipeline<S> {
        match flow {
            QuizFlow::Standard => &self.standard,
            QuizFlow::Alternate => &self.alternate,
        }
    }

    pub fn handle(&self, event: &LexEvent) -> Result<LexResponse, FulfillmentError> {
        let intent_name = event.intent_name();
        debug!(
            event_name = "fulfillment.dispatch",
            user_id = event.user_id.as_deref().unwrap_or_default(),
            intent_name,
            bot_name = event.bot_name().unwrap_or_default(),
            invocation_source = event.invocation_source.as_deref().unwrap_or_default(),
            timezone = %self.timezone,
            "dispatching code hook event"
        );

        let flow = QuizFlow::from_intent_name(intent_name)
            .ok_or_else(|| FulfillmentError::UnsupportedIntent(intent_name.to_owned()))?;
        let slots = &event.current_intent.slots;
        let session_attributes = with_reservation(&event.session_attributes, flow, slots);

        match self.pipeline(flow).evaluate(slots)? {
            QuizOutcome::Elicit(elicitation) => {
                let mut slots = slots.clone();
                if elicitation.clears_slot() {
                    slots.clear(elicitation.slot);
                }
                info!(
                    event_name = "fulfillment.elicit",
                    intent_name,
                    slot = elicitation.slot,
                    attribute = %elicitation.attribute,
                    rejected = elicitation.clears_slot(),
                    "eliciting slot"
                );
                Ok(elicit_slot(
                    session_attributes,
                    intent_name,
                    slots,
                    elicitation.slot,
                    Message::plain_text(elicitation.message),
                ))
            }
            QuizOutcome::Recommend { key, recommendation } => {
                info!(
                    event_name = "fulfillment.recommend",
                    intent_name,
                    key = %key,
                    products = ?recommendation.product_titles(),
                    "recommendation served"
                );
                Ok(close(
                    session_attributes,
                    FulfillmentState::Fulfilled,
                    Message::plain_text(recommendation.message.clone()),
                    recommendation_card(&recommendation),
                ))
            }
        }
    }

    /// Like `handle`, but renders every error as a `Close`/`Failed` response.
    pub fn respond(&self, event: &LexEvent) -> LexResponse {
        self.handle(event).unwrap_or_else(|error| {
            warn!(
                event_name = "fulfillment.failed",
                intent_name = event.intent_name(),
                error_class = error.error_class(),
                error = %error,
                "fulfillment failed"
            );
            let session_attributes = match QuizFlow::from_intent_name(event.intent_name()) {
                Some(flow) => {
                    with_reservation(&event.session_attributes, flow, &event.current_intent.slots)
                }
                None => event.session_attributes.clone(),
            };
            close(
                session_attributes,
                FulfillmentState::Failed,
                Message::plain_text(error.failure_message()),
                None,
            )
        })
    }
}

fn with_reservation(
    session_attributes: &SessionAttributes,
    flow: QuizFlow,
    slots: &SlotSet,
) -> SessionAttributes {
    let answers = flow.schema().extract(slots);
    let reservation: Map<String, Value> = Attribute::ALL
        .into_iter()
        .map(|attribute| {
            let answer = answers.get(attribute).map_or(Value::Null, Value::from);
            (flow.reservation_key(attribute).to_owned(), answer)
        })
        .collect();

    let mut session_attributes = session_attributes.clone();
    session_attributes
        .insert(CURRENT_RESERVATION.to_owned(), Value::Object(reservation).to_string());
    session_attributes
}
