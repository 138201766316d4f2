//! Lex Integration - dialog code hook for the printer quiz bot
//!
//! This crate speaks the Lex V1 fulfillment protocol on behalf of printadvisor:
//! - **Events** (`event`) - the inbound code hook payload
//! - **Responses** (`response`) - `dialogAction` shapes and their builders
//! - **Cards** (`cards`) - generic response cards with product attachments
//! - **Fulfillment** (`fulfillment`) - routes an intent to its quiz pipeline
//!
//! # Architecture
//!
//! ```text
//! LexEvent → FulfillmentHandler → QuizPipeline (standard | alternate) → RecommendationTable
//!                  ↓
//!            LexResponse ← response builders + card builder
//! ```
//!
//! # Key Types
//!
//! - `FulfillmentHandler` - intent dispatcher holding both pipelines
//! - `LexResponse` / `DialogAction` - outbound wire structure
//! - `ResponseCardBuilder` - constructs generic cards, capped at the host limits

pub mod cards;
pub mod event;
pub mod fulfillment;
pub mod response;

pub use cards::{build_response_card, ResponseCardBuilder};
pub use event::{CurrentIntent, LexEvent, SessionAttributes};
pub use fulfillment::{FulfillmentHandler, CURRENT_RESERVATION};
pub use response::{DialogAction, FulfillmentState, LexResponse, Message};
