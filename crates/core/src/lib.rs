pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod quiz;
pub mod validation;

pub use catalog::{Catalog, CatalogAudit, CatalogError, RecommendationTable};
pub use domain::attributes::{
    Attribute, ColorMode, Connectivity, PaperSize, PrintType, RecommendationKey,
};
pub use domain::recommendation::{ProductCard, Recommendation};
pub use domain::slots::{SlotSchema, SlotSet};
pub use errors::FulfillmentError;
pub use quiz::{QuizFlow, QuizOutcome, QuizPipeline};
