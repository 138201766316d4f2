pub mod attributes;
pub mod recommendation;
pub mod slots;

pub use attributes::{
    Attribute, AttributeValue, ColorMode, Connectivity, KeyResolution, PaperSize, PrintType,
    RecommendationKey,
};
pub use recommendation::{ProductCard, Recommendation, MAX_CARDS};
pub use slots::{ExtractedAttributes, SlotSchema, SlotSet};
