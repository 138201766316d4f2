pub mod pipeline;

use serde::{Deserialize, Serialize};

use crate::domain::attributes::Attribute;
use crate::domain::slots::SlotSchema;

pub use pipeline::{ElicitReason, Elicitation, QuizOutcome, QuizPipeline, RecommendationSource};

/// The two printer quiz variants. They ask the same questions under
/// different slot names and are answered from separately authored tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizFlow {
    Standard,
    Alternate,
}

static STANDARD_SCHEMA: SlotSchema = SlotSchema {
    paper_size: "slotOne",
    print_type: "slotTwo",
    connectivity: "slotThree",
    color: "slotFour",
};

static ALTERNATE_SCHEMA: SlotSchema = SlotSchema {
    paper_size: "slotBan",
    print_type: "slotRan",
    connectivity: "slotBap",
    color: "slotSup",
};

impl QuizFlow {
    pub const ALL: [QuizFlow; 2] = [QuizFlow::Standard, QuizFlow::Alternate];

    pub fn intent_name(self) -> &'static str {
        match self {
            Self::Standard => "QuizContinue",
            Self::Alternate => "QuizContinueA",
        }
    }

    pub fn from_intent_name(intent_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flow| flow.intent_name() == intent_name)
    }

    pub fn schema(self) -> &'static SlotSchema {
        match self {
            Self::Standard => &STANDARD_SCHEMA,
            Self::Alternate => &ALTERNATE_SCHEMA,
        }
    }

    /// Key recording `attribute` in the `currentReservation` session attribute.
    /// The alternate flow suffixes every key with `a`.
    pub fn reservation_key(self, attribute: Attribute) -> &'static str {
        match (self, attribute) {
            (Self::Standard, Attribute::Color) => "color_type",
            (Self::Standard, Attribute::Connectivity) => "conc_type",
            (Self::Standard, Attribute::PaperSize) => "PaperSize",
            (Self::Standard, Attribute::PrintType) => "Print-type",
            (Self::Alternate, Attribute::Color) => "color_typea",
            (Self::Alternate, Attribute::Connectivity) => "conc_typea",
            (Self::Alternate, Attribute::PaperSize) => "PaperSizea",
            (Self::Alternate, Attribute::PrintType) => "Print-typea",
        }
    }
}
