pub mod audit;
pub mod table;

use std::path::PathBuf;

use thiserror::Error;

use crate::config::CatalogConfig;
use crate::domain::attributes::RecommendationKey;
use crate::quiz::QuizFlow;

pub use audit::{CatalogAudit, Divergence, TableCoverage};
pub use table::RecommendationTable;

pub const STANDARD_TABLE: &str = include_str!("../../data/standard.toml");
pub const ALTERNATE_TABLE: &str = include_str!("../../data/alternate.toml");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read recommendation table `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse recommendation table `{origin}`: {source}")]
    Parse { origin: String, source: toml::de::Error },
    #[error("recommendation table `{origin}` has more than one entry for `{key}`")]
    DuplicateKey { origin: String, key: RecommendationKey },
    #[error("recommendation table `{origin}` has an empty message for `{key}`")]
    EmptyMessage { origin: String, key: RecommendationKey },
    #[error("recommendation table `{origin}` lists {count} cards for `{key}` (at most 5)")]
    TooManyCards { origin: String, key: RecommendationKey, count: usize },
}

/// The recommendation tables for both quiz flows, loaded once at startup.
#[derive(Clone, Debug)]
pub struct Catalog {
    standard: RecommendationTable,
    alternate: RecommendationTable,
}

impl Catalog {
    pub fn new(standard: RecommendationTable, alternate: RecommendationTable) -> Self {
        Self { standard, alternate }
    }

    pub fn embedded() -> Result<Self, CatalogError> {
        Ok(Self::new(
            embedded_table(QuizFlow::Standard)?,
            embedded_table(QuizFlow::Alternate)?,
        ))
    }

    /// Uses an external table file for a flow when one is configured and the
    /// embedded data otherwise.
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let standard = match &config.standard_path {
            Some(path) => RecommendationTable::from_path(path)?,
            None => embedded_table(QuizFlow::Standard)?,
        };
        let alternate = match &config.alternate_path {
            Some(path) => RecommendationTable::from_path(path)?,
            None => embedded_table(QuizFlow::Alternate)?,
        };

        Ok(Self::new(standard, alternate))
    }

    pub fn table(&self, flow: QuizFlow) -> &RecommendationTable {
        match flow {
            QuizFlow::Standard => &self.standard,
            QuizFlow::Alternate => &self.alternate,
        }
    }

    pub fn into_tables(self) -> (RecommendationTable, RecommendationTable) {
        (self.standard, self.alternate)
    }

    pub fn audit(&self) -> CatalogAudit {
        CatalogAudit::compare(&self.standard, &self.alternate)
    }
}

pub fn embedded_table(flow: QuizFlow) -> Result<RecommendationTable, CatalogError> {
    let raw = match flow {
        QuizFlow::Standard => STANDARD_TABLE,
        QuizFlow::Alternate => ALTERNATE_TABLE,
    };
    RecommendationTable::from_toml_str(format!("embedded:{}", flow.intent_name()), raw)
}
