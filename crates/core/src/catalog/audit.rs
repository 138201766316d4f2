use serde::Serialize;

use crate::catalog::table::RecommendationTable;
use crate::domain::attributes::RecommendationKey;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableCoverage {
    pub origin: String,
    pub entries: usize,
    pub missing: Vec<RecommendationKey>,
}

impl TableCoverage {
    pub fn of(table: &RecommendationTable) -> Self {
        Self {
            origin: table.origin().to_string(),
            entries: table.len(),
            missing: table.missing_keys(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// A key for which the two flows recommend different products.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Divergence {
    pub key: RecommendationKey,
    pub standard_products: Vec<String>,
    pub alternate_products: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogAudit {
    pub standard: TableCoverage,
    pub alternate: TableCoverage,
    pub divergences: Vec<Divergence>,
}

impl CatalogAudit {
    pub fn compare(standard: &RecommendationTable, alternate: &RecommendationTable) -> Self {
        let divergences = RecommendationKey::domain()
            .filter_map(|key| {
                let standard_products = product_titles(standard, &key);
                let alternate_products = product_titles(alternate, &key);
                (standard_products != alternate_products).then_some(Divergence {
                    key,
                    standard_products,
                    alternate_products,
                })
            })
            .collect();

        Self {
            standard: TableCoverage::of(standard),
            alternate: TableCoverage::of(alternate),
            divergences,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.standard.is_complete() && self.alternate.is_complete()
    }
}

fn product_titles(table: &RecommendationTable, key: &RecommendationKey) -> Vec<String> {
    table
        .get(key)
        .map(|entry| entry.product_titles().into_iter().map(str::to_string).collect())
        .unwrap_or_default()
}
