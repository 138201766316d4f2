use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::CatalogError;
use crate::domain::attributes::{ColorMode, Connectivity, PaperSize, PrintType, RecommendationKey};
use crate::domain::recommendation::{ProductCard, Recommendation, MAX_CARDS};

/// Immutable mapping from a fully resolved key to its recommendation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecommendationTable {
    origin: String,
    entries: BTreeMap<RecommendationKey, Recommendation>,
}

impl RecommendationTable {
    /// Parses the TOML table format. Duplicate keys, blank messages and
    /// oversized card lists are rejected rather than silently resolved.
    pub fn from_toml_str(origin: impl Into<String>, raw: &str) -> Result<Self, CatalogError> {
        let origin = origin.into();
        let file = toml::from_str::<TableFile>(raw)
            .map_err(|source| CatalogError::Parse { origin: origin.clone(), source })?;

        let mut entries = BTreeMap::new();
        for record in file.recommendation {
            let key = RecommendationKey::new(
                record.color,
                record.connectivity,
                record.paper_size,
                record.print_type,
            );

            if record.message.trim().is_empty() {
                return Err(CatalogError::EmptyMessage { origin, key });
            }
            if record.cards.len() > MAX_CARDS {
                return Err(CatalogError::TooManyCards { origin, key, count: record.cards.len() });
            }

            let recommendation = Recommendation { message: record.message, cards: record.cards };
            if entries.insert(key, recommendation).is_some() {
                return Err(CatalogError::DuplicateKey { origin, key });
            }
        }

        Ok(Self { origin, entries })
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;
        Self::from_toml_str(path.display().to_string(), &raw)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn get(&self, key: &RecommendationKey) -> Option<&Recommendation> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RecommendationKey, &Recommendation)> {
        self.entries.iter()
    }

    /// Keys of the declared domain that have no entry.
    pub fn missing_keys(&self) -> Vec<RecommendationKey> {
        RecommendationKey::domain().filter(|key| !self.entries.contains_key(key)).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_keys().is_empty()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    #[serde(default)]
    recommendation: Vec<EntryRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntryRecord {
    color: ColorMode,
    connectivity: Connectivity,
    paper_size: PaperSize,
    print_type: PrintType,
    message: String,
    #[serde(default)]
    cards: Vec<ProductCard>,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::RecommendationTable;
    use crate::catalog::CatalogError;
    use crate::domain::attributes::{
        ColorMode, Connectivity, PaperSize, PrintType, RecommendationKey,
    };

    const ONE_ENTRY: &str = r#"
[[recommendation]]
color = "color"
connectivity = "WiFi Wireless"
paper_size = "Letter Legal"
print_type = "Print Only"
message = "Try this one."

[[recommendation.cards]]
title = "Printer A"
subtitle = "A fine printer"
link_url = "https://example.com/a"
image_url = "https://example.com/a.jpg"
"#;

    fn key() -> RecommendationKey {
        RecommendationKey::new(
            ColorMode::Color,
            Connectivity::WifiWireless,
            PaperSize::LetterLegal,
            PrintType::PrintOnly,
        )
    }

    #[test]
    fn parses_entry_with_cards() {
        let table = RecommendationTable::from_toml_str("inline", ONE_ENTRY).expect("table parses");

        assert_eq!(table.len(), 1);
        let entry = table.get(&key()).expect("entry present");
        assert_eq!(entry.message, "Try this one.");
        assert_eq!(entry.product_titles(), vec!["Printer A"]);
        assert!(!table.is_complete());
        assert_eq!(table.missing_keys().len(), RecommendationKey::DOMAIN_SIZE - 1);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let doubled = format!("{ONE_ENTRY}\n{ONE_ENTRY}");
        let error = RecommendationTable::from_toml_str("inline", &doubled)
            .expect_err("duplicate key must fail");

        assert!(matches!(error, CatalogError::DuplicateKey { key: duplicate, .. } if duplicate == key()));
    }

    #[test]
    fn unknown_enumeration_values_fail_to_parse() {
        let raw = ONE_ENTRY.replace("\"WiFi Wireless\"", "\"Bluetooth\"");
        let error =
            RecommendationTable::from_toml_str("inline", &raw).expect_err("unknown value must fail");

        assert!(matches!(error, CatalogError::Parse { ref origin, .. } if origin == "inline"));
    }

    #[test]
    fn blank_message_is_rejected() {
        let raw = ONE_ENTRY.replace("Try this one.", "  ");
        let error = RecommendationTable::from_toml_str("inline", &raw).expect_err("blank message");

        assert!(matches!(error, CatalogError::EmptyMessage { .. }));
    }

    #[test]
    fn more_than_five_cards_is_rejected() {
        let card = r#"
[[recommendation.cards]]
title = "Extra"
subtitle = "Extra"
link_url = "https://example.com/x"
image_url = "https://example.com/x.jpg"
"#;
        let raw = format!("{ONE_ENTRY}{}", card.repeat(5));
        let error = RecommendationTable::from_toml_str("inline", &raw).expect_err("six cards");

        assert!(matches!(error, CatalogError::TooManyCards { count: 6, .. }));
    }

    #[test]
    fn loads_from_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("table.toml");
        fs::write(&path, ONE_ENTRY).expect("write table");

        let table = RecommendationTable::from_path(&path).expect("table loads");
        assert_eq!(table.origin(), path.display().to_string());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("absent.toml");

        let error = RecommendationTable::from_path(&path).expect_err("missing file");
        assert!(error.to_string().contains("absent.toml"));
    }
}
