use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::slots::ExtractedAttributes;

/// The four quiz questions, in the order the flows elicit them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    PaperSize,
    PrintType,
    Connectivity,
    Color,
}

impl Attribute {
    pub const ALL: [Attribute; 4] =
        [Attribute::PaperSize, Attribute::PrintType, Attribute::Connectivity, Attribute::Color];

    pub fn label(self) -> &'static str {
        match self {
            Self::PaperSize => "paper size",
            Self::PrintType => "print type",
            Self::Connectivity => "connectivity",
            Self::Color => "color",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A closed set of slot values for one attribute.
///
/// `parse` is an exact match on the canonical label unless the implementor
/// says otherwise.
pub trait AttributeValue: Copy + Sized + 'static {
    const ATTRIBUTE: Attribute;
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|candidate| candidate.as_str() == value)
    }

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|value| value.as_str()).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColorMode {
    #[serde(rename = "black and white")]
    BlackAndWhite,
    #[serde(rename = "color")]
    Color,
}

impl AttributeValue for ColorMode {
    const ATTRIBUTE: Attribute = Attribute::Color;
    const ALL: &'static [Self] = &[Self::BlackAndWhite, Self::Color];

    fn as_str(self) -> &'static str {
        match self {
            Self::BlackAndWhite => "black and white",
            Self::Color => "color",
        }
    }

    // The dialog engine hands back whatever casing the user typed.
    fn parse(value: &str) -> Option<Self> {
        let lowered = value.to_lowercase();
        Self::ALL.iter().copied().find(|candidate| candidate.as_str() == lowered)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Connectivity {
    #[serde(rename = "Ethernet Wired")]
    EthernetWired,
    #[serde(rename = "WiFi Wireless")]
    WifiWireless,
}

impl AttributeValue for Connectivity {
    const ATTRIBUTE: Attribute = Attribute::Connectivity;
    const ALL: &'static [Self] = &[Self::EthernetWired, Self::WifiWireless];

    fn as_str(self) -> &'static str {
        match self {
            Self::EthernetWired => "Ethernet Wired",
            Self::WifiWireless => "WiFi Wireless",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaperSize {
    #[serde(rename = "Letter Legal")]
    LetterLegal,
    #[serde(rename = "Letter Legal 11x17")]
    LetterLegalTabloid,
    #[serde(rename = "24\"-44\" Wide Format")]
    WideFormat,
}

impl AttributeValue for PaperSize {
    const ATTRIBUTE: Attribute = Attribute::PaperSize;
    const ALL: &'static [Self] = &[Self::LetterLegal, Self::LetterLegalTabloid, Self::WideFormat];

    fn as_str(self) -> &'static str {
        match self {
            Self::LetterLegal => "Letter Legal",
            Self::LetterLegalTabloid => "Letter Legal 11x17",
            Self::WideFormat => "24\"-44\" Wide Format",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PrintType {
    #[serde(rename = "Print Only")]
    PrintOnly,
    #[serde(rename = "Print Copy Scan")]
    PrintCopyScan,
    #[serde(rename = "Print Copy Scan Fax")]
    PrintCopyScanFax,
}

impl AttributeValue for PrintType {
    const ATTRIBUTE: Attribute = Attribute::PrintType;
    const ALL: &'static [Self] = &[Self::PrintOnly, Self::PrintCopyScan, Self::PrintCopyScanFax];

    fn as_str(self) -> &'static str {
        match self {
            Self::PrintOnly => "Print Only",
            Self::PrintCopyScan => "Print Copy Scan",
            Self::PrintCopyScanFax => "Print Copy Scan Fax",
        }
    }
}

macro_rules! display_as_label {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

display_as_label!(ColorMode, Connectivity, PaperSize, PrintType);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecommendationKey {
    pub color: ColorMode,
    pub connectivity: Connectivity,
    pub paper_size: PaperSize,
    pub print_type: PrintType,
}

/// Result of turning extracted slot values into a table key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyResolution {
    Complete(RecommendationKey),
    Incomplete { missing: Attribute },
    Unrecognized { attribute: Attribute, value: String },
}

impl RecommendationKey {
    pub const DOMAIN_SIZE: usize = 36;

    pub fn new(
        color: ColorMode,
        connectivity: Connectivity,
        paper_size: PaperSize,
        print_type: PrintType,
    ) -> Self {
        Self { color, connectivity, paper_size, print_type }
    }

    /// Every key in the declared attribute domains.
    pub fn domain() -> impl Iterator<Item = RecommendationKey> {
        ColorMode::ALL.iter().flat_map(|&color| {
            Connectivity::ALL.iter().flat_map(move |&connectivity| {
                PaperSize::ALL.iter().flat_map(move |&paper_size| {
                    PrintType::ALL.iter().map(move |&print_type| {
                        RecommendationKey::new(color, connectivity, paper_size, print_type)
                    })
                })
            })
        })
    }

    pub fn resolve(attributes: &ExtractedAttributes) -> KeyResolution {
        if let Some(missing) = attributes.first_missing() {
            return KeyResolution::Incomplete { missing };
        }

        let paper_size = match parse_present::<PaperSize>(attributes) {
            Ok(value) => value,
            Err(unrecognized) => return unrecognized,
        };
        let print_type = match parse_present::<PrintType>(attributes) {
            Ok(value) => value,
            Err(unrecognized) => return unrecognized,
        };
        let connectivity = match parse_present::<Connectivity>(attributes) {
            Ok(value) => value,
            Err(unrecognized) => return unrecognized,
        };
        let color = match parse_present::<ColorMode>(attributes) {
            Ok(value) => value,
            Err(unrecognized) => return unrecognized,
        };

        KeyResolution::Complete(RecommendationKey::new(color, connectivity, paper_size, print_type))
    }
}

fn parse_present<V: AttributeValue>(attributes: &ExtractedAttributes) -> Result<V, KeyResolution> {
    let raw = attributes.get(V::ATTRIBUTE).unwrap_or_default();
    V::parse(raw).ok_or_else(|| KeyResolution::Unrecognized {
        attribute: V::ATTRIBUTE,
        value: raw.to_string(),
    })
}

impl fmt::Display for RecommendationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {} / {}", self.color, self.connectivity, self.paper_size, self.print_type)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{
        Attribute, AttributeValue, ColorMode, Connectivity, KeyResolution, PaperSize, PrintType,
        RecommendationKey,
    };
    use crate::domain::slots::ExtractedAttributes;

    #[test]
    fn domain_covers_every_combination_once() {
        let keys: BTreeSet<_> = RecommendationKey::domain().collect();
        assert_eq!(keys.len(), RecommendationKey::DOMAIN_SIZE);
        assert_eq!(RecommendationKey::domain().count(), RecommendationKey::DOMAIN_SIZE);
    }

    #[test]
    fn color_parses_case_insensitively() {
        assert_eq!(ColorMode::parse("COLOR"), Some(ColorMode::Color));
        assert_eq!(ColorMode::parse("Black And White"), Some(ColorMode::BlackAndWhite));
        assert_eq!(ColorMode::parse("purple"), None);
    }

    #[test]
    fn other_attributes_parse_exactly() {
        assert_eq!(Connectivity::parse("WiFi Wireless"), Some(Connectivity::WifiWireless));
        assert_eq!(Connectivity::parse("ethernet wired"), None);
        assert_eq!(PaperSize::parse("24\"-44\" Wide Format"), Some(PaperSize::WideFormat));
        assert_eq!(PaperSize::parse("letter legal"), None);
        assert_eq!(PrintType::parse("Print Copy Scan Fax"), Some(PrintType::PrintCopyScanFax));
    }

    #[test]
    fn resolve_reports_first_missing_attribute_in_elicitation_order() {
        let attributes = ExtractedAttributes {
            paper_size: Some("Letter Legal".to_string()),
            print_type: None,
            connectivity: None,
            color: Some("color".to_string()),
        };

        assert_eq!(
            RecommendationKey::resolve(&attributes),
            KeyResolution::Incomplete { missing: Attribute::PrintType }
        );
    }

    #[test]
    fn resolve_flags_unknown_paper_size() {
        let attributes = ExtractedAttributes {
            paper_size: Some("A3".to_string()),
            print_type: Some("Print Only".to_string()),
            connectivity: Some("WiFi Wireless".to_string()),
            color: Some("color".to_string()),
        };

        assert_eq!(
            RecommendationKey::resolve(&attributes),
            KeyResolution::Unrecognized { attribute: Attribute::PaperSize, value: "A3".to_string() }
        );
    }

    #[test]
    fn resolve_builds_key_from_canonical_and_cased_values() {
        let attributes = ExtractedAttributes {
            paper_size: Some("Letter Legal 11x17".to_string()),
            print_type: Some("Print Only".to_string()),
            connectivity: Some("WiFi Wireless".to_string()),
            color: Some("COLOR".to_string()),
        };

        assert_eq!(
            RecommendationKey::resolve(&attributes),
            KeyResolution::Complete(RecommendationKey::new(
                ColorMode::Color,
                Connectivity::WifiWireless,
                PaperSize::LetterLegalTabloid,
                PrintType::PrintOnly,
            ))
        );
    }
}
