use crate::domain::attributes::{Attribute, AttributeValue, ColorMode, Connectivity};
use crate::domain::slots::ExtractedAttributes;

pub const COLOR_GUIDANCE: &str = "Enter a valid color choice";

pub const CONNECTIVITY_GUIDANCE: &str = "CONNECTION TYPES USB is the standard for connecting \
    to a single computer. An Ethernet port can connect the printer to your network, so it is easy for multiple users to print. \
    It is a very reliable connection. A WiFi enabled printer can connect wirelessly to your \
    wireless network. Some printers have a wireless direct capability where computers can \
    connect directly to the printer without going through a router or existing wireless \
    network. If in doubt, choose WiFi. There are apps available, that let you print from a \
    mobile device. There are other ways of connecting, including cloud printing, that are \
    outside the scope of this bot.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid { attribute: Attribute, message: &'static str },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Re-checks the values the dialog engine collected. Unset attributes pass;
/// color is checked before connectivity and only the first violation is reported.
pub fn validate(attributes: &ExtractedAttributes) -> Validation {
    if let Some(color) = attributes.color.as_deref() {
        if !is_valid_color(color) {
            return Validation::Invalid { attribute: Attribute::Color, message: COLOR_GUIDANCE };
        }
    }

    if let Some(connectivity) = attributes.connectivity.as_deref() {
        if !is_valid_connectivity(connectivity) {
            return Validation::Invalid {
                attribute: Attribute::Connectivity,
                message: CONNECTIVITY_GUIDANCE,
            };
        }
    }

    Validation::Valid
}

pub fn is_valid_color(value: &str) -> bool {
    ColorMode::parse(value).is_some()
}

/// Case-sensitive: `ethernet wired` is rejected.
pub fn is_valid_connectivity(value: &str) -> bool {
    Connectivity::parse(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::{
        is_valid_color, is_valid_connectivity, validate, Validation, COLOR_GUIDANCE,
        CONNECTIVITY_GUIDANCE,
    };
    use crate::domain::attributes::Attribute;
    use crate::domain::slots::ExtractedAttributes;

    fn attributes(color: Option<&str>, connectivity: Option<&str>) -> ExtractedAttributes {
        ExtractedAttributes {
            color: color.map(str::to_string),
            connectivity: connectivity.map(str::to_string),
            ..ExtractedAttributes::default()
        }
    }

    #[test]
    fn unset_attributes_are_valid() {
        assert_eq!(validate(&ExtractedAttributes::default()), Validation::Valid);
    }

    #[test]
    fn color_is_case_insensitive() {
        assert!(is_valid_color("COLOR"));
        assert!(is_valid_color("color"));
        assert_eq!(
            validate(&attributes(Some("COLOR"), None)),
            validate(&attributes(Some("color"), None))
        );
    }

    #[test]
    fn connectivity_is_case_sensitive() {
        assert!(is_valid_connectivity("Ethernet Wired"));
        assert!(!is_valid_connectivity("ethernet wired"));
        assert_eq!(
            validate(&attributes(None, Some("ethernet wired"))),
            Validation::Invalid {
                attribute: Attribute::Connectivity,
                message: CONNECTIVITY_GUIDANCE
            }
        );
    }

    #[test]
    fn color_violation_wins_over_connectivity() {
        assert_eq!(
            validate(&attributes(Some("purple"), Some("Bluetooth"))),
            Validation::Invalid { attribute: Attribute::Color, message: COLOR_GUIDANCE }
        );
    }

    #[test]
    fn paper_size_and_print_type_are_not_checked() {
        let extracted = ExtractedAttributes {
            paper_size: Some("A3".to_string()),
            print_type: Some("Print Everything".to_string()),
            ..ExtractedAttributes::default()
        };

        assert!(validate(&extracted).is_valid());
    }

    #[test]
    fn connectivity_guidance_is_single_spaced() {
        assert!(CONNECTIVITY_GUIDANCE.starts_with("CONNECTION TYPES USB is the standard"));
        assert!(CONNECTIVITY_GUIDANCE.contains("An Ethernet port can connect"));
        assert!(!CONNECTIVITY_GUIDANCE.contains("  "));
        assert!(CONNECTIVITY_GUIDANCE.ends_with("outside the scope of this bot."));
    }
}
