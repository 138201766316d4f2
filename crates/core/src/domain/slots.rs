use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::attributes::Attribute;

/// Slot values as the dialog engine reports them. Unknown keys are kept so
/// they can be echoed back untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotSet(BTreeMap<String, Option<String>>);

impl SlotSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot counts as present only when it carries a non-empty value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|value| value.as_deref()).filter(|value| !value.is_empty())
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), Some(value.into()));
    }

    /// Resets a slot to unset, keeping the key so the host sees it was cleared.
    pub fn clear(&mut self, name: &str) {
        self.0.insert(name.to_string(), None);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_deref()))
    }
}

impl From<BTreeMap<String, Option<String>>> for SlotSet {
    fn from(value: BTreeMap<String, Option<String>>) -> Self {
        Self(value)
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for SlotSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, value)| (name.into(), value.map(Into::into))).collect())
    }
}

/// Maps each quiz attribute to the slot name one flow uses for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotSchema {
    pub paper_size: &'static str,
    pub print_type: &'static str,
    pub connectivity: &'static str,
    pub color: &'static str,
}

impl SlotSchema {
    pub fn slot_name(&self, attribute: Attribute) -> &'static str {
        match attribute {
            Attribute::PaperSize => self.paper_size,
            Attribute::PrintType => self.print_type,
            Attribute::Connectivity => self.connectivity,
            Attribute::Color => self.color,
        }
    }

    /// Never fails: a slot the engine has not collected yet is simply `None`.
    pub fn extract(&self, slots: &SlotSet) -> ExtractedAttributes {
        let read = |attribute| slots.get(self.slot_name(attribute)).map(str::to_string);

        ExtractedAttributes {
            paper_size: read(Attribute::PaperSize),
            print_type: read(Attribute::PrintType),
            connectivity: read(Attribute::Connectivity),
            color: read(Attribute::Color),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractedAttributes {
    pub paper_size: Option<String>,
    pub print_type: Option<String>,
    pub connectivity: Option<String>,
    pub color: Option<String>,
}

impl ExtractedAttributes {
    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::PaperSize => self.paper_size.as_deref(),
            Attribute::PrintType => self.print_type.as_deref(),
            Attribute::Connectivity => self.connectivity.as_deref(),
            Attribute::Color => self.color.as_deref(),
        }
    }

    pub fn first_missing(&self) -> Option<Attribute> {
        Attribute::ALL.into_iter().find(|attribute| self.get(*attribute).is_none())
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{SlotSchema, SlotSet};
    use crate::domain::attributes::Attribute;

    const SCHEMA: SlotSchema = SlotSchema {
        paper_size: "slotOne",
        print_type: "slotTwo",
        connectivity: "slotThree",
        color: "slotFour",
    };

    #[test]
    fn extract_tolerates_missing_null_and_empty_slots() {
        let slots: SlotSet = [
            ("slotOne", Some("Letter Legal")),
            ("slotTwo", None),
            ("slotThree", Some("")),
            ("unrelated", Some("ignored")),
        ]
        .into_iter()
        .collect();

        let extracted = SCHEMA.extract(&slots);

        assert_eq!(extracted.paper_size.as_deref(), Some("Letter Legal"));
        assert_eq!(extracted.print_type, None);
        assert_eq!(extracted.connectivity, None);
        assert_eq!(extracted.color, None);
        assert_eq!(extracted.first_missing(), Some(Attribute::PrintType));
    }

    #[test]
    fn clear_keeps_key_with_null_value() {
        let mut slots = SlotSet::new();
        slots.set("slotFour", "purple");
        slots.clear("slotFour");

        assert_eq!(slots.len(), 1);
        assert_eq!(slots.get("slotFour"), None);
        assert_eq!(
            serde_json::to_value(&slots).ok(),
            Some(serde_json::json!({ "slotFour": null }))
        );
    }

    #[test]
    fn slot_set_deserializes_host_slot_map() {
        let slots: SlotSet = serde_json::from_value(serde_json::json!({
            "slotOne": "Letter Legal",
            "slotTwo": null
        }))
        .unwrap_or_default();

        assert_eq!(slots.get("slotOne"), Some("Letter Legal"));
        assert_eq!(slots.get("slotTwo"), None);
        assert_eq!(slots.len(), 2);
    }
}
