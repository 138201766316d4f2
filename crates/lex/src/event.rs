use std::collections::BTreeMap;

use printadvisor_core::domain::slots::SlotSet;
use serde::{Deserialize, Deserializer, Serialize};

/// Session attributes are opaque string pairs round-tripped by the host.
pub type SessionAttributes = BTreeMap<String, String>;

/// The code hook payload. Only `currentIntent` is required; everything else
/// is optional on the wire and defaults when absent or `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexEvent {
    pub current_intent: CurrentIntent,
    #[serde(default, deserialize_with = "null_as_default")]
    pub session_attributes: SessionAttributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<BotDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invocation_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_transcript: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dialog_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_version: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: SlotSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl LexEvent {
    pub fn new(intent_name: impl Into<String>, slots: SlotSet) -> Self {
        Self {
            current_intent: CurrentIntent {
                name: intent_name.into(),
                slots,
                confirmation_status: None,
            },
            session_attributes: SessionAttributes::new(),
            user_id: None,
            bot: None,
            invocation_source: None,
            input_transcript: None,
            output_dialog_mode: None,
            message_version: None,
        }
    }

    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    pub fn bot_name(&self) -> Option<&str> {
        self.bot.as_ref().map(|bot| bot.name.as_str())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
