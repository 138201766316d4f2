use printadvisor_core::domain::slots::SlotSet;
use serde::{Deserialize, Serialize};

use crate::event::SessionAttributes;

pub const GENERIC_CARD_CONTENT_TYPE: &str = "application/vnd.amazonaws.card.generic";
pub const CARD_VERSION: &str = "0";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    #[serde(rename_all = "camelCase")]
    ElicitSlot { intent_name: String, slots: SlotSet, slot_to_elicit: String, message: Message },
    #[serde(rename_all = "camelCase")]
    ConfirmIntent { intent_name: String, slots: SlotSet, message: Message },
    #[serde(rename_all = "camelCase")]
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        response_card: Option<ResponseCard>,
    },
    #[serde(rename_all = "camelCase")]
    Delegate { slots: SlotSet },
}

impl DialogAction {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ElicitSlot { .. } => "ElicitSlot",
            Self::ConfirmIntent { .. } => "ConfirmIntent",
            Self::Close { .. } => "Close",
            Self::Delegate { .. } => "Delegate",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    PlainText,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self { content_type: ContentType::PlainText, content: content.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCard {
    pub version: String,
    pub content_type: String,
    pub generic_attachments: Vec<GenericAttachment>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericAttachment {
    pub title: String,
    pub sub_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
    pub value: String,
}

impl Button {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self { text: text.into(), value: value.into() }
    }
}

pub fn elicit_slot(
    session_attributes: SessionAttributes,
    intent_name: impl Into<String>,
    slots: SlotSet,
    slot_to_elicit: impl Into<String>,
    message: Message,
) -> LexResponse {
    LexResponse {
        session_attributes,
        dialog_action: DialogAction::ElicitSlot {
            intent_name: intent_name.into(),
            slots,
            slot_to_elicit: slot_to_elicit.into(),
            message,
        },
    }
}

pub fn confirm_intent(
    session_attributes: SessionAttributes,
    intent_name: impl Into<String>,
    slots: SlotSet,
    message: Message,
) -> LexResponse {
    LexResponse {
        session_attributes,
        dialog_action: DialogAction::ConfirmIntent {
            intent_name: intent_name.into(),
            slots,
            message,
        },
    }
}

pub fn close(
    session_attributes: SessionAttributes,
    fulfillment_state: FulfillmentState,
    message: Message,
    response_card: Option<ResponseCard>,
) -> LexResponse {
    LexResponse {
        session_attributes,
        dialog_action: DialogAction::Close { fulfillment_state, message, response_card },
    }
}

pub fn delegate(session_attributes: SessionAttributes, slots: SlotSet) -> LexResponse {
    LexResponse { session_attributes, dialog_action: DialogAction::Delegate { slots } }
}
