use printadvisor_core::domain::recommendation::Recommendation;

use crate::response::{
    Button, GenericAttachment, ResponseCard, CARD_VERSION, GENERIC_CARD_CONTENT_TYPE,
};

pub const MAX_ATTACHMENTS: usize = 5;
pub const MAX_BUTTONS: usize = 5;

#[derive(Default)]
pub struct ResponseCardBuilder {
    attachments: Vec<GenericAttachment>,
}

impl ResponseCardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attachment<F>(
        mut self,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        build: F,
    ) -> Self
    where
        F: FnOnce(&mut AttachmentBuilder),
    {
        let mut builder = AttachmentBuilder::default();
        build(&mut builder);
        self.attachments.push(builder.build(title.into(), subtitle.into()));
        self
    }

    /// Attachments beyond the host limit are dropped. An empty builder yields no card.
    pub fn build(mut self) -> Option<ResponseCard> {
        if self.attachments.is_empty() {
            return None;
        }

        self.attachments.truncate(MAX_ATTACHMENTS);
        Some(ResponseCard {
            version: CARD_VERSION.to_owned(),
            content_type: GENERIC_CARD_CONTENT_TYPE.to_owned(),
            generic_attachments: self.attachments,
        })
    }
}

#[derive(Default)]
pub struct AttachmentBuilder {
    link_url: Option<String>,
    image_url: Option<String>,
    buttons: Vec<Button>,
}

impl AttachmentBuilder {
    pub fn link(&mut self, url: impl Into<String>) -> &mut Self {
        self.link_url = Some(url.into());
        self
    }

    pub fn image(&mut self, url: impl Into<String>) -> &mut Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn button(&mut self, text: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.buttons.push(Button::new(text, value));
        self
    }

    fn build(mut self, title: String, sub_title: String) -> GenericAttachment {
        self.buttons.truncate(MAX_BUTTONS);
        GenericAttachment {
            title,
            sub_title,
            attachment_link_url: self.link_url,
            image_url: self.image_url,
            buttons: self.buttons,
        }
    }
}

/// Single-attachment card offering `options` as buttons.
pub fn build_response_card(
    title: impl Into<String>,
    subtitle: impl Into<String>,
    options: &[Button],
) -> Option<ResponseCard> {
    ResponseCardBuilder::new()
        .attachment(title, subtitle, |attachment| {
            for option in options {
                attachment.button(option.text.clone(), option.value.clone());
            }
        })
        .build()
}

/// One attachment per product card, in table order.
pub fn recommendation_card(recommendation: &Recommendation) -> Option<ResponseCard> {
    recommendation
        .cards
        .iter()
        .fold(ResponseCardBuilder::new(), |builder, card| {
            builder.attachment(card.title.clone(), card.subtitle.clone(), |attachment| {
                attachment.link(card.link_url.clone()).image(card.image_url.clone());
            })
        })
        .build()
}
