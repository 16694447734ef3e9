use serde::Serialize;
use utoipa::ToSchema;

pub const ADAPTIVE_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";
pub const ADAPTIVE_CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
pub const ADAPTIVE_CARD_VERSION: &str = "1.2";

/// Teams incoming webhook이 기대하는 메시지 envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamsMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub attachments: Vec<Attachment>,
}

impl TeamsMessage {
    pub fn single_card(content: AdaptiveCard) -> Self {
        TeamsMessage {
            message_type: "message".to_string(),
            attachments: vec![Attachment {
                content_type: ADAPTIVE_CARD_CONTENT_TYPE.to_string(),
                content,
            }],
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub content_type: String,
    pub content: AdaptiveCard,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdaptiveCard {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub version: String,
    pub body: Vec<CardElement>,
    pub actions: Vec<OpenUrlAction>,
}

impl AdaptiveCard {
    pub fn new(body: Vec<CardElement>, actions: Vec<OpenUrlAction>) -> Self {
        AdaptiveCard {
            schema: ADAPTIVE_CARD_SCHEMA.to_string(),
            card_type: "AdaptiveCard".to_string(),
            version: ADAPTIVE_CARD_VERSION.to_string(),
            body,
            actions,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(tag = "type")]
pub enum CardElement {
    TextBlock {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        weight: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<String>,
        wrap: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        separator: Option<bool>,
    },
    FactSet {
        facts: Vec<Fact>,
    },
}

impl CardElement {
    pub fn heading(text: String) -> Self {
        CardElement::TextBlock {
            text,
            weight: Some("bolder".to_string()),
            size: Some("large".to_string()),
            wrap: true,
            separator: None,
        }
    }

    pub fn paragraph(text: String) -> Self {
        CardElement::TextBlock {
            text,
            weight: None,
            size: None,
            wrap: true,
            separator: Some(true),
        }
    }

    pub fn fact_set(facts: Vec<Fact>) -> Self {
        CardElement::FactSet { facts }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

impl Fact {
    pub fn new(title: &str, value: impl Into<String>) -> Self {
        Fact {
            title: title.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OpenUrlAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub title: String,
    pub url: String,
}

impl OpenUrlAction {
    pub fn open_url(title: &str, url: impl Into<String>) -> Self {
        OpenUrlAction {
            action_type: "Action.OpenUrl".to_string(),
            title: title.to_string(),
            url: url.into(),
        }
    }
}
