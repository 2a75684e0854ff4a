//! Transcript message types for Coverly.
//!
//! These types model one consultation transcript: an ordered, append-only
//! list of messages exchanged between the user and the advisor backend.
//! A message body is either plain chat text or a finalized consultation,
//! never both -- the enum makes the invariant structural.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::consultation::ConsultationPayload;

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(format!("invalid role: '{other}'")),
        }
    }
}

/// Discriminant of a message body, derived from [`MessageBody`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Chat,
    FinalConsultation,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Chat => write!(f, "chat"),
            MessageKind::FinalConsultation => write!(f, "final_consultation"),
        }
    }
}

impl FromStr for MessageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chat" => Ok(MessageKind::Chat),
            "final_consultation" => Ok(MessageKind::FinalConsultation),
            other => Err(format!("invalid message kind: '{other}'")),
        }
    }
}

/// The content of a transcript message.
///
/// Exactly one of `text` or `data` exists, selected by `kind`. Plain chat
/// text covers user input, intermediate advisor replies, and the fixed
/// connection-error line; a final consultation carries the structured
/// premium-estimate result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessageBody {
    Chat { text: String },
    FinalConsultation { data: ConsultationPayload },
}

impl MessageBody {
    /// The kind tag for this body.
    pub fn kind(&self) -> MessageKind {
        match self {
            MessageBody::Chat { .. } => MessageKind::Chat,
            MessageBody::FinalConsultation { .. } => MessageKind::FinalConsultation,
        }
    }
}

/// A single message in a consultation transcript.
///
/// Immutable once appended. Ordered by append position within the
/// transcript; `created_at` is informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptMessage {
    /// UUIDv7 message ID.
    pub id: Uuid,
    pub role: Role,
    #[serde(flatten)]
    pub body: MessageBody,
    pub created_at: DateTime<Utc>,
}

impl TranscriptMessage {
    /// Create a user chat message.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role: Role::User,
            body: MessageBody::Chat { text: text.into() },
            created_at: Utc::now(),
        }
    }

    /// Create an assistant chat message.
    pub fn assistant_text(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role: Role::Assistant,
            body: MessageBody::Chat { text: text.into() },
            created_at: Utc::now(),
        }
    }

    /// Create an assistant message carrying a finalized consultation.
    pub fn assistant_consultation(data: ConsultationPayload) -> Self {
        Self {
            id: Uuid::now_v7(),
            role: Role::Assistant,
            body: MessageBody::FinalConsultation { data },
            created_at: Utc::now(),
        }
    }

    /// The kind tag of this message's body.
    pub fn kind(&self) -> MessageKind {
        self.body.kind()
    }

    /// Chat text, if this is a `chat` message.
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            MessageBody::Chat { text } => Some(text),
            MessageBody::FinalConsultation { .. } => None,
        }
    }

    /// Consultation payload, if this is a `final_consultation` message.
    pub fn consultation(&self) -> Option<&ConsultationPayload> {
        match &self.body {
            MessageBody::Chat { .. } => None,
            MessageBody::FinalConsultation { data } => Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consultation::PredictedPrice;

    #[test]
    fn test_role_roundtrip() {
        for role in [Role::User, Role::Assistant] {
            let s = role.to_string();
            let parsed: Role = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_message_kind_roundtrip() {
        for kind in [MessageKind::Chat, MessageKind::FinalConsultation] {
            let s = kind.to_string();
            let parsed: MessageKind = s.parse().unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_chat_message_serializes_with_kind_tag() {
        let msg = TranscriptMessage::user_text("你好");
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["role"], "user");
        assert_eq!(json["kind"], "chat");
        assert_eq!(json["text"], "你好");
        // text and data are mutually exclusive
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_consultation_message_serializes_with_kind_tag() {
        let payload = ConsultationPayload {
            reply: "已完成分析".to_string(),
            predicted_price: Some(PredictedPrice::Amount(12000.0)),
            recommendations: Vec::new(),
        };
        let msg = TranscriptMessage::assistant_consultation(payload);
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["role"], "assistant");
        assert_eq!(json["kind"], "final_consultation");
        assert_eq!(json["data"]["reply"], "已完成分析");
        assert!(json.get("text").is_none());
    }

    #[test]
    fn test_message_json_roundtrip() {
        let msg = TranscriptMessage::assistant_text("請告訴我您的年齡");
        let json = serde_json::to_string(&msg).unwrap();
        let parsed: TranscriptMessage = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.role, Role::Assistant);
        assert_eq!(parsed.kind(), MessageKind::Chat);
        assert_eq!(parsed.text(), Some("請告訴我您的年齡"));
        assert!(parsed.consultation().is_none());
    }

    #[test]
    fn test_kind_is_derived_from_body() {
        let chat = TranscriptMessage::user_text("hi");
        assert_eq!(chat.kind(), MessageKind::Chat);

        let consultation = TranscriptMessage::assistant_consultation(ConsultationPayload {
            reply: String::new(),
            predicted_price: None,
            recommendations: Vec::new(),
        });
        assert_eq!(consultation.kind(), MessageKind::FinalConsultation);
        assert!(consultation.text().is_none());
        assert!(consultation.consultation().is_some());
    }
}
