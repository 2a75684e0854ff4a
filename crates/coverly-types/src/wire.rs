//! HTTP wire shapes for the orchestrator's `/chat` endpoint.
//!
//! These are the exact JSON request/response structures exchanged with the
//! consultation backend. They are deliberately tolerant: every response
//! field is defaulted when absent and unknown fields are ignored, so a
//! loose backend never turns into a client crash.

use serde::{Deserialize, Serialize};

use crate::consultation::{ConsultationPayload, PredictedPrice, Product};
use crate::profile::ProfileSlots;

/// Request body for `POST {backend_url}/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurnRequest {
    /// The user's message, already trimmed.
    pub message: String,
    /// Echoed from an earlier response so the orchestrator keeps one
    /// slot-filling session across turns. Omitted on the first turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl ChatTurnRequest {
    /// Build a request for one turn.
    pub fn new(message: impl Into<String>, conversation_id: Option<String>) -> Self {
        Self {
            message: message.into(),
            conversation_id,
        }
    }
}

/// Response body from `POST {backend_url}/chat`.
///
/// `complete == false` means the advisor is still collecting profile data
/// and `reply` is a plain follow-up question; `complete == true` means
/// `reply` plus `structured_data` form the final consultation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurnResponse {
    #[serde(default)]
    pub complete: bool,
    #[serde(default)]
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    /// Profile fields the orchestrator has extracted so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<ProfileSlots>,
    /// Present only on completed consultations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<StructuredData>,
}

impl ChatTurnResponse {
    /// Collapse the response into the consultation payload it carries.
    ///
    /// A complete turn without structured data still yields a payload;
    /// it just has no price and no recommendations.
    pub fn into_consultation(self) -> ConsultationPayload {
        let structured = self.structured_data.unwrap_or_default();
        ConsultationPayload {
            reply: self.reply,
            predicted_price: structured.predicted_price,
            recommendations: structured.recommendations,
        }
    }
}

/// The structured half of a completed consultation response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_price: Option<PredictedPrice>,
    #[serde(default)]
    pub recommendations: Vec<Product>,
}
