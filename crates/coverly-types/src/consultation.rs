//! Consultation result types.
//!
//! A consultation is the finalized backend response bundling the narrative
//! reply, the predicted annual premium, and the recommended products. These
//! are the shapes the Chat Controller stores on a `final_consultation`
//! message; the raw HTTP envelope lives in [`crate::wire`].

use serde::{Deserialize, Serialize};

use std::fmt;

/// The finalized result of a completed consultation.
///
/// Assembled from the wire response by flattening `reply` and
/// `structured_data` into one record. Absent backend fields default to
/// "no price" and "no recommendations" rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationPayload {
    /// Complete advisor reply, already finalized server-side.
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_price: Option<PredictedPrice>,
    #[serde(default)]
    pub recommendations: Vec<Product>,
}

/// Predicted annual premium.
///
/// The orchestrator emits a number when its pricing model succeeds, but a
/// plain string (e.g. "無法計算") when it fails, so both shapes must
/// deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictedPrice {
    Amount(f64),
    Text(String),
}

impl fmt::Display for PredictedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictedPrice::Amount(amount) => write!(f, "{amount}"),
            PredictedPrice::Text(text) => write!(f, "{text}"),
        }
    }
}

/// One recommended insurance product.
///
/// Wire field names for the summary blob and link are the capitalized
/// `Summary` / `URL` set by the orchestrator; it also spreads the RAG
/// service's lowercase originals into the same object, which are ignored
/// here. `id` and `score` (cosine similarity in [0, 1]) come straight from
/// the RAG service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Raw newline-delimited `key：value` text describing the product.
    #[serde(default, rename = "Summary", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One parsed `key: value` line from a product summary blob.
///
/// Derived data -- recomputed from [`Product::summary`] on each render,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryField {
    pub key: String,
    pub value: String,
}
