//! Recommendation card resolution.
//!
//! A [`Product`] off the wire is a loose bag of optional fields; a
//! [`ProductCard`] is what actually gets rendered. Resolution fills the
//! gaps from the parsed summary blob and falls back to fixed text when
//! the backend sent nothing usable.

use coverly_types::consultation::Product;

use crate::summary::{field_value, parse_summary};

/// Summary key carrying the product's name.
pub const PRODUCT_NAME_KEY: &str = "商品名稱";
/// Summary key carrying the product's description.
pub const PRODUCT_DESCRIPTION_KEY: &str = "商品描述";
/// Title shown when neither an explicit title nor a name field exists.
pub const FALLBACK_TITLE: &str = "產品資訊缺失";
/// Description shown when no description field exists.
pub const FALLBACK_DESCRIPTION: &str = "無詳細描述。";

/// Display-ready form of one recommended product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub title: String,
    pub description: String,
    /// Product page link, only when the backend sent a non-empty one.
    pub url: Option<String>,
    /// Raw similarity score from retrieval, in `[0, 1]`.
    pub score: Option<f64>,
}

impl ProductCard {
    /// Resolve one wire product into its display form.
    ///
    /// The title prefers the explicit `title` field, then the
    /// `商品名稱` summary field, then [`FALLBACK_TITLE`]. The
    /// description comes from the `商品描述` summary field or falls
    /// back to [`FALLBACK_DESCRIPTION`]. Empty strings count as absent.
    /// The summary blob is parsed here and the fields discarded after
    /// resolution; cards never keep derived parser state.
    pub fn from_product(product: &Product) -> Self {
        let fields = parse_summary(product.summary.as_deref().unwrap_or(""));

        let title = product
            .title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
            .or_else(|| field_value(&fields, PRODUCT_NAME_KEY))
            .unwrap_or(FALLBACK_TITLE)
            .to_string();

        let description = field_value(&fields, PRODUCT_DESCRIPTION_KEY)
            .unwrap_or(FALLBACK_DESCRIPTION)
            .to_string();

        let url = product
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(str::to_string);

        Self {
            title,
            description,
            url,
            score: product.score,
        }
    }

    /// Similarity as a whole percentage, when retrieval scored the match.
    pub fn match_percent(&self) -> Option<u8> {
        self.score
            .map(|score| (score.clamp(0.0, 1.0) * 100.0).round() as u8)
    }
}
