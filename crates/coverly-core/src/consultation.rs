//! Final consultation view assembly.

use coverly_types::consultation::ConsultationPayload;

use crate::card::ProductCard;

/// Shown in place of a premium when the backend sent none.
pub const PRICE_UNAVAILABLE: &str = "N/A";

/// Display-ready form of a finalized consultation.
///
/// Built once from the payload attached to a `final_consultation`
/// message; rendering layers read it without touching wire types.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsultationView {
    /// Closing advisor reply, rendered verbatim as one block.
    pub reply: String,
    /// Premium estimate as display text, or [`PRICE_UNAVAILABLE`].
    ///
    /// A numeric `0` still renders as `0`; only a missing estimate
    /// becomes the sentinel.
    pub price: String,
    /// One card per recommendation, in backend order.
    pub cards: Vec<ProductCard>,
}

impl ConsultationView {
    pub fn from_payload(payload: &ConsultationPayload) -> Self {
        let price = payload
            .predicted_price
            .as_ref()
            .map(|price| price.to_string())
            .unwrap_or_else(|| PRICE_UNAVAILABLE.to_string());

        let cards = payload
            .recommendations
            .iter()
            .map(ProductCard::from_product)
            .collect();

        Self {
            reply: payload.reply.clone(),
            price,
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use coverly_types::consultation::{PredictedPrice, Product};

    use super::*;

    #[test]
    fn test_numeric_price_renders_without_trailing_zero() {
        let view = ConsultationView::from_payload(&ConsultationPayload {
            reply: "以下是您的諮詢結果".to_string(),
            predicted_price: Some(PredictedPrice::Amount(12000.0)),
            recommendations: Vec::new(),
        });
        assert_eq!(view.price, "12000");
        assert_eq!(view.reply, "以下是您的諮詢結果");
    }

    #[test]
    fn test_zero_price_is_not_treated_as_missing() {
        let view = ConsultationView::from_payload(&ConsultationPayload {
            reply: String::new(),
            predicted_price: Some(PredictedPrice::Amount(0.0)),
            recommendations: Vec::new(),
        });
        assert_eq!(view.price, "0");
    }

    #[test]
    fn test_textual_price_passes_through() {
        let view = ConsultationView::from_payload(&ConsultationPayload {
            reply: String::new(),
            predicted_price: Some(PredictedPrice::Text("無法計算".to_string())),
            recommendations: Vec::new(),
        });
        assert_eq!(view.price, "無法計算");
    }

    #[test]
    fn test_missing_price_becomes_sentinel() {
        let view = ConsultationView::from_payload(&ConsultationPayload {
            reply: String::new(),
            predicted_price: None,
            recommendations: Vec::new(),
        });
        assert_eq!(view.price, PRICE_UNAVAILABLE);
    }

    #[test]
    fn test_cards_follow_recommendation_order() {
        let recommendations = vec![
            Product {
                id: Some("ins-1".to_string()),
                score: Some(0.91),
                title: Some("第一張".to_string()),
                summary: None,
                url: None,
            },
            Product {
                id: Some("ins-2".to_string()),
                score: Some(0.84),
                title: Some("第二張".to_string()),
                summary: None,
                url: None,
            },
        ];
        let view = ConsultationView::from_payload(&ConsultationPayload {
            reply: String::new(),
            predicted_price: None,
            recommendations,
        });
        let titles: Vec<&str> = view.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["第一張", "第二張"]);
    }

    #[test]
    fn test_no_recommendations_means_no_cards() {
        let view = ConsultationView::from_payload(&ConsultationPayload {
            reply: "完成".to_string(),
            predicted_price: Some(PredictedPrice::Amount(9800.0)),
            recommendations: Vec::new(),
        });
        assert!(view.cards.is_empty());
    }
}
