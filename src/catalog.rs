//! Dashboard media cards.
//!
//! The dashboard shows fixed placeholder content; there is no upload,
//! processing or storage behind it.

use serde::{Deserialize, Serialize};

/// One card on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaCard {
    /// Card heading
    pub title: String,
    /// One-line description
    pub description: String,
    /// Preview image
    pub image_url: String,
    /// Human-readable size before compression
    pub original_size: String,
    /// Human-readable size after compression
    pub compressed_size: String,
}

impl MediaCard {
    fn placeholder(
        title: &str,
        description: &str,
        topic: &str,
        original_size: &str,
        compressed_size: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            image_url: format!("https://source.unsplash.com/random/800x600?{}", topic),
            original_size: original_size.to_string(),
            compressed_size: compressed_size.to_string(),
        }
    }
}

/// Returns the placeholder cards in display order.
pub fn placeholder_catalog() -> Vec<MediaCard> {
    vec![
        MediaCard::placeholder(
            "Sunset Beach",
            "Beautiful sunset on a tropical beach",
            "beach",
            "5.2 MB",
            "1.8 MB",
        ),
        MediaCard::placeholder(
            "Mountain Vista",
            "Breathtaking view of snow-capped mountains",
            "mountain",
            "4.8 MB",
            "1.6 MB",
        ),
        MediaCard::placeholder(
            "City Lights",
            "Vibrant nighttime cityscape",
            "city",
            "6.1 MB",
            "2.2 MB",
        ),
        MediaCard::placeholder(
            "Forest Trail",
            "Serene path through a lush green forest",
            "forest",
            "5.5 MB",
            "1.9 MB",
        ),
        MediaCard::placeholder(
            "Desert Dunes",
            "Golden sand dunes stretching to the horizon",
            "desert",
            "4.3 MB",
            "1.5 MB",
        ),
        MediaCard::placeholder(
            "Ocean Waves",
            "Powerful waves crashing on rocky shores",
            "ocean",
            "5.8 MB",
            "2.0 MB",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_cards_in_order() {
        let cards = placeholder_catalog();
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].title, "Sunset Beach");
        assert_eq!(cards[5].title, "Ocean Waves");
    }

    #[test]
    fn cards_serialize_with_camel_case_keys() {
        let json = serde_json::to_value(&placeholder_catalog()[2]).unwrap();
        assert_eq!(json["imageUrl"], "https://source.unsplash.com/random/800x600?city");
        assert_eq!(json["compressedSize"], "2.2 MB");
    }
}
