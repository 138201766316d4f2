use serde::{Deserialize, Serialize};

/// Upper bound on cards per recommendation; the host renders no more than this.
pub const MAX_CARDS: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    pub title: String,
    pub subtitle: String,
    pub link_url: String,
    pub image_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub message: String,
    #[serde(default)]
    pub cards: Vec<ProductCard>,
}

impl Recommendation {
    pub fn product_titles(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.title.as_str()).collect()
    }

    pub fn primary_product(&self) -> Option<&str> {
        self.cards.first().map(|card| card.title.as_str())
    }
}
