//! In-memory store for the catalog, generated looks, and feedback.
//!
//! Everything lives behind one `Arc<RwLock<_>>` and is rebuilt empty on every
//! process restart. There is no persistence by design.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::item::{
    ClothingItem, ItemFilter, ItemUpdate, NewClothingItem, WardrobeStats,
};
use crate::models::look::{LookFeedback, LookSuggestion, Rating};

#[derive(Default)]
struct StoreInner {
    items: Vec<ClothingItem>,
    looks: Vec<LookSuggestion>,
    feedbacks: Vec<LookFeedback>,
}

/// Cheap-to-clone handle to the shared in-memory state.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Clothing items ──────────────────────────────────────────────────

    /// Adds an item to the catalog, assigning its id and timestamp.
    pub async fn add_item(&self, new: NewClothingItem) -> ClothingItem {
        let item = ClothingItem {
            id: Uuid::new_v4(),
            image_url: new.image_url,
            kind: new.kind,
            colors: new.colors,
            styles: new.styles,
            season: new.season,
            occasion: new.occasion,
            description: new.description,
            created_at: Utc::now(),
        };
        self.inner.write().await.items.push(item.clone());
        item
    }

    pub async fn items(&self) -> Vec<ClothingItem> {
        self.inner.read().await.items.clone()
    }

    pub async fn item(&self, id: Uuid) -> Option<ClothingItem> {
        self.inner
            .read()
            .await
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
    }

    /// Merges the non-`None` fields of `update` into the item.
    /// Returns `None` when the item does not exist.
    pub async fn update_item(&self, id: Uuid, update: ItemUpdate) -> Option<ClothingItem> {
        let mut inner = self.inner.write().await;
        let item = inner.items.iter_mut().find(|item| item.id == id)?;

        if let Some(image_url) = update.image_url {
            item.image_url = image_url;
        }
        if let Some(kind) = update.kind {
            item.kind = kind;
        }
        if let Some(colors) = update.colors {
            item.colors = colors;
        }
        if let Some(styles) = update.styles {
            item.styles = styles;
        }
        if let Some(season) = update.season {
            item.season = season;
        }
        if let Some(occasion) = update.occasion {
            item.occasion = occasion;
        }
        if let Some(description) = update.description {
            item.description = Some(description);
        }

        Some(item.clone())
    }

    /// Removes an item. Returns whether it existed.
    pub async fn delete_item(&self, id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.items.len();
        inner.items.retain(|item| item.id != id);
        inner.items.len() != before
    }

    pub async fn filter_items(&self, filter: &ItemFilter) -> Vec<ClothingItem> {
        self.inner
            .read()
            .await
            .items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }

    // ── Look suggestions ────────────────────────────────────────────────

    pub async fn add_look(&self, look: LookSuggestion) -> LookSuggestion {
        self.inner.write().await.looks.push(look.clone());
        look
    }

    pub async fn looks(&self) -> Vec<LookSuggestion> {
        self.inner.read().await.looks.clone()
    }

    pub async fn look(&self, id: Uuid) -> Option<LookSuggestion> {
        self.inner
            .read()
            .await
            .looks
            .iter()
            .find(|look| look.id == id)
            .cloned()
    }

    // ── Feedback ────────────────────────────────────────────────────────

    /// Records feedback for a look, assigning its id and timestamp.
    pub async fn add_feedback(
        &self,
        look_id: Uuid,
        rating: Rating,
        comments: String,
    ) -> LookFeedback {
        let feedback = LookFeedback {
            id: Uuid::new_v4(),
            look_id,
            rating,
            comments,
            created_at: Utc::now(),
        };
        self.inner.write().await.feedbacks.push(feedback.clone());
        feedback
    }

    pub async fn feedback_for_look(&self, look_id: Uuid) -> Vec<LookFeedback> {
        self.inner
            .read()
            .await
            .feedbacks
            .iter()
            .filter(|f| f.look_id == look_id)
            .cloned()
            .collect()
    }

    pub async fn all_feedback(&self) -> Vec<LookFeedback> {
        self.inner.read().await.feedbacks.clone()
    }

    // ── Aggregation ─────────────────────────────────────────────────────

    /// Computes approval statistics and catalog distributions in one pass
    /// over each list.
    pub async fn stats(&self) -> WardrobeStats {
        let inner = self.inner.read().await;

        let approved_suggestions = inner
            .feedbacks
            .iter()
            .filter(|f| f.rating == Rating::Approve)
            .count();
        let rejected_suggestions = inner.feedbacks.len() - approved_suggestions;

        let mut style_distribution: HashMap<String, usize> = HashMap::new();
        let mut type_distribution: HashMap<String, usize> = HashMap::new();
        for item in &inner.items {
            for style in &item.styles {
                *style_distribution.entry(style.clone()).or_default() += 1;
            }
            *type_distribution.entry(item.kind.clone()).or_default() += 1;
        }

        let approval_rate = if inner.feedbacks.is_empty() {
            0.0
        } else {
            approved_suggestions as f64 / inner.feedbacks.len() as f64 * 100.0
        };

        WardrobeStats {
            total_items: inner.items.len(),
            total_suggestions: inner.looks.len(),
            total_feedbacks: inner.feedbacks.len(),
            approved_suggestions,
            rejected_suggestions,
            approval_rate,
            style_distribution,
            type_distribution,
        }
    }

    // ── Development / test helpers ──────────────────────────────────────

    /// Drops all stored data.
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.items.clear();
        inner.looks.clear();
        inner.feedbacks.clear();
    }

    /// Seeds the catalog with a few sample items.
    pub async fn seed_sample_data(&self) {
        let samples = vec![
            NewClothingItem {
                image_url: "/api/placeholder/300/400".to_string(),
                kind: "Shirt".to_string(),
                colors: vec!["White".to_string(), "Blue".to_string()],
                styles: vec!["Casual".to_string(), "Classic".to_string()],
                season: vec!["Spring".to_string(), "Summer".to_string()],
                occasion: vec!["Work".to_string(), "Casual".to_string()],
                description: Some("White dress shirt with blue accents".to_string()),
            },
            NewClothingItem {
                image_url: "/api/placeholder/300/400".to_string(),
                kind: "Trousers".to_string(),
                colors: vec!["Black".to_string()],
                styles: vec!["Classic".to_string(), "Minimalist".to_string()],
                season: vec!["Autumn".to_string(), "Winter".to_string()],
                occasion: vec!["Work".to_string(), "Formal".to_string()],
                description: Some("Slim-fit black dress trousers".to_string()),
            },
            NewClothingItem {
                image_url: "/api/placeholder/300/400".to_string(),
                kind: "Sneakers".to_string(),
                colors: vec!["White".to_string(), "Black".to_string()],
                styles: vec!["Streetwear".to_string(), "Casual".to_string()],
                season: vec![
                    "Spring".to_string(),
                    "Summer".to_string(),
                    "Autumn".to_string(),
                ],
                occasion: vec!["Casual".to_string(), "Sporty".to_string()],
                description: Some("White sneakers with black accents".to_string()),
            },
        ];

        for sample in samples {
            self.add_item(sample).await;
        }
    }
}
