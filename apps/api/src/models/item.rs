//! Clothing catalog data models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A cataloged clothing item. The id and timestamp are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: Uuid,
    pub image_url: String,
    /// Garment type, e.g. "shirt", "trousers", "dress", "sneakers".
    #[serde(rename = "type")]
    pub kind: String,
    pub colors: Vec<String>,
    pub styles: Vec<String>,
    pub season: Vec<String>,
    pub occasion: Vec<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Item fields supplied by the caller; the store fills in id and created_at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClothingItem {
    pub image_url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub colors: Vec<String>,
    pub styles: Vec<String>,
    pub season: Vec<String>,
    pub occasion: Vec<String>,
    pub description: Option<String>,
}

/// Structured output of the classification LLM call.
///
/// Every field carries a serde default so a partial model reply still yields
/// a usable record instead of a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub season: Vec<String>,
    #[serde(default)]
    pub occasion: Vec<String>,
    #[serde(default = "default_confidence")]
    pub confidence: f32,
    #[serde(default = "default_description")]
    pub description: String,
}

fn default_kind() -> String {
    "Unidentified".to_string()
}

fn default_confidence() -> f32 {
    0.5
}

fn default_description() -> String {
    "Analysis unavailable".to_string()
}

/// Partial update for a cataloged item. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemUpdate {
    pub image_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub colors: Option<Vec<String>>,
    pub styles: Option<Vec<String>>,
    pub season: Option<Vec<String>>,
    pub occasion: Option<Vec<String>>,
    pub description: Option<String>,
}

/// Catalog filter. Type matches by case-insensitive equality; the list
/// fields match when ANY requested value is a case-insensitive substring of
/// ANY of the item's values. Empty lists are ignored.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub kind: Option<String>,
    pub styles: Vec<String>,
    pub colors: Vec<String>,
    pub season: Vec<String>,
    pub occasion: Vec<String>,
}

impl ItemFilter {
    pub fn matches(&self, item: &ClothingItem) -> bool {
        if let Some(kind) = &self.kind {
            if item.kind.to_lowercase() != kind.to_lowercase() {
                return false;
            }
        }
        any_of_contains(&self.styles, &item.styles)
            && any_of_contains(&self.colors, &item.colors)
            && any_of_contains(&self.season, &item.season)
            && any_of_contains(&self.occasion, &item.occasion)
    }
}

fn any_of_contains(wanted: &[String], have: &[String]) -> bool {
    if wanted.is_empty() {
        return true;
    }
    wanted.iter().any(|w| {
        let w = w.to_lowercase();
        have.iter().any(|h| h.to_lowercase().contains(&w))
    })
}

/// Approval statistics and catalog distributions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardrobeStats {
    pub total_items: usize,
    pub total_suggestions: usize,
    pub total_feedbacks: usize,
    pub approved_suggestions: usize,
    pub rejected_suggestions: usize,
    /// Percentage of feedbacks that approve; 0 when there is no feedback.
    pub approval_rate: f64,
    pub style_distribution: HashMap<String, usize>,
    pub type_distribution: HashMap<String, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: &str, colors: &[&str], styles: &[&str]) -> ClothingItem {
        ClothingItem {
            id: Uuid::new_v4(),
            image_url: "/img/1".to_string(),
            kind: kind.to_string(),
            colors: colors.iter().map(|s| s.to_string()).collect(),
            styles: styles.iter().map(|s| s.to_string()).collect(),
            season: vec!["Summer".to_string()],
            occasion: vec!["Casual".to_string()],
            description: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_classification_defaults_fill_missing_fields() {
        let parsed: ClassificationResult = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.kind, "Unidentified");
        assert!(parsed.colors.is_empty());
        assert!(parsed.styles.is_empty());
        assert!((parsed.confidence - 0.5).abs() < f32::EPSILON);
        assert_eq!(parsed.description, "Analysis unavailable");
    }

    #[test]
    fn test_classification_full_reply_parses() {
        let json = r#"{
            "type": "shirt",
            "colors": ["white", "blue"],
            "styles": ["Casual", "Classic"],
            "season": ["spring", "summer"],
            "occasion": ["work", "casual"],
            "confidence": 0.95,
            "description": "White dress shirt with blue accents"
        }"#;
        let parsed: ClassificationResult = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, "shirt");
        assert_eq!(parsed.colors.len(), 2);
        assert!((parsed.confidence - 0.95).abs() < f32::EPSILON);
    }

    #[test]
    fn test_clothing_item_serializes_kind_as_type() {
        let value = serde_json::to_value(item("Shirt", &["White"], &["Casual"])).unwrap();
        assert_eq!(value["type"], "Shirt");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_filter_type_is_case_insensitive_equality() {
        let filter = ItemFilter {
            kind: Some("shirt".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&item("Shirt", &[], &[])));
        assert!(!filter.matches(&item("Shirt dress", &[], &[])));
    }

    #[test]
    fn test_filter_type_folds_non_ascii_case() {
        let filter = ItemFilter {
            kind: Some("BLAZER ÉTÉ".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&item("blazer été", &[], &[])));
    }

    #[test]
    fn test_filter_list_fields_match_any_substring() {
        let filter = ItemFilter {
            styles: vec!["street".to_string(), "boho".to_string()],
            ..Default::default()
        };
        assert!(filter.matches(&item("Sneakers", &[], &["Streetwear"])));
        assert!(!filter.matches(&item("Sneakers", &[], &["Classic"])));
    }

    #[test]
    fn test_filter_empty_lists_match_everything() {
        let filter = ItemFilter::default();
        assert!(filter.matches(&item("Anything", &["Red"], &["Vintage"])));
    }

    #[test]
    fn test_filter_combines_all_criteria() {
        let filter = ItemFilter {
            kind: Some("shirt".to_string()),
            colors: vec!["white".to_string()],
            ..Default::default()
        };
        assert!(filter.matches(&item("Shirt", &["White", "Blue"], &[])));
        assert!(!filter.matches(&item("Shirt", &["Black"], &[])));
    }
}
