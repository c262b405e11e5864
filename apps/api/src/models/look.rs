//! Look suggestion and feedback data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Situational context for look generation, supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookContext {
    pub occasion: String,
    pub season: String,
    pub weather: Option<String>,
    pub preferred_styles: Option<Vec<String>>,
    /// Catalog item ids to leave out of the suggestion.
    pub exclude_items: Option<Vec<Uuid>>,
}

/// A stored outfit suggestion. The id is assigned by the server; the model's
/// reply only supplies the content fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookSuggestion {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Catalog item ids the look is composed of.
    pub items: Vec<Uuid>,
    pub reasoning: String,
    pub tips: Vec<String>,
    pub confidence: f32,
    pub created_at: DateTime<Utc>,
}

/// Raw look content parsed from the model reply, with serde defaults for
/// fields the model may omit.
///
/// `items` stays as raw strings here: the model occasionally echoes ids that
/// are not valid UUIDs, and a malformed id must not fail the whole parse.
/// The stylist resolves them against the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct LookDraft {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_look_description")]
    pub description: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default = "default_reasoning")]
    pub reasoning: String,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default = "default_look_confidence")]
    pub confidence: f32,
}

fn default_title() -> String {
    "Suggested Look".to_string()
}

fn default_look_description() -> String {
    "A look put together for you".to_string()
}

fn default_reasoning() -> String {
    "Combination based on color harmony and style".to_string()
}

fn default_look_confidence() -> f32 {
    0.7
}

/// A user's verdict on a generated look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Approve,
    Reject,
}

/// A feedback record for a look. The id and timestamp are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookFeedback {
    pub id: Uuid,
    pub look_id: Uuid,
    pub rating: Rating,
    pub comments: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_look_draft_defaults_fill_missing_fields() {
        let draft: LookDraft = serde_json::from_str("{}").unwrap();
        assert_eq!(draft.title, "Suggested Look");
        assert_eq!(draft.description, "A look put together for you");
        assert!(draft.items.is_empty());
        assert!(draft.tips.is_empty());
        assert!((draft.confidence - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_look_draft_full_reply_parses() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let json = format!(
            r#"{{
                "title": "Smart Casual Friday",
                "description": "A relaxed office look",
                "items": ["{a}", "{b}"],
                "reasoning": "Neutral palette keeps the outfit cohesive",
                "tips": ["Roll the sleeves", "Add a leather belt"],
                "confidence": 0.9
            }}"#
        );
        let draft: LookDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(draft.title, "Smart Casual Friday");
        assert_eq!(draft.items, vec![a.to_string(), b.to_string()]);
        assert_eq!(draft.tips.len(), 2);
    }

    #[test]
    fn test_look_draft_tolerates_non_uuid_item_ids() {
        // A model echoing made-up ids must not fail the parse; the stylist
        // resolves them later.
        let json = r#"{ "title": "Casual Day", "items": ["item_123", "top"] }"#;
        let draft: LookDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.title, "Casual Day");
        assert_eq!(draft.items, vec!["item_123".to_string(), "top".to_string()]);
    }

    #[test]
    fn test_look_draft_ignores_model_supplied_id() {
        // The prompt no longer asks for an id, but a model that invents one
        // must not break parsing.
        let json = r#"{ "id": "look_12345", "title": "Evening Out" }"#;
        let draft: LookDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.title, "Evening Out");
    }

    #[test]
    fn test_rating_serde_round_trip() {
        assert_eq!(serde_json::to_string(&Rating::Approve).unwrap(), "\"approve\"");
        let rating: Rating = serde_json::from_str("\"reject\"").unwrap();
        assert_eq!(rating, Rating::Reject);
    }

    #[test]
    fn test_look_context_optional_fields_default_to_none() {
        let ctx: LookContext =
            serde_json::from_str(r#"{"occasion": "work", "season": "winter"}"#).unwrap();
        assert_eq!(ctx.occasion, "work");
        assert!(ctx.weather.is_none());
        assert!(ctx.preferred_styles.is_none());
        assert!(ctx.exclude_items.is_none());
    }
}
