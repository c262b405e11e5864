//! Axum route handlers for the wardrobe API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::item::{
    ClassificationResult, ClothingItem, ItemFilter, ItemUpdate, NewClothingItem, WardrobeStats,
};
use crate::state::AppState;
use crate::wardrobe::classifier::classify_image;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// Image payload as a data URL (or any URL the model can fetch).
    pub image_data: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub item: ClothingItem,
    pub classification: ClassificationResult,
}

/// Filter query for the item list. List-valued parameters are
/// comma-separated, e.g. `?styles=casual,streetwear`.
#[derive(Debug, Default, Deserialize)]
pub struct ItemFilterQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub styles: Option<String>,
    pub colors: Option<String>,
    pub season: Option<String>,
    pub occasion: Option<String>,
}

impl ItemFilterQuery {
    fn into_filter(self) -> ItemFilter {
        ItemFilter {
            kind: self.kind,
            styles: split_csv(self.styles),
            colors: split_csv(self.colors),
            season: split_csv(self.season),
            occasion: split_csv(self.occasion),
        }
    }
}

fn split_csv(value: Option<String>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Serialize)]
pub struct ItemListResponse {
    pub items: Vec<ClothingItem>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/wardrobe/classify
///
/// Classifies an uploaded clothing image and adds the result to the catalog.
pub async fn handle_classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    if request.image_data.trim().is_empty() {
        return Err(AppError::Validation(
            "image_data cannot be empty".to_string(),
        ));
    }

    let classification = classify_image(&request.image_data, &state.llm).await?;

    let item = state
        .store
        .add_item(NewClothingItem {
            image_url: request.image_data,
            kind: classification.kind.clone(),
            colors: classification.colors.clone(),
            styles: classification.styles.clone(),
            season: classification.season.clone(),
            occasion: classification.occasion.clone(),
            description: Some(classification.description.clone()),
        })
        .await;

    info!(
        "Cataloged item {} as '{}' (confidence {:.2})",
        item.id, classification.kind, classification.confidence
    );

    Ok(Json(ClassifyResponse {
        item,
        classification,
    }))
}

/// GET /api/v1/wardrobe/items
///
/// Lists catalog items, optionally filtered.
pub async fn handle_list_items(
    State(state): State<AppState>,
    Query(query): Query<ItemFilterQuery>,
) -> Result<Json<ItemListResponse>, AppError> {
    let items = state.store.filter_items(&query.into_filter()).await;
    Ok(Json(ItemListResponse { items }))
}

/// GET /api/v1/wardrobe/items/:id
pub async fn handle_get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClothingItem>, AppError> {
    let item = state
        .store
        .item(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Item {id} not found")))?;
    Ok(Json(item))
}

/// PATCH /api/v1/wardrobe/items/:id
///
/// Partially updates an item; omitted fields are left unchanged.
pub async fn handle_update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<ItemUpdate>,
) -> Result<Json<ClothingItem>, AppError> {
    let item = state
        .store
        .update_item(id, update)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Item {id} not found")))?;
    Ok(Json(item))
}

/// DELETE /api/v1/wardrobe/items/:id
pub async fn handle_delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.store.delete_item(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Item {id} not found")))
    }
}

/// GET /api/v1/wardrobe/stats
///
/// Approval statistics and catalog distributions.
pub async fn handle_stats(State(state): State<AppState>) -> Result<Json<WardrobeStats>, AppError> {
    Ok(Json(state.store.stats().await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmClient;
    use crate::store::Store;

    fn test_state() -> AppState {
        AppState {
            store: Store::new(),
            llm: LlmClient::new("test-key".to_string(), "http://localhost:8000".to_string()),
        }
    }

    #[test]
    fn test_split_csv_trims_and_drops_empties() {
        assert_eq!(
            split_csv(Some("casual, streetwear,,".to_string())),
            vec!["casual".to_string(), "streetwear".to_string()]
        );
        assert!(split_csv(None).is_empty());
    }

    #[test]
    fn test_filter_query_maps_to_item_filter() {
        let query = ItemFilterQuery {
            kind: Some("shirt".to_string()),
            styles: Some("casual,classic".to_string()),
            ..Default::default()
        };
        let filter = query.into_filter();
        assert_eq!(filter.kind.as_deref(), Some("shirt"));
        assert_eq!(filter.styles.len(), 2);
        assert!(filter.colors.is_empty());
    }

    #[tokio::test]
    async fn test_classify_rejects_empty_payload() {
        let err = handle_classify(
            State(test_state()),
            Json(ClassifyRequest {
                image_data: "   ".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_missing_item_is_not_found() {
        let err = handle_get_item(State(test_state()), Path(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_items_applies_filter_query() {
        let state = test_state();
        state.store.seed_sample_data().await;

        let Json(response) = handle_list_items(
            State(state),
            Query(ItemFilterQuery {
                styles: Some("street".to_string()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].kind, "Sneakers");
    }

    #[tokio::test]
    async fn test_delete_item_round_trip() {
        let state = test_state();
        let item = state
            .store
            .add_item(NewClothingItem {
                image_url: "/img".to_string(),
                kind: "Hat".to_string(),
                colors: vec![],
                styles: vec![],
                season: vec![],
                occasion: vec![],
                description: None,
            })
            .await;

        let status = handle_delete_item(State(state.clone()), Path(item.id))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let err = handle_delete_item(State(state), Path(item.id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
