//! Axum route handlers for the styling API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::look::{LookContext, LookFeedback, LookSuggestion, Rating};
use crate::state::AppState;
use crate::styling::stylist::generate_look;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub rating: Rating,
    pub comments: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LookListResponse {
    pub looks: Vec<LookSuggestion>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackListResponse {
    pub feedbacks: Vec<LookFeedback>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/looks
///
/// Generates an outfit suggestion from the catalog for the given context.
pub async fn handle_generate_look(
    State(state): State<AppState>,
    Json(ctx): Json<LookContext>,
) -> Result<Json<LookSuggestion>, AppError> {
    if ctx.occasion.trim().is_empty() {
        return Err(AppError::Validation("occasion cannot be empty".to_string()));
    }
    if ctx.season.trim().is_empty() {
        return Err(AppError::Validation("season cannot be empty".to_string()));
    }

    let look = generate_look(&ctx, &state.store, &state.llm).await?;
    Ok(Json(look))
}

/// GET /api/v1/looks
pub async fn handle_list_looks(
    State(state): State<AppState>,
) -> Result<Json<LookListResponse>, AppError> {
    Ok(Json(LookListResponse {
        looks: state.store.looks().await,
    }))
}

/// GET /api/v1/looks/:id
pub async fn handle_get_look(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LookSuggestion>, AppError> {
    let look = state
        .store
        .look(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Look {id} not found")))?;
    Ok(Json(look))
}

/// POST /api/v1/looks/:id/feedback
///
/// Records an approve/reject verdict for an existing look.
pub async fn handle_add_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<LookFeedback>, AppError> {
    if state.store.look(id).await.is_none() {
        return Err(AppError::NotFound(format!("Look {id} not found")));
    }

    let feedback = state
        .store
        .add_feedback(id, request.rating, request.comments.unwrap_or_default())
        .await;

    Ok(Json(feedback))
}

/// GET /api/v1/looks/:id/feedback
pub async fn handle_list_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FeedbackListResponse>, AppError> {
    if state.store.look(id).await.is_none() {
        return Err(AppError::NotFound(format!("Look {id} not found")));
    }

    Ok(Json(FeedbackListResponse {
        feedbacks: state.store.feedback_for_look(id).await,
    }))
}
