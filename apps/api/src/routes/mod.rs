pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::styling::handlers as styling;
use crate::wardrobe::handlers as wardrobe;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Wardrobe API
        .route(
            "/api/v1/wardrobe/classify",
            post(wardrobe::handle_classify),
        )
        .route("/api/v1/wardrobe/items", get(wardrobe::handle_list_items))
        .route(
            "/api/v1/wardrobe/items/:id",
            get(wardrobe::handle_get_item)
                .patch(wardrobe::handle_update_item)
                .delete(wardrobe::handle_delete_item),
        )
        .route("/api/v1/wardrobe/stats", get(wardrobe::handle_stats))
        // Styling API
        .route(
            "/api/v1/looks",
            post(styling::handle_generate_look).get(styling::handle_list_looks),
        )
        .route("/api/v1/looks/:id", get(styling::handle_get_look))
        .route(
            "/api/v1/looks/:id/feedback",
            post(styling::handle_add_feedback).get(styling::handle_list_feedback),
        )
        .with_state(state)
}
