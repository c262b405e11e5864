//! Look generation — orchestrates the outfit-suggestion pipeline.
//!
//! Flow: load catalog → drop excluded items → build prompt →
//!       LLM generate → default-fill draft → persist to the store → respond.

use std::collections::HashSet;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{ChatMessage, LlmClient};
use crate::models::item::ClothingItem;
use crate::models::look::{LookContext, LookDraft, LookSuggestion};
use crate::store::Store;
use crate::styling::prompts::{LOOK_PROMPT_TEMPLATE, LOOK_SYSTEM};

/// Renders the situational context block of the prompt.
fn describe_context(ctx: &LookContext) -> String {
    let preferred = match &ctx.preferred_styles {
        Some(styles) if !styles.is_empty() => styles.join(", "),
        _ => "Any".to_string(),
    };
    let excluded = match &ctx.exclude_items {
        Some(ids) if !ids.is_empty() => ids
            .iter()
            .map(Uuid::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        _ => "None".to_string(),
    };

    format!(
        "Occasion: {}\nSeason: {}\nWeather: {}\nPreferred styles: {}\nItems to avoid: {}",
        ctx.occasion,
        ctx.season,
        ctx.weather.as_deref().unwrap_or("N/A"),
        preferred,
        excluded,
    )
}

/// Renders one prompt line per available catalog item.
fn describe_items(items: &[ClothingItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "ID: {}, Type: {}, Colors: {}, Styles: {}, Description: {}",
                item.id,
                item.kind,
                item.colors.join(", "),
                item.styles.join(", "),
                item.description.as_deref().unwrap_or("N/A"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the look-generation chat from the context and the usable catalog.
pub fn build_look_messages(ctx: &LookContext, items: &[ClothingItem]) -> Vec<ChatMessage> {
    let prompt = LOOK_PROMPT_TEMPLATE
        .replace("{context}", &describe_context(ctx))
        .replace("{items}", &describe_items(items));

    vec![ChatMessage::system(LOOK_SYSTEM), ChatMessage::user(prompt)]
}

/// Resolves the model's item ids against the catalog. Valid UUIDs are kept
/// even when they are not in the catalog (logged); ids that are not UUIDs
/// at all are dropped with a warning.
fn resolve_item_ids(raw: &[String], known_ids: &HashSet<Uuid>) -> Vec<Uuid> {
    raw.iter()
        .filter_map(|id| match id.parse::<Uuid>() {
            Ok(uuid) => {
                if !known_ids.contains(&uuid) {
                    warn!("Look references unknown catalog item {uuid}");
                }
                Some(uuid)
            }
            Err(_) => {
                warn!("Look references malformed item id '{id}', dropping it");
                None
            }
        })
        .collect()
}

/// Generates an outfit suggestion from the catalog and stores it.
///
/// Item ids in the reply that do not exist in the catalog are kept but
/// logged; the suggestion is stored as the model returned it.
pub async fn generate_look(
    ctx: &LookContext,
    store: &Store,
    llm: &LlmClient,
) -> Result<LookSuggestion, AppError> {
    let excluded: HashSet<Uuid> = ctx
        .exclude_items
        .as_deref()
        .unwrap_or_default()
        .iter()
        .copied()
        .collect();

    let items: Vec<ClothingItem> = store
        .items()
        .await
        .into_iter()
        .filter(|item| !excluded.contains(&item.id))
        .collect();

    if items.is_empty() {
        return Err(AppError::Validation(
            "No wardrobe items available. Add clothing items before generating a look.".to_string(),
        ));
    }

    let messages = build_look_messages(ctx, &items);

    let draft: LookDraft = llm
        .chat_json(&messages)
        .await
        .map_err(|e| AppError::Llm(format!("Look generation failed: {e}")))?;

    let known_ids: HashSet<Uuid> = items.iter().map(|item| item.id).collect();
    let look_items = resolve_item_ids(&draft.items, &known_ids);

    let look = store
        .add_look(LookSuggestion {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            items: look_items,
            reasoning: draft.reasoning,
            tips: draft.tips,
            confidence: draft.confidence,
            created_at: Utc::now(),
        })
        .await;

    info!(
        "Generated look {} ('{}') from {} candidate items",
        look.id,
        look.title,
        items.len()
    );

    Ok(look)
}
