//! Tauri Commands for Promotions
//!
//! All promotion operations go through the shared `PromocaoStore`.

use tauri::State;

use super::user_facing;
use crate::domain::{Action, DomainError, Promocao, PromocaoDraft};
use crate::AppState;

/// Fetch the full list from the server, replacing local state
#[tauri::command]
pub async fn load_promocoes(state: State<'_, AppState>) -> Result<Vec<Promocao>, DomainError> {
    state
        .promocoes
        .load()
        .await
        .map_err(|e| user_facing(Action::Load, e))
}

/// Current local state without a network round-trip
#[tauri::command]
pub async fn list_promocoes(state: State<'_, AppState>) -> Result<Vec<Promocao>, DomainError> {
    if !state.promocoes.is_loaded() {
        log::debug!("Promotions listed before the first successful load");
    }
    Ok(state.promocoes.snapshot().await)
}

/// Create a promotion
#[tauri::command]
pub async fn add_promocao(state: State<'_, AppState>, draft: PromocaoDraft) -> Result<Promocao, DomainError> {
    state
        .promocoes
        .add(&draft)
        .await
        .map_err(|e| user_facing(Action::Add, e))
}

/// Update a promotion; `None` when it was not loaded locally
#[tauri::command]
pub async fn edit_promocao(
    state: State<'_, AppState>,
    id: u32,
    draft: PromocaoDraft,
) -> Result<Option<Promocao>, DomainError> {
    state
        .promocoes
        .edit(id, &draft)
        .await
        .map_err(|e| user_facing(Action::Edit, e))
}

/// Delete a promotion
#[tauri::command]
pub async fn remove_promocao(state: State<'_, AppState>, id: u32) -> Result<(), DomainError> {
    state
        .promocoes
        .remove(id)
        .await
        .map_err(|e| user_facing(Action::Remove, e))
}
