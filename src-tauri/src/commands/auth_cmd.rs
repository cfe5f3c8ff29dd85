//! Tauri Commands for Authentication
//!
//! Exposes login, registration and logout to the frontend via Tauri IPC.

use std::time::Duration;
use tauri::State;

use super::user_facing;
use crate::domain::{Action, DomainError, LoginForm, RegisterForm};
use crate::services::auth_service;
use crate::AppState;

const DB_READY_TIMEOUT: Duration = Duration::from_secs(5);

/// Log in and persist the returned token
#[tauri::command]
pub async fn login(state: State<'_, AppState>, form: LoginForm) -> Result<(), DomainError> {
    auth_service::login(&state.api, &form)
        .await
        .map_err(|e| user_facing(Action::Login, e))
}

/// Create an account with the `user` role
#[tauri::command]
pub async fn register(state: State<'_, AppState>, form: RegisterForm) -> Result<(), DomainError> {
    auth_service::register(&state.api, &form)
        .await
        .map_err(|e| user_facing(Action::Register, e))
}

/// Clear the token and the loaded promotions
#[tauri::command]
pub async fn logout(state: State<'_, AppState>) -> Result<(), DomainError> {
    auth_service::logout(state.api.session(), &state.promocoes)
        .await
        .map_err(|e| user_facing(Action::Logout, e))
}

/// Whether a token is currently stored.
///
/// Waits for the database to open so a launch-time check sees the saved token.
#[tauri::command]
pub async fn has_session(state: State<'_, AppState>) -> Result<bool, DomainError> {
    if !state.db_state.is_initialized().await && !state.db_state.wait_ready(DB_READY_TIMEOUT).await {
        log::warn!("Session checked before the database finished opening");
    }
    Ok(state.api.session().bearer().await.is_some())
}
