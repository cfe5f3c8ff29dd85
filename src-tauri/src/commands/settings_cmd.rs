//! Settings and Diagnostics Commands
//!
//! Server address configuration and access to recent log lines.

use std::path::Path;
use tauri::State;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::domain::{DomainError, DomainResult};
use crate::AppState;

pub const MSG_BASE_URL_REQUIRED: &str = "Informe o endereço do servidor.";

/// Current API configuration (base URL as the client uses it)
#[tauri::command]
pub fn get_api_config(state: State<'_, AppState>) -> ApiConfig {
    ApiConfig {
        base_url: state.api.base_url(),
        ..state.api_config.clone()
    }
}

/// Point the client at another server and persist the choice
#[tauri::command]
pub fn set_api_base_url(state: State<'_, AppState>, base_url: String) -> Result<ApiConfig, DomainError> {
    apply_base_url(&state.api, &state.api_config, &state.config_dir, &base_url)
}

/// Validate and save the new address, then switch the client over.
///
/// The client keeps its current address unless the save succeeded.
fn apply_base_url(api: &ApiClient, base: &ApiConfig, config_dir: &Path, raw: &str) -> DomainResult<ApiConfig> {
    let config = base
        .with_base_url(raw)
        .ok_or_else(|| DomainError::Failed(MSG_BASE_URL_REQUIRED.to_string()))?;

    config.save(config_dir).map_err(|e| {
        log::error!("Failed to save API config: {}", e);
        DomainError::Storage(e)
    })?;

    api.set_base_url(&config.base_url);
    log::info!("API base URL set to {}", config.base_url);
    Ok(config)
}

/// Most recent log lines, oldest first
#[tauri::command]
pub fn recent_logs() -> Vec<String> {
    rolling_logger::recent_lines()
}
