//! Promo Lojas Backend
//!
//! Layered architecture:
//! - domain: Core entities, validation and user-facing messages
//! - repository: Local key-value storage (session token)
//! - api: Remote HTTP API client
//! - services: Promotions state container and auth flows
//! - commands: Tauri command handlers

use std::path::PathBuf;
use std::sync::Arc;
use tauri::{Emitter, Manager};

mod api;
mod commands;
mod config;
mod domain;
mod repository;
mod services;

use api::ApiClient;
use config::ApiConfig;
use repository::{init_db, DbState, SessionStore, SqliteKvStore};
use services::PromocaoStore;

/// Application state shared across commands
pub struct AppState {
    pub db_state: DbState,
    pub api: ApiClient,
    pub api_config: ApiConfig,
    /// Shared promotions container (provider scope)
    pub promocoes: PromocaoStore<ApiClient>,
    pub config_dir: PathBuf,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> Result<PathBuf, String> {
    let app_dir = app_handle.path().app_data_dir().map_err(|e| e.to_string())?;
    std::fs::create_dir_all(&app_dir).map_err(|e| e.to_string())?;
    Ok(app_dir.join("promo_lojas.db"))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "PromoLojas")?;

            let db_path = get_db_path(&app_handle)?;
            let config_dir = app_handle.path().app_config_dir()?;
            let api_config = ApiConfig::load(&config_dir);
            log::info!("App setup starting, API at {}", api_config.base_url);

            // Create initial empty DbState (managed)
            let db_state = DbState::new();
            let session = SessionStore::new(Arc::new(SqliteKvStore::new(db_state.conn.clone())));
            let api = ApiClient::new(&api_config, session)?;

            // Manage state IMMEDIATELY
            app.manage(AppState {
                db_state: db_state.clone(),
                promocoes: PromocaoStore::new(api.clone()),
                api,
                api_config,
                config_dir,
            });

            // Initialize database asynchronously in background
            tauri::async_runtime::spawn(async move {
                match init_db(&db_path).await {
                    Ok(initialized_state) => {
                        let _ = rolling_logger::info("Async DB init success");

                        // Move the opened connection into the managed DbState
                        let opened = initialized_state.conn.lock().await.take();
                        if let Some(conn) = opened {
                            db_state.install(conn).await;
                        }

                        // Notify frontend
                        if let Err(e) = app_handle.emit("db-initialized", ()) {
                            log::error!("Failed to emit db-initialized: {}", e);
                        }
                    }
                    Err(e) => {
                        let _ = rolling_logger::error(&format!("Async DB init failed: {}", e));
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Auth
            commands::login,
            commands::register,
            commands::logout,
            commands::has_session,
            // Promotions
            commands::load_promocoes,
            commands::list_promocoes,
            commands::add_promocao,
            commands::edit_promocao,
            commands::remove_promocao,
            // Settings / diagnostics
            commands::get_api_config,
            commands::set_api_base_url,
            commands::recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
