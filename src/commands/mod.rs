//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod auth;
mod promocao;
mod settings;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::CommandError;

#[wasm_bindgen]
extern "C" {
    /// Rejects with the serialized command error
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "event"])]
    async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;
}

/// Emitted once the local database is open
pub const DB_INITIALIZED_EVENT: &str = "db-initialized";

/// Run `handler` every time the backend emits `event`, for the rest of the app's life
pub async fn on_event(event: &str, mut handler: impl FnMut() + 'static) -> Result<(), CommandError> {
    let closure = Closure::<dyn FnMut(JsValue)>::new(move |_payload: JsValue| handler());
    listen(event, &closure).await.map_err(decode_error)?;
    closure.forget();
    Ok(())
}

// Re-export all public items
pub use auth::*;
pub use promocao::*;
pub use settings::*;

fn to_args<A: Serialize>(args: &A) -> Result<JsValue, CommandError> {
    serde_wasm_bindgen::to_value(args).map_err(|e| CommandError::Bridge(e.to_string()))
}

/// Turn a rejected invoke into a `CommandError`. Plain string rejections
/// (unknown command, bad arguments) become `Bridge`.
fn decode_error(err: JsValue) -> CommandError {
    if let Some(text) = err.as_string() {
        return CommandError::Bridge(text);
    }
    serde_wasm_bindgen::from_value(err).unwrap_or_else(|e| CommandError::Bridge(e.to_string()))
}

async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, CommandError> {
    match invoke(cmd, args).await {
        Ok(value) => serde_wasm_bindgen::from_value(value).map_err(|e| CommandError::Bridge(e.to_string())),
        Err(err) => {
            let err = decode_error(err);
            web_sys::console::log_1(&format!("[CMD] {} failed: {:?}", cmd, err).into());
            Err(err)
        }
    }
}

/// For commands returning `()`
async fn call_unit(cmd: &str, args: JsValue) -> Result<(), CommandError> {
    match invoke(cmd, args).await {
        Ok(_) => Ok(()),
        Err(err) => {
            let err = decode_error(err);
            web_sys::console::log_1(&format!("[CMD] {} failed: {:?}", cmd, err).into());
            Err(err)
        }
    }
}
