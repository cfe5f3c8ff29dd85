//! Settings Commands

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, to_args};
use crate::models::{ApiConfig, CommandError};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BaseUrlArgs<'a> {
    base_url: &'a str,
}

pub async fn get_api_config() -> Result<ApiConfig, CommandError> {
    call("get_api_config", JsValue::NULL).await
}

pub async fn set_api_base_url(base_url: &str) -> Result<ApiConfig, CommandError> {
    call("set_api_base_url", to_args(&BaseUrlArgs { base_url })?).await
}

pub async fn recent_logs() -> Result<Vec<String>, CommandError> {
    call("recent_logs", JsValue::NULL).await
}
