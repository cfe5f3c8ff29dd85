//! Promotion Commands
//!
//! Frontend bindings for the shared promotions container.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, call_unit, to_args};
use crate::models::{CommandError, Promocao, PromocaoDraft};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct DraftArgs<'a> {
    draft: &'a PromocaoDraft,
}

#[derive(Serialize)]
struct EditArgs<'a> {
    id: u32,
    draft: &'a PromocaoDraft,
}

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

// ========================
// Commands
// ========================

/// Fetch from the server and replace the container's list
pub async fn load_promocoes() -> Result<Vec<Promocao>, CommandError> {
    call("load_promocoes", JsValue::NULL).await
}

/// Container's list as it is, no network
pub async fn list_promocoes() -> Result<Vec<Promocao>, CommandError> {
    call("list_promocoes", JsValue::NULL).await
}

pub async fn add_promocao(draft: &PromocaoDraft) -> Result<Promocao, CommandError> {
    call("add_promocao", to_args(&DraftArgs { draft })?).await
}

pub async fn edit_promocao(id: u32, draft: &PromocaoDraft) -> Result<Option<Promocao>, CommandError> {
    call("edit_promocao", to_args(&EditArgs { id, draft })?).await
}

pub async fn remove_promocao(id: u32) -> Result<(), CommandError> {
    call_unit("remove_promocao", to_args(&IdArgs { id })?).await
}
