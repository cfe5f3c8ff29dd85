//! Auth Commands
//!
//! Frontend bindings for login, registration and session state.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{call, call_unit, to_args};
use crate::models::{CommandError, LoginForm, RegisterForm};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct FormArgs<'a, F: Serialize> {
    form: &'a F,
}

// ========================
// Commands
// ========================

pub async fn login(form: &LoginForm) -> Result<(), CommandError> {
    call_unit("login", to_args(&FormArgs { form })?).await
}

pub async fn register(form: &RegisterForm) -> Result<(), CommandError> {
    call_unit("register", to_args(&FormArgs { form })?).await
}

pub async fn logout() -> Result<(), CommandError> {
    call_unit("logout", JsValue::NULL).await
}

pub async fn has_session() -> Result<bool, CommandError> {
    call("has_session", JsValue::NULL).await
}
