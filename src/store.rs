//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The promotions
//! list mirrors the backend container: every command result is written here.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Promocao;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Mirror of the backend promotions container
    pub promocoes: Vec<Promocao>,
    /// True once the first load resolved (success or failure)
    pub loaded: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_promocoes(store: &AppStore) -> Vec<Promocao> {
    store.promocoes().get()
}

pub fn store_is_loaded(store: &AppStore) -> bool {
    store.loaded().get()
}

/// Replace the whole list after a load
pub fn store_set_promocoes(store: &AppStore, promocoes: Vec<Promocao>) {
    *store.promocoes().write() = promocoes;
    store_mark_loaded(store);
}

pub fn store_mark_loaded(store: &AppStore) {
    *store.loaded().write() = true;
}

/// Add a promotion, replacing any entry with the same id
pub fn store_add_promocao(store: &AppStore, promocao: Promocao) {
    let binding = store.promocoes();
    let mut list = binding.write();
    match list.iter_mut().find(|p| p.id == promocao.id) {
        Some(existing) => *existing = promocao,
        None => list.push(promocao),
    }
}

/// Update a promotion in the store by ID
pub fn store_update_promocao(store: &AppStore, updated: Promocao) {
    if let Some(p) = store.promocoes().write().iter_mut().find(|p| p.id == updated.id) {
        *p = updated;
    }
}

/// Remove a promotion from the store by ID
pub fn store_remove_promocao(store: &AppStore, id: u32) {
    store.promocoes().write().retain(|p| p.id != id);
}

/// Forget everything (logout)
pub fn store_clear(store: &AppStore) {
    store.promocoes().write().clear();
    *store.loaded().write() = false;
}
