//! Services Layer
//!
//! Shared state and flows that sit between commands and the API.

mod promocao_store;
pub mod auth_service;

pub use promocao_store::PromocaoStore;
