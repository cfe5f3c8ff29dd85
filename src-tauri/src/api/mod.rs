//! Remote API Layer
//!
//! HTTP access to the promotions backend.

mod client;


pub use client::ApiClient;
