//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.
//! Validation errors reach the frontend unchanged; every other failure is
//! collapsed to the generic message of the action.

mod auth_cmd;
mod promocao_cmd;
mod settings_cmd;

pub use auth_cmd::*;
pub use promocao_cmd::*;
pub use settings_cmd::*;

use crate::domain::{Action, DomainError};

pub(crate) fn user_facing(action: Action, err: DomainError) -> DomainError {
    if !matches!(err, DomainError::Validation(_)) {
        log::debug!("{:?} command failed: {}", action, err);
    }
    action.collapse(err)
}
