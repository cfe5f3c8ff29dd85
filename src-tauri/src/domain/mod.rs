//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod promocao;
mod credentials;
mod feedback;

pub use entity::{Entity, DomainError, DomainResult, FieldErrors};
pub use promocao::{Promocao, PromocaoDraft};
pub use credentials::{LoginForm, RegisterForm, LoginResponse};
pub use feedback::{Action, MSG_FILL_ALL_FIELDS, MSG_PASSWORDS_MISMATCH};
