//! Frontend Models
//!
//! Data structures matching backend entities and command errors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Promotion record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promocao {
    pub id: u32,
    pub promocao: String,
    pub valor_cheio: f64,
    pub valor_promocional: Option<f64>,
    pub localizacao: String,
}

/// New-promotion form, bound to the modal inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromocaoDraft {
    pub promocao: String,
    pub valor_cheio: String,
    pub valor_promocional: String,
    pub localizacao: String,
}

impl From<&Promocao> for PromocaoDraft {
    /// Prefill for editing an existing record
    fn from(p: &Promocao) -> Self {
        Self {
            promocao: p.promocao.clone(),
            valor_cheio: p.valor_cheio.to_string(),
            valor_promocional: p.valor_promocional.map(|v| v.to_string()).unwrap_or_default(),
            localizacao: p.localizacao.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Key used for messages that apply to the whole form
pub const FORM_FIELD: &str = "form";

/// Error returned by a backend command
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum CommandError {
    /// Field name -> message
    Validation(BTreeMap<String, String>),
    Network(String),
    Rejected { status: u16 },
    Storage(String),
    Internal(String),
    Failed(String),
    /// The invoke itself failed or the payload could not be decoded
    #[serde(skip)]
    Bridge(String),
}

impl CommandError {
    pub fn field(&self, name: &str) -> Option<String> {
        match self {
            CommandError::Validation(fields) => fields.get(name).cloned(),
            _ => None,
        }
    }

    /// Single line to show in a banner. Per-field validation messages are
    /// rendered next to their inputs, so only the whole-form one shows here.
    pub fn banner(&self) -> Option<String> {
        match self {
            CommandError::Validation(fields) => fields.get(FORM_FIELD).cloned(),
            CommandError::Failed(msg) => Some(msg.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Validation(fields) => {
                let joined: Vec<&str> = fields.values().map(String::as_str).collect();
                write!(f, "{}", joined.join(" "))
            }
            CommandError::Network(msg) => write!(f, "Erro de conexão: {}", msg),
            CommandError::Rejected { status } => write!(f, "HTTP {}", status),
            CommandError::Storage(msg)
            | CommandError::Internal(msg)
            | CommandError::Failed(msg)
            | CommandError::Bridge(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_backend_error_shapes() {
        let err: CommandError =
            serde_json::from_str(r#"{"Validation":{"valorCheio":"O campo \"Valor Cheio\" é obrigatório."}}"#).unwrap();
        assert_eq!(err.field("valorCheio").as_deref(), Some("O campo \"Valor Cheio\" é obrigatório."));
        assert_eq!(err.banner(), None);

        let err: CommandError = serde_json::from_str(r#"{"Failed":"Erro ao fazer login. Verifique suas credenciais."}"#).unwrap();
        assert_eq!(err.banner().as_deref(), Some("Erro ao fazer login. Verifique suas credenciais."));

        let err: CommandError = serde_json::from_str(r#"{"Rejected":{"status":500}}"#).unwrap();
        assert_eq!(err, CommandError::Rejected { status: 500 });
    }

    #[test]
    fn test_form_message_goes_to_banner() {
        let err: CommandError = serde_json::from_str(r#"{"Validation":{"form":"As senhas não coincidem."}}"#).unwrap();
        assert_eq!(err.banner().as_deref(), Some("As senhas não coincidem."));
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = PromocaoDraft {
            promocao: "Combo X".into(),
            valor_cheio: "20".into(),
            valor_promocional: String::new(),
            localizacao: "Store A".into(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["valorCheio"], "20");
        assert_eq!(json["valorPromocional"], "");
    }

    #[test]
    fn test_draft_from_record() {
        let record = Promocao {
            id: 3,
            promocao: "Combo X".into(),
            valor_cheio: 20.0,
            valor_promocional: Some(14.5),
            localizacao: "Store A".into(),
        };
        let draft = PromocaoDraft::from(&record);
        assert_eq!(draft.valor_cheio, "20");
        assert_eq!(draft.valor_promocional, "14.5");

        let record = Promocao { valor_promocional: None, ..record };
        assert_eq!(PromocaoDraft::from(&record).valor_promocional, "");
    }
}
