//! User-Facing Messages
//!
//! Network and server failures are collapsed to one message per action;
//! the status code and server detail only reach the log.

use super::entity::DomainError;

pub const MSG_FILL_ALL_FIELDS: &str = "Por favor, preencha todos os campos.";
pub const MSG_PASSWORDS_MISMATCH: &str = "As senhas não coincidem.";
pub const MSG_CONNECTION: &str = "Erro de conexão. Tente novamente mais tarde.";

pub const MSG_PRODUTO_REQUIRED: &str = "O campo \"Produto\" é obrigatório.";
pub const MSG_VALOR_CHEIO_REQUIRED: &str = "O campo \"Valor Cheio\" é obrigatório.";
pub const MSG_LOCALIZACAO_REQUIRED: &str = "O campo \"Localização\" é obrigatório.";

/// A user-triggered action that can fail remotely
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    Register,
    Load,
    Add,
    Edit,
    Remove,
    Logout,
}

impl Action {
    /// Generic message for a server rejection of this action
    pub fn rejected_message(&self) -> &'static str {
        match self {
            Action::Login => "Erro ao fazer login. Verifique suas credenciais.",
            Action::Register => "Erro ao criar conta. Tente novamente.",
            Action::Load => "Não foi possível carregar as promoções",
            Action::Add => "Não foi possível adicionar a promoção",
            Action::Edit => "Não foi possível editar a promoção",
            Action::Remove => "Não foi possível excluir a promoção",
            Action::Logout => "Não foi possível sair. Tente novamente.",
        }
    }

    /// Message shown for any non-validation failure of this action
    pub fn failure_message(&self, err: &DomainError) -> String {
        match err {
            DomainError::Failed(msg) => msg.clone(),
            e if e.is_transport() => MSG_CONNECTION.to_string(),
            _ => self.rejected_message().to_string(),
        }
    }

    /// Keep validation errors as-is, collapse everything else for display
    pub fn collapse(&self, err: DomainError) -> DomainError {
        match err {
            DomainError::Validation(_) => err,
            other => DomainError::Failed(self.failure_message(&other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldErrors;

    #[test]
    fn test_transport_errors_share_one_message() {
        let err = DomainError::Network("connection refused".into());
        assert_eq!(Action::Login.failure_message(&err), MSG_CONNECTION);
        assert_eq!(Action::Remove.failure_message(&err), MSG_CONNECTION);
    }

    #[test]
    fn test_status_codes_are_not_distinguished() {
        for status in [400, 401, 404, 500] {
            let err = DomainError::Rejected { status };
            assert_eq!(
                Action::Login.failure_message(&err),
                "Erro ao fazer login. Verifique suas credenciais."
            );
        }
    }

    #[test]
    fn test_collapse_keeps_validation() {
        let mut fields = FieldErrors::new();
        fields.add("promocao", MSG_PRODUTO_REQUIRED);
        let err = DomainError::Validation(fields.clone());
        assert_eq!(Action::Add.collapse(err), DomainError::Validation(fields));

        let collapsed = Action::Add.collapse(DomainError::Storage("disk".into()));
        assert_eq!(collapsed, DomainError::Failed("Não foi possível adicionar a promoção".into()));
    }
}
