//! Authentication Flows
//!
//! Login, registration and logout. Forms are validated before any request;
//! a successful login persists the token in the session store.

use crate::api::ApiClient;
use crate::domain::{DomainResult, LoginForm, Promocao, PromocaoDraft, RegisterForm};
use crate::repository::{Repository, SessionStore};
use crate::services::PromocaoStore;

pub async fn login(api: &ApiClient, form: &LoginForm) -> DomainResult<()> {
    form.validate()?;
    let token = api.login(form).await?;
    api.session().set(&token).await?;
    log::info!("Login succeeded for '{}'", form.username);
    Ok(())
}

pub async fn register(api: &ApiClient, form: &RegisterForm) -> DomainResult<()> {
    form.validate()?;
    api.register(form).await?;
    log::info!("Registered account '{}'", form.username);
    Ok(())
}

/// Drop the token and everything loaded under it.
///
/// The token goes first; if it cannot be removed the loaded promotions
/// are kept and the error is returned.
pub async fn logout<R>(session: &SessionStore, store: &PromocaoStore<R>) -> DomainResult<()>
where
    R: Repository<Promocao, Draft = PromocaoDraft>,
{
    session.clear().await?;
    store.clear().await;
    log::info!("Logged out");
    Ok(())
}
