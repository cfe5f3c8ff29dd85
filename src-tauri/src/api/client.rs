//! Remote API Client
//!
//! Thin `reqwest` wrapper over `/login`, `/registro` and `/promocao`.
//! Authenticated calls read the session token right before building the
//! request; without a token the request goes out with no Authorization header.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::config::{normalize_base_url, ApiConfig};
use crate::domain::{DomainError, DomainResult, LoginForm, LoginResponse, Promocao, PromocaoDraft, RegisterForm};
use crate::repository::{Repository, SessionStore};

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => DomainError::Rejected { status: status.as_u16() },
            None => DomainError::Network(e.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Arc<RwLock<String>>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: SessionStore) -> DomainResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: Arc::new(RwLock::new(config.base_url.clone())),
            session,
        })
    }

    pub fn base_url(&self) -> String {
        match self.base_url.read() {
            Ok(url) => url.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set_base_url(&self, url: &str) {
        let url = normalize_base_url(url);
        match self.base_url.write() {
            Ok(mut guard) => *guard = url,
            Err(poisoned) => *poisoned.into_inner() = url,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    async fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.bearer().await {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// POST `/login`, returning the bearer token
    pub async fn login(&self, form: &LoginForm) -> DomainResult<String> {
        let response = self.http.post(self.url("/login")).json(form).send().await?;
        let body: LoginResponse = decode(ensure_success(response)?).await?;
        Ok(body.token)
    }

    /// POST `/registro` with the fixed `user` role
    pub async fn register(&self, form: &RegisterForm) -> DomainResult<()> {
        let response = self.http.post(self.url("/registro")).json(&form.payload()).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}

fn ensure_success(response: Response) -> DomainResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(DomainError::Rejected { status: status.as_u16() })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> DomainResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| DomainError::Network(format!("Parse error: {}", e)))
}

/// Decode each row on its own; rows that do not decode are logged and skipped
fn promocoes_from_rows(rows: Vec<serde_json::Value>) -> Vec<Promocao> {
    let total = rows.len();
    let list: Vec<Promocao> = rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<Promocao>(row.clone()) {
            Ok(p) => Some(p),
            Err(e) => {
                log::warn!("Skipping promotion row {}: {}", row, e);
                None
            }
        })
        .collect();
    if list.len() < total {
        log::warn!("Skipped {} of {} promotion rows", total - list.len(), total);
    }
    list
}

#[async_trait]
impl Repository<Promocao> for ApiClient {
    type Draft = PromocaoDraft;

    async fn list(&self) -> DomainResult<Vec<Promocao>> {
        let request = self.authorized(self.http.get(self.url("/promocao"))).await;
        let rows: Vec<serde_json::Value> = decode(ensure_success(request.send().await?)?).await?;
        Ok(promocoes_from_rows(rows))
    }

    async fn create(&self, draft: &PromocaoDraft) -> DomainResult<Promocao> {
        let request = self.authorized(self.http.post(self.url("/promocao")).json(draft)).await;
        decode(ensure_success(request.send().await?)?).await
    }

    async fn update(&self, id: u32, draft: &PromocaoDraft) -> DomainResult<()> {
        let path = format!("/promocao/{}", id);
        let request = self.authorized(self.http.put(self.url(&path)).json(draft)).await;
        ensure_success(request.send().await?)?;
        Ok(())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let path = format!("/promocao/{}", id);
        let request = self.authorized(self.http.delete(self.url(&path))).await;
        ensure_success(request.send().await?)?;
        Ok(())
    }
}
