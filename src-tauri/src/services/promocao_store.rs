//! Promotions State Container
//!
//! One shared in-memory list of promotions. Every mutation goes to the
//! repository first; local state only changes after the repository
//! acknowledges it. The lock is never held across a repository call, so
//! overlapping operations apply in the order their responses arrive.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

use crate::domain::{DomainResult, Entity, Promocao, PromocaoDraft};
use crate::repository::Repository;

pub struct PromocaoStore<R> {
    repo: R,
    promocoes: Mutex<Vec<Promocao>>,
    loaded: AtomicBool,
}

impl<R> PromocaoStore<R>
where
    R: Repository<Promocao, Draft = PromocaoDraft>,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            promocoes: Mutex::new(Vec::new()),
            loaded: AtomicBool::new(false),
        }
    }

    /// Whether a `load()` has succeeded since creation or the last `clear()`
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> Vec<Promocao> {
        self.promocoes.lock().await.clone()
    }

    /// Replace local state with the server's list.
    ///
    /// On failure the previous state is kept.
    pub async fn load(&self) -> DomainResult<Vec<Promocao>> {
        match self.repo.list().await {
            Ok(list) => {
                let list = dedupe_by_id(list);
                log::info!("Loaded {} promotions", list.len());
                *self.promocoes.lock().await = list.clone();
                self.loaded.store(true, Ordering::SeqCst);
                Ok(list)
            }
            Err(e) => {
                log::error!("Failed to load promotions: {}", e);
                Err(e)
            }
        }
    }

    /// Create a promotion and append the server's record
    pub async fn add(&self, draft: &PromocaoDraft) -> DomainResult<Promocao> {
        draft.validate()?;
        let created = self.repo.create(draft).await.map_err(|e| {
            log::error!("Failed to add promotion: {}", e);
            e
        })?;

        let mut promocoes = self.promocoes.lock().await;
        match promocoes.iter_mut().find(|p| p.id() == created.id()) {
            Some(existing) => {
                log::warn!("Server returned existing id {} on create, replacing", created.id);
                *existing = created.clone();
            }
            None => promocoes.push(created.clone()),
        }
        Ok(created)
    }

    /// Update a promotion and merge the draft into the local record.
    ///
    /// Returns the merged record, or `None` when the id is not held locally.
    pub async fn edit(&self, id: u32, draft: &PromocaoDraft) -> DomainResult<Option<Promocao>> {
        draft.validate()?;
        self.repo.update(id, draft).await.map_err(|e| {
            log::error!("Failed to edit promotion {}: {}", id, e);
            e
        })?;

        let mut promocoes = self.promocoes.lock().await;
        let Some(record) = promocoes.iter_mut().find(|p| p.id() == id) else {
            log::warn!("Edited promotion {} is not in local state", id);
            return Ok(None);
        };
        for field in draft.merge_into(record) {
            log::warn!("Kept previous {} for promotion {}: could not parse", field, id);
        }
        Ok(Some(record.clone()))
    }

    /// Delete a promotion and drop it from local state
    pub async fn remove(&self, id: u32) -> DomainResult<()> {
        self.repo.delete(id).await.map_err(|e| {
            log::error!("Failed to delete promotion {}: {}", id, e);
            e
        })?;

        self.promocoes.lock().await.retain(|p| p.id() != id);
        Ok(())
    }

    /// Forget everything held locally (logout)
    pub async fn clear(&self) {
        self.promocoes.lock().await.clear();
        self.loaded.store(false, Ordering::SeqCst);
    }
}

/// Collapse records sharing an id; the last one wins, keeping the first position
fn dedupe_by_id(list: Vec<Promocao>) -> Vec<Promocao> {
    let mut out: Vec<Promocao> = Vec::with_capacity(list.len());
    let mut index: HashMap<u32, usize> = HashMap::new();
    for record in list {
        let id = record.id();
        match index.get(&id) {
            Some(&i) => {
                log::warn!("Duplicate promotion id {} in server list", id);
                out[i] = record;
            }
            None => {
                index.insert(id, out.len());
                out.push(record);
            }
        }
    }
    out
}
