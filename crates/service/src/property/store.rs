use std::sync::Arc;

use async_trait::async_trait;
use models::property::{PropertyInput, PropertyPatch, PropertyRecord};
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::ServiceError;
use crate::property::repository::PropertyRepository;

/// In-memory property store. Records live for the process lifetime only;
/// restarting the server loses everything.
#[derive(Clone)]
pub struct InMemoryPropertyStore {
    inner: Arc<RwLock<StoreInner>>,
}

struct StoreInner {
    records: Vec<PropertyRecord>,
    // Ids come from a counter rather than the sequence length, so a deleted
    // id is never reissued.
    next_id: u64,
}

impl InMemoryPropertyStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: Arc::new(RwLock::new(StoreInner { records: Vec::new(), next_id: 1 })),
        })
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyStore {
    async fn list(&self) -> Vec<PropertyRecord> {
        let inner = self.inner.read().await;
        inner.records.clone()
    }

    async fn create(&self, input: PropertyInput) -> u64 {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.records.push(input.into_record(id));
        info!(property_id = id, "property created");
        id
    }

    async fn update(&self, id: u64, patch: PropertyPatch) -> Result<(), ServiceError> {
        let mut inner = self.inner.write().await;
        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ServiceError::not_found("property"))?;
        patch.apply(record);
        Ok(())
    }

    async fn delete(&self, id: u64) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.records.len();
        inner.records.retain(|r| r.id != id);
        before != inner.records.len()
    }
}
