use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::{entities::photo::PhotoRecord, errors::AppError};

/// Storage seam for photo records. The in-memory implementation below never
/// fails, but the trait is fallible so a persistent backend can slot in.
#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// Prepends the record so reads come back most-recent-first.
    async fn insert(&self, record: PhotoRecord) -> Result<(), AppError>;

    /// Snapshot copy of the full collection, most-recent-first. Callers
    /// cannot mutate the store through the returned list.
    async fn list_all(&self) -> Result<Vec<PhotoRecord>, AppError>;

    /// Removes the first record whose name matches exactly. No-op when
    /// nothing matches.
    async fn delete_by_name(&self, name: &str) -> Result<(), AppError>;

    async fn count(&self) -> Result<u64, AppError>;
}

/// Process-local store: records live for the lifetime of the process and
/// are gone on restart. One lock serializes insert, list, and delete so a
/// read always sees a consistent snapshot under the multi-threaded actix
/// runtime.
#[derive(Clone, Default)]
pub struct MemoryPhotoStore {
    photos: Arc<RwLock<Vec<PhotoRecord>>>,
}

impl MemoryPhotoStore {
    pub fn new() -> Self {
        MemoryPhotoStore::default()
    }
}

#[async_trait]
impl PhotoStore for MemoryPhotoStore {
    async fn insert(&self, record: PhotoRecord) -> Result<(), AppError> {
        self.photos.write().insert(0, record);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<PhotoRecord>, AppError> {
        Ok(self.photos.read().clone())
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), AppError> {
        let mut photos = self.photos.write();
        if let Some(idx) = photos.iter().position(|p| p.name == name) {
            photos.remove(idx);
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.photos.read().len() as u64)
    }
}
