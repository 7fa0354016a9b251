//! Image store that keeps uploads in memory and hands out predictable URLs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::DomainError;

use super::{ImageStore, ImageUpload};

#[derive(Clone)]
pub struct InMemoryImageStore {
    base_url: String,
    objects: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryImageStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            objects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored images
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

impl Default for InMemoryImageStore {
    fn default() -> Self {
        Self::new("memory://images")
    }
}

#[async_trait]
impl ImageStore for InMemoryImageStore {
    async fn upload(&self, image: ImageUpload) -> Result<String, DomainError> {
        let key = format!("{}-{}", Uuid::new_v4(), image.file_name);
        let url = format!("{}/{}", self.base_url, key);

        let mut objects = self.objects.write().await;
        objects.insert(key, image.bytes);

        Ok(url)
    }
}
