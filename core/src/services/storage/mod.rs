//! Object storage collaborator for property images

mod memory;

pub use memory::InMemoryImageStore;

use async_trait::async_trait;

use crate::errors::DomainError;

/// An image received from a client, ready to upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Trait for object storage integration
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Upload an image and return its public URL
    async fn upload(&self, image: ImageUpload) -> Result<String, DomainError>;
}
