//! Test doubles and fixtures for the property service

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{Account, Role};
use crate::errors::DomainError;
use crate::repositories::{AccountRepository, InMemoryAccountRepository, InMemoryPropertyRepository};
use crate::services::authorization::AuthorizationGate;
use crate::services::property::{NewProperty, PropertyService};
use crate::services::storage::{ImageStore, ImageUpload, InMemoryImageStore};

/// Image store that always errors
pub struct FailingImageStore;

#[async_trait]
impl ImageStore for FailingImageStore {
    async fn upload(&self, _image: ImageUpload) -> Result<String, DomainError> {
        Err(DomainError::UploadFailed {
            message: "storage returned 500".to_string(),
        })
    }
}

/// Image store that never answers within any sane timeout
pub struct StalledImageStore;

#[async_trait]
impl ImageStore for StalledImageStore {
    async fn upload(&self, _image: ImageUpload) -> Result<String, DomainError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok("https://never".to_string())
    }
}

pub struct Fixture {
    pub service: PropertyService,
    pub images: Option<InMemoryImageStore>,
    pub accounts: Arc<InMemoryAccountRepository>,
}

pub async fn seeded_accounts() -> Arc<InMemoryAccountRepository> {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    for (email, role) in [
        ("m@x.com", Role::Manager),
        ("e@x.com", Role::Employee),
        ("e2@x.com", Role::Employee),
        ("c@x.com", Role::Customer),
    ] {
        accounts
            .create(Account::new(email.to_string(), "h".to_string(), role))
            .await
            .unwrap();
    }
    accounts
}

pub async fn fixture() -> Fixture {
    let accounts = seeded_accounts().await;
    let images = InMemoryImageStore::new("https://cdn.test/estate");
    let service = PropertyService::new(
        Arc::new(InMemoryPropertyRepository::new()),
        Arc::new(images.clone()),
        AuthorizationGate::new(accounts.clone()),
        Duration::from_secs(5),
    );
    Fixture {
        service,
        images: Some(images),
        accounts,
    }
}

pub async fn fixture_with_store(store: Arc<dyn ImageStore>, timeout: Duration) -> Fixture {
    let accounts = seeded_accounts().await;
    let service = PropertyService::new(
        Arc::new(InMemoryPropertyRepository::new()),
        store,
        AuthorizationGate::new(accounts.clone()),
        timeout,
    );
    Fixture {
        service,
        images: None,
        accounts,
    }
}

pub fn image() -> ImageUpload {
    ImageUpload::new("front.jpg", Some("image/jpeg".to_string()), vec![0xFF, 0xD8, 0xFF])
}

pub fn new_property(price: i64) -> NewProperty {
    NewProperty {
        address: "45 Nguyen Trai".to_string(),
        price,
        area: 72.5,
        status: None,
        image: Some(image()),
    }
}
