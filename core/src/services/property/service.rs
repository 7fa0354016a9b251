//! Main property service implementation

use std::sync::Arc;
use std::time::Duration;

use re_shared::validation::{mask_email, not_blank};
use re_shared::Pagination;
use uuid::Uuid;

use crate::domain::entities::{Property, PropertyPatch, PropertySort, Role};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::PropertyRepository;
use crate::services::authorization::AuthorizationGate;
use crate::services::storage::{ImageStore, ImageUpload};

use super::types::NewProperty;

const STAFF: &[Role] = &[Role::Manager, Role::Employee];

pub struct PropertyService {
    properties: Arc<dyn PropertyRepository>,
    images: Arc<dyn ImageStore>,
    gate: AuthorizationGate,
    upload_timeout: Duration,
}

impl PropertyService {
    pub fn new(
        properties: Arc<dyn PropertyRepository>,
        images: Arc<dyn ImageStore>,
        gate: AuthorizationGate,
        upload_timeout: Duration,
    ) -> Self {
        Self {
            properties,
            images,
            gate,
            upload_timeout,
        }
    }

    /// List a new property owned by the caller
    ///
    /// # Errors
    ///
    /// * `Auth(..)` - caller unknown, inactive or not staff
    /// * `ValidationErr(ImageRequired)` - no image bytes
    /// * `ValidationErr(..)` - blank address, negative price or non-positive area
    /// * `UploadFailed` - the image store failed or timed out
    pub async fn create(&self, caller_email: &str, input: NewProperty) -> DomainResult<Property> {
        let caller = self.gate.require(caller_email, STAFF).await?;

        let image = match input.image {
            Some(image) if !image.is_empty() => image,
            _ => return Err(ValidationError::ImageRequired.into()),
        };
        if !not_blank(&input.address) {
            return Err(DomainError::required("address"));
        }
        validate_price(input.price)?;
        validate_area(input.area)?;

        let image_url = self.upload(image).await?;

        let property = Property::new(
            input.address.trim().to_string(),
            input.price,
            input.area,
            input.status.unwrap_or_default(),
            image_url,
            caller.id,
        );
        let property = self.properties.create(property).await?;

        tracing::info!(
            property_id = %property.id,
            owner = %mask_email(&caller.email),
            "Property listed"
        );
        Ok(property)
    }

    /// Merge the supplied fields into a property, replacing its image when new bytes are given
    pub async fn update(
        &self,
        caller_email: &str,
        property_id: &str,
        patch: PropertyPatch,
        image: Option<ImageUpload>,
    ) -> DomainResult<Property> {
        let caller = self.gate.require(caller_email, STAFF).await?;

        let id = Uuid::parse_str(property_id.trim()).map_err(|_| ValidationError::InvalidFormat {
            field: "id".to_string(),
        })?;
        let mut property = self
            .properties
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Property".to_string(),
            })?;

        if let Some(address) = &patch.address {
            if !not_blank(address) {
                return Err(DomainError::required("address"));
            }
        }
        if let Some(price) = patch.price {
            validate_price(price)?;
        }
        if let Some(area) = patch.area {
            validate_area(area)?;
        }

        if let Some(image) = image.filter(|i| !i.is_empty()) {
            property.image_url = self.upload(image).await?;
        }

        let patch = PropertyPatch {
            address: patch.address.map(|a| a.trim().to_string()),
            ..patch
        };
        property.apply(patch);
        let property = self.properties.update(property).await?;

        tracing::info!(
            property_id = %property.id,
            editor = %mask_email(&caller.email),
            "Property updated"
        );
        Ok(property)
    }

    /// One page of the properties listed by the calling employee
    pub async fn list_owned_by(
        &self,
        caller_email: &str,
        pagination: Pagination,
        sort: PropertySort,
    ) -> DomainResult<Vec<Property>> {
        let caller = self.gate.require(caller_email, &[Role::Employee]).await?;
        self.properties
            .find_by_owner(caller.id, sort, pagination)
            .await
    }

    async fn upload(&self, image: ImageUpload) -> DomainResult<String> {
        let file_name = image.file_name.clone();
        match tokio::time::timeout(self.upload_timeout, self.images.upload(image)).await {
            Ok(Ok(url)) => Ok(url),
            Ok(Err(DomainError::UploadFailed { message })) => {
                tracing::error!(file = %file_name, error = %message, "Image upload failed");
                Err(DomainError::UploadFailed { message })
            }
            Ok(Err(error)) => {
                tracing::error!(file = %file_name, error = %error, "Image upload failed");
                Err(DomainError::UploadFailed {
                    message: error.to_string(),
                })
            }
            Err(_) => {
                tracing::error!(
                    file = %file_name,
                    timeout_secs = self.upload_timeout.as_secs(),
                    "Image upload timed out"
                );
                Err(DomainError::UploadFailed {
                    message: "upload timed out".to_string(),
                })
            }
        }
    }
}

fn validate_price(price: i64) -> DomainResult<()> {
    if price < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            constraint: "must be zero or greater".to_string(),
        }
        .into());
    }
    Ok(())
}

fn validate_area(area: f64) -> DomainResult<()> {
    if !area.is_finite() || area <= 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "area".to_string(),
            constraint: "must be greater than zero".to_string(),
        }
        .into());
    }
    Ok(())
}
