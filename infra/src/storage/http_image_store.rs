//! Reqwest-backed image store for Cloudinary-compatible upload endpoints.
//!
//! Posts the image as multipart form data (`file`, `upload_preset`, `folder`)
//! and reads `secure_url` from the JSON reply.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use re_core::errors::DomainError;
use re_core::services::storage::{ImageStore, ImageUpload};
use re_shared::StorageConfig;

use crate::InfrastructureError;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
}

/// Image store posting uploads to one HTTP endpoint
pub struct HttpImageStore {
    client: Client,
    upload_url: String,
    upload_preset: Option<String>,
    folder: String,
}

impl HttpImageStore {
    /// Build a store from configuration
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Config` when no upload URL is configured,
    /// or `Http` when the client cannot be constructed.
    pub fn from_config(config: &StorageConfig) -> Result<Self, InfrastructureError> {
        let upload_url = config
            .upload_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| InfrastructureError::Config("STORAGE_UPLOAD_URL is not set".to_string()))?;

        let client = Client::builder()
            .timeout(config.upload_timeout())
            .build()?;

        Ok(Self {
            client,
            upload_url,
            upload_preset: config.upload_preset.clone(),
            folder: config.folder.clone(),
        })
    }

    async fn send(&self, image: ImageUpload) -> Result<String, InfrastructureError> {
        let mut part = Part::bytes(image.bytes).file_name(image.file_name);
        if let Some(content_type) = image.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|e| InfrastructureError::Storage(format!("invalid content type: {}", e)))?;
        }

        let mut form = Form::new().part("file", part).text("folder", self.folder.clone());
        if let Some(preset) = &self.upload_preset {
            form = form.text("upload_preset", preset.clone());
        }

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_upload_response(body.as_ref())
    }
}

#[async_trait]
impl ImageStore for HttpImageStore {
    async fn upload(&self, image: ImageUpload) -> Result<String, DomainError> {
        let size = image.bytes.len();
        let url = self.send(image).await.map_err(DomainError::from)?;
        tracing::debug!(bytes = size, url = %url, "Image uploaded");
        Ok(url)
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> InfrastructureError {
    let snippet: String = String::from_utf8_lossy(body).chars().take(200).collect();
    InfrastructureError::Storage(format!("upload rejected with status {}: {}", status, snippet))
}

fn parse_upload_response(body: &[u8]) -> Result<String, InfrastructureError> {
    let decoded: UploadResponse = serde_json::from_slice(body)
        .map_err(|e| InfrastructureError::Storage(format!("invalid upload response: {}", e)))?;

    decoded
        .secure_url
        .or(decoded.url)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| InfrastructureError::Storage("upload response has no URL".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefers_secure_url() {
        let body = br#"{"secure_url":"https://res.example/img.jpg","url":"http://res.example/img.jpg"}"#;
        assert_eq!(
            parse_upload_response(body).unwrap(),
            "https://res.example/img.jpg"
        );
    }

    #[test]
    fn test_parse_falls_back_to_url() {
        let body = br#"{"url":"http://res.example/img.jpg"}"#;
        assert_eq!(parse_upload_response(body).unwrap(), "http://res.example/img.jpg");
    }

    #[test]
    fn test_parse_rejects_missing_url() {
        assert!(parse_upload_response(br#"{"public_id":"abc"}"#).is_err());
        assert!(parse_upload_response(b"<html>").is_err());
    }

    #[test]
    fn test_status_error_is_upload_failure() {
        let error = map_status_error(StatusCode::BAD_REQUEST, b"{\"error\":\"bad preset\"}");
        let domain: DomainError = error.into();
        assert!(matches!(domain, DomainError::UploadFailed { .. }));
    }

    #[test]
    fn test_requires_upload_url() {
        let config = StorageConfig::default();
        assert!(matches!(
            HttpImageStore::from_config(&config),
            Err(InfrastructureError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_upload_failure() {
        let config = StorageConfig {
            upload_url: Some("http://127.0.0.1:9/upload".to_string()),
            timeout_secs: 2,
            ..StorageConfig::default()
        };
        let store = HttpImageStore::from_config(&config).unwrap();

        let result = store
            .upload(ImageUpload::new("a.jpg", Some("image/jpeg".to_string()), vec![1, 2, 3]))
            .await;
        assert!(matches!(result, Err(DomainError::UploadFailed { .. })));
    }
}
