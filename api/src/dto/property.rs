use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use re_core::domain::entities::{PropertyPatch, PropertyStatus};
use re_core::errors::{DomainError, ValidationError};
use re_core::services::{ImageUpload, NewProperty};
use std::str::FromStr;

/// Multipart body of `POST /createProperty` and `PUT /updateProperty/{id}`.
///
/// Numeric fields arrive as text and are parsed here so that malformed
/// values surface as `400` with the offending field name.
#[derive(Debug, MultipartForm)]
pub struct PropertyForm {
    pub address: Option<Text<String>>,
    pub price: Option<Text<String>>,
    pub area: Option<Text<String>>,
    pub status: Option<Text<String>>,
    pub image: Option<Bytes>,
}

impl PropertyForm {
    /// Fields for a new listing; address, price and area are mandatory
    pub fn into_new_property(self) -> Result<NewProperty, DomainError> {
        let address = text(self.address).ok_or_else(|| DomainError::required("address"))?;
        let price = parse_field::<i64>(self.price, "price")?
            .ok_or_else(|| DomainError::required("price"))?;
        let area = parse_field::<f64>(self.area, "area")?
            .ok_or_else(|| DomainError::required("area"))?;
        let status = parse_field::<PropertyStatus>(self.status, "status")?;

        Ok(NewProperty {
            address,
            price,
            area,
            status,
            image: self.image.map(into_upload),
        })
    }

    /// Partial update; absent fields keep their stored values
    pub fn into_patch(self) -> Result<(PropertyPatch, Option<ImageUpload>), DomainError> {
        let patch = PropertyPatch {
            address: text(self.address),
            price: parse_field(self.price, "price")?,
            area: parse_field(self.area, "area")?,
            status: parse_field(self.status, "status")?,
        };
        Ok((patch, self.image.map(into_upload)))
    }
}

fn text(field: Option<Text<String>>) -> Option<String> {
    field
        .map(|value| value.0)
        .filter(|value| !value.trim().is_empty())
}

fn parse_field<T: FromStr>(field: Option<Text<String>>, name: &str) -> Result<Option<T>, DomainError> {
    text(field)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|_| {
                DomainError::from(ValidationError::InvalidFormat {
                    field: name.to_string(),
                })
            })
        })
        .transpose()
}

fn into_upload(file: Bytes) -> ImageUpload {
    ImageUpload::new(
        file.file_name.unwrap_or_else(|| "image".to_string()),
        file.content_type.map(|mime| mime.to_string()),
        file.data.to_vec(),
    )
}
