use crate::domain::entities::PropertyStatus;
use crate::services::storage::ImageUpload;

/// Fields of a property being listed
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub address: String,
    pub price: i64,
    pub area: f64,
    /// Defaults to LISTED
    pub status: Option<PropertyStatus>,
    pub image: Option<ImageUpload>,
}
