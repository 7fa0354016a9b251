//! Object storage adapters

mod http_image_store;

pub use http_image_store::HttpImageStore;
