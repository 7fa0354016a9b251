//! CORS middleware configuration for cross-origin requests.
//!
//! Browsers of the back-office front end call the API from another origin.
//! Development accepts any origin; other environments only accept the
//! origins listed in `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use re_shared::{CorsConfig, Environment};

/// Creates a CORS middleware instance for the given environment
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    if environment.is_development() && config.allowed_origins.is_empty() {
        create_development_cors(config.max_age)
    } else {
        create_restricted_cors(config)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    tracing::info!("Configuring permissive CORS for development");

    base_cors(max_age).allow_any_origin()
}

fn create_restricted_cors(config: &CorsConfig) -> Cors {
    if config.allowed_origins.is_empty() {
        tracing::warn!("ALLOWED_ORIGINS is empty; cross-origin requests will be refused");
    }

    let mut cors = base_cors(config.max_age);
    for origin in &config.allowed_origins {
        tracing::info!(origin = %origin, "Adding allowed origin");
        cors = cors.allowed_origin(origin);
    }
    cors
}

fn base_cors(max_age: usize) -> Cors {
    Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(max_age)
}
