//! Application state and factory
//!
//! This module wires repositories and collaborators into the services
//! and builds the Actix-web application around them.

use std::sync::Arc;

use actix_multipart::form::MultipartFormConfig;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::{JsonPayloadError, QueryPayloadError},
    web, App, Error, HttpRequest,
};
use re_core::repositories::{
    AccountRepository, DepositOrderRepository, InMemoryAccountRepository,
    InMemoryDepositOrderRepository, InMemoryProfileRepository, InMemoryPropertyRepository,
    ProfileRepository, PropertyRepository,
};
use re_core::services::{
    AccountService, AuthorizationGate, BcryptPasswordHasher, DepositOrderService, ImageStore,
    InMemoryImageStore, PropertyService, TokenService, TokenServiceConfig,
};
use re_shared::{AppConfig, LedgerConfig};
use tracing_actix_web::TracingLogger;

use crate::handlers::{not_found, ApiError};
use crate::routes;

/// Repository set the services run on
#[derive(Clone)]
pub struct Repositories {
    pub accounts: Arc<dyn AccountRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub properties: Arc<dyn PropertyRepository>,
    pub orders: Arc<dyn DepositOrderRepository>,
}

impl Repositories {
    /// Process-local repositories; data is lost on restart
    pub fn in_memory() -> Self {
        Self {
            accounts: Arc::new(InMemoryAccountRepository::new()),
            profiles: Arc::new(InMemoryProfileRepository::new()),
            properties: Arc::new(InMemoryPropertyRepository::new()),
            orders: Arc::new(InMemoryDepositOrderRepository::new()),
        }
    }
}

/// Request body limits
#[derive(Debug, Clone, Copy)]
pub struct RequestLimits {
    pub max_payload_size: usize,
    pub max_upload_size: usize,
}

/// Shared state handed to every handler
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub properties: Arc<PropertyService>,
    pub deposits: Arc<DepositOrderService>,
    pub tokens: Arc<TokenService>,
    pub ledger: LedgerConfig,
    pub limits: RequestLimits,
}

impl AppState {
    /// Build the services over the given repositories and image store
    pub fn build(config: &AppConfig, repos: Repositories, images: Arc<dyn ImageStore>) -> Self {
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
        let hasher = Arc::new(BcryptPasswordHasher::new(config.auth.bcrypt_cost));

        let accounts = AccountService::new(
            Arc::clone(&repos.accounts),
            Arc::clone(&repos.profiles),
            hasher,
            Arc::clone(&tokens),
        );
        let properties = PropertyService::new(
            Arc::clone(&repos.properties),
            images,
            AuthorizationGate::new(Arc::clone(&repos.accounts)),
            config.storage.upload_timeout(),
        );
        let deposits = DepositOrderService::new(
            Arc::clone(&repos.orders),
            Arc::clone(&repos.properties),
            Arc::clone(&repos.profiles),
            AuthorizationGate::new(Arc::clone(&repos.accounts)),
            config.ledger.deposit_threshold,
        );

        Self {
            accounts: Arc::new(accounts),
            properties: Arc::new(properties),
            deposits: Arc::new(deposits),
            tokens,
            ledger: config.ledger.clone(),
            limits: RequestLimits {
                max_payload_size: config.server.max_payload_size,
                max_upload_size: config.server.max_upload_size,
            },
        }
    }

    /// State backed entirely by in-memory collaborators
    pub fn in_memory(config: &AppConfig) -> Self {
        Self::build(
            config,
            Repositories::in_memory(),
            Arc::new(InMemoryImageStore::default()),
        )
    }
}

/// Create and configure the application
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let limits = state.limits;

    App::new()
        .app_data(state)
        .app_data(
            web::JsonConfig::default()
                .limit(limits.max_payload_size)
                .error_handler(json_error),
        )
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(
            MultipartFormConfig::default()
                .total_limit(limits.max_upload_size)
                .memory_limit(limits.max_upload_size)
                .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into()),
        )
        .wrap(TracingLogger::default())
        .configure(routes::configure)
        .default_service(web::route().to(not_found))
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    ApiError::bad_request(format!("Invalid JSON body: {}", err)).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    ApiError::bad_request(format!("Invalid query string: {}", err)).into()
}
