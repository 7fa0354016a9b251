use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use re_api::{create_app, middleware::create_cors, AppState, Repositories};
use re_core::services::{ImageStore, InMemoryImageStore};
use re_infra::HttpImageStore;
use re_shared::{config::LogFormat, AppConfig, LoggingConfig, StorageBackend};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    tracing::info!(
        environment = %config.environment,
        "Starting Estate Office API server"
    );

    let problems = config.problems();
    for problem in &problems {
        tracing::warn!(problem = %problem, "Configuration problem");
    }
    if config.environment.is_production() && !problems.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("refusing to start: {}", problems.join("; ")),
        ));
    }

    let repositories = build_repositories(&config).await?;
    let images = build_image_store(&config)?;
    let state = web::Data::new(AppState::build(&config, repositories, images));

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let cors = config.cors.clone();
    let environment = config.environment;
    let mut server =
        HttpServer::new(move || create_app(state.clone()).wrap(create_cors(&cors, environment)));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

#[cfg(feature = "mysql")]
async fn build_repositories(config: &AppConfig) -> io::Result<Repositories> {
    use re_infra::database::{
        DatabasePool, MySqlAccountRepository, MySqlDepositOrderRepository,
        MySqlProfileRepository, MySqlPropertyRepository,
    };

    match config.database.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory repositories; data is lost on restart");
            Ok(Repositories::in_memory())
        }
        StorageBackend::Mysql => {
            let database = DatabasePool::new(&config.database)
                .await
                .map_err(io::Error::other)?;
            if config.database.bootstrap_schema {
                database.bootstrap_schema().await.map_err(io::Error::other)?;
            }
            tracing::info!(stats = %database.get_statistics(), "Database ready");

            let pool = database.get_pool().clone();
            Ok(Repositories {
                accounts: Arc::new(MySqlAccountRepository::new(pool.clone())),
                profiles: Arc::new(MySqlProfileRepository::new(pool.clone())),
                properties: Arc::new(MySqlPropertyRepository::new(pool.clone())),
                orders: Arc::new(MySqlDepositOrderRepository::new(pool)),
            })
        }
    }
}

#[cfg(not(feature = "mysql"))]
async fn build_repositories(config: &AppConfig) -> io::Result<Repositories> {
    if config.database.backend == StorageBackend::Mysql {
        return Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "STORAGE_BACKEND=mysql requires the `mysql` feature",
        ));
    }
    tracing::warn!("Using in-memory repositories; data is lost on restart");
    Ok(Repositories::in_memory())
}

fn build_image_store(config: &AppConfig) -> io::Result<Arc<dyn ImageStore>> {
    if config.storage.upload_url.is_some() {
        let store = HttpImageStore::from_config(&config.storage).map_err(io::Error::other)?;
        Ok(Arc::new(store))
    } else {
        tracing::warn!("STORAGE_UPLOAD_URL not set; property images are kept in memory");
        Ok(Arc::new(InMemoryImageStore::default()))
    }
}
