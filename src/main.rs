mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod store;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::io;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::{Config, StoreBackend};
use store::{EntityStore, MemoryStore};

fn startup_error(message: String) -> io::Error {
    log::error!("❌ {}", message);
    io::Error::new(io::ErrorKind::Other, message)
}

async fn build_store(config: &Config) -> io::Result<Arc<dyn EntityStore>> {
    match config.store_backend {
        StoreBackend::MongoDb => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| startup_error("DATABASE_URL must be set".to_string()))?;

            let db = database::MongoDB::new(url)
                .await
                .map_err(|e| startup_error(format!("Failed to connect to MongoDB: {}", e)))?;

            log::info!("✅ MongoDB connected successfully");
            Ok(Arc::new(db))
        }
        StoreBackend::Memory => {
            log::warn!("⚠️  Using in-memory store; data is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(startup_error)?;

    log::info!("🚀 Starting Classroom Service...");
    log::info!("🗄️  Store backend: {:?}", config.store_backend);

    let store = build_store(&config).await?;
    let store_data: web::Data<dyn EntityStore> = web::Data::from(store);

    let bind_address = config.bind_address();
    log::info!("🌐 Server starting on {}", bind_address);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", bind_address);
    log::info!("📄 OpenAPI document at: http://{}/api-docs/openapi.json", bind_address);

    let cors_origins = config.cors_allowed_origins.clone();
    let openapi = api::swagger::ApiDoc::openapi();

    HttpServer::new(move || {
        let cors = cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .app_data(store_data.clone())
            .wrap(cors)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            .configure(api::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
