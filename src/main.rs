pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::modules::gallery::adapter::outgoing::{GalleryRepositoryPostgres, GcsBlobStore};
use crate::modules::gallery::application::service::{
    CreateGalleryRecordService, DeleteGalleryRecordService, GetGalleryRecordService,
    ListGalleryRecordsService, ReplaceGalleryRecordService,
};
use crate::modules::gallery::application::sync::RecordLocks;
use crate::modules::gallery::application::GalleryUseCases;

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub gallery: GalleryUseCases,
    /// Per-file limit applied while reading multipart bodies.
    pub max_upload_bytes: usize,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Adapters
    let gallery_repo = GalleryRepositoryPostgres::new(Arc::clone(&db_arc));
    let blob_store = GcsBlobStore::new(config.blob_store.clone());

    // Replace and delete share one lock table so they serialise per record.
    let record_locks = RecordLocks::new();

    let gallery = GalleryUseCases {
        create: Arc::new(CreateGalleryRecordService::new(
            gallery_repo.clone(),
            blob_store.clone(),
            config.namespaces.clone(),
        )),
        replace: Arc::new(ReplaceGalleryRecordService::new(
            gallery_repo.clone(),
            blob_store.clone(),
            config.namespaces.clone(),
            record_locks.clone(),
        )),
        delete: Arc::new(DeleteGalleryRecordService::new(
            gallery_repo.clone(),
            blob_store,
            record_locks,
        )),
        get_single: Arc::new(GetGalleryRecordService::new(gallery_repo.clone())),
        get_list: Arc::new(ListGalleryRecordsService::new(gallery_repo)),
    };

    let state = AppState {
        gallery,
        max_upload_bytes: config.max_upload_bytes,
    };

    let allowed_origins = config.allowed_origins.clone();
    let openapi = ApiDoc::openapi();

    info!(
        server_url = %server_url,
        bucket = %config.blob_store.bucket,
        "Server running"
    );

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::index);
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Gallery
    cfg.service(crate::modules::gallery::adapter::incoming::web::routes::list_gallery_records_handler);
    cfg.service(crate::modules::gallery::adapter::incoming::web::routes::get_gallery_record_handler);
    cfg.service(crate::modules::gallery::adapter::incoming::web::routes::create_gallery_record_handler);
    cfg.service(crate::modules::gallery::adapter::incoming::web::routes::replace_gallery_record_handler);
    cfg.service(crate::modules::gallery::adapter::incoming::web::routes::delete_gallery_record_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
