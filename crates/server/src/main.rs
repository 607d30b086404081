use database::db::create_connection;
use env_logger::Env;
use hub::HotelHub;
use log::info;
use migration::{Migrator, MigratorTrait};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::Config, doc::ApiDoc, state::AppState, utils::shutdown::shutdown_signal};

mod config;
mod doc;
mod dtos;
mod error;
mod extract;
mod routes;
mod state;
mod utils;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();

    let db = if config.persist_snapshots {
        info!("Connecting to {}", config.database_url);
        let db = create_connection(&config.database_url)
            .await
            .expect("Failed to connect to database");

        info!("Running migrations...");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        Some(db)
    } else {
        info!("Snapshot export disabled");
        None
    };

    let state = AppState::new(HotelHub::new().into_shared(), db);

    let app = routes::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()));

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .expect("Failed to bind address");
    info!("Running axum on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}
