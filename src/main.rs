use std::path::Path;

use tokio::net::TcpListener;

use substation_mapper::db::{establish_connection_pool, init_schema};
use substation_mapper::models::config::ServerConfig;
use substation_mapper::recognition::{CommandRecognizer, RecognizerHandle, TextRecognizer};
use substation_mapper::repository::DieselRepository;
use substation_mapper::routes::{self, AppState};
use substation_mapper::storage::ImageStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Some(parent) = Path::new(&config.database_url).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::error!("Failed to create database directory: {e}");
                std::process::exit(1);
            }
        }
    }

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    match pool.get() {
        Ok(mut conn) => {
            if let Err(e) = init_schema(&mut conn) {
                log::error!("Failed to initialize database schema: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            log::error!("Failed to get database connection: {e}");
            std::process::exit(1);
        }
    }

    let store = ImageStore::new(&config.upload_dir);
    if let Err(e) = store.ensure_dir() {
        log::error!("Failed to prepare upload directory: {e}");
        std::process::exit(1);
    }

    let engine: Option<Box<dyn TextRecognizer>> = match config.ocr_command.as_deref() {
        Some(command) if !command.trim().is_empty() => {
            match CommandRecognizer::from_command_line(command) {
                Ok(recognizer) => Some(Box::new(recognizer)),
                Err(e) => {
                    log::error!("Invalid recognizer command: {e}");
                    std::process::exit(1);
                }
            }
        }
        _ => {
            log::warn!("No recognizer command configured; nameplate recognition is unavailable");
            None
        }
    };

    let state = AppState::new(
        DieselRepository::new(pool),
        store,
        RecognizerHandle::new(engine),
    );
    let app = routes::router(state);

    let listener = match TcpListener::bind(&config.bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind to {}: {e}", config.bind_address);
            std::process::exit(1);
        }
    };
    log::info!("Listening on {}", config.bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {e}");
        std::process::exit(1);
    }
}
