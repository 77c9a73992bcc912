use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use skillswap::config::{Settings, StoreBackend};
use skillswap::routes::{self, matches::AppState};
use skillswap::services::{JsonFileStore, MemoryStore, ProfileStore};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting SkillSwap matching service...");

    let store: Arc<dyn ProfileStore> = match settings.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory profile store");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::File => {
            let store = JsonFileStore::new(&settings.store.path);
            info!("Using JSON file profile store at {}", store.path().display());
            Arc::new(store)
        }
    };

    match store.load_profiles() {
        Ok(profiles) => info!("Profile store ready ({} profiles)", profiles.len()),
        Err(e) => {
            error!("Failed to read profile store: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    }

    let app_state = AppState::new(store);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();
        let (json_config, query_config) = routes::extractor_configs();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(json_config)
            .app_data(query_config)
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
