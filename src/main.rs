use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use talent_matchmaker::config::Settings;
use talent_matchmaker::routes::{self, dashboard::AppState};
use talent_matchmaker::services::DashboardLoader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            // Logging is not configured yet
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting Talent Pool matchmaker dashboard service...");

    let score_scale = match settings.dashboard.scale() {
        Ok(scale) => scale,
        Err(e) => {
            error!("{}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    let cache_capacity = settings.dashboard.cache_capacity.unwrap_or(1000);
    let cache_ttl = settings.dashboard.cache_ttl_secs.unwrap_or(300);
    let loader = Arc::new(DashboardLoader::new(cache_capacity, cache_ttl));

    info!(
        "Dashboard loader initialized (capacity: {} entries, TTL: {}s, score scale: {})",
        cache_capacity,
        cache_ttl,
        score_scale.max()
    );

    let app_state = AppState { loader, score_scale };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
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
