//! Main entry point for the Campgrounds server.
//! On startup it fetches the campground list from the NPS API once and serves it over REST.

use actix_web::{App, HttpServer, middleware::Logger, web};
use campground_list::CampgroundList;
use nps::{Campground, NpsClient};
use web_handlers::configure_campground_routes;

mod campground_loader;
mod config;

use campground_loader::CampgroundLoader;
use config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("🚀 Starting campgrounds server...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = match NpsClient::new(config.nps_api_key.clone()) {
        Ok(client) => client.with_base_url(config.nps_base_url.as_str()),
        Err(e) => {
            log::error!("❌ Failed to create NPS client: {}", e);
            std::process::exit(1);
        }
    };

    if !client.has_api_key() {
        log::warn!("🔑 NPS_API_KEY is not set, the NPS API will likely reject the request");
    }

    let list = if config.seed_placeholder {
        log::info!("🏕️ Seeding list with placeholder campground");
        CampgroundList::with_campgrounds(vec![Campground::placeholder()])
    } else {
        CampgroundList::new()
    };

    // The fetch runs in the background; handlers serve whatever the list holds meanwhile
    let mut loader = CampgroundLoader::new(client, list.clone());
    loader.start();

    log::info!("🌐 Server will be available at: http://{}", config.bind_address);

    let result = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(list.clone()))
            .wrap(Logger::default())
            .configure(configure_campground_routes)
    })
    .bind(config.bind_address.as_str())?
    .run()
    .await;

    loader.stop().await;
    log::info!("👋 Campgrounds server stopped");

    result
}
