mod assets;
mod config;
mod error;
mod services;
mod store;

use std::io;
use std::thread;
use std::time::Duration;

use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};

use crate::config::{AssetMode, Config};
use crate::store::Store;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load().map_err(|e| io::Error::other(e.to_string()))?;
    let store = Store::open(&config.storage.database_path)
        .map_err(|e| io::Error::other(e.to_string()))?;

    let url = config.public_url();
    if config.assets.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open browser at {}: {}", url, e);
            }
        });
    }

    match config.assets.mode {
        AssetMode::Production => info!(
            "Serving UI from {}",
            config.assets.static_dir.display()
        ),
        AssetMode::Development => info!("Development mode: API only, run the frontend dev server for the UI"),
    }
    info!("Server running at {}", url);

    let store = web::Data::new(store);
    let assets = web::Data::new(config.assets.clone());

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(services::json_config())
            .app_data(store.clone())
            .app_data(assets.clone())
            .service(services::teachers::configure_routes())
            .service(services::records::configure_routes())
            .service(services::health::configure_routes())
            .default_service(web::route().to(assets::serve))
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
