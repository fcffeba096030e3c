mod config;
mod error;
mod services;
mod store;

use crate::config::Config;
use crate::store::{OrderStore, SqliteOrderStore};
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(io::Error::other)?;

    // One store for the whole process, handed to every worker.
    let store = if config.is_in_memory() {
        SqliteOrderStore::open_in_memory()
    } else {
        SqliteOrderStore::open(&config.database_path)
    };
    let store: Arc<dyn OrderStore> = Arc::new(store.map_err(io::Error::other)?);

    info!("Server running at http://{}:{}", config.host, config.port);

    let json_limit = config.json_limit;
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(services::json_config(json_limit))
            .app_data(web::Data::from(store.clone()))
            .service(services::orders::configure_routes())
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
