#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;

use std::env;
use std::io;

use actix_web::{App, HttpServer, web};
use actix_web::middleware::Logger;
use log::info;

use crate::api::cors;
use crate::api::error::json_config;
use crate::config::Settings;
use crate::data::store::PgAddressStore;
use crate::db::init_connection_pool;

mod api;
mod config;
mod data;
mod db;

embed_migrations!("./migrations");

fn startup_error<E: std::fmt::Display>(context: &str, err: E) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let settings = Settings::from_env()
        .map_err(|err| startup_error("Invalid configuration", err))?;

    let pool = init_connection_pool(&settings)
        .map_err(|err| startup_error("Failed to create db pool", err))?;
    let conn = pool
        .get()
        .map_err(|err| startup_error("Failed to get db connection", err))?;

    web::block(move || embedded_migrations::run(&*conn))
        .await
        .map_err(|err| startup_error("Error while running migrations", err))?;

    let store = PgAddressStore::new(pool);

    info!("Listening on {}", settings.bind_address);
    HttpServer::new(move || {
        App::new()
            .data(store.clone())
            .app_data(json_config())
            .wrap(cors().finish())
            .wrap(Logger::default())
            .configure(api::configure::<PgAddressStore>)
    })
    .bind(&settings.bind_address)?
    .run()
    .await
}
