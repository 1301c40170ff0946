use actix_cors::Cors;
use actix_web::web;

use crate::data::store::AddressStore;

pub mod addresses;
pub mod error;

pub fn configure<S: AddressStore>(cfg: &mut web::ServiceConfig) {
    cfg.route("/addresses", web::post().to(addresses::create_address::<S>))
        .service(
            web::resource("/addresses/{id}")
                .route(web::get().to(addresses::get_address::<S>))
                .route(web::put().to(addresses::update_address::<S>))
                .route(web::delete().to(addresses::delete_address::<S>)),
        );
}

/// Any origin, method and header, with credentials.
pub fn cors() -> Cors {
    Cors::new()
        .supports_credentials()
        .max_age(3600)
}
