use actix_web::{HttpResponse, web};
use log::info;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::data::models::{AddressChanges, NewAddress};
use crate::data::store::AddressStore;

pub const DELETED_MESSAGE: &str = "Address deleted successfully";

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn create_address<S: AddressStore>(
    payload: web::Json<NewAddress>,
    store: web::Data<S>
) -> Result<HttpResponse, ApiError> {
    let new_address = payload.into_inner();
    let address = web::block(move || store.create(&new_address)).await?;

    info!("Created address {}", address.id);
    Ok(HttpResponse::Ok().json(address))
}

pub async fn get_address<S: AddressStore>(
    path: web::Path<i32>,
    store: web::Data<S>
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let address = web::block(move || store.find(id)).await?;

    Ok(HttpResponse::Ok().json(address))
}

pub async fn update_address<S: AddressStore>(
    path: web::Path<i32>,
    payload: web::Json<AddressChanges>,
    store: web::Data<S>
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let changes = payload.into_inner();
    let address = web::block(move || store.update(id, &changes)).await?;

    info!("Updated address {}", address.id);
    Ok(HttpResponse::Ok().json(address))
}

pub async fn delete_address<S: AddressStore>(
    path: web::Path<i32>,
    store: web::Data<S>
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    web::block(move || store.delete(id)).await?;

    info!("Deleted address {}", id);
    Ok(HttpResponse::Ok().json(MessageResponse { message: DELETED_MESSAGE.to_string() }))
}
