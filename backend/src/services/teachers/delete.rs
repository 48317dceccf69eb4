use actix_web::{web, HttpResponse, Responder};
use common::responses::Ack;
use log::info;

use crate::services::internal_error;
use crate::store::Store;

pub async fn process(id: web::Path<String>, store: web::Data<Store>) -> impl Responder {
    let id = id.into_inner();
    match store.delete_teacher(&id) {
        Ok(removed) => {
            info!("Delete teacher {}: {} row(s) removed", id, removed);
            HttpResponse::Ok().json(Ack::ok())
        }
        Err(e) => internal_error("deleting teacher", &e),
    }
}
