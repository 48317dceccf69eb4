use actix_web::{web, HttpResponse, Responder};

use crate::services::internal_error;
use crate::store::Store;

pub async fn process(store: web::Data<Store>) -> impl Responder {
    match store.list_teachers() {
        Ok(teachers) => HttpResponse::Ok().json(teachers),
        Err(e) => internal_error("listing teachers", &e),
    }
}
