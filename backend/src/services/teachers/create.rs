use actix_web::{web, HttpResponse, Responder};
use common::model::teacher::Teacher;
use common::requests::NewTeacher;
use common::responses::Ack;
use log::info;
use uuid::Uuid;

use crate::services::{internal_error, missing_field};
use crate::store::Store;

/// Handler for `POST /api/teachers`.
///
/// The name is stored exactly as sent; only a blank name is refused. When the
/// caller supplies no id a UUID v4 is assigned.
pub async fn process(payload: web::Json<NewTeacher>, store: web::Data<Store>) -> impl Responder {
    let NewTeacher { id, name } = payload.into_inner();
    if name.trim().is_empty() {
        return missing_field("name");
    }

    let id = id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let teacher = Teacher { id, name };

    match store.insert_teacher(&teacher) {
        Ok(()) => {
            info!("Added teacher {} ({})", teacher.name, teacher.id);
            HttpResponse::Ok().json(Ack::ok())
        }
        Err(e) => internal_error("adding teacher", &e),
    }
}
