use actix_web::{web, HttpResponse, Responder};
use common::model::record::AbsenceRecord;
use common::responses::Ack;
use log::info;

use crate::services::{internal_error, missing_field};
use crate::store::Store;

/// Handler for `POST /api/records`.
///
/// Only presence is checked: a teacher, a reason and at least one day. The
/// reason is not matched against the fixed list and the teacher id is not
/// looked up in the roster.
pub async fn process(payload: web::Json<AbsenceRecord>, store: web::Data<Store>) -> impl Responder {
    let record = payload.into_inner();
    if let Some(field) = first_missing_field(&record) {
        return missing_field(field);
    }

    match store.insert_record(&record) {
        Ok(()) => {
            info!(
                "Recorded absence {} for {} from {} ({} day(s))",
                record.id, record.teacher_name, record.start_date, record.days
            );
            HttpResponse::Ok().json(Ack::ok())
        }
        Err(e) => internal_error("adding record", &e),
    }
}

fn first_missing_field(record: &AbsenceRecord) -> Option<&'static str> {
    if record.id.trim().is_empty() {
        Some("id")
    } else if record.teacher_id.trim().is_empty() {
        Some("teacherId")
    } else if record.days == 0 {
        Some("days")
    } else if record.reason.trim().is_empty() {
        Some("reason")
    } else {
        None
    }
}
