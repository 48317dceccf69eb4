//! `GET /api/health`: reports whether the store answers and how many rows it
//! holds.

use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Responder, Scope};
use chrono::{SecondsFormat, Utc};
use common::responses::Health;
use log::error;

use crate::store::Store;

const API_PATH: &str = "/api/health";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

async fn process(store: web::Data<Store>) -> impl Responder {
    let time = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    match store.counts() {
        Ok((teachers, records)) => HttpResponse::Ok().json(Health {
            status: "ok".to_string(),
            database: "connected".to_string(),
            teachers,
            records,
            time,
        }),
        Err(e) => {
            error!("health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(Health {
                status: "error".to_string(),
                database: "unavailable".to_string(),
                teachers: 0,
                records: 0,
                time,
            })
        }
    }
}
