//! HTTP resources under `/api`.
//!
//! Each sub-module exposes a `configure_routes()` returning the actix `Scope`
//! for its path; `main.rs` mounts them all.
//!
//! - `teachers`: roster list/add/delete.
//! - `records`: absence record list/add/delete.
//! - `health`: store reachability and row counts.

pub mod health;
pub mod records;
pub mod teachers;

use actix_web::{error, web, HttpResponse};
use common::responses::ErrorBody;
use log::error;

use crate::error::Error;

/// Largest JSON body accepted by the API.
const JSON_LIMIT: usize = 64 * 1024;

/// JSON extractor settings: malformed bodies are answered with a `400` and an
/// `ErrorBody` instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| {
            let response = HttpResponse::BadRequest().json(ErrorBody::new(err.to_string()));
            error::InternalError::from_response(err, response).into()
        })
}

/// Logs a store failure and turns it into a generic `500`.
pub(crate) fn internal_error(action: &str, err: &Error) -> HttpResponse {
    error!("{} failed: {}", action, err);
    HttpResponse::InternalServerError().json(ErrorBody::new(format!("{action} failed")))
}

/// `400` naming the required field that was missing.
pub(crate) fn missing_field(field: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorBody::new(format!("{field} is required")))
}
