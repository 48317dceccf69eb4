//! Absence record endpoints.
//!
//! - `GET /api/records`: every record, newest `createdAt` first.
//! - `POST /api/records`: store a complete record (the client picks `id` and
//!   `createdAt`); answers `{success: true}`.
//! - `DELETE /api/records/{id}`: remove; answers `{success: true}` even when
//!   the id is unknown.

mod create;
mod delete;
mod list;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/records";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", delete().to(delete::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{json_config, test_support};
    use actix_web::{test, App};
    use chrono::{Datelike, NaiveDate};
    use common::model::record::AbsenceRecord;
    use common::responses::Ack;
    use common::views::monthly_totals;
    use serde_json::{json, Value};

    fn body(id: &str, start: &str, days: u32, created_at: &str) -> Value {
        json!({
            "id": id,
            "teacherId": "t-7",
            "teacherName": "Cg. Mohd Shamsuddin bin Othman",
            "startDate": start,
            "days": days,
            "reason": "CUTI REHAT",
            "needRelief": true,
            "remarks": "",
            "createdAt": created_at,
        })
    }

    #[actix_web::test]
    async fn posted_records_come_back_newest_first() {
        let (_dir, store) = test_support::store();
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(store)
                .service(configure_routes()),
        )
        .await;

        for (id, created) in [("first", "2024-03-01T08:00:00.000Z"), ("second", "2024-03-02T08:00:00.000Z")] {
            let req = test::TestRequest::post()
                .uri("/api/records")
                .set_json(body(id, "2024-03-04", 1, created))
                .to_request();
            let ack: Ack = test::call_and_read_body_json(&app, req).await;
            assert!(ack.success);
        }

        let req = test::TestRequest::get().uri("/api/records").to_request();
        let raw: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(raw[0]["id"], "second");
        assert_eq!(raw[1]["id"], "first");
        assert_eq!(raw[0]["needRelief"], Value::Bool(true));
        assert_eq!(raw[0]["startDate"], "2024-03-04");
    }

    #[actix_web::test]
    async fn record_across_month_end_splits_in_monthly_totals() {
        let (_dir, store) = test_support::store();
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(store)
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/records")
            .set_json(body("span", "2024-03-30", 3, "2024-03-29T10:00:00.000Z"))
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());

        let req = test::TestRequest::get().uri("/api/records").to_request();
        let records: Vec<AbsenceRecord> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].end_date(), NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());

        let totals = monthly_totals(&records, records[0].start_date.year());
        assert_eq!(totals[2].days, 2);
        assert_eq!(totals[3].days, 1);
        assert_eq!(totals.iter().map(|t| t.days).sum::<u32>(), 3);
    }

    #[actix_web::test]
    async fn required_fields_are_checked() {
        let (_dir, store) = test_support::store();
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(store.clone())
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/records")
            .set_json(body("zero", "2024-03-30", 0, "2024-03-29T10:00:00.000Z"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);

        let mut no_reason = body("blank", "2024-03-30", 1, "2024-03-29T10:00:00.000Z");
        no_reason["reason"] = json!("");
        let req = test::TestRequest::post()
            .uri("/api/records")
            .set_json(no_reason)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);

        let req = test::TestRequest::post()
            .uri("/api/records")
            .set_json(json!({ "id": "partial" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);

        assert!(store.list_records().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn delete_is_idempotent() {
        let (_dir, store) = test_support::store();
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(store.clone())
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/records")
            .set_json(body("gone", "2024-01-02", 2, "2024-01-01T00:00:00.000Z"))
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());

        for _ in 0..2 {
            let req = test::TestRequest::delete().uri("/api/records/gone").to_request();
            let ack: Ack = test::call_and_read_body_json(&app, req).await;
            assert_eq!(ack, Ack::ok());
        }
        assert!(store.list_records().unwrap().is_empty());
    }
}
