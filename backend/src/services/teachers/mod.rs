//! Roster endpoints.
//!
//! - `GET /api/teachers`: every teacher ordered by name.
//! - `POST /api/teachers`: add `{id?, name}`; answers `{success: true}`.
//! - `DELETE /api/teachers/{id}`: remove; answers `{success: true}` whether or
//!   not the id existed. Records pointing at the teacher are left untouched.

mod create;
mod delete;
mod list;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/teachers";

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
    use common::model::teacher::Teacher;
    use common::responses::Ack;
    use common::seed::INITIAL_TEACHERS;
    use serde_json::json;

    #[actix_web::test]
    async fn lists_the_seeded_roster_by_name() {
        let (_dir, store) = test_support::store();
        let app = test::init_service(App::new().app_data(store).service(configure_routes())).await;

        let req = test::TestRequest::get().uri("/api/teachers").to_request();
        let teachers: Vec<Teacher> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(teachers.len(), INITIAL_TEACHERS.len());
        assert!(teachers.windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[actix_web::test]
    async fn added_teacher_appears_in_the_list() {
        let (_dir, store) = test_support::store();
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(store)
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/teachers")
            .set_json(json!({ "id": "abc123", "name": "Cg. Baru" }))
            .to_request();
        let ack: Ack = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ack, Ack::ok());

        let req = test::TestRequest::get().uri("/api/teachers").to_request();
        let teachers: Vec<Teacher> = test::call_and_read_body_json(&app, req).await;
        assert!(teachers.contains(&Teacher::new("abc123", "Cg. Baru")));
    }

    #[actix_web::test]
    async fn missing_id_is_generated() {
        let (_dir, store) = test_support::store();
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(store.clone())
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/teachers")
            .set_json(json!({ "name": "Cg. Tanpa Id" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let added = store
            .list_teachers()
            .unwrap()
            .into_iter()
            .find(|t| t.name == "Cg. Tanpa Id")
            .expect("teacher stored");
        assert!(!added.id.is_empty());
    }

    #[actix_web::test]
    async fn blank_name_and_malformed_body_are_rejected() {
        let (_dir, store) = test_support::store();
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(store)
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/teachers")
            .set_json(json!({ "id": "x", "name": "   " }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);

        let req = test::TestRequest::post()
            .uri("/api/teachers")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);
    }

    #[actix_web::test]
    async fn duplicate_id_is_an_internal_error() {
        let (_dir, store) = test_support::store();
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .app_data(store)
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/teachers")
            .set_json(json!({ "id": "t-0", "name": "Clash" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 500);
    }

    #[actix_web::test]
    async fn delete_is_idempotent() {
        let (_dir, store) = test_support::store();
        let app = test::init_service(App::new().app_data(store.clone()).service(configure_routes())).await;

        for _ in 0..2 {
            let req = test::TestRequest::delete().uri("/api/teachers/t-3").to_request();
            let ack: Ack = test::call_and_read_body_json(&app, req).await;
            assert!(ack.success);
        }
        assert!(store.list_teachers().unwrap().iter().all(|t| t.id != "t-3"));

        let req = test::TestRequest::delete().uri("/api/teachers/never-existed").to_request();
        let ack: Ack = test::call_and_read_body_json(&app, req).await;
        assert!(ack.success);
    }
}
