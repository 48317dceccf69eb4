//! HTTP client for the backend's `/api` routes.
//!
//! Every call resolves to `Result<_, ApiError>`; callers log failures to the
//! console and carry on with whatever the cache already holds.

use std::future::Future;

use futures_util::future::try_join;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use common::model::record::AbsenceRecord;
use common::model::teacher::Teacher;
use common::requests::NewTeacher;

const TEACHERS_URL: &str = "/api/teachers";
const RECORDS_URL: &str = "/api/records";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

fn check(resp: Response) -> ApiResult<Response> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status {
            status: resp.status(),
            url: resp.url(),
        })
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> ApiResult<T> {
    let resp = check(Request::get(url).send().await?)?;
    Ok(resp.json::<T>().await?)
}

async fn delete(url: String) -> ApiResult<()> {
    check(Request::delete(&url).send().await?)?;
    Ok(())
}

pub async fn fetch_teachers() -> ApiResult<Vec<Teacher>> {
    get_json(TEACHERS_URL).await
}

pub async fn fetch_records() -> ApiResult<Vec<AbsenceRecord>> {
    get_json(RECORDS_URL).await
}

/// Fetches both collections at once; either failing fails the whole
/// snapshot.
pub async fn fetch_snapshot() -> ApiResult<(Vec<Teacher>, Vec<AbsenceRecord>)> {
    join_snapshot(fetch_teachers(), fetch_records()).await
}

async fn join_snapshot<T, R>(
    teachers: impl Future<Output = ApiResult<T>>,
    records: impl Future<Output = ApiResult<R>>,
) -> ApiResult<(T, R)> {
    try_join(teachers, records).await
}

pub async fn post_teacher(teacher: &Teacher) -> ApiResult<()> {
    let body = NewTeacher {
        id: Some(teacher.id.clone()),
        name: teacher.name.clone(),
    };
    check(Request::post(TEACHERS_URL).json(&body)?.send().await?)?;
    Ok(())
}

pub async fn delete_teacher(id: &str) -> ApiResult<()> {
    delete(format!("{TEACHERS_URL}/{id}")).await
}

pub async fn post_record(record: &AbsenceRecord) -> ApiResult<()> {
    check(Request::post(RECORDS_URL).json(record)?.send().await?)?;
    Ok(())
}

pub async fn delete_record(id: &str) -> ApiResult<()> {
    delete(format!("{RECORDS_URL}/{id}")).await
}
