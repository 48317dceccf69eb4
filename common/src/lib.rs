//! Types and pure logic shared by the backend and the frontend.
//!
//! - `model`: the two persisted record kinds.
//! - `requests` / `responses`: JSON payloads exchanged over `/api`.
//! - `reasons` and `seed`: fixed lists baked into the application.
//! - `views`: derived data (active absences, chart aggregates) computed from
//!   the record list.

pub mod model;
pub mod reasons;
pub mod requests;
pub mod responses;
pub mod seed;
pub mod views;
