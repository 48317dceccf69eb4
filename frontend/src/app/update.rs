//! Message handling for the root component.
//!
//! Mutations are applied to the cache first and then written through to the
//! API in the background. A failed write is only logged; the next poll brings
//! the cache back in line with the server.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::teacher::Teacher;

use crate::api;
use crate::helpers::{new_id, now_utc};

use super::messages::Msg;
use super::state::App;

pub fn update(app: &mut App, ctx: &Context<App>, msg: Msg) -> bool {
    match msg {
        Msg::SetTab(tab) => {
            if app.active_tab == tab {
                return false;
            }
            app.active_tab = tab;
            true
        }
        Msg::Refresh => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_snapshot().await {
                    Ok((teachers, records)) => link.send_message(Msg::Loaded { teachers, records }),
                    Err(e) => error!("Failed to fetch data:", e.to_string()),
                }
            });
            false
        }
        Msg::Loaded { teachers, records } => {
            if app.cache.teachers() == teachers.as_slice()
                && app.cache.records() == records.as_slice()
            {
                return false;
            }
            app.cache.replace_all(teachers, records);
            true
        }
        Msg::AddRecord(draft) => {
            let teacher_name = app
                .cache
                .teacher_name(&draft.teacher_id)
                .unwrap_or_default()
                .to_string();
            let record = draft.into_record(new_id(), teacher_name, now_utc());
            app.cache.add_record(record.clone());
            spawn_local(async move {
                if let Err(e) = api::post_record(&record).await {
                    error!("Failed to add record:", e.to_string());
                }
            });
            true
        }
        Msg::DeleteRecord(id) => {
            let changed = app.cache.remove_record(&id);
            spawn_local(async move {
                if let Err(e) = api::delete_record(&id).await {
                    error!("Failed to delete record:", e.to_string());
                }
            });
            changed
        }
        Msg::AddTeacher(name) => {
            let teacher = Teacher::new(new_id(), name);
            app.cache.add_teacher(teacher.clone());
            spawn_local(async move {
                if let Err(e) = api::post_teacher(&teacher).await {
                    error!("Failed to add teacher:", e.to_string());
                }
            });
            true
        }
        Msg::DeleteTeacher(id) => {
            let changed = app.cache.remove_teacher(&id);
            spawn_local(async move {
                if let Err(e) = api::delete_teacher(&id).await {
                    error!("Failed to delete teacher:", e.to_string());
                }
            });
            changed
        }
        Msg::SetSearchDate(date) => {
            app.search_date = date;
            true
        }
    }
}
