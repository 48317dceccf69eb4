use chrono::Datelike;
use yew::html::Scope;
use yew::prelude::*;

use common::views::dashboard_summary;

use crate::components::absence_form::AbsenceForm;
use crate::components::analysis::Analysis;
use crate::components::records_table::RecordsTable;
use crate::components::roster::Roster;
use crate::components::summary_panel::SummaryPanel;
use crate::helpers::today;

use super::messages::Msg;
use super::state::{App, Tab};

const SYSTEM_NAME: &str = "SISTEM e-KEBERADAAN GURU SEMELAND";
const SCHOOL_ADDRESS: &str = "SMK LANDAS, 21820 AJIL, TERENGGANU";

pub fn view(app: &App, ctx: &Context<App>) -> Html {
    let link = ctx.link();
    let today = today();

    html! {
        <div class="app-root">
            <header class="app-header">
                <h1>{ SYSTEM_NAME }</h1>
                <p class="subtitle">{ SCHOOL_ADDRESS }</p>
            </header>
            { build_tab_bar(app, link) }
            <main class="app-main">
                { build_active_tab(app, link, today) }
            </main>
            <footer class="app-footer">
                <p>{ format!("© {} Sistem e-Keberadaan Guru SEMELAND. Hak Cipta Terpelihara.", today.year()) }</p>
                <p class="motto">{ "SMK Landas - Ceria Untuk Tenang Emosi" }</p>
            </footer>
        </div>
    }
}

fn build_tab_bar(app: &App, link: &Scope<App>) -> Html {
    html! {
        <nav class="tab-bar">
            {
                for Tab::ALL.iter().copied().map(|tab| {
                    let active = app.active_tab == tab;
                    html! {
                        <button
                            class={classes!("tab-btn", active.then_some("active"), active.then_some(tab.accent()))}
                            onclick={link.callback(move |_| Msg::SetTab(tab))}
                        >
                            { tab.label() }
                        </button>
                    }
                })
            }
        </nav>
    }
}

fn build_active_tab(app: &App, link: &Scope<App>, today: chrono::NaiveDate) -> Html {
    match app.active_tab {
        Tab::Absence => {
            let summary = dashboard_summary(app.cache.teachers(), app.cache.records(), today);
            html! {
                <div class="absence-layout">
                    <section class="card">
                        <h2>{ "Borang Ketidakhadiran" }</h2>
                        <AbsenceForm
                            teachers={app.cache.teachers_sorted()}
                            on_submit={link.callback(Msg::AddRecord)}
                        />
                    </section>
                    <SummaryPanel {summary} />
                </div>
            }
        }
        Tab::Records => html! {
            <section class="card">
                <RecordsTable
                    records={app.cache.records().to_vec()}
                    search_date={app.search_date}
                    on_search_date={link.callback(Msg::SetSearchDate)}
                    on_delete={link.callback(Msg::DeleteRecord)}
                />
            </section>
        },
        Tab::Analysis => html! {
            <Analysis records={app.cache.records().to_vec()} year={today.year()} />
        },
        Tab::Roster => html! {
            <section class="card roster-card">
                <h2>{ "Pengurusan Nama Guru" }</h2>
                <Roster
                    teachers={app.cache.teachers_sorted()}
                    on_add={link.callback(Msg::AddTeacher)}
                    on_delete={link.callback(Msg::DeleteTeacher)}
                />
            </section>
        },
    }
}
