//! Records browser: every record whose interval covers the chosen date.

use chrono::NaiveDate;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::model::record::AbsenceRecord;
use common::views::filter_by_date;

use crate::helpers::{confirm, display_date, input_date, parse_input_date};

pub const CONFIRM_DELETE: &str = "Padam rekod ini?";
pub const EMPTY_MESSAGE: &str = "Tiada rekod ketidakhadiran pada tarikh ini.";

#[derive(Properties, PartialEq, Clone)]
pub struct RecordsTableProps {
    pub records: Vec<AbsenceRecord>,
    /// `None` when the date input was cleared.
    pub search_date: Option<NaiveDate>,
    pub on_search_date: Callback<Option<NaiveDate>>,
    /// Receives the id of a record the user confirmed for deletion.
    pub on_delete: Callback<String>,
}

pub enum Msg {
    SearchDate(String),
    Delete(String),
}

pub struct RecordsTable;

impl Component for RecordsTable {
    type Message = Msg;
    type Properties = RecordsTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SearchDate(value) => ctx.props().on_search_date.emit(parse_input_date(&value)),
            Msg::Delete(id) => {
                if confirm(CONFIRM_DELETE) {
                    ctx.props().on_delete.emit(id);
                }
            }
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();
        let visible = filter_by_date(&props.records, props.search_date);
        let search_value = props.search_date.map(input_date).unwrap_or_default();

        html! {
            <div class="records-browser">
                <div class="records-header">
                    <h2>{ "Rekod Ketidakhadiran" }</h2>
                    <input
                        type="date"
                        class="search-date"
                        value={search_value}
                        onchange={link.callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SearchDate(input.value())
                        })}
                    />
                </div>
                {
                    if visible.is_empty() {
                        html! {
                            <div class="empty-state">
                                <h3>{ EMPTY_MESSAGE }</h3>
                            </div>
                        }
                    } else {
                        build_table(&visible, link)
                    }
                }
            </div>
        }
    }
}

fn build_table(records: &[AbsenceRecord], link: &yew::html::Scope<RecordsTable>) -> Html {
    html! {
        <div class="table-scroll">
            <table class="records-table">
                <thead>
                    <tr>
                        <th>{ "Bil" }</th>
                        <th>{ "Nama Guru" }</th>
                        <th>{ "Tarikh Mula" }</th>
                        <th>{ "Bil Hari" }</th>
                        <th>{ "Sebab" }</th>
                        <th class="center">{ "Relief" }</th>
                        <th>{ "Catatan" }</th>
                        <th class="center">{ "Tindakan" }</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        for records.iter().enumerate().map(|(index, record)| {
                            let id = record.id.clone();
                            html! {
                                <tr key={record.id.clone()}>
                                    <td class="muted">{ index + 1 }</td>
                                    <td class="name">{ record.teacher_name.clone() }</td>
                                    <td>{ display_date(record.start_date) }</td>
                                    <td>{ format!("{} Hari", record.days) }</td>
                                    <td><span class="reason-badge">{ record.reason.clone() }</span></td>
                                    <td class="center">{ relief_badge(record.need_relief) }</td>
                                    <td class="remarks">{ record.remarks_or_dash().to_string() }</td>
                                    <td class="center">
                                        <button
                                            class="delete-btn"
                                            title="Padam"
                                            onclick={link.callback(move |_| Msg::Delete(id.clone()))}
                                        >
                                            { "Padam" }
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                    }
                </tbody>
            </table>
        </div>
    }
}

fn relief_badge(need_relief: bool) -> Html {
    if need_relief {
        html! { <span class="relief-badge relief-yes">{ "YA" }</span> }
    } else {
        html! { <span class="relief-badge relief-no">{ "TIDAK" }</span> }
    }
}
