//! Analysis tab: days absent per month of the current year, the ten teachers
//! with the most days, and how records split across reasons.

use yew::html::Scope;
use yew::prelude::*;

use common::model::record::AbsenceRecord;
use common::views::{
    monthly_totals, reason_breakdown, top_absentees, MonthlyTotal, RankingScope, ReasonCount,
    TeacherTotal,
};

mod chart;

use chart::{bar_percent, color, donut_gradient};

pub const NO_DATA: &str = "Tiada data untuk dipaparkan";

#[derive(Properties, PartialEq, Clone)]
pub struct AnalysisProps {
    pub records: Vec<AbsenceRecord>,
    /// Calendar year of the monthly chart and of the "this year" ranking.
    pub year: i32,
}

pub enum Msg {
    SetRankingYearOnly(bool),
}

pub struct Analysis {
    /// Restrict the ranking to days inside `year`. Off by default.
    year_only: bool,
}

impl Analysis {
    fn scope(&self, year: i32) -> RankingScope {
        if self.year_only {
            RankingScope::Year(year)
        } else {
            RankingScope::AllTime
        }
    }
}

impl Component for Analysis {
    type Message = Msg;
    type Properties = AnalysisProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { year_only: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetRankingYearOnly(year_only) => {
                let changed = self.year_only != year_only;
                self.year_only = year_only;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let monthly = monthly_totals(&props.records, props.year);
        let top = top_absentees(&props.records, self.scope(props.year));
        let reasons = reason_breakdown(&props.records);

        html! {
            <div class="analysis">
                <div class="analysis-grid">
                    <section class="card">
                        <h3>{ "Analisis Bulanan" }</h3>
                        { monthly_chart(&monthly) }
                    </section>
                    <section class="card">
                        <div class="card-header">
                            <h3>{ "Top 10 Ketidakhadiran (Tahunan)" }</h3>
                            { self.scope_toggle(ctx.link(), props.year) }
                        </div>
                        { ranking_chart(&top) }
                    </section>
                </div>
                <section class="card">
                    <h3>{ "Pecahan Sebab Ketidakhadiran" }</h3>
                    { reason_chart(&reasons) }
                </section>
            </div>
        }
    }
}

impl Analysis {
    fn scope_toggle(&self, link: &Scope<Self>, year: i32) -> Html {
        html! {
            <div class="scope-toggle">
                <button
                    class={classes!("toggle-btn", (!self.year_only).then_some("active"))}
                    onclick={link.callback(|_| Msg::SetRankingYearOnly(false))}
                >
                    { "Keseluruhan" }
                </button>
                <button
                    class={classes!("toggle-btn", self.year_only.then_some("active"))}
                    onclick={link.callback(|_| Msg::SetRankingYearOnly(true))}
                >
                    { year.to_string() }
                </button>
            </div>
        }
    }
}

fn empty_chart() -> Html {
    html! { <div class="chart-empty">{ NO_DATA }</div> }
}

fn monthly_chart(months: &[MonthlyTotal]) -> Html {
    let max = months.iter().map(|m| m.days).max().unwrap_or(0);

    html! {
        <div class="column-chart">
            {
                for months.iter().map(|m| html! {
                    <div class="column" key={m.month} title={format!("{}: {} hari", m.label, m.days)}>
                        <span class="column-value">{ m.days }</span>
                        <div class="column-track">
                            <div
                                class="column-bar"
                                style={format!("height: {:.1}%; background: {};", bar_percent(m.days, max), color(0))}
                            />
                        </div>
                        <span class="column-label">{ m.label.clone() }</span>
                    </div>
                })
            }
        </div>
    }
}

fn ranking_chart(top: &[TeacherTotal]) -> Html {
    if top.is_empty() {
        return empty_chart();
    }
    let max = top.first().map(|t| t.days).unwrap_or(0);

    html! {
        <div class="row-chart">
            {
                for top.iter().enumerate().map(|(index, teacher)| html! {
                    <div class="row" key={teacher.name.clone()}>
                        <span class="row-label">{ teacher.name.clone() }</span>
                        <div class="row-track">
                            <div
                                class="row-bar"
                                style={format!("width: {:.1}%; background: {};", bar_percent(teacher.days, max), color(index))}
                            />
                        </div>
                        <span class="row-value">{ teacher.days }</span>
                    </div>
                })
            }
        </div>
    }
}

fn reason_chart(reasons: &[ReasonCount]) -> Html {
    if reasons.is_empty() {
        return empty_chart();
    }
    let total: usize = reasons.iter().map(|r| r.count).sum();

    html! {
        <div class="reason-chart">
            <div class="donut" style={format!("background: {};", donut_gradient(reasons))}>
                <div class="donut-hole" />
            </div>
            <ul class="legend">
                {
                    for reasons.iter().enumerate().map(|(index, r)| html! {
                        <li key={r.reason.clone()}>
                            <span class="swatch" style={format!("background: {};", color(index))} />
                            { format!("{} ({}%)", r.reason, r.percent_of(total)) }
                        </li>
                    })
                }
            </ul>
        </div>
    }
}
