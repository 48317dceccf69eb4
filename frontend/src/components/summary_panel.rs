use yew::prelude::*;

use common::views::DashboardSummary;

#[derive(Properties, PartialEq, Clone)]
pub struct SummaryPanelProps {
    pub summary: DashboardSummary,
}

/// Side panel next to the entry form: today's absences, relief demand and
/// overall totals.
#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    let summary = props.summary;

    html! {
        <aside class="summary-panel">
            <div class="stat-card stat-today">
                <span class="stat-tag">{ "Hari Ini" }</span>
                <div class="stat-value">{ summary.absent_today }</div>
                <div class="stat-label">{ "Guru Tiada di Sekolah" }</div>
            </div>
            <div class="stat-card stat-relief">
                <span class="stat-tag">{ "Relief" }</span>
                <div class="stat-value">{ summary.relief_needed_today }</div>
                <div class="stat-label">{ "Memerlukan Relief" }</div>
            </div>
            <div class="card system-status">
                <h3>{ "Status Sistem" }</h3>
                <div class="status-row">
                    <span>{ "Jumlah Guru Berdaftar" }</span>
                    <strong>{ summary.registered_teachers }</strong>
                </div>
                <div class="status-row">
                    <span>{ "Rekod Keseluruhan" }</span>
                    <strong>{ summary.total_records }</strong>
                </div>
            </div>
        </aside>
    }
}
