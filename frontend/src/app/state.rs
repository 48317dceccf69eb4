use chrono::NaiveDate;
use gloo_timers::callback::Interval;

use crate::cache::DataCache;
use crate::helpers::today;

/// The four top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Absence,
    Records,
    Analysis,
    Roster,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Absence, Tab::Records, Tab::Analysis, Tab::Roster];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Absence => "Ketidakhadiran Guru",
            Tab::Records => "Rekod Ketidakhadiran",
            Tab::Analysis => "Analisis Keberadaan",
            Tab::Roster => "Pengurusan Data",
        }
    }

    /// Accent class used for the active button.
    pub fn accent(self) -> &'static str {
        match self {
            Tab::Absence => "accent-blue",
            Tab::Records => "accent-emerald",
            Tab::Analysis => "accent-amber",
            Tab::Roster => "accent-rose",
        }
    }
}

pub struct App {
    pub cache: DataCache,
    pub active_tab: Tab,
    /// Date picked in the records browser. Survives tab switches.
    pub search_date: Option<NaiveDate>,
    /// Background refresh timer, set after the first render.
    pub poll: Option<Interval>,
}

impl App {
    pub fn new() -> Self {
        Self {
            cache: DataCache::default(),
            active_tab: Tab::Absence,
            search_date: Some(today()),
            poll: None,
        }
    }
}
