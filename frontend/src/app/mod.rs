//! Root component: owns the [`DataCache`](crate::cache::DataCache), the
//! polling timer and the active tab, and renders the header, tab bar, the
//! active tab and the footer.
//!
//! Polling starts on the first render and runs every
//! [`POLL_INTERVAL_MS`]. The interval is dropped, and therefore cancelled,
//! when the component is destroyed.

use gloo_timers::callback::Interval;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::{App, Tab};

/// Time between two background refreshes.
pub const POLL_INTERVAL_MS: u32 = 5_000;

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && self.poll.is_none() {
            ctx.link().send_message(Msg::Refresh);

            let link = ctx.link().clone();
            self.poll = Some(Interval::new(POLL_INTERVAL_MS, move || {
                link.send_message(Msg::Refresh)
            }));
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.poll = None;
    }
}
