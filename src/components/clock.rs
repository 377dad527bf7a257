use std::time::Duration;

use chrono::Local;
use dioxus::prelude::*;
use gloo_timers::callback::Interval;

use crate::utils::{format_date, format_time, millis};

fn now_text() -> String {
    let now = Local::now().naive_local();
    format!("{} - {}", format_time(&now), format_date(&now))
}

#[derive(Props, PartialEq)]
pub struct ClockProps {
    tick: Duration,
}

pub fn Clock(cx: Scope<ClockProps>) -> Element {
    let now = use_state(cx, now_text);

    // the interval is cancelled when the hook state drops with the component
    cx.use_hook(|| {
        let set_now = now.setter();
        Interval::new(millis(cx.props.tick), move || set_now(now_text()))
    });

    render! {
        div { id: "timeDisplay", class: "time-display", "{now}" }
    }
}
