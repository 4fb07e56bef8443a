use dioxus::prelude::*;

use crate::grading::GradingState;
use crate::grading::feedback::generate_feedback;
use crate::grading::score::total_score;

#[component]
pub fn SummaryBar(state: Signal<GradingState>) -> Element {
    let rubric = crate::get_rubric();
    let total = total_score(rubric, &state.read());
    let started = state.read().started_at.format("%H:%M UTC").to_string();

    rsx! {
        div {
            style: "background: #16213e; padding: 12px 16px; margin: 8px 0; border-radius: 4px; display: flex; justify-content: space-between; align-items: center;",
            div {
                h3 { style: "margin: 0; color: #5b8def;", "Total Score: {total:.2}%" }
                p { style: "color: #888; margin: 0; font-size: 11px;", "Session started {started}" }
            }
            button {
                style: "background: #5b8def; border: none; color: #1a1a2e; font-family: monospace; font-weight: bold; font-size: 13px; padding: 8px 16px; border-radius: 4px; cursor: pointer;",
                title: "Copy the feedback report to the clipboard",
                onclick: move |_| {
                    let rubric = crate::get_rubric();
                    let report = generate_feedback(rubric, &state.read());
                    // The report spans lines and may contain quotes, so embed
                    // it as a JSON string literal rather than interpolating raw
                    let literal = serde_json::to_string(&report).unwrap_or_default();
                    let js = format!("navigator.clipboard.writeText({literal})");
                    document::eval(&js);
                    crate::get_notifier().notify_copied(total_score(rubric, &state.read()));
                },
                "📋 Copy Feedback"
            }
        }
    }
}
