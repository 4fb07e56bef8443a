use dioxus::prelude::*;

use crate::grading::GradingState;
use crate::grading::score::section_score;
use crate::rubric::{Deduction, Item, Section};

#[component]
pub fn SectionCard(section: Section, mut state: Signal<GradingState>) -> Element {
    let score = section_score(&section, &state.read());
    let comment = state.read().comment(&section.id).to_string();
    let comment_section = section.id.clone();

    rsx! {
        div {
            style: "background: #16213e; padding: 12px; margin: 8px 0; border-radius: 4px;",
            h2 { style: "color: #5b8def; margin: 0 0 8px 0; font-size: 16px;",
                "{section.title}"
            }
            for item in section.items.iter() {
                ItemRow { section_id: section.id.clone(), item: item.clone(), state }
            }
            if !section.deductions.is_empty() {
                h4 { style: "color: #e0b050; margin: 12px 0 4px 0;", "Deductions" }
                for deduction in section.deductions.iter() {
                    DeductionRow {
                        section_id: section.id.clone(),
                        deduction: deduction.clone(),
                        state,
                    }
                }
            }
            textarea {
                style: "width: 100%; box-sizing: border-box; background: #1a1a2e; color: #e0e0e0; border: 1px solid #555; border-radius: 4px; padding: 8px; margin-top: 12px; font-family: monospace; font-size: 13px;",
                rows: "2",
                placeholder: "Additional comments for this section...",
                value: "{comment}",
                oninput: move |evt| {
                    state.write().set_comment(&comment_section, evt.value());
                },
            }
            div { style: "text-align: right; color: #888; font-size: 13px; margin-top: 4px;",
                "Section Score: {score:.2}%"
            }
        }
    }
}

#[component]
fn ItemRow(section_id: String, item: Item, mut state: Signal<GradingState>) -> Element {
    let checked = state.read().is_checked(&section_id, &item.id);
    let toggle_section = section_id.clone();
    let toggle_item = item.id.clone();

    rsx! {
        div { style: "display: flex; align-items: center; gap: 8px; margin: 4px 0; font-size: 13px;",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |_| {
                    state.write().toggle_item(&toggle_section, &toggle_item);
                },
            }
            label { style: "flex: 1;", "{item.label} ({item.points}%)" }
        }
    }
}

#[component]
fn DeductionRow(section_id: String, deduction: Deduction, mut state: Signal<GradingState>) -> Element {
    let count = state.read().deduction_count(&section_id, &deduction.id);
    let change_section = section_id.clone();
    let change_deduction = deduction.id.clone();

    rsx! {
        div { style: "display: flex; align-items: center; gap: 8px; margin: 4px 0; font-size: 13px;",
            input {
                r#type: "number",
                min: "0",
                style: "width: 56px; background: #1a1a2e; color: #e0e0e0; border: 1px solid #555; border-radius: 4px; padding: 4px;",
                value: "{count}",
                oninput: move |evt| {
                    // Unparsable input counts as 0; negative clamps in the state
                    let count = evt.value().parse::<i64>().unwrap_or(0);
                    state.write().set_deduction_count(&change_section, &change_deduction, count);
                },
            }
            label { style: "color: #e0b050;", "{deduction.label}" }
        }
    }
}
