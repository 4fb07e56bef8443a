pub mod section;
pub mod summary;

use dioxus::prelude::*;

use crate::grading::GradingState;

/// Root UI component.
#[component]
pub fn App() -> Element {
    let state = use_signal(GradingState::new);
    let rubric = crate::get_rubric();
    let heading = &crate::get_config().ui.window_title;

    rsx! {
        div { class: "app",
            style: "font-family: monospace; background: #1a1a2e; color: #e0e0e0; min-height: 100vh; padding: 16px;",

            h1 { style: "color: #5b8def; margin-bottom: 4px;",
                "{heading}"
            }
            p { style: "color: #888; margin-top: 0; margin-bottom: 16px;",
                "{rubric.title}"
            }

            div { style: "max-width: 840px;",
                for section in rubric.sections.iter() {
                    section::SectionCard { section: section.clone(), state }
                }
                summary::SummaryBar { state }
            }
        }
    }
}
