use crate::grading::GradingState;
use crate::grading::score::{section_score, total_score};
use crate::rubric::Rubric;

/// Build the feedback report. The output is copied verbatim to the
/// clipboard, so the structure (headings, bullets, separators, spacing)
/// is exact text.
pub fn generate_feedback(rubric: &Rubric, state: &GradingState) -> String {
    let mut feedback = format!("# {}\n\n", rubric.title);

    for section in &rubric.sections {
        let score = section_score(section, state);
        feedback.push_str(&format!("## {}\n", section.title));
        feedback.push_str(&format!("Score: {score:.2}%\n\n"));

        let achieved: Vec<String> = section
            .items
            .iter()
            .filter(|item| state.is_checked(&section.id, &item.id))
            .map(|item| format!("✓ {}", item.label))
            .collect();
        if !achieved.is_empty() {
            feedback.push_str("Achieved:\n");
            feedback.push_str(&achieved.join("\n"));
            feedback.push_str("\n\n");
        }

        let missing: Vec<String> = section
            .items
            .iter()
            .filter(|item| !state.is_checked(&section.id, &item.id))
            .map(|item| format!("- {}", item.label))
            .collect();
        if !missing.is_empty() {
            feedback.push_str("Areas for improvement:\n");
            feedback.push_str(&missing.join("\n"));
            feedback.push_str("\n\n");
        }

        let applied: Vec<String> = section
            .deductions
            .iter()
            .filter_map(|d| {
                let count = state.deduction_count(&section.id, &d.id);
                (count > 0).then(|| format!("- {} ({count} instances)", d.label))
            })
            .collect();
        if !applied.is_empty() {
            feedback.push_str("Deductions:\n");
            feedback.push_str(&applied.join("\n"));
            feedback.push_str("\n\n");
        }

        let comment = state.comment(&section.id);
        if !comment.is_empty() {
            feedback.push_str(&format!("Comments: {comment}\n\n"));
        }

        feedback.push_str("---\n\n");
    }

    feedback.push_str(&format!("# Total Score: {:.2}%", total_score(rubric, state)));
    feedback
}
