use crate::grading::GradingState;
use crate::rubric::{Rubric, Section};

/// Compute a section's score: checked item points minus deduction
/// penalties, floored at 0. No upper clamp — a misconfigured section may
/// exceed 100%.
pub fn section_score(section: &Section, state: &GradingState) -> f64 {
    let earned: f64 = section
        .items
        .iter()
        .filter(|item| state.is_checked(&section.id, &item.id))
        .map(|item| item.points)
        .sum();

    let penalties: f64 = section
        .deductions
        .iter()
        .map(|d| state.deduction_count(&section.id, &d.id) as f64 * d.value)
        .sum();

    (earned - penalties).max(0.0)
}

/// Total score: sum of section scores in rubric order. Not normalized —
/// rubric weights are baked into point values.
pub fn total_score(rubric: &Rubric, state: &GradingState) -> f64 {
    rubric
        .sections
        .iter()
        .map(|section| section_score(section, state))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rubric::{Deduction, Item, Rubric, Section};

    fn make_item(id: &str, points: f64) -> Item {
        Item {
            id: id.to_string(),
            label: id.to_string(),
            points,
        }
    }

    fn make_deduction(id: &str, value: f64) -> Deduction {
        Deduction {
            id: id.to_string(),
            label: id.to_string(),
            value,
        }
    }

    fn brand_section() -> Section {
        Section {
            id: "brand".to_string(),
            title: "Chosen Brand (5%)".to_string(),
            items: vec![make_item("nzBrand", 2.0), make_item("commonlySold", 1.0)],
            deductions: vec![make_deduction("citations", 2.0)],
        }
    }

    #[test]
    fn empty_selection_scores_zero() {
        let section = brand_section();
        let state = GradingState::new();
        assert_eq!(section_score(&section, &state), 0.0);
    }

    #[test]
    fn checked_items_sum() {
        let section = brand_section();
        let mut state = GradingState::new();
        state.toggle_item("brand", "nzBrand");
        state.toggle_item("brand", "commonlySold");
        assert!((section_score(&section, &state) - 3.0).abs() < 0.001);
    }

    #[test]
    fn deduction_cancels_earned_points() {
        // check nzBrand (2), one citations instance (-2) → 0
        let section = brand_section();
        let mut state = GradingState::new();
        state.toggle_item("brand", "nzBrand");
        state.set_deduction_count("brand", "citations", 1);
        assert_eq!(section_score(&section, &state), 0.0);
    }

    #[test]
    fn score_never_negative() {
        let section = brand_section();
        let mut state = GradingState::new();
        state.toggle_item("brand", "nzBrand");
        state.set_deduction_count("brand", "citations", 100);
        assert_eq!(section_score(&section, &state), 0.0);
    }

    #[test]
    fn unchecked_items_do_not_count() {
        let section = brand_section();
        let mut state = GradingState::new();
        state.toggle_item("brand", "nzBrand");
        assert!((section_score(&section, &state) - 2.0).abs() < 0.001);
    }

    #[test]
    fn checks_in_other_sections_do_not_count() {
        let section = brand_section();
        let mut state = GradingState::new();
        state.toggle_item("peste", "nzBrand");
        assert_eq!(section_score(&section, &state), 0.0);
    }

    #[test]
    fn section_without_deductions_ignores_counts() {
        let section = Section {
            id: "collaborators".to_string(),
            title: "Collaborators (10%)".to_string(),
            items: vec![make_item("partners", 4.0)],
            deductions: vec![],
        };
        let mut state = GradingState::new();
        state.toggle_item("collaborators", "partners");
        state.set_deduction_count("collaborators", "citations", 3);
        assert!((section_score(&section, &state) - 4.0).abs() < 0.001);
    }

    #[test]
    fn total_is_sum_of_sections() {
        let rubric = Rubric {
            title: "Test".to_string(),
            sections: vec![
                brand_section(),
                Section {
                    id: "peste".to_string(),
                    title: "Context - PESTE Analysis (20%)".to_string(),
                    items: vec![make_item("political", 4.0), make_item("economic", 4.0)],
                    deductions: vec![make_deduction("futureFocus", 5.0)],
                },
            ],
        };
        let mut state = GradingState::new();
        state.toggle_item("brand", "nzBrand");
        state.toggle_item("brand", "commonlySold");
        state.toggle_item("peste", "political");
        state.set_deduction_count("peste", "futureFocus", 1);

        let expected: f64 = rubric
            .sections
            .iter()
            .map(|s| section_score(s, &state))
            .sum();
        assert!((total_score(&rubric, &state) - expected).abs() < 0.001);
        // brand: 3, peste: max(0, 4 - 5) = 0
        assert!((total_score(&rubric, &state) - 3.0).abs() < 0.001);
    }

    #[test]
    fn total_unaffected_by_section_reorder() {
        let mut rubric = Rubric {
            title: "Test".to_string(),
            sections: vec![
                brand_section(),
                Section {
                    id: "company".to_string(),
                    title: "Company (15%)".to_string(),
                    items: vec![make_item("strengths", 5.0)],
                    deductions: vec![],
                },
            ],
        };
        let mut state = GradingState::new();
        state.toggle_item("brand", "nzBrand");
        state.toggle_item("company", "strengths");

        let forward = total_score(&rubric, &state);
        rubric.sections.reverse();
        let reversed = total_score(&rubric, &state);
        assert!((forward - reversed).abs() < 0.001);
    }

    #[test]
    fn default_rubric_all_checked_scores_100() {
        let rubric = crate::rubric::default_rubric();
        let mut state = GradingState::new();
        for section in &rubric.sections {
            for item in &section.items {
                state.toggle_item(&section.id, &item.id);
            }
        }
        assert!((total_score(&rubric, &state) - 100.0).abs() < 0.001);
    }
}
