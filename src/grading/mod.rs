pub mod feedback;
pub mod score;

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Compound key for a checklist item selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub section: String,
    pub item: String,
}

impl ItemKey {
    pub fn new(section: &str, item: &str) -> Self {
        Self {
            section: section.to_string(),
            item: item.to_string(),
        }
    }
}

/// Compound key for a deduction counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeductionKey {
    pub section: String,
    pub deduction: String,
}

impl DeductionKey {
    pub fn new(section: &str, deduction: &str) -> Self {
        Self {
            section: section.to_string(),
            deduction: deduction.to_string(),
        }
    }
}

/// All selections made in one grading session. Created empty at session
/// start, mutated only by the three update operations, discarded on exit.
#[derive(Debug, Clone, PartialEq)]
pub struct GradingState {
    checked: HashMap<ItemKey, bool>,
    deduction_counts: HashMap<DeductionKey, u32>,
    comments: HashMap<String, String>,
    pub started_at: DateTime<Utc>,
}

impl GradingState {
    pub fn new() -> Self {
        Self {
            checked: HashMap::new(),
            deduction_counts: HashMap::new(),
            comments: HashMap::new(),
            started_at: Utc::now(),
        }
    }

    /// Flip a checklist item. Unset items count as unchecked.
    pub fn toggle_item(&mut self, section_id: &str, item_id: &str) {
        let key = ItemKey::new(section_id, item_id);
        let entry = self.checked.entry(key).or_insert(false);
        *entry = !*entry;
    }

    /// Set a deduction instance count. Negative input clamps to 0.
    pub fn set_deduction_count(&mut self, section_id: &str, deduction_id: &str, count: i64) {
        if count < 0 {
            tracing::debug!("Deduction count {count} for {section_id}/{deduction_id} clamped to 0");
        }
        let key = DeductionKey::new(section_id, deduction_id);
        self.deduction_counts.insert(key, count.max(0) as u32);
    }

    /// Set a section's free-text comment. Stored raw.
    pub fn set_comment(&mut self, section_id: &str, comment: String) {
        self.comments.insert(section_id.to_string(), comment);
    }

    pub fn is_checked(&self, section_id: &str, item_id: &str) -> bool {
        self.checked
            .get(&ItemKey::new(section_id, item_id))
            .copied()
            .unwrap_or(false)
    }

    pub fn deduction_count(&self, section_id: &str, deduction_id: &str) -> u32 {
        self.deduction_counts
            .get(&DeductionKey::new(section_id, deduction_id))
            .copied()
            .unwrap_or(0)
    }

    pub fn comment(&self, section_id: &str) -> &str {
        self.comments
            .get(section_id)
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl Default for GradingState {
    fn default() -> Self {
        Self::new()
    }
}
