use serde::Deserialize;
use std::path::Path;

/// The full rubric: report title plus ordered sections.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rubric {
    pub title: String,
    pub sections: Vec<Section>,
}

/// One rubric section: scored checklist items plus optional deduction rules.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub items: Vec<Item>,
    #[serde(default)]
    pub deductions: Vec<Deduction>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub id: String,
    pub label: String,
    pub points: f64,
}

/// A deduction rule. `value` is the penalty per counted instance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Deduction {
    pub id: String,
    pub label: String,
    pub value: f64,
}

impl Rubric {
    /// Load a rubric from a TOML file. Falls back to the built-in rubric
    /// if the file doesn't exist or can't be parsed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("Rubric file {} not found, using built-in rubric", path.display());
            return default_rubric();
        }
        let rubric = match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(rubric) => {
                    tracing::info!("Rubric loaded from {}", path.display());
                    rubric
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {e}, using built-in rubric", path.display());
                    default_rubric()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, using built-in rubric", path.display());
                default_rubric()
            }
        };
        rubric.warn_duplicate_ids();
        rubric
    }

    /// Log a warning for duplicate item/deduction ids within a section.
    /// The rubric shape is trusted; this never rejects.
    fn warn_duplicate_ids(&self) {
        for section in &self.sections {
            let mut item_ids: Vec<&str> = section.items.iter().map(|i| i.id.as_str()).collect();
            item_ids.sort_unstable();
            item_ids.dedup();
            if item_ids.len() != section.items.len() {
                tracing::warn!("Section '{}' has duplicate item ids", section.id);
            }
            let mut ded_ids: Vec<&str> = section.deductions.iter().map(|d| d.id.as_str()).collect();
            ded_ids.sort_unstable();
            ded_ids.dedup();
            if ded_ids.len() != section.deductions.len() {
                tracing::warn!("Section '{}' has duplicate deduction ids", section.id);
            }
        }
    }
}

fn item(id: &str, label: &str, points: f64) -> Item {
    Item {
        id: id.to_string(),
        label: label.to_string(),
        points,
    }
}

fn deduction(id: &str, label: &str, value: f64) -> Deduction {
    Deduction {
        id: id.to_string(),
        label: label.to_string(),
        value,
    }
}

/// The built-in rubric: a 5Cs marketing report, section weights baked into
/// point values (sums to 100).
pub fn default_rubric() -> Rubric {
    Rubric {
        title: "5Cs Report Feedback".to_string(),
        sections: vec![
            Section {
                id: "brand".to_string(),
                title: "Chosen Brand (5%)".to_string(),
                items: vec![
                    item("nzBrand", "Brand is from New Zealand", 2.0),
                    item("commonlySold", "Brand is commonly sold to NZ consumers", 1.0),
                    item("references", "Reference links provided as proof", 1.0),
                    item("introduction", "Clear and accurate introduction", 1.0),
                ],
                deductions: vec![],
            },
            Section {
                id: "peste".to_string(),
                title: "Context - PESTE Analysis (20%)".to_string(),
                items: vec![
                    item("political", "Political - 3+ future-focused points with citations", 4.0),
                    item("economic", "Economic - 3+ future-focused points with citations", 4.0),
                    item("social", "Social - 3+ future-focused points with citations", 4.0),
                    item("technological", "Technological - 3+ future-focused points with citations", 4.0),
                    item("environmental", "Environmental - 3+ future-focused points with citations", 4.0),
                ],
                deductions: vec![
                    deduction("industryFocus", "Not focused on industry (-5%)", 5.0),
                    deduction("futureFocus", "Not future-focused (-5%)", 5.0),
                    deduction("citations", "Missing APA citations (-2% per section)", 2.0),
                ],
            },
            Section {
                id: "customers".to_string(),
                title: "Customers (20%)".to_string(),
                items: vec![
                    item("segments", "Customer segments clearly identified", 5.0),
                    item("needs", "Customer needs and motivations analysed", 5.0),
                    item("trends", "Future customer trends identified with citations", 5.0),
                    item("insights", "Insights linked to the chosen brand", 5.0),
                ],
                deductions: vec![
                    deduction("citations", "Missing APA citations (-2% per section)", 2.0),
                    deduction("genericAnalysis", "Analysis not specific to the brand (-3%)", 3.0),
                ],
            },
            Section {
                id: "competitors".to_string(),
                title: "Competitors (20%)".to_string(),
                items: vec![
                    item("direct", "Direct competitors identified", 5.0),
                    item("indirect", "Indirect competitors identified", 5.0),
                    item("positioning", "Competitive positioning analysed", 5.0),
                    item("advantage", "Sources of competitive advantage assessed", 5.0),
                ],
                deductions: vec![
                    deduction("citations", "Missing APA citations (-2% per section)", 2.0),
                ],
            },
            Section {
                id: "company".to_string(),
                title: "Company (15%)".to_string(),
                items: vec![
                    item("strengths", "Company strengths analysed", 5.0),
                    item("weaknesses", "Company weaknesses analysed", 5.0),
                    item("resources", "Resources and capabilities linked to strategy", 5.0),
                ],
                deductions: vec![
                    deduction("citations", "Missing APA citations (-2% per section)", 2.0),
                ],
            },
            Section {
                id: "collaborators".to_string(),
                title: "Collaborators (10%)".to_string(),
                items: vec![
                    item("partners", "Key partners and suppliers identified", 4.0),
                    item("distributors", "Distribution channels described", 3.0),
                    item("linkage", "Collaborator roles linked to customer value", 3.0),
                ],
                deductions: vec![],
            },
            Section {
                id: "presentation".to_string(),
                title: "Presentation & Referencing (10%)".to_string(),
                items: vec![
                    item("structure", "Logical structure and flow", 3.0),
                    item("writing", "Clear, professional writing", 3.0),
                    item("referencing", "Complete APA reference list", 4.0),
                ],
                deductions: vec![
                    deduction("wordCount", "Outside word count limit (-2%)", 2.0),
                    deduction("formatting", "Formatting requirements not met (-1%)", 1.0),
                ],
            },
        ],
    }
}
