use crate::models::{SpecSection, Specification};
use crate::Result;
use anyhow::Context;
use regex::Regex;

/// Heading keywords, evaluated top-down; the first keyword contained in the
/// lowercased heading label wins. A heading matching none of them drops the
/// content below it until the next heading.
const SECTION_RULES: &[(&str, SpecSection)] = &[
    ("problem", SpecSection::Problem),
    ("user stories", SpecSection::UserStories),
    ("acceptance", SpecSection::AcceptanceCriteria),
    ("design", SpecSection::Design),
    ("tasks", SpecSection::Tasks),
];

/// Classify a heading label into a section
///
/// Matching is by substring, so "Design Problems" selects `Problem`.
pub fn classify_heading(label: &str) -> Option<SpecSection> {
    let label = label.to_lowercase();
    SECTION_RULES
        .iter()
        .find(|(keyword, _)| label.contains(keyword))
        .map(|(_, section)| *section)
}

/// Parser for generated specification text
///
/// Scans top to bottom keeping a current-section pointer that `## <label>`
/// headings move. Lines are interpreted according to that pointer:
/// bullets for user stories and acceptance criteria, `N) ` items for tasks,
/// verbatim lines for problem and design.
pub struct SpecParser {
    heading: Regex,
    numbered: Regex,
}

impl SpecParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            heading: Regex::new(r"^##\s+(.*)$").context("Failed to compile heading regex")?,
            numbered: Regex::new(r"^\d+\)\s*(.*)$").context("Failed to compile task regex")?,
        })
    }

    pub fn parse(&self, text: &str) -> Specification {
        let mut spec = Specification::default();
        let mut current: Option<SpecSection> = None;

        for line in text.lines() {
            let trimmed = line.trim();

            if let Some(caps) = self.heading.captures(trimmed) {
                current = classify_heading(&caps[1]);
                continue;
            }

            match current {
                Some(SpecSection::UserStories) => {
                    if let Some(item) = trimmed.strip_prefix("- ") {
                        spec.user_stories.push(item.to_string());
                    }
                }
                Some(SpecSection::AcceptanceCriteria) => {
                    if let Some(item) = trimmed.strip_prefix("- ") {
                        spec.acceptance_criteria.push(item.to_string());
                    }
                }
                Some(SpecSection::Tasks) => {
                    if let Some(caps) = self.numbered.captures(trimmed) {
                        spec.tasks.push(caps[1].trim().to_string());
                    }
                }
                Some(SpecSection::Problem) => {
                    spec.problem.push_str(line);
                    spec.problem.push('\n');
                }
                Some(SpecSection::Design) => {
                    spec.design.push_str(line);
                    spec.design.push('\n');
                }
                None => {}
            }
        }

        spec
    }
}
