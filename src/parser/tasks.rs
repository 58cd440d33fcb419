use crate::Result;
use anyhow::Context;
use regex::Regex;

/// Tasks returned when the text contains no numbered lines
pub const DEFAULT_TASKS: [&str; 3] = [
    "Create index.html",
    "Create styles.css",
    "Create app.js implementing a counter",
];

pub fn default_tasks() -> Vec<String> {
    DEFAULT_TASKS.iter().map(|t| t.to_string()).collect()
}

/// Pulls `N) description` lines out of raw text, ignoring headings.
///
/// Every line is considered, not just the ones under a Tasks heading.
/// Items keep their order of appearance; the numeric prefix is neither
/// validated nor used for sorting.
pub struct TaskExtractor {
    numbered: Regex,
}

impl TaskExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            numbered: Regex::new(r"^\s*\d+\)\s*(.+)$")
                .context("Failed to compile numbered task regex")?,
        })
    }

    pub fn extract(&self, raw: &str) -> Vec<String> {
        let tasks: Vec<String> = raw
            .lines()
            .filter_map(|line| self.numbered.captures(line))
            .map(|caps| caps[1].trim().to_string())
            .collect();

        if tasks.is_empty() {
            default_tasks()
        } else {
            tasks
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(raw: &str) -> Vec<String> {
        TaskExtractor::new().unwrap().extract(raw)
    }

    #[test]
    fn test_empty_text_yields_defaults() {
        assert_eq!(
            extract(""),
            vec![
                "Create index.html",
                "Create styles.css",
                "Create app.js implementing a counter"
            ]
        );
    }

    #[test]
    fn test_no_numbered_lines_yields_defaults() {
        assert_eq!(extract("no numbered lines"), default_tasks());
    }

    #[test]
    fn test_order_of_appearance_not_numeric_value() {
        assert_eq!(extract("1) A\n2) B\n5) C"), vec!["A", "B", "C"]);
        assert_eq!(extract("3) C\n1) A\n2) B"), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_ignores_headings_and_keeps_duplicates() {
        let raw = "## Problem\n1) from problem\n## Design\n  2)   spaced out  \n## Tasks\n1) from problem\n";
        assert_eq!(
            extract(raw),
            vec!["from problem", "spaced out", "from problem"]
        );
    }

    #[test]
    fn test_other_list_styles_do_not_match() {
        assert_eq!(extract("1. dotted\n- bullet\n(1) wrapped\nA) lettered"), default_tasks());
    }

    #[test]
    fn test_windows_line_endings() {
        assert_eq!(extract("1) A\r\n2) B\r\n"), vec!["A", "B"]);
    }
}
