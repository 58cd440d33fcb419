use serde::{Deserialize, Serialize};

/// Section of a generated specification that a `## <label>` heading selects
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpecSection {
    Problem,
    UserStories,
    AcceptanceCriteria,
    Design,
    Tasks,
}

impl SpecSection {
    pub fn name(&self) -> &'static str {
        match self {
            SpecSection::Problem => "Problem",
            SpecSection::UserStories => "User Stories",
            SpecSection::AcceptanceCriteria => "Acceptance Criteria",
            SpecSection::Design => "Design",
            SpecSection::Tasks => "Tasks",
        }
    }

    /// Canonical section order used by generated specifications
    pub fn all() -> [SpecSection; 5] {
        [
            SpecSection::Problem,
            SpecSection::UserStories,
            SpecSection::AcceptanceCriteria,
            SpecSection::Design,
            SpecSection::Tasks,
        ]
    }
}

/// Structured result of parsing generated specification text.
///
/// Built fresh for every parse; it has no identity beyond the call that
/// produced it and is never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Specification {
    /// Free text under the Problem heading, newline-joined verbatim
    pub problem: String,

    /// `- ` bullet items under the User Stories heading
    pub user_stories: Vec<String>,

    /// `- ` bullet items under the Acceptance Criteria heading
    pub acceptance_criteria: Vec<String>,

    /// Free text under the Design heading, newline-joined verbatim
    pub design: String,

    /// `N) ` numbered items under the Tasks heading, in source order
    pub tasks: Vec<String>,
}

impl Specification {
    /// True when no section captured any content
    pub fn is_empty(&self) -> bool {
        self.problem.is_empty()
            && self.user_stories.is_empty()
            && self.acceptance_criteria.is_empty()
            && self.design.is_empty()
            && self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(Specification::default().is_empty());
    }

    #[test]
    fn test_serializes_with_snake_case_fields() {
        let spec = Specification {
            problem: "Count clicks\n".to_string(),
            user_stories: vec!["As a user, I can click.".to_string()],
            ..Default::default()
        };

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["problem"], "Count clicks\n");
        assert_eq!(json["user_stories"][0], "As a user, I can click.");
        assert!(json["acceptance_criteria"].as_array().unwrap().is_empty());
    }
}
