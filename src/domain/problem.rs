use serde::{Deserialize, Serialize};

/// A sample input/output pair shown in the testcase panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleTestCase {
    pub id: String,
    pub input: String,
    pub expected_output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// A coding problem as supplied by the dataset. Read-only for the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    /// Position in the track, used by the navigator sidebar
    pub number: u32,
    pub title: String,
    pub description: String,
    pub input_format: String,
    pub output_format: String,
    #[serde(default)]
    pub constraints: Vec<String>,
    pub sample_test_cases: Vec<SampleTestCase>,
    #[serde(default)]
    pub starter_code: String,
    pub level: u8,
    pub category: String,
}

impl Problem {
    pub fn heading(&self) -> String {
        format!("{}. {}", self.number, self.title)
    }

    pub fn has_test_case(&self, id: &str) -> bool {
        self.sample_test_cases.iter().any(|c| c.id == id)
    }

    pub fn test_case(&self, id: &str) -> Option<&SampleTestCase> {
        self.sample_test_cases.iter().find(|c| c.id == id)
    }

    pub fn test_case_index(&self, id: &str) -> Option<usize> {
        self.sample_test_cases.iter().position(|c| c.id == id)
    }

    pub fn first_test_case_id(&self) -> Option<&str> {
        self.sample_test_cases.first().map(|c| c.id.as_str())
    }
}

/// Ordered collection of problems in one track
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemSet {
    pub track_title: String,
    problems: Vec<Problem>,
}

impl ProblemSet {
    /// Problems are kept sorted by `number`.
    pub fn new(track_title: String, mut problems: Vec<Problem>) -> Self {
        problems.sort_by_key(|p| p.number);
        Self {
            track_title,
            problems,
        }
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn by_number(&self, number: u32) -> Option<&Problem> {
        self.problems.iter().find(|p| p.number == number)
    }

    pub fn numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.problems.iter().map(|p| p.number)
    }

    pub fn next_number(&self, current: u32) -> Option<u32> {
        self.numbers().find(|n| *n > current)
    }

    pub fn prev_number(&self, current: u32) -> Option<u32> {
        self.numbers().filter(|n| *n < current).last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(number: u32, case_ids: &[&str]) -> Problem {
        Problem {
            id: number.to_string(),
            number,
            title: format!("Problem {number}"),
            description: String::new(),
            input_format: String::new(),
            output_format: String::new(),
            constraints: vec![],
            sample_test_cases: case_ids
                .iter()
                .map(|id| SampleTestCase {
                    id: (*id).to_string(),
                    input: "1".to_string(),
                    expected_output: "1".to_string(),
                    explanation: None,
                })
                .collect(),
            starter_code: String::new(),
            level: 1,
            category: "Looping".to_string(),
        }
    }

    #[test]
    fn heading_joins_number_and_title() {
        assert_eq!(problem(3, &["1"]).heading(), "3. Problem 3");
    }

    #[test]
    fn has_test_case_matches_by_id() {
        let p = problem(1, &["1", "2"]);

        assert!(p.has_test_case("2"));
        assert!(!p.has_test_case("9"));
        assert_eq!(p.test_case_index("2"), Some(1));
    }

    #[test]
    fn new_sorts_by_number() {
        let set = ProblemSet::new(
            "Track".to_string(),
            vec![problem(3, &["1"]), problem(1, &["1"]), problem(2, &["1"])],
        );

        assert_eq!(set.numbers().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn next_and_prev_skip_gaps() {
        let set = ProblemSet::new(
            "Track".to_string(),
            vec![problem(1, &["1"]), problem(4, &["1"]), problem(7, &["1"])],
        );

        assert_eq!(set.next_number(1), Some(4));
        assert_eq!(set.next_number(7), None);
        assert_eq!(set.prev_number(4), Some(1));
        assert_eq!(set.prev_number(1), None);
    }

    #[test]
    fn explanation_is_optional_in_json() {
        let json = r#"{"id":"2","input":"10","expected_output":"1 2"}"#;

        let case: SampleTestCase = serde_json::from_str(json).unwrap();

        assert!(case.explanation.is_none());
    }
}
