//! Problem dataset loading. The bundled set ships inside the binary; a JSON
//! file passed on the command line replaces it.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Problem, ProblemSet};

const BUNDLED_DATASET: &str = include_str!("../../data/problems.json");
const DEFAULT_TRACK_TITLE: &str = "Problem Solving in Python";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not read problem dataset {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid problem dataset {origin}: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },
    #[error("problem dataset {origin} contains no problems")]
    Empty { origin: String },
    #[error("problem dataset {origin} lists problem {number} more than once")]
    DuplicateNumber { origin: String, number: u32 },
}

/// Either a bare array of problems or an object carrying a track title.
#[derive(Deserialize)]
#[serde(untagged)]
enum DatasetFile {
    Track {
        #[serde(default)]
        track_title: Option<String>,
        problems: Vec<Problem>,
    },
    Bare(Vec<Problem>),
}

pub fn bundled_problem_set() -> Result<ProblemSet, DatasetError> {
    parse_problem_set(BUNDLED_DATASET, "<bundled>")
}

pub fn load_problem_set(path: Option<&Path>) -> Result<ProblemSet, DatasetError> {
    let Some(path) = path else {
        return bundled_problem_set();
    };
    let json = fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_problem_set(&json, &path.display().to_string())
}

pub fn parse_problem_set(json: &str, origin: &str) -> Result<ProblemSet, DatasetError> {
    let file: DatasetFile = serde_json::from_str(json).map_err(|source| DatasetError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    let (track_title, problems) = match file {
        DatasetFile::Track {
            track_title,
            problems,
        } => (track_title, problems),
        DatasetFile::Bare(problems) => (None, problems),
    };

    if problems.is_empty() {
        return Err(DatasetError::Empty {
            origin: origin.to_string(),
        });
    }
    let mut seen = HashSet::new();
    if let Some(dup) = problems.iter().find(|p| !seen.insert(p.number)) {
        return Err(DatasetError::DuplicateNumber {
            origin: origin.to_string(),
            number: dup.number,
        });
    }

    let track_title = track_title.unwrap_or_else(|| DEFAULT_TRACK_TITLE.to_string());
    Ok(ProblemSet::new(track_title, problems))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const ONE_PROBLEM: &str = r#"[{
        "id": "a",
        "number": 2,
        "title": "Echo",
        "description": "Print the input.",
        "input_format": "A line.",
        "output_format": "The same line.",
        "sample_test_cases": [{"id": "1", "input": "hi", "expected_output": "hi"}],
        "level": 1,
        "category": "Basics"
    }]"#;

    #[test]
    fn bundled_dataset_parses_with_testcases_everywhere() {
        let set = bundled_problem_set().unwrap();

        assert_eq!(set.len(), 10);
        assert_eq!(set.track_title, "Problem Solving in Python");
        assert!(set.problems().iter().all(|p| !p.sample_test_cases.is_empty()));
    }

    #[test]
    fn bundled_problem_three_has_three_cases() {
        let set = bundled_problem_set().unwrap();

        let problem = set.by_number(3).unwrap();

        assert_eq!(problem.title, "Print Numbers from 1 to N");
        assert_eq!(problem.sample_test_cases.len(), 3);
        assert_eq!(problem.sample_test_cases[0].expected_output, "1 2 3 4 5");
    }

    #[test]
    fn bare_array_uses_default_track_and_optional_fields() {
        let set = parse_problem_set(ONE_PROBLEM, "test").unwrap();

        let problem = set.by_number(2).unwrap();

        assert_eq!(set.track_title, DEFAULT_TRACK_TITLE);
        assert!(problem.constraints.is_empty());
        assert_eq!(problem.starter_code, "");
        assert_eq!(problem.sample_test_cases[0].explanation, None);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let err = parse_problem_set("[]", "test").unwrap_err();

        assert!(matches!(err, DatasetError::Empty { .. }));
    }

    #[test]
    fn duplicate_numbers_are_rejected() {
        let json = format!("[{0}, {0}]", &ONE_PROBLEM[1..ONE_PROBLEM.len() - 1]);

        let err = parse_problem_set(&json, "test").unwrap_err();

        assert!(matches!(err, DatasetError::DuplicateNumber { number: 2, .. }));
    }

    #[test]
    fn malformed_json_names_origin() {
        let err = parse_problem_set("{", "custom.json").unwrap_err();

        assert!(err.to_string().contains("custom.json"));
    }

    #[test]
    fn loads_dataset_from_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), ONE_PROBLEM).unwrap();

        let set = load_problem_set(Some(file.path())).unwrap();

        assert_eq!(set.numbers().collect::<Vec<_>>(), vec![2]);
    }
}
