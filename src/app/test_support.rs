use std::time::Instant;

use crate::app::state::AppState;
use crate::app::workspace::WorkspaceState;
use crate::domain::{Problem, ProblemSet, SampleTestCase};

pub fn sample_problem(number: u32, cases: usize) -> Problem {
    Problem {
        id: number.to_string(),
        number,
        title: format!("Problem {number}"),
        description: "Print all integers from 1 to N.".to_string(),
        input_format: "A single integer N.".to_string(),
        output_format: "Numbers separated by spaces.".to_string(),
        constraints: vec!["1 ≤ N ≤ 1000".to_string()],
        sample_test_cases: (1..=cases)
            .map(|i| SampleTestCase {
                id: i.to_string(),
                input: "5".to_string(),
                expected_output: "1 2 3 4 5".to_string(),
                explanation: (i == 1).then(|| "The input number N is 5.".to_string()),
            })
            .collect(),
        starter_code: "# Write your code here\n\n".to_string(),
        level: 1,
        category: "Looping".to_string(),
    }
}

/// Problems 3 (three cases) and 4 (two cases), starting on 3
pub fn sample_state(now: Instant) -> AppState {
    let problems = ProblemSet::new(
        "Problem Solving in Python".to_string(),
        vec![sample_problem(3, 3), sample_problem(4, 2)],
    );
    AppState::new(problems, sample_problem(3, 3), WorkspaceState::default(), now)
}
