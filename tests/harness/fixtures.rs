use codepane::domain::{Problem, ProblemSet, SampleTestCase};

fn case(id: &str, input: &str, expected: &str, explanation: Option<&str>) -> SampleTestCase {
    SampleTestCase {
        id: id.to_string(),
        input: input.to_string(),
        expected_output: expected.to_string(),
        explanation: explanation.map(str::to_string),
    }
}

pub fn print_numbers() -> Problem {
    Problem {
        id: "print-numbers".to_string(),
        number: 3,
        title: "Print Numbers from 1 to N".to_string(),
        description: "Write a program that prints all numbers from 1 to N.".to_string(),
        input_format: "A single integer N.".to_string(),
        output_format: "Numbers from 1 to N separated by spaces.".to_string(),
        constraints: vec!["1 ≤ N ≤ 100".to_string()],
        sample_test_cases: vec![
            case("1", "5", "1 2 3 4 5", Some("The input number N is 5.")),
            case("2", "10", "1 2 3 4 5 6 7 8 9 10", None),
            case("3", "5", "1 2 3 4 5", None),
        ],
        starter_code: "# Write your code here\n\n".to_string(),
        level: 1,
        category: "Looping".to_string(),
    }
}

pub fn sum_of_digits() -> Problem {
    Problem {
        id: "sum-of-digits".to_string(),
        number: 4,
        title: "Sum of Digits".to_string(),
        description: "Print the sum of the digits of N.".to_string(),
        input_format: "A single integer N.".to_string(),
        output_format: "The digit sum.".to_string(),
        constraints: vec![],
        sample_test_cases: vec![case("1", "123", "6", None), case("2", "9", "9", None)],
        starter_code: "n = int(input())\n".to_string(),
        level: 2,
        category: "Math".to_string(),
    }
}

pub fn sample_problem_set() -> ProblemSet {
    ProblemSet::new(
        "Problem Solving in Python".to_string(),
        vec![print_numbers(), sum_of_digits()],
    )
}
