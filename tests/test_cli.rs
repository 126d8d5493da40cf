use std::io::Cursor;

use stat_calc::cli::{run, Outcome};
use stat_calc::config::Config;

fn session(config: &Config, input: &str) -> (Outcome, String) {
    let mut output = Vec::new();
    let outcome = run(config, Cursor::new(input.to_string()), &mut output).unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn full_report() {
    let (outcome, output) = session(&Config::default(), "3 1 4 1 5 9 2 6\n");

    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(
        output,
        "=== Statistics Calculator (Rust) ===\n\n\
         Enter a list of integers separated by spaces: \
         Input data: [3, 1, 4, 1, 5, 9, 2, 6]\n\n\
         Mean: 3.88\n\
         Median: 3.50\n\
         Mode: [1]\n"
    );
}

#[test]
fn empty_line() {
    let (outcome, output) = session(&Config::default(), "\n");

    assert_eq!(outcome, Outcome::NoInput);
    assert_eq!(outcome.exit_code(), 1);
    assert!(output.ends_with("No valid integers entered.\n"));
    assert!(!output.contains("Mean:"));
}

#[test]
fn end_of_input() {
    let (outcome, _) = session(&Config::default(), "");

    assert_eq!(outcome, Outcome::NoInput);
}

#[test]
fn flat_distribution() {
    let (_, output) = session(&Config::default(), "1 1 2 2");

    assert!(output.contains("Median: 1.50\n"));
    assert!(output.ends_with("Mode: No mode (all values occur equally)\n"));
}

#[test]
fn malformed_tokens_count_as_zero() {
    let (outcome, output) = session(&Config::default(), "abc 4x -2 0\n");

    assert!(output.contains("Input data: [0, 4, -2, 0]\n"));
    assert!(output.contains("Mean: 0.50\n"));
    assert!(output.contains("Median: 0.00\n"));
    assert!(output.ends_with("Mode: [0]\n"));
    match outcome {
        Outcome::Reported(report) => assert_eq!(report.summary().modes.values(), &[0]),
        Outcome::NoInput => panic!("expected a report"),
    }
}

#[test]
fn max_inputs_truncates() {
    let config = Config::builder().max_inputs(4).build();
    let (_, output) = session(&config, "10 20 30 40 50 60\n");

    assert!(output.contains("Input data: [10, 20, 30, 40]\n"));
    assert!(output.contains("Mean: 25.00\n"));
    assert!(output.contains("Median: 25.00\n"));
}

#[test]
fn default_limit_is_one_thousand() {
    let input = (0..1200).map(|n| n.to_string()).collect::<Vec<_>>().join(" ");
    let (outcome, _) = session(&Config::default(), &input);

    match outcome {
        Outcome::Reported(report) => assert_eq!(report.sample().len(), 1000),
        Outcome::NoInput => panic!("expected a report"),
    }
}

#[test]
fn custom_banner_and_prompt() {
    let config = Config::builder().banner("stats").prompt("> ").build();
    let (_, output) = session(&config, "5 5 6\n");

    assert!(output.starts_with("stats\n\n> Input data: [5, 5, 6]\n"));
}
