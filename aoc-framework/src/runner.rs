//! Functions and traits for running and checking solutions.
//!
//! # Quick Start
//!
//! A structure or impl-block can be annotated with the [`#[solution_runner]`][solution_runner]
//! attribute macro with appropriate properties:
//!
//! ```
//! # use aoc_framework::runner::{solution_runner, Example};
//! # use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};
//! #
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = str;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(_input: &Self::Input) -> DynamicResult<usize> {
//! #        Ok(0)
//! #    }
//! }
//!
//! impl Solution<PartTwo> for Day01 {
//!     type Input = str;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(_input: &Self::Input) -> DynamicResult<usize> {
//! #        Ok(0)
//! #    }
//! }
//!
//! const EXAMPLES: &[Example] = &[Example {
//!     input: "(())",
//!     part_one: Some("0"),
//!     part_two: None,
//! }];
//!
//! #[solution_runner(name = "Day 1", part_one = Day01, part_two = Day01, examples = EXAMPLES)]
//! struct Day01Runner;
//!
//! // or
//!
//! #[solution_runner(name = "Day 1", part_one = Day01, part_two = Day01)]
//! impl Day01 {}
//! ```
//!
//! The generated [`SolutionRunner`] implementation routes [`SolutionRunner::run`] to a `solve_*`
//! driver and [`SolutionRunner::check`] to a `check_*` driver over the recorded examples.

use std::fmt::Display;
use std::time::Duration;

use thiserror::Error;

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

// re-export procedural macro
pub use aoc_framework_macros::solution_runner;

/// A trait for an output events handler.
///
/// When a solution runs or is checked, the steps lead to events to output through a handler as
/// feedback and logging.
pub trait OutputHandler {
    /// Called to output the name of the solution, at the start of running or checking.
    fn solution_name(&mut self, name: &str);

    /// Called before solving an input, with a display identifying the input, like a file path or
    /// an example number.
    fn input_header(&mut self, header: &dyn Display);

    /// Called when parsing input is finished.
    ///
    /// The duration taken to parse is optionally passed.
    fn parse_finished(&mut self, duration_opt: Option<Duration>);

    /// Called when a part finishes to output the result, with a [`PartKind`] to identify the part.
    ///
    /// The duration taken to run the part is optionally passed.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);

    /// Called when a checked part's output matches its recorded expectation.
    fn check_pass(&mut self, part: PartKind, found: &str);

    /// Called when a checked part's output does not match its recorded expectation.
    fn check_fail(&mut self, part: PartKind, expected: &str, found: &str);

    /// Called when a solution is checked but has no recorded examples.
    fn no_examples(&mut self);
}

/// A recorded example input for a solution, with expected outputs.
///
/// Expectations are compared against the [`Display`] rendering of a part's output. A part without
/// a recorded expectation is skipped when checking; some puzzles document an example for only one
/// part, or a part is unreasonable to run against example data.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    /// The example input string.
    pub input: &'static str,
    /// The expected rendered output for part one, if recorded.
    pub part_one: Option<&'static str>,
    /// The expected rendered output for part two, if recorded.
    pub part_two: Option<&'static str>,
}

/// One or more checked example expectations did not match.
#[derive(Error, Debug)]
#[error("{mismatched} of {checked} checked example expectations did not match")]
pub struct ExampleMismatch {
    /// How many part expectations were checked.
    checked: usize,
    /// How many checked expectations did not match.
    mismatched: usize,
}

/// Measure the duration of an expression.
///
/// The macro evaluates the given expression once and returns a tuple of the expression's result and
/// the elapsed [`Duration`][std::time::Duration].
///
/// Note, if the expression has side effects or consumes variables, that will still be part of the
/// measured time.
///
/// # Returns
///
/// A tuple containing the result of the expression and its duration.
macro_rules! measure_duration {
    ($expr:expr) => {{
        let start = ::std::time::Instant::now();
        let result = $expr;
        let elapsed = start.elapsed();
        (result, elapsed)
    }};
}

/// A macro to optionally measure the duration of an expression.
///
/// This macro evaluates the given expression and returns a tuple containing the result of the
/// expression and an optional [`Duration`][std::time::Duration]. If the `$timed` flag evaluates to
/// `true`, the duration of the expression's evaluation is measured and included in the output.
/// If `$timed` evaluates to `false`, the duration will be `None`.
///
/// # Arguments
///
/// - `$expr`: The expression to evaluate and measure.
/// - `$timed`: A boolean flag indicating whether to measure the duration.
///
/// # Returns
///
/// A tuple containing the result of the expression and an optional duration:
/// - If `$timed` is `true`, the duration of the evaluation is included.
/// - If `$timed` is `false`, the duration is `None`.
macro_rules! measure_with_optional_duration {
    ($expr:expr, $timed:expr) => {{
        if $timed {
            let (result, duration) = measure_duration!($expr);
            (result, Some(duration))
        } else {
            ($expr, None)
        }
    }};
}

/// Run a solution part, outputting events through the handler.
///
/// # Arguments
///
/// - `input` - The input data to solve.
/// - `handler` - The output handler to output events to.
/// - `timed` - A flag to measure the time to solve then output the elapsed time to the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let (result, duration_opt) = measure_with_optional_duration!(S::solve(input), timed);
    let output = result?;
    handler.part_output(P::kind(), &output, duration_opt);
    Ok(())
}

/// Run a solution's parse step, outputting events through the handler.
///
/// # Arguments
///
/// - `input` - The input string to parse.
/// - `handler` - The output handler to output events to.
/// - `timed` - A flag to measure the time to parse then output the elapsed time to the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing is propagated.
fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    let (result, duration_opt) = measure_with_optional_duration!(D::parse(input), timed);
    let parsed = result?;
    handler.parse_finished(duration_opt);
    Ok(parsed)
}

/// Run a solution that implements both parts and accepts string input.
///
/// # Arguments
///
/// - `name` - The solution's name to output.
/// - `header` - A display identifying the input, like its file path.
/// - `input` - The input string to solve.
/// - `handler` - The output handler to output events to.
/// - `timed` - A flag to measure the time to solve parts then output the elapsed times to the
///   handler.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution parts is propagated.
pub fn solve_full_solution<S1, S2>(
    name: &str,
    header: &dyn Display,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    handler.solution_name(name);
    handler.input_header(header);
    run_part::<S1, PartOne>(input, handler, timed)?;
    run_part::<S2, PartTwo>(input, handler, timed)
}

/// Run a solution that implements both parts and has a parse data step for input.
///
/// # Arguments
///
/// - `name` - The solution's name to output.
/// - `header` - A display identifying the input, like its file path.
/// - `input` - The input string to solve.
/// - `handler` - The output handler to output events to.
/// - `timed` - A flag to measure the time to parse data & solve parts then output the elapsed times
///   to the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution parts is propagated.
pub fn solve_parsed_full_solution<D, S1, S2>(
    name: &str,
    header: &dyn Display,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    handler.solution_name(name);
    handler.input_header(header);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)?;
    run_part::<S2, PartTwo>(&parsed, handler, timed)
}

/// A running count of checked example expectations and mismatches.
#[derive(Default)]
struct CheckTally {
    checked: usize,
    mismatched: usize,
}

impl CheckTally {
    fn record(&mut self, passed: bool) {
        self.checked = self.checked.saturating_add(1);
        if !passed {
            self.mismatched = self.mismatched.saturating_add(1);
        }
    }

    fn into_result(self) -> DynamicResult<()> {
        if self.mismatched > 0 {
            Err(ExampleMismatch {
                checked: self.checked,
                mismatched: self.mismatched,
            }
            .into())
        } else {
            Ok(())
        }
    }
}

/// Check one part of a solution against an expected rendered output.
///
/// Returns whether the rendered output matched, after outputting the comparison to the handler.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
fn check_part<S, P>(
    input: &S::Input,
    expected: &str,
    handler: &mut dyn OutputHandler,
) -> DynamicResult<bool>
where
    P: Part,
    S: Solution<P>,
{
    let found = S::solve(input)?.to_string();
    if found == expected {
        handler.check_pass(P::kind(), &found);
        Ok(true)
    } else {
        handler.check_fail(P::kind(), expected, &found);
        Ok(false)
    }
}

/// Check a string-input solution against its recorded examples.
///
/// Each example is solved for every part with a recorded expectation and the rendered outputs are
/// compared. If the solution has no examples, the handler is notified and the check passes.
///
/// # Arguments
///
/// - `name` - The solution's name to output.
/// - `examples` - The recorded examples to check against.
/// - `handler` - The output handler to output events to.
///
/// # Errors
///
/// Returns an [`ExampleMismatch`] error if any checked expectation did not match.
///
/// Any dynamically dispatched error from the solution parts is propagated.
pub fn check_full_solution<S1, S2>(
    name: &str,
    examples: &[Example],
    handler: &mut dyn OutputHandler,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    handler.solution_name(name);
    if examples.is_empty() {
        handler.no_examples();
        return Ok(());
    }

    let mut tally = CheckTally::default();
    for (index, example) in examples.iter().enumerate() {
        handler.input_header(&format_args!("example {}", index.saturating_add(1)));
        if let Some(expected) = example.part_one {
            tally.record(check_part::<S1, PartOne>(example.input, expected, handler)?);
        }
        if let Some(expected) = example.part_two {
            tally.record(check_part::<S2, PartTwo>(example.input, expected, handler)?);
        }
    }
    tally.into_result()
}

/// Check a parsed-input solution against its recorded examples.
///
/// Each example input is parsed, then solved for every part with a recorded expectation, and the
/// rendered outputs are compared. If the solution has no examples, the handler is notified and the
/// check passes.
///
/// # Arguments
///
/// - `name` - The solution's name to output.
/// - `examples` - The recorded examples to check against.
/// - `handler` - The output handler to output events to.
///
/// # Errors
///
/// Returns an [`ExampleMismatch`] error if any checked expectation did not match.
///
/// Any dynamically dispatched error from parsing or the solution parts is propagated.
pub fn check_parsed_full_solution<D, S1, S2>(
    name: &str,
    examples: &[Example],
    handler: &mut dyn OutputHandler,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    handler.solution_name(name);
    if examples.is_empty() {
        handler.no_examples();
        return Ok(());
    }

    let mut tally = CheckTally::default();
    for (index, example) in examples.iter().enumerate() {
        handler.input_header(&format_args!("example {}", index.saturating_add(1)));
        let parsed = D::parse(example.input)?;
        if let Some(expected) = example.part_one {
            tally.record(check_part::<S1, PartOne>(&parsed, expected, handler)?);
        }
        if let Some(expected) = example.part_two {
            tally.record(check_part::<S2, PartTwo>(&parsed, expected, handler)?);
        }
    }
    tally.into_result()
}

/// A trait for solutions that can be run and checked.
///
/// The trait can be implemented with the [`solution_runner`] attribute macro.
pub trait SolutionRunner {
    /// Run the solution.
    ///
    /// # Arguments
    ///
    /// - `header` - A display identifying the input, like its file path.
    /// - `input` - The input string to solve.
    /// - `handler` - The output handler to output events to.
    /// - `timed` - A flag to measure the time to process steps then output the elapsed times to the
    ///   handler.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from running the solution is propagated.
    fn run(
        header: &dyn Display,
        input: &str,
        handler: &mut dyn OutputHandler,
        timed: bool,
    ) -> DynamicResult<()>;

    /// Check the solution against its recorded examples.
    ///
    /// # Arguments
    ///
    /// - `handler` - The output handler to output events to.
    ///
    /// # Errors
    ///
    /// An [`ExampleMismatch`] error is returned if any checked expectation did not match.
    ///
    /// Any dynamically dispatched error from running the solution is propagated.
    fn check(handler: &mut dyn OutputHandler) -> DynamicResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A handler recording events as strings for assertions.
    #[derive(Default)]
    struct RecordingHandler {
        events: Vec<String>,
    }

    impl OutputHandler for RecordingHandler {
        fn solution_name(&mut self, name: &str) {
            self.events.push(format!("name {name}"));
        }

        fn input_header(&mut self, header: &dyn Display) {
            self.events.push(format!("header {header}"));
        }

        fn parse_finished(&mut self, _duration_opt: Option<Duration>) {
            self.events.push("parsed".to_string());
        }

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            _duration_opt: Option<Duration>,
        ) {
            self.events.push(format!("{part}: {output}"));
        }

        fn check_pass(&mut self, part: PartKind, found: &str) {
            self.events.push(format!("{part} pass {found}"));
        }

        fn check_fail(&mut self, part: PartKind, expected: &str, found: &str) {
            self.events
                .push(format!("{part} fail expected {expected} found {found}"));
        }

        fn no_examples(&mut self) {
            self.events.push("no examples".to_string());
        }
    }

    /// Reports the count of lines for part one and the count of chars for part two.
    struct Counter;

    impl Solution<PartOne> for Counter {
        type Input = str;
        type Output = usize;

        fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
            Ok(input.lines().count())
        }
    }

    impl Solution<PartTwo> for Counter {
        type Input = str;
        type Output = usize;

        fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
            Ok(input.chars().count())
        }
    }

    #[test]
    fn solve_full_solution_outputs_both_parts() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        solve_full_solution::<Counter, Counter>("Test", &"input", "a\nb\n", &mut handler, false)?;
        assert_eq!(
            handler.events,
            vec!["name Test", "header input", "Part 1: 2", "Part 2: 4"]
        );
        Ok(())
    }

    #[test]
    fn check_full_solution_passes_matching_expectations() -> DynamicResult<()> {
        const EXAMPLES: &[Example] = &[
            Example {
                input: "a\nb\n",
                part_one: Some("2"),
                part_two: Some("4"),
            },
            Example {
                input: "abc",
                part_one: None,
                part_two: Some("3"),
            },
        ];

        let mut handler = RecordingHandler::default();
        check_full_solution::<Counter, Counter>("Test", EXAMPLES, &mut handler)?;
        assert_eq!(
            handler.events,
            vec![
                "name Test",
                "header example 1",
                "Part 1 pass 2",
                "Part 2 pass 4",
                "header example 2",
                "Part 2 pass 3",
            ]
        );
        Ok(())
    }

    #[test]
    fn check_full_solution_errors_on_mismatch() {
        const EXAMPLES: &[Example] = &[Example {
            input: "a\nb\n",
            part_one: Some("3"),
            part_two: Some("4"),
        }];

        let mut handler = RecordingHandler::default();
        let result = check_full_solution::<Counter, Counter>("Test", EXAMPLES, &mut handler);

        let Err(error) = result else {
            panic!("mismatched expectation should error");
        };
        assert_eq!(
            error.to_string(),
            "1 of 2 checked example expectations did not match"
        );
        assert!(
            handler
                .events
                .contains(&"Part 1 fail expected 3 found 2".to_string())
        );
    }

    #[test]
    fn check_without_examples_notifies_handler() -> DynamicResult<()> {
        let mut handler = RecordingHandler::default();
        check_full_solution::<Counter, Counter>("Test", &[], &mut handler)?;
        assert_eq!(handler.events, vec!["name Test", "no examples"]);
        Ok(())
    }
}
