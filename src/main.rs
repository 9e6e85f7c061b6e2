#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Error, Result};
use aoc_framework::PartKind;
use aoc_framework::runner::OutputHandler;
use clap::{ArgAction, Parser};

mod checked_product;
mod solutions;

/// Advent of Code 2015 puzzle solver.
#[derive(Parser, Debug)]
struct Cli {
    /// The day's solution to run (e.g. 1, 2, etc).
    day: u8,

    /// Puzzle input files to solve, each printed as its own block of part answers.
    /// With no files given, the day's recorded examples are checked instead.
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Measure and print the durations of parsing and solving parts.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// Minimum duration (in milliseconds) required to print timing.
    /// 0 = always print.
    #[arg(long, value_name = "NUMBER", default_value_t)]
    min_timing_ms: u64,
}

/// Read the given input file to a string.
fn get_input(input_file: &PathBuf) -> Result<String> {
    fs::read_to_string(input_file)
        .with_context(|| format!("could not read input file at: {}", input_file.display()))
}

struct CliOutputHandler {
    /// A minimum duration to filter any outputs of duration by.
    min_duration: Duration,
    /// The last solution name output. Running the same solution over several inputs prints the
    /// name banner once.
    last_name: Option<String>,
}

impl CliOutputHandler {
    fn new(min_duration: Duration) -> Self {
        Self {
            min_duration,
            last_name: None,
        }
    }

    fn format_duration(duration: Duration) -> String {
        const ONE_SECOND: Duration = Duration::from_secs(1);
        const ONE_MILLISECOND: Duration = Duration::from_millis(1);
        const ONE_MICROSECOND: Duration = Duration::from_micros(1);
        const DECIMAL_PLACES: usize = 3;

        if duration >= ONE_SECOND {
            format!("{:.*} seconds", DECIMAL_PLACES, duration.as_secs_f32())
        } else {
            let nanos = duration.subsec_nanos();
            if duration >= ONE_MILLISECOND {
                format!("{:.*} milliseconds", DECIMAL_PLACES, f64::from(nanos) / 1e6)
            } else if duration >= ONE_MICROSECOND {
                format!("{:.*} microseconds", DECIMAL_PLACES, f64::from(nanos) / 1e3)
            } else {
                format!("{nanos} nanoseconds")
            }
        }
    }

    /// Convert an optional duration into a formatted duration, filtering out if the duration is
    /// shorter than the minimum duration.
    fn format_optional_duration_above_min(&self, duration: Option<Duration>) -> Option<String> {
        duration
            .filter(|d| *d >= self.min_duration)
            .map(Self::format_duration)
    }
}

impl OutputHandler for CliOutputHandler {
    fn solution_name(&mut self, name: &str) {
        if self.last_name.as_deref() != Some(name) {
            println!("= {name} =");
            self.last_name = Some(name.to_string());
        }
    }

    fn input_header(&mut self, header: &dyn Display) {
        println!("\n{header}:");
    }

    fn parse_finished(&mut self, duration_opt: Option<Duration>) {
        if let Some(formatted_duration) = self.format_optional_duration_above_min(duration_opt) {
            println!("Input parsed in {formatted_duration}");
        }
    }

    fn part_output(
        &mut self,
        part: PartKind,
        output: &dyn Display,
        duration_opt: Option<Duration>,
    ) {
        if let Some(formatted_duration) = self.format_optional_duration_above_min(duration_opt) {
            println!("{part}: {output} ({formatted_duration})");
        } else {
            println!("{part}: {output}");
        }
    }

    fn check_pass(&mut self, part: PartKind, found: &str) {
        println!("{part}: {found} (matches example)");
    }

    fn check_fail(&mut self, part: PartKind, expected: &str, found: &str) {
        println!("{part}: {found} (expected {expected})");
    }

    fn no_examples(&mut self) {
        println!("no examples recorded for this solution");
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let mut handler = CliOutputHandler::new(Duration::from_millis(args.min_timing_ms));

    if args.inputs.is_empty() {
        return solutions::check_day(args.day, &mut handler).map_err(|dyn_error| {
            let anyhow_error = Error::from_boxed(dyn_error);
            anyhow_error.context("failed solution self-check")
        });
    }

    for input_file in &args.inputs {
        let input_str = get_input(input_file)?;
        solutions::run_day(
            args.day,
            &input_file.display(),
            &input_str,
            &mut handler,
            args.timed,
        )
        .map_err(|dyn_error| {
            let anyhow_error = Error::from_boxed(dyn_error);
            anyhow_error.context("failed to run solution")
        })?;
    }
    Ok(())
}
