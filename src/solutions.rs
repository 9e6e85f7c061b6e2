//! Solutions implemented for Advent of Code 2015.
//!
//! This module provides [`run_day`] to dynamically run a solution by its day, and [`check_day`]
//! to check a day's solution against its recorded examples.
//!
//! Steps to make a solution available to run:
//! 1. Make a submodule to hold the solution implementation.
//! 2. Have the submodule implement [`AdventOfCode2015<DAY>`] for its day as a [`SolutionRunner`].
//! 3. Import the submodule below `IMPORT SUBMODULES HERE`
//! 4. Add match cases to run and check [`AdventOfCode2015<DAY>`] for the day, below each
//!    `MATCH SOLUTIONS HERE`:
//!
//! ```ignore
//! // matching for day 1
//! 1 => AdventOfCode2015::<1>::run(header, input, handler, timed),
//! // and in check_day
//! 1 => AdventOfCode2015::<1>::check(handler),
//! ```

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use std::fmt::Display;

use aoc_framework::DynamicResult;
use aoc_framework::runner::{OutputHandler, SolutionRunner};
use thiserror::Error;

// --- IMPORT SUBMODULES HERE ---
mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
mod day12;
mod day13;
mod day14;
mod day15;
mod day16;
mod day17;
mod day18;

/// A structure collecting solutions by day.
///
/// In a submodule, implement this as a [`SolutionRunner`] for the day.
///
/// Use [`#[solution_runner]`][aoc_framework::runner::solution_runner] for convenience:
///
/// ```ignore
/// // in a submodule "day01.rs"
/// use aoc_framework::runner::solution_runner;
/// use aoc_framework::{PartOne, PartTwo, Solution};
///
/// struct Day01;
/// impl Solution<PartOne> for Day01 {
///     /* ... */
/// }
/// impl Solution<PartTwo> for Day01 {
///     /* ... */
/// }
///
/// #[solution_runner(name = "Day 1", part_one = Day01, part_two = Day01)]
/// impl super::AdventOfCode2015<1> {}
/// ```
struct AdventOfCode2015<const DAY: u8>;

/// A solution for a day is not available.
#[derive(Error, Debug)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(u8);

/// Run a solution based on the day.
///
/// # Errors
///
/// If the solution for the given day is not available, a [`DayNotAvailable`] error is returned.
///
/// Any dynamically dispatched error from running the solution is propagated.
pub fn run_day(
    day: u8,
    header: &dyn Display,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    match day {
        // --- MATCH SOLUTIONS HERE ---
        1 => AdventOfCode2015::<1>::run(header, input, handler, timed),
        2 => AdventOfCode2015::<2>::run(header, input, handler, timed),
        3 => AdventOfCode2015::<3>::run(header, input, handler, timed),
        4 => AdventOfCode2015::<4>::run(header, input, handler, timed),
        5 => AdventOfCode2015::<5>::run(header, input, handler, timed),
        6 => AdventOfCode2015::<6>::run(header, input, handler, timed),
        7 => AdventOfCode2015::<7>::run(header, input, handler, timed),
        8 => AdventOfCode2015::<8>::run(header, input, handler, timed),
        9 => AdventOfCode2015::<9>::run(header, input, handler, timed),
        10 => AdventOfCode2015::<10>::run(header, input, handler, timed),
        11 => AdventOfCode2015::<11>::run(header, input, handler, timed),
        12 => AdventOfCode2015::<12>::run(header, input, handler, timed),
        13 => AdventOfCode2015::<13>::run(header, input, handler, timed),
        14 => AdventOfCode2015::<14>::run(header, input, handler, timed),
        15 => AdventOfCode2015::<15>::run(header, input, handler, timed),
        16 => AdventOfCode2015::<16>::run(header, input, handler, timed),
        17 => AdventOfCode2015::<17>::run(header, input, handler, timed),
        18 => AdventOfCode2015::<18>::run(header, input, handler, timed),
        _ => Err(DayNotAvailable(day).into()),
    }
}

/// Check a day's solution against its recorded examples.
///
/// # Errors
///
/// If the solution for the given day is not available, a [`DayNotAvailable`] error is returned.
///
/// An [`ExampleMismatch`][aoc_framework::runner::ExampleMismatch] error is returned if any checked
/// expectation did not match.
///
/// Any dynamically dispatched error from running the solution is propagated.
pub fn check_day(day: u8, handler: &mut dyn OutputHandler) -> DynamicResult<()> {
    match day {
        // --- MATCH SOLUTIONS HERE ---
        1 => AdventOfCode2015::<1>::check(handler),
        2 => AdventOfCode2015::<2>::check(handler),
        3 => AdventOfCode2015::<3>::check(handler),
        4 => AdventOfCode2015::<4>::check(handler),
        5 => AdventOfCode2015::<5>::check(handler),
        6 => AdventOfCode2015::<6>::check(handler),
        7 => AdventOfCode2015::<7>::check(handler),
        8 => AdventOfCode2015::<8>::check(handler),
        9 => AdventOfCode2015::<9>::check(handler),
        10 => AdventOfCode2015::<10>::check(handler),
        11 => AdventOfCode2015::<11>::check(handler),
        12 => AdventOfCode2015::<12>::check(handler),
        13 => AdventOfCode2015::<13>::check(handler),
        14 => AdventOfCode2015::<14>::check(handler),
        15 => AdventOfCode2015::<15>::check(handler),
        16 => AdventOfCode2015::<16>::check(handler),
        17 => AdventOfCode2015::<17>::check(handler),
        18 => AdventOfCode2015::<18>::check(handler),
        _ => Err(DayNotAvailable(day).into()),
    }
}
