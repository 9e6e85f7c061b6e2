use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};
use thiserror::Error;

#[solution_runner(
    name = "Day 1: Not Quite Lisp",
    part_one = Day01,
    part_two = Day01,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<1> {}

const EXAMPLES: &[Example] = &[
    Example {
        input: "(())",
        part_one: Some("0"),
        part_two: None,
    },
    Example {
        input: ")())())",
        part_one: Some("-3"),
        part_two: Some("1"),
    },
    Example {
        input: "()())",
        part_one: Some("-1"),
        part_two: Some("5"),
    },
];

#[derive(Error, Debug)]
enum Day01Error {
    #[error("the instructions never enter the basement")]
    BasementNeverEntered,
}

/*
Input is a line of parentheses directing Santa through an apartment building: `(` goes up one
floor, `)` goes down one. Santa starts on floor 0. Any other character directs nothing.

For part 1, report the floor the instructions leave Santa on.
*/

/// The floor change directed by an instruction character, if it directs one.
fn floor_step(instruction: char) -> Option<i32> {
    match instruction {
        '(' => Some(1),
        ')' => Some(-1),
        _ => None,
    }
}

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = str;
    type Output = i32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.chars().filter_map(floor_step).sum())
    }
}

/*
For part 2, report the position of the instruction that first puts Santa in the basement (any floor
below 0). Positions are one-based and count only instruction characters.

> The instructions are expected to enter the basement at some point; never entering is an error.
*/

impl Solution<PartTwo> for Day01 {
    type Input = str;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut floor = 0;
        for (index, step) in input.chars().filter_map(floor_step).enumerate() {
            floor += step;
            if floor < 0 {
                return Ok(index + 1);
            }
        }
        Err(Day01Error::BasementNeverEntered.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_one_solves_examples() -> DynamicResult<()> {
        for (instructions, floor) in [
            ("(())", 0),
            ("()()", 0),
            ("(((", 3),
            ("(()(()(", 3),
            ("))(((((", 3),
            ("())", -1),
            ("))(", -1),
            (")))", -3),
            (")())())", -3),
        ] {
            assert_eq!(<Day01 as Solution<PartOne>>::solve(instructions)?, floor);
        }
        Ok(())
    }

    #[test]
    fn part_two_solves_examples() -> DynamicResult<()> {
        assert_eq!(<Day01 as Solution<PartTwo>>::solve(")")?, 1);
        assert_eq!(<Day01 as Solution<PartTwo>>::solve("()())")?, 5);
        Ok(())
    }

    #[test]
    fn part_two_errors_when_basement_never_entered() {
        let result = <Day01 as Solution<PartTwo>>::solve("(())");
        assert!(result.is_err());
    }

    #[test]
    fn unrecognized_characters_direct_nothing() -> DynamicResult<()> {
        assert_eq!(<Day01 as Solution<PartOne>>::solve("(x(\n)")?, 1);
        Ok(())
    }
}
