use std::collections::HashSet;

use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::{Point2, Vector2};

#[solution_runner(
    name = "Day 3: Perfectly Spherical Houses in a Vacuum",
    parsed = Moves,
    part_one = Day03,
    part_two = Day03,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<3> {}

const EXAMPLES: &[Example] = &[
    Example {
        input: ">",
        part_one: Some("2"),
        part_two: Some("2"),
    },
    Example {
        input: "^v",
        part_one: Some("2"),
        part_two: Some("3"),
    },
    Example {
        input: "^>v<",
        part_one: Some("4"),
        part_two: Some("3"),
    },
    Example {
        input: "^v^v^v^v^v",
        part_one: Some("2"),
        part_two: Some("11"),
    },
];

/// An error when converting a [`char`] to a [`Direction`].
#[derive(thiserror::Error, Debug)]
enum DirectionCharError {
    #[error("unrecognized direction character {0:?}")]
    UnrecognizedChar(char),
}

/*
Input is a sequence of moves radioed in by an elf at the North Pole: `^` for north, `v` for south,
`<` for west, and `>` for east.
*/

/// A direction a move can send a courier, on an infinite two-dimensional grid of houses.
#[derive(Debug, Clone, Copy)]
enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// The unit step for this direction, with north as positive `y`.
    fn step(self) -> Vector2<i32> {
        match self {
            Self::North => Vector2::new(0, 1),
            Self::South => Vector2::new(0, -1),
            Self::West => Vector2::new(-1, 0),
            Self::East => Vector2::new(1, 0),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = DirectionCharError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '^' => Ok(Self::North),
            'v' => Ok(Self::South),
            '<' => Ok(Self::West),
            '>' => Ok(Self::East),
            _ => Err(DirectionCharError::UnrecognizedChar(value)),
        }
    }
}

#[derive(Debug)]
struct Moves(Vec<Vector2<i32>>);

impl ParseData for Moves {
    fn parse(input: &str) -> DynamicResult<Self> {
        let steps = input
            .chars()
            .filter(|character| !character.is_whitespace())
            .map(|character| Direction::try_from(character).map(Direction::step))
            .collect::<Result<_, _>>()?;

        Ok(Self(steps))
    }
}

impl Moves {
    /// Walk couriers through the moves, taking turns in sequence order, and count the distinct
    /// houses any of them visit.
    ///
    /// Every courier starts at the origin house, which counts as visited.
    fn count_visited_houses(&self, courier_count: usize) -> usize {
        let origin = Point2::new(0, 0);
        let mut couriers = vec![origin; courier_count];
        let mut visited = HashSet::from([origin]);

        for (index, step) in self.0.iter().enumerate() {
            let courier = &mut couriers[index % courier_count];
            *courier += *step;
            visited.insert(*courier);
        }

        visited.len()
    }
}

/*
For part 1, Santa follows every move himself, delivering a present to each house he arrives at
(and to his starting house). Count how many houses receive at least one present.
*/

/*
For part 2, Santa and a present-delivering robot both start at the origin and alternate moves,
with Santa taking the first one. Count how many houses receive at least one present now.
*/

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = Moves;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.count_visited_houses(1))
    }
}

impl Solution<PartTwo> for Day03 {
    type Input = Moves;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.count_visited_houses(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_one_solves_examples() -> DynamicResult<()> {
        for (input, expected) in [(">", 2), ("^v", 2), ("^>v<", 4), ("^v^v^v^v^v", 2)] {
            let parsed = Moves::parse(input)?;
            let result = <Day03 as Solution<PartOne>>::solve(&parsed)?;
            assert_eq!(result, expected, "input {input:?}");
        }
        Ok(())
    }

    #[test]
    fn part_two_solves_examples() -> DynamicResult<()> {
        for (input, expected) in [(">", 2), ("^v", 3), ("^>v<", 3), ("^v^v^v^v^v", 11)] {
            let parsed = Moves::parse(input)?;
            let result = <Day03 as Solution<PartTwo>>::solve(&parsed)?;
            assert_eq!(result, expected, "input {input:?}");
        }
        Ok(())
    }

    #[test]
    fn parse_skips_whitespace() -> DynamicResult<()> {
        let parsed = Moves::parse(">>\n")?;
        assert_eq!(parsed.0.len(), 2);
        Ok(())
    }

    #[test]
    fn parse_rejects_unrecognized_characters() {
        let Err(error) = Moves::parse("^x") else {
            panic!("parse should fail on an unrecognized character");
        };
        assert_eq!(error.to_string(), "unrecognized direction character 'x'");
    }
}
