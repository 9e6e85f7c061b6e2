use std::str::FromStr;

use aoc_framework::parsing::collect_input_lines;
use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "Day 6: Probably a Fire Hazard",
    parsed = Instructions,
    part_one = Day06,
    part_two = Day06,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<6> {}

const EXAMPLES: &[Example] = &[
    Example {
        input: "turn on 0,0 through 999,999
toggle 0,0 through 999,0
turn off 499,499 through 500,500",
        part_one: Some("998996"),
        part_two: Some("1001996"),
    },
    Example {
        input: "turn on 0,0 through 0,0
toggle 0,0 through 999,999",
        part_one: Some("999999"),
        part_two: Some("2000001"),
    },
];

/*
Input is Santa's instructions for a 1000x1000 grid of lights, all starting off. Each line holds an
action (`turn on`, `turn off`, or `toggle`) and the two opposite corners of an inclusive rectangle
of lights, like `turn on 0,0 through 999,999`.
*/

/// The width and height of the light grid.
const GRID_SIZE: usize = 1000;

/// An error when parsing a line as an [`Instruction`].
#[derive(thiserror::Error, Debug)]
enum ParseInstructionError {
    #[error("expected line to start with \"turn on\", \"turn off\", or \"toggle\"")]
    UnrecognizedAction,

    #[error("expected \" through \" separating two corners")]
    MissingThroughSeparator,

    /// Expected a corner as two comma-separated coordinates, with the found token.
    #[error("expected a corner as two comma-separated coordinates, found {0:?}")]
    ExpectedCornerFormat(String),

    #[error(transparent)]
    InvalidCoordinate(#[from] std::num::ParseIntError),

    #[error("coordinate {found} is outside the {GRID_SIZE}x{GRID_SIZE} grid")]
    CoordinateOutOfBounds { found: usize },
}

#[derive(Debug, Clone, Copy)]
enum Action {
    TurnOn,
    TurnOff,
    Toggle,
}

#[derive(Debug)]
struct Instruction {
    action: Action,
    from: (usize, usize),
    to: (usize, usize),
}

fn parse_corner(corner: &str) -> Result<(usize, usize), ParseInstructionError> {
    let Some((x, y)) = corner.split_once(',') else {
        return Err(ParseInstructionError::ExpectedCornerFormat(
            corner.to_owned(),
        ));
    };

    let x: usize = x.trim().parse()?;
    let y: usize = y.trim().parse()?;

    for coordinate in [x, y] {
        if coordinate >= GRID_SIZE {
            return Err(ParseInstructionError::CoordinateOutOfBounds { found: coordinate });
        }
    }

    Ok((x, y))
}

impl FromStr for Instruction {
    type Err = ParseInstructionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (action, corners) = if let Some(rest) = line.strip_prefix("turn on ") {
            (Action::TurnOn, rest)
        } else if let Some(rest) = line.strip_prefix("turn off ") {
            (Action::TurnOff, rest)
        } else if let Some(rest) = line.strip_prefix("toggle ") {
            (Action::Toggle, rest)
        } else {
            return Err(ParseInstructionError::UnrecognizedAction);
        };

        let (from, to) = corners
            .split_once(" through ")
            .ok_or(ParseInstructionError::MissingThroughSeparator)?;

        Ok(Self {
            action,
            from: parse_corner(from)?,
            to: parse_corner(to)?,
        })
    }
}

impl Instruction {
    /// Iterate the flat cell indexes of the inclusive rectangle this instruction covers.
    fn cell_indexes(&self) -> impl Iterator<Item = usize> {
        let (from_x, from_y) = self.from;
        let (to_x, to_y) = self.to;
        let x_range = from_x.min(to_x)..=from_x.max(to_x);

        (from_y.min(to_y)..=from_y.max(to_y))
            .flat_map(move |y| x_range.clone().map(move |x| y * GRID_SIZE + x))
    }
}

#[derive(Debug)]
struct Instructions(Vec<Instruction>);

impl ParseData for Instructions {
    fn parse(input: &str) -> DynamicResult<Self> {
        let instructions = collect_input_lines(input, |_, line| line.parse::<Instruction>())?;
        Ok(Self(instructions))
    }
}

/*
For part 1, apply the instructions literally: `turn on` switches lights on, `turn off` switches
them off, and `toggle` inverts them. Count how many lights are lit afterward.
*/

/*
For part 2, the instructions control brightness instead: `turn on` adds 1, `turn off` subtracts 1
to a minimum of zero, and `toggle` adds 2. Find the total brightness of all lights afterward.
*/

impl Instructions {
    /// Apply the instructions to an all-off grid and count the lit lights.
    fn count_lit(&self) -> usize {
        let mut lights = vec![false; GRID_SIZE * GRID_SIZE];

        for instruction in &self.0 {
            for index in instruction.cell_indexes() {
                let light = &mut lights[index];
                *light = match instruction.action {
                    Action::TurnOn => true,
                    Action::TurnOff => false,
                    Action::Toggle => !*light,
                };
            }
        }

        lights.iter().filter(|&&lit| lit).count()
    }

    /// Apply the instructions to an all-zero grid and total the brightness.
    fn total_brightness(&self) -> u64 {
        let mut brightness = vec![0_u32; GRID_SIZE * GRID_SIZE];

        for instruction in &self.0 {
            for index in instruction.cell_indexes() {
                let cell = &mut brightness[index];
                *cell = match instruction.action {
                    Action::TurnOn => cell.saturating_add(1),
                    Action::TurnOff => cell.saturating_sub(1),
                    Action::Toggle => cell.saturating_add(2),
                };
            }
        }

        brightness
            .iter()
            .map(|&cell| u64::from(cell))
            .checked_sum()
            .expect("should not have integer overflow summing brightness")
    }
}

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = Instructions;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.count_lit())
    }
}

impl Solution<PartTwo> for Day06 {
    type Input = Instructions;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.total_brightness())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"turn on 0,0 through 999,999
toggle 0,0 through 999,0
turn off 499,499 through 500,500
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Instructions::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 998_996);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Instructions::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 1_001_996);
        Ok(())
    }

    #[test]
    fn brightness_clamps_at_zero() -> DynamicResult<()> {
        let parsed = Instructions::parse("turn off 0,0 through 0,0\nturn on 0,0 through 0,0")?;
        let result = <Day06 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 1);
        Ok(())
    }

    #[test]
    fn instruction_covers_inclusive_rectangle() -> DynamicResult<()> {
        let instruction: Instruction = "toggle 2,3 through 3,4".parse()?;
        let indexes: Vec<_> = instruction.cell_indexes().collect();
        assert_eq!(
            indexes,
            [
                3 * GRID_SIZE + 2,
                3 * GRID_SIZE + 3,
                4 * GRID_SIZE + 2,
                4 * GRID_SIZE + 3,
            ]
        );
        Ok(())
    }

    #[test]
    fn parse_rejects_unrecognized_action() {
        let Err(error) = "switch 0,0 through 1,1".parse::<Instruction>() else {
            panic!("parse should fail on an unrecognized action");
        };
        assert_eq!(
            error.to_string(),
            "expected line to start with \"turn on\", \"turn off\", or \"toggle\""
        );
    }

    #[test]
    fn parse_rejects_out_of_bounds_coordinates() {
        let Err(error) = "turn on 0,0 through 1000,0".parse::<Instruction>() else {
            panic!("parse should fail on an out of bounds coordinate");
        };
        assert_eq!(
            error.to_string(),
            "coordinate 1000 is outside the 1000x1000 grid"
        );
    }
}
