use std::str::FromStr;

use aoc_framework::parsing::{collect_input_lines, parse_with_context};
use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "Day 2: I Was Told There Would Be No Math",
    parsed = PresentList,
    part_one = Day02,
    part_two = Day02,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<2> {}

const EXAMPLES: &[Example] = &[
    Example {
        input: "2x3x4",
        part_one: Some("58"),
        part_two: Some("34"),
    },
    Example {
        input: "1x1x10",
        part_one: Some("43"),
        part_two: Some("14"),
    },
    Example {
        input: "2x3x4\n1x1x10\n",
        part_one: Some("101"),
        part_two: Some("48"),
    },
];

/*
Input lists the dimensions of presents to wrap, one per line as `LxWxH` in feet, like `2x3x4`.
*/

/// A present's box dimensions in feet.
#[derive(Debug, Clone, Copy)]
struct Present {
    length: u32,
    width: u32,
    height: u32,
}

#[derive(thiserror::Error, Debug)]
enum ParsePresentError {
    #[error("expected exactly 3 dimensions delimited by \"x\"")]
    ExpectedThreeDimensions,

    #[error("invalid dimension number")]
    InvalidDimension(#[from] std::num::ParseIntError),
}

impl FromStr for Present {
    type Err = ParsePresentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut dimensions = s.splitn(4, 'x');
        let (Some(length), Some(width), Some(height), None) = (
            dimensions.next(),
            dimensions.next(),
            dimensions.next(),
            dimensions.next(),
        ) else {
            return Err(ParsePresentError::ExpectedThreeDimensions);
        };

        Ok(Self {
            length: length.parse()?,
            width: width.parse()?,
            height: height.parse()?,
        })
    }
}

/// The input's list of presents.
struct PresentList(Vec<Present>);

impl ParseData for PresentList {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let presents = collect_input_lines(input, |_, line| parse_with_context::<Present>(line))?;
        Ok(Self(presents))
    }
}

/*
For part 1, the elves need wrapping paper for every present: the surface area of the box, plus
slack equal to the area of the smallest side. Calculate the total square feet to order.
*/

impl Present {
    /// The two smallest side lengths, ascending.
    fn smallest_sides(&self) -> (u64, u64) {
        let mut dimensions = [self.length, self.width, self.height];
        dimensions.sort_unstable();
        (u64::from(dimensions[0]), u64::from(dimensions[1]))
    }

    /// Square feet of wrapping paper needed: surface area plus the smallest side's area as slack.
    fn paper_needed(&self) -> u64 {
        let (length, width, height) = (
            u64::from(self.length),
            u64::from(self.width),
            u64::from(self.height),
        );
        let (smallest, second_smallest) = self.smallest_sides();

        2 * length * width + 2 * width * height + 2 * height * length + smallest * second_smallest
    }
}

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = PresentList;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let total = input
            .0
            .iter()
            .map(Present::paper_needed)
            .checked_sum()
            .expect("should not have integer overflow summing paper");
        Ok(total)
    }
}

/*
For part 2, the elves also need ribbon: the smallest perimeter around the box, plus the box's
volume in feet for the bow. Calculate the total feet of ribbon to order.
*/

impl Present {
    /// Feet of ribbon needed: the smallest face perimeter plus the volume for the bow.
    fn ribbon_needed(&self) -> u64 {
        let (smallest, second_smallest) = self.smallest_sides();
        let volume = u64::from(self.length) * u64::from(self.width) * u64::from(self.height);

        2 * smallest + 2 * second_smallest + volume
    }
}

impl Solution<PartTwo> for Day02 {
    type Input = PresentList;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let total = input
            .0
            .iter()
            .map(Present::ribbon_needed)
            .checked_sum()
            .expect("should not have integer overflow summing ribbon");
        Ok(total)
    }
}
