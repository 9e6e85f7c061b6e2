use aoc_framework::parsing::{collect_input_lines, parse_with_context};
use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use itertools::Itertools;

#[solution_runner(
    name = "Day 17: No Such Thing as Too Much",
    parsed = Containers,
    part_one = Day17,
    part_two = Day17,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<17> {}

const EXAMPLES: &[Example] = &[Example {
    input: "150
100
50
50
25",
    part_one: Some("3"),
    part_two: Some("1"),
}];

/*
Input is the inventory of nog containers, one capacity in liters per line. There are no partial
fills: a container is used completely or not at all.
*/

/// How much eggnog needs storing, in liters.
const STORED_LITERS: u32 = 150;

#[derive(thiserror::Error, Debug)]
enum Day17Error {
    #[error("no combination of containers holds exactly {liters} liters")]
    NoExactFit { liters: u32 },
}

/// The container inventory, in input order.
#[derive(Debug)]
struct Containers {
    sizes: Vec<u32>,
}

impl ParseData for Containers {
    fn parse(input: &str) -> DynamicResult<Self> {
        let sizes = collect_input_lines(input, |_, line| parse_with_context::<u32>(line))?;
        Ok(Self { sizes })
    }
}

impl Containers {
    /// Iterate the container counts of every combination that holds `liters` exactly. Containers
    /// of equal size are still different containers.
    fn exact_fit_sizes(&self, liters: u32) -> impl Iterator<Item = usize> {
        self.sizes
            .iter()
            .powerset()
            .filter(move |combination| {
                let held: u64 = combination.iter().map(|&&size| u64::from(size)).sum();
                held == u64::from(liters)
            })
            .map(|combination| combination.len())
    }

    /// How many combinations of containers hold `liters` exactly.
    fn combination_count(&self, liters: u32) -> usize {
        self.exact_fit_sizes(liters).count()
    }

    /// How many combinations use the minimum number of containers that can hold `liters` exactly.
    fn minimum_combination_count(&self, liters: u32) -> Result<usize, Day17Error> {
        let fit_sizes: Vec<usize> = self.exact_fit_sizes(liters).collect();
        let minimum = fit_sizes
            .iter()
            .min()
            .copied()
            .ok_or(Day17Error::NoExactFit { liters })?;

        Ok(fit_sizes.iter().filter(|&&size| size == minimum).count())
    }
}

/*
For part 1, count the different combinations of containers that hold exactly 150 liters of
eggnog.
*/

/*
For part 2, find the minimum number of containers that can hold exactly 150 liters, and count how
many combinations use exactly that many.
*/

struct Day17;

impl Solution<PartOne> for Day17 {
    type Input = Containers;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.combination_count(STORED_LITERS))
    }
}

impl Solution<PartTwo> for Day17 {
    type Input = Containers;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.minimum_combination_count(STORED_LITERS)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_containers_fit_four_ways() -> DynamicResult<()> {
        let parsed = Containers::parse("20\n15\n10\n5\n5\n")?;
        assert_eq!(parsed.combination_count(25), 4);
        Ok(())
    }

    #[test]
    fn minimum_containers_fit_three_ways() -> DynamicResult<()> {
        let parsed = Containers::parse("20\n15\n10\n5\n5\n")?;
        assert_eq!(parsed.minimum_combination_count(25)?, 3);
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Containers::parse("150\n100\n50\n50\n25\n")?;
        let result = <Day17 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 3);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Containers::parse("150\n100\n50\n50\n25\n")?;
        let result = <Day17 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 1);
        Ok(())
    }

    #[test]
    fn equal_containers_are_distinct() -> DynamicResult<()> {
        let parsed = Containers::parse("5\n5\n")?;
        assert_eq!(parsed.combination_count(5), 2);
        assert_eq!(parsed.combination_count(10), 1);
        Ok(())
    }

    #[test]
    fn unfillable_targets_error() -> DynamicResult<()> {
        let parsed = Containers::parse("3\n")?;
        assert_eq!(parsed.combination_count(25), 0);

        let Err(error) = parsed.minimum_combination_count(25) else {
            panic!("the minimum should not exist when nothing fits");
        };
        assert_eq!(error.to_string(), "no combination of containers holds exactly 25 liters");
        Ok(())
    }

    #[test]
    fn parse_rejects_non_numeric_capacities() {
        let Err(error) = Containers::parse("20\nfifteen\n") else {
            panic!("parse should fail on a non-numeric capacity");
        };
        assert_eq!(error.to_string(), "failure parsing line 2");
    }
}
