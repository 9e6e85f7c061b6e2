use std::collections::HashMap;

use aoc_framework::parsing::collect_input_lines;
use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use itertools::Itertools;
use petgraph::graph::{DiGraph, NodeIndex};
use regex::Regex;

#[solution_runner(
    name = "Day 13: Knights of the Dinner Table",
    parsed = SeatingChart,
    part_one = Day13,
    part_two = Day13,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<13> {}

const EXAMPLES: &[Example] = &[Example {
    input: "Alice would gain 54 happiness units by sitting next to Bob.
Alice would lose 79 happiness units by sitting next to Carol.
Alice would lose 2 happiness units by sitting next to David.
Bob would gain 83 happiness units by sitting next to Alice.
Bob would lose 7 happiness units by sitting next to Carol.
Bob would lose 63 happiness units by sitting next to David.
Carol would lose 62 happiness units by sitting next to Alice.
Carol would gain 60 happiness units by sitting next to Bob.
Carol would gain 55 happiness units by sitting next to David.
David would gain 46 happiness units by sitting next to Alice.
David would lose 7 happiness units by sitting next to Bob.
David would gain 41 happiness units by sitting next to Carol.",
    part_one: Some("330"),
    part_two: Some("286"),
}];

/*
Input is the guest list for the holiday feast: one line per directed feeling, like `Alice would
gain 54 happiness units by sitting next to Bob.`. Each guest's feeling about each other guest is
listed separately, so a pair of neighbors changes the total happiness twice.
*/

/// An error when parsing a line as a [`Preference`].
#[derive(thiserror::Error, Debug)]
enum ParsePreferenceError {
    #[error(
        "expected a preference like \"Alice would gain 54 happiness units by sitting next to \
         Bob.\", found {0:?}"
    )]
    UnrecognizedLine(String),

    #[error(transparent)]
    InvalidAmount(#[from] std::num::ParseIntError),
}

/// An error when building or searching the seating chart.
#[derive(thiserror::Error, Debug)]
enum SeatingError {
    #[error("preference of {guest:?} next to {neighbor:?} is given more than once")]
    DuplicatePreference { guest: String, neighbor: String },

    #[error("no preference of {guest:?} next to {neighbor:?} is given")]
    MissingPreference { guest: String, neighbor: String },

    #[error("seating the table needs at least two guests")]
    NotEnoughGuests,
}

/// One guest's happiness change from sitting next to one neighbor.
#[derive(Debug)]
struct Preference {
    guest: String,
    neighbor: String,
    change: i64,
}

/// Parser to extract a [`Preference`] from an input line.
struct PreferenceParser {
    line_re: Regex,
}

impl PreferenceParser {
    fn new() -> Self {
        Self {
            line_re: Regex::new(
                r"^(\w+) would (gain|lose) (\d+) happiness units by sitting next to (\w+)\.$",
            )
            .expect("preference pattern should be valid"),
        }
    }

    fn parse(&self, line: &str) -> Result<Preference, ParsePreferenceError> {
        let captures = self
            .line_re
            .captures(line)
            .ok_or_else(|| ParsePreferenceError::UnrecognizedLine(line.to_owned()))?;

        let amount: i64 = captures
            .get(3)
            .expect("amount should be in capture group 3")
            .as_str()
            .parse()?;
        let change = match captures
            .get(2)
            .expect("direction should be in capture group 2")
            .as_str()
        {
            "gain" => amount,
            // the pattern admits only "gain" or "lose"
            _ => -amount,
        };

        Ok(Preference {
            guest: captures
                .get(1)
                .expect("guest should be in capture group 1")
                .as_str()
                .to_owned(),
            neighbor: captures
                .get(4)
                .expect("neighbor should be in capture group 4")
                .as_str()
                .to_owned(),
            change,
        })
    }
}

/// The invited guests, with happiness changes as directed edge weights.
#[derive(Debug)]
struct SeatingChart(DiGraph<String, i64>);

impl ParseData for SeatingChart {
    fn parse(input: &str) -> DynamicResult<Self> {
        fn intern(
            graph: &mut DiGraph<String, i64>,
            guests: &mut HashMap<String, NodeIndex>,
            name: String,
        ) -> NodeIndex {
            *guests
                .entry(name)
                .or_insert_with_key(|name| graph.add_node(name.clone()))
        }

        let parser = PreferenceParser::new();
        let preferences: Vec<Preference> =
            collect_input_lines(input, |_, line| parser.parse(line))?;

        let mut graph = DiGraph::new();
        let mut guests = HashMap::new();

        for preference in preferences {
            let guest = intern(&mut graph, &mut guests, preference.guest);
            let neighbor = intern(&mut graph, &mut guests, preference.neighbor);

            if graph.find_edge(guest, neighbor).is_some() {
                return Err(SeatingError::DuplicatePreference {
                    guest: graph[guest].clone(),
                    neighbor: graph[neighbor].clone(),
                }
                .into());
            }
            graph.add_edge(guest, neighbor, preference.change);
        }

        Ok(Self(graph))
    }
}

impl SeatingChart {
    /// Both directed happiness changes between two guests seated next to each other.
    fn adjacent_happiness(
        &self,
        guest: NodeIndex,
        neighbor: NodeIndex,
    ) -> Result<i64, SeatingError> {
        let mut total = 0_i64;
        for (from, to) in [(guest, neighbor), (neighbor, guest)] {
            let edge =
                self.0
                    .find_edge(from, to)
                    .ok_or_else(|| SeatingError::MissingPreference {
                        guest: self.0[from].clone(),
                        neighbor: self.0[to].clone(),
                    })?;
            total = total
                .checked_add(self.0[edge])
                .expect("should not have integer overflow summing happiness");
        }
        Ok(total)
    }

    /// The best total happiness change over every seating around the circular table.
    fn best_happiness(&self) -> Result<i64, SeatingError> {
        let guest_count = self.0.node_count();
        if guest_count < 2 {
            return Err(SeatingError::NotEnoughGuests);
        }

        let mut best = None;
        for seating in self.0.node_indices().permutations(guest_count) {
            let mut total = 0_i64;
            for (guest, neighbor) in seating.iter().copied().circular_tuple_windows() {
                total = total
                    .checked_add(self.adjacent_happiness(guest, neighbor)?)
                    .expect("should not have integer overflow summing happiness");
            }
            best = Some(best.map_or(total, |best_so_far: i64| best_so_far.max(total)));
        }

        Ok(best.expect("two or more guests should have at least one seating"))
    }

    /// The same chart with an apathetic host seated: zero-change preferences both ways between
    /// the host and every guest.
    fn with_host(&self) -> Self {
        let mut graph = self.0.clone();
        let guests: Vec<NodeIndex> = graph.node_indices().collect();
        let host = graph.add_node("Host".to_owned());

        for guest in guests {
            graph.add_edge(host, guest, 0);
            graph.add_edge(guest, host, 0);
        }

        Self(graph)
    }
}

/*
For part 1, seat everyone around the circular table so the total happiness change is as high as
possible, and find that total. The table is round: everyone has exactly two neighbors, including
the first and last guests listed.
*/

/*
For part 2, seat yourself too. You are a model host: your happiness never changes, and nobody's
happiness changes from sitting next to you. Find the new best total.
*/

struct Day13;

impl Solution<PartOne> for Day13 {
    type Input = SeatingChart;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.best_happiness()?)
    }
}

impl Solution<PartTwo> for Day13 {
    type Input = SeatingChart;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.with_host().best_happiness()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "Alice would gain 54 happiness units by sitting next to Bob.
Alice would lose 79 happiness units by sitting next to Carol.
Alice would lose 2 happiness units by sitting next to David.
Bob would gain 83 happiness units by sitting next to Alice.
Bob would lose 7 happiness units by sitting next to Carol.
Bob would lose 63 happiness units by sitting next to David.
Carol would lose 62 happiness units by sitting next to Alice.
Carol would gain 60 happiness units by sitting next to Bob.
Carol would gain 55 happiness units by sitting next to David.
David would gain 46 happiness units by sitting next to Alice.
David would lose 7 happiness units by sitting next to Bob.
David would gain 41 happiness units by sitting next to Carol.
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = SeatingChart::parse(EXAMPLE_INPUT)?;
        let result = <Day13 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 330);
        Ok(())
    }

    #[test]
    fn part_two_seats_the_host() -> DynamicResult<()> {
        let parsed = SeatingChart::parse(EXAMPLE_INPUT)?;
        let result = <Day13 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 286);
        Ok(())
    }

    #[test]
    fn two_guests_neighbor_each_other_on_both_sides() -> DynamicResult<()> {
        let parsed = SeatingChart::parse(
            "Alice would gain 10 happiness units by sitting next to Bob.\n\
             Bob would lose 3 happiness units by sitting next to Alice.",
        )?;
        assert_eq!(<Day13 as Solution<PartOne>>::solve(&parsed)?, 14);
        Ok(())
    }

    #[test]
    fn missing_preferences_error() -> DynamicResult<()> {
        let parsed = SeatingChart::parse(
            "Alice would gain 1 happiness units by sitting next to Bob.\n\
             Bob would gain 1 happiness units by sitting next to Alice.\n\
             Alice would gain 1 happiness units by sitting next to Carol.\n\
             Carol would gain 1 happiness units by sitting next to Alice.\n\
             Carol would gain 1 happiness units by sitting next to Bob.",
        )?;
        let Err(error) = <Day13 as Solution<PartOne>>::solve(&parsed) else {
            panic!("solve should fail when a directed preference is missing");
        };
        assert_eq!(
            error.to_string(),
            "no preference of \"Bob\" next to \"Carol\" is given"
        );
        Ok(())
    }

    #[test]
    fn duplicate_preferences_error() {
        let Err(error) = SeatingChart::parse(
            "Alice would gain 1 happiness units by sitting next to Bob.\n\
             Alice would lose 2 happiness units by sitting next to Bob.",
        ) else {
            panic!("parse should fail when a directed preference repeats");
        };
        assert_eq!(
            error.to_string(),
            "preference of \"Alice\" next to \"Bob\" is given more than once"
        );
    }

    #[test]
    fn empty_guest_lists_error() -> DynamicResult<()> {
        let parsed = SeatingChart::parse("")?;
        let Err(error) = <Day13 as Solution<PartOne>>::solve(&parsed) else {
            panic!("solve should fail without guests to seat");
        };
        assert_eq!(error.to_string(), "seating the table needs at least two guests");
        Ok(())
    }

    #[test]
    fn parse_rejects_malformed_preferences() {
        let parser = PreferenceParser::new();
        let Err(error) = parser.parse("Alice would gain 54 happiness units by sitting next to Bob")
        else {
            panic!("parse should fail without the closing period");
        };
        assert_eq!(
            error.to_string(),
            "expected a preference like \"Alice would gain 54 happiness units by sitting next to \
             Bob.\", found \"Alice would gain 54 happiness units by sitting next to Bob\""
        );
    }
}
