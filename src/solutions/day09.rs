use std::collections::HashMap;
use std::str::FromStr;

use aoc_framework::parsing::collect_input_lines;
use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};

#[solution_runner(
    name = "Day 9: All in a Single Night",
    parsed = RouteMap,
    part_one = Day09,
    part_two = Day09,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<9> {}

const EXAMPLES: &[Example] = &[Example {
    input: "London to Dublin = 464
London to Belfast = 518
Dublin to Belfast = 141",
    part_one: Some("605"),
    part_two: Some("982"),
}];

/*
Input is the list of distances between every pair of locations Santa must visit, like
`London to Dublin = 464`. Distances are the same in both directions.
*/

/// An error when parsing a line as a [`Leg`].
#[derive(thiserror::Error, Debug)]
enum ParseLegError {
    #[error("expected \" = \" separating the route from its distance")]
    MissingDistanceSeparator,

    #[error("expected \" to \" separating the route's locations")]
    MissingToSeparator,

    #[error(transparent)]
    InvalidDistance(#[from] std::num::ParseIntError),
}

/// An error when building or searching the route map.
#[derive(thiserror::Error, Debug)]
enum Day09Error {
    #[error("distance between {from:?} and {to:?} is given more than once")]
    DuplicateLeg { from: String, to: String },

    #[error("no route visits every location exactly once")]
    NoCompleteRoute,
}

/// One `A to B = distance` line.
#[derive(Debug)]
struct Leg {
    from: String,
    to: String,
    distance: u32,
}

impl FromStr for Leg {
    type Err = ParseLegError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let Some((route, distance)) = line.split_once(" = ") else {
            return Err(ParseLegError::MissingDistanceSeparator);
        };
        let Some((from, to)) = route.split_once(" to ") else {
            return Err(ParseLegError::MissingToSeparator);
        };

        Ok(Self {
            from: from.to_owned(),
            to: to.to_owned(),
            distance: distance.trim().parse()?,
        })
    }
}

/// The locations to visit, with distances as undirected edge weights.
#[derive(Debug)]
struct RouteMap(UnGraph<String, u32>);

impl ParseData for RouteMap {
    fn parse(input: &str) -> DynamicResult<Self> {
        fn intern(
            graph: &mut UnGraph<String, u32>,
            locations: &mut HashMap<String, NodeIndex>,
            name: String,
        ) -> NodeIndex {
            *locations
                .entry(name)
                .or_insert_with_key(|name| graph.add_node(name.clone()))
        }

        let legs: Vec<Leg> = collect_input_lines(input, |_, line| line.parse::<Leg>())?;

        let mut graph = UnGraph::new_undirected();
        let mut locations = HashMap::new();

        for leg in legs {
            let from = intern(&mut graph, &mut locations, leg.from);
            let to = intern(&mut graph, &mut locations, leg.to);

            if graph.find_edge(from, to).is_some() {
                return Err(Day09Error::DuplicateLeg {
                    from: graph[from].clone(),
                    to: graph[to].clone(),
                }
                .into());
            }
            graph.add_edge(from, to, leg.distance);
        }

        Ok(Self(graph))
    }
}

impl RouteMap {
    /// Iterate the total distances of every route visiting each location exactly once.
    ///
    /// Routes needing a leg with no given distance are skipped.
    fn route_distances(&self) -> impl Iterator<Item = u64> {
        // an empty map must yield no routes, not one empty route
        let stops = self.0.node_count().max(1);

        self.0
            .node_indices()
            .permutations(stops)
            .filter_map(|route| {
                route.windows(2).try_fold(0_u64, |total, pair| {
                    let edge = self.0.find_edge(pair[0], pair[1])?;
                    Some(
                        total
                            .checked_add(u64::from(self.0[edge]))
                            .expect("should not have integer overflow summing distances"),
                    )
                })
            })
    }

    fn shortest_route(&self) -> Result<u64, Day09Error> {
        self.route_distances()
            .min()
            .ok_or(Day09Error::NoCompleteRoute)
    }

    fn longest_route(&self) -> Result<u64, Day09Error> {
        self.route_distances()
            .max()
            .ok_or(Day09Error::NoCompleteRoute)
    }
}

/*
For part 1, find the distance of the shortest route that visits every location exactly once,
starting and ending anywhere.
*/

/*
For part 2, find the distance of the longest such route instead.
*/

struct Day09;

impl Solution<PartOne> for Day09 {
    type Input = RouteMap;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.shortest_route()?)
    }
}

impl Solution<PartTwo> for Day09 {
    type Input = RouteMap;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.longest_route()?)
    }
}
