use std::fmt::{self, Display, Formatter};

use aoc_framework::parsing::collect_input_lines;
use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use regex::Regex;

#[solution_runner(
    name = "Day 14: Reindeer Olympics",
    parsed = Roster,
    part_one = Day14,
    part_two = Day14,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<14> {}

const EXAMPLES: &[Example] = &[Example {
    input: "Comet can fly 14 km/s for 10 seconds, but then must rest for 127 seconds.
Dancer can fly 16 km/s for 11 seconds, but then must rest for 162 seconds.",
    part_one: Some("Comet, 2660"),
    part_two: Some("Dancer, 1564"),
}];

/*
Input describes Santa's reindeer, one per line, like `Comet can fly 14 km/s for 10 seconds, but
then must rest for 127 seconds.`. A reindeer always flies at its top speed until its flight time
runs out, then must rest for its whole rest time before flying again.
*/

/// How long the Reindeer Olympics race runs, in seconds.
const RACE_SECONDS: u32 = 2503;

/// An error when parsing a line as a [`Reindeer`].
#[derive(thiserror::Error, Debug)]
enum ParseReindeerError {
    #[error(
        "expected a reindeer like \"Comet can fly 14 km/s for 10 seconds, but then must rest for \
         127 seconds.\", found {0:?}"
    )]
    UnrecognizedLine(String),

    #[error("expected positive fly and rest durations for {0:?}")]
    ZeroDuration(String),

    #[error(transparent)]
    InvalidNumber(#[from] std::num::ParseIntError),
}

#[derive(thiserror::Error, Debug)]
enum Day14Error {
    #[error("no reindeer entered the race")]
    EmptyRoster,
}

/// A racing reindeer's flight profile.
#[derive(Debug)]
struct Reindeer {
    name: String,
    /// Flying speed in km/s.
    speed: u32,
    /// How long a burst of flight lasts, in seconds.
    fly_seconds: u32,
    /// How long the rest after a burst lasts, in seconds.
    rest_seconds: u32,
}

/// Parser to extract a [`Reindeer`] from an input line.
struct ReindeerParser {
    line_re: Regex,
}

impl ReindeerParser {
    fn new() -> Self {
        Self {
            line_re: Regex::new(
                r"^(\w+) can fly (\d+) km/s for (\d+) seconds, but then must rest for (\d+) seconds\.$",
            )
            .expect("reindeer pattern should be valid"),
        }
    }

    fn parse(&self, line: &str) -> Result<Reindeer, ParseReindeerError> {
        let captures = self
            .line_re
            .captures(line)
            .ok_or_else(|| ParseReindeerError::UnrecognizedLine(line.to_owned()))?;

        let reindeer = Reindeer {
            name: captures
                .get(1)
                .expect("name should be in capture group 1")
                .as_str()
                .to_owned(),
            speed: captures
                .get(2)
                .expect("speed should be in capture group 2")
                .as_str()
                .parse()?,
            fly_seconds: captures
                .get(3)
                .expect("fly duration should be in capture group 3")
                .as_str()
                .parse()?,
            rest_seconds: captures
                .get(4)
                .expect("rest duration should be in capture group 4")
                .as_str()
                .parse()?,
        };

        if reindeer.fly_seconds == 0 || reindeer.rest_seconds == 0 {
            return Err(ParseReindeerError::ZeroDuration(reindeer.name));
        }
        Ok(reindeer)
    }
}

/// A reindeer's cumulative results and flight phase during a race.
#[derive(Debug)]
struct RacerState {
    distance: u64,
    points: u64,
    flying: bool,
    seconds_in_phase: u32,
}

impl RacerState {
    fn new() -> Self {
        Self {
            distance: 0,
            points: 0,
            flying: true,
            seconds_in_phase: 0,
        }
    }

    /// Advance one second of racing: fly or rest, then switch phase once its duration completes.
    fn advance_second(&mut self, reindeer: &Reindeer) {
        if self.flying {
            self.distance += u64::from(reindeer.speed);
        }

        self.seconds_in_phase += 1;
        let phase_seconds = if self.flying {
            reindeer.fly_seconds
        } else {
            reindeer.rest_seconds
        };
        if self.seconds_in_phase == phase_seconds {
            self.flying = !self.flying;
            self.seconds_in_phase = 0;
        }
    }
}

/// The reindeer entered in the race, in input order.
#[derive(Debug)]
struct Roster(Vec<Reindeer>);

impl ParseData for Roster {
    fn parse(input: &str) -> DynamicResult<Self> {
        let parser = ReindeerParser::new();
        let reindeer = collect_input_lines(input, |_, line| parser.parse(line))?;
        Ok(Self(reindeer))
    }
}

impl Roster {
    /// Race every reindeer side by side for `seconds`, awarding a point at the end of each second
    /// to every reindeer tied for the farthest distance.
    fn race(&self, seconds: u32) -> Vec<RacerState> {
        let mut states: Vec<RacerState> = self.0.iter().map(|_| RacerState::new()).collect();

        for _ in 0..seconds {
            for (reindeer, state) in self.0.iter().zip(&mut states) {
                state.advance_second(reindeer);
            }

            if let Some(lead) = states.iter().map(|state| state.distance).max() {
                for state in &mut states {
                    if state.distance == lead {
                        state.points += 1;
                    }
                }
            }
        }

        states
    }

    /// The first-listed reindeer with the highest `score`, and that score.
    fn winner_by<F>(&self, states: &[RacerState], score: F) -> Result<Winner, Day14Error>
    where
        F: Fn(&RacerState) -> u64,
    {
        let mut winner: Option<Winner> = None;
        for (reindeer, state) in self.0.iter().zip(states) {
            let value = score(state);
            if winner.as_ref().is_none_or(|best| value > best.value) {
                winner = Some(Winner {
                    name: reindeer.name.clone(),
                    value,
                });
            }
        }
        winner.ok_or(Day14Error::EmptyRoster)
    }
}

/// The race's winning reindeer and its winning distance or point total.
#[derive(Debug, PartialEq, Eq)]
struct Winner {
    name: String,
    value: u64,
}

impl Display for Winner {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}, {}", self.name, self.value)
    }
}

/*
For part 1, race the reindeer for 2503 seconds: the winner is the reindeer that has traveled the
farthest. Name the winner and its distance.
*/

/*
For part 2, score the same race with points instead: at the end of every second, every reindeer
tied for the farthest distance earns one point. Name the reindeer with the most points and its
total.
*/

struct Day14;

impl Solution<PartOne> for Day14 {
    type Input = Roster;
    type Output = Winner;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let standings = input.race(RACE_SECONDS);
        Ok(input.winner_by(&standings, |state| state.distance)?)
    }
}

impl Solution<PartTwo> for Day14 {
    type Input = Roster;
    type Output = Winner;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let standings = input.race(RACE_SECONDS);
        Ok(input.winner_by(&standings, |state| state.points)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str =
        "Comet can fly 14 km/s for 10 seconds, but then must rest for 127 seconds.
Dancer can fly 16 km/s for 11 seconds, but then must rest for 162 seconds.
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Roster::parse(EXAMPLE_INPUT)?;
        let result = <Day14 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result.to_string(), "Comet, 2660");
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Roster::parse(EXAMPLE_INPUT)?;
        let result = <Day14 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result.to_string(), "Dancer, 1564");
        Ok(())
    }

    #[test]
    fn example_race_after_a_thousand_seconds() -> DynamicResult<()> {
        let parsed = Roster::parse(EXAMPLE_INPUT)?;
        let standings = parsed.race(1000);

        assert_eq!(
            parsed.winner_by(&standings, |state| state.distance)?,
            Winner {
                name: "Comet".to_owned(),
                value: 1120,
            }
        );
        assert_eq!(
            parsed.winner_by(&standings, |state| state.points)?,
            Winner {
                name: "Dancer".to_owned(),
                value: 689,
            }
        );
        Ok(())
    }

    #[test]
    fn distance_counts_partial_flight_bursts() -> DynamicResult<()> {
        let parsed =
            Roster::parse("Comet can fly 14 km/s for 10 seconds, but then must rest for 127 seconds.")?;

        assert_eq!(parsed.race(5)[0].distance, 70);
        assert_eq!(parsed.race(10)[0].distance, 140);
        assert_eq!(parsed.race(12)[0].distance, 140);
        Ok(())
    }

    #[test]
    fn tied_leaders_all_score() -> DynamicResult<()> {
        let parsed = Roster::parse(
            "Dasher can fly 1 km/s for 1 seconds, but then must rest for 1 seconds.\n\
             Dancer can fly 1 km/s for 1 seconds, but then must rest for 1 seconds.",
        )?;

        let standings = parsed.race(4);
        assert_eq!(standings[0].points, 4);
        assert_eq!(standings[1].points, 4);
        assert_eq!(standings[0].distance, 2);
        Ok(())
    }

    #[test]
    fn empty_rosters_error() -> DynamicResult<()> {
        let parsed = Roster::parse("")?;
        let Err(error) = <Day14 as Solution<PartOne>>::solve(&parsed) else {
            panic!("solve should fail without reindeer");
        };
        assert_eq!(error.to_string(), "no reindeer entered the race");
        Ok(())
    }

    #[test]
    fn parse_rejects_zero_durations() {
        let parser = ReindeerParser::new();
        let Err(error) =
            parser.parse("Comet can fly 14 km/s for 0 seconds, but then must rest for 127 seconds.")
        else {
            panic!("parse should fail on a zero fly duration");
        };
        assert_eq!(error.to_string(), "expected positive fly and rest durations for \"Comet\"");
    }

    #[test]
    fn parse_rejects_malformed_reindeer() {
        let parser = ReindeerParser::new();
        let Err(error) = parser.parse("Comet can fly 14 km/s for 10 seconds.") else {
            panic!("parse should fail without a rest clause");
        };
        assert_eq!(
            error.to_string(),
            "expected a reindeer like \"Comet can fly 14 km/s for 10 seconds, but then must rest \
             for 127 seconds.\", found \"Comet can fly 14 km/s for 10 seconds.\""
        );
    }
}
