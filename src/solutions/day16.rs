use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use aoc_framework::parsing::{collect_input_lines, parse_with_context};
use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 16: Aunt Sue",
    parsed = SueList,
    part_one = Day16,
    part_two = Day16,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<16> {}

const EXAMPLES: &[Example] = &[Example {
    input: "Sue 1: cars: 9, akitas: 3, goldfish: 0
Sue 2: akitas: 9, children: 3, samoyeds: 9
Sue 3: trees: 6, cars: 3, children: 4
Sue 4: children: 3, cats: 7, samoyeds: 2
Sue 5: children: 3, cats: 8, pomeranians: 2, goldfish: 1",
    part_one: Some("4"),
    part_two: Some("5"),
}];

/*
Input is what you remember about each of your five hundred Aunts Sue, numbered, with a few
compound counts each, like `Sue 1: cars: 9, akitas: 3, goldfish: 0`. A compound that is not
listed is not remembered; it isn't zero.

The My First Crime Scene Analysis Machine (MFCSAM) analyzed the gift wrapping and printed a
ticker tape of compound readings: children 3, cats 7, samoyeds 2, pomeranians 3, akitas 0,
vizslas 0, goldfish 5, trees 3, cars 2, perfumes 1.
*/

/// An error when parsing a line as a [`Sue`].
#[derive(thiserror::Error, Debug)]
enum ParseSueError {
    #[error("expected line to start with \"Sue <number>: \"")]
    MissingSuePrefix,

    #[error("expected a compound as \"name: count\", found {0:?}")]
    ExpectedCompoundFormat(String),

    #[error("the MFCSAM does not detect {0:?}")]
    UnknownCompound(String),

    #[error("compound {0} is remembered more than once")]
    DuplicateCompound(Compound),

    #[error(transparent)]
    InvalidNumber(#[from] std::num::ParseIntError),
}

#[derive(thiserror::Error, Debug)]
enum Day16Error {
    #[error("no Sue matches the ticker tape")]
    NoSueMatches,

    #[error("both Sue {first} and Sue {second} match the ticker tape")]
    MultipleSuesMatch { first: u32, second: u32 },
}

/// A compound the MFCSAM can detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Compound {
    Children,
    Cats,
    Samoyeds,
    Pomeranians,
    Akitas,
    Vizslas,
    Goldfish,
    Trees,
    Cars,
    Perfumes,
}

impl Compound {
    /// The count the MFCSAM printed for this compound on its ticker tape.
    fn ticker_count(self) -> u32 {
        match self {
            Self::Children => 3,
            Self::Cats => 7,
            Self::Samoyeds => 2,
            Self::Pomeranians => 3,
            Self::Akitas => 0,
            Self::Vizslas => 0,
            Self::Goldfish => 5,
            Self::Trees => 3,
            Self::Cars => 2,
            Self::Perfumes => 1,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Children => "children",
            Self::Cats => "cats",
            Self::Samoyeds => "samoyeds",
            Self::Pomeranians => "pomeranians",
            Self::Akitas => "akitas",
            Self::Vizslas => "vizslas",
            Self::Goldfish => "goldfish",
            Self::Trees => "trees",
            Self::Cars => "cars",
            Self::Perfumes => "perfumes",
        }
    }
}

impl Display for Compound {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Compound {
    type Err = ParseSueError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "children" => Ok(Self::Children),
            "cats" => Ok(Self::Cats),
            "samoyeds" => Ok(Self::Samoyeds),
            "pomeranians" => Ok(Self::Pomeranians),
            "akitas" => Ok(Self::Akitas),
            "vizslas" => Ok(Self::Vizslas),
            "goldfish" => Ok(Self::Goldfish),
            "trees" => Ok(Self::Trees),
            "cars" => Ok(Self::Cars),
            "perfumes" => Ok(Self::Perfumes),
            _ => Err(ParseSueError::UnknownCompound(name.to_owned())),
        }
    }
}

/// What is remembered about one Aunt Sue.
#[derive(Debug)]
struct Sue {
    number: u32,
    compounds: Vec<(Compound, u32)>,
}

impl FromStr for Sue {
    type Err = ParseSueError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let rest = line
            .strip_prefix("Sue ")
            .ok_or(ParseSueError::MissingSuePrefix)?;
        let Some((number, compound_list)) = rest.split_once(": ") else {
            return Err(ParseSueError::MissingSuePrefix);
        };
        let number: u32 = number.parse()?;

        let mut compounds = Vec::new();
        for entry in compound_list.split(',').map(str::trim) {
            let Some((name, count)) = entry.split_once(": ") else {
                return Err(ParseSueError::ExpectedCompoundFormat(entry.to_owned()));
            };
            let compound: Compound = name.parse()?;
            if compounds.iter().any(|&(listed, _)| listed == compound) {
                return Err(ParseSueError::DuplicateCompound(compound));
            }
            compounds.push((compound, count.parse()?));
        }

        Ok(Self { number, compounds })
    }
}

impl Sue {
    /// Whether every remembered compound count equals the ticker tape's reading.
    fn matches_ticker_exactly(&self) -> bool {
        self.compounds
            .iter()
            .all(|&(compound, count)| count == compound.ticker_count())
    }

    /// Whether every remembered count matches with the retroencabulated readings: the tape's
    /// `cats` and `trees` mean "greater than", its `pomeranians` and `goldfish` mean "fewer
    /// than", and the rest stay exact.
    fn matches_ticker_ranges(&self) -> bool {
        self.compounds
            .iter()
            .all(|&(compound, count)| match compound {
                Compound::Cats | Compound::Trees => count > compound.ticker_count(),
                Compound::Pomeranians | Compound::Goldfish => count < compound.ticker_count(),
                _ => count == compound.ticker_count(),
            })
    }
}

/// Every remembered Aunt Sue, in input order.
#[derive(Debug)]
struct SueList(Vec<Sue>);

impl ParseData for SueList {
    fn parse(input: &str) -> DynamicResult<Self> {
        let sues = collect_input_lines(input, |_, line| parse_with_context::<Sue>(line))?;
        Ok(Self(sues))
    }
}

impl SueList {
    /// The number of the only Sue whose memory passes `matches`.
    fn unique_match<F>(&self, matches: F) -> Result<u32, Day16Error>
    where
        F: Fn(&Sue) -> bool,
    {
        let mut numbers = self.0.iter().filter(|sue| matches(sue)).map(|sue| sue.number);

        let Some(first) = numbers.next() else {
            return Err(Day16Error::NoSueMatches);
        };
        if let Some(second) = numbers.next() {
            return Err(Day16Error::MultipleSuesMatch { first, second });
        }
        Ok(first)
    }
}

/*
For part 1, find the number of the Sue whose remembered compounds all equal the ticker tape
readings.
*/

/*
For part 2, the tape turns out to come from an outdated retroencabulator: the real Sue has more
cats and trees than the tape reads, fewer pomeranians and goldfish, and exact counts for the
rest. Find her number.
*/

struct Day16;

impl Solution<PartOne> for Day16 {
    type Input = SueList;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.unique_match(Sue::matches_ticker_exactly)?)
    }
}

impl Solution<PartTwo> for Day16 {
    type Input = SueList;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.unique_match(Sue::matches_ticker_ranges)?)
    }
}
