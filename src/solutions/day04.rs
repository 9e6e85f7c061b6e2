use std::fmt::Write as _;

use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 4: The Ideal Stocking Stuffer",
    parsed = SecretKey,
    part_one = Day04,
    part_two = Day04,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<4> {}

const EXAMPLES: &[Example] = &[
    Example {
        input: "abcdef",
        part_one: Some("609043"),
        part_two: None,
    },
    Example {
        input: "pqrstuv",
        part_one: Some("1048970"),
        part_two: None,
    },
];

/// The largest suffix number tried before mining gives up.
const SEARCH_LIMIT: u64 = 1_000_000_000;

#[derive(thiserror::Error, Debug)]
enum Day04Error {
    #[error("expected a secret key, found empty input")]
    EmptyKey,

    /// Contains the key with the offending whitespace.
    #[error("expected a single secret key token, found whitespace in {0:?}")]
    EmbeddedWhitespace(String),

    #[error("no suffix up to {SEARCH_LIMIT} produces a hash with {zero_count} leading zeros")]
    NoAdventCoin { zero_count: usize },
}

/*
Input is Santa's secret key for mining AdventCoins.

An AdventCoin is mined by finding the lowest positive number that, appended in decimal to the
secret key, produces an MD5 hash whose hexadecimal form starts with a run of zeros.
*/

/// The secret key the mined numbers are appended to.
#[derive(Debug)]
struct SecretKey(String);

impl ParseData for SecretKey {
    fn parse(input: &str) -> DynamicResult<Self> {
        let key = input.trim();

        if key.is_empty() {
            return Err(Day04Error::EmptyKey.into());
        }
        if key.contains(char::is_whitespace) {
            return Err(Day04Error::EmbeddedWhitespace(key.to_owned()).into());
        }

        Ok(Self(key.to_owned()))
    }
}

/// Whether the hexadecimal form of `digest` starts with at least `zero_count` `0` digits.
fn has_leading_zero_digits(digest: &md5::Digest, zero_count: usize) -> bool {
    let full_bytes = zero_count / 2;

    if digest[..full_bytes].iter().any(|&byte| byte != 0) {
        return false;
    }

    zero_count % 2 == 0 || digest[full_bytes] < 0x10
}

impl SecretKey {
    /// Find the lowest positive number whose appended hash has `zero_count` leading zero digits.
    fn mine(&self, zero_count: usize) -> Result<u64, Day04Error> {
        let mut candidate = String::with_capacity(self.0.len() + 10);

        for number in 1..=SEARCH_LIMIT {
            candidate.clear();
            write!(candidate, "{}{number}", self.0).expect("string formatting should not fail");

            if has_leading_zero_digits(&md5::compute(candidate.as_bytes()), zero_count) {
                return Ok(number);
            }
        }

        Err(Day04Error::NoAdventCoin { zero_count })
    }
}

/*
For part 1, find the lowest positive number that produces a hash starting with five zeros.
*/

/*
For part 2, find the lowest positive number that produces a hash starting with six zeros.
*/

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = SecretKey;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.mine(5)?)
    }
}

impl Solution<PartTwo> for Day04 {
    type Input = SecretKey;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.mine(6)?)
    }
}
