use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 10: Elves Look, Elves Say",
    parsed = Sequence,
    part_one = Day10,
    part_two = Day10,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<10> {}

const EXAMPLES: &[Example] = &[Example {
    input: "1",
    part_one: Some("82350"),
    part_two: Some("1166642"),
}];

/*
Input is a sequence of digits the elves play look-and-say with. Each round reads the previous
sequence aloud as runs of digits: `111221` is "three ones, two twos, one one", which becomes
`312211`.
*/

#[derive(thiserror::Error, Debug)]
enum Day10Error {
    #[error("expected a sequence of digits, found empty input")]
    EmptySequence,

    #[error("expected only digits in the sequence, found {0:?}")]
    NotADigit(char),
}

/// The starting sequence, kept as ASCII digits.
#[derive(Debug)]
struct Sequence(Vec<u8>);

impl ParseData for Sequence {
    fn parse(input: &str) -> DynamicResult<Self> {
        let digits = input.trim();

        if digits.is_empty() {
            return Err(Day10Error::EmptySequence.into());
        }
        if let Some(found) = digits.chars().find(|character| !character.is_ascii_digit()) {
            return Err(Day10Error::NotADigit(found).into());
        }

        Ok(Self(digits.bytes().collect()))
    }
}

/// Apply one look-and-say round: each run of a digit becomes the run length, then the digit.
fn look_and_say(sequence: &[u8]) -> Vec<u8> {
    let mut next = Vec::with_capacity(sequence.len().saturating_mul(2));

    for run in sequence.chunk_by(|first, second| first == second) {
        if let Ok(count) = u8::try_from(run.len())
            && count <= 9
        {
            next.push(b'0' + count);
        } else {
            // runs this long only come from artificial seeds, but encode them fully
            next.extend_from_slice(run.len().to_string().as_bytes());
        }
        next.push(run[0]);
    }

    next
}

impl Sequence {
    /// The sequence's length after playing `rounds` look-and-say rounds.
    fn length_after(&self, rounds: u32) -> usize {
        let mut sequence = self.0.clone();
        for _ in 0..rounds {
            sequence = look_and_say(&sequence);
        }
        sequence.len()
    }
}

/*
For part 1, play 40 rounds and find the length of the resulting sequence.
*/

/*
For part 2, play 50 rounds instead.
*/

struct Day10;

impl Solution<PartOne> for Day10 {
    type Input = Sequence;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.length_after(40))
    }
}

impl Solution<PartTwo> for Day10 {
    type Input = Sequence;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.length_after(50))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_match_documented_sequence() {
        let mut sequence = b"1".to_vec();
        for expected in ["11", "21", "1211", "111221", "312211"] {
            sequence = look_and_say(&sequence);
            assert_eq!(sequence, expected.as_bytes(), "expected {expected}");
        }
    }

    #[test]
    fn long_runs_encode_full_counts() {
        assert_eq!(look_and_say(&[b'1'; 12]), b"121");
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Sequence::parse("1")?;
        let result = <Day10 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 82_350);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Sequence::parse("1")?;
        let result = <Day10 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 1_166_642);
        Ok(())
    }

    #[test]
    fn parse_trims_surrounding_whitespace() -> DynamicResult<()> {
        let parsed = Sequence::parse("132\n")?;
        assert_eq!(parsed.0, b"132");
        Ok(())
    }

    #[test]
    fn parse_rejects_non_digits() {
        let Err(error) = Sequence::parse("12a") else {
            panic!("parse should fail on a non-digit character");
        };
        assert_eq!(error.to_string(), "expected only digits in the sequence, found 'a'");
    }
}
