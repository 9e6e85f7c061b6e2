use std::str::FromStr;

use aoc_framework::parsing::collect_input_lines;
use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

#[solution_runner(
    name = "Day 8: Matchsticks",
    parsed = SantasList,
    part_one = Day08,
    part_two = Day08,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<8> {}

const EXAMPLES: &[Example] = &[Example {
    input: r#"""
"abc"
"aaa\"aaa"
"\x27""#,
    part_one: Some("12"),
    part_two: Some("19"),
}];

/*
Input is Santa's digital list: one double-quoted string literal per line. Literals escape with a
backslash: `\\` for a backslash, `\"` for a double quote, and `\xHH` for a character given as two
hexadecimal digits.
*/

/// An error when parsing a line as a [`Literal`].
#[derive(thiserror::Error, Debug)]
enum ParseLiteralError {
    /// Expected the line wrapped in double quotes, with the found line.
    #[error("expected a literal wrapped in double quotes, found {0:?}")]
    MissingQuotes(String),

    #[error("expected two hexadecimal digits after \"\\x\"")]
    InvalidHexEscape,

    #[error("unrecognized escape character {0:?}")]
    UnrecognizedEscape(char),

    #[error("expected a character after \"\\\"")]
    TruncatedEscape,
}

/// One string literal from the list, measured three ways.
#[derive(Debug)]
struct Literal {
    /// Characters of code, including the surrounding quotes.
    code_length: usize,
    /// Characters held in memory once the literal is unescaped.
    memory_length: usize,
    /// Characters once the literal is re-encoded with another layer of quoting.
    encoded_length: usize,
}

impl FromStr for Literal {
    type Err = ParseLiteralError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let inner = line
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .ok_or_else(|| ParseLiteralError::MissingQuotes(line.to_owned()))?;

        let mut memory_length = 0_usize;
        let mut characters = inner.chars();
        while let Some(character) = characters.next() {
            if character == '\\' {
                match characters.next() {
                    Some('\\' | '"') => {}
                    Some('x') => {
                        let digits = [characters.next(), characters.next()];
                        if !digits
                            .into_iter()
                            .all(|digit| digit.is_some_and(|digit| digit.is_ascii_hexdigit()))
                        {
                            return Err(ParseLiteralError::InvalidHexEscape);
                        }
                    }
                    Some(found) => return Err(ParseLiteralError::UnrecognizedEscape(found)),
                    None => return Err(ParseLiteralError::TruncatedEscape),
                }
            }
            memory_length += 1;
        }

        let code_length = line.chars().count();
        let escaped_length: usize = line
            .chars()
            .map(|character| match character {
                '"' | '\\' => 2,
                _ => 1,
            })
            .sum();

        Ok(Self {
            code_length,
            memory_length,
            // the new surrounding quotes add 2
            encoded_length: escaped_length + 2,
        })
    }
}

#[derive(Debug)]
struct SantasList(Vec<Literal>);

impl ParseData for SantasList {
    fn parse(input: &str) -> DynamicResult<Self> {
        let literals = collect_input_lines(input, |_, line| line.parse::<Literal>())?;
        Ok(Self(literals))
    }
}

/*
For part 1, total the characters of code across the literals and the characters each holds in
memory once unescaped. Find the first total minus the second.
*/

/*
For part 2, encode each literal as a new string: wrap it in double quotes and escape every
backslash and double quote inside. Find the total encoded length minus the total characters of
code.
*/

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = SantasList;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let total = input
            .0
            .iter()
            // unescaping only shrinks, so code length is the larger
            .map(|literal| literal.code_length - literal.memory_length)
            .checked_sum()
            .expect("should not have integer overflow summing length differences");
        Ok(total)
    }
}

impl Solution<PartTwo> for Day08 {
    type Input = SantasList;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let total = input
            .0
            .iter()
            // encoding only grows, so encoded length is the larger
            .map(|literal| literal.encoded_length - literal.code_length)
            .checked_sum()
            .expect("should not have integer overflow summing length differences");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r#"""
"abc"
"aaa\"aaa"
"\x27"
"#;

    #[test]
    fn literal_lengths_match_documented_strings() -> DynamicResult<()> {
        for (line, code, memory, encoded) in [
            (r#""""#, 2, 0, 6),
            (r#""abc""#, 5, 3, 9),
            (r#""aaa\"aaa""#, 10, 7, 16),
            (r#""\x27""#, 6, 1, 11),
        ] {
            let literal: Literal = line.parse()?;
            assert_eq!(literal.code_length, code, "line {line:?}");
            assert_eq!(literal.memory_length, memory, "line {line:?}");
            assert_eq!(literal.encoded_length, encoded, "line {line:?}");
        }
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = SantasList::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 12);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = SantasList::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 19);
        Ok(())
    }

    #[test]
    fn parse_rejects_unquoted_lines() {
        let Err(error) = "abc".parse::<Literal>() else {
            panic!("parse should fail on a line without quotes");
        };
        assert_eq!(
            error.to_string(),
            "expected a literal wrapped in double quotes, found \"abc\""
        );
    }

    #[test]
    fn parse_rejects_bad_hex_escapes() {
        let Err(error) = r#""\xg1""#.parse::<Literal>() else {
            panic!("parse should fail on a non-hexadecimal escape");
        };
        assert_eq!(
            error.to_string(),
            "expected two hexadecimal digits after \"\\x\""
        );
    }

    #[test]
    fn parse_rejects_unrecognized_escapes() {
        let Err(error) = r#""\q""#.parse::<Literal>() else {
            panic!("parse should fail on an unrecognized escape");
        };
        assert_eq!(error.to_string(), "unrecognized escape character 'q'");
    }

    #[test]
    fn parse_rejects_truncated_escapes() {
        let Err(error) = r#""\""#.parse::<Literal>() else {
            panic!("parse should fail on a backslash with nothing after it");
        };
        assert_eq!(error.to_string(), "expected a character after \"\\\"");
    }
}
