use std::collections::HashSet;
use std::fmt;

use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 11: Corporate Policy",
    parsed = Password,
    part_one = Day11,
    part_two = Day11,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<11> {}

const EXAMPLES: &[Example] = &[
    Example {
        input: "abcdefgh",
        part_one: Some("abcdffaa"),
        part_two: Some("abcdffbb"),
    },
    Example {
        input: "ghijklmn",
        part_one: Some("ghjjppqr"),
        part_two: Some("ghjjpqrr"),
    },
];

/*
Input is Santa's expired password. His next password comes from repeatedly incrementing the old
one, like an odometer over the letters, until it satisfies the Security-Elf requirements:

- at least one increasing straight of three letters, like `abc` or `pqr`
- no `i`, `l`, or `o`, which are too easily confused with other letters
- at least two different, non-overlapping pairs of letters, like `aa` and `bb`

Incrementing steps the rightmost letter through the 23 allowed letters, carrying leftward when it
wraps. Any confusing letter in the starting password is first bumped in place to the next allowed
letter.
*/

/// The letters a password may use, in order, with the confusing `i`, `l`, and `o` removed.
const ALPHABET: &[u8] = b"abcdefghjkmnpqrstuvwxyz";

#[derive(thiserror::Error, Debug)]
enum Day11Error {
    #[error("expected a password, found empty input")]
    EmptyPassword,

    #[error("expected only lowercase letters, found {0:?}")]
    NotALowercaseLetter(char),

    #[error("no password of this length can satisfy the rules")]
    NoValidPassword,
}

/// The letter after `letter`, wrapping from the end of [`ALPHABET`] back to its start.
fn next_letter(letter: u8) -> u8 {
    let position = ALPHABET
        .iter()
        .position(|&allowed| allowed == letter)
        .expect("letters should already be sanitized onto the allowed alphabet");
    ALPHABET[(position + 1) % ALPHABET.len()]
}

/// A password as lowercase letter bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Password(Vec<u8>);

impl ParseData for Password {
    fn parse(input: &str) -> DynamicResult<Self> {
        let password = input.trim();

        if password.is_empty() {
            return Err(Day11Error::EmptyPassword.into());
        }
        if let Some(found) = password
            .chars()
            .find(|character| !character.is_ascii_lowercase())
        {
            return Err(Day11Error::NotALowercaseLetter(found).into());
        }

        Ok(Self(password.bytes().collect()))
    }
}

impl fmt::Display for Password {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl Password {
    /// Bump each confusing letter to the next allowed one: `i` to `j`, `l` to `m`, `o` to `p`.
    fn sanitized(&self) -> Self {
        let letters = self
            .0
            .iter()
            .map(|&letter| match letter {
                b'i' => b'j',
                b'l' => b'm',
                b'o' => b'p',
                _ => letter,
            })
            .collect();
        Self(letters)
    }

    /// Advance the rightmost letter, carrying leftward on wrap-around.
    fn increment(&mut self) {
        for letter in self.0.iter_mut().rev() {
            *letter = next_letter(*letter);
            if *letter != ALPHABET[0] {
                break;
            }
        }
    }

    /// Whether the password satisfies the Security-Elf requirements.
    fn is_valid(&self) -> bool {
        let no_confusing = !self
            .0
            .iter()
            .any(|&letter| matches!(letter, b'i' | b'l' | b'o'));
        let has_straight = self
            .0
            .windows(3)
            .any(|window| window[1] == window[0] + 1 && window[2] == window[0] + 2);
        let distinct_pairs: HashSet<u8> = self
            .0
            .windows(2)
            .filter_map(|pair| (pair[0] == pair[1]).then_some(pair[0]))
            .collect();

        no_confusing && has_straight && distinct_pairs.len() >= 2
    }

    /// Find the next valid password after this one.
    fn next_password(&self) -> Result<Self, Day11Error> {
        let mut candidate = self.sanitized();
        candidate.increment();
        let search_start = candidate.clone();

        while !candidate.is_valid() {
            candidate.increment();
            // wrapping all the way around means no password of this length works
            if candidate == search_start {
                return Err(Day11Error::NoValidPassword);
            }
        }

        Ok(candidate)
    }
}

/*
For part 1, find Santa's next password.
*/

/*
For part 2, Santa's new password expires too: find the one after that.
*/

struct Day11;

impl Solution<PartOne> for Day11 {
    type Input = Password;
    type Output = Password;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.next_password()?)
    }
}

impl Solution<PartTwo> for Day11 {
    type Input = Password;
    type Output = Password;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.next_password()?.next_password()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_one_solves_examples() -> DynamicResult<()> {
        for (input, expected) in [("abcdefgh", "abcdffaa"), ("ghijklmn", "ghjjppqr")] {
            let parsed = Password::parse(input)?;
            let result = <Day11 as Solution<PartOne>>::solve(&parsed)?;
            assert_eq!(result.to_string(), expected, "input {input:?}");
        }
        Ok(())
    }

    #[test]
    fn part_two_solves_examples() -> DynamicResult<()> {
        for (input, expected) in [("abcdefgh", "abcdffbb"), ("ghijklmn", "ghjjpqrr")] {
            let parsed = Password::parse(input)?;
            let result = <Day11 as Solution<PartTwo>>::solve(&parsed)?;
            assert_eq!(result.to_string(), expected, "input {input:?}");
        }
        Ok(())
    }

    #[test]
    fn requirements_classify_documented_passwords() -> DynamicResult<()> {
        for (password, expected) in [
            ("hijklmmn", false),
            ("abbceffg", false),
            ("abbcegjk", false),
            ("abcdffaa", true),
            ("ghjaabcc", true),
        ] {
            let parsed = Password::parse(password)?;
            assert_eq!(parsed.is_valid(), expected, "password {password:?}");
        }
        Ok(())
    }

    #[test]
    fn increment_carries_on_wrap_around() -> DynamicResult<()> {
        let mut password = Password::parse("az")?;
        password.increment();
        assert_eq!(password.to_string(), "ba");

        let mut password = Password::parse("zz")?;
        password.increment();
        assert_eq!(password.to_string(), "aa");
        Ok(())
    }

    #[test]
    fn increment_skips_confusing_letters() -> DynamicResult<()> {
        let mut password = Password::parse("ah")?;
        password.increment();
        assert_eq!(password.to_string(), "aj");
        Ok(())
    }

    #[test]
    fn confusing_letters_bump_in_place() -> DynamicResult<()> {
        let parsed = Password::parse("hilxo")?;
        assert_eq!(parsed.sanitized().to_string(), "hjmxp");
        Ok(())
    }

    #[test]
    fn too_short_passwords_error() -> DynamicResult<()> {
        let parsed = Password::parse("abc")?;
        let Err(error) = parsed.next_password() else {
            panic!("a three letter password should never become valid");
        };
        assert_eq!(
            error.to_string(),
            "no password of this length can satisfy the rules"
        );
        Ok(())
    }

    #[test]
    fn parse_rejects_non_letters() {
        let Err(error) = Password::parse("abc1") else {
            panic!("parse should fail on a non-letter character");
        };
        assert_eq!(error.to_string(), "expected only lowercase letters, found '1'");
    }
}
