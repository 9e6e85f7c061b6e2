use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 5: Doesn't He Have Intern-Elves For This?",
    part_one = Day05,
    part_two = Day05,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<5> {}

const EXAMPLES: &[Example] = &[
    Example {
        input: "ugknbfddgicrmopn\naaa\njchzalrnumimnmhp\nhaegwjzuvuyypxyu\ndvszwmarrgswjxmb",
        part_one: Some("2"),
        part_two: Some("0"),
    },
    Example {
        input: "qjhvhtzxzqqjkmpb\nxxyxx\nuurcxstgmygtbstg\nieodomkazucvgmuy",
        part_one: Some("0"),
        part_two: Some("2"),
    },
];

/*
Input is Santa's list of text strings, one per line, to sort into naughty or nice.
*/

// NOTE the repeated-letter rules are backreferences, which the regex crate does not support, so
// these scan byte windows by hand

/// The vowels the old rules count.
const VOWELS: &str = "aeiou";

/// The substrings that disqualify a string under the old rules.
const FORBIDDEN_PAIRS: [&str; 4] = ["ab", "cd", "pq", "xy"];

/*
For part 1, a nice string has at least three vowels (`aeiou`), has at least one letter appearing
twice in a row, and contains none of the substrings `ab`, `cd`, `pq`, or `xy`. Count how many
strings are nice.
*/

fn is_nice_under_old_rules(string: &str) -> bool {
    let vowel_count = string
        .chars()
        .filter(|character| VOWELS.contains(*character))
        .count();
    let has_doubled_letter = string.as_bytes().windows(2).any(|pair| pair[0] == pair[1]);
    let has_forbidden_pair = FORBIDDEN_PAIRS.iter().any(|pair| string.contains(pair));

    vowel_count >= 3 && has_doubled_letter && !has_forbidden_pair
}

/*
For part 2, the old rules are replaced: a nice string has a pair of any two letters appearing at
least twice without overlapping, and at least one letter that repeats with exactly one letter
between. Count how many strings are nice now.
*/

fn is_nice_under_new_rules(string: &str) -> bool {
    let bytes = string.as_bytes();

    let has_repeated_pair = bytes
        .windows(2)
        .enumerate()
        .any(|(index, pair)| bytes[index + 2..].windows(2).any(|later| later == pair));
    let has_spaced_repeat = bytes.windows(3).any(|triple| triple[0] == triple[2]);

    has_repeated_pair && has_spaced_repeat
}

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = str;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.lines().filter(|line| is_nice_under_old_rules(line)).count())
    }
}

impl Solution<PartTwo> for Day05 {
    type Input = str;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.lines().filter(|line| is_nice_under_new_rules(line)).count())
    }
}
