use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use serde_json::Value;

#[solution_runner(
    name = "Day 12: JSAbacusFramework.io",
    parsed = Document,
    part_one = Day12,
    part_two = Day12,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<12> {}

const EXAMPLES: &[Example] = &[
    Example {
        input: "[1,2,3]",
        part_one: Some("6"),
        part_two: Some("6"),
    },
    Example {
        input: r#"[1,{"c":"red","b":2},3]"#,
        part_one: Some("6"),
        part_two: Some("4"),
    },
    Example {
        input: r#"{"d":"red","e":[1,2,3,4],"f":5}"#,
        part_one: Some("15"),
        part_two: Some("0"),
    },
    Example {
        input: r#"[1,"red",5]"#,
        part_one: Some("6"),
        part_two: Some("6"),
    },
];

/*
Input is the Accounting-Elves' JSON document: nested arrays, objects, numbers, and strings.
*/

#[derive(thiserror::Error, Debug)]
enum Day12Error {
    #[error("expected whole numbers in the document, found {0}")]
    NonIntegerNumber(serde_json::Number),
}

/// The accounting document as parsed JSON.
#[derive(Debug)]
struct Document(Value);

impl ParseData for Document {
    fn parse(input: &str) -> DynamicResult<Self> {
        Ok(Self(serde_json::from_str(input)?))
    }
}

fn sum_values<'a, I>(values: I, ignore_red: bool) -> Result<i64, Day12Error>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut total = 0_i64;
    for value in values {
        total = total
            .checked_add(sum_numbers(value, ignore_red)?)
            .expect("should not have integer overflow summing document numbers");
    }
    Ok(total)
}

/// Sum every number in the document. With `ignore_red`, any object with a `"red"` property value
/// contributes nothing, including everything nested inside it.
fn sum_numbers(value: &Value, ignore_red: bool) -> Result<i64, Day12Error> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| Day12Error::NonIntegerNumber(number.clone())),
        Value::Array(items) => sum_values(items, ignore_red),
        Value::Object(entries) => {
            if ignore_red && entries.values().any(|entry| entry == "red") {
                Ok(0)
            } else {
                sum_values(entries.values(), ignore_red)
            }
        }
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(0),
    }
}

/*
For part 1, find the sum of all numbers in the document.
*/

/*
For part 2, the Accounting-Elves double-counted: ignore any object (and everything inside it) that
has a property value of `"red"`. Arrays with `"red"` entries still count.
*/

struct Day12;

impl Solution<PartOne> for Day12 {
    type Input = Document;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sum_numbers(&input.0, false)?)
    }
}

impl Solution<PartTwo> for Day12 {
    type Input = Document;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sum_numbers(&input.0, true)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_one_sums_documented_documents() -> DynamicResult<()> {
        for (document, expected) in [
            ("[1,2,3]", 6),
            (r#"{"a":2,"b":4}"#, 6),
            ("[[[3]]]", 3),
            (r#"{"a":{"b":4},"c":-1}"#, 3),
            (r#"{"a":[-1,1]}"#, 0),
            (r#"[-1,{"a":1}]"#, 0),
            ("[]", 0),
            ("{}", 0),
        ] {
            let parsed = Document::parse(document)?;
            let result = <Day12 as Solution<PartOne>>::solve(&parsed)?;
            assert_eq!(result, expected, "document {document}");
        }
        Ok(())
    }

    #[test]
    fn part_two_ignores_red_objects() -> DynamicResult<()> {
        for (document, expected) in [
            ("[1,2,3]", 6),
            (r#"[1,{"c":"red","b":2},3]"#, 4),
            (r#"{"d":"red","e":[1,2,3,4],"f":5}"#, 0),
            (r#"[1,"red",5]"#, 6),
        ] {
            let parsed = Document::parse(document)?;
            let result = <Day12 as Solution<PartTwo>>::solve(&parsed)?;
            assert_eq!(result, expected, "document {document}");
        }
        Ok(())
    }

    #[test]
    fn red_only_zeroes_its_own_object() -> DynamicResult<()> {
        let parsed = Document::parse(r#"{"a":{"b":"red","c":1},"d":2}"#)?;
        assert_eq!(<Day12 as Solution<PartTwo>>::solve(&parsed)?, 2);
        Ok(())
    }

    #[test]
    fn non_integer_numbers_error() -> DynamicResult<()> {
        let parsed = Document::parse("[1.5]")?;
        let Err(error) = <Day12 as Solution<PartOne>>::solve(&parsed) else {
            panic!("solve should fail on a non-integer number");
        };
        assert_eq!(
            error.to_string(),
            "expected whole numbers in the document, found 1.5"
        );
        Ok(())
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(Document::parse("[1,").is_err());
    }
}
