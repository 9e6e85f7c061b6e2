use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use aoc_framework::parsing::collect_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 7: Some Assembly Required",
    parsed = Circuit,
    part_one = Day07,
    part_two = Day07
)]
impl super::AdventOfCode2015<7> {}

/*
Input is the booklet for assembling Bobby Tables' circuit. Each line connects a gate expression to
the wire it drives, like `x AND y -> d`. Wires carry 16-bit signals and are named with lowercase
letters; gate operands are wire names or signal literals.

A bare operand feeds a wire directly, `AND` and `OR` are bitwise, `LSHIFT` and `RSHIFT` shift the
signal, and `NOT` is the bitwise complement. A wire can only get its signal once every operand of
its gate has one.
*/

/// An error when parsing a line as a [`Connection`].
#[derive(thiserror::Error, Debug)]
enum ParseConnectionError {
    #[error("expected \" -> \" separating a gate from the wire it drives")]
    MissingArrow,

    /// An expression matched none of the known gate forms, with the found expression.
    #[error("unrecognized gate expression {0:?}")]
    UnrecognizedGate(String),

    /// Expected an operand as a signal literal or lowercase wire name, with the found token.
    #[error("expected a signal value or a lowercase wire name, found {0:?}")]
    InvalidOperand(String),

    #[error(transparent)]
    InvalidSignal(#[from] std::num::ParseIntError),
}

/// An error when resolving wire signals in a [`Circuit`].
#[derive(thiserror::Error, Debug)]
enum CircuitError {
    #[error("multiple gates drive wire {0:?}")]
    DuplicateWire(String),

    #[error("no gate drives wire {0:?}")]
    UnknownWire(String),

    #[error("wire {0:?} depends on itself")]
    CircularDependency(String),
}

/// A gate input: either a constant signal or another wire's signal.
#[derive(Debug, Clone)]
enum Operand {
    Literal(u16),
    Wire(String),
}

impl FromStr for Operand {
    type Err = ParseConnectionError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();

        if !token.is_empty() && token.chars().all(|character| character.is_ascii_digit()) {
            return Ok(Self::Literal(token.parse()?));
        }
        if !token.is_empty()
            && token
                .chars()
                .all(|character| character.is_ascii_lowercase())
        {
            return Ok(Self::Wire(token.to_owned()));
        }

        Err(ParseConnectionError::InvalidOperand(token.to_owned()))
    }
}

/// The gate driving a wire.
#[derive(Debug, Clone)]
enum Gate {
    Direct(Operand),
    And(Operand, Operand),
    Or(Operand, Operand),
    LShift(Operand, Operand),
    RShift(Operand, Operand),
    Not(Operand),
}

impl FromStr for Gate {
    type Err = ParseConnectionError;

    fn from_str(expression: &str) -> Result<Self, Self::Err> {
        if let Some(source) = expression.strip_prefix("NOT ") {
            return Ok(Self::Not(source.parse()?));
        }

        let tokens: Vec<_> = expression.split_whitespace().collect();
        match tokens.as_slice() {
            [source] => Ok(Self::Direct(source.parse()?)),
            [left, "AND", right] => Ok(Self::And(left.parse()?, right.parse()?)),
            [left, "OR", right] => Ok(Self::Or(left.parse()?, right.parse()?)),
            [source, "LSHIFT", amount] => Ok(Self::LShift(source.parse()?, amount.parse()?)),
            [source, "RSHIFT", amount] => Ok(Self::RShift(source.parse()?, amount.parse()?)),
            _ => Err(ParseConnectionError::UnrecognizedGate(
                expression.to_owned(),
            )),
        }
    }
}

/// One `expression -> wire` line of the booklet.
#[derive(Debug)]
struct Connection {
    wire: String,
    gate: Gate,
}

impl FromStr for Connection {
    type Err = ParseConnectionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let Some((expression, wire)) = line.split_once(" -> ") else {
            return Err(ParseConnectionError::MissingArrow);
        };

        Ok(Self {
            wire: wire.trim().to_owned(),
            gate: expression.trim().parse()?,
        })
    }
}

/// The assembled circuit, keyed by the wire each gate drives.
#[derive(Debug)]
struct Circuit {
    gates: HashMap<String, Gate>,
}

impl ParseData for Circuit {
    fn parse(input: &str) -> DynamicResult<Self> {
        let connections: Vec<Connection> =
            collect_input_lines(input, |_, line| line.parse::<Connection>())?;

        let mut gates = HashMap::with_capacity(connections.len());
        for connection in connections {
            match gates.entry(connection.wire) {
                Entry::Occupied(entry) => {
                    return Err(CircuitError::DuplicateWire(entry.key().clone()).into());
                }
                Entry::Vacant(entry) => {
                    entry.insert(connection.gate);
                }
            }
        }

        Ok(Self { gates })
    }
}

/// Resolves wire signals recursively, caching each wire as it completes.
///
/// Cached and in-progress wires are keyed by the circuit's own wire names.
struct Resolver<'a> {
    gates: &'a HashMap<String, Gate>,
    resolved: HashMap<&'a str, u16>,
    in_progress: HashSet<&'a str>,
}

impl Resolver<'_> {
    fn resolve(&mut self, wire: &str) -> Result<u16, CircuitError> {
        let Some((name, gate)) = self.gates.get_key_value(wire) else {
            return Err(CircuitError::UnknownWire(wire.to_owned()));
        };
        let name = name.as_str();

        if let Some(&signal) = self.resolved.get(name) {
            return Ok(signal);
        }
        if !self.in_progress.insert(name) {
            return Err(CircuitError::CircularDependency(name.to_owned()));
        }

        let signal = match gate {
            Gate::Direct(source) => self.operand_signal(source)?,
            Gate::And(left, right) => self.operand_signal(left)? & self.operand_signal(right)?,
            Gate::Or(left, right) => self.operand_signal(left)? | self.operand_signal(right)?,
            // shift counts at or above the signal width clear the signal
            Gate::LShift(source, amount) => {
                let signal = self.operand_signal(source)?;
                let shift = self.operand_signal(amount)?;
                signal.checked_shl(shift.into()).unwrap_or(0)
            }
            Gate::RShift(source, amount) => {
                let signal = self.operand_signal(source)?;
                let shift = self.operand_signal(amount)?;
                signal.checked_shr(shift.into()).unwrap_or(0)
            }
            Gate::Not(source) => !self.operand_signal(source)?,
        };

        self.in_progress.remove(name);
        self.resolved.insert(name, signal);
        Ok(signal)
    }

    fn operand_signal(&mut self, operand: &Operand) -> Result<u16, CircuitError> {
        match operand {
            Operand::Literal(value) => Ok(*value),
            Operand::Wire(wire) => self.resolve(wire),
        }
    }
}

impl Circuit {
    /// Resolve the signal a wire ultimately carries.
    fn signal(&self, wire: &str) -> Result<u16, CircuitError> {
        Resolver {
            gates: &self.gates,
            resolved: HashMap::new(),
            in_progress: HashSet::new(),
        }
        .resolve(wire)
    }
}

/*
For part 1, find the signal ultimately provided to wire `a`.
*/

/*
For part 2, take wire `a`'s signal from part 1, override wire `b` with it, reset every other wire,
and find the new signal on wire `a`.
*/

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = Circuit;
    type Output = u16;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.signal("a")?)
    }
}

impl Solution<PartTwo> for Day07 {
    type Input = Circuit;
    type Output = u16;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let first_signal = input.signal("a")?;

        let mut overridden = Circuit {
            gates: input.gates.clone(),
        };
        overridden
            .gates
            .insert("b".to_owned(), Gate::Direct(Operand::Literal(first_signal)));

        Ok(overridden.signal("a")?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"123 -> x
456 -> y
x AND y -> d
x OR y -> e
x LSHIFT 2 -> f
y RSHIFT 2 -> g
NOT x -> h
NOT y -> i
";

    #[test]
    fn signals_resolve_documented_circuit() -> DynamicResult<()> {
        let parsed = Circuit::parse(EXAMPLE_INPUT)?;
        for (wire, expected) in [
            ("d", 72),
            ("e", 507),
            ("f", 492),
            ("g", 114),
            ("h", 65412),
            ("i", 65079),
            ("x", 123),
            ("y", 456),
        ] {
            assert_eq!(parsed.signal(wire)?, expected, "wire {wire:?}");
        }
        Ok(())
    }

    #[test]
    fn part_two_feeds_first_signal_back_into_wire_b() -> DynamicResult<()> {
        let parsed = Circuit::parse("b LSHIFT 1 -> a\n5 -> b")?;
        assert_eq!(<Day07 as Solution<PartOne>>::solve(&parsed)?, 10);
        assert_eq!(<Day07 as Solution<PartTwo>>::solve(&parsed)?, 20);
        Ok(())
    }

    #[test]
    fn oversized_shifts_clear_the_signal() -> DynamicResult<()> {
        let parsed = Circuit::parse("1 -> x\nx LSHIFT 20 -> a")?;
        assert_eq!(parsed.signal("a")?, 0);
        Ok(())
    }

    #[test]
    fn unknown_wires_error() -> DynamicResult<()> {
        let parsed = Circuit::parse("x AND y -> a\n1 -> x")?;
        let Err(error) = parsed.signal("a") else {
            panic!("resolving should fail on a wire no gate drives");
        };
        assert_eq!(error.to_string(), "no gate drives wire \"y\"");
        Ok(())
    }

    #[test]
    fn circular_dependencies_error() -> DynamicResult<()> {
        let parsed = Circuit::parse("b -> a\na -> b")?;
        let Err(error) = parsed.signal("a") else {
            panic!("resolving should fail on a circular dependency");
        };
        assert_eq!(error.to_string(), "wire \"a\" depends on itself");
        Ok(())
    }

    #[test]
    fn duplicate_wires_error() {
        let Err(error) = Circuit::parse("1 -> a\n2 -> a") else {
            panic!("parse should fail when a wire is driven twice");
        };
        assert_eq!(error.to_string(), "multiple gates drive wire \"a\"");
    }
}
