use aoc_framework::parsing::collect_input_lines;
use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 18: Like a GIF For Your Yard",
    parsed = LightAnimation,
    part_one = Day18,
    part_two = Day18,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<18> {}

const EXAMPLES: &[Example] = &[Example {
    input: ".#.#.#
...##.
#....#
..#...
#.#..#
####..",
    part_one: Some("4"),
    part_two: Some("7"),
}];

/*
Input is the starting configuration of Santa's light grid, one row per line: `#` for a light that
is on, `.` for one that is off.
*/

/// How many animation steps to run.
const ANIMATION_STEPS: u32 = 100;

/// An error when parsing the light grid.
#[derive(thiserror::Error, Debug)]
enum ParseAnimationError {
    #[error("expected rows of width {expected}, found a row of width {found}")]
    UnequalRowWidth { expected: usize, found: usize },

    #[error("unrecognized light character {0:?}")]
    UnrecognizedChar(char),
}

/// The light grid, animated one synchronous step at a time.
#[derive(Debug, Clone)]
struct LightAnimation {
    width: usize,
    height: usize,
    /// On/off states in row-major order.
    lit: Vec<bool>,
}

impl ParseData for LightAnimation {
    fn parse(input: &str) -> DynamicResult<Self> {
        let mut width: Option<usize> = None;
        let rows: Vec<Vec<bool>> = collect_input_lines(input, |_, line| {
            let row = line
                .chars()
                .map(|character| match character {
                    '#' => Ok(true),
                    '.' => Ok(false),
                    _ => Err(ParseAnimationError::UnrecognizedChar(character)),
                })
                .collect::<Result<Vec<bool>, _>>()?;

            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(ParseAnimationError::UnequalRowWidth {
                    expected,
                    found: row.len(),
                });
            }
            Ok(row)
        })?;

        Ok(Self {
            width: width.unwrap_or(0),
            height: rows.len(),
            lit: rows.into_iter().flatten().collect(),
        })
    }
}

impl LightAnimation {
    fn lit_count(&self) -> usize {
        self.lit.iter().filter(|&&lit| lit).count()
    }

    /// Count the lit lights among the up to eight cells surrounding `(x, y)`.
    fn lit_neighbors(&self, x: usize, y: usize) -> usize {
        let mut count = 0;
        for neighbor_y in y.saturating_sub(1)..=(y + 1).min(self.height - 1) {
            for neighbor_x in x.saturating_sub(1)..=(x + 1).min(self.width - 1) {
                if (neighbor_x, neighbor_y) != (x, y)
                    && self.lit[neighbor_y * self.width + neighbor_x]
                {
                    count += 1;
                }
            }
        }
        count
    }

    /// One step of the animation: every light switches at once based on its current neighbors. A
    /// lit light stays on with 2 or 3 lit neighbors; an unlit light turns on with exactly 3.
    fn stepped(&self) -> Self {
        let lit = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let neighbors = self.lit_neighbors(x, y);
                if self.lit[y * self.width + x] {
                    neighbors == 2 || neighbors == 3
                } else {
                    neighbors == 3
                }
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            lit,
        }
    }

    /// Switch the four corner lights on.
    fn force_corners_on(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        for y in [0, self.height - 1] {
            for x in [0, self.width - 1] {
                self.lit[y * self.width + x] = true;
            }
        }
    }

    /// Run `steps` animation steps and count the lights left on.
    fn animate(&self, steps: u32) -> usize {
        let mut animation = self.clone();
        for _ in 0..steps {
            animation = animation.stepped();
        }
        animation.lit_count()
    }

    /// Run `steps` animation steps with the four corner lights stuck on, forcing them before the
    /// first step and again after every step, and count the lights left on.
    fn animate_with_stuck_corners(&self, steps: u32) -> usize {
        let mut animation = self.clone();
        animation.force_corners_on();
        for _ in 0..steps {
            animation = animation.stepped();
            animation.force_corners_on();
        }
        animation.lit_count()
    }
}

/*
For part 1, animate the grid for 100 steps and count the lights left on. Lights on the edges have
fewer than eight neighbors; the missing ones count as off.
*/

/*
For part 2, the four corner lights are stuck on: they are on before the animation starts and
snap back on after every step. Count again after 100 steps.
*/

struct Day18;

impl Solution<PartOne> for Day18 {
    type Input = LightAnimation;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.animate(ANIMATION_STEPS))
    }
}

impl Solution<PartTwo> for Day18 {
    type Input = LightAnimation;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.animate_with_stuck_corners(ANIMATION_STEPS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = ".#.#.#
...##.
#....#
..#...
#.#..#
####..
";

    #[test]
    fn four_steps_match_the_documented_animation() -> DynamicResult<()> {
        let parsed = LightAnimation::parse(EXAMPLE_INPUT)?;

        let mut animation = parsed.clone();
        let mut lit_counts = Vec::new();
        for _ in 0..4 {
            animation = animation.stepped();
            lit_counts.push(animation.lit_count());
        }
        assert_eq!(lit_counts, vec![11, 8, 4, 4]);
        Ok(())
    }

    #[test]
    fn stuck_corners_match_the_documented_animation() -> DynamicResult<()> {
        let parsed = LightAnimation::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.animate_with_stuck_corners(5), 17);
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = LightAnimation::parse(EXAMPLE_INPUT)?;
        let result = <Day18 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 4);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = LightAnimation::parse(EXAMPLE_INPUT)?;
        let result = <Day18 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 7);
        Ok(())
    }

    #[test]
    fn edge_lights_see_fewer_neighbors() -> DynamicResult<()> {
        let parsed = LightAnimation::parse("##\n##")?;
        assert_eq!(parsed.lit_neighbors(0, 0), 3);
        assert_eq!(parsed.animate(3), 4);
        Ok(())
    }

    #[test]
    fn corners_are_forced_before_the_first_step() -> DynamicResult<()> {
        let parsed = LightAnimation::parse("..\n..")?;
        assert_eq!(parsed.animate(1), 0);
        assert_eq!(parsed.animate_with_stuck_corners(1), 4);
        Ok(())
    }

    #[test]
    fn single_row_grids_animate() -> DynamicResult<()> {
        let parsed = LightAnimation::parse("###")?;
        assert_eq!(parsed.animate(1), 1);
        assert_eq!(parsed.animate(2), 0);
        Ok(())
    }

    #[test]
    fn empty_grids_stay_empty() -> DynamicResult<()> {
        let parsed = LightAnimation::parse("")?;
        assert_eq!(parsed.animate(100), 0);
        assert_eq!(parsed.animate_with_stuck_corners(100), 0);
        Ok(())
    }

    #[test]
    fn parse_rejects_unequal_row_widths() {
        let Err(error) = LightAnimation::parse("##\n#\n") else {
            panic!("parse should fail on a short row");
        };
        assert_eq!(error.to_string(), "failure parsing line 2");
    }

    #[test]
    fn parse_rejects_unrecognized_characters() {
        let Err(error) = LightAnimation::parse("#x\n") else {
            panic!("parse should fail on an unrecognized character");
        };
        assert_eq!(error.to_string(), "failure parsing line 1");
    }
}
