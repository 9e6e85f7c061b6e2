use std::str::FromStr;

use aoc_framework::parsing::{collect_input_lines, parse_with_context};
use aoc_framework::runner::{Example, solution_runner};
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

use crate::checked_product::CheckedProduct;

#[solution_runner(
    name = "Day 15: Science for Hungry People",
    parsed = IngredientList,
    part_one = Day15,
    part_two = Day15,
    examples = EXAMPLES
)]
impl super::AdventOfCode2015<15> {}

const EXAMPLES: &[Example] = &[Example {
    input: "Butterscotch: capacity -1, durability -2, flavor 6, texture 3, calories 8
Cinnamon: capacity 2, durability 3, flavor -2, texture -1, calories 3",
    part_one: Some("62842880"),
    part_two: Some("57600000"),
}];

/*
Input lists the pantry's remaining cookie ingredients and their properties per teaspoon, like
`Butterscotch: capacity -1, durability -2, flavor 6, texture 3, calories 8`.
*/

/// How many teaspoons of ingredients every cookie recipe spends, exactly.
const TOTAL_TEASPOONS: i64 = 100;

/// The calorie total a diet cookie must hit, exactly.
const CALORIE_TARGET: i64 = 500;

/// An error when parsing a line as an [`Ingredient`].
#[derive(thiserror::Error, Debug)]
enum ParseIngredientError {
    #[error("expected \": \" separating the ingredient name from its properties")]
    MissingNameSeparator,

    #[error("expected a property as \"name value\", found {0:?}")]
    ExpectedPropertyFormat(String),

    #[error("unrecognized ingredient property {0:?}")]
    UnknownProperty(String),

    #[error("property {0:?} is given more than once")]
    DuplicateProperty(String),

    #[error("property {0:?} is missing")]
    MissingProperty(&'static str),

    #[error(transparent)]
    InvalidValue(#[from] std::num::ParseIntError),
}

#[derive(thiserror::Error, Debug)]
enum Day15Error {
    #[error("no ingredients to mix")]
    NoIngredients,

    #[error("no mix of the ingredients totals exactly {CALORIE_TARGET} calories")]
    NoMixMatchesCalories,
}

/// A cookie ingredient's properties per teaspoon.
#[derive(Debug)]
struct Ingredient {
    capacity: i32,
    durability: i32,
    flavor: i32,
    texture: i32,
    calories: i32,
}

impl FromStr for Ingredient {
    type Err = ParseIngredientError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let Some((_name, properties)) = line.split_once(": ") else {
            return Err(ParseIngredientError::MissingNameSeparator);
        };

        let mut capacity = None;
        let mut durability = None;
        let mut flavor = None;
        let mut texture = None;
        let mut calories = None;

        for property in properties.split(',').map(str::trim) {
            let Some((name, value)) = property.split_once(' ') else {
                return Err(ParseIngredientError::ExpectedPropertyFormat(
                    property.to_owned(),
                ));
            };
            let value: i32 = value.trim().parse()?;

            let slot = match name {
                "capacity" => &mut capacity,
                "durability" => &mut durability,
                "flavor" => &mut flavor,
                "texture" => &mut texture,
                "calories" => &mut calories,
                unknown => {
                    return Err(ParseIngredientError::UnknownProperty(unknown.to_owned()));
                }
            };
            if slot.replace(value).is_some() {
                return Err(ParseIngredientError::DuplicateProperty(name.to_owned()));
            }
        }

        Ok(Self {
            capacity: capacity.ok_or(ParseIngredientError::MissingProperty("capacity"))?,
            durability: durability.ok_or(ParseIngredientError::MissingProperty("durability"))?,
            flavor: flavor.ok_or(ParseIngredientError::MissingProperty("flavor"))?,
            texture: texture.ok_or(ParseIngredientError::MissingProperty("texture"))?,
            calories: calories.ok_or(ParseIngredientError::MissingProperty("calories"))?,
        })
    }
}

/// Running property totals of a partially mixed recipe.
#[derive(Debug, Clone, Copy, Default)]
struct Mix {
    capacity: i64,
    durability: i64,
    flavor: i64,
    texture: i64,
    calories: i64,
}

impl Mix {
    /// The mix with `spoons` teaspoons of the ingredient stirred in.
    fn with_added(self, ingredient: &Ingredient, spoons: i64) -> Self {
        Self {
            capacity: self.capacity + i64::from(ingredient.capacity) * spoons,
            durability: self.durability + i64::from(ingredient.durability) * spoons,
            flavor: self.flavor + i64::from(ingredient.flavor) * spoons,
            texture: self.texture + i64::from(ingredient.texture) * spoons,
            calories: self.calories + i64::from(ingredient.calories) * spoons,
        }
    }

    /// The cookie's score: the product of the non-calorie property totals, counting a negative
    /// total as zero.
    fn score(self) -> i64 {
        [self.capacity, self.durability, self.flavor, self.texture]
            .into_iter()
            .map(|total| total.max(0))
            .checked_product()
            .expect("should not have integer overflow multiplying the score")
    }
}

/// The pantry's ingredients, in input order.
#[derive(Debug)]
struct IngredientList(Vec<Ingredient>);

impl ParseData for IngredientList {
    fn parse(input: &str) -> DynamicResult<Self> {
        let ingredients =
            collect_input_lines(input, |_, line| parse_with_context::<Ingredient>(line))?;
        Ok(Self(ingredients))
    }
}

impl IngredientList {
    /// The best cookie score over every whole-teaspoon split of [`TOTAL_TEASPOONS`] across the
    /// ingredients, keeping only mixes that hit `calorie_target` when one is given.
    fn best_score(&self, calorie_target: Option<i64>) -> Result<i64, Day15Error> {
        let Some((first, rest)) = self.0.split_first() else {
            return Err(Day15Error::NoIngredients);
        };

        best_mix_score(first, rest, Mix::default(), TOTAL_TEASPOONS, calorie_target)
            .ok_or(Day15Error::NoMixMatchesCalories)
    }
}

/// Try every split of the remaining teaspoons over the remaining ingredients and return the best
/// finished score. The last ingredient takes every teaspoon still unspent, so recipes always
/// total exactly.
fn best_mix_score(
    ingredient: &Ingredient,
    rest: &[Ingredient],
    mix: Mix,
    spoons_left: i64,
    calorie_target: Option<i64>,
) -> Option<i64> {
    let Some((next, remaining)) = rest.split_first() else {
        let finished = mix.with_added(ingredient, spoons_left);
        if calorie_target.is_some_and(|target| finished.calories != target) {
            return None;
        }
        return Some(finished.score());
    };

    (0..=spoons_left)
        .filter_map(|spoons| {
            best_mix_score(
                next,
                remaining,
                mix.with_added(ingredient, spoons),
                spoons_left - spoons,
                calorie_target,
            )
        })
        .max()
}

/*
For part 1, bake the highest-scoring cookie from exactly 100 teaspoons of ingredients. A cookie's
score multiplies its capacity, durability, flavor, and texture totals, counting a negative total
as zero; calories don't factor in. Find that score.
*/

/*
For part 2, the cookie also has to total exactly 500 calories. Find the best score among those
mixes.
*/

struct Day15;

impl Solution<PartOne> for Day15 {
    type Input = IngredientList;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.best_score(None)?)
    }
}

impl Solution<PartTwo> for Day15 {
    type Input = IngredientList;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.best_score(Some(CALORIE_TARGET))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str =
        "Butterscotch: capacity -1, durability -2, flavor 6, texture 3, calories 8
Cinnamon: capacity 2, durability 3, flavor -2, texture -1, calories 3
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = IngredientList::parse(EXAMPLE_INPUT)?;
        let result = <Day15 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 62_842_880);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = IngredientList::parse(EXAMPLE_INPUT)?;
        let result = <Day15 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 57_600_000);
        Ok(())
    }

    #[test]
    fn lone_ingredients_take_every_teaspoon() -> DynamicResult<()> {
        let parsed = IngredientList::parse(
            "Sugar: capacity 1, durability 1, flavor 1, texture 2, calories 1",
        )?;
        assert_eq!(<Day15 as Solution<PartOne>>::solve(&parsed)?, 200_000_000);
        Ok(())
    }

    #[test]
    fn negative_property_totals_zero_the_score() -> DynamicResult<()> {
        let parsed = IngredientList::parse(
            "Soap: capacity -1, durability 1, flavor 1, texture 1, calories 5",
        )?;
        assert_eq!(<Day15 as Solution<PartOne>>::solve(&parsed)?, 0);
        Ok(())
    }

    #[test]
    fn unreachable_calorie_targets_error() -> DynamicResult<()> {
        let parsed = IngredientList::parse(
            "Sugar: capacity 1, durability 1, flavor 1, texture 2, calories 1",
        )?;
        let Err(error) = <Day15 as Solution<PartTwo>>::solve(&parsed) else {
            panic!("solve should fail when no mix hits the calorie target");
        };
        assert_eq!(
            error.to_string(),
            "no mix of the ingredients totals exactly 500 calories"
        );
        Ok(())
    }

    #[test]
    fn empty_pantries_error() -> DynamicResult<()> {
        let parsed = IngredientList::parse("")?;
        let Err(error) = <Day15 as Solution<PartOne>>::solve(&parsed) else {
            panic!("solve should fail without ingredients");
        };
        assert_eq!(error.to_string(), "no ingredients to mix");
        Ok(())
    }

    #[test]
    fn parse_rejects_unknown_properties() {
        let Err(error) =
            "Vanilla: capacity 1, durability 1, flavor 1, texture 1, crunchiness 2".parse::<Ingredient>()
        else {
            panic!("parse should fail on an unrecognized property");
        };
        assert_eq!(error.to_string(), "unrecognized ingredient property \"crunchiness\"");
    }

    #[test]
    fn parse_rejects_duplicate_properties() {
        let Err(error) =
            "Vanilla: capacity 1, capacity 2, durability 1, flavor 1, texture 1, calories 1"
                .parse::<Ingredient>()
        else {
            panic!("parse should fail on a repeated property");
        };
        assert_eq!(error.to_string(), "property \"capacity\" is given more than once");
    }

    #[test]
    fn parse_rejects_missing_properties() {
        let Err(error) = "Vanilla: capacity 1, durability 1, flavor 1, texture 1".parse::<Ingredient>()
        else {
            panic!("parse should fail on a missing property");
        };
        assert_eq!(error.to_string(), "property \"calories\" is missing");
    }
}
