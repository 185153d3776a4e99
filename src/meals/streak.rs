//! Diet streak: the leading run of meals logged within the diet plan.
//!
//! The streak is measured from the first meal of a creation-ordered list and
//! ends at the first meal that is not within the diet. Meals after that point
//! are never inspected, even when they are within the diet again.

use serde_json::Value;

use super::repo_types::Meal;

/// A record carrying a within-diet flag.
///
/// Implementations must coerce their flag to a plain `bool`; anything that is
/// not unambiguously `true` counts as off-diet.
pub trait DietFlag {
    fn is_within_diet(&self) -> bool;
}

impl DietFlag for Meal {
    fn is_within_diet(&self) -> bool {
        self.within_diet
    }
}

impl DietFlag for bool {
    fn is_within_diet(&self) -> bool {
        *self
    }
}

/// Raw JSON meal records, where relational storage may have surfaced the
/// flag as `0`/`1` or under its legacy camel-case key.
impl DietFlag for Value {
    fn is_within_diet(&self) -> bool {
        let flag = self.get("within_diet").or_else(|| self.get("withinDiet"));
        match flag {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_i64() == Some(1),
            _ => false,
        }
    }
}

/// Longest prefix of `meals` whose flags are all within diet, with its length.
pub fn leading_diet_streak<T: DietFlag>(meals: &[T]) -> (&[T], usize) {
    let len = meals
        .iter()
        .position(|m| !m.is_within_diet())
        .unwrap_or(meals.len());
    (&meals[..len], len)
}
