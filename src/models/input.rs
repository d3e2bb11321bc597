use serde::{Deserialize, Serialize};

use crate::error::{MealError, Result};

/// Largest meals-per-day value accepted by [`UserInput::validate`].
pub const MAX_MEALS_PER_DAY: u32 = 6;

/// Caller-supplied request for a meal plan.
///
/// Field names follow the camelCase request payload (`mealsPerDay`,
/// `dietaryPreference`, ...). Only `mealsPerDay` is required when
/// deserializing; everything else falls back to an empty/zero default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub age: u32,

    /// Body weight in kilograms.
    #[serde(default)]
    pub weight: f64,

    /// Height in centimetres.
    #[serde(default)]
    pub height: f64,

    #[serde(default)]
    pub activity_level: String,

    /// Goal tag, e.g. `weight_loss`, `muscle_gain`, `maintain`.
    #[serde(default)]
    pub goal: String,

    /// Dietary-preference tag, e.g. `vegan`, `vegetarian`, `pescatarian`, `none`.
    #[serde(default)]
    pub dietary_preference: String,

    /// Free-text, comma-separated ingredients. May be empty.
    #[serde(default)]
    pub ingredients: String,

    pub meals_per_day: u32,

    #[serde(default)]
    pub plan_duration: String,
}

impl UserInput {
    /// Interpret the dietary-preference tag.
    pub fn diet(&self) -> Diet {
        Diet::from_tag(&self.dietary_preference)
    }

    /// Range checks performed by callers before planning.
    ///
    /// The planner itself never calls this; it accepts any input.
    pub fn validate(&self) -> Result<()> {
        if !(1..=120).contains(&self.age) {
            return Err(MealError::InvalidInput(format!(
                "age must be between 1 and 120, got {}",
                self.age
            )));
        }
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(MealError::InvalidInput(
                "weight must be a positive number".to_string(),
            ));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(MealError::InvalidInput(
                "height must be a positive number".to_string(),
            ));
        }
        if !(1..=MAX_MEALS_PER_DAY).contains(&self.meals_per_day) {
            return Err(MealError::InvalidInput(format!(
                "meals per day must be between 1 and {}, got {}",
                MAX_MEALS_PER_DAY, self.meals_per_day
            )));
        }
        Ok(())
    }
}

/// Dietary restriction tier derived from the free-form preference tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diet {
    Vegan,
    Vegetarian,
    Pescatarian,
    Unrestricted,
}

impl Diet {
    /// Tags offered to users; anything else is treated as unrestricted.
    pub const KNOWN_TAGS: [&'static str; 4] = ["vegan", "vegetarian", "pescatarian", "none"];

    /// Exact match on the lowercase tag; anything else, including other
    /// casings, maps to `Unrestricted`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "vegan" => Diet::Vegan,
            "vegetarian" => Diet::Vegetarian,
            "pescatarian" => Diet::Pescatarian,
            _ => Diet::Unrestricted,
        }
    }
}

/// `weight_loss` -> `Weight Loss`.
pub fn format_goal_name(goal: &str) -> String {
    goal.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// First comma-separated token of an ingredient list, trimmed.
///
/// Returns `None` for blank input or a blank leading token.
pub fn first_ingredient(ingredients: &str) -> Option<&str> {
    ingredients
        .split(',')
        .next()
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
