use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::input::UserInput;
use crate::models::nutrients::NutrientProfile;

/// Scheduling unit for a single meal within a day.
///
/// Variant order is the canonical day order used by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    /// Canonical order in which a day's slots are filled.
    pub const ORDER: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }

    /// Capitalized form for display.
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            "snack" => Ok(MealSlot::Snack),
            other => Err(format!("unknown meal slot '{}'", other)),
        }
    }
}

/// Renders a template description for one request.
pub type DescriptionResolver = fn(&UserInput, &str) -> String;

/// Template description: fixed text, or text computed from the request.
#[derive(Debug, Clone)]
pub enum Description {
    Literal(String),
    /// Called with the user input and its raw ingredients text.
    Resolver(DescriptionResolver),
}

impl Description {
    pub fn render(&self, input: &UserInput, ingredients: &str) -> String {
        match self {
            Description::Literal(text) => text.clone(),
            Description::Resolver(resolve) => resolve(input, ingredients),
        }
    }
}

/// A catalog entry describing one possible meal.
#[derive(Debug, Clone)]
pub struct MealTemplate {
    pub name: String,
    pub slot: MealSlot,
    pub nutrients: NutrientProfile,
    pub description: Description,
}

impl MealTemplate {
    pub fn literal(
        name: impl Into<String>,
        slot: MealSlot,
        nutrients: NutrientProfile,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            slot,
            nutrients,
            description: Description::Literal(description.into()),
        }
    }

    pub fn with_resolver(
        name: impl Into<String>,
        slot: MealSlot,
        nutrients: NutrientProfile,
        resolver: DescriptionResolver,
    ) -> Self {
        Self {
            name: name.into(),
            slot,
            nutrients,
            description: Description::Resolver(resolver),
        }
    }

    /// Render the description for `input`, producing the meal handed to callers.
    pub fn resolve(&self, input: &UserInput) -> ResolvedMeal {
        ResolvedMeal {
            name: self.name.clone(),
            slot: self.slot,
            description: self.description.render(input, &input.ingredients),
            nutrients: self.nutrients,
        }
    }
}

/// A meal with its description rendered for a specific request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMeal {
    pub name: String,

    #[serde(rename = "mealTime")]
    pub slot: MealSlot,

    pub description: String,

    pub nutrients: NutrientProfile,
}

impl ResolvedMeal {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(input: &UserInput, ingredients: &str) -> String {
        format!("{}:{}", input.dietary_preference, ingredients)
    }

    #[test]
    fn test_slot_order_matches_ord() {
        let mut slots = vec![MealSlot::Snack, MealSlot::Breakfast, MealSlot::Dinner, MealSlot::Lunch];
        slots.sort();
        assert_eq!(slots, MealSlot::ORDER.to_vec());
    }

    #[test]
    fn test_slot_from_str() {
        assert_eq!("Breakfast".parse::<MealSlot>(), Ok(MealSlot::Breakfast));
        assert_eq!(" snack".parse::<MealSlot>(), Ok(MealSlot::Snack));
        assert!("brunch".parse::<MealSlot>().is_err());
    }

    #[test]
    fn test_literal_and_resolver_descriptions() {
        let input = UserInput {
            dietary_preference: "vegan".to_string(),
            ingredients: "kale".to_string(),
            meals_per_day: 1,
            ..Default::default()
        };
        let nutrients = NutrientProfile::new(100.0, 1.0, 1.0, 1.0);

        let fixed = MealTemplate::literal("Toast", MealSlot::Breakfast, nutrients, "Plain toast");
        assert_eq!(fixed.resolve(&input).description, "Plain toast");

        let dynamic = MealTemplate::with_resolver("Bowl", MealSlot::Lunch, nutrients, shout);
        let meal = dynamic.resolve(&input);
        assert_eq!(meal.description, "vegan:kale");
        assert_eq!(meal.slot, MealSlot::Lunch);
        assert_eq!(meal.nutrients, nutrients);
    }

    #[test]
    fn test_resolved_meal_serializes_meal_time() {
        let meal = ResolvedMeal {
            name: "Toast".to_string(),
            slot: MealSlot::Breakfast,
            description: "Plain toast".to_string(),
            nutrients: NutrientProfile::new(100.0, 3.0, 20.0, 1.0),
        };
        let json = serde_json::to_value(&meal).unwrap();
        assert_eq!(json["mealTime"], "breakfast");
        assert_eq!(json["nutrients"]["calories"], 100.0);
    }
}
