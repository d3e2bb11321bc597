use serde::{Deserialize, Serialize};

use crate::models::meal::ResolvedMeal;
use crate::models::nutrients::NutrientProfile;

/// A generated day of meals with its nutrient total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Meals in slot order.
    pub meals: Vec<ResolvedMeal>,

    /// Element-wise sum of every meal's nutrients.
    pub total_nutrients: NutrientProfile,

    /// Attached by the caller; empty when freshly generated.
    #[serde(default)]
    pub tip: String,
}

impl MealPlan {
    /// Build a plan from meals, computing the total.
    pub fn from_meals(meals: Vec<ResolvedMeal>) -> Self {
        let total_nutrients = meals.iter().map(|m| &m.nutrients).sum();
        Self {
            meals,
            total_nutrients,
            tip: String::new(),
        }
    }

    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = tip.into();
        self
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Find a meal by name (case-insensitive).
    pub fn find_meal(&self, name: &str) -> Option<&ResolvedMeal> {
        let key = name.to_lowercase();
        self.meals.iter().find(|m| m.key() == key)
    }
}
