use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MealError, Result};
use crate::models::{MealSlot, ResolvedMeal};
use crate::state::persistence::{load_or_default, save_json};

/// A meal the user starred, with usage bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteMeal {
    #[serde(flatten)]
    pub meal: ResolvedMeal,
    pub added_date: NaiveDate,
    pub last_used: NaiveDate,
    pub usage_count: u32,
}

/// Favorite meals, most recently added first. Names are unique
/// (case-insensitive).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    meals: Vec<FavoriteMeal>,
}

impl Favorites {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_or_default(path)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_json(path, self)
    }

    /// Add a meal. Returns `false` if a favorite with that name already exists.
    pub fn add(&mut self, meal: ResolvedMeal, today: NaiveDate) -> bool {
        if self.get(&meal.name).is_some() {
            return false;
        }
        self.meals.insert(
            0,
            FavoriteMeal {
                meal,
                added_date: today,
                last_used: today,
                usage_count: 1,
            },
        );
        true
    }

    pub fn get(&self, name: &str) -> Option<&FavoriteMeal> {
        let key = name.to_lowercase();
        self.meals.iter().find(|f| f.meal.key() == key)
    }

    pub fn remove(&mut self, name: &str) -> Result<FavoriteMeal> {
        let key = name.to_lowercase();
        let index = self
            .meals
            .iter()
            .position(|f| f.meal.key() == key)
            .ok_or_else(|| MealError::NotFound(format!("favorite '{}'", name)))?;
        Ok(self.meals.remove(index))
    }

    /// Record that a favorite was reused in a plan.
    pub fn mark_used(&mut self, name: &str, today: NaiveDate) -> Result<&FavoriteMeal> {
        let key = name.to_lowercase();
        let favorite = self
            .meals
            .iter_mut()
            .find(|f| f.meal.key() == key)
            .ok_or_else(|| MealError::NotFound(format!("favorite '{}'", name)))?;
        favorite.usage_count += 1;
        favorite.last_used = today;
        Ok(favorite)
    }

    /// Favorites whose name or description contains `term` (case-insensitive),
    /// optionally limited to one slot.
    pub fn search(&self, term: &str, slot: Option<MealSlot>) -> Vec<&FavoriteMeal> {
        let term = term.trim().to_lowercase();
        self.meals
            .iter()
            .filter(|f| slot.is_none_or(|s| f.meal.slot == s))
            .filter(|f| {
                term.is_empty()
                    || f.meal.name.to_lowercase().contains(&term)
                    || f.meal.description.to_lowercase().contains(&term)
            })
            .collect()
    }

    pub fn all(&self) -> &[FavoriteMeal] {
        &self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
