use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Calories (kcal) and macronutrients (grams) for a meal or a whole plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutrientProfile {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// All fields finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} kcal, P:{}g C:{}g F:{}g",
            self.calories, self.protein, self.carbs, self.fat
        )
    }
}

impl Add for NutrientProfile {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for NutrientProfile {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutrientProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a NutrientProfile> for NutrientProfile {
    fn sum<I: Iterator<Item = &'a NutrientProfile>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_is_element_wise() {
        let meals = [
            NutrientProfile::new(350.0, 15.0, 60.0, 8.0),
            NutrientProfile::new(450.0, 40.0, 35.0, 10.0),
        ];
        let total: NutrientProfile = meals.iter().sum();
        assert_eq!(total, NutrientProfile::new(800.0, 55.0, 95.0, 18.0));
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let total: NutrientProfile = std::iter::empty::<NutrientProfile>().sum();
        assert_eq!(total, NutrientProfile::default());
    }

    #[test]
    fn test_is_valid_rejects_negative() {
        assert!(NutrientProfile::new(100.0, 1.0, 2.0, 3.0).is_valid());
        assert!(!NutrientProfile::new(100.0, -1.0, 2.0, 3.0).is_valid());
        assert!(!NutrientProfile::new(f64::NAN, 1.0, 2.0, 3.0).is_valid());
    }
}
