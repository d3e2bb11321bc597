//! Dietary eligibility of catalog templates.
//!
//! This is a name-based heuristic: a template is excluded when its name
//! contains a denylisted word for the diet. Descriptions are not inspected,
//! so a template named neutrally but rendered with, say, "eggs" passes the
//! vegan filter. Swapping in real ingredient tags only needs changes here.

use crate::models::{Diet, MealTemplate};
use crate::planner::constants::{PESCATARIAN_EXCLUDED, VEGAN_EXCLUDED, VEGETARIAN_EXCLUDED};

/// Lowercase name fragments that disqualify a template for `diet`.
pub fn excluded_terms(diet: Diet) -> &'static [&'static str] {
    match diet {
        Diet::Vegan => VEGAN_EXCLUDED,
        Diet::Vegetarian => VEGETARIAN_EXCLUDED,
        Diet::Pescatarian => PESCATARIAN_EXCLUDED,
        Diet::Unrestricted => &[],
    }
}

/// Whether a meal named `name` is allowed under `diet`.
pub fn permits_name(diet: Diet, name: &str) -> bool {
    let name = name.to_lowercase();
    !excluded_terms(diet).iter().any(|term| name.contains(term))
}

/// Whether `template` is allowed under `diet`.
pub fn permits(diet: Diet, template: &MealTemplate) -> bool {
    permits_name(diet, &template.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vegan_denylist() {
        assert!(!permits_name(Diet::Vegan, "Grilled Chicken Bowl"));
        assert!(!permits_name(Diet::Vegan, "Salmon with Quinoa"));
        assert!(!permits_name(Diet::Vegan, "Greek YOGURT Snack"));
        assert!(!permits_name(Diet::Vegan, "Egg Muffin"));
        assert!(permits_name(Diet::Vegan, "Vegetable Stir Fry"));
        assert!(permits_name(Diet::Vegan, "Protein Power Breakfast"));
    }

    #[test]
    fn test_vegetarian_and_pescatarian() {
        assert!(!permits_name(Diet::Vegetarian, "Salmon with Quinoa"));
        assert!(permits_name(Diet::Vegetarian, "Greek Yogurt Snack"));

        assert!(!permits_name(Diet::Pescatarian, "Grilled Chicken Bowl"));
        assert!(permits_name(Diet::Pescatarian, "Salmon with Quinoa"));
    }

    #[test]
    fn test_unrestricted_permits_everything() {
        assert!(excluded_terms(Diet::Unrestricted).is_empty());
        assert!(permits_name(Diet::Unrestricted, "Grilled Chicken Bowl"));
    }
}
