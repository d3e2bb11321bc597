use crate::models::{MealSlot, ResolvedMeal};
use crate::planner::constants::{GenericMeal, GENERIC_MEALS, UNSPECIFIED_DIET_WORD};

fn generic_entry(slot: MealSlot) -> &'static GenericMeal {
    // GENERIC_MEALS is declared in MealSlot::ORDER order.
    &GENERIC_MEALS[slot as usize]
}

/// The generic meal for `slot`, worded for the given dietary-preference tag.
pub fn generic_meal(slot: MealSlot, dietary_preference: &str) -> ResolvedMeal {
    let entry = generic_entry(slot);
    let word = match dietary_preference.trim() {
        "" => UNSPECIFIED_DIET_WORD,
        tag => tag,
    };
    ResolvedMeal {
        name: entry.name.to_string(),
        slot: entry.slot,
        description: entry.description.replace("{}", word),
        nutrients: entry.nutrients,
    }
}
