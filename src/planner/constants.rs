use crate::models::{MealSlot, NutrientProfile};

/// Number of meal-time slots in a day; meals per day beyond this are capped.
pub const SLOTS_PER_DAY: usize = MealSlot::ORDER.len();

// ─────────────────────────────────────────────────────────────────────────────
// Dietary exclusion denylists (case-insensitive substrings of template names)
// ─────────────────────────────────────────────────────────────────────────────

pub const VEGAN_EXCLUDED: &[&str] = &["chicken", "salmon", "yogurt", "egg"];

pub const VEGETARIAN_EXCLUDED: &[&str] = &["chicken", "salmon"];

pub const PESCATARIAN_EXCLUDED: &[&str] = &["chicken"];

// ─────────────────────────────────────────────────────────────────────────────
// Generic meals used when the catalog cannot fill a slot
// ─────────────────────────────────────────────────────────────────────────────

/// One generic meal per slot. `{}` in the description is replaced by the
/// dietary-preference tag.
pub struct GenericMeal {
    pub slot: MealSlot,
    pub name: &'static str,
    pub description: &'static str,
    pub nutrients: NutrientProfile,
}

pub static GENERIC_MEALS: [GenericMeal; SLOTS_PER_DAY] = [
    GenericMeal {
        slot: MealSlot::Breakfast,
        name: "Energy Breakfast",
        description: "Nutritious {} breakfast to start your day",
        nutrients: NutrientProfile::new(350.0, 15.0, 55.0, 8.0),
    },
    GenericMeal {
        slot: MealSlot::Lunch,
        name: "Balanced Lunch",
        description: "Satisfying {} lunch for sustained energy",
        nutrients: NutrientProfile::new(420.0, 20.0, 45.0, 12.0),
    },
    GenericMeal {
        slot: MealSlot::Dinner,
        name: "Hearty Dinner",
        description: "Complete {} dinner with all essential nutrients",
        nutrients: NutrientProfile::new(480.0, 30.0, 40.0, 15.0),
    },
    GenericMeal {
        slot: MealSlot::Snack,
        name: "Healthy Snack",
        description: "Light {} snack to keep you going",
        nutrients: NutrientProfile::new(180.0, 8.0, 22.0, 6.0),
    },
];

/// Word used in generic descriptions when no dietary preference was given.
pub const UNSPECIFIED_DIET_WORD: &str = "balanced";
