pub mod input;
pub mod meal;
pub mod nutrients;
pub mod plan;

pub use input::{first_ingredient, format_goal_name, Diet, UserInput, MAX_MEALS_PER_DAY};
pub use meal::{Description, DescriptionResolver, MealSlot, MealTemplate, ResolvedMeal};
pub use nutrients::NutrientProfile;
pub use plan::MealPlan;
