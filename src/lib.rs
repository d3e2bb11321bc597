pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod service;
pub mod state;
pub mod tips;

pub use catalog::{CatalogHandle, MealCatalog};
pub use error::{MealError, Result};
pub use models::{MealPlan, MealSlot, MealTemplate, NutrientProfile, ResolvedMeal, UserInput};
pub use planner::PlanGenerator;
pub use service::PlanService;
