pub mod constants;
pub mod fallback;
pub mod generator;
pub mod policy;

pub use constants::*;
pub use fallback::generic_meal;
pub use generator::{fallback_plan, slots_for, PlanGenerator};
pub use policy::{excluded_terms, permits, permits_name};
