use std::sync::Arc;

use tracing::debug;

use crate::catalog::MealCatalog;
use crate::models::{MealPlan, MealSlot, ResolvedMeal, UserInput};
use crate::planner::constants::SLOTS_PER_DAY;
use crate::planner::fallback::generic_meal;
use crate::planner::policy;

/// The slots a plan with `meals_per_day` meals covers, in canonical order.
///
/// Capped at the number of slots in a day.
pub fn slots_for(meals_per_day: u32) -> &'static [MealSlot] {
    let count = usize::try_from(meals_per_day)
        .unwrap_or(SLOTS_PER_DAY)
        .min(SLOTS_PER_DAY);
    &MealSlot::ORDER[..count]
}

/// A plan made only of generic meals, one per slot in the window.
///
/// Used when callers cannot produce a catalog-backed plan at all.
pub fn fallback_plan(input: &UserInput) -> MealPlan {
    let meals = slots_for(input.meals_per_day)
        .iter()
        .map(|slot| generic_meal(*slot, &input.dietary_preference))
        .collect();
    MealPlan::from_meals(meals)
}

/// Builds meal plans from a catalog.
///
/// Generation is pure: the same input and catalog always give the same plan,
/// and a generator can be shared across threads.
#[derive(Debug, Clone)]
pub struct PlanGenerator {
    catalog: Arc<MealCatalog>,
}

impl PlanGenerator {
    pub fn new(catalog: Arc<MealCatalog>) -> Self {
        Self { catalog }
    }

    /// Generate a plan for `input`.
    ///
    /// Fills the first `min(meals_per_day, 4)` slots with the first catalog
    /// template the diet permits, then plugs any gaps with generic meals.
    /// Never fails. `meals_per_day` is not range-checked: 0 yields an empty
    /// plan and anything above 4 yields 4 meals.
    pub fn generate(&self, input: &UserInput) -> MealPlan {
        let diet = input.diet();
        let slots = slots_for(input.meals_per_day);

        let mut picks: Vec<(MealSlot, Option<ResolvedMeal>)> = slots
            .iter()
            .map(|&slot| {
                let pick = self
                    .catalog
                    .templates_for_slot(slot)
                    .into_iter()
                    .find(|t| policy::permits(diet, t))
                    .map(|t| t.resolve(input));
                if pick.is_none() {
                    debug!(%slot, ?diet, "no permitted template for slot");
                }
                (slot, pick)
            })
            .collect();

        let produced = picks.iter().filter(|(_, pick)| pick.is_some()).count();
        let mut shortfall = (input.meals_per_day as usize).saturating_sub(produced);

        for (slot, pick) in picks.iter_mut() {
            if shortfall == 0 {
                break;
            }
            if pick.is_none() {
                debug!(%slot, "filling slot with generic meal");
                *pick = Some(generic_meal(*slot, &input.dietary_preference));
                shortfall -= 1;
            }
        }

        let meals: Vec<ResolvedMeal> = picks.into_iter().filter_map(|(_, pick)| pick).collect();
        let plan = MealPlan::from_meals(meals);
        debug!(
            meals = plan.len(),
            total = %plan.total_nutrients.debug_string(),
            "generated plan"
        );
        plan
    }

    /// Same as the free function [`fallback_plan`].
    pub fn fallback_plan(&self, input: &UserInput) -> MealPlan {
        fallback_plan(input)
    }
}

impl Default for PlanGenerator {
    fn default() -> Self {
        Self::new(Arc::new(MealCatalog::builtin()))
    }
}
