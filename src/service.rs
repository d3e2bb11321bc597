use tracing::{info, warn};

use crate::catalog::CatalogHandle;
use crate::error::Result;
use crate::models::{MealPlan, UserInput};
use crate::planner::fallback_plan;
use crate::tips::{StaticTips, TipSource, FALLBACK_TIPS};

/// Request-level entry point: validates requests, generates the plan and
/// attaches a tip.
pub struct PlanService {
    catalog: CatalogHandle,
    tips: Box<dyn TipSource>,
    fallback_tips: StaticTips,
}

impl PlanService {
    pub fn new(catalog: CatalogHandle, tips: Box<dyn TipSource>) -> Self {
        Self {
            catalog,
            tips,
            fallback_tips: StaticTips::fallback_tips(),
        }
    }

    pub fn with_fallback_tips(mut self, fallback_tips: StaticTips) -> Self {
        self.fallback_tips = fallback_tips;
        self
    }

    pub fn catalog(&self) -> &CatalogHandle {
        &self.catalog
    }

    /// Generate a plan for an already validated input and attach a tip.
    pub fn handle(&self, input: &UserInput) -> MealPlan {
        let plan = self.catalog.generator().generate(input);
        info!(
            meals = plan.len(),
            diet = %input.dietary_preference,
            "generated meal plan"
        );
        let tip = self.tip_for(input);
        plan.with_tip(tip)
    }

    /// Parse and validate a JSON request payload, then [`handle`](Self::handle) it.
    pub fn handle_json(&self, body: &str) -> Result<MealPlan> {
        let input: UserInput = serde_json::from_str(body)?;
        input.validate()?;
        Ok(self.handle(&input))
    }

    /// A plan made only of generic meals, for when an upstream integration
    /// (such as an external catalog) failed.
    pub fn fallback_response(&self, input: &UserInput) -> MealPlan {
        fallback_plan(input).with_tip(self.static_tip())
    }

    fn tip_for(&self, input: &UserInput) -> String {
        match self.tips.tip(input) {
            Ok(tip) => tip,
            Err(e) => {
                warn!(error = %e, "tip source failed, using a static tip");
                self.static_tip()
            }
        }
    }

    fn static_tip(&self) -> String {
        self.fallback_tips
            .pick()
            .unwrap_or_else(|| FALLBACK_TIPS[0].to_string())
    }
}

impl Default for PlanService {
    fn default() -> Self {
        Self::new(CatalogHandle::default(), Box::new(StaticTips::plan_tips()))
    }
}
