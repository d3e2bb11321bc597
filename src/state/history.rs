use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{MealError, Result};
use crate::models::{format_goal_name, MealPlan, UserInput};
use crate::state::persistence::{load_or_default, save_json};

/// A generated plan kept in history together with the request that made it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub user_input: UserInput,

    #[serde(flatten)]
    pub plan: MealPlan,
}

/// Saved plans, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanHistory {
    plans: Vec<SavedPlan>,
}

impl PlanHistory {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_or_default(path)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_json(path, self)
    }

    /// `"<Goal> Plan - <date>"`, the name used when none is given.
    pub fn default_name(input: &UserInput, at: DateTime<Utc>) -> String {
        let goal = match format_goal_name(&input.goal) {
            name if name.is_empty() => "Meal".to_string(),
            name => name,
        };
        format!("{} Plan - {}", goal, at.format("%Y-%m-%d"))
    }

    /// Store a plan at the front of the history and return it.
    pub fn record(
        &mut self,
        name: Option<String>,
        input: UserInput,
        plan: MealPlan,
        at: DateTime<Utc>,
    ) -> &SavedPlan {
        let id = self.plans.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let name = name.unwrap_or_else(|| Self::default_name(&input, at));
        info!(id, name = %name, "saving plan to history");

        self.plans.insert(
            0,
            SavedPlan {
                id,
                name,
                created_at: at,
                user_input: input,
                plan,
            },
        );
        &self.plans[0]
    }

    pub fn get(&self, id: u64) -> Option<&SavedPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn delete(&mut self, id: u64) -> Result<SavedPlan> {
        let index = self
            .plans
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| MealError::NotFound(format!("plan #{}", id)))?;
        Ok(self.plans.remove(index))
    }

    /// Plans whose name or goal contains `term` (case-insensitive), optionally
    /// limited to one exact goal tag. Newest first.
    pub fn search(&self, term: &str, goal: Option<&str>) -> Vec<&SavedPlan> {
        let term = term.trim().to_lowercase();
        self.plans
            .iter()
            .filter(|p| goal.is_none_or(|g| p.user_input.goal == g))
            .filter(|p| {
                term.is_empty()
                    || p.name.to_lowercase().contains(&term)
                    || p.user_input.goal.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Most recently saved plan.
    pub fn latest(&self) -> Option<&SavedPlan> {
        self.plans.first()
    }

    pub fn plans(&self) -> &[SavedPlan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap()
    }

    fn input(goal: &str) -> UserInput {
        UserInput {
            goal: goal.to_string(),
            meals_per_day: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_record_newest_first_with_increasing_ids() {
        let mut history = PlanHistory::default();
        history.record(None, input("weight_loss"), MealPlan::from_meals(vec![]), at(1));
        history.record(Some("Cut".to_string()), input("weight_loss"), MealPlan::from_meals(vec![]), at(2));

        assert_eq!(history.len(), 2);
        let latest = history.latest().unwrap();
        assert_eq!(latest.id, 2);
        assert_eq!(latest.name, "Cut");
        assert_eq!(history.plans()[1].name, "Weight Loss Plan - 2026-03-01");
    }

    #[test]
    fn test_ids_not_reused_after_delete_of_older() {
        let mut history = PlanHistory::default();
        history.record(None, input("maintain"), MealPlan::from_meals(vec![]), at(1));
        history.record(None, input("maintain"), MealPlan::from_meals(vec![]), at(2));
        history.delete(1).unwrap();

        let id = history
            .record(None, input("maintain"), MealPlan::from_meals(vec![]), at(3))
            .id;
        assert_eq!(id, 3);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut history = PlanHistory::default();
        assert!(matches!(history.delete(9), Err(MealError::NotFound(_))));
    }

    #[test]
    fn test_search_by_name_or_goal_with_goal_filter() {
        let mut history = PlanHistory::default();
        history.record(Some("Summer cut".to_string()), input("weight_loss"), MealPlan::from_meals(vec![]), at(1));
        history.record(None, input("muscle_gain"), MealPlan::from_meals(vec![]), at(2));
        history.record(Some("Bulk week".to_string()), input("muscle_gain"), MealPlan::from_meals(vec![]), at(3));

        let ids = |plans: Vec<&SavedPlan>| plans.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids(history.search("", None)), vec![3, 2, 1]);
        assert_eq!(ids(history.search("CUT", None)), vec![1]);
        assert_eq!(ids(history.search("muscle", None)), vec![3, 2]);
        assert_eq!(ids(history.search("bulk", Some("muscle_gain"))), vec![3]);
        assert_eq!(ids(history.search("", Some("weight_loss"))), vec![1]);
        assert!(history.search("cut", Some("muscle_gain")).is_empty());
        assert!(history.search("", Some("muscle")).is_empty());
    }

    #[test]
    fn test_default_name_without_goal() {
        assert_eq!(PlanHistory::default_name(&input(""), at(5)), "Meal Plan - 2026-03-05");
    }
}
