use std::fmt;
use std::path::Path;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{MealError, Result};
use crate::models::format_goal_name;
use crate::state::history::SavedPlan;
use crate::state::persistence::{load_or_default, save_json};

/// Days from creation to the deadline of goals derived from a plan.
pub const DERIVED_GOAL_DAYS: u64 = 30;

/// Weight change (kg) targeted by derived weight goals.
pub const DERIVED_WEIGHT_DELTA: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    WeightLoss,
    MuscleGain,
    Fitness,
    Nutrition,
    Other,
}

impl GoalKind {
    /// Map a plan goal tag to a goal kind; unknown tags become `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "weight_loss" => GoalKind::WeightLoss,
            "muscle_gain" => GoalKind::MuscleGain,
            "fitness" => GoalKind::Fitness,
            "nutrition" => GoalKind::Nutrition,
            _ => GoalKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalKind::WeightLoss => "weight_loss",
            GoalKind::MuscleGain => "muscle_gain",
            GoalKind::Fitness => "fitness",
            GoalKind::Nutrition => "nutrition",
            GoalKind::Other => "other",
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_goal_name(self.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: GoalKind,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    pub deadline: NaiveDate,
    /// Percent, 0 to 100.
    pub progress: u8,
    pub created_at: NaiveDate,
    pub completed: bool,
}

/// Fields supplied when creating a goal by hand.
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub title: String,
    pub description: String,
    pub kind: GoalKind,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    pub deadline: NaiveDate,
}

/// `current / target` as a whole percentage, capped at 100.
pub fn progress_percent(current: f64, target: f64) -> u8 {
    if target <= 0.0 || current <= 0.0 {
        return 0;
    }
    ((current / target) * 100.0).round().min(100.0) as u8
}

/// Signed number of days from `today` until the goal's deadline.
pub fn days_remaining(goal: &Goal, today: NaiveDate) -> i64 {
    (goal.deadline - today).num_days()
}

/// The user's goals, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalBook {
    goals: Vec<Goal>,
}

impl GoalBook {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_or_default(path)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_json(path, self)
    }

    fn next_id(&self) -> u64 {
        self.goals.iter().map(|g| g.id).max().unwrap_or(0) + 1
    }

    pub fn add(&mut self, new: NewGoal, today: NaiveDate) -> Result<&Goal> {
        if new.title.trim().is_empty() {
            return Err(MealError::InvalidInput("goal title is required".to_string()));
        }
        if !(new.target_value.is_finite() && new.target_value != 0.0) {
            return Err(MealError::InvalidInput(
                "goal target must be a non-zero number".to_string(),
            ));
        }

        let goal = Goal {
            id: self.next_id(),
            progress: progress_percent(new.current_value, new.target_value),
            title: new.title,
            description: new.description,
            kind: new.kind,
            target_value: new.target_value,
            current_value: new.current_value,
            unit: if new.unit.is_empty() { "kg".to_string() } else { new.unit },
            deadline: new.deadline,
            created_at: today,
            completed: false,
        };
        self.goals.insert(0, goal);
        Ok(&self.goals[0])
    }

    /// Flip the completed flag. Progress is set to 100 either way.
    pub fn toggle_complete(&mut self, id: u64) -> Result<&Goal> {
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| MealError::NotFound(format!("goal #{}", id)))?;
        goal.completed = !goal.completed;
        goal.progress = 100;
        Ok(goal)
    }

    pub fn delete(&mut self, id: u64) -> Result<Goal> {
        let index = self
            .goals
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| MealError::NotFound(format!("goal #{}", id)))?;
        Ok(self.goals.remove(index))
    }

    /// Replace the goals with a weight goal and a meal-schedule goal built
    /// from a saved plan's request.
    pub fn derive_from_plan(&mut self, saved: &SavedPlan, today: NaiveDate) -> &[Goal] {
        let input = &saved.user_input;
        let deadline = today
            .checked_add_days(Days::new(DERIVED_GOAL_DAYS))
            .unwrap_or(today);
        let kind = GoalKind::from_tag(&input.goal);
        let target_weight = match kind {
            GoalKind::WeightLoss => input.weight - DERIVED_WEIGHT_DELTA,
            GoalKind::MuscleGain => input.weight + DERIVED_WEIGHT_DELTA,
            _ => input.weight,
        };
        let first_id = self.next_id();

        self.goals = vec![
            Goal {
                id: first_id,
                title: format!("{} Goal", format_goal_name(&input.goal)),
                description: format!(
                    "Achieve your {} goal through personalized meal planning and exercise",
                    input.goal.replace('_', " ")
                ),
                kind,
                target_value: target_weight,
                current_value: input.weight,
                unit: "kg".to_string(),
                deadline,
                progress: 0,
                created_at: today,
                completed: false,
            },
            Goal {
                id: first_id + 1,
                title: format!("Follow {} Meals Daily", input.meals_per_day),
                description: format!(
                    "Maintain a consistent {}-meal daily eating schedule",
                    input.meals_per_day
                ),
                kind: GoalKind::Nutrition,
                target_value: DERIVED_GOAL_DAYS as f64,
                current_value: 0.0,
                unit: "days".to_string(),
                deadline,
                progress: 0,
                created_at: today,
                completed: false,
            },
        ];
        &self.goals
    }

    pub fn all(&self) -> &[Goal] {
        &self.goals
    }

    pub fn completed_count(&self) -> usize {
        self.goals.iter().filter(|g| g.completed).count()
    }

    pub fn active_count(&self) -> usize {
        self.goals.len() - self.completed_count()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn new_goal(title: &str, target: f64, current: f64) -> NewGoal {
        NewGoal {
            title: title.to_string(),
            description: String::new(),
            kind: GoalKind::Fitness,
            target_value: target,
            current_value: current,
            unit: String::new(),
            deadline: day(31),
        }
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(5.0, 10.0), 50);
        assert_eq!(progress_percent(15.0, 10.0), 100);
        assert_eq!(progress_percent(0.0, 10.0), 0);
        assert_eq!(progress_percent(1.0, 3.0), 33);
    }

    #[test]
    fn test_add_validates_and_defaults_unit() {
        let mut goals = GoalBook::default();
        assert!(goals.add(new_goal("", 10.0, 0.0), day(1)).is_err());
        assert!(goals.add(new_goal("Run", 0.0, 0.0), day(1)).is_err());

        let goal = goals.add(new_goal("Run", 20.0, 5.0), day(1)).unwrap();
        assert_eq!(goal.id, 1);
        assert_eq!(goal.unit, "kg");
        assert_eq!(goal.progress, 25);
        assert!(!goal.completed);
    }

    #[test]
    fn test_toggle_complete() {
        let mut goals = GoalBook::default();
        goals.add(new_goal("Run", 20.0, 5.0), day(1)).unwrap();

        let goal = goals.toggle_complete(1).unwrap();
        assert!(goal.completed);
        assert_eq!(goal.progress, 100);
        assert_eq!(goals.completed_count(), 1);
        assert_eq!(goals.active_count(), 0);

        assert!(!goals.toggle_complete(1).unwrap().completed);
        assert!(goals.toggle_complete(42).is_err());
    }

    #[test]
    fn test_days_remaining() {
        let mut goals = GoalBook::default();
        let goal = goals.add(new_goal("Run", 20.0, 5.0), day(1)).unwrap().clone();
        assert_eq!(days_remaining(&goal, day(1)), 30);
        assert_eq!(days_remaining(&goal, day(31)), 0);
    }

    #[test]
    fn test_goal_kind_serializes_as_type() {
        let mut goals = GoalBook::default();
        goals.add(new_goal("Run", 20.0, 5.0), day(1)).unwrap();
        let json = serde_json::to_value(goals.all()).unwrap();
        assert_eq!(json[0]["type"], "fitness");
        assert_eq!(json[0]["deadline"], "2026-03-31");
    }
}
