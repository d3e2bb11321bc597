use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::state::favorites::Favorites;
use crate::state::goals::GoalBook;
use crate::state::history::PlanHistory;

/// Goal reported when no plan has been saved yet.
pub const DEFAULT_COMMON_GOAL: &str = "weight_loss";

/// Saved plans per week that count as full weekly progress.
pub const WEEKLY_PLAN_TARGET: f64 = 4.0;

/// Streak is capped at one week.
pub const MAX_STREAK: usize = 7;

/// Score (plans + 2 per completed goal) needed for each achievement level.
pub const EXPERT_SCORE: usize = 10;
pub const INTERMEDIATE_SCORE: usize = 5;

/// Plans below which the user is still getting started.
const EARLY_PLAN_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AchievementLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl AchievementLevel {
    pub fn from_counts(total_plans: usize, completed_goals: usize) -> Self {
        let score = total_plans + completed_goals * 2;
        if score >= EXPERT_SCORE {
            AchievementLevel::Expert
        } else if score >= INTERMEDIATE_SCORE {
            AchievementLevel::Intermediate
        } else {
            AchievementLevel::Beginner
        }
    }
}

impl fmt::Display for AchievementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AchievementLevel::Beginner => "Beginner",
            AchievementLevel::Intermediate => "Intermediate",
            AchievementLevel::Expert => "Expert",
        };
        write!(f, "{}", name)
    }
}

pub fn motivational_message(total_plans: usize, completed_goals: usize) -> &'static str {
    if total_plans == 0 {
        "Ready to start your health journey? Generate your first meal plan!"
    } else if total_plans < EARLY_PLAN_COUNT {
        "Great start! Keep going to build healthy habits."
    } else if completed_goals > 0 {
        "Amazing progress! You're achieving your goals."
    } else {
        "Consistency is key! You're building great habits."
    }
}

/// Summary statistics over saved history, favorites and goals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub total_plans: usize,
    pub total_meals: usize,
    pub favorite_meals: usize,
    pub completed_goals: usize,
    pub active_goals: usize,
    /// Mean plan calories, rounded; 0 without plans.
    pub average_calories: f64,
    pub most_common_goal: String,
    pub dietary_preferences: BTreeMap<String, usize>,
    pub meal_time_distribution: BTreeMap<String, usize>,
    /// Percent, 0 to 100.
    pub weekly_progress: u8,
    pub streak: usize,
    pub achievement_level: AchievementLevel,
    pub message: &'static str,
}

impl Insights {
    pub fn compute(history: &PlanHistory, favorites: &Favorites, goals: &GoalBook) -> Self {
        let plans = history.plans();
        let total_plans = plans.len();
        let total_meals = plans.iter().map(|p| p.plan.len()).sum();

        let total_calories: f64 = plans.iter().map(|p| p.plan.total_nutrients.calories).sum();
        let average_calories = if total_plans > 0 {
            (total_calories / total_plans as f64).round()
        } else {
            0.0
        };

        let mut goal_counts: Vec<(&str, usize)> = Vec::new();
        let mut dietary_preferences = BTreeMap::new();
        let mut meal_time_distribution = BTreeMap::new();
        for saved in plans {
            let goal = saved.user_input.goal.as_str();
            match goal_counts.iter_mut().find(|(g, _)| *g == goal) {
                Some((_, count)) => *count += 1,
                None => goal_counts.push((goal, 1)),
            }

            *dietary_preferences
                .entry(saved.user_input.dietary_preference.clone())
                .or_insert(0) += 1;

            for meal in &saved.plan.meals {
                *meal_time_distribution
                    .entry(meal.slot.as_str().to_string())
                    .or_insert(0) += 1;
            }
        }

        // Ties go to the goal seen last in history order (newest first), so
        // the older plan's goal wins.
        let most_common_goal = goal_counts
            .iter()
            .fold(None::<(&str, usize)>, |best, &(goal, count)| match best {
                Some((_, best_count)) if best_count > count => best,
                _ => Some((goal, count)),
            })
            .map(|(goal, _)| goal.to_string())
            .unwrap_or_else(|| DEFAULT_COMMON_GOAL.to_string());

        let weekly_progress =
            ((total_plans as f64 / WEEKLY_PLAN_TARGET) * 100.0).round().min(100.0) as u8;

        let completed_goals = goals.completed_count();

        Self {
            total_plans,
            total_meals,
            favorite_meals: favorites.len(),
            completed_goals,
            active_goals: goals.active_count(),
            average_calories,
            most_common_goal,
            dietary_preferences,
            meal_time_distribution,
            weekly_progress,
            streak: total_plans.min(MAX_STREAK),
            achievement_level: AchievementLevel::from_counts(total_plans, completed_goals),
            message: motivational_message(total_plans, completed_goals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state() {
        let insights = Insights::compute(
            &PlanHistory::default(),
            &Favorites::default(),
            &GoalBook::default(),
        );
        assert_eq!(insights.total_plans, 0);
        assert_eq!(insights.average_calories, 0.0);
        assert_eq!(insights.most_common_goal, DEFAULT_COMMON_GOAL);
        assert_eq!(insights.weekly_progress, 0);
        assert_eq!(insights.streak, 0);
        assert!(insights.meal_time_distribution.is_empty());
        assert_eq!(insights.achievement_level, AchievementLevel::Beginner);
        assert!(insights.message.starts_with("Ready to start"));
    }

    #[test]
    fn test_achievement_level_thresholds() {
        assert_eq!(AchievementLevel::from_counts(4, 0), AchievementLevel::Beginner);
        assert_eq!(AchievementLevel::from_counts(5, 0), AchievementLevel::Intermediate);
        assert_eq!(AchievementLevel::from_counts(1, 2), AchievementLevel::Intermediate);
        assert_eq!(AchievementLevel::from_counts(9, 0), AchievementLevel::Intermediate);
        assert_eq!(AchievementLevel::from_counts(6, 2), AchievementLevel::Expert);
        assert_eq!(AchievementLevel::Expert.to_string(), "Expert");
    }

    #[test]
    fn test_motivational_message_by_progress() {
        assert!(motivational_message(0, 3).starts_with("Ready to start"));
        assert!(motivational_message(2, 1).starts_with("Great start"));
        assert!(motivational_message(3, 1).starts_with("Amazing progress"));
        assert!(motivational_message(5, 0).starts_with("Consistency is key"));
    }
}
