use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{MealError, Result};
use crate::models::UserInput;

/// Tips attached to generated plans.
pub const PLAN_TIPS: [&str; 10] = [
    "Stay hydrated by drinking at least 8 glasses of water daily.",
    "Include a variety of colorful vegetables for optimal nutrition.",
    "Don't skip breakfast - it kickstarts your metabolism for the day.",
    "Plan your meals ahead to avoid unhealthy last-minute choices.",
    "Listen to your body's hunger and fullness cues.",
    "Include healthy fats like avocado and nuts in your diet.",
    "Meal prep on weekends to save time during busy weekdays.",
    "Balance your plate with protein, carbs, and healthy fats.",
    "Choose whole grains over refined carbohydrates when possible.",
    "Enjoy your favorite foods in moderation - no food is off limits!",
];

/// Used when the configured tip source fails.
pub const FALLBACK_TIPS: [&str; 5] = [
    "Stay hydrated by drinking water throughout the day.",
    "Include colorful vegetables in every meal for diverse nutrients.",
    "Balance your plate with protein, carbs, and healthy fats.",
    "Listen to your body's hunger and fullness signals.",
    "Plan ahead to make healthy eating easier during busy days.",
];

/// General advice not tied to a plan.
pub const GENERAL_TIPS: [&str; 5] = [
    "Eating mindfully can help you enjoy food more and recognize fullness.",
    "Include protein in your breakfast to stay full and energized all morning.",
    "Variety in your diet ensures you get all essential nutrients.",
    "Cook at home more often to control ingredients and portions.",
    "Don't forget to include healthy fats like avocado and nuts in your diet.",
];

/// Supplies the tip attached to a plan.
pub trait TipSource: Send + Sync {
    fn tip(&self, input: &UserInput) -> Result<String>;
}

/// Picks uniformly at random from a fixed list.
#[derive(Debug)]
pub struct StaticTips {
    tips: Vec<String>,
    rng: Mutex<StdRng>,
}

impl StaticTips {
    pub fn new<I, S>(tips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tips: tips.into_iter().map(Into::into).collect(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn plan_tips() -> Self {
        Self::new(PLAN_TIPS)
    }

    pub fn fallback_tips() -> Self {
        Self::new(FALLBACK_TIPS)
    }

    pub fn general_tips() -> Self {
        Self::new(GENERAL_TIPS)
    }

    /// Use a fixed seed for reproducible picks.
    pub fn seeded(self, seed: u64) -> Self {
        Self {
            tips: self.tips,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// A random tip, or `None` when the list is empty.
    pub fn pick(&self) -> Option<String> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.tips.choose(&mut *rng).cloned()
    }
}

impl TipSource for StaticTips {
    fn tip(&self, _input: &UserInput) -> Result<String> {
        self.pick()
            .ok_or_else(|| MealError::TipUnavailable("no tips configured".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_from_list() {
        let tips = StaticTips::plan_tips().seeded(7);
        for _ in 0..20 {
            let tip = tips.pick().unwrap();
            assert!(PLAN_TIPS.contains(&tip.as_str()));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = StaticTips::fallback_tips().seeded(42);
        let b = StaticTips::fallback_tips().seeded(42);
        let seq_a: Vec<_> = (0..5).map(|_| a.pick()).collect();
        let seq_b: Vec<_> = (0..5).map(|_| b.pick()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_empty_source_errors() {
        let tips = StaticTips::new(Vec::<String>::new());
        let err = tips.tip(&UserInput::default()).unwrap_err();
        assert!(matches!(err, MealError::TipUnavailable(_)));
    }
}
