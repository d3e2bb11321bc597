use chrono::NaiveDate;

use crate::catalog::MealCatalog;
use crate::models::{Description, MealPlan};
use crate::state::{days_remaining, FavoriteMeal, Goal, Insights, SavedPlan};

/// Display a meal plan in a formatted table.
pub fn display_meal_plan(plan: &MealPlan) {
    if plan.is_empty() {
        println!("No meals planned (meals per day was 0).");
        return;
    }

    println!();
    println!("=== Meal Plan ===");
    println!();

    let max_name_len = plan.meals.iter().map(|m| m.name.len()).max().unwrap_or(10);

    for (i, meal) in plan.meals.iter().enumerate() {
        println!(
            "{:>3}. {:<9} {:<width$} - {:>4.0} kcal | P {:>3.0}g C {:>3.0}g F {:>3.0}g",
            i + 1,
            meal.slot.label(),
            meal.name,
            meal.nutrients.calories,
            meal.nutrients.protein,
            meal.nutrients.carbs,
            meal.nutrients.fat,
            width = max_name_len
        );
        println!("     {}", meal.description);
    }

    let total = &plan.total_nutrients;
    println!();
    println!("--- Totals ---");
    println!("Meals: {}", plan.len());
    println!("Calories: {:.0} kcal", total.calories);
    println!("Protein: {:.0}g  Carbs: {:.0}g  Fat: {:.0}g", total.protein, total.carbs, total.fat);

    if !plan.tip.is_empty() {
        println!();
        println!("Tip: {}", plan.tip);
    }
    println!();
}

/// Display the catalog grouped by slot.
pub fn display_catalog(catalog: &MealCatalog) {
    let slots = catalog.available_slots();
    println!("=== Catalog ({} templates, {} slots) ===", catalog.len(), slots.len());

    for slot in slots {
        println!();
        println!("{}:", slot.label());
        for template in catalog.templates_for_slot(slot) {
            let kind = match template.description {
                Description::Literal(_) => "",
                Description::Resolver(_) => " (personalized)",
            };
            println!(
                "  {}{} - {}",
                template.name,
                kind,
                template.nutrients.debug_string()
            );
        }
    }
    println!();
}

pub fn display_history(plans: &[&SavedPlan]) {
    if plans.is_empty() {
        println!("No saved plans.");
        return;
    }

    println!("=== History ({} plans) ===", plans.len());
    for saved in plans {
        println!(
            "  #{:<4} {} [{}] - {} meals, {:.0} kcal",
            saved.id,
            saved.name,
            saved.created_at.format("%Y-%m-%d"),
            saved.plan.len(),
            saved.plan.total_nutrients.calories
        );
    }
}

pub fn display_favorites(favorites: &[&FavoriteMeal]) {
    if favorites.is_empty() {
        println!("No favorite meals.");
        return;
    }

    println!("=== Favorites ({} meals) ===", favorites.len());
    for favorite in favorites {
        println!(
            "  {} ({}) - {:.0} kcal, used {}x, last {}",
            favorite.meal.name,
            favorite.meal.slot,
            favorite.meal.nutrients.calories,
            favorite.usage_count,
            favorite.last_used
        );
    }
}

pub fn display_goals(goals: &[Goal], today: NaiveDate) {
    if goals.is_empty() {
        println!("No goals yet.");
        return;
    }

    println!("=== Goals ===");
    for goal in goals {
        let status = if goal.completed {
            "done".to_string()
        } else {
            match days_remaining(goal, today) {
                d if d < 0 => "overdue".to_string(),
                d => format!("{} days left", d),
            }
        };
        println!(
            "  #{:<3} {} [{}] {}/{} {} - {}% ({})",
            goal.id,
            goal.title,
            goal.kind,
            goal.current_value,
            goal.target_value,
            goal.unit,
            goal.progress,
            status
        );
    }
}

pub fn display_insights(insights: &Insights) {
    println!("=== Insights ===");
    println!("{} - {}", insights.achievement_level, insights.message);
    println!();
    println!("Plans saved: {}", insights.total_plans);
    println!("Meals planned: {}", insights.total_meals);
    println!("Favorite meals: {}", insights.favorite_meals);
    println!(
        "Goals: {} active, {} completed",
        insights.active_goals, insights.completed_goals
    );
    println!("Average calories: {:.0} kcal", insights.average_calories);
    println!("Most common goal: {}", insights.most_common_goal);
    println!("Weekly progress: {}%", insights.weekly_progress);
    println!("Streak: {} days", insights.streak);

    if !insights.dietary_preferences.is_empty() {
        println!();
        println!("Dietary preferences:");
        for (preference, count) in &insights.dietary_preferences {
            println!("  {}: {}", preference, count);
        }
    }

    if !insights.meal_time_distribution.is_empty() {
        println!();
        println!("Meals by time:");
        for (slot, count) in &insights.meal_time_distribution {
            println!("  {}: {}", slot, count);
        }
    }
}
