use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::format_goal_name;
use crate::state::SavedPlan;

/// Write one row per saved plan to a CSV file.
pub fn write_history_csv(plans: &[SavedPlan], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "created_at",
        "goal",
        "dietary_preference",
        "meals",
        "calories",
        "protein",
        "carbs",
        "fat",
    ])?;

    for saved in plans {
        let total = &saved.plan.total_nutrients;
        wtr.write_record([
            saved.id.to_string(),
            saved.name.clone(),
            saved.created_at.to_rfc3339(),
            saved.user_input.goal.clone(),
            saved.user_input.dietary_preference.clone(),
            saved.plan.len().to_string(),
            format!("{:.0}", total.calories),
            format!("{:.1}", total.protein),
            format!("{:.1}", total.carbs),
            format!("{:.1}", total.fat),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Plain-text rendering of a saved plan, suitable for download.
pub fn render_plan_text(saved: &SavedPlan) -> String {
    let input = &saved.user_input;
    let total = &saved.plan.total_nutrients;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Meal Plan - {}", saved.name);
    let _ = writeln!(out, "Generated on: {}", saved.created_at.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(out, "Goals: {}", format_goal_name(&input.goal));
    let _ = writeln!(out, "Dietary Preference: {}", input.dietary_preference);
    let _ = writeln!(out, "Activity Level: {}", input.activity_level);
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Daily Nutrition:");
    let _ = writeln!(out, "- Calories: {} kcal", total.calories);
    let _ = writeln!(out, "- Protein: {}g", total.protein);
    let _ = writeln!(out, "- Carbohydrates: {}g", total.carbs);
    let _ = writeln!(out, "- Fat: {}g", total.fat);
    let _ = writeln!(out);
    let _ = writeln!(out, "Meals:");
    for meal in &saved.plan.meals {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({}):", meal.name, meal.slot);
        let _ = writeln!(out, "{}", meal.description);
        let _ = writeln!(out, "- Calories: {} kcal", meal.nutrients.calories);
        let _ = writeln!(out, "- Protein: {}g", meal.nutrients.protein);
        let _ = writeln!(out, "- Carbs: {}g", meal.nutrients.carbs);
        let _ = writeln!(out, "- Fat: {}g", meal.nutrients.fat);
    }
    if !saved.plan.tip.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Expert Tip: {}", saved.plan.tip);
    }
    out
}

/// Write [`render_plan_text`] output to `path`.
pub fn write_plan_text(saved: &SavedPlan, path: &Path) -> Result<()> {
    fs::write(path, render_plan_text(saved))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    use crate::models::UserInput;
    use crate::planner::PlanGenerator;

    fn saved_plan() -> SavedPlan {
        let input = UserInput {
            goal: "muscle_gain".to_string(),
            dietary_preference: "vegan".to_string(),
            activity_level: "high".to_string(),
            meals_per_day: 2,
            ..Default::default()
        };
        let plan = PlanGenerator::default().generate(&input).with_tip("Eat greens.");
        SavedPlan {
            id: 1,
            name: "Bulk".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap(),
            user_input: input,
            plan,
        }
    }

    #[test]
    fn test_render_plan_text() {
        let text = render_plan_text(&saved_plan());
        assert!(text.starts_with("Meal Plan - Bulk\n"));
        assert!(text.contains("Goals: Muscle Gain"));
        assert!(text.contains("- Calories: 830 kcal"));
        assert!(text.contains("Breakfast Bowl (breakfast):"));
        assert!(text.contains("Expert Tip: Eat greens."));
    }

    #[test]
    fn test_write_history_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.csv");
        write_history_csv(&[saved_plan()], &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "Bulk");
        assert_eq!(&rows[0][5], "2");
        assert_eq!(&rows[0][6], "830");
    }
}
