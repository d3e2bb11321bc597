use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{MealError, Result};
use crate::models::{Diet, UserInput, MAX_MEALS_PER_DAY};

/// Minimum similarity for suggesting a known dietary tag.
const SUGGESTION_THRESHOLD: f64 = 0.7;

const ACTIVITY_LEVELS: [&str; 3] = ["low", "moderate", "high"];
const GOALS: [&str; 3] = ["weight_loss", "muscle_gain", "maintain"];
const DURATIONS: [&str; 3] = ["1_week", "2_weeks", "1_month"];

/// Closest known dietary tag to a misspelled one, if any is close enough.
///
/// Returns `None` for exact matches and blank input. Tags only filter when
/// spelled exactly, so `Vegan` gets `vegan` suggested.
pub fn suggest_diet_tag(input: &str) -> Option<&'static str> {
    let input = input.trim();
    if input.is_empty() || Diet::KNOWN_TAGS.contains(&input) {
        return None;
    }
    let input = input.to_lowercase();

    Diet::KNOWN_TAGS
        .iter()
        .map(|tag| (*tag, jaro_winkler(tag, &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(tag, _)| tag)
}

fn prompt_number<T: std::str::FromStr>(prompt: &str, default: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| MealError::InvalidInput(format!("Invalid number: {}", input)))
}

fn prompt_choice(prompt: &str, options: &[&str], default: usize) -> Result<String> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(default)
        .interact()?;
    Ok(options[selection].to_string())
}

/// Prompt for a dietary preference, offering a correction for near misses.
pub fn prompt_dietary_preference() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Dietary preference (vegan, vegetarian, pescatarian, none)")
        .default("none".to_string())
        .interact_text()?;
    let input = input.trim().to_string();

    if let Some(tag) = suggest_diet_tag(&input) {
        if prompt_yes_no(&format!("Did you mean '{}'?", tag), true)? {
            return Ok(tag.to_string());
        }
    }

    Ok(input)
}

/// Prompt for yes/no confirmation.
fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full plan request interactively and validate it.
pub fn collect_user_input() -> Result<UserInput> {
    let age = prompt_number("Age", "18")?;
    let weight = prompt_number("Weight (kg)", "70")?;
    let height = prompt_number("Height (cm)", "170")?;
    let activity_level = prompt_choice("Activity level", &ACTIVITY_LEVELS, 1)?;
    let goal = prompt_choice("Goal", &GOALS, 2)?;
    let dietary_preference = prompt_dietary_preference()?;

    let ingredients: String = Input::new()
        .with_prompt("Ingredients you'd like to use (comma-separated, optional)")
        .allow_empty(true)
        .interact_text()?;

    let meals_per_day = prompt_number(
        &format!("Meals per day (1-{})", MAX_MEALS_PER_DAY),
        "3",
    )?;
    let plan_duration = prompt_choice("Plan duration", &DURATIONS, 0)?;

    let input = UserInput {
        name: String::new(),
        age,
        weight,
        height,
        activity_level,
        goal,
        dietary_preference,
        ingredients: ingredients.trim().to_string(),
        meals_per_day,
        plan_duration,
    };
    input.validate()?;
    Ok(input)
}
