use crate::models::{first_ingredient, Diet, MealSlot, MealTemplate, NutrientProfile, UserInput};

/// `"{joiner}{first ingredient}"`, or empty when no ingredient was given.
fn splice(joiner: &str, ingredients: &str) -> String {
    first_ingredient(ingredients)
        .map(|token| format!("{}{}", joiner, token))
        .unwrap_or_default()
}

fn breakfast_bowl(input: &UserInput, ingredients: &str) -> String {
    let milk = match input.diet() {
        Diet::Vegan => "almond milk",
        _ => "milk",
    };
    format!(
        "Oatmeal with {} and fresh fruits{}",
        milk,
        splice(" with ", ingredients)
    )
}

fn protein_power_breakfast(input: &UserInput, _ingredients: &str) -> String {
    let base = match input.diet() {
        Diet::Vegan => "tofu",
        _ => "eggs",
    };
    format!("Scrambled {} with whole grain toast and avocado", base)
}

fn grilled_chicken_bowl(input: &UserInput, ingredients: &str) -> String {
    let protein = match input.diet() {
        Diet::Vegan => "tofu",
        _ => "chicken",
    };
    format!(
        "Grilled {} breast with brown rice and steamed broccoli{}",
        protein,
        splice(", featuring ", ingredients)
    )
}

fn quinoa_power_lunch(input: &UserInput, _ingredients: &str) -> String {
    let protein = match input.diet() {
        Diet::Vegan => "chickpeas",
        Diet::Vegetarian => "feta cheese",
        _ => "grilled chicken",
    };
    format!("Quinoa salad with {} and mixed vegetables", protein)
}

fn salmon_with_quinoa(input: &UserInput, ingredients: &str) -> String {
    let main = match input.diet() {
        Diet::Vegan => "tofu steak",
        Diet::Vegetarian => "portobello mushroom",
        _ => "salmon",
    };
    format!(
        "Baked {} served with quinoa and asparagus{}",
        main,
        splice(" and ", ingredients)
    )
}

fn vegetable_stir_fry(input: &UserInput, ingredients: &str) -> String {
    // Pescatarians get the chicken wording too; the name filter never sees it.
    let protein = match input.diet() {
        Diet::Vegan | Diet::Vegetarian => "tofu",
        _ => "chicken",
    };
    format!(
        "Mixed vegetable stir fry with {} in light soy sauce{}",
        protein,
        splice(", including ", ingredients)
    )
}

fn greek_yogurt_snack(input: &UserInput, ingredients: &str) -> String {
    let style = match input.diet() {
        Diet::Vegan => "Coconut",
        _ => "Greek",
    };
    format!(
        "{} yogurt with berries and a drizzle of honey{}",
        style,
        splice(", topped with ", ingredients)
    )
}

fn protein_smoothie(input: &UserInput, ingredients: &str) -> String {
    let protein = match input.diet() {
        Diet::Vegan => "plant-based protein",
        _ => "whey protein",
    };
    format!(
        "Protein smoothie with {}, banana, and spinach{}",
        protein,
        splice(", blended with ", ingredients)
    )
}

fn energy_bars(input: &UserInput, ingredients: &str) -> String {
    let sweetener = match input.diet() {
        Diet::Vegan => "maple syrup",
        _ => "honey",
    };
    format!(
        "Homemade energy bars with oats, nuts, and {}{}",
        sweetener,
        splice(", including ", ingredients)
    )
}

/// The reference catalog: two or three templates per slot.
pub fn builtin_templates() -> Vec<MealTemplate> {
    vec![
        MealTemplate::with_resolver(
            "Breakfast Bowl",
            MealSlot::Breakfast,
            NutrientProfile::new(350.0, 15.0, 60.0, 8.0),
            breakfast_bowl,
        ),
        MealTemplate::with_resolver(
            "Protein Power Breakfast",
            MealSlot::Breakfast,
            NutrientProfile::new(420.0, 25.0, 30.0, 22.0),
            protein_power_breakfast,
        ),
        MealTemplate::with_resolver(
            "Grilled Chicken Bowl",
            MealSlot::Lunch,
            NutrientProfile::new(450.0, 40.0, 35.0, 10.0),
            grilled_chicken_bowl,
        ),
        MealTemplate::with_resolver(
            "Quinoa Power Lunch",
            MealSlot::Lunch,
            NutrientProfile::new(480.0, 28.0, 55.0, 18.0),
            quinoa_power_lunch,
        ),
        MealTemplate::with_resolver(
            "Salmon with Quinoa",
            MealSlot::Dinner,
            NutrientProfile::new(520.0, 42.0, 30.0, 15.0),
            salmon_with_quinoa,
        ),
        MealTemplate::with_resolver(
            "Vegetable Stir Fry",
            MealSlot::Dinner,
            NutrientProfile::new(380.0, 22.0, 45.0, 12.0),
            vegetable_stir_fry,
        ),
        MealTemplate::with_resolver(
            "Greek Yogurt Snack",
            MealSlot::Snack,
            NutrientProfile::new(180.0, 12.0, 22.0, 5.0),
            greek_yogurt_snack,
        ),
        MealTemplate::with_resolver(
            "Protein Smoothie",
            MealSlot::Snack,
            NutrientProfile::new(220.0, 20.0, 25.0, 4.0),
            protein_smoothie,
        ),
        MealTemplate::with_resolver(
            "Energy Bars",
            MealSlot::Snack,
            NutrientProfile::new(150.0, 8.0, 20.0, 6.0),
            energy_bars,
        ),
    ]
}
