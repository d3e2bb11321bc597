use meal_planner_rs::catalog::{CatalogHandle, MealCatalog};
use meal_planner_rs::error::{MealError, Result};
use meal_planner_rs::models::{MealSlot, MealTemplate, NutrientProfile, UserInput};
use meal_planner_rs::service::PlanService;
use meal_planner_rs::tips::{StaticTips, TipSource, FALLBACK_TIPS, PLAN_TIPS};

struct BrokenTips;

impl TipSource for BrokenTips {
    fn tip(&self, _input: &UserInput) -> Result<String> {
        Err(MealError::TipUnavailable("upstream timeout".to_string()))
    }
}

fn input(meals: u32, diet: &str) -> UserInput {
    UserInput {
        age: 40,
        weight: 82.0,
        height: 180.0,
        goal: "weight_loss".to_string(),
        dietary_preference: diet.to_string(),
        meals_per_day: meals,
        ..Default::default()
    }
}

#[test]
fn test_handle_attaches_plan_tip() {
    let service = PlanService::new(
        CatalogHandle::default(),
        Box::new(StaticTips::plan_tips().seeded(1)),
    );
    let plan = service.handle(&input(3, "vegan"));
    assert_eq!(plan.len(), 3);
    assert!(PLAN_TIPS.contains(&plan.tip.as_str()));
}

#[test]
fn test_tip_failure_uses_fallback_tip() {
    let service = PlanService::new(CatalogHandle::default(), Box::new(BrokenTips))
        .with_fallback_tips(StaticTips::fallback_tips().seeded(3));
    let plan = service.handle(&input(2, "none"));
    assert_eq!(plan.len(), 2);
    assert!(FALLBACK_TIPS.contains(&plan.tip.as_str()));
}

#[test]
fn test_handle_json_payload() {
    let service = PlanService::default();
    let body = r#"{
        "age": 25, "weight": 60, "height": 165,
        "activityLevel": "high", "goal": "muscle_gain",
        "dietaryPreference": "pescatarian", "ingredients": "tuna, lemon",
        "mealsPerDay": 4, "planDuration": "2_weeks"
    }"#;

    let plan = service.handle_json(body).unwrap();
    assert_eq!(plan.len(), 4);
    assert_eq!(plan.meals[1].name, "Quinoa Power Lunch");
    assert_eq!(plan.meals[2].name, "Salmon with Quinoa");
    assert!(plan.meals[2].description.ends_with(" and tuna"));
    assert!(!plan.tip.is_empty());
}

#[test]
fn test_handle_json_rejects_malformed_and_invalid() {
    let service = PlanService::default();
    assert!(matches!(service.handle_json("{oops"), Err(MealError::Json(_))));

    let out_of_range = r#"{"age": 25, "weight": 60, "height": 165, "mealsPerDay": 9}"#;
    assert!(matches!(
        service.handle_json(out_of_range),
        Err(MealError::InvalidInput(_))
    ));
}

#[test]
fn test_fallback_response_is_generic_with_tip() {
    let service = PlanService::default();
    let plan = service.fallback_response(&input(4, "vegan"));
    let names: Vec<&str> = plan.meals.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Energy Breakfast", "Balanced Lunch", "Hearty Dinner", "Healthy Snack"]
    );
    assert!(FALLBACK_TIPS.contains(&plan.tip.as_str()));
}

#[test]
fn test_catalog_reload_applies_to_next_request() {
    let service = PlanService::default();
    assert_eq!(service.handle(&input(1, "none")).meals[0].name, "Breakfast Bowl");

    service.catalog().replace(MealCatalog::new(vec![MealTemplate::literal(
        "Miso Soup",
        MealSlot::Breakfast,
        NutrientProfile::new(120.0, 8.0, 10.0, 4.0),
        "Miso soup with tofu",
    )]));
    let plan = service.handle(&input(1, "none"));
    assert_eq!(plan.meals[0].name, "Miso Soup");
    assert_eq!(plan.meals[0].description, "Miso soup with tofu");
}
