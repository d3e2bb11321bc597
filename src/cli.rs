use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::models::{MealSlot, UserInput};

pub const DEFAULT_AGE: u32 = 30;
pub const DEFAULT_WEIGHT: f64 = 70.0;
pub const DEFAULT_HEIGHT: f64 = 170.0;
pub const DEFAULT_MEALS: u32 = 3;

/// meal_planner — Build daily meal plans and track history, favorites, and goals.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding history.json, favorites.json and goals.json.
    #[arg(short, long, default_value = ".meal_planner", global = true)]
    pub data_dir: PathBuf,

    /// JSON meal catalog to use instead of the built-in one.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a meal plan.
    Plan(PlanArgs),

    /// List the meal catalog.
    Catalog,

    /// Manage saved plans.
    #[command(subcommand)]
    History(HistoryCommand),

    /// Manage favorite meals.
    #[command(subcommand)]
    Favorites(FavoritesCommand),

    /// Manage goals.
    #[command(subcommand)]
    Goals(GoalsCommand),

    /// Show statistics over saved plans, favorites, and goals.
    Insights,

    /// Print a nutrition tip.
    Tip,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[arg(long, default_value_t = DEFAULT_AGE)]
    pub age: u32,

    /// Weight in kilograms.
    #[arg(long, default_value_t = DEFAULT_WEIGHT)]
    pub weight: f64,

    /// Height in centimetres.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,

    /// Activity level (low, moderate, high).
    #[arg(long, default_value = "moderate")]
    pub activity: String,

    /// Goal (weight_loss, muscle_gain, maintain).
    #[arg(long, default_value = "maintain")]
    pub goal: String,

    /// Dietary preference (vegan, vegetarian, pescatarian, none).
    #[arg(long, default_value = "none")]
    pub diet: String,

    /// Comma-separated ingredients to feature.
    #[arg(long, default_value = "")]
    pub ingredients: String,

    /// Meals per day.
    #[arg(short, long, default_value_t = DEFAULT_MEALS)]
    pub meals: u32,

    /// Plan duration (1_week, 2_weeks, 1_month).
    #[arg(long, default_value = "1_week")]
    pub duration: String,

    /// Ask for each value interactively.
    #[arg(short, long, conflicts_with = "json")]
    pub interactive: bool,

    /// Read the request from a JSON payload file.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Save the generated plan to history.
    #[arg(long)]
    pub save: bool,

    /// Name for the saved plan.
    #[arg(long, requires = "save")]
    pub name: Option<String>,
}

impl Default for PlanArgs {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            weight: DEFAULT_WEIGHT,
            height: DEFAULT_HEIGHT,
            activity: "moderate".to_string(),
            goal: "maintain".to_string(),
            diet: "none".to_string(),
            ingredients: String::new(),
            meals: DEFAULT_MEALS,
            duration: "1_week".to_string(),
            interactive: false,
            json: None,
            save: false,
            name: None,
        }
    }
}

impl PlanArgs {
    /// The request described by the flags.
    pub fn to_user_input(&self) -> UserInput {
        UserInput {
            name: String::new(),
            age: self.age,
            weight: self.weight,
            height: self.height,
            activity_level: self.activity.clone(),
            goal: self.goal.clone(),
            dietary_preference: self.diet.clone(),
            ingredients: self.ingredients.clone(),
            meals_per_day: self.meals,
            plan_duration: self.duration.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// List saved plans.
    List {
        /// Only plans whose name or goal contains this text.
        #[arg(long, default_value = "")]
        search: String,

        /// Only plans with exactly this goal (weight_loss, muscle_gain, maintain).
        #[arg(long)]
        goal: Option<String>,
    },

    /// Show a saved plan.
    Show { id: u64 },

    /// Delete a saved plan.
    Delete { id: u64 },

    /// Export all saved plans to CSV.
    ExportCsv { path: PathBuf },

    /// Export one saved plan as text.
    ExportText { id: u64, path: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum FavoritesCommand {
    /// List favorites.
    List {
        /// Only meals for this slot.
        #[arg(long)]
        slot: Option<MealSlot>,

        /// Only meals whose name or description contains this text.
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Add a meal from a saved plan.
    Add { plan_id: u64, meal: String },

    /// Remove a favorite.
    Remove { name: String },

    /// Record that a favorite was used again.
    Use { name: String },
}

#[derive(Subcommand, Debug)]
pub enum GoalsCommand {
    /// List goals.
    List,

    /// Add a goal.
    Add {
        title: String,

        /// weight_loss, muscle_gain, fitness, nutrition, or other.
        #[arg(long, default_value = "other")]
        kind: String,

        #[arg(long)]
        target: f64,

        #[arg(long, default_value_t = 0.0)]
        current: f64,

        #[arg(long, default_value = "kg")]
        unit: String,

        /// Deadline as YYYY-MM-DD.
        #[arg(long)]
        deadline: NaiveDate,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Toggle a goal's completed state.
    Complete { id: u64 },

    /// Delete a goal.
    Delete { id: u64 },

    /// Replace goals with ones derived from the latest saved plan.
    Derive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_flags_to_input() {
        let cli = Cli::parse_from([
            "meal_planner",
            "plan",
            "--diet",
            "vegan",
            "--meals",
            "4",
            "--ingredients",
            "kale, rice",
        ]);
        let Some(Command::Plan(args)) = cli.command else {
            panic!("expected plan command");
        };
        let input = args.to_user_input();
        assert_eq!(input.dietary_preference, "vegan");
        assert_eq!(input.meals_per_day, 4);
        assert_eq!(input.ingredients, "kale, rice");
        assert_eq!(input.age, DEFAULT_AGE);
    }

    #[test]
    fn test_default_plan_args_match_flags() {
        let cli = Cli::parse_from(["meal_planner", "plan"]);
        let Some(Command::Plan(args)) = cli.command else {
            panic!("expected plan command");
        };
        assert_eq!(args.to_user_input(), PlanArgs::default().to_user_input());
    }

    #[test]
    fn test_history_list_filters_parse() {
        let cli = Cli::parse_from([
            "meal_planner",
            "history",
            "list",
            "--search",
            "cut",
            "--goal",
            "weight_loss",
        ]);
        match cli.command {
            Some(Command::History(HistoryCommand::List { search, goal })) => {
                assert_eq!(search, "cut");
                assert_eq!(goal.as_deref(), Some("weight_loss"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_favorites_slot_filter_parses() {
        let cli = Cli::parse_from(["meal_planner", "favorites", "list", "--slot", "snack"]);
        match cli.command {
            Some(Command::Favorites(FavoritesCommand::List { slot, .. })) => {
                assert_eq!(slot, Some(MealSlot::Snack));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
