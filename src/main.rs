use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, Utc};
use clap::Parser;
use tracing::warn;

use meal_planner_rs::catalog::{load_catalog, CatalogHandle, MealCatalog};
use meal_planner_rs::cli::{
    Cli, Command, FavoritesCommand, GoalsCommand, HistoryCommand, PlanArgs,
};
use meal_planner_rs::error::{MealError, Result};
use meal_planner_rs::interface::{
    collect_user_input, display_catalog, display_favorites, display_goals, display_history,
    display_insights, display_meal_plan, render_plan_text, write_history_csv, write_plan_text,
};
use meal_planner_rs::models::UserInput;
use meal_planner_rs::service::PlanService;
use meal_planner_rs::state::{Favorites, GoalBook, GoalKind, Insights, NewGoal, PlanHistory};
use meal_planner_rs::tips::StaticTips;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Locations of the persisted state files.
struct DataPaths {
    history: PathBuf,
    favorites: PathBuf,
    goals: PathBuf,
}

impl DataPaths {
    fn new(dir: &Path) -> Self {
        Self {
            history: dir.join("history.json"),
            favorites: dir.join("favorites.json"),
            goals: dir.join("goals.json"),
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = DataPaths::new(&cli.data_dir);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&args, cli.catalog.as_deref(), &paths),
        Command::Catalog => {
            let (catalog, _) = open_catalog(cli.catalog.as_deref());
            display_catalog(&catalog);
            Ok(())
        }
        Command::History(sub) => cmd_history(sub, &paths),
        Command::Favorites(sub) => cmd_favorites(sub, &paths),
        Command::Goals(sub) => cmd_goals(sub, &paths),
        Command::Insights => cmd_insights(&paths),
        Command::Tip => {
            if let Some(tip) = StaticTips::general_tips().pick() {
                println!("{}", tip);
            }
            Ok(())
        }
    }
}

/// The configured catalog, or the built-in one if loading fails.
///
/// The flag is `false` when a configured catalog could not be loaded.
fn open_catalog(path: Option<&Path>) -> (MealCatalog, bool) {
    match path {
        None => (MealCatalog::builtin(), true),
        Some(path) => match load_catalog(path) {
            Ok(catalog) => (catalog, true),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not load catalog");
                (MealCatalog::builtin(), false)
            }
        },
    }
}

fn read_input(args: &PlanArgs) -> Result<UserInput> {
    if args.interactive {
        return collect_user_input();
    }
    let input: UserInput = match &args.json {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => args.to_user_input(),
    };
    input.validate()?;
    Ok(input)
}

/// Generate, display, and optionally save a plan.
fn cmd_plan(args: &PlanArgs, catalog_path: Option<&Path>, paths: &DataPaths) -> Result<()> {
    let input = read_input(args)?;

    let (catalog, catalog_ok) = open_catalog(catalog_path);
    let service = PlanService::new(
        CatalogHandle::new(catalog),
        Box::new(StaticTips::plan_tips()),
    );

    let plan = if catalog_ok {
        service.handle(&input)
    } else {
        println!("Catalog unavailable, showing a generic plan.");
        service.fallback_response(&input)
    };

    display_meal_plan(&plan);

    if args.save {
        let mut history = PlanHistory::load(&paths.history)?;
        let saved = history.record(args.name.clone(), input, plan, Utc::now());
        println!("Saved as #{} ({}).", saved.id, saved.name);
        history.save(&paths.history)?;
    }

    Ok(())
}

fn cmd_history(sub: HistoryCommand, paths: &DataPaths) -> Result<()> {
    let mut history = PlanHistory::load(&paths.history)?;

    match sub {
        HistoryCommand::List { search, goal } => {
            display_history(&history.search(&search, goal.as_deref()));
        }
        HistoryCommand::Show { id } => {
            let saved = history
                .get(id)
                .ok_or_else(|| MealError::NotFound(format!("plan #{}", id)))?;
            print!("{}", render_plan_text(saved));
        }
        HistoryCommand::Delete { id } => {
            let removed = history.delete(id)?;
            history.save(&paths.history)?;
            println!("Deleted #{} ({}).", removed.id, removed.name);
        }
        HistoryCommand::ExportCsv { path } => {
            write_history_csv(history.plans(), &path)?;
            println!("Exported {} plans to {}.", history.len(), path.display());
        }
        HistoryCommand::ExportText { id, path } => {
            let saved = history
                .get(id)
                .ok_or_else(|| MealError::NotFound(format!("plan #{}", id)))?;
            write_plan_text(saved, &path)?;
            println!("Exported #{} to {}.", id, path.display());
        }
    }

    Ok(())
}

fn cmd_favorites(sub: FavoritesCommand, paths: &DataPaths) -> Result<()> {
    let mut favorites = Favorites::load(&paths.favorites)?;

    match sub {
        FavoritesCommand::List { slot, search } => {
            display_favorites(&favorites.search(&search, slot));
        }
        FavoritesCommand::Add { plan_id, meal } => {
            let history = PlanHistory::load(&paths.history)?;
            let saved = history
                .get(plan_id)
                .ok_or_else(|| MealError::NotFound(format!("plan #{}", plan_id)))?;
            let found = saved
                .plan
                .find_meal(&meal)
                .ok_or_else(|| MealError::NotFound(format!("meal '{}' in plan #{}", meal, plan_id)))?
                .clone();

            let name = found.name.clone();
            if favorites.add(found, today()) {
                favorites.save(&paths.favorites)?;
                println!("Added {} to favorites.", name);
            } else {
                println!("{} is already a favorite.", name);
            }
        }
        FavoritesCommand::Remove { name } => {
            let removed = favorites.remove(&name)?;
            favorites.save(&paths.favorites)?;
            println!("Removed {}.", removed.meal.name);
        }
        FavoritesCommand::Use { name } => {
            let used = favorites.mark_used(&name, today())?;
            println!("{} used {} times.", used.meal.name, used.usage_count);
            favorites.save(&paths.favorites)?;
        }
    }

    Ok(())
}

fn cmd_goals(sub: GoalsCommand, paths: &DataPaths) -> Result<()> {
    let mut goals = GoalBook::load(&paths.goals)?;

    match sub {
        GoalsCommand::List => display_goals(goals.all(), today()),
        GoalsCommand::Add {
            title,
            kind,
            target,
            current,
            unit,
            deadline,
            description,
        } => {
            let new = NewGoal {
                title,
                description,
                kind: GoalKind::from_tag(&kind),
                target_value: target,
                current_value: current,
                unit,
                deadline,
            };
            let goal = goals.add(new, today())?;
            println!("Added goal #{} ({}% done).", goal.id, goal.progress);
            goals.save(&paths.goals)?;
        }
        GoalsCommand::Complete { id } => {
            let goal = goals.toggle_complete(id)?;
            let state = if goal.completed { "completed" } else { "reopened" };
            println!("Goal #{} {}.", goal.id, state);
            goals.save(&paths.goals)?;
        }
        GoalsCommand::Delete { id } => {
            let removed = goals.delete(id)?;
            goals.save(&paths.goals)?;
            println!("Deleted goal #{} ({}).", removed.id, removed.title);
        }
        GoalsCommand::Derive => {
            let history = PlanHistory::load(&paths.history)?;
            let Some(latest) = history.latest() else {
                println!("No saved plans to derive goals from. Use 'plan --save' first.");
                return Ok(());
            };
            goals.derive_from_plan(latest, today());
            goals.save(&paths.goals)?;
            display_goals(goals.all(), today());
        }
    }

    Ok(())
}

fn cmd_insights(paths: &DataPaths) -> Result<()> {
    let history = PlanHistory::load(&paths.history)?;
    let favorites = Favorites::load(&paths.favorites)?;
    let goals = GoalBook::load(&paths.goals)?;

    display_insights(&Insights::compute(&history, &favorites, &goals));
    Ok(())
}
