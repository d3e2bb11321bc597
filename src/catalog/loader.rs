use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::MealCatalog;
use crate::error::{MealError, Result};
use crate::models::{Description, MealSlot, MealTemplate, NutrientProfile};

/// On-disk form of a template. Only literal descriptions can be stored.
#[derive(Debug, Serialize, Deserialize)]
struct TemplateRecord {
    name: String,

    #[serde(rename = "mealTime")]
    slot: MealSlot,

    nutrients: NutrientProfile,

    #[serde(default)]
    description: String,
}

/// Load a catalog from a JSON array of templates.
///
/// Rejects entries with an empty name or negative nutrient values.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<MealCatalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let records: Vec<TemplateRecord> = serde_json::from_str(&content)?;

    let mut templates = Vec::with_capacity(records.len());
    for record in records {
        if record.name.trim().is_empty() {
            return Err(MealError::InvalidInput(
                "catalog template with empty name".to_string(),
            ));
        }
        if !record.nutrients.is_valid() {
            return Err(MealError::InvalidInput(format!(
                "{} has invalid nutrients ({})",
                record.name,
                record.nutrients.debug_string()
            )));
        }
        templates.push(MealTemplate::literal(
            record.name,
            record.slot,
            record.nutrients,
            record.description,
        ));
    }

    debug!(path = %path.display(), templates = templates.len(), "loaded catalog");
    Ok(MealCatalog::new(templates))
}

/// Save a catalog as JSON, rendering resolver descriptions as empty text.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &MealCatalog) -> Result<()> {
    let records: Vec<TemplateRecord> = catalog
        .templates()
        .iter()
        .map(|t| TemplateRecord {
            name: t.name.clone(),
            slot: t.slot,
            nutrients: t.nutrients,
            description: match &t.description {
                Description::Literal(text) => text.clone(),
                Description::Resolver(_) => String::new(),
            },
        })
        .collect();

    let json = serde_json::to_string_pretty(&records)?;
    fs::write(path, json)?;
    Ok(())
}
