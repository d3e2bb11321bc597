mod builtin;
mod handle;
mod loader;

use std::collections::BTreeSet;

use crate::models::{MealSlot, MealTemplate};

pub use builtin::builtin_templates;
pub use handle::CatalogHandle;
pub use loader::{load_catalog, save_catalog};

/// Read-only collection of meal templates, in declaration order.
#[derive(Debug, Clone)]
pub struct MealCatalog {
    templates: Vec<MealTemplate>,
}

impl MealCatalog {
    pub fn new(templates: Vec<MealTemplate>) -> Self {
        Self { templates }
    }

    /// The reference catalog shipped with the planner.
    pub fn builtin() -> Self {
        Self::new(builtin_templates())
    }

    /// All templates for `slot`, in declaration order.
    pub fn templates_for_slot(&self, slot: MealSlot) -> Vec<&MealTemplate> {
        self.templates.iter().filter(|t| t.slot == slot).collect()
    }

    /// Same as [`templates_for_slot`](Self::templates_for_slot) for a textual
    /// slot tag. Unknown tags yield an empty list.
    pub fn templates_for_slot_tag(&self, tag: &str) -> Vec<&MealTemplate> {
        match tag.parse::<MealSlot>() {
            Ok(slot) => self.templates_for_slot(slot),
            Err(_) => Vec::new(),
        }
    }

    /// Distinct slots present in the catalog.
    pub fn available_slots(&self) -> BTreeSet<MealSlot> {
        self.templates.iter().map(|t| t.slot).collect()
    }

    pub fn templates(&self) -> &[MealTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for MealCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_for_slot_declaration_order() {
        let catalog = MealCatalog::builtin();
        let names: Vec<&str> = catalog
            .templates_for_slot(MealSlot::Snack)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Greek Yogurt Snack", "Protein Smoothie", "Energy Bars"]
        );
    }

    #[test]
    fn test_unknown_slot_tag_is_empty() {
        let catalog = MealCatalog::builtin();
        assert!(catalog.templates_for_slot_tag("brunch").is_empty());
        assert_eq!(catalog.templates_for_slot_tag("Lunch").len(), 2);
    }

    #[test]
    fn test_available_slots() {
        let catalog = MealCatalog::builtin();
        let slots: Vec<MealSlot> = catalog.available_slots().into_iter().collect();
        assert_eq!(slots, MealSlot::ORDER.to_vec());

        assert!(MealCatalog::new(Vec::new()).available_slots().is_empty());
    }
}
