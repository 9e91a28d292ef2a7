//! The dynamic binding boundary.
//!
//! The builder pulls live values through [`PanelBindings`] while it
//! walks the schema: slot contents, process progress, the recipe
//! catalog. The engine never mutates bound state and degrades to
//! schema-declared defaults when a query returns nothing, so a host
//! with no simulation attached still gets a complete tree.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Content bound to a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotValue {
    /// Stack count (items) or unit count (tools)
    pub count: u32,
    /// Continuous amount for fluid/power slots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f32>,
}

impl SlotValue {
    /// A discrete stack of `count` items.
    #[must_use]
    pub const fn items(count: u32) -> Self {
        Self {
            count,
            amount: None,
        }
    }

    /// A continuous amount (fluid, charge).
    #[must_use]
    pub const fn amount(amount: f32) -> Self {
        Self {
            count: 0,
            amount: Some(amount),
        }
    }

    /// Whether the value counts as present for state-text purposes.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.count > 0 || self.amount.is_some_and(|a| a > 0.0)
    }
}

/// One entry of the bound recipe catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRef {
    /// Recipe id
    pub id: String,
}

impl RecipeRef {
    /// Create a recipe reference.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Pull-based query interface to the host's simulation state.
///
/// Queries are read-only and are expected to be cheap; the builder
/// calls them once per element as it walks the schema. A snapshot of
/// live state should back the implementation when layout runs off the
/// owning thread.
pub trait PanelBindings {
    /// Content of a slot, or `None` when the slot is empty/unbound.
    fn slot_content(&self, slot_id: &str) -> Option<SlotValue>;

    /// Progress fraction for a process, in [0, 1].
    fn process_progress(&self, process_id: &str) -> Option<f32>;

    /// Ordered recipe catalog for a recipes panel.
    fn recipe_catalog(&self, panel_id: &str) -> Vec<RecipeRef>;
}

/// Null bindings: every slot empty, zero progress, empty catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBindings;

impl PanelBindings for NoBindings {
    fn slot_content(&self, _slot_id: &str) -> Option<SlotValue> {
        None
    }

    fn process_progress(&self, _process_id: &str) -> Option<f32> {
        None
    }

    fn recipe_catalog(&self, _panel_id: &str) -> Vec<RecipeRef> {
        Vec::new()
    }
}

/// Map-backed bindings, for tests and static previews.
#[derive(Debug, Clone, Default)]
pub struct StaticBindings {
    slots: HashMap<String, SlotValue>,
    progress: HashMap<String, f32>,
    recipes: HashMap<String, Vec<RecipeRef>>,
}

impl StaticBindings {
    /// Create empty bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a slot value.
    #[must_use]
    pub fn with_slot(mut self, slot_id: impl Into<String>, value: SlotValue) -> Self {
        self.slots.insert(slot_id.into(), value);
        self
    }

    /// Bind a progress fraction.
    #[must_use]
    pub fn with_progress(mut self, process_id: impl Into<String>, fraction: f32) -> Self {
        self.progress.insert(process_id.into(), fraction);
        self
    }

    /// Bind a recipe catalog.
    #[must_use]
    pub fn with_recipes(mut self, panel_id: impl Into<String>, recipes: Vec<RecipeRef>) -> Self {
        self.recipes.insert(panel_id.into(), recipes);
        self
    }
}

impl PanelBindings for StaticBindings {
    fn slot_content(&self, slot_id: &str) -> Option<SlotValue> {
        self.slots.get(slot_id).cloned()
    }

    fn process_progress(&self, process_id: &str) -> Option<f32> {
        self.progress.get(process_id).copied()
    }

    fn recipe_catalog(&self, panel_id: &str) -> Vec<RecipeRef> {
        self.recipes.get(panel_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_bindings_defaults() {
        let b = NoBindings;
        assert_eq!(b.slot_content("any"), None);
        assert_eq!(b.process_progress("any"), None);
        assert!(b.recipe_catalog("any").is_empty());
    }

    #[test]
    fn test_static_bindings() {
        let b = StaticBindings::new()
            .with_slot("ore", SlotValue::items(5))
            .with_progress("smelt", 0.25)
            .with_recipes("recipes", vec![RecipeRef::new("iron-plate")]);

        assert_eq!(b.slot_content("ore"), Some(SlotValue::items(5)));
        assert_eq!(b.process_progress("smelt"), Some(0.25));
        assert_eq!(b.recipe_catalog("recipes").len(), 1);
        assert_eq!(b.slot_content("missing"), None);
    }

    #[test]
    fn test_slot_value_presence() {
        assert!(SlotValue::items(1).is_present());
        assert!(!SlotValue::items(0).is_present());
        assert!(SlotValue::amount(10.0).is_present());
        assert!(!SlotValue::amount(0.0).is_present());
    }
}
