//! Core types for the panelforge panel layout engine.
//!
//! This crate holds everything the other panelforge crates share:
//! geometric primitives, colors, resolved styling, the positioned
//! element tree the engine emits, interaction intents, the dynamic
//! binding boundary, and the error taxonomy.
//!
//! Nothing in here performs layout; see `panelforge-layout` for guide
//! and anchor resolution and `panelforge-panel` for tree construction.

pub mod binding;
pub mod color;
pub mod element;
pub mod error;
pub mod geometry;
pub mod intent;
pub mod style;

pub use binding::{NoBindings, PanelBindings, RecipeRef, SlotValue, StaticBindings};
pub use color::{Color, ColorParseError};
pub use element::{
    Element, ElementKind, FlowDirection, OverlayKind, ProgressVisual, SlotVisual, TextAlign,
};
pub use error::{Axis, ConfigError, FlowSide, LayoutError, Violation};
pub use geometry::{Point, Rect, Size};
pub use intent::Intent;
pub use style::{Chrome, Palette, Style, StyleRole, Typography};
