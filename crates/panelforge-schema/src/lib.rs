//! Schema model and document loaders for panelforge.
//!
//! A panel schema is a versioned, serializable document (JSON or YAML)
//! describing a machine panel: its grid, slot groups, optional process
//! block, optional recipes panel, and style. It is pure data; loading
//! validates shape (missing required fields are load-time errors,
//! unknown fields are ignored for forward compatibility), while
//! structural invariants are checked later by `panelforge-panel`.

mod loader;
mod schema;

pub use loader::{from_json_str, from_yaml_str, ParseError, SUPPORTED_VERSION};
pub use schema::{
    Accepts, Align, Anchor, Capacity, ChromeOverride, ChromeSpec, FlowAxis, GridSpec, Group,
    GroupContent, GroupRole, Header, Insets, InvariantRule, Layout, Operators, Padding,
    PaletteSpec, PanelSchema, Process, ProgressBinding, ProgressSpec, ProgressStyle, RecipeGrid,
    RecipesMode, RecipesPanel, Slot, SlotKind, SlotRender, StateText, StateTextMode, StyleSpec,
    TypographySpec,
};
