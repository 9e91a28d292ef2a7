//! Schema validation and panel tree construction.
//!
//! This crate is the engine entry point. A layout pass is a pure
//! function of three inputs:
//!
//! - an immutable [`PanelSchema`](panelforge_schema::PanelSchema),
//! - container bounds,
//! - read-only [`PanelBindings`](panelforge_core::PanelBindings).
//!
//! The pipeline runs validate → guides → resolve anchors → build tree,
//! holds no state between passes, and completes in
//! `O(groups * slots + recipe cells)`. Hard geometry errors abort the
//! pass; invariant violations are returned as data and handled per the
//! caller's [`ValidationMode`].

mod builder;
mod validate;

pub use builder::{layout_panel, PanelTree, ValidationMode};
pub use validate::validate;
