//! Grid guide generation and anchor resolution.
//!
//! Two pure stages of the panel pipeline:
//!
//! - **Guides**: container bounds + layout configuration → column/row
//!   guide lists covering the usable rectangle.
//! - **Anchors**: a grid anchor (position, span, alignment) + guides →
//!   an absolute region, and placement of an intrinsically sized
//!   element within it.
//!
//! Neither stage retains state; recompute on every bounds change.

mod anchor;
mod guides;

pub use anchor::{place, resolve_region};
pub use guides::{compute_guides, Guide, GuideSet};
