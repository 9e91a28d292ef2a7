//! The positioned element tree the engine emits.
//!
//! Each element carries a kind with fully resolved style attributes, an
//! absolute frame, an optional interaction intent, and children in
//! paint order. A rendering backend maps each kind 1:1 onto its own
//! primitives; the engine never issues drawing calls.

use crate::binding::SlotValue;
use crate::color::Color;
use crate::geometry::Rect;
use crate::intent::Intent;
use serde::{Deserialize, Serialize};

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    /// Flush to the leading edge
    #[default]
    Leading,
    /// Centered
    Center,
    /// Flush to the trailing edge
    Trailing,
}

/// Visual treatment of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotVisual {
    /// Square item well
    #[default]
    Square,
    /// Vertical fluid tank
    Tank,
    /// Power/level meter
    Meter,
}

/// Overlay drawn on top of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlayKind {
    /// No overlay
    #[default]
    None,
    /// Stack count
    Count,
    /// Fill percentage
    Percent,
    /// Connection indicator
    Connection,
}

/// Visual treatment of a progress element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProgressVisual {
    /// Horizontal bar
    Bar,
    /// Radial ring
    Ring,
}

/// Direction of a flow glyph relative to the process block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowDirection {
    /// Flowing into the process
    Inbound,
    /// Flowing out of the process
    Outbound,
}

/// Element kind with resolved style attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ElementKind {
    /// A chrome container (filled rounded rectangle).
    Container {
        /// Background color (alpha included)
        background: Color,
        /// Border stroke width, 0 for none
        border_width: f32,
        /// Corner radius
        corner_radius: f32,
    },
    /// A header or title label.
    HeaderText {
        /// Label text
        text: String,
        /// Text color
        color: Color,
        /// Point size
        point_size: f32,
        /// Horizontal alignment within the frame
        align: TextAlign,
        /// Backplate opacity behind the label
        backplate_opacity: f32,
        /// Optional accessibility text
        accessibility: Option<String>,
    },
    /// An item/fluid/power slot.
    Slot {
        /// Slot id from the schema
        slot_id: String,
        /// Visual treatment
        visual: SlotVisual,
        /// Overlay kind
        overlay: OverlayKind,
        /// Bound content, if any
        content: Option<SlotValue>,
    },
    /// A state line below a slot strip.
    StateText {
        /// Resolved text (substitutions applied)
        text: String,
        /// Text color
        color: Color,
        /// Point size
        point_size: f32,
    },
    /// A progress bar or ring.
    Progress {
        /// Visual treatment
        visual: ProgressVisual,
        /// Bound fraction, clamped to [0, 1]
        fraction: f32,
        /// Whether the backend should draw a percent label
        show_percent: bool,
        /// Fill color
        color: Color,
    },
    /// One cell of the recipe grid.
    RecipeCell {
        /// Index into the bound catalog
        index: usize,
        /// Recipe id from the catalog
        recipe_id: String,
        /// Whether the cell is selectable (picker mode)
        selectable: bool,
    },
    /// A directional flow glyph between a process and a group.
    FlowGlyph {
        /// Flow direction
        direction: FlowDirection,
        /// Glyph color
        color: Color,
    },
}

impl ElementKind {
    /// Stable name of the kind, for diagnostics and backends keyed by
    /// string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Container { .. } => "container",
            Self::HeaderText { .. } => "headerText",
            Self::Slot { .. } => "slot",
            Self::StateText { .. } => "stateText",
            Self::Progress { .. } => "progress",
            Self::RecipeCell { .. } => "recipeCell",
            Self::FlowGlyph { .. } => "flowGlyph",
        }
    }
}

/// One node of the positioned element tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Kind and resolved style attributes
    pub kind: ElementKind,
    /// Absolute frame in host logical units
    pub frame: Rect,
    /// Intent emitted when the element is activated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    /// Children in paint order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    /// Create a leaf element.
    #[must_use]
    pub const fn new(kind: ElementKind, frame: Rect) -> Self {
        Self {
            kind,
            frame,
            intent: None,
            children: Vec::new(),
        }
    }

    /// Attach an intent.
    #[must_use]
    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    /// Append a child.
    pub fn push(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Depth-first iteration over this element and all descendants.
    pub fn walk(&self, visit: &mut impl FnMut(&Self)) {
        visit(self);
        for child in &self.children {
            child.walk(&mut *visit);
        }
    }

    /// Count this element and all descendants.
    #[must_use]
    pub fn count(&self) -> usize {
        let mut n = 0;
        self.walk(&mut |_| n += 1);
        n
    }

    /// Find the first descendant (or self) matching a predicate.
    #[must_use]
    pub fn find(&self, predicate: &impl Fn(&Self) -> bool) -> Option<&Self> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(predicate))
    }
}
