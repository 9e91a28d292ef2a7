//! Resolved styling: palette, typography, chrome.
//!
//! These are the *resolved* forms the builder works with. The schema
//! carries hex strings and point sizes (`panelforge-schema`); resolution
//! happens once per layout pass so the builder never touches ambient
//! styling state.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Role a styled element declares; resolves to a palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleRole {
    /// Fuel accent
    Fuel,
    /// Input accent
    Input,
    /// Output accent
    Output,
    /// Process accent
    Process,
    /// De-emphasized text
    MutedText,
}

/// Resolved color palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Fuel accent color
    pub fuel: Color,
    /// Input accent color
    pub input: Color,
    /// Output accent color
    pub output: Color,
    /// Process accent color
    pub process: Color,
    /// De-emphasized text color
    pub muted_text: Color,
}

impl Palette {
    /// Look up the color for a style role.
    #[must_use]
    pub const fn color(&self, role: StyleRole) -> Color {
        match role {
            StyleRole::Fuel => self.fuel,
            StyleRole::Input => self.input,
            StyleRole::Output => self.output,
            StyleRole::Process => self.process,
            StyleRole::MutedText => self.muted_text,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fuel: Color::rgb(0.78, 0.50, 0.18),
            input: Color::rgb(0.29, 0.56, 0.85),
            output: Color::rgb(0.35, 0.65, 0.36),
            process: Color::rgb(0.60, 0.44, 0.75),
            muted_text: Color::rgb(0.60, 0.63, 0.65),
        }
    }
}

/// Point sizes for the three text tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    /// Header point size
    pub header: f32,
    /// Body point size
    pub body: f32,
    /// Muted/caption point size
    pub muted: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            header: 16.0,
            body: 13.0,
            muted: 11.0,
        }
    }
}

/// Default chrome applied to panel containers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chrome {
    /// Panel background opacity [0, 1]
    pub panel_opacity: f32,
    /// Container corner radius
    pub corner_radius: f32,
    /// Label backplate opacity [0, 1]
    pub backplate_opacity: f32,
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            panel_opacity: 0.85,
            corner_radius: 6.0,
            backplate_opacity: 0.4,
        }
    }
}

/// Fully resolved style for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Style {
    /// Color palette
    pub palette: Palette,
    /// Text sizes
    pub typography: Typography,
    /// Container chrome defaults
    pub chrome: Chrome,
}

impl Style {
    /// Default surface color for panel containers, before the panel
    /// opacity is applied.
    pub const SURFACE: Color = Color {
        r: 0.09,
        g: 0.09,
        b: 0.11,
        a: 1.0,
    };
}
