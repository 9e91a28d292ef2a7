//! Error taxonomy.
//!
//! Two tiers: hard errors ([`LayoutError`]) abort a layout pass with no
//! partial tree, because geometry cannot be trusted past them; invariant
//! violations ([`Violation`]) are data, collected and returned for the
//! caller to act on in strict or lenient mode.

use crate::color::ColorParseError;
use std::fmt;

/// Grid axis, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Columns / x
    Horizontal,
    /// Rows / y
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Invalid layout configuration: no guides can be produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid must have at least one column and one row.
    GridDimensions {
        /// Declared column count
        columns: u32,
        /// Declared row count
        rows: u32,
    },
    /// Safe area, padding, and gutters leave a negative track length.
    NegativeTrack {
        /// Axis on which the track collapsed
        axis: Axis,
        /// Computed track length
        length: f32,
    },
    /// A palette or chrome hex color failed to parse.
    Color {
        /// Schema field holding the bad value
        field: String,
        /// Underlying parse error
        source: ColorParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridDimensions { columns, rows } => {
                write!(f, "grid must be at least 1x1, got {columns}x{rows}")
            }
            Self::NegativeTrack { axis, length } => {
                write!(f, "computed {axis} track length is negative ({length})")
            }
            Self::Color { field, source } => {
                write!(f, "invalid color for '{field}': {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Color { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Hard layout failure; the pass aborts and no tree is emitted.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Layout configuration cannot produce guides.
    Config(ConfigError),
    /// An anchor extends past the grid; the region cannot be computed
    /// and must not be silently clipped.
    AnchorOutOfBounds {
        /// Id of the anchored group/process/panel
        id: String,
        /// Axis that overflowed
        axis: Axis,
        /// Anchor start cell
        start: u32,
        /// Anchor span
        span: u32,
        /// Track count on that axis
        tracks: u32,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::AnchorOutOfBounds {
                id,
                axis,
                start,
                span,
                tracks,
            } => write!(
                f,
                "anchor '{id}' out of bounds: {axis} cells {start}+{span} exceed {tracks} tracks"
            ),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::AnchorOutOfBounds { .. } => None,
        }
    }
}

impl From<ConfigError> for LayoutError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Which side of the process block a group was expected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowSide {
    /// Before the process along the flow axis
    Before,
    /// After the process along the flow axis
    After,
}

impl fmt::Display for FlowSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
        }
    }
}

/// A structural invariant violation. Recoverable by caller policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A group header has empty text.
    MissingGroupHeader {
        /// Offending group id
        group_id: String,
    },
    /// The process label has empty text.
    MissingProcessLabel,
    /// A group sits on the wrong side of the process along the flow
    /// axis.
    InvalidFlowPosition {
        /// Offending group id
        group_id: String,
        /// Expected side relative to the process
        expected: FlowSide,
        /// The process block's track on the flow axis
        process_track: u32,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGroupHeader { group_id } => {
                write!(f, "group '{group_id}' has an empty header")
            }
            Self::MissingProcessLabel => write!(f, "process label is empty"),
            Self::InvalidFlowPosition {
                group_id,
                expected,
                process_track,
            } => write!(
                f,
                "group '{group_id}' must sit {expected} the process (track {process_track})"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let e = ConfigError::GridDimensions {
            columns: 0,
            rows: 3,
        };
        assert_eq!(e.to_string(), "grid must be at least 1x1, got 0x3");
    }

    #[test]
    fn test_layout_error_display() {
        let e = LayoutError::AnchorOutOfBounds {
            id: "output".to_string(),
            axis: Axis::Horizontal,
            start: 3,
            span: 2,
            tracks: 4,
        };
        assert_eq!(
            e.to_string(),
            "anchor 'output' out of bounds: horizontal cells 3+2 exceed 4 tracks"
        );
    }

    #[test]
    fn test_layout_error_from_config() {
        let e: LayoutError = ConfigError::NegativeTrack {
            axis: Axis::Vertical,
            length: -2.0,
        }
        .into();
        assert!(matches!(e, LayoutError::Config(_)));
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::InvalidFlowPosition {
            group_id: "ore".to_string(),
            expected: FlowSide::Before,
            process_track: 2,
        };
        assert_eq!(
            v.to_string(),
            "group 'ore' must sit before the process (track 2)"
        );
    }
}
