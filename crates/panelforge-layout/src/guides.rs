//! Grid guide generation.
//!
//! Guides partition the usable rectangle (bounds minus safe area minus
//! padding) into `columns x rows` cells. Each track owns a stride of
//! `usable / count`; the guide's visible length is the stride minus the
//! gutter, so consecutive guides are separated by exactly one gutter.

use panelforge_core::{Axis, ConfigError, Size};
use panelforge_schema::Layout;
use serde::{Deserialize, Serialize};

/// One column or row guide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    /// Leading edge (x for columns, y for rows)
    pub leading: f32,
    /// Visible length (width for columns, height for rows)
    pub length: f32,
}

impl Guide {
    /// Trailing edge.
    #[must_use]
    pub fn trailing(&self) -> f32 {
        self.leading + self.length
    }
}

/// Column and row guides for one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideSet {
    /// Column guides, left to right
    pub columns: Vec<Guide>,
    /// Row guides, top to bottom
    pub rows: Vec<Guide>,
}

impl GuideSet {
    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> u32 {
        self.columns.len() as u32
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> u32 {
        self.rows.len() as u32
    }
}

/// Compute column and row guides for the given bounds and layout.
///
/// # Errors
///
/// Returns [`ConfigError::GridDimensions`] when the grid declares zero
/// columns or rows, and [`ConfigError::NegativeTrack`] when insets,
/// padding, and gutters leave a track with negative length.
pub fn compute_guides(bounds: Size, layout: &Layout) -> Result<GuideSet, ConfigError> {
    let grid = layout.grid;
    if grid.columns < 1 || grid.rows < 1 {
        return Err(ConfigError::GridDimensions {
            columns: grid.columns,
            rows: grid.rows,
        });
    }

    let usable_w =
        bounds.width - layout.safe_area.left - layout.safe_area.right - 2.0 * layout.padding.x;
    let usable_h =
        bounds.height - layout.safe_area.top - layout.safe_area.bottom - 2.0 * layout.padding.y;

    let columns = tracks(
        layout.safe_area.left + layout.padding.x,
        usable_w,
        grid.columns,
        grid.gutter_x,
        Axis::Horizontal,
    )?;
    let rows = tracks(
        layout.safe_area.top + layout.padding.y,
        usable_h,
        grid.rows,
        grid.gutter_y,
        Axis::Vertical,
    )?;

    Ok(GuideSet { columns, rows })
}

fn tracks(
    origin: f32,
    usable: f32,
    count: u32,
    gutter: f32,
    axis: Axis,
) -> Result<Vec<Guide>, ConfigError> {
    let stride = usable / count as f32;
    let length = stride - gutter;
    if length < 0.0 {
        return Err(ConfigError::NegativeTrack { axis, length });
    }

    Ok((0..count)
        .map(|i| Guide {
            leading: origin + i as f32 * stride,
            length,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelforge_schema::{GridSpec, Insets, Padding};
    use proptest::prelude::*;

    fn layout(columns: u32, rows: u32, gutter: f32, padding: f32) -> Layout {
        Layout {
            flow_axis: panelforge_schema::FlowAxis::LeftToRight,
            safe_area: Insets::default(),
            padding: Padding {
                x: padding,
                y: padding,
            },
            grid: GridSpec {
                columns,
                rows,
                gutter_x: gutter,
                gutter_y: gutter,
            },
        }
    }

    // Concrete scenario: 4x3 grid, 400x300 bounds, padding (8,8),
    // gutter (4,4). Usable width 384, stride 96, column width 92.
    #[test]
    fn test_concrete_scenario() {
        let guides = compute_guides(Size::new(400.0, 300.0), &layout(4, 3, 4.0, 8.0)).unwrap();

        assert_eq!(guides.column_count(), 4);
        assert!((guides.columns[0].leading - 8.0).abs() < 1e-4);
        assert!((guides.columns[0].length - 92.0).abs() < 1e-4);
        assert!((guides.columns[1].leading - 104.0).abs() < 1e-4);
        assert!((guides.columns[3].leading - (8.0 + 3.0 * 96.0)).abs() < 1e-4);
    }

    #[test]
    fn test_safe_area_offsets_origin() {
        let mut l = layout(2, 2, 0.0, 0.0);
        l.safe_area = Insets {
            top: 20.0,
            left: 10.0,
            bottom: 0.0,
            right: 0.0,
        };
        let guides = compute_guides(Size::new(110.0, 120.0), &l).unwrap();
        assert_eq!(guides.columns[0].leading, 10.0);
        assert_eq!(guides.rows[0].leading, 20.0);
        assert_eq!(guides.columns[0].length, 50.0);
        assert_eq!(guides.rows[0].length, 50.0);
    }

    #[test]
    fn test_zero_columns_rejected() {
        let err = compute_guides(Size::new(100.0, 100.0), &layout(0, 3, 0.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::GridDimensions { columns: 0, rows: 3 }
        ));
    }

    #[test]
    fn test_oversized_gutter_rejected() {
        // Stride 25, gutter 30: negative track.
        let err = compute_guides(Size::new(100.0, 100.0), &layout(4, 1, 30.0, 0.0)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NegativeTrack {
                axis: Axis::Horizontal,
                ..
            }
        ));
    }

    #[test]
    fn test_padding_exceeding_bounds_rejected() {
        let err = compute_guides(Size::new(30.0, 30.0), &layout(1, 1, 0.0, 20.0)).unwrap_err();
        assert!(matches!(err, ConfigError::NegativeTrack { .. }));
    }

    #[test]
    fn test_single_cell_fills_usable() {
        let guides = compute_guides(Size::new(200.0, 100.0), &layout(1, 1, 0.0, 0.0)).unwrap();
        assert_eq!(guides.columns[0].leading, 0.0);
        assert_eq!(guides.columns[0].length, 200.0);
        assert_eq!(guides.rows[0].length, 100.0);
    }

    proptest! {
        // Widths plus the internal gutters sum to the usable extent
        // minus one gutter (each track cedes one gutter of its stride);
        // with no gutter the sum is exactly the usable extent.
        #[test]
        fn prop_track_sum(
            columns in 1u32..32,
            width in 64.0f32..4096.0,
            gutter in 0.0f32..2.0,
        ) {
            let guides = compute_guides(
                Size::new(width, 100.0),
                &layout(columns, 1, gutter, 0.0),
            ).unwrap();

            let widths: f32 = guides.columns.iter().map(|g| g.length).sum();
            let gutters = gutter * (columns - 1) as f32;
            let expected = width - gutter;
            prop_assert!((widths + gutters - expected).abs() < 1e-2);
        }

        #[test]
        fn prop_track_sum_no_gutter_is_exact(
            columns in 1u32..32,
            width in 64.0f32..4096.0,
        ) {
            let guides = compute_guides(
                Size::new(width, 100.0),
                &layout(columns, 1, 0.0, 0.0),
            ).unwrap();

            let widths: f32 = guides.columns.iter().map(|g| g.length).sum();
            prop_assert!((widths - width).abs() < 1e-2);
        }

        // With zero padding and safe area, scaling bounds by k scales
        // every guide by k (gutter scaled too, to keep the grid
        // self-similar).
        #[test]
        fn prop_proportional_scaling(
            columns in 1u32..16,
            rows in 1u32..16,
            width in 64.0f32..1024.0,
            height in 64.0f32..1024.0,
            k in 0.1f32..8.0,
        ) {
            let base = compute_guides(
                Size::new(width, height),
                &layout(columns, rows, 0.0, 0.0),
            ).unwrap();
            let scaled = compute_guides(
                Size::new(width * k, height * k),
                &layout(columns, rows, 0.0, 0.0),
            ).unwrap();

            for (b, s) in base.columns.iter().zip(&scaled.columns) {
                prop_assert!((b.leading * k - s.leading).abs() < 1e-1);
                prop_assert!((b.length * k - s.length).abs() < 1e-1);
            }
            for (b, s) in base.rows.iter().zip(&scaled.rows) {
                prop_assert!((b.leading * k - s.leading).abs() < 1e-1);
                prop_assert!((b.length * k - s.length).abs() < 1e-1);
            }
        }
    }
}
