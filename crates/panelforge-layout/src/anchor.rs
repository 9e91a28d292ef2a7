//! Anchor resolution and in-region placement.
//!
//! An anchor maps onto a *region*: the absolute rectangle spanned by
//! its guide extent. Spans absorb internal gutters (a 2-column span is
//! one gutter wider than two independent columns). Placement then
//! applies the anchor's alignment: `fill` takes the region on that
//! axis, anything else positions the intrinsic size within it. Centers
//! are computed from the resolved region, never from a single guide.

use panelforge_core::{Axis, LayoutError, Rect, Size};
use panelforge_schema::{Align, Anchor};

use crate::guides::GuideSet;

/// Resolve an anchor to its absolute region.
///
/// `id` names the anchored group/process/panel in errors.
///
/// # Errors
///
/// Returns [`LayoutError::AnchorOutOfBounds`] when the anchor's span
/// extends past the grid on either axis. This is a hard error: no
/// region can be computed, and clipping would silently corrupt the
/// panel.
pub fn resolve_region(id: &str, anchor: &Anchor, guides: &GuideSet) -> Result<Rect, LayoutError> {
    let columns = guides.column_count();
    let rows = guides.row_count();

    // Compared without addition: grid + span can overflow u32.
    if anchor.span_x < 1 || anchor.grid_x >= columns || anchor.span_x > columns - anchor.grid_x {
        return Err(LayoutError::AnchorOutOfBounds {
            id: id.to_string(),
            axis: Axis::Horizontal,
            start: anchor.grid_x,
            span: anchor.span_x,
            tracks: columns,
        });
    }
    if anchor.span_y < 1 || anchor.grid_y >= rows || anchor.span_y > rows - anchor.grid_y {
        return Err(LayoutError::AnchorOutOfBounds {
            id: id.to_string(),
            axis: Axis::Vertical,
            start: anchor.grid_y,
            span: anchor.span_y,
            tracks: rows,
        });
    }

    let first_col = guides.columns[anchor.grid_x as usize];
    let last_col = guides.columns[(anchor.grid_x + anchor.span_x - 1) as usize];
    let first_row = guides.rows[anchor.grid_y as usize];
    let last_row = guides.rows[(anchor.grid_y + anchor.span_y - 1) as usize];

    Ok(Rect::new(
        first_col.leading,
        first_row.leading,
        last_col.trailing() - first_col.leading,
        last_row.trailing() - first_row.leading,
    ))
}

/// Place an intrinsically sized element within a region per its
/// alignment.
#[must_use]
pub fn place(region: Rect, intrinsic: Size, align_x: Align, align_y: Align) -> Rect {
    let (x, width) = axis(region.x, region.width, intrinsic.width, align_x);
    let (y, height) = axis(region.y, region.height, intrinsic.height, align_y);
    Rect::new(x, y, width, height)
}

fn axis(leading: f32, extent: f32, intrinsic: f32, align: Align) -> (f32, f32) {
    match align {
        Align::Fill => (leading, extent),
        Align::Leading => (leading, intrinsic),
        Align::Trailing => (leading + extent - intrinsic, intrinsic),
        Align::Center => (leading + (extent - intrinsic) / 2.0, intrinsic),
    }
}
