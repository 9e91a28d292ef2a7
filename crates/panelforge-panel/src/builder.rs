//! Panel tree construction.
//!
//! Walks the schema in a fixed order (groups, then process, then
//! recipes panel), resolves each anchor to an absolute frame, and
//! builds positioned elements with fully resolved style attributes.
//! Dynamic values come in through [`PanelBindings`]; a query that
//! returns nothing degrades to the schema-declared default (empty
//! slot, zero progress, empty catalog) and never fails the pass.

use panelforge_core::{
    Color, Element, ElementKind, FlowDirection, Intent, LayoutError, PanelBindings, Rect, Size,
    Style, StyleRole, Violation,
};
use panelforge_layout::{compute_guides, place, resolve_region, GuideSet};
use panelforge_schema::{
    Group, GroupRole, Header, PanelSchema, Process, ProgressStyle, RecipesMode, RecipesPanel,
    StateText, StateTextMode,
};

use crate::validate::validate;

/// Interior padding of a group container.
const CHROME_INSET: f32 = 6.0;
/// Gap between slots when computing intrinsic strip extent.
const SLOT_GAP: f32 = 4.0;
/// Vertical padding around a text line.
const LINE_PAD: f32 = 4.0;
/// Height of a progress bar.
const BAR_HEIGHT: f32 = 8.0;
/// Diameter of a progress ring.
const RING_DIAMETER: f32 = 28.0;
/// Gap between the process label and its progress element.
const STACK_GAP: f32 = 6.0;
/// Edge length of a flow glyph.
const GLYPH_SIZE: f32 = 12.0;
/// Intrinsic width of the process block.
const PROCESS_MIN_WIDTH: f32 = 96.0;

/// How invariant violations gate building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Refuse to build when any violation exists; return only the
    /// violation list.
    Strict,
    /// Build anyway; violations come back as diagnostics.
    Lenient,
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelTree {
    /// The built tree; `None` when strict mode refused to build.
    pub root: Option<Element>,
    /// Invariant violations found before building.
    pub violations: Vec<Violation>,
}

impl PanelTree {
    /// Whether a tree was built.
    #[must_use]
    pub const fn is_built(&self) -> bool {
        self.root.is_some()
    }
}

/// Run one layout pass.
///
/// Pure in its three inputs: identical schema, bounds, and binding
/// snapshots produce an identical tree.
///
/// # Errors
///
/// Returns [`LayoutError`] when the grid configuration cannot produce
/// guides or an anchor exceeds the grid. No partial tree is emitted on
/// a hard error.
pub fn layout_panel(
    schema: &PanelSchema,
    bounds: Size,
    bindings: &dyn PanelBindings,
    mode: ValidationMode,
) -> Result<PanelTree, LayoutError> {
    let violations = validate(schema);
    if mode == ValidationMode::Strict && !violations.is_empty() {
        return Ok(PanelTree {
            root: None,
            violations,
        });
    }

    let style = schema.style.resolve()?;
    let guides = compute_guides(bounds, &schema.layout)?;

    let mut root = Element::new(
        ElementKind::Container {
            background: Color::TRANSPARENT,
            border_width: 0.0,
            corner_radius: 0.0,
        },
        Rect::from_size(bounds),
    );

    // Group frames are kept for flow-glyph midpoints.
    let mut group_frames: Vec<(GroupRole, Rect)> = Vec::with_capacity(schema.groups.len());
    for group in &schema.groups {
        let element = build_group(group, &guides, &style, bindings)?;
        group_frames.push((group.role, element.frame));
        root.push(element);
    }

    if let Some(process) = &schema.process {
        root.push(build_process(
            process,
            &guides,
            &style,
            bindings,
            &group_frames,
        )?);
    }

    if let Some(recipes) = &schema.recipes {
        if recipes.mode != RecipesMode::Hidden {
            root.push(build_recipes(recipes, &guides, &style, bindings)?);
        }
    }

    Ok(PanelTree {
        root: Some(root),
        violations,
    })
}

fn line_height(point_size: f32) -> f32 {
    point_size + 2.0 * LINE_PAD
}

fn header_element(header: &Header, frame: Rect, style: &Style) -> Element {
    Element::new(
        ElementKind::HeaderText {
            text: header.text.clone(),
            color: style.palette.color(header.style_role),
            point_size: style.typography.header,
            align: header.alignment,
            backplate_opacity: style.chrome.backplate_opacity,
            accessibility: header.accessibility.clone(),
        },
        frame,
    )
}

// ---------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------

fn build_group(
    group: &Group,
    guides: &GuideSet,
    style: &Style,
    bindings: &dyn PanelBindings,
) -> Result<Element, LayoutError> {
    let region = resolve_region(&group.id, &group.anchor, guides)?;
    let intrinsic = group_intrinsic(group, style);
    let frame = place(region, intrinsic, group.anchor.align_x, group.anchor.align_y);

    let chrome = group.chrome.clone().unwrap_or_default();
    let background = chrome
        .background_color(&group.id)?
        .unwrap_or_else(|| Style::SURFACE.with_alpha(style.chrome.panel_opacity));

    let mut container = Element::new(
        ElementKind::Container {
            background,
            border_width: chrome.border_width.unwrap_or(0.0),
            corner_radius: chrome.corner_radius.unwrap_or(style.chrome.corner_radius),
        },
        frame,
    );

    let header_h = line_height(style.typography.header);
    container.push(header_element(
        &group.header,
        Rect::new(frame.x, frame.y, frame.width, header_h),
        style,
    ));

    let (total_count, total_amount) = aggregate_content(group, bindings);
    let state = group
        .content
        .state_text
        .as_ref()
        .and_then(|st| resolve_state_text(st, total_count, total_amount));
    let state_h = if state.is_some() {
        line_height(style.typography.body)
    } else {
        0.0
    };

    // Slot strip fills the space between header and state line; with
    // no state line it extends to the container's trailing edge.
    let strip = Rect::new(
        frame.x + CHROME_INSET,
        frame.y + header_h,
        (frame.width - 2.0 * CHROME_INSET).max(0.0),
        (frame.height - header_h - state_h - CHROME_INSET).max(0.0),
    );
    build_slot_strip(&mut container, group, strip, bindings);

    if let Some(text) = state {
        container.push(Element::new(
            ElementKind::StateText {
                text,
                color: style.palette.color(StyleRole::MutedText),
                point_size: style.typography.body,
            },
            Rect::new(
                frame.x + CHROME_INSET,
                frame.bottom() - CHROME_INSET - state_h,
                (frame.width - 2.0 * CHROME_INSET).max(0.0),
                state_h,
            ),
        ));
    }

    Ok(container)
}

fn build_slot_strip(
    container: &mut Element,
    group: &Group,
    strip: Rect,
    bindings: &dyn PanelBindings,
) {
    let slots = &group.content.slots;
    if slots.is_empty() {
        return;
    }

    let horizontal = strip.width >= strip.height;
    let axis_len = if horizontal { strip.width } else { strip.height };
    let stride = axis_len / slots.len() as f32;

    for (i, slot) in slots.iter().enumerate() {
        let size = slot.renders.size_dp;
        let along = (i as f32 + 0.5).mul_add(stride, -size / 2.0);
        let frame = if horizontal {
            Rect::new(
                strip.x + along,
                strip.y + (strip.height - size) / 2.0,
                size,
                size,
            )
        } else {
            Rect::new(
                strip.x + (strip.width - size) / 2.0,
                strip.y + along,
                size,
                size,
            )
        };

        container.push(
            Element::new(
                ElementKind::Slot {
                    slot_id: slot.id.clone(),
                    visual: slot.renders.style,
                    overlay: slot.renders.overlay,
                    content: bindings.slot_content(&slot.id),
                },
                frame,
            )
            .with_intent(Intent::SelectSlot {
                group_id: group.id.clone(),
                slot_id: slot.id.clone(),
            }),
        );
    }
}

fn group_intrinsic(group: &Group, style: &Style) -> Size {
    let slots = &group.content.slots;
    let strip_len: f32 = slots.iter().map(|s| s.renders.size_dp).sum::<f32>()
        + SLOT_GAP * slots.len().saturating_sub(1) as f32;
    let strip_cross = slots
        .iter()
        .map(|s| s.renders.size_dp)
        .fold(0.0f32, f32::max);

    let state_h = match group.content.state_text {
        Some(ref st) if st.mode != StateTextMode::Never => line_height(style.typography.body),
        _ => 0.0,
    };

    Size::new(
        strip_len + 2.0 * CHROME_INSET,
        line_height(style.typography.header) + strip_cross + state_h + CHROME_INSET,
    )
}

fn aggregate_content(group: &Group, bindings: &dyn PanelBindings) -> (u32, f32) {
    let mut count = 0;
    let mut amount = 0.0;
    for slot in &group.content.slots {
        if let Some(value) = bindings.slot_content(&slot.id) {
            count += value.count;
            amount += value.amount.unwrap_or(0.0);
        }
    }
    (count, amount)
}

fn resolve_state_text(st: &StateText, count: u32, amount: f32) -> Option<String> {
    let present = count > 0 || amount > 0.0;
    match st.mode {
        StateTextMode::Never => None,
        StateTextMode::Auto => {
            if present {
                st.non_empty
                    .as_deref()
                    .map(|t| substitute(t, count, amount))
            } else {
                Some(st.empty.clone())
            }
        }
        StateTextMode::Always => Some(if present {
            st.non_empty
                .as_deref()
                .map_or_else(|| st.empty.clone(), |t| substitute(t, count, amount))
        } else {
            st.empty.clone()
        }),
    }
}

fn substitute(template: &str, count: u32, amount: f32) -> String {
    template
        .replace("{count}", &count.to_string())
        .replace("{amount}", &format_amount(amount))
}

fn format_amount(amount: f32) -> String {
    if amount.fract().abs() < f32::EPSILON {
        format!("{amount:.0}")
    } else {
        format!("{amount:.1}")
    }
}

// ---------------------------------------------------------------------
// Process
// ---------------------------------------------------------------------

fn build_process(
    process: &Process,
    guides: &GuideSet,
    style: &Style,
    bindings: &dyn PanelBindings,
    group_frames: &[(GroupRole, Rect)],
) -> Result<Element, LayoutError> {
    let region = resolve_region(&process.id, &process.anchor, guides)?;
    let intrinsic = process_intrinsic(process, style);
    let frame = place(
        region,
        intrinsic,
        process.anchor.align_x,
        process.anchor.align_y,
    );

    let mut block = Element::new(
        ElementKind::Container {
            background: Color::TRANSPARENT,
            border_width: 0.0,
            corner_radius: 0.0,
        },
        frame,
    );

    let label_h = line_height(style.typography.header);
    block.push(header_element(
        &process.label,
        Rect::new(frame.x, frame.y, frame.width, label_h),
        style,
    ));

    let progress_top = frame.y + label_h + STACK_GAP;
    let fraction = bindings
        .process_progress(&process.id)
        .unwrap_or(0.0)
        .clamp(0.0, 1.0);

    match process.progress.style {
        ProgressStyle::Bar => block.push(Element::new(
            ElementKind::Progress {
                visual: panelforge_core::ProgressVisual::Bar,
                fraction,
                show_percent: process.progress.show_percent,
                color: style.palette.color(StyleRole::Process),
            },
            Rect::new(frame.x, progress_top, frame.width, BAR_HEIGHT),
        )),
        ProgressStyle::Ring => block.push(Element::new(
            ElementKind::Progress {
                visual: panelforge_core::ProgressVisual::Ring,
                fraction,
                show_percent: process.progress.show_percent,
                color: style.palette.color(StyleRole::Process),
            },
            Rect::new(
                frame.center().x - RING_DIAMETER / 2.0,
                progress_top,
                RING_DIAMETER,
                RING_DIAMETER,
            ),
        )),
        ProgressStyle::None => {}
    }

    if process.operators.show_flow_glyphs {
        let glyph_color = style.palette.color(process.operators.glyph_style_role);
        for (role, group_frame) in group_frames {
            let direction = match role {
                GroupRole::Input => FlowDirection::Inbound,
                GroupRole::Output => FlowDirection::Outbound,
                _ => continue,
            };
            let mid = frame.center().midpoint(&group_frame.center());
            block.push(Element::new(
                ElementKind::FlowGlyph {
                    direction,
                    color: glyph_color,
                },
                Rect::new(
                    mid.x - GLYPH_SIZE / 2.0,
                    mid.y - GLYPH_SIZE / 2.0,
                    GLYPH_SIZE,
                    GLYPH_SIZE,
                ),
            ));
        }
    }

    Ok(block)
}

fn process_intrinsic(process: &Process, style: &Style) -> Size {
    let progress_h = match process.progress.style {
        ProgressStyle::Bar => STACK_GAP + BAR_HEIGHT,
        ProgressStyle::Ring => STACK_GAP + RING_DIAMETER,
        ProgressStyle::None => 0.0,
    };
    Size::new(
        PROCESS_MIN_WIDTH,
        line_height(style.typography.header) + progress_h,
    )
}

// ---------------------------------------------------------------------
// Recipes
// ---------------------------------------------------------------------

fn recipes_intrinsic(panel: &RecipesPanel, style: &Style) -> Size {
    let grid = panel.grid;
    let cols = grid.columns.max(1) as f32;
    let row_len = grid.cell_size_dp.mul_add(cols, grid.col_spacing_dp * (cols - 1.0));
    Size::new(
        row_len + 2.0 * CHROME_INSET,
        line_height(style.typography.header) + grid.cell_size_dp + CHROME_INSET,
    )
}

fn build_recipes(
    panel: &RecipesPanel,
    guides: &GuideSet,
    style: &Style,
    bindings: &dyn PanelBindings,
) -> Result<Element, LayoutError> {
    let region = resolve_region(&panel.id, &panel.anchor, guides)?;
    let intrinsic = recipes_intrinsic(panel, style);
    let frame = place(region, intrinsic, panel.anchor.align_x, panel.anchor.align_y);

    let mut block = Element::new(
        ElementKind::Container {
            background: Style::SURFACE.with_alpha(style.chrome.panel_opacity),
            border_width: 0.0,
            corner_radius: style.chrome.corner_radius,
        },
        frame,
    );

    let title_h = line_height(style.typography.header);
    block.push(Element::new(
        ElementKind::HeaderText {
            text: panel.title.clone(),
            color: style.palette.color(StyleRole::Process),
            point_size: style.typography.header,
            align: panelforge_core::TextAlign::Leading,
            backplate_opacity: style.chrome.backplate_opacity,
            accessibility: None,
        },
        Rect::new(frame.x, frame.y, frame.width, title_h),
    ));

    let grid = panel.grid;
    let area = Rect::new(
        frame.x + CHROME_INSET,
        frame.y + title_h,
        (frame.width - 2.0 * CHROME_INSET).max(0.0),
        (frame.height - title_h - CHROME_INSET).max(0.0),
    );

    // Geometry comes from the schema; cell count comes from the bound
    // catalog, clipped to what fits the region.
    let cols_fit = fit_count(area.width, grid.cell_size_dp, grid.col_spacing_dp)
        .min(grid.columns as usize);
    let rows_fit = fit_count(area.height, grid.cell_size_dp, grid.row_spacing_dp);
    let capacity = cols_fit * rows_fit;

    let catalog = bindings.recipe_catalog(&panel.id);
    let selectable = panel.mode == RecipesMode::Picker;

    for (index, recipe) in catalog.iter().take(capacity).enumerate() {
        let row = index / cols_fit;
        let col = index % cols_fit;
        let x = (grid.cell_size_dp + grid.col_spacing_dp).mul_add(col as f32, area.x);
        let y = (grid.cell_size_dp + grid.row_spacing_dp).mul_add(row as f32, area.y);

        block.push(
            Element::new(
                ElementKind::RecipeCell {
                    index,
                    recipe_id: recipe.id.clone(),
                    selectable,
                },
                Rect::new(x, y, grid.cell_size_dp, grid.cell_size_dp),
            )
            .with_intent(Intent::SelectRecipe { index }),
        );
    }

    Ok(block)
}

/// How many cells of `cell` size with `spacing` gaps fit in `extent`.
fn fit_count(extent: f32, cell: f32, spacing: f32) -> usize {
    if cell <= 0.0 || extent < cell {
        return 0;
    }
    (((extent + spacing) / (cell + spacing)).floor()) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_count() {
        assert_eq!(fit_count(100.0, 30.0, 5.0), 3); // 30+5+30+5+30 = 100
        assert_eq!(fit_count(99.0, 30.0, 5.0), 2);
        assert_eq!(fit_count(29.0, 30.0, 5.0), 0);
        assert_eq!(fit_count(100.0, 0.0, 5.0), 0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(10.0), "10");
        assert_eq!(format_amount(2.5), "2.5");
    }

    #[test]
    fn test_substitute() {
        assert_eq!(substitute("{count} items", 5, 0.0), "5 items");
        assert_eq!(substitute("{amount} mB", 0, 250.0), "250 mB");
    }

    #[test]
    fn test_state_text_auto() {
        let st = StateText {
            mode: StateTextMode::Auto,
            empty: "Empty".to_string(),
            non_empty: Some("{count} items".to_string()),
        };
        assert_eq!(resolve_state_text(&st, 0, 0.0).as_deref(), Some("Empty"));
        assert_eq!(resolve_state_text(&st, 5, 0.0).as_deref(), Some("5 items"));
    }

    #[test]
    fn test_state_text_auto_without_template_hides_when_present() {
        let st = StateText {
            mode: StateTextMode::Auto,
            empty: "Empty".to_string(),
            non_empty: None,
        };
        assert_eq!(resolve_state_text(&st, 3, 0.0), None);
    }

    #[test]
    fn test_state_text_always_falls_back_to_empty() {
        let st = StateText {
            mode: StateTextMode::Always,
            empty: "Idle".to_string(),
            non_empty: None,
        };
        assert_eq!(resolve_state_text(&st, 3, 0.0).as_deref(), Some("Idle"));
        assert_eq!(resolve_state_text(&st, 0, 0.0).as_deref(), Some("Idle"));
    }

    #[test]
    fn test_state_text_never_suppressed() {
        let st = StateText {
            mode: StateTextMode::Never,
            empty: "Empty".to_string(),
            non_empty: Some("{count}".to_string()),
        };
        assert_eq!(resolve_state_text(&st, 5, 0.0), None);
    }
}
