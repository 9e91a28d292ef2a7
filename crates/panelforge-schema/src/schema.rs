//! Panel schema types.
//!
//! Field names follow the document's camelCase spelling. Optional
//! fields default rather than fail, and unknown fields are ignored so
//! newer documents load on older engines.

use panelforge_core::{
    Chrome, Color, ConfigError, OverlayKind, Palette, SlotVisual, Style, StyleRole, TextAlign,
    Typography,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Root schema document for one panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSchema {
    /// Document format version
    pub version: u32,
    /// Flow, insets, and grid configuration
    pub layout: Layout,
    /// Slot groups, in build order
    #[serde(default)]
    pub groups: Vec<Group>,
    /// Optional process block (at most one)
    #[serde(default)]
    pub process: Option<Process>,
    /// Optional recipes panel (at most one)
    #[serde(default)]
    pub recipes: Option<RecipesPanel>,
    /// Style configuration
    #[serde(default)]
    pub style: StyleSpec,
    /// Invariant rules this panel opts into. Absent means all rules;
    /// opting out must be explicit.
    #[serde(default = "all_invariants")]
    pub invariants: BTreeSet<InvariantRule>,
}

impl PanelSchema {
    /// Whether the schema opts into an invariant rule.
    #[must_use]
    pub fn enforces(&self, rule: InvariantRule) -> bool {
        self.invariants.contains(&rule)
    }
}

/// A named structural rule a schema may opt into enforcing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum InvariantRule {
    /// Every group header must have text.
    GroupHeaders,
    /// The process label must have text.
    ProcessLabel,
    /// Inputs before / outputs after the process on the flow axis.
    FlowOrder,
}

fn all_invariants() -> BTreeSet<InvariantRule> {
    [
        InvariantRule::GroupHeaders,
        InvariantRule::ProcessLabel,
        InvariantRule::FlowOrder,
    ]
    .into_iter()
    .collect()
}

/// Reading order of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowAxis {
    /// Inputs on the left, outputs on the right
    #[default]
    LeftToRight,
    /// Inputs on top, outputs below
    TopToBottom,
}

/// Flow, insets, and grid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Reading order used by the flow invariant
    #[serde(default)]
    pub flow_axis: FlowAxis,
    /// Safe-area insets
    #[serde(default)]
    pub safe_area: Insets,
    /// Padding inside the safe area
    #[serde(default)]
    pub padding: Padding,
    /// Grid configuration
    pub grid: GridSpec,
}

/// Edge insets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insets {
    /// Top inset
    #[serde(default)]
    pub top: f32,
    /// Left inset
    #[serde(default)]
    pub left: f32,
    /// Bottom inset
    #[serde(default)]
    pub bottom: f32,
    /// Right inset
    #[serde(default)]
    pub right: f32,
}

/// Symmetric padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    /// Horizontal padding
    #[serde(default)]
    pub x: f32,
    /// Vertical padding
    #[serde(default)]
    pub y: f32,
}

/// Grid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSpec {
    /// Column count, must be >= 1
    pub columns: u32,
    /// Row count, must be >= 1
    pub rows: u32,
    /// Horizontal gutter between columns
    #[serde(default)]
    pub gutter_x: f32,
    /// Vertical gutter between rows
    #[serde(default)]
    pub gutter_y: f32,
}

/// What a slot group holds in the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupRole {
    /// Burnable fuel
    Fuel,
    /// Recipe inputs
    Input,
    /// Recipe outputs
    Output,
    /// Secondary outputs
    Byproduct,
    /// Non-consumed requirements
    Catalyst,
    /// Fluid inputs
    FluidInput,
    /// Fluid outputs
    FluidOutput,
    /// Power connection
    Power,
}

/// A slot group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Unique id within the schema
    pub id: String,
    /// Domain role
    pub role: GroupRole,
    /// Header label
    pub header: Header,
    /// Grid placement
    pub anchor: Anchor,
    /// Slots and optional state text
    #[serde(default)]
    pub content: GroupContent,
    /// Per-group chrome override
    #[serde(default)]
    pub chrome: Option<ChromeOverride>,
}

/// A header/label description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Label text; must be non-empty (checked by the validator)
    pub text: String,
    /// Palette role for the text color
    pub style_role: StyleRole,
    /// Horizontal alignment
    #[serde(default)]
    pub alignment: TextAlign,
    /// Optional accessibility text
    #[serde(default)]
    pub accessibility: Option<String>,
}

/// Grid placement: position, span, and in-region alignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anchor {
    /// Leftmost cell
    #[serde(default)]
    pub grid_x: u32,
    /// Topmost cell
    #[serde(default)]
    pub grid_y: u32,
    /// Columns spanned, >= 1
    #[serde(default = "one")]
    pub span_x: u32,
    /// Rows spanned, >= 1
    #[serde(default = "one")]
    pub span_y: u32,
    /// Horizontal alignment within the region
    #[serde(default)]
    pub align_x: Align,
    /// Vertical alignment within the region
    #[serde(default)]
    pub align_y: Align,
}

impl Default for Anchor {
    fn default() -> Self {
        Self {
            grid_x: 0,
            grid_y: 0,
            span_x: 1,
            span_y: 1,
            align_x: Align::Fill,
            align_y: Align::Fill,
        }
    }
}

impl Anchor {
    /// Anchor a single cell.
    #[must_use]
    pub fn cell(grid_x: u32, grid_y: u32) -> Self {
        Self {
            grid_x,
            grid_y,
            ..Self::default()
        }
    }

    /// Anchor a horizontal span of cells.
    #[must_use]
    pub fn span(grid_x: u32, grid_y: u32, span_x: u32, span_y: u32) -> Self {
        Self {
            grid_x,
            grid_y,
            span_x,
            span_y,
            ..Self::default()
        }
    }
}

fn one() -> u32 {
    1
}

/// Alignment of a placed element within its resolved region.
///
/// The vertical axis additionally accepts `top`/`bottom`, meaning
/// leading/trailing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Align {
    /// Flush to the leading/top edge
    #[serde(alias = "top")]
    Leading,
    /// Centered on the region's own midpoint
    Center,
    /// Flush to the trailing/bottom edge
    #[serde(alias = "bottom")]
    Trailing,
    /// Occupy the region on this axis
    #[default]
    Fill,
}

/// Slots and optional state text of a group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupContent {
    /// Slots, in strip order
    #[serde(default)]
    pub slots: Vec<Slot>,
    /// Optional state line
    #[serde(default)]
    pub state_text: Option<StateText>,
}

/// What kind of content a slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotKind {
    /// Stackable items
    #[default]
    Item,
    /// Fluids
    Fluid,
    /// Power/charge
    Power,
    /// Tools/modules
    Tool,
}

/// One slot of a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Unique id within the schema
    pub id: String,
    /// Content kind
    #[serde(default)]
    pub kind: SlotKind,
    /// Capacity limits
    #[serde(default)]
    pub capacity: Capacity,
    /// Content filter; absent means accept anything
    #[serde(default)]
    pub accepts: Option<Accepts>,
    /// Visual parameters
    pub renders: SlotRender,
}

/// Capacity limits of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    /// Maximum stacks
    pub max_stacks: u32,
    /// Maximum continuous amount (fluid/power)
    #[serde(default)]
    pub max_amount: Option<f32>,
}

impl Default for Capacity {
    fn default() -> Self {
        Self {
            max_stacks: 1,
            max_amount: None,
        }
    }
}

/// Content filter predicates. Union semantics: content matching any
/// listed predicate is accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accepts {
    /// Accepted tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Accepted item ids
    #[serde(default)]
    pub items: Vec<String>,
    /// Accepted fluid types
    #[serde(default)]
    pub fluids: Vec<String>,
}

impl Accepts {
    /// Whether no predicate is listed (accepts anything).
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.tags.is_empty() && self.items.is_empty() && self.fluids.is_empty()
    }
}

/// Visual parameters of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRender {
    /// Slot edge length in dp
    pub size_dp: f32,
    /// Visual treatment
    #[serde(default)]
    pub style: SlotVisual,
    /// Overlay kind
    #[serde(default)]
    pub overlay: OverlayKind,
}

/// When the state line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StateTextMode {
    /// Empty text when content absent, template when present
    #[default]
    Auto,
    /// Always visible; template preferred when content present
    Always,
    /// Suppressed entirely
    Never,
}

/// State line below a slot strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateText {
    /// Visibility mode
    #[serde(default)]
    pub mode: StateTextMode,
    /// Text when the bound content is absent/zero
    pub empty: String,
    /// Template when content is present; `{count}` and `{amount}` are
    /// substituted
    #[serde(default)]
    pub non_empty: Option<String>,
}

/// Visual treatment of the process progress element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProgressStyle {
    /// Horizontal bar
    #[default]
    Bar,
    /// Radial ring
    Ring,
    /// No progress element
    None,
}

/// Which simulation value the progress element binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProgressBinding {
    /// Current craft progress
    #[default]
    RecipeProgress,
    /// Remaining fuel burn
    FuelBurn,
    /// Machine warmup
    MachineWarmup,
}

/// Progress element configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSpec {
    /// Visual treatment
    #[serde(default)]
    pub style: ProgressStyle,
    /// Bound simulation value
    #[serde(default)]
    pub bind_to: ProgressBinding,
    /// Whether the backend should draw a percent label
    #[serde(default)]
    pub show_percent: bool,
}

/// Flow-glyph configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operators {
    /// Emit directional glyphs between the process and IO groups
    #[serde(default)]
    pub show_flow_glyphs: bool,
    /// Palette role for the glyphs
    #[serde(default = "process_role")]
    pub glyph_style_role: StyleRole,
}

impl Default for Operators {
    fn default() -> Self {
        Self {
            show_flow_glyphs: false,
            glyph_style_role: StyleRole::Process,
        }
    }
}

fn process_role() -> StyleRole {
    StyleRole::Process
}

/// The process block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique id within the schema
    pub id: String,
    /// Label above the progress element
    pub label: Header,
    /// Grid placement
    pub anchor: Anchor,
    /// Progress configuration
    #[serde(default)]
    pub progress: ProgressSpec,
    /// Flow-glyph configuration
    #[serde(default)]
    pub operators: Operators,
}

/// Presentation mode of the recipes panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecipesMode {
    /// Selectable cells
    #[default]
    Picker,
    /// Read-only cells
    List,
    /// Panel emits nothing
    Hidden,
}

/// Recipe cell grid geometry. Cell *count* comes from the bound
/// catalog, never from the schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeGrid {
    /// Cell edge length in dp
    pub cell_size_dp: f32,
    /// Cells per row
    pub columns: u32,
    /// Vertical gap between rows
    #[serde(default)]
    pub row_spacing_dp: f32,
    /// Horizontal gap between columns
    #[serde(default)]
    pub col_spacing_dp: f32,
}

/// The recipes panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipesPanel {
    /// Id used for the catalog binding query
    #[serde(default = "default_recipes_id")]
    pub id: String,
    /// Panel title
    pub title: String,
    /// Presentation mode
    #[serde(default)]
    pub mode: RecipesMode,
    /// Grid placement
    pub anchor: Anchor,
    /// Cell geometry
    pub grid: RecipeGrid,
}

fn default_recipes_id() -> String {
    "recipes".to_string()
}

/// Style configuration with hex palette colors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSpec {
    /// Palette hex colors
    #[serde(default)]
    pub palette: PaletteSpec,
    /// Text point sizes
    #[serde(default)]
    pub typography: TypographySpec,
    /// Container chrome defaults
    #[serde(default)]
    pub chrome: ChromeSpec,
}

impl StyleSpec {
    /// Resolve hex strings into a concrete [`Style`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Color`] when a palette entry is not a
    /// valid hex color.
    pub fn resolve(&self) -> Result<Style, ConfigError> {
        let parse = |field: &str, hex: &str| {
            Color::from_hex(hex).map_err(|source| ConfigError::Color {
                field: format!("style.palette.{field}"),
                source,
            })
        };

        Ok(Style {
            palette: Palette {
                fuel: parse("fuel", &self.palette.fuel)?,
                input: parse("input", &self.palette.input)?,
                output: parse("output", &self.palette.output)?,
                process: parse("process", &self.palette.process)?,
                muted_text: parse("mutedText", &self.palette.muted_text)?,
            },
            typography: Typography {
                header: self.typography.header,
                body: self.typography.body,
                muted: self.typography.muted,
            },
            chrome: Chrome {
                panel_opacity: self.chrome.panel_opacity,
                corner_radius: self.chrome.corner_radius,
                backplate_opacity: self.chrome.backplate_opacity,
            },
        })
    }
}

/// Palette hex colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteSpec {
    /// Fuel accent
    pub fuel: String,
    /// Input accent
    pub input: String,
    /// Output accent
    pub output: String,
    /// Process accent
    pub process: String,
    /// De-emphasized text
    pub muted_text: String,
}

impl Default for PaletteSpec {
    fn default() -> Self {
        Self {
            fuel: "#c7802e".to_string(),
            input: "#4a8fd9".to_string(),
            output: "#59a65c".to_string(),
            process: "#9970bf".to_string(),
            muted_text: "#99a1a6".to_string(),
        }
    }
}

/// Text point sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypographySpec {
    /// Header point size
    pub header: f32,
    /// Body point size
    pub body: f32,
    /// Muted point size
    pub muted: f32,
}

impl Default for TypographySpec {
    fn default() -> Self {
        Self {
            header: 16.0,
            body: 13.0,
            muted: 11.0,
        }
    }
}

/// Container chrome defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromeSpec {
    /// Panel background opacity
    pub panel_opacity: f32,
    /// Container corner radius
    pub corner_radius: f32,
    /// Label backplate opacity
    pub backplate_opacity: f32,
}

impl Default for ChromeSpec {
    fn default() -> Self {
        Self {
            panel_opacity: 0.85,
            corner_radius: 6.0,
            backplate_opacity: 0.4,
        }
    }
}

/// Per-group chrome override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromeOverride {
    /// Background hex color
    #[serde(default)]
    pub background: Option<String>,
    /// Border stroke width
    #[serde(default)]
    pub border_width: Option<f32>,
    /// Corner radius
    #[serde(default)]
    pub corner_radius: Option<f32>,
}

impl ChromeOverride {
    /// Parse the background override, if declared.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Color`] when the hex string is invalid;
    /// `owner` names the group in the error.
    pub fn background_color(&self, owner: &str) -> Result<Option<Color>, ConfigError> {
        self.background
            .as_deref()
            .map(|hex| {
                Color::from_hex(hex).map_err(|source| ConfigError::Color {
                    field: format!("groups.{owner}.chrome.background"),
                    source,
                })
            })
            .transpose()
    }
}
