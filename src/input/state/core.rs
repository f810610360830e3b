//! Editor state record and gesture state machine types.

use crate::config::Config;
use crate::draw::{Color, FontDescriptor, Scene, Shape};
use crate::input::tool::Tool;
use crate::util::{self, Point};

/// Valid range for the shape size setter.
pub const SHAPE_SIZE_RANGE: std::ops::RangeInclusive<f64> = 10.0..=200.0;

/// Valid range for text font sizes.
pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<f64> = 8.0..=72.0;

/// Smallest accepted stroke width.
pub const MIN_STROKE_WIDTH: f64 = 1.0;

/// Current pointer gesture.
///
/// Tracks whether the pointer is idle, mid-way through drawing a new shape,
/// or dragging the selected shape. Exactly one of drawing and dragging can be
/// active; the gesture is destroyed at pointer-up and never stored in the
/// scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// No button held - waiting for a pointer-down
    Idle,
    /// Drawing a new shape (button held since `anchor`)
    Drawing {
        /// Tool captured at pointer-down; unaffected by later tool switches
        tool: Tool,
        /// Where the pointer went down
        anchor: Point,
        /// Last seen pointer position
        cursor: Point,
    },
    /// Dragging the selected shape
    Dragging {
        /// Pointer-down position minus the grabbed shape's anchor
        offset: Point,
        /// Last seen pointer position
        last: Point,
    },
}

/// Redraw instruction returned by every event handler.
///
/// Mutation and rendering stay decoupled: handlers never touch a drawing
/// context, they only report what the caller should paint. The caller
/// performs at most one render per handled event.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderRequest {
    /// Nothing visible changed.
    None,
    /// Repaint the committed scene.
    Scene,
    /// Repaint the committed scene with a live preview shape on top.
    ScenePreview(Shape),
}

impl RenderRequest {
    /// Whether the caller should repaint at all.
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, RenderRequest::None)
    }

    /// The preview shape to paint on top, if any.
    pub fn preview(&self) -> Option<&Shape> {
        match self {
            RenderRequest::ScenePreview(shape) => Some(shape),
            _ => None,
        }
    }
}

/// The complete editor state: scene, active tool, style settings, and the
/// in-flight gesture.
///
/// This is the single record behind all pointer and toolbar entry points.
/// Event handlers transition it and return a [`RenderRequest`]; nothing else
/// mutates it, and rendering reads it through accessors only.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Committed shapes and the current selection
    scene: Scene,
    /// Active tool; applies to the next pointer-down
    tool: Tool,
    /// Stroke color for subsequently created shapes
    stroke_color: Color,
    /// Stroke width in pixels for subsequently created shapes
    stroke_width: f64,
    /// Shape size setter value; overwrites the selected shape's extent
    shape_size: f64,
    /// Text content for the next text-tool commit
    text: String,
    /// Font size in points for the next text-tool commit
    font_size: f64,
    /// Font for text shapes
    font: FontDescriptor,
    /// Side count for the next polygon-tool commit
    polygon_sides: u32,
    /// Current pointer gesture
    gesture: Gesture,
}

impl EditorState {
    /// Creates an editor with explicit defaults.
    ///
    /// The initial tool is Rectangle, matching the toolbar's default button.
    pub fn with_defaults(
        stroke_color: Color,
        stroke_width: f64,
        font_size: f64,
        font: FontDescriptor,
        polygon_sides: u32,
        shape_size: f64,
    ) -> Self {
        Self {
            scene: Scene::new(),
            tool: Tool::Rectangle,
            stroke_color,
            stroke_width,
            shape_size,
            text: String::new(),
            font_size,
            font,
            polygon_sides,
            gesture: Gesture::Idle,
        }
    }

    /// Creates an editor from loaded configuration defaults.
    pub fn from_config(config: &Config) -> Self {
        let drawing = &config.drawing;
        Self::with_defaults(
            drawing.default_color.to_color(),
            drawing.default_stroke_width,
            drawing.default_font_size,
            FontDescriptor::new(
                drawing.font_family.clone(),
                drawing.font_weight.clone(),
                drawing.font_style.clone(),
            ),
            drawing.polygon_sides,
            drawing.default_shape_size,
        )
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// The committed scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Stroke color applied to subsequently created shapes.
    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    /// Stroke width applied to subsequently created shapes.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Current value of the shape size setter.
    pub fn shape_size(&self) -> f64 {
        self.shape_size
    }

    /// Font size for the next text commit.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Text content for the next text commit.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Side count for the next polygon commit.
    pub fn polygon_sides(&self) -> u32 {
        self.polygon_sides
    }

    /// The in-flight gesture.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub(super) fn set_gesture(&mut self, gesture: Gesture) {
        self.gesture = gesture;
    }

    pub(super) fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    // ------------------------------------------------------------------
    // Toolbar entry points
    // ------------------------------------------------------------------

    /// Switches the active tool.
    ///
    /// Any in-flight gesture is aborted so a partial shape never survives a
    /// tool switch; the returned request clears a stale preview if one was
    /// on screen.
    pub fn set_tool(&mut self, tool: Tool) -> RenderRequest {
        self.tool = tool;

        if matches!(self.gesture, Gesture::Idle) {
            RenderRequest::None
        } else {
            log::debug!("tool switched to {tool} mid-gesture; aborting gesture");
            self.gesture = Gesture::Idle;
            RenderRequest::Scene
        }
    }

    /// Sets the stroke color for subsequently created shapes.
    ///
    /// Existing shapes keep the color they were committed with.
    pub fn set_stroke_color(&mut self, color: Color) {
        log::debug!("stroke color set to {}", util::color_to_name(&color));
        self.stroke_color = color;
    }

    /// Sets the stroke width for subsequently created shapes.
    ///
    /// Non-positive widths are clamped at the boundary so invalid values
    /// never reach the scene. Existing shapes are unaffected.
    pub fn set_stroke_width(&mut self, width: f64) {
        let clamped = if width.is_finite() {
            width.max(MIN_STROKE_WIDTH)
        } else {
            MIN_STROKE_WIDTH
        };
        if clamped != width {
            log::warn!("stroke width {width} clamped to {clamped}");
        }
        self.stroke_width = clamped;
    }

    /// Sets the shape size and applies it to the selected shape.
    ///
    /// The value is clamped to [10, 200]. When a shape is selected its
    /// extent is overwritten relative to its anchor (rectangles and ellipses
    /// become size x size, circles and polygons get radius = size; lines and
    /// text keep their geometry). Without a selection this only records the
    /// value for later. Bypasses the gesture state machine entirely.
    pub fn set_shape_size(&mut self, size: f64) -> RenderRequest {
        let clamped = if size.is_finite() {
            size.clamp(*SHAPE_SIZE_RANGE.start(), *SHAPE_SIZE_RANGE.end())
        } else {
            *SHAPE_SIZE_RANGE.start()
        };
        if clamped != size {
            log::warn!("shape size {size} clamped to {clamped}");
        }
        self.shape_size = clamped;

        let Some(index) = self.scene.selected_index() else {
            return RenderRequest::None;
        };

        // Index comes from the scene's own selection, so these cannot fail;
        // a failure here is a broken invariant worth surfacing in logs.
        let mut shape = match self.scene.get(index) {
            Ok(shape) => shape.clone(),
            Err(err) => {
                log::error!("selection points at missing shape: {err}");
                return RenderRequest::None;
            }
        };

        if !shape.apply_size(clamped) {
            return RenderRequest::None;
        }

        if let Err(err) = self.scene.replace(index, shape) {
            log::error!("failed to resize selected shape: {err}");
            return RenderRequest::None;
        }

        RenderRequest::Scene
    }

    /// Sets the text content used by the next text-tool commit.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Sets the font size used by the next text-tool commit, clamped to the
    /// valid range.
    pub fn set_font_size(&mut self, size: f64) {
        let clamped = if size.is_finite() {
            size.clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end())
        } else {
            *FONT_SIZE_RANGE.start()
        };
        if clamped != size {
            log::warn!("font size {size} clamped to {clamped}");
        }
        self.font_size = clamped;
    }

    /// Sets the side count used by the next polygon-tool commit.
    ///
    /// Committed polygons keep the side count they were created with.
    pub fn set_polygon_sides(&mut self, sides: u32) {
        let clamped = sides.clamp(3, 32);
        if clamped != sides {
            log::warn!("polygon side count {sides} clamped to {clamped}");
        }
        self.polygon_sides = clamped;
    }

    /// Removes every committed shape and resets the gesture.
    pub fn clear_scene(&mut self) -> RenderRequest {
        self.scene.clear();
        self.gesture = Gesture::Idle;
        RenderRequest::Scene
    }

    pub(super) fn current_style(&self) -> (Color, f64) {
        (self.stroke_color, self.stroke_width)
    }

    pub(super) fn text_settings(&self) -> (String, f64, FontDescriptor) {
        (self.text.clone(), self.font_size, self.font.clone())
    }
}
