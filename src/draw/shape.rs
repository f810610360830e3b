//! Shape records committed to the scene.

use super::color::Color;
use super::font::FontDescriptor;
use crate::util::Point;

/// A drawable shape record.
///
/// Each variant stores the anchor point its geometry is measured from, its
/// extents, and its own stroke style, so a shape renders identically no
/// matter what the editor's current style settings are. The anchor is the
/// top-left corner for rectangles and ellipses, the center for circles and
/// polygons, the start point for lines, and the baseline origin for text.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle outline
    Rect {
        /// Anchor X coordinate (pointer-down corner)
        x: f64,
        /// Anchor Y coordinate (pointer-down corner)
        y: f64,
        /// Width in pixels (may be negative in previews; non-negative once committed)
        w: f64,
        /// Height in pixels (same sign rule as `w`)
        h: f64,
        /// Stroke color
        color: Color,
        /// Stroke width in pixels
        thick: f64,
    },
    /// Ellipse outline with radii `w / 2` and `h / 2`
    Ellipse {
        /// Anchor X coordinate
        x: f64,
        /// Anchor Y coordinate
        y: f64,
        /// Horizontal extent in pixels
        w: f64,
        /// Vertical extent in pixels
        h: f64,
        /// Stroke color
        color: Color,
        /// Stroke width in pixels
        thick: f64,
    },
    /// Circle outline around a center point
    Circle {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Radius in pixels, fixed at commit time from the drag distance
        radius: f64,
        /// Stroke color
        color: Color,
        /// Stroke width in pixels
        thick: f64,
    },
    /// Straight segment from the anchor to anchor + (dx, dy)
    Line {
        /// Start X coordinate
        x: f64,
        /// Start Y coordinate
        y: f64,
        /// Signed X offset to the endpoint (never normalized; direction matters)
        dx: f64,
        /// Signed Y offset to the endpoint
        dy: f64,
        /// Stroke color
        color: Color,
        /// Stroke width in pixels
        thick: f64,
    },
    /// Regular polygon outline around a center point
    Polygon {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Circumradius in pixels
        radius: f64,
        /// Side count (>= 3); vertices are computed by the renderer
        sides: u32,
        /// Stroke color
        color: Color,
        /// Stroke width in pixels
        thick: f64,
    },
    /// Filled text placed at a baseline origin
    Text {
        /// Baseline X coordinate
        x: f64,
        /// Baseline Y coordinate
        y: f64,
        /// Text content (empty strings are committed as-is)
        text: String,
        /// Font size in points
        size: f64,
        /// Font descriptor (family, weight, style)
        font: FontDescriptor,
        /// Fill color
        color: Color,
    },
}

impl Shape {
    /// Returns the anchor point this shape's geometry is measured from.
    pub fn anchor(&self) -> Point {
        match *self {
            Shape::Rect { x, y, .. }
            | Shape::Ellipse { x, y, .. }
            | Shape::Line { x, y, .. }
            | Shape::Text { x, y, .. } => Point::new(x, y),
            Shape::Circle { cx, cy, .. } | Shape::Polygon { cx, cy, .. } => Point::new(cx, cy),
        }
    }

    /// Moves the shape so its anchor lands on `to`.
    ///
    /// Extents, radius, and style are untouched; a drag gesture is a pure
    /// anchor translation.
    pub fn set_anchor(&mut self, to: Point) {
        match self {
            Shape::Rect { x, y, .. }
            | Shape::Ellipse { x, y, .. }
            | Shape::Line { x, y, .. }
            | Shape::Text { x, y, .. } => {
                *x = to.x;
                *y = to.y;
            }
            Shape::Circle { cx, cy, .. } | Shape::Polygon { cx, cy, .. } => {
                *cx = to.x;
                *cy = to.y;
            }
        }
    }

    /// Overwrites the shape's extent with a single size value, measured from
    /// the anchor.
    ///
    /// Rectangles and ellipses become `size` x `size`; circles and polygons
    /// get `radius = size`. Lines keep their signed direction vector and text
    /// has no drag geometry, so both are left untouched.
    ///
    /// # Returns
    /// `true` if the geometry changed, `false` for the no-op kinds.
    pub fn apply_size(&mut self, size: f64) -> bool {
        match self {
            Shape::Rect { w, h, .. } | Shape::Ellipse { w, h, .. } => {
                *w = size;
                *h = size;
                true
            }
            Shape::Circle { radius, .. } | Shape::Polygon { radius, .. } => {
                *radius = size;
                true
            }
            Shape::Line { .. } | Shape::Text { .. } => false,
        }
    }

    /// The shape's stroke color (fill color for text).
    pub fn color(&self) -> Color {
        match *self {
            Shape::Rect { color, .. }
            | Shape::Ellipse { color, .. }
            | Shape::Circle { color, .. }
            | Shape::Line { color, .. }
            | Shape::Polygon { color, .. }
            | Shape::Text { color, .. } => color,
        }
    }

    /// Lower-case kind name for log output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Rect { .. } => "rectangle",
            Shape::Ellipse { .. } => "ellipse",
            Shape::Circle { .. } => "circle",
            Shape::Line { .. } => "line",
            Shape::Polygon { .. } => "polygon",
            Shape::Text { .. } => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    fn sample_rect() -> Shape {
        Shape::Rect {
            x: 10.0,
            y: 20.0,
            w: 40.0,
            h: 30.0,
            color: WHITE,
            thick: 2.0,
        }
    }

    #[test]
    fn anchor_follows_variant_origin() {
        assert_eq!(sample_rect().anchor(), Point::new(10.0, 20.0));

        let circle = Shape::Circle {
            cx: 5.0,
            cy: 6.0,
            radius: 3.0,
            color: RED,
            thick: 1.0,
        };
        assert_eq!(circle.anchor(), Point::new(5.0, 6.0));
    }

    #[test]
    fn set_anchor_translates_without_resizing() {
        let mut rect = sample_rect();
        rect.set_anchor(Point::new(100.0, 200.0));

        match rect {
            Shape::Rect { x, y, w, h, .. } => {
                assert_eq!((x, y), (100.0, 200.0));
                assert_eq!((w, h), (40.0, 30.0));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn apply_size_overwrites_both_extents() {
        let mut rect = sample_rect();
        assert!(rect.apply_size(120.0));

        match rect {
            Shape::Rect { w, h, .. } => {
                assert_eq!(w, 120.0);
                assert_eq!(h, 120.0);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn apply_size_sets_radius_for_round_kinds() {
        let mut polygon = Shape::Polygon {
            cx: 0.0,
            cy: 0.0,
            radius: 12.0,
            sides: 6,
            color: RED,
            thick: 2.0,
        };
        assert!(polygon.apply_size(50.0));
        assert!(matches!(polygon, Shape::Polygon { radius, .. } if radius == 50.0));
    }

    #[test]
    fn apply_size_is_a_no_op_for_lines_and_text() {
        let mut line = Shape::Line {
            x: 0.0,
            y: 0.0,
            dx: 10.0,
            dy: -4.0,
            color: RED,
            thick: 2.0,
        };
        assert!(!line.apply_size(99.0));
        assert!(matches!(line, Shape::Line { dx, dy, .. } if dx == 10.0 && dy == -4.0));

        let mut text = Shape::Text {
            x: 1.0,
            y: 2.0,
            text: "hi".into(),
            size: 24.0,
            font: FontDescriptor::default(),
            color: RED,
        };
        assert!(!text.apply_size(99.0));
    }
}
