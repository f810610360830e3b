//! Hit testing: point → shape index lookup.
//!
//! Walks the scene's shapes in reverse draw order (last painted = topmost)
//! so that overlapping shapes resolve to the one the user actually sees
//! under the pointer.

use super::shape::Shape;
use crate::util::{self, Point};

/// Approximate advance width per character, as a fraction of the font size.
/// Used only for the text hit box; real glyph extents are not consulted here.
const TEXT_ADVANCE_FACTOR: f64 = 0.6;

/// Finds the topmost shape at position `p`.
///
/// Returns the shape's index in draw order, or `None` if the point hits the
/// background. Repeated calls against an unchanged slice always return the
/// same result.
pub fn hit_test(shapes: &[Shape], p: Point) -> Option<usize> {
    shapes
        .iter()
        .enumerate()
        .rev()
        .find(|(_, shape)| hit_shape(shape, p))
        .map(|(index, _)| index)
}

/// Per-kind containment test for a single shape.
pub fn hit_shape(shape: &Shape, p: Point) -> bool {
    match shape {
        Shape::Rect { x, y, w, h, .. } | Shape::Ellipse { x, y, w, h, .. } => {
            point_in_box(p, *x, *y, *w, *h)
        }
        Shape::Circle {
            cx, cy, radius, ..
        } => p.distance_to(Point::new(*cx, *cy)) <= *radius,
        Shape::Polygon {
            cx, cy, radius, ..
        } => {
            // Circumradius test, same rule as circle
            p.distance_to(Point::new(*cx, *cy)) <= *radius
        }
        Shape::Line {
            x, y, dx, dy, thick, ..
        } => {
            // Distance to the infinite line, not the segment: hits register
            // along the line's extension too (generous margin by design of
            // the original tool).
            util::line_distance(p.x, p.y, *x, *y, x + dx, y + dy) <= *thick
        }
        Shape::Text { x, y, text, size, .. } => {
            // Rough advance-width box hanging from the baseline; no text
            // shaping at hit time.
            let width = TEXT_ADVANCE_FACTOR * size * text.chars().count() as f64;
            point_in_box(p, *x, *y - size, width, *size)
        }
    }
}

/// Point-in-rectangle test against the normalized box spanned by an anchor
/// and signed extents.
fn point_in_box(p: Point, x: f64, y: f64, w: f64, h: f64) -> bool {
    let (min_x, max_x) = (x.min(x + w), x.max(x + w));
    let (min_y, max_y) = (y.min(y + h), y.max(y + h));
    p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::FontDescriptor;
    use crate::draw::color::{BLUE, RED};

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Shape {
        Shape::Rect {
            x,
            y,
            w,
            h,
            color: RED,
            thick: 2.0,
        }
    }

    #[test]
    fn rect_hits_inside_misses_outside() {
        let shapes = [rect(10.0, 10.0, 40.0, 30.0)];
        assert_eq!(hit_test(&shapes, Point::new(30.0, 25.0)), Some(0));
        assert_eq!(hit_test(&shapes, Point::new(51.0, 25.0)), None);
        // Boundary counts as a hit
        assert_eq!(hit_test(&shapes, Point::new(50.0, 40.0)), Some(0));
    }

    #[test]
    fn negative_extents_are_normalized() {
        // Preview-style rectangle dragged up-left
        let shapes = [rect(50.0, 40.0, -40.0, -30.0)];
        assert_eq!(hit_test(&shapes, Point::new(30.0, 25.0)), Some(0));
    }

    #[test]
    fn topmost_shape_wins_for_overlaps() {
        let shapes = [rect(0.0, 0.0, 100.0, 100.0), rect(20.0, 20.0, 40.0, 40.0)];
        // Inside both: the later (topmost) shape is returned
        assert_eq!(hit_test(&shapes, Point::new(30.0, 30.0)), Some(1));
        // Inside only the bottom one
        assert_eq!(hit_test(&shapes, Point::new(90.0, 90.0)), Some(0));
    }

    #[test]
    fn circle_uses_radius_distance() {
        let shapes = [Shape::Circle {
            cx: 100.0,
            cy: 100.0,
            radius: 10.0,
            color: BLUE,
            thick: 2.0,
        }];
        assert_eq!(hit_test(&shapes, Point::new(105.0, 100.0)), Some(0));
        assert_eq!(hit_test(&shapes, Point::new(100.0, 110.0)), Some(0));
        assert_eq!(hit_test(&shapes, Point::new(111.0, 100.0)), None);
    }

    #[test]
    fn polygon_uses_circumradius_distance() {
        let shapes = [Shape::Polygon {
            cx: 0.0,
            cy: 0.0,
            radius: 20.0,
            sides: 6,
            color: BLUE,
            thick: 2.0,
        }];
        assert_eq!(hit_test(&shapes, Point::new(10.0, 0.0)), Some(0));
        assert_eq!(hit_test(&shapes, Point::new(25.0, 0.0)), None);
    }

    #[test]
    fn line_hits_within_stroke_width_of_infinite_line() {
        let shapes = [Shape::Line {
            x: 0.0,
            y: 0.0,
            dx: 100.0,
            dy: 0.0,
            color: BLUE,
            thick: 4.0,
        }];
        assert_eq!(hit_test(&shapes, Point::new(50.0, 3.0)), Some(0));
        assert_eq!(hit_test(&shapes, Point::new(50.0, 5.0)), None);
        // Past the endpoint but on the line's extension still hits
        assert_eq!(hit_test(&shapes, Point::new(300.0, 0.0)), Some(0));
    }

    #[test]
    fn degenerate_line_hits_near_its_anchor() {
        let shapes = [Shape::Line {
            x: 10.0,
            y: 10.0,
            dx: 0.0,
            dy: 0.0,
            color: BLUE,
            thick: 4.0,
        }];
        assert_eq!(hit_test(&shapes, Point::new(12.0, 10.0)), Some(0));
        assert_eq!(hit_test(&shapes, Point::new(20.0, 10.0)), None);
    }

    #[test]
    fn text_box_hangs_from_the_baseline() {
        let shapes = [Shape::Text {
            x: 100.0,
            y: 100.0,
            text: "hello".into(),
            size: 20.0,
            font: FontDescriptor::default(),
            color: RED,
        }];
        // Above the baseline, within the advance width
        assert_eq!(hit_test(&shapes, Point::new(110.0, 90.0)), Some(0));
        // Below the baseline
        assert_eq!(hit_test(&shapes, Point::new(110.0, 105.0)), None);
    }

    #[test]
    fn hit_test_is_idempotent() {
        let shapes = [rect(0.0, 0.0, 50.0, 50.0), rect(25.0, 25.0, 50.0, 50.0)];
        let p = Point::new(30.0, 30.0);
        let first = hit_test(&shapes, p);
        for _ in 0..10 {
            assert_eq!(hit_test(&shapes, p), first);
        }
    }

    #[test]
    fn empty_scene_never_hits() {
        assert_eq!(hit_test(&[], Point::new(0.0, 0.0)), None);
    }
}
