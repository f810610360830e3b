use crate::draw::Shape;
use crate::input::tool::Tool;

use super::{EditorState, Gesture};

impl EditorState {
    /// Returns the transient shape for the active drawing gesture.
    ///
    /// The preview spans from the gesture anchor to the last seen cursor
    /// position. Unlike a committed shape, rectangle and ellipse extents
    /// keep their sign here so the preview tracks the drag direction; the
    /// renderer normalizes when stroking. Returns `None` while idle or
    /// dragging.
    pub fn preview_shape(&self) -> Option<Shape> {
        let Gesture::Drawing {
            tool,
            anchor,
            cursor,
        } = self.gesture()
        else {
            return None;
        };

        let (color, thick) = self.current_style();

        let shape = match tool {
            Tool::Rectangle => Shape::Rect {
                x: anchor.x,
                y: anchor.y,
                w: cursor.x - anchor.x,
                h: cursor.y - anchor.y,
                color,
                thick,
            },
            Tool::Ellipse => Shape::Ellipse {
                x: anchor.x,
                y: anchor.y,
                w: cursor.x - anchor.x,
                h: cursor.y - anchor.y,
                color,
                thick,
            },
            Tool::Circle => Shape::Circle {
                cx: anchor.x,
                cy: anchor.y,
                radius: anchor.distance_to(cursor),
                color,
                thick,
            },
            Tool::Line => Shape::Line {
                x: anchor.x,
                y: anchor.y,
                dx: cursor.x - anchor.x,
                dy: cursor.y - anchor.y,
                color,
                thick,
            },
            Tool::Polygon => Shape::Polygon {
                cx: anchor.x,
                cy: anchor.y,
                radius: anchor.distance_to(cursor),
                sides: self.polygon_sides(),
                color,
                thick,
            },
            Tool::Text => {
                // Text follows the cursor so the user sees where it will land
                let (text, size, font) = self.text_settings();
                Shape::Text {
                    x: cursor.x,
                    y: cursor.y,
                    text,
                    size,
                    font,
                    color,
                }
            }
            Tool::Select => return None,
        };

        Some(shape)
    }
}
