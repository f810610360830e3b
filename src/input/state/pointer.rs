use crate::draw::{Shape, hit_test};
use crate::input::tool::Tool;
use crate::util::Point;

use super::{EditorState, Gesture, RenderRequest};

impl EditorState {
    /// Processes a pointer-down event.
    ///
    /// # Behavior
    /// - Select tool: hit-tests the scene at the pointer. A hit selects the
    ///   shape and starts a drag with the offset between the pointer and the
    ///   shape's anchor; a miss clears the selection.
    /// - Any drawing tool: starts a drawing gesture anchored at the pointer.
    ///
    /// Positions are canvas-local; the embedding layer subtracts the canvas
    /// origin before calling.
    pub fn on_pointer_down(&mut self, p: Point) -> RenderRequest {
        if !matches!(self.gesture(), Gesture::Idle) {
            // A second pointer-down can only mean a missed pointer-up; drop it.
            log::warn!("pointer down during an active gesture; ignoring");
            return RenderRequest::None;
        }

        if self.tool() == Tool::Select {
            return match hit_test(self.scene().shapes(), p) {
                Some(index) => {
                    // Index was just produced by the hit-test, so the lookup
                    // cannot fail.
                    let anchor = match self.scene().get(index) {
                        Ok(shape) => shape.anchor(),
                        Err(err) => {
                            log::error!("hit-test produced a stale index: {err}");
                            return RenderRequest::None;
                        }
                    };
                    self.scene_mut().select(Some(index));
                    self.set_gesture(Gesture::Dragging {
                        offset: Point::new(p.x - anchor.x, p.y - anchor.y),
                        last: p,
                    });
                    log::debug!("selected shape {index} for dragging");
                    RenderRequest::Scene
                }
                None => {
                    self.scene_mut().select(None);
                    RenderRequest::Scene
                }
            };
        }

        self.set_gesture(Gesture::Drawing {
            tool: self.tool(),
            anchor: p,
            cursor: p,
        });
        RenderRequest::None
    }

    /// Processes a pointer-move event.
    ///
    /// # Behavior
    /// - Drawing: updates the cursor and returns the scene plus a preview of
    ///   the in-progress shape. Nothing is committed.
    /// - Dragging: translates the selected shape's anchor to
    ///   (pointer - grab offset), writing it back through `replace`. Extents
    ///   and style never change during a drag.
    /// - Idle: moves are ignored.
    pub fn on_pointer_move(&mut self, p: Point) -> RenderRequest {
        match self.gesture() {
            Gesture::Idle => RenderRequest::None,
            Gesture::Drawing { tool, anchor, .. } => {
                self.set_gesture(Gesture::Drawing {
                    tool,
                    anchor,
                    cursor: p,
                });
                match self.preview_shape() {
                    Some(shape) => RenderRequest::ScenePreview(shape),
                    None => RenderRequest::None,
                }
            }
            Gesture::Dragging { offset, .. } => {
                self.set_gesture(Gesture::Dragging { offset, last: p });
                self.drag_selected_to(Point::new(p.x - offset.x, p.y - offset.y))
            }
        }
    }

    /// Processes a pointer-up event.
    ///
    /// # Behavior
    /// - Drawing: commits the final shape to the scene and returns to Idle.
    ///   A release without any intervening move still commits (zero-size
    ///   shapes are valid; there is no minimum-size rejection).
    /// - Dragging: returns to Idle. The drag already mutated the scene on
    ///   each move, so there is nothing left to commit.
    pub fn on_pointer_up(&mut self, p: Point) -> RenderRequest {
        match self.gesture() {
            Gesture::Idle => RenderRequest::None,
            Gesture::Drawing { tool, anchor, .. } => {
                self.set_gesture(Gesture::Idle);
                match self.committed_shape(tool, anchor, p) {
                    Some(shape) => {
                        log::debug!(
                            "committing {} at ({:.1}, {:.1})",
                            shape.kind_name(),
                            anchor.x,
                            anchor.y
                        );
                        self.scene_mut().append(shape);
                        RenderRequest::Scene
                    }
                    None => RenderRequest::None,
                }
            }
            Gesture::Dragging { .. } => {
                self.set_gesture(Gesture::Idle);
                RenderRequest::None
            }
        }
    }

    /// Builds the shape a finished drawing gesture commits.
    ///
    /// Rectangle and ellipse extents are committed as absolute values (the
    /// anchor stays at the pointer-down corner regardless of drag
    /// direction); lines keep their signed direction vector; text lands at
    /// the release point with the current text settings.
    fn committed_shape(&self, tool: Tool, anchor: Point, release: Point) -> Option<Shape> {
        let (color, thick) = self.current_style();

        let shape = match tool {
            Tool::Rectangle => Shape::Rect {
                x: anchor.x,
                y: anchor.y,
                w: (release.x - anchor.x).abs(),
                h: (release.y - anchor.y).abs(),
                color,
                thick,
            },
            Tool::Ellipse => Shape::Ellipse {
                x: anchor.x,
                y: anchor.y,
                w: (release.x - anchor.x).abs(),
                h: (release.y - anchor.y).abs(),
                color,
                thick,
            },
            Tool::Circle => Shape::Circle {
                cx: anchor.x,
                cy: anchor.y,
                radius: anchor.distance_to(release),
                color,
                thick,
            },
            Tool::Line => Shape::Line {
                x: anchor.x,
                y: anchor.y,
                dx: release.x - anchor.x,
                dy: release.y - anchor.y,
                color,
                thick,
            },
            Tool::Polygon => Shape::Polygon {
                cx: anchor.x,
                cy: anchor.y,
                radius: anchor.distance_to(release),
                sides: self.polygon_sides(),
                color,
                thick,
            },
            Tool::Text => {
                let (text, size, font) = self.text_settings();
                Shape::Text {
                    x: release.x,
                    y: release.y,
                    text,
                    size,
                    font,
                    color,
                }
            }
            Tool::Select => {
                // Drawing gestures are never started with the select tool.
                log::error!("drawing gesture carried the select tool; dropping commit");
                return None;
            }
        };

        Some(shape)
    }

    /// Moves the selected shape's anchor, writing it back through `replace`.
    fn drag_selected_to(&mut self, anchor: Point) -> RenderRequest {
        let Some(index) = self.scene().selected_index() else {
            log::warn!("drag gesture with no selection; resetting to idle");
            self.set_gesture(Gesture::Idle);
            return RenderRequest::None;
        };

        let mut shape = match self.scene().get(index) {
            Ok(shape) => shape.clone(),
            Err(err) => {
                log::error!("selection points at missing shape: {err}");
                self.set_gesture(Gesture::Idle);
                return RenderRequest::None;
            }
        };

        shape.set_anchor(anchor);
        if let Err(err) = self.scene_mut().replace(index, shape) {
            log::error!("failed to move selected shape: {err}");
            return RenderRequest::None;
        }

        RenderRequest::Scene
    }
}
