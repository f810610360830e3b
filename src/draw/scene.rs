//! Scene container: committed shapes plus the current selection.

use super::shape::Shape;
use thiserror::Error;

/// Errors from scene index operations.
///
/// An out-of-range index can only come from caller misuse; the editor only
/// ever passes indices it just produced, so it treats this as a
/// programming-error assertion and never surfaces it to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("shape index {index} out of range (scene holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Container for all shapes in the current drawing session.
///
/// Shapes are kept in draw order: insertion order is paint order, so later
/// shapes paint over earlier ones. The scene owns its records exclusively
/// and also tracks which shape, if any, is selected. It lives only for the
/// in-memory session; nothing here is ever persisted.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Shapes in draw order (first = bottom layer, last = top layer)
    shapes: Vec<Shape>,
    /// Index of the selected shape, if any
    selected: Option<usize>,
}

impl Scene {
    /// Creates a new empty scene with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true when no shapes have been committed.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// All shapes in draw order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Appends a shape at the top of the draw order.
    ///
    /// Degenerate (zero-size) shapes are accepted; there is no minimum-size
    /// rejection anywhere in the pipeline.
    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Overwrites the shape at `index` in place.
    pub fn replace(&mut self, index: usize, shape: Shape) -> Result<(), SceneError> {
        match self.shapes.get_mut(index) {
            Some(slot) => {
                *slot = shape;
                Ok(())
            }
            None => Err(SceneError::IndexOutOfRange {
                index,
                len: self.shapes.len(),
            }),
        }
    }

    /// Reads the shape at `index`.
    pub fn get(&self, index: usize) -> Result<&Shape, SceneError> {
        self.shapes.get(index).ok_or(SceneError::IndexOutOfRange {
            index,
            len: self.shapes.len(),
        })
    }

    /// Sets or clears the selection.
    ///
    /// `None` is always accepted. An out-of-range index clears the selection
    /// instead of storing a dangling one.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = match index {
            Some(i) if i < self.shapes.len() => Some(i),
            Some(i) => {
                log::warn!(
                    "ignoring selection of index {i} (scene holds {})",
                    self.shapes.len()
                );
                None
            }
            None => None,
        };
    }

    /// Index of the selected shape, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected shape, if any.
    pub fn selected(&self) -> Option<&Shape> {
        self.selected.and_then(|i| self.shapes.get(i))
    }

    /// Removes all shapes and clears the selection.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    fn line(dx: f64) -> Shape {
        Shape::Line {
            x: 0.0,
            y: 0.0,
            dx,
            dy: 1.0,
            color: RED,
            thick: 2.0,
        }
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut scene = Scene::new();
        scene.append(line(1.0));
        scene.append(line(2.0));

        assert_eq!(scene.len(), 2);
        assert!(matches!(scene.get(0), Ok(Shape::Line { dx, .. }) if *dx == 1.0));
        assert!(matches!(scene.get(1), Ok(Shape::Line { dx, .. }) if *dx == 2.0));
    }

    #[test]
    fn replace_overwrites_in_place() {
        let mut scene = Scene::new();
        scene.append(line(1.0));

        scene.replace(0, line(9.0)).unwrap();
        assert_eq!(scene.len(), 1);
        assert!(matches!(scene.get(0), Ok(Shape::Line { dx, .. }) if *dx == 9.0));
    }

    #[test]
    fn replace_out_of_range_reports_index_and_len() {
        let mut scene = Scene::new();
        scene.append(line(1.0));

        let err = scene.replace(3, line(0.0)).unwrap_err();
        assert_eq!(err, SceneError::IndexOutOfRange { index: 3, len: 1 });
    }

    #[test]
    fn get_out_of_range_fails_on_empty_scene() {
        let scene = Scene::new();
        assert!(scene.get(0).is_err());
    }

    #[test]
    fn selection_tracks_valid_indices_only() {
        let mut scene = Scene::new();
        scene.append(line(1.0));

        scene.select(Some(0));
        assert_eq!(scene.selected_index(), Some(0));
        assert!(scene.selected().is_some());

        scene.select(Some(7));
        assert_eq!(scene.selected_index(), None);

        scene.select(None);
        assert_eq!(scene.selected_index(), None);
    }

    #[test]
    fn clear_drops_shapes_and_selection() {
        let mut scene = Scene::new();
        scene.append(line(1.0));
        scene.select(Some(0));

        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.selected_index(), None);
    }
}
