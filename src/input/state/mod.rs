mod core;
mod pointer;
mod preview;

pub use core::{
    EditorState, FONT_SIZE_RANGE, Gesture, MIN_STROKE_WIDTH, RenderRequest, SHAPE_SIZE_RANGE,
};
