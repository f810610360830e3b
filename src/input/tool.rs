//! Drawing tool selection.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The active tool.
///
/// The tool determines what a pointer drag does: every tool except
/// [`Tool::Select`] creates a shape of its kind, while Select picks up and
/// drags existing shapes. The embedding toolbar switches tools through
/// [`crate::input::EditorState::set_tool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Rectangle outline - from corner to corner
    Rectangle,
    /// Ellipse outline - anchored at the pointer-down corner
    Ellipse,
    /// Circle outline - from center outward
    Circle,
    /// Straight line - between start and end points
    Line,
    /// Regular polygon outline - from center outward
    Polygon,
    /// Text placement - committed at the release point
    Text,
    /// Selection and dragging of existing shapes
    Select,
}

/// Error for tool names outside the enumerated set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tool '{0}'")]
pub struct ParseToolError(pub String);

impl Tool {
    /// The canonical lower-case name of the tool.
    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Rectangle => "rectangle",
            Tool::Ellipse => "ellipse",
            Tool::Circle => "circle",
            Tool::Line => "line",
            Tool::Polygon => "polygon",
            Tool::Text => "text",
            Tool::Select => "select",
        }
    }

    /// Returns true for tools that create shapes when dragged.
    pub fn is_drawing(self) -> bool {
        self != Tool::Select
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rectangle" => Ok(Tool::Rectangle),
            "ellipse" => Ok(Tool::Ellipse),
            "circle" => Ok(Tool::Circle),
            "line" => Ok(Tool::Line),
            "polygon" => Ok(Tool::Polygon),
            "text" => Ok(Tool::Text),
            "select" => Ok(Tool::Select),
            other => Err(ParseToolError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_tool_name() {
        for name in [
            "rectangle",
            "ellipse",
            "circle",
            "line",
            "polygon",
            "text",
            "select",
        ] {
            let tool: Tool = name.parse().unwrap();
            assert_eq!(tool.as_str(), name);
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("Rectangle".parse::<Tool>().unwrap(), Tool::Rectangle);
        assert_eq!("SELECT".parse::<Tool>().unwrap(), Tool::Select);
    }

    #[test]
    fn rejects_names_outside_the_set() {
        let err = "eraser".parse::<Tool>().unwrap_err();
        assert_eq!(err, ParseToolError("eraser".to_string()));
    }

    #[test]
    fn only_select_is_not_a_drawing_tool() {
        assert!(Tool::Rectangle.is_drawing());
        assert!(Tool::Text.is_drawing());
        assert!(!Tool::Select.is_drawing());
    }
}
