//! Gesture scripts for the demo binary.
//!
//! A script is a line-oriented description of a drawing session: toolbar
//! commands (tool, style, size) interleaved with pointer events. The demo
//! binary replays one through an [`EditorState`] and snapshots the result,
//! standing in for the interactive canvas the library is normally embedded
//! behind.
//!
//! ```text
//! # draw a rectangle, then drag it
//! tool rectangle
//! color #2060ff
//! width 3
//! down 10 10
//! move 50 40
//! up 50 40
//! tool select
//! down 20 20
//! move 120 90
//! up 120 90
//! ```

use crate::draw::Color;
use crate::input::{EditorState, RenderRequest, Tool};
use crate::util::{self, Point};
use thiserror::Error;

/// A single parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `tool <name>` - switch the active tool
    Tool(Tool),
    /// `color <name|#rrggbb>` - stroke color for new shapes
    Color(Color),
    /// `width <pixels>` - stroke width for new shapes
    StrokeWidth(f64),
    /// `size <value>` - shape size setter (resizes the selection)
    ShapeSize(f64),
    /// `text <content>` - text for the next text commit
    Text(String),
    /// `fontsize <points>` - font size for the next text commit
    FontSize(f64),
    /// `sides <count>` - polygon side count
    PolygonSides(u32),
    /// `down <x> <y>` - pointer-down at a canvas position
    Down(Point),
    /// `move <x> <y>` - pointer-move
    Move(Point),
    /// `up <x> <y>` - pointer-up
    Up(Point),
    /// `clear` - remove every committed shape
    Clear,
}

/// Errors produced while parsing a gesture script.
///
/// Every variant carries the 1-based line number so a bad script points the
/// user straight at the offending line. Style values are validated here, at
/// the input boundary, so malformed input never reaches the scene.
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{name}'")]
    UnknownCommand { line: usize, name: String },

    #[error("line {line}: '{command}' expects {expected}")]
    BadArguments {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: unknown tool '{name}'")]
    UnknownTool { line: usize, name: String },

    #[error("line {line}: invalid color '{value}'")]
    InvalidColor { line: usize, value: String },
}

/// Parses a whole script.
///
/// Blank lines and `#` comments are skipped. Returns the commands in file
/// order, or the first error encountered.
pub fn parse(input: &str) -> Result<Vec<Command>, ScriptError> {
    input
        .lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                None
            } else {
                Some(parse_line(i + 1, line))
            }
        })
        .collect()
}

/// Replays a script against an editor.
///
/// Commands apply in order; the per-event render requests are dropped since
/// a replay only cares about the final state (rendering once at the end is
/// equivalent - redraws are idempotent).
pub fn run(input: &str, editor: &mut EditorState) -> Result<(), ScriptError> {
    let commands = parse(input)?;
    log::debug!("replaying {} script commands", commands.len());

    for command in &commands {
        command.apply(editor);
    }

    Ok(())
}

fn parse_line(line: usize, content: &str) -> Result<Command, ScriptError> {
    let (name, rest) = match content.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (content, ""),
    };

    match name.to_lowercase().as_str() {
        "tool" => {
            let tool = rest.parse::<Tool>().map_err(|_| ScriptError::UnknownTool {
                line,
                name: rest.to_string(),
            })?;
            Ok(Command::Tool(tool))
        }
        "color" => Color::from_hex(rest)
            .or_else(|| util::name_to_color(rest))
            .map(Command::Color)
            .ok_or_else(|| ScriptError::InvalidColor {
                line,
                value: rest.to_string(),
            }),
        "width" => Ok(Command::StrokeWidth(parse_number(line, rest)?)),
        "size" => Ok(Command::ShapeSize(parse_number(line, rest)?)),
        "fontsize" => Ok(Command::FontSize(parse_number(line, rest)?)),
        "sides" => {
            let sides = rest
                .parse::<u32>()
                .map_err(|_| ScriptError::InvalidNumber {
                    line,
                    value: rest.to_string(),
                })?;
            Ok(Command::PolygonSides(sides))
        }
        "text" => Ok(Command::Text(rest.to_string())),
        "down" => Ok(Command::Down(parse_point(line, "down", rest)?)),
        "move" => Ok(Command::Move(parse_point(line, "move", rest)?)),
        "up" => Ok(Command::Up(parse_point(line, "up", rest)?)),
        "clear" => Ok(Command::Clear),
        _ => Err(ScriptError::UnknownCommand {
            line,
            name: name.to_string(),
        }),
    }
}

fn parse_number(line: usize, value: &str) -> Result<f64, ScriptError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ScriptError::InvalidNumber {
            line,
            value: value.to_string(),
        })
}

fn parse_point(line: usize, command: &'static str, rest: &str) -> Result<Point, ScriptError> {
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => Ok(Point::new(
            parse_number(line, x)?,
            parse_number(line, y)?,
        )),
        _ => Err(ScriptError::BadArguments {
            line,
            command,
            expected: "two coordinates",
        }),
    }
}

impl Command {
    /// Applies this command to the editor, returning its render request.
    pub fn apply(&self, editor: &mut EditorState) -> RenderRequest {
        match self {
            Command::Tool(tool) => editor.set_tool(*tool),
            Command::Color(color) => {
                editor.set_stroke_color(*color);
                RenderRequest::None
            }
            Command::StrokeWidth(width) => {
                editor.set_stroke_width(*width);
                RenderRequest::None
            }
            Command::ShapeSize(size) => editor.set_shape_size(*size),
            Command::Text(text) => {
                editor.set_text(text.clone());
                RenderRequest::None
            }
            Command::FontSize(size) => {
                editor.set_font_size(*size);
                RenderRequest::None
            }
            Command::PolygonSides(sides) => {
                editor.set_polygon_sides(*sides);
                RenderRequest::None
            }
            Command::Down(p) => editor.on_pointer_down(*p),
            Command::Move(p) => editor.on_pointer_move(*p),
            Command::Up(p) => editor.on_pointer_up(*p),
            Command::Clear => editor.clear_scene(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};
    use crate::draw::{FontDescriptor, Shape};

    fn test_editor() -> EditorState {
        EditorState::with_defaults(RED, 2.0, 24.0, FontDescriptor::default(), 6, 50.0)
    }

    #[test]
    fn parses_commands_and_skips_comments() {
        let commands = parse(
            "# a comment\n\
             tool circle\n\
             \n\
             color blue\n\
             down 1 2\n",
        )
        .unwrap();

        assert_eq!(
            commands,
            vec![
                Command::Tool(Tool::Circle),
                Command::Color(BLUE),
                Command::Down(Point::new(1.0, 2.0)),
            ]
        );
    }

    #[test]
    fn text_keeps_the_rest_of_the_line() {
        let commands = parse("text hello drawing world\n").unwrap();
        assert_eq!(commands, vec![Command::Text("hello drawing world".into())]);
    }

    #[test]
    fn reports_unknown_command_with_line_number() {
        let err = parse("tool circle\nsquiggle 1 2\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownCommand {
                line: 2,
                name: "squiggle".into()
            }
        );
    }

    #[test]
    fn reports_bad_coordinates() {
        let err = parse("down 10\n").unwrap_err();
        assert!(matches!(err, ScriptError::BadArguments { line: 1, .. }));

        let err = parse("move 10 abc\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError::InvalidNumber {
                line: 1,
                value: "abc".into()
            }
        );
    }

    #[test]
    fn rejects_non_finite_numbers() {
        let err = parse("width inf\n").unwrap_err();
        assert!(matches!(err, ScriptError::InvalidNumber { .. }));
    }

    #[test]
    fn reports_unknown_tools_and_colors() {
        assert_eq!(
            parse("tool eraser\n").unwrap_err(),
            ScriptError::UnknownTool {
                line: 1,
                name: "eraser".into()
            }
        );
        assert_eq!(
            parse("color #zzz\n").unwrap_err(),
            ScriptError::InvalidColor {
                line: 1,
                value: "#zzz".into()
            }
        );
    }

    #[test]
    fn run_replays_a_drawing_session() {
        let mut editor = test_editor();

        run(
            "tool rectangle\n\
             color blue\n\
             down 10 10\n\
             move 50 40\n\
             up 50 40\n\
             tool select\n\
             down 20 20\n\
             move 120 90\n\
             up 120 90\n",
            &mut editor,
        )
        .unwrap();

        assert_eq!(editor.scene().len(), 1);
        match editor.scene().get(0).unwrap() {
            Shape::Rect { x, y, w, h, color, .. } => {
                assert_eq!((*x, *y), (110.0, 80.0));
                assert_eq!((*w, *h), (40.0, 30.0));
                assert_eq!(*color, BLUE);
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
    }

    #[test]
    fn clear_command_empties_the_scene() {
        let mut editor = test_editor();
        run("down 0 0\nup 5 5\nclear\n", &mut editor).unwrap();
        assert!(editor.scene().is_empty());
    }
}
