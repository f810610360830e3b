//! Pointer-driven 2D vector drawing surface.
//!
//! The crate models an interactive drawing canvas without owning one: the
//! embedding UI feeds pointer events and toolbar changes into an
//! [`input::EditorState`], which maintains the scene of committed shapes and
//! answers each event with a render request. Rendering is a stateless pass
//! over the scene onto any Cairo context.
//!
//! The demo binary replays gesture scripts (see [`script`]) and snapshots
//! the surface to PNG (see [`snapshot`]).

pub mod config;
pub mod draw;
pub mod input;
pub mod script;
pub mod snapshot;
pub mod util;

pub use config::Config;
pub use draw::{Scene, Shape};
pub use input::{EditorState, RenderRequest, Tool};
pub use util::Point;
