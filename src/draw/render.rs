//! Cairo-based rendering functions for shapes.
//!
//! Rendering is stateless: one call paints the whole scene (plus an optional
//! live preview) onto whatever Cairo context the caller supplies. There is no
//! dirty-rectangle tracking; every pass is a full clear and redraw, which is
//! fine at the shape counts a drawing session produces.

use super::color::Color;
use super::scene::Scene;
use super::shape::Shape;
use crate::util;

/// Renders a full frame: clear, optional background fill, committed shapes
/// in draw order, then the preview shape on top.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `scene` - Committed shapes and selection
/// * `preview` - Transient in-progress shape, painted last if present
/// * `background` - Opaque background fill, or `None` to stay transparent
pub fn render_scene(
    ctx: &cairo::Context,
    scene: &Scene,
    preview: Option<&Shape>,
    background: Option<Color>,
) {
    clear_surface(ctx);

    if let Some(bg) = background {
        fill_background(ctx, bg);
    }

    render_shapes(ctx, scene.shapes());

    if let Some(shape) = preview {
        render_shape(ctx, shape);
    }
}

/// Clears the entire surface to fully transparent.
pub fn clear_surface(ctx: &cairo::Context) {
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    ctx.set_operator(cairo::Operator::Over);
}

/// Fills the entire surface with a solid background color.
///
/// Should be called after clearing and before rendering shapes.
pub fn fill_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint();
}

/// Renders all shapes in a collection to a Cairo context.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer).
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape]) {
    for shape in shapes {
        render_shape(ctx, shape);
    }
}

/// Renders a single shape to a Cairo context.
///
/// Dispatches to the appropriate internal rendering function based on shape
/// kind.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    match shape {
        Shape::Rect {
            x,
            y,
            w,
            h,
            color,
            thick,
        } => render_rect(ctx, *x, *y, *w, *h, *color, *thick),
        Shape::Ellipse {
            x,
            y,
            w,
            h,
            color,
            thick,
        } => render_ellipse(ctx, *x, *y, *w, *h, *color, *thick),
        Shape::Circle {
            cx,
            cy,
            radius,
            color,
            thick,
        } => render_circle(ctx, *cx, *cy, *radius, *color, *thick),
        Shape::Line {
            x,
            y,
            dx,
            dy,
            color,
            thick,
        } => render_line(ctx, *x, *y, x + dx, y + dy, *color, *thick),
        Shape::Polygon {
            cx,
            cy,
            radius,
            sides,
            color,
            thick,
        } => render_polygon(ctx, *cx, *cy, *radius, *sides, *color, *thick),
        Shape::Text {
            x,
            y,
            text,
            size,
            font,
            color,
        } => render_text(ctx, *x, *y, text, *size, font, *color),
    }
}

/// Render a rectangle outline.
fn render_rect(ctx: &cairo::Context, x: f64, y: f64, w: f64, h: f64, color: Color, thick: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_join(cairo::LineJoin::Miter);

    // Normalize so preview rectangles dragged up/left stroke correctly
    // (committed shapes already carry non-negative extents)
    let (norm_x, norm_w) = if w >= 0.0 { (x, w) } else { (x + w, -w) };
    let (norm_y, norm_h) = if h >= 0.0 { (y, h) } else { (y + h, -h) };

    ctx.rectangle(norm_x, norm_y, norm_w, norm_h);
    let _ = ctx.stroke();
}

/// Render an ellipse centered on the anchor using Cairo's arc with scaling.
fn render_ellipse(ctx: &cairo::Context, x: f64, y: f64, w: f64, h: f64, color: Color, thick: f64) {
    let rx = (w / 2.0).abs();
    let ry = (h / 2.0).abs();
    if rx == 0.0 || ry == 0.0 {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);

    ctx.save().ok();
    ctx.translate(x, y);
    ctx.scale(rx, ry);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore().ok();

    let _ = ctx.stroke();
}

/// Render a circle outline around its center.
fn render_circle(ctx: &cairo::Context, cx: f64, cy: f64, radius: f64, color: Color, thick: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.arc(cx, cy, radius, 0.0, 2.0 * std::f64::consts::PI);
    let _ = ctx.stroke();
}

/// Render a straight segment.
fn render_line(ctx: &cairo::Context, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, thick: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    let _ = ctx.stroke();
}

/// Render a closed regular polygon outline.
fn render_polygon(
    ctx: &cairo::Context,
    cx: f64,
    cy: f64,
    radius: f64,
    sides: u32,
    color: Color,
    thick: f64,
) {
    if radius <= 0.0 {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_join(cairo::LineJoin::Miter);

    let vertices = util::polygon_vertices(cx, cy, radius, sides);
    let (x0, y0) = vertices[0];
    ctx.move_to(x0, y0);
    for &(x, y) in &vertices[1..] {
        ctx.line_to(x, y);
    }
    ctx.close_path();
    let _ = ctx.stroke();
}

/// Renders filled text at a baseline position using Pango.
///
/// The position (x, y) is the text baseline origin for the first line; Pango
/// handles newline characters, so multi-line content lays out with the
/// font's natural line spacing.
pub fn render_text(
    ctx: &cairo::Context,
    x: f64,
    y: f64,
    text: &str,
    size: f64,
    font: &super::FontDescriptor,
    color: Color,
) {
    if text.is_empty() {
        return;
    }

    // Save context state to prevent settings from leaking to other drawing
    // operations
    ctx.save().ok();

    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font.to_pango_string(size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    // Pango measures from the layout's top-left; shift up so (x, y) is the
    // first line's baseline
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    ctx.move_to(x, y - baseline);

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}
