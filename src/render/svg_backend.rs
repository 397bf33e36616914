use std::fmt::Write;

use crate::core::PathCommand;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, Color, LayerPrimitives, LinePrimitive, PathPrimitive,
    RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
    pub paths_drawn: usize,
    pub circles_drawn: usize,
}

/// Serializes frames into standalone SVG documents.
///
/// Each layer becomes a `<g>` carrying the layer's CSS class so host pages
/// can style axes, the line, the focus marker and the tooltip.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup produced by the last successful `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_document(&mut self, frame: &RenderFrame) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        let mut stats = SvgRenderStats::default();
        let width = frame.viewport.width;
        let height = frame.viewport.height;

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        for (kind, layer) in frame.layers() {
            if layer.is_empty() {
                continue;
            }
            write_layer(&mut out, kind, layer, &mut stats)?;
        }
        out.push_str("</svg>\n");

        self.last_stats = stats;
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = self
            .write_document(frame)
            .map_err(|err| ChartError::InvalidData(format!("failed to write svg: {err}")))?;
        Ok(())
    }
}

fn write_layer(
    out: &mut String,
    kind: CanvasLayerKind,
    layer: &LayerPrimitives,
    stats: &mut SvgRenderStats,
) -> std::fmt::Result {
    writeln!(out, r#"  <g class="{}">"#, kind.css_class())?;
    for rect in &layer.rects {
        write_rect(out, kind, rect)?;
        stats.rects_drawn += 1;
    }
    for line in &layer.lines {
        write_line(out, line)?;
        stats.lines_drawn += 1;
    }
    for path in &layer.paths {
        write_path(out, path)?;
        stats.paths_drawn += 1;
    }
    for circle in &layer.circles {
        write_circle(out, circle)?;
        stats.circles_drawn += 1;
    }
    for text in &layer.texts {
        write_text(out, text)?;
        stats.texts_drawn += 1;
    }
    out.push_str("  </g>\n");
    Ok(())
}

fn write_rect(out: &mut String, kind: CanvasLayerKind, rect: &RectPrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"    <rect x="{}" y="{}" width="{}" height="{}""#,
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height)
    )?;
    match rect.fill_color {
        Some(fill) => write_paint(out, "fill", fill)?,
        None => out.push_str(r#" fill="none""#),
    }
    if rect.border_width > 0.0 {
        write_paint(out, "stroke", rect.border_color)?;
        write!(out, r#" stroke-width="{}""#, num(rect.border_width))?;
    }
    if rect.corner_radius > 0.0 {
        write!(out, r#" rx="{}""#, num(rect.corner_radius))?;
    }
    if kind == CanvasLayerKind::Overlay {
        out.push_str(r#" pointer-events="all""#);
    }
    out.push_str("/>\n");
    Ok(())
}

fn write_line(out: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}""#,
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
        num(line.stroke_width)
    )?;
    write_paint(out, "stroke", line.color)?;
    out.push_str("/>\n");
    Ok(())
}

fn write_path(out: &mut String, path: &PathPrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"    <path d="{}" fill="none" stroke-width="{}""#,
        path_data(&path.commands),
        num(path.stroke_width)
    )?;
    write_paint(out, "stroke", path.color)?;
    out.push_str("/>\n");
    Ok(())
}

fn write_circle(out: &mut String, circle: &CirclePrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"    <circle cx="{}" cy="{}" r="{}""#,
        num(circle.cx),
        num(circle.cy),
        num(circle.radius)
    )?;
    write_paint(out, "fill", circle.fill_color)?;
    out.push_str("/>\n");
    Ok(())
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    write!(
        out,
        r#"    <text x="{}" y="{}" font-size="{}" text-anchor="{anchor}""#,
        num(text.x),
        num(text.y),
        num(text.font_size_px)
    )?;
    write_paint(out, "fill", text.color)?;
    writeln!(out, ">{}</text>", escape_text(&text.text))
}

fn write_paint(out: &mut String, attribute: &str, color: Color) -> std::fmt::Result {
    write!(out, r#" {attribute}="{}""#, color.to_hex())?;
    if color.alpha < 1.0 {
        write!(out, r#" {attribute}-opacity="{}""#, num(color.alpha))?;
    }
    Ok(())
}

/// SVG path data for a command list.
#[must_use]
pub fn path_data(commands: &[PathCommand]) -> String {
    let mut data = String::new();
    for command in commands {
        if !data.is_empty() {
            data.push(' ');
        }
        match *command {
            PathCommand::MoveTo { x, y } => {
                data.push_str(&format!("M{},{}", num(x), num(y)));
            }
            PathCommand::LineTo { x, y } => {
                data.push_str(&format!("L{},{}", num(x), num(y)));
            }
            PathCommand::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                data.push_str(&format!(
                    "C{},{},{},{},{},{}",
                    num(x1),
                    num(y1),
                    num(x2),
                    num(y2),
                    num(x),
                    num(y)
                ));
            }
        }
    }
    data
}

// Three decimals keep sub-pixel precision without bloating the markup.
fn num(value: f64) -> String {
    let text = format!("{value:.3}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" || trimmed.is_empty() {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
