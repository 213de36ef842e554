use std::fmt::Write;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, LineDash, LinePrimitive, PathCommand, PathPrimitive, PolylinePrimitive,
    Primitive, RectPrimitive, RenderFrame, Renderer, ShapeStyle, TextHAlign, TextPrimitive,
    Tooltip,
};

/// CSS class carried by hover-capable shapes.
pub const INTERACTIVE_CLASS: &str = "glyphx-point";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgOptions {
    /// Emit `viewBox="0 0 width height"` on the root element.
    pub viewbox: bool,
    /// Document-level `font-family` inherited by every text element.
    pub font_family: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            viewbox: true,
            font_family: "sans-serif".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub elements_written: usize,
    pub interactive_elements: usize,
}

/// Serializes a `RenderFrame` into a standalone SVG document.
///
/// Each primitive becomes exactly one leaf element in frame order. Text and
/// attribute values are XML-escaped here; primitives carry raw strings.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    options: SvgOptions,
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new(options: SvgOptions) -> Self {
        Self {
            options,
            document: String::new(),
            last_stats: SvgRenderStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    #[must_use]
    pub fn options(&self) -> &SvgOptions {
        &self.options
    }

    /// Markup produced by the most recent `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_document(
        &self,
        frame: &RenderFrame,
    ) -> Result<(String, SvgRenderStats), std::fmt::Error> {
        let mut svg = String::with_capacity(256 + frame.len() * 96);
        let mut stats = SvgRenderStats::default();
        let (width, height) = (frame.canvas.width, frame.canvas.height);

        write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}""#
        )?;
        if self.options.viewbox {
            write!(svg, r#" viewBox="0 0 {width} {height}""#)?;
        }
        writeln!(
            svg,
            r#" font-family="{}">"#,
            escape_xml(&self.options.font_family)
        )?;

        for primitive in &frame.primitives {
            match primitive {
                Primitive::Line(line) => write_line(&mut svg, line)?,
                Primitive::Polyline(polyline) => write_polyline(&mut svg, polyline)?,
                Primitive::Rect(rect) => write_rect(&mut svg, rect)?,
                Primitive::Circle(circle) => write_circle(&mut svg, circle)?,
                Primitive::Path(path) => write_path(&mut svg, path)?,
                Primitive::Text(text) => write_text(&mut svg, text)?,
            }
            stats.elements_written += 1;
            if primitive.is_hover_target() {
                stats.interactive_elements += 1;
            }
        }

        svg.push_str("</svg>\n");
        Ok((svg, stats))
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let (document, stats) = self
            .write_document(frame)
            .map_err(|err| ChartError::Serialization(format!("failed to write svg: {err}")))?;
        self.document = document;
        self.last_stats = stats;
        Ok(())
    }
}

/// Compact numeric attribute: integers without decimals, otherwise at most
/// three fractional digits.
#[must_use]
pub fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == rounded.trunc() {
        // avoids "-0"
        format!("{}", rounded.trunc() + 0.0)
    } else {
        let text = format!("{rounded:.3}");
        text.trim_end_matches('0').to_owned()
    }
}

#[must_use]
pub fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// SVG `d` attribute for a command list.
#[must_use]
pub fn path_data(commands: &[PathCommand]) -> String {
    let parts: Vec<String> = commands
        .iter()
        .map(|command| match *command {
            PathCommand::MoveTo { x, y } => format!("M {},{}", format_number(x), format_number(y)),
            PathCommand::LineTo { x, y } => format!("L {},{}", format_number(x), format_number(y)),
            PathCommand::ArcTo {
                rx,
                ry,
                large_arc,
                sweep,
                x,
                y,
            } => format!(
                "A {},{} 0 {},{} {},{}",
                format_number(rx),
                format_number(ry),
                u8::from(large_arc),
                u8::from(sweep),
                format_number(x),
                format_number(y)
            ),
            PathCommand::Close => "Z".to_owned(),
        })
        .collect();
    parts.join(" ")
}

fn write_stroke_dash(svg: &mut String, dash: LineDash) -> std::fmt::Result {
    if let Some(pattern) = dash.dash_array() {
        write!(svg, r#" stroke-dasharray="{pattern}""#)?;
    }
    Ok(())
}

fn write_shape_style(svg: &mut String, style: &ShapeStyle) -> std::fmt::Result {
    match style.fill {
        Some(fill) => write!(svg, r#" fill="{}""#, fill.to_css())?,
        None => svg.push_str(r#" fill="none""#),
    }
    if let Some(opacity) = style.fill_opacity {
        write!(svg, r#" fill-opacity="{}""#, format_number(opacity))?;
    }
    if let Some(stroke) = style.stroke {
        write!(
            svg,
            r#" stroke="{}" stroke-width="{}""#,
            stroke.to_css(),
            format_number(style.stroke_width)
        )?;
    }
    Ok(())
}

fn write_hover(svg: &mut String, interactive: bool, tooltip: &Tooltip) -> std::fmt::Result {
    if interactive {
        write!(svg, r#" class="{INTERACTIVE_CLASS}""#)?;
    }
    for (key, value) in tooltip {
        write!(svg, r#" data-{}="{}""#, escape_xml(key), escape_xml(value))?;
    }
    Ok(())
}

fn write_line(svg: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    write!(
        svg,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
        format_number(line.x1),
        format_number(line.y1),
        format_number(line.x2),
        format_number(line.y2),
        line.color.to_css(),
        format_number(line.stroke_width)
    )?;
    write_stroke_dash(svg, line.dash)?;
    svg.push_str("/>\n");
    Ok(())
}

fn write_polyline(svg: &mut String, polyline: &PolylinePrimitive) -> std::fmt::Result {
    let points: Vec<String> = polyline
        .points
        .iter()
        .map(|(x, y)| format!("{},{}", format_number(*x), format_number(*y)))
        .collect();
    write!(
        svg,
        r#"<polyline fill="none" stroke="{}" stroke-width="{}""#,
        polyline.color.to_css(),
        format_number(polyline.stroke_width)
    )?;
    write_stroke_dash(svg, polyline.dash)?;
    writeln!(svg, r#" points="{}"/>"#, points.join(" "))
}

fn write_rect(svg: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    write!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        format_number(rect.x),
        format_number(rect.y),
        format_number(rect.width),
        format_number(rect.height)
    )?;
    write_shape_style(svg, &rect.style)?;
    write_hover(svg, rect.interactive, &rect.tooltip)?;
    svg.push_str("/>\n");
    Ok(())
}

fn write_circle(svg: &mut String, circle: &CirclePrimitive) -> std::fmt::Result {
    write!(
        svg,
        r#"<circle cx="{}" cy="{}" r="{}""#,
        format_number(circle.cx),
        format_number(circle.cy),
        format_number(circle.r)
    )?;
    write_shape_style(svg, &circle.style)?;
    write_hover(svg, circle.interactive, &circle.tooltip)?;
    svg.push_str("/>\n");
    Ok(())
}

fn write_path(svg: &mut String, path: &PathPrimitive) -> std::fmt::Result {
    write!(svg, r#"<path d="{}""#, path_data(&path.commands))?;
    write_shape_style(svg, &path.style)?;
    write_hover(svg, path.interactive, &path.tooltip)?;
    svg.push_str("/>\n");
    Ok(())
}

fn write_text(svg: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let (x, y) = (format_number(text.x), format_number(text.y));
    write!(
        svg,
        r#"<text x="{x}" y="{y}" text-anchor="{anchor}" font-size="{}" fill="{}""#,
        format_number(text.font_size_px),
        text.color.to_css()
    )?;
    if text.rotation_deg != 0.0 {
        write!(
            svg,
            r#" transform="rotate({} {x} {y})""#,
            format_number(text.rotation_deg)
        )?;
    }
    writeln!(svg, ">{}</text>", escape_xml(&text.text))
}

#[cfg(test)]
mod tests {
    use super::{escape_xml, format_number, path_data};
    use crate::render::PathCommand;

    #[test]
    fn numbers_are_compact() {
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(33.333_333), "33.333");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-12.0004), "-12");
    }

    #[test]
    fn markup_characters_are_escaped() {
        assert_eq!(
            escape_xml(r#"a < b & "c" > 'd'"#),
            "a &lt; b &amp; &quot;c&quot; &gt; &#39;d&#39;"
        );
    }

    #[test]
    fn path_data_encodes_arc_flags() {
        let data = path_data(&[
            PathCommand::MoveTo { x: 10.0, y: 0.0 },
            PathCommand::ArcTo {
                rx: 10.0,
                ry: 10.0,
                large_arc: true,
                sweep: true,
                x: 0.0,
                y: 10.0,
            },
            PathCommand::LineTo { x: 0.0, y: 0.0 },
            PathCommand::Close,
        ]);
        assert_eq!(data, "M 10,0 A 10,10 0 1,1 0,10 L 0,0 Z");
    }
}
