use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Ordered key/value pairs attached to a shape for hover inspection.
///
/// Serialized by the SVG backend as `data-<key>="<value>"` attributes.
pub type Tooltip = IndexMap<String, String>;

/// Builds a tooltip from `(key, value)` pairs, preserving order.
#[must_use]
pub fn tooltip<K, V, I>(pairs: I) -> Tooltip
where
    K: Into<String>,
    V: ToString,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.to_string()))
        .collect()
}

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ChartError::InvalidColor(format!("`{input}` must start with `#`")))?;
        if !digits.is_ascii() {
            return Err(ChartError::InvalidColor(format!(
                "`{input}` contains non-hex characters"
            )));
        }

        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16).map_err(|_| {
                ChartError::InvalidColor(format!("`{input}` contains non-hex characters"))
            })
        };

        match digits.len() {
            3 => {
                let mut rgb = [0u8; 3];
                for (slot, index) in rgb.iter_mut().zip(0..3) {
                    let nibble = channel(&digits[index..index + 1])?;
                    *slot = nibble * 17;
                }
                Ok(Self::from_rgb8(rgb[0], rgb[1], rgb[2]))
            }
            6 | 8 => {
                let red = channel(&digits[0..2])?;
                let green = channel(&digits[2..4])?;
                let blue = channel(&digits[4..6])?;
                let alpha = if digits.len() == 8 {
                    f64::from(channel(&digits[6..8])?) / 255.0
                } else {
                    1.0
                };
                let base = Self::from_rgb8(red, green, blue);
                Ok(Self { alpha, ..base })
            }
            len => Err(ChartError::InvalidColor(format!(
                "`{input}` has {len} hex digits, expected 3, 6 or 8"
            ))),
        }
    }

    /// Converts HSL (`hue` in degrees, `saturation`/`lightness` in 0..=1) to RGB.
    #[must_use]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let hue = hue.rem_euclid(360.0);
        let saturation = saturation.clamp(0.0, 1.0);
        let lightness = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = hue / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = lightness - chroma / 2.0;
        Self::rgb(r + m, g + m, b + m)
    }

    /// CSS representation: `#rrggbb` when opaque, `rgba(...)` otherwise.
    #[must_use]
    pub fn to_css(self) -> String {
        let to_u8 = |channel: f64| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b) = (to_u8(self.red), to_u8(self.green), to_u8(self.blue));
        if self.alpha >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("rgba({r},{g},{b},{})", self.alpha.clamp(0.0, 1.0))
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke dash variants for line-like primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDash {
    #[default]
    Solid,
    Dashed,
    Dotted,
    LongDash,
}

impl LineDash {
    /// Parses a style name. Unknown names fall back to `Solid`.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dashed" => Self::Dashed,
            "dotted" => Self::Dotted,
            "longdash" | "long_dash" => Self::LongDash,
            _ => Self::Solid,
        }
    }

    /// SVG `stroke-dasharray` value, `None` for solid strokes.
    #[must_use]
    pub const fn dash_array(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("6,3"),
            Self::Dotted => Some("2,2"),
            Self::LongDash => Some("10,5"),
        }
    }
}

/// Fill and stroke attributes shared by closed shapes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub fill: Option<Color>,
    pub fill_opacity: Option<f64>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl ShapeStyle {
    #[must_use]
    pub const fn filled(fill: Color) -> Self {
        Self {
            fill: Some(fill),
            fill_opacity: None,
            stroke: None,
            stroke_width: 0.0,
        }
    }

    #[must_use]
    pub const fn stroked(stroke: Color, stroke_width: f64) -> Self {
        Self {
            fill: None,
            fill_opacity: None,
            stroke: Some(stroke),
            stroke_width,
        }
    }

    #[must_use]
    pub const fn with_stroke(mut self, stroke: Color, stroke_width: f64) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub const fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    fn validate(self) -> ChartResult<()> {
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        if let Some(opacity) = self.fill_opacity {
            if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
                return Err(ChartError::InvalidData(
                    "fill opacity must be finite and in [0, 1]".to_owned(),
                ));
            }
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    #[serde(default)]
    pub dash: LineDash,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            dash: LineDash::Solid,
        }
    }

    #[must_use]
    pub const fn with_dash(mut self, dash: LineDash) -> Self {
        self.dash = dash;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Connected stroke through points in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylinePrimitive {
    pub points: Vec<(f64, f64)>,
    pub stroke_width: f64,
    pub color: Color,
    #[serde(default)]
    pub dash: LineDash,
}

impl PolylinePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self
            .points
            .iter()
            .any(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(ChartError::InvalidData(
                "polyline points must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "polyline stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub style: ShapeStyle,
    #[serde(default)]
    pub interactive: bool,
    #[serde(default)]
    pub tooltip: Tooltip,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, style: ShapeStyle) -> Self {
        Self {
            x,
            y,
            width,
            height,
            style,
            interactive: false,
            tooltip: Tooltip::new(),
        }
    }

    /// Marks the shape as a hover target carrying `tooltip`.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: Tooltip) -> Self {
        self.interactive = true;
        self.tooltip = tooltip;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ChartError::InvalidData(
                "rect size must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        self.style.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub style: ShapeStyle,
    #[serde(default)]
    pub interactive: bool,
    #[serde(default)]
    pub tooltip: Tooltip,
}

impl CirclePrimitive {
    #[must_use]
    pub fn new(cx: f64, cy: f64, r: f64, style: ShapeStyle) -> Self {
        Self {
            cx,
            cy,
            r,
            style,
            interactive: false,
            tooltip: Tooltip::new(),
        }
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: Tooltip) -> Self {
        self.interactive = true;
        self.tooltip = tooltip;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.r.is_finite() || self.r < 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and >= 0".to_owned(),
            ));
        }
        self.style.validate()
    }
}

/// One step of an outline in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    /// Elliptical arc with SVG semantics (`sweep = true` is clockwise on screen).
    ArcTo {
        rx: f64,
        ry: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathCommand {
    fn is_finite(self) -> bool {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::ArcTo { rx, ry, x, y, .. } => {
                rx.is_finite() && ry.is_finite() && x.is_finite() && y.is_finite()
            }
            Self::Close => true,
        }
    }
}

/// Wedges and half-circle splits fit inline.
pub type PathCommands = SmallVec<[PathCommand; 6]>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub commands: PathCommands,
    pub style: ShapeStyle,
    #[serde(default)]
    pub interactive: bool,
    #[serde(default)]
    pub tooltip: Tooltip,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(commands: PathCommands, style: ShapeStyle) -> Self {
        Self {
            commands,
            style,
            interactive: false,
            tooltip: Tooltip::new(),
        }
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: Tooltip) -> Self {
        self.interactive = true;
        self.tooltip = tooltip;
        self
    }

    /// Toggles the hover class only; tooltip pairs are kept either way.
    #[must_use]
    pub fn with_hover(mut self, hover: bool) -> Self {
        self.interactive = hover;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.commands.is_empty() {
            return Err(ChartError::InvalidData(
                "path must contain at least one command".to_owned(),
            ));
        }
        if !self.commands.iter().all(|command| command.is_finite()) {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        self.style.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    /// Rotation about `(x, y)` in degrees, clockwise on screen.
    #[serde(default)]
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn rotated(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// One atomic renderable shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Line(LinePrimitive),
    Polyline(PolylinePrimitive),
    Rect(RectPrimitive),
    Circle(CirclePrimitive),
    Path(PathPrimitive),
    Text(TextPrimitive),
}

impl Primitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Polyline(polyline) => polyline.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Path(path) => path.validate(),
            Self::Text(text) => text.validate(),
        }
    }

    /// Tooltip pairs attached to a shape, `None` when there are none.
    #[must_use]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        let tooltip = match self {
            Self::Rect(rect) => &rect.tooltip,
            Self::Circle(circle) => &circle.tooltip,
            Self::Path(path) => &path.tooltip,
            _ => return None,
        };
        (!tooltip.is_empty()).then_some(tooltip)
    }

    /// Whether the shape carries the hover class.
    #[must_use]
    pub fn is_hover_target(&self) -> bool {
        match self {
            Self::Rect(rect) => rect.interactive,
            Self::Circle(circle) => circle.interactive,
            Self::Path(path) => path.interactive,
            _ => false,
        }
    }
}

impl From<LinePrimitive> for Primitive {
    fn from(value: LinePrimitive) -> Self {
        Self::Line(value)
    }
}

impl From<PolylinePrimitive> for Primitive {
    fn from(value: PolylinePrimitive) -> Self {
        Self::Polyline(value)
    }
}

impl From<RectPrimitive> for Primitive {
    fn from(value: RectPrimitive) -> Self {
        Self::Rect(value)
    }
}

impl From<CirclePrimitive> for Primitive {
    fn from(value: CirclePrimitive) -> Self {
        Self::Circle(value)
    }
}

impl From<PathPrimitive> for Primitive {
    fn from(value: PathPrimitive) -> Self {
        Self::Path(value)
    }
}

impl From<TextPrimitive> for Primitive {
    fn from(value: TextPrimitive) -> Self {
        Self::Text(value)
    }
}
