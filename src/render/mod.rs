mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::{RENDER_FRAME_JSON_SCHEMA_V1, RenderFrame, RenderFrameJsonContractV1};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LineDash, LinePrimitive, PathCommand, PathCommands, PathPrimitive,
    PolylinePrimitive, Primitive, RectPrimitive, ShapeStyle, TextHAlign, TextPrimitive, Tooltip,
    tooltip,
};
pub use svg_backend::{
    INTERACTIVE_CLASS, SvgOptions, SvgRenderStats, SvgRenderer, escape_xml, format_number,
    path_data,
};

use crate::error::ChartResult;

/// Contract implemented by any output backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// serialization stays isolated from scaling and chart geometry.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
