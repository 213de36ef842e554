use serde::{Deserialize, Serialize};

use crate::core::Canvas;
use crate::error::{ChartError, ChartResult};
use crate::render::Primitive;

pub const RENDER_FRAME_JSON_SCHEMA_V1: u32 = 1;

/// Backend-agnostic scene for one figure draw pass.
///
/// Primitives are kept in paint order: background and decorations first, then
/// every series in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub canvas: Canvas,
    pub primitives: Vec<Primitive>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: RenderFrame,
}

impl RenderFrame {
    #[must_use]
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            primitives: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_primitive(mut self, primitive: impl Into<Primitive>) -> Self {
        self.primitives.push(primitive.into());
        self
    }

    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    pub fn extend<I>(&mut self, primitives: I)
    where
        I: IntoIterator<Item = Primitive>,
    {
        self.primitives.extend(primitives);
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.canvas.validate()?;
        for primitive in &self.primitives {
            primitive.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Number of primitives matching `predicate`, e.g. `|p| matches!(p, Primitive::Rect(_))`.
    #[must_use]
    pub fn count_where(&self, predicate: impl Fn(&Primitive) -> bool) -> usize {
        self.primitives.iter().filter(|p| predicate(p)).count()
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RenderFrameJsonContractV1 {
            schema_version: RENDER_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize frame contract v1: {e}"))
        })
    }

    /// Accepts either a bare frame or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(frame) = serde_json::from_str::<RenderFrame>(input) {
            return Ok(frame);
        }
        let payload: RenderFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse frame json payload: {e}"))
        })?;
        if payload.schema_version != RENDER_FRAME_JSON_SCHEMA_V1 {
            return Err(ChartError::Serialization(format!(
                "unsupported frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}
