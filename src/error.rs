use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid canvas: width={width}, height={height}, padding={padding}")]
    InvalidCanvas {
        width: u32,
        height: u32,
        padding: u32,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("shape mismatch in `{field}`: expected {expected}, got {actual}")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("`{field}` must not be empty")]
    EmptyInput { field: &'static str },

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
