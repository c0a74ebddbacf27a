use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid dataset point at index {index}: {reason}")]
    InvalidDataset { index: usize, reason: String },

    /// Proportional geometry is undefined when the values sum to zero.
    #[error("dataset total must be > 0 to compute sectors")]
    ZeroTotal,

    #[error("sector index {index} out of range for {len} sectors")]
    SectorOutOfRange { index: usize, len: usize },
}
