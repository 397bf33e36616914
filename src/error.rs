use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid date: `{input}`")]
    InvalidDate { input: String },

    #[error("scales cannot be built from an empty dataset")]
    EmptyDataset,

    #[error("chart is not mounted")]
    NotMounted,
}
