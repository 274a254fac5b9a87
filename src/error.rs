use thiserror::Error;

pub type RadarResult<T> = Result<T, RadarError>;

#[derive(Debug, Error)]
pub enum RadarError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("data series {index} is invalid")]
    InvalidSeries { index: usize },
}
