use thiserror::Error;

#[derive(Error, Debug)]
pub enum HitZoneError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image Error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Parse Error: {0}")]
    Parse(String),

    #[error("Degenerate Range: {0}")]
    DegenerateRange(String),

    #[error("Invalid Config: {0}")]
    InvalidConfig(String),

    #[error("Coordinate Out Of Range: {0}")]
    OutOfRange(String),
}

pub type HzResult<T> = Result<T, HitZoneError>;
