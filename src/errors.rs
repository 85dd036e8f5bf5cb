use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreatheError {
    #[error("Invalid bounds: {0}")]
    InvalidBounds(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
