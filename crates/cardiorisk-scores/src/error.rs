use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("unknown calculator: {0}")]
    UnknownCalculator(String),
}
