use num_bigint::BigInt;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Negative numbers cannot be converted to words: {0}")]
    Negative(BigInt),
    #[error("Not a valid non-negative integer: {0:?}")]
    InvalidNumber(String),
    #[error("No number given")]
    EmptyInput,
    #[error("A scale table needs at least one scale name")]
    EmptyScaleTable,
    #[error("Error reading config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error parsing config: {0}")]
    Json(#[from] serde_json::Error),
}
