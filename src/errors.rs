use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorError {
    #[error("invalid hex color {input:?} (expected RRGGBB or #RRGGBB)")]
    InvalidHex { input: String },
    #[error("image too large for target region")]
    ImageTooLarge,
}

pub type Result<T, E = CorError> = std::result::Result<T, E>;
