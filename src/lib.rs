//! RGB565 color conversion and the haecceity display palette.

pub mod color;
pub mod errors;
pub mod frame;
pub mod palette;

pub use color::Color;
pub use errors::{CorError, Result};
