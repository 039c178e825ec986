//! Image processing utilities.
//!
//! # Modules
//!
//! - [`background`]: Chroma-key background removal, replacement and lightening

pub mod background;
