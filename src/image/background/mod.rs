//! Chroma-key background filtering.
//!
//! Every pixel whose RGB distance to a reference color is below a threshold
//! counts as background. Background pixels are then made transparent,
//! replaced with a solid color, or lightened toward white. Foreground pixels
//! are never modified.
//!
//! Distances are truncated to integers before comparison, and the comparison
//! is strict: a pixel exactly `threshold` away is foreground.

mod color;
mod error;
mod mask;
mod pixel;
mod process;
mod threshold;

pub use color::{MAX_DISTANCE, color_distance, parse_hex_color, to_hex_color};
pub use error::{FilterError, FilterResult};
pub use mask::BackgroundMask;
pub use pixel::{Pixel, Point, pixels};
pub use process::{
    Operation, apply, apply_in_place, background_pixels, classify, lighten_background,
    remove_background, replace_background,
};
pub use threshold::Threshold;
