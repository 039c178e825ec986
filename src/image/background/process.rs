use std::fmt;

use image::{Rgb, RgbaImage};
use rayon::prelude::*;

use crate::image::background::color::{lighten_channel, to_hex_color};
use crate::image::background::error::{FilterError, FilterResult};
use crate::image::background::mask::{
    BackgroundMask, PARALLEL_PIXEL_THRESHOLD, PixelClassifier, build_background_mask,
};
use crate::image::background::pixel::{Pixel, pixels};
use crate::image::background::threshold::Threshold;

/// What happens to background pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Set alpha to 0. RGB is left as it was.
    Remove,
    /// Overwrite with an opaque color.
    Replace(Rgb<u8>),
    /// Blend each RGB channel 25% toward white. Alpha is kept.
    Lighten,
}

impl Operation {
    #[inline]
    fn transform(self, pixel: &mut [u8]) {
        match self {
            Self::Remove => pixel[3] = 0,
            Self::Replace(color) => {
                pixel[..3].copy_from_slice(&color.0);
                pixel[3] = u8::MAX;
            }
            Self::Lighten => {
                for channel in &mut pixel[..3] {
                    *channel = lighten_channel(*channel);
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remove => f.write_str("remove"),
            Self::Replace(color) => write!(f, "replace({})", to_hex_color(*color)),
            Self::Lighten => f.write_str("lighten"),
        }
    }
}

/// Make background pixels fully transparent.
pub fn remove_background<T>(
    img: &RgbaImage,
    background: Rgb<u8>,
    threshold: T,
) -> FilterResult<RgbaImage>
where
    T: TryInto<Threshold>,
    FilterError: From<T::Error>,
{
    apply(img, background, threshold, Operation::Remove)
}

/// Overwrite background pixels with an opaque `replacement`.
pub fn replace_background<T>(
    img: &RgbaImage,
    background: Rgb<u8>,
    replacement: Rgb<u8>,
    threshold: T,
) -> FilterResult<RgbaImage>
where
    T: TryInto<Threshold>,
    FilterError: From<T::Error>,
{
    apply(img, background, threshold, Operation::Replace(replacement))
}

/// Lighten background pixels 25% toward white.
///
/// Not idempotent: every call lightens further.
pub fn lighten_background<T>(
    img: &RgbaImage,
    background: Rgb<u8>,
    threshold: T,
) -> FilterResult<RgbaImage>
where
    T: TryInto<Threshold>,
    FilterError: From<T::Error>,
{
    apply(img, background, threshold, Operation::Lighten)
}

/// Run `operation` on a copy of `img`. The source is never touched.
pub fn apply<T>(
    img: &RgbaImage,
    background: Rgb<u8>,
    threshold: T,
    operation: Operation,
) -> FilterResult<RgbaImage>
where
    T: TryInto<Threshold>,
    FilterError: From<T::Error>,
{
    let threshold = threshold.try_into()?;
    let mut output = img.clone();
    process_image(&mut output, background, threshold, operation);
    Ok(output)
}

/// Destructive variant of [`apply`]: mutates `img` directly.
///
/// Returns the number of background pixels that were transformed. On error
/// `img` is left untouched.
pub fn apply_in_place<T>(
    img: &mut RgbaImage,
    background: Rgb<u8>,
    threshold: T,
    operation: Operation,
) -> FilterResult<usize>
where
    T: TryInto<Threshold>,
    FilterError: From<T::Error>,
{
    let threshold = threshold.try_into()?;
    Ok(process_image(img, background, threshold, operation))
}

/// Classify every pixel of `img` without transforming anything.
pub fn classify<T>(img: &RgbaImage, background: Rgb<u8>, threshold: T) -> FilterResult<BackgroundMask>
where
    T: TryInto<Threshold>,
    FilterError: From<T::Error>,
{
    let classifier = PixelClassifier::new(background, threshold.try_into()?);
    Ok(build_background_mask(img, &classifier))
}

/// Collect the background pixels of `img` in row-major order.
pub fn background_pixels<T>(
    img: &RgbaImage,
    background: Rgb<u8>,
    threshold: T,
) -> FilterResult<Vec<Pixel>>
where
    T: TryInto<Threshold>,
    FilterError: From<T::Error>,
{
    let mask = classify(img, background, threshold)?;
    Ok(pixels(img)
        .filter(|pixel| mask.is_background(pixel.point))
        .collect())
}

/// Classify and transform in a single pass.
fn process_image(
    output: &mut RgbaImage,
    background: Rgb<u8>,
    threshold: Threshold,
    operation: Operation,
) -> usize {
    let (width, height) = output.dimensions();
    let len = width as usize * height as usize;
    if len == 0 {
        return 0;
    }

    let classifier = PixelClassifier::new(background, threshold);
    let step = |pixel: &mut [u8]| -> usize {
        if classifier.is_background(pixel) {
            operation.transform(pixel);
            1
        } else {
            0
        }
    };

    let raw: &mut [u8] = output;
    let count: usize = if len >= PARALLEL_PIXEL_THRESHOLD {
        raw.par_chunks_exact_mut(4).map(step).sum()
    } else {
        raw.chunks_exact_mut(4).map(step).sum()
    };

    crate::debug!(
        "filter";
        "{operation} {width}x{height} threshold={threshold}: {count} background pixels"
    );

    count
}
