//! chromakey - chroma-key background filtering for in-memory images.
//!
//! Pixels close enough to a background color are made transparent, replaced
//! with a solid color, or lightened toward white. Decoding and encoding image
//! files is left to the caller; the filter works on [`image::RgbaImage`].
//!
//! # Example
//!
//! ```ignore
//! use chromakey::{Rgb, remove_background};
//!
//! let keyed = remove_background(&img, Rgb([0, 255, 0]), 40)?;
//! ```

pub mod config;
pub mod image;
pub mod logger;

pub use ::image::{Rgb, Rgba, RgbaImage};

pub use config::{ConfigError, FilterConfig, OperationKind};
pub use self::image::background::{
    BackgroundMask, FilterError, FilterResult, MAX_DISTANCE, Operation, Pixel, Point, Threshold,
    apply, apply_in_place, background_pixels, classify, color_distance, lighten_background,
    parse_hex_color, pixels, remove_background, replace_background, to_hex_color,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_pixel_removed_green_kept() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 255, 0, 255]));

        let out = remove_background(&img, Rgb([255, 0, 0]), 10).unwrap();

        assert_eq!(out.dimensions(), (2, 1));
        assert_eq!(out.get_pixel(0, 0)[3], 0);
        assert_eq!(out.get_pixel(1, 0), &Rgba([0, 255, 0, 255]));
        assert_eq!(img.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn config_and_direct_calls_agree() {
        let img = RgbaImage::from_fn(8, 8, |x, y| Rgba([(x * 30) as u8, (y * 30) as u8, 90, 255]));
        let config = FilterConfig::from_toml_str(
            "background = \"#3c3c5a\"\nthreshold = 70\noperation = \"lighten\"",
        )
        .unwrap();

        let via_config = config.apply(&img).unwrap();
        let direct = lighten_background(&img, Rgb([0x3c, 0x3c, 0x5a]), 70).unwrap();
        assert_eq!(via_config, direct);
        assert_ne!(direct, img);
    }
}
