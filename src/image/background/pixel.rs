use image::{Rgb, RgbaImage};

/// Pixel coordinate within an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Transient view of one pixel: where it is and what RGB color it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub point: Point,
    pub color: Rgb<u8>,
}

/// Enumerate every pixel in row-major order (y outer, x inner).
pub fn pixels(img: &RgbaImage) -> impl Iterator<Item = Pixel> + '_ {
    img.enumerate_pixels().map(|(x, y, rgba)| Pixel {
        point: Point::new(x, y),
        color: Rgb([rgba[0], rgba[1], rgba[2]]),
    })
}

#[inline]
pub(super) fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}
