use image::{Rgb, RgbaImage};
use rayon::prelude::*;

use crate::image::background::color::color_distance;
use crate::image::background::pixel::{Point, pixel_index};
use crate::image::background::threshold::Threshold;

/// Images at least this large are classified and transformed in parallel.
pub(super) const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;

/// Per-pixel background classification of one image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundMask {
    width: u32,
    height: u32,
    background: Vec<bool>,
    count: usize,
}

impl BackgroundMask {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of background pixels.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Out-of-bounds points are never background.
    pub fn is_background(&self, point: Point) -> bool {
        if point.x >= self.width || point.y >= self.height {
            return false;
        }
        self.background[pixel_index(self.width, point.x, point.y)]
    }

    /// Background points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.width as usize;
        self.background
            .iter()
            .enumerate()
            .filter(|(_, is_bg)| **is_bg)
            .map(move |(idx, _)| Point::new((idx % width) as u32, (idx / width) as u32))
    }

    /// Whether every background pixel here is also background in `other`.
    ///
    /// Masks of different dimensions are never subsets of each other.
    pub fn is_subset_of(&self, other: &BackgroundMask) -> bool {
        self.width == other.width
            && self.height == other.height
            && self
                .background
                .iter()
                .zip(&other.background)
                .all(|(mine, theirs)| !mine || *theirs)
    }
}

pub(super) struct PixelClassifier {
    background: Rgb<u8>,
    threshold: Threshold,
}

impl PixelClassifier {
    pub(super) fn new(background: Rgb<u8>, threshold: Threshold) -> Self {
        Self {
            background,
            threshold,
        }
    }

    /// Classify a raw RGBA pixel. Alpha does not take part.
    #[inline]
    pub(super) fn is_background(&self, pixel: &[u8]) -> bool {
        let color = Rgb([pixel[0], pixel[1], pixel[2]]);
        self.threshold
            .matches(color_distance(color, self.background))
    }
}

/// Build the background mask for `img`.
pub(super) fn build_background_mask(img: &RgbaImage, classifier: &PixelClassifier) -> BackgroundMask {
    let (width, height) = img.dimensions();
    let len = width as usize * height as usize;
    let raw = img.as_raw();

    let mut background = vec![false; len];

    let count: usize = if len >= PARALLEL_PIXEL_THRESHOLD {
        background
            .par_iter_mut()
            .zip(raw.par_chunks_exact(4))
            .map(|(is_bg, pixel)| {
                *is_bg = classifier.is_background(pixel);
                usize::from(*is_bg)
            })
            .sum()
    } else {
        let mut count = 0;
        for (is_bg, pixel) in background.iter_mut().zip(raw.chunks_exact(4)) {
            *is_bg = classifier.is_background(pixel);
            count += usize::from(*is_bg);
        }
        count
    };

    BackgroundMask {
        width,
        height,
        background,
        count,
    }
}
