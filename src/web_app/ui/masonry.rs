// ui/masonry.rs - Column packing for the gallery grid
//
// Items go one by one into the currently shortest column. Heights are
// relative to a column width of 1.0: images that declare their size use
// the real aspect ratio, the rest get an estimate seeded from the image
// source so server render and hydration agree on the layout.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const MIN_ESTIMATED_RATIO: f64 = 0.75;
pub const MAX_ESTIMATED_RATIO: f64 = 1.5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub category: String,
}

impl GalleryImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            width: None,
            height: None,
            category: category.into(),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Height / width
    pub fn aspect_ratio(&self) -> f64 {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => f64::from(h) / f64::from(w),
            _ => estimated_ratio(&self.src),
        }
    }
}

/// Column count for a viewport width in CSS pixels
pub fn columns_for_width(width: f64) -> usize {
    match width {
        w if w < 640.0 => 1,
        w if w < 1024.0 => 2,
        w if w < 1280.0 => 3,
        _ => 4,
    }
}

fn estimated_ratio(src: &str) -> f64 {
    // FNV-1a, stable across targets
    let seed = src
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |hash, b| (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3));
    StdRng::seed_from_u64(seed).gen_range(MIN_ESTIMATED_RATIO..MAX_ESTIMATED_RATIO)
}

/// Item indices per column plus each column's accumulated height
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MasonryLayout {
    pub columns: Vec<Vec<usize>>,
    pub heights: Vec<f64>,
}

impl MasonryLayout {
    pub fn build(heights: impl IntoIterator<Item = f64>, column_count: usize) -> Self {
        let column_count = column_count.max(1);
        let mut layout = Self {
            columns: vec![Vec::new(); column_count],
            heights: vec![0.0; column_count],
        };
        for (index, height) in heights.into_iter().enumerate() {
            let shortest = layout.shortest_column();
            layout.columns[shortest].push(index);
            layout.heights[shortest] += height;
        }
        layout
    }

    pub fn for_images(images: &[GalleryImage], column_count: usize) -> Self {
        Self::build(images.iter().map(GalleryImage::aspect_ratio), column_count)
    }

    /// Leftmost column on ties
    fn shortest_column(&self) -> usize {
        self.heights
            .iter()
            .enumerate()
            .fold((0, f64::INFINITY), |best, (i, &h)| if h < best.1 { (i, h) } else { best })
            .0
    }
}
