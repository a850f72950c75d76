//! Silhouette sampling: turns the opaque region of an RGBA raster into a
//! reading-ordered list of (position, color) samples on a fixed grid.
//!
//! Renderer-free: callers mirror their GPU image into a [`PixelSource`]
//! once, and the sampled lists are memoized per (image, grid, box) in a
//! [`SilhouetteCache`].
#![forbid(unsafe_code)]

use std::sync::Arc;

use glyphsea_geom::{Rect, Vec2};
use hashbrown::HashMap;

/// Alpha below this is treated as background.
pub const ALPHA_THRESHOLD: u8 = 50;

/// CPU-side copy of an RGBA raster. Row-major, 4 bytes per pixel.
#[derive(Clone, Debug, Default)]
pub struct PixelSource {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl PixelSource {
    /// Returns `None` when the buffer does not describe `width * height`
    /// RGBA pixels (callers treat that as "image not ready").
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        if rgba.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            rgba,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) * 4) as usize
    }

    #[inline]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.rgba[self.offset(x, y) + 3]
    }

    #[inline]
    pub fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let o = self.offset(x, y);
        [self.rgba[o], self.rgba[o + 1], self.rgba[o + 2]]
    }
}

/// One opaque grid cell: source pixel coordinates, box-space position,
/// original pixel color, and the normalized source-row position used by the
/// mosaic for gradients and sizing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SilhouetteSample {
    pub grid_x: u32,
    pub grid_y: u32,
    pub pos: Vec2,
    pub rgb: [u8; 3],
    pub row_t: f32,
}

/// Grid spacing plus the target box samples are mapped into. The box sits
/// at the origin; callers translate when drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleParams {
    pub grid: u32,
    pub box_w: f32,
    pub box_h: f32,
}

impl SampleParams {
    pub fn new(grid: u32, box_w: f32, box_h: f32) -> Self {
        Self { grid, box_w, box_h }
    }

    fn target_box(&self) -> Rect {
        Rect::from_size(Vec2::ZERO, self.box_w, self.box_h)
    }
}

/// Walks `src` in `grid`-sized cells, keeps cells whose center pixel is
/// opaque, and returns them in left-to-right/top-to-bottom reading order.
///
/// Rows within one grid unit (box-space) of each other merge into the same
/// reading row. An unready source or degenerate params yield an empty list.
pub fn sample_silhouette(src: &PixelSource, params: &SampleParams) -> Vec<SilhouetteSample> {
    if params.grid == 0 || params.box_w <= 0.0 || params.box_h <= 0.0 {
        return Vec::new();
    }
    let (iw, ih) = (src.width, src.height);
    if iw == 0 || ih == 0 {
        return Vec::new();
    }

    let scale_x = params.box_w / iw as f32;
    let scale_y = params.box_h / ih as f32;
    let target = params.target_box();
    let half = params.grid / 2;

    let mut out = Vec::new();
    let mut gy = 0u32;
    while gy < ih {
        let py = (gy + half).min(ih - 1);
        let mut gx = 0u32;
        while gx < iw {
            let px = (gx + half).min(iw - 1);
            if src.alpha_at(px, py) >= ALPHA_THRESHOLD {
                let pos = Vec2::new(px as f32 * scale_x, py as f32 * scale_y);
                if target.contains(pos) {
                    out.push(SilhouetteSample {
                        grid_x: px,
                        grid_y: py,
                        pos,
                        rgb: src.rgb_at(px, py),
                        row_t: py as f32 / ih as f32,
                    });
                }
            }
            gx += params.grid;
        }
        gy += params.grid;
    }

    // Reading order: rows bucketed into one-grid-unit bands so near-equal
    // rows merge, then columns ascending. Banding keeps the comparator a
    // total order, so identical inputs always sort identically.
    let band = reading_band(params.grid);
    out.sort_by(|a, b| {
        band(a.pos.y)
            .cmp(&band(b.pos.y))
            .then(a.pos.x.total_cmp(&b.pos.x))
            .then(a.pos.y.total_cmp(&b.pos.y))
    });
    out
}

/// Row band for reading order: box-space Y bucketed by one grid unit.
pub fn reading_band(grid: u32) -> impl Fn(f32) -> i64 {
    let tol = grid.max(1) as f32;
    move |y: f32| (y / tol).floor() as i64
}

/// Cache key: image identity plus the exact sampling parameters. Box
/// dimensions are keyed by bit pattern so distinct floats never collide.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct SilhouetteKey {
    image: String,
    grid: u32,
    box_w_bits: u32,
    box_h_bits: u32,
}

/// Memoizes sampled lists for the lifetime of an (image, grid, box)
/// combination. Entries are shared `Arc`s and never mutated; only
/// [`SilhouetteCache::reset`] drops them.
#[derive(Default)]
pub struct SilhouetteCache {
    entries: HashMap<SilhouetteKey, Arc<Vec<SilhouetteSample>>>,
}

impl SilhouetteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_sample(
        &mut self,
        image_id: &str,
        src: &PixelSource,
        params: &SampleParams,
    ) -> Arc<Vec<SilhouetteSample>> {
        let key = SilhouetteKey {
            image: image_id.to_string(),
            grid: params.grid,
            box_w_bits: params.box_w.to_bits(),
            box_h_bits: params.box_h.to_bits(),
        };
        if let Some(hit) = self.entries.get(&key) {
            return Arc::clone(hit);
        }
        let samples = Arc::new(sample_silhouette(src, params));
        self.entries.insert(key, Arc::clone(&samples));
        samples
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
