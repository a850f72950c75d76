//! Glyph mosaic layout: one animated text character per silhouette sample.
//!
//! Pure computation. The app's raylib layer draws the emitted
//! [`GlyphDraw`] commands; keeping layout renderer-free makes the density
//! and stability invariants directly testable.
#![forbid(unsafe_code)]

use glyphsea_content::{ContentRecord, FIELD_SEPARATOR};
use glyphsea_geom::{Vec2, lerp_rgb};
use glyphsea_silhouette::SilhouetteSample;

/// Shown when a record has no extractable text; still tiled like real
/// content so no sample is left without a glyph.
pub const PLACEHOLDER_TEXT: &str = "DRIFTING SIGNAL";

/// Joiner inserted between tiling repetitions.
pub const TILE_JOINER: &str = "   •   ";

/// Vertical gradient the sample color is blended toward: bright shallow
/// water at the top of the silhouette, dark deep water at the bottom.
pub const GRADIENT_SHALLOW: [u8; 3] = [150, 220, 255];
pub const GRADIENT_DEEP: [u8; 3] = [20, 80, 150];

/// Outline drawn beneath every glyph for legibility on a dimmed backdrop.
pub const GLYPH_OUTLINE: [u8; 4] = [20, 40, 80, 200];

/// Per-frame animation inputs. `clock` is seconds since the view opened;
/// `size_scale` is the externally controlled global scale; `intensity` in
/// [0, 1] widens the sway and enlarges glyphs when present.
#[derive(Clone, Copy, Debug)]
pub struct MosaicParams {
    pub clock: f32,
    pub size_scale: f32,
    pub intensity: Option<f32>,
}

/// One glyph to draw: position is box-relative (same space as the samples).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphDraw {
    pub ch: char,
    pub pos: Vec2,
    pub rotation: f32,
    pub font_px: f32,
    pub fill: [u8; 3],
    pub outline: [u8; 4],
}

/// Joins a record's populated fields with the separator glyph, upper-cased.
/// Empty records fall back to [`PLACEHOLDER_TEXT`].
pub fn compose_content(record: &ContentRecord) -> String {
    let fields = record.text_fields();
    if fields.is_empty() {
        return PLACEHOLDER_TEXT.to_string();
    }
    fields.join(FIELD_SEPARATOR).to_uppercase()
}

/// Tiles `content` (joiner + content, repeated) until the character count
/// reaches at least `min_chars`. Char-counted, so multi-byte text never
/// splits. Blank content tiles the placeholder instead.
pub fn tile_text(content: &str, min_chars: usize) -> Vec<char> {
    let base: Vec<char> = if content.trim().is_empty() {
        PLACEHOLDER_TEXT.chars().collect()
    } else {
        content.chars().collect()
    };
    let joiner: Vec<char> = TILE_JOINER.chars().collect();
    let mut out = base.clone();
    while out.len() < min_chars {
        out.extend_from_slice(&joiner);
        out.extend_from_slice(&base);
    }
    out
}

/// Tile sized for a sample list: consuming one character per sample plus
/// one extra per whitespace skip never wraps more than once.
pub fn tile_for_samples(content: &str, sample_count: usize) -> Vec<char> {
    tile_text(content, sample_count.saturating_mul(2).max(1))
}

/// Lays out one glyph per non-whitespace sample. A whitespace character
/// advances the cursor an extra step and draws nothing, absorbing word
/// boundaries without leaving visual gaps.
///
/// Deterministic: identical samples, text, and params produce identical
/// output, so rendered density is frame-to-frame stable.
pub fn layout_mosaic(
    samples: &[SilhouetteSample],
    text: &[char],
    params: &MosaicParams,
) -> Vec<GlyphDraw> {
    if text.is_empty() {
        return Vec::new();
    }
    let intensity = params.intensity.unwrap_or(0.0).clamp(0.0, 1.0);
    let sway = 1.0 + intensity * 0.5;
    let grow = 1.0 + intensity * 0.2;
    let t = params.clock * 2.4;

    let mut out = Vec::with_capacity(samples.len());
    let mut cursor = 0usize;
    for s in samples {
        let ch = text[cursor % text.len()];
        cursor += 1;
        if ch.is_whitespace() {
            cursor += 1;
            continue;
        }

        // Neighbors share phase through their source row/column, so the
        // sway reads as one coherent body instead of per-glyph jitter.
        let wave_x = (t + s.grid_y as f32 * 0.02).sin() * sway;
        let wave_y = (t * 0.8 + s.grid_x as f32 * 0.015).cos() * (0.8 * sway);
        let rotation = (wave_x + wave_y) * 0.03;

        let depth_tint = lerp_rgb(GRADIENT_SHALLOW, GRADIENT_DEEP, s.row_t * 0.3);
        let fill = lerp_rgb(s.rgb, depth_tint, 0.2);

        let font_px = (10.0 + s.row_t * 4.0) * grow * params.size_scale;

        out.push(GlyphDraw {
            ch,
            pos: s.pos + Vec2::new(wave_x, wave_y),
            rotation,
            font_px,
            fill,
            outline: GLYPH_OUTLINE,
        });
    }
    out
}
