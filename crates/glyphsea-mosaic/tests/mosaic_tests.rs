use glyphsea_content::ContentRecord;
use glyphsea_geom::Vec2;
use glyphsea_mosaic::{
    GlyphDraw, MosaicParams, PLACEHOLDER_TEXT, compose_content, layout_mosaic, tile_for_samples,
    tile_text,
};
use glyphsea_silhouette::SilhouetteSample;
use proptest::prelude::*;

fn sample_row(n: usize) -> Vec<SilhouetteSample> {
    (0..n)
        .map(|i| SilhouetteSample {
            grid_x: (i * 8) as u32,
            grid_y: 16,
            pos: Vec2::new(i as f32 * 12.0, 40.0),
            rgb: [180, 140, 90],
            row_t: 0.25,
        })
        .collect()
}

fn params() -> MosaicParams {
    MosaicParams {
        clock: 1.5,
        size_scale: 1.0,
        intensity: None,
    }
}

#[test]
fn title_only_record_tiles_past_target_length() {
    // Record with only title "A", target length 5: tiling must reach five
    // characters without error.
    let rec = ContentRecord {
        title: Some("A".to_string()),
        ..Default::default()
    };
    let content = compose_content(&rec);
    assert_eq!(content, "A");
    let tiled = tile_text(&content, 5);
    assert!(tiled.len() >= 5);
}

#[test]
fn empty_content_falls_back_to_placeholder() {
    let tiled = tile_text("", 4);
    let as_str: String = tiled.iter().collect();
    assert!(as_str.starts_with(PLACEHOLDER_TEXT));

    let rec = ContentRecord::default();
    assert_eq!(compose_content(&rec), PLACEHOLDER_TEXT);
}

#[test]
fn compose_uppercases_and_separates() {
    let rec = ContentRecord {
        store_name: Some("Harbor Noodles".to_string()),
        order_items: Some(vec!["dumplings".to_string()]),
        ..Default::default()
    };
    assert_eq!(compose_content(&rec), "HARBOR NOODLES  •  DUMPLINGS");
}

#[test]
fn every_nonwhitespace_sample_gets_exactly_one_glyph() {
    let samples = sample_row(12);
    let text: Vec<char> = "AB CD".chars().collect();
    let glyphs = layout_mosaic(&samples, &text, &params());

    // Walk the same cursor policy to count expected non-whitespace draws
    let mut cursor = 0usize;
    let mut expected = 0usize;
    for _ in 0..samples.len() {
        let ch = text[cursor % text.len()];
        cursor += 1;
        if ch.is_whitespace() {
            cursor += 1;
        } else {
            expected += 1;
        }
    }
    assert_eq!(glyphs.len(), expected);
    assert!(glyphs.len() <= samples.len());
}

#[test]
fn layout_is_frame_stable() {
    let samples = sample_row(30);
    let text = tile_for_samples("TIDE REPORT", samples.len());
    let p = params();
    let a = layout_mosaic(&samples, &text, &p);
    let b = layout_mosaic(&samples, &text, &p);
    assert_eq!(a, b);
}

#[test]
fn intensity_widens_sway_and_grows_glyphs() {
    let samples = sample_row(6);
    let text: Vec<char> = "GLYPHS".chars().collect();
    let calm = layout_mosaic(&samples, &text, &params());
    let lively = layout_mosaic(
        &samples,
        &text,
        &MosaicParams {
            intensity: Some(1.0),
            ..params()
        },
    );
    assert_eq!(calm.len(), lively.len());
    for (c, l) in calm.iter().zip(&lively) {
        assert!(l.font_px > c.font_px);
    }
    // At least one glyph's offset magnitude grows with intensity
    let offset = |g: &GlyphDraw, s: &SilhouetteSample| (g.pos - s.pos).length();
    let grew = calm
        .iter()
        .zip(&lively)
        .zip(&samples)
        .any(|((c, l), s)| offset(l, s) > offset(c, s) + 1e-4);
    assert!(grew);
}

#[test]
fn size_scale_multiplies_font() {
    let samples = sample_row(4);
    let text: Vec<char> = "WAVE".chars().collect();
    let base = layout_mosaic(&samples, &text, &params());
    let doubled = layout_mosaic(
        &samples,
        &text,
        &MosaicParams {
            size_scale: 2.0,
            ..params()
        },
    );
    for (b, d) in base.iter().zip(&doubled) {
        assert!((d.font_px - b.font_px * 2.0).abs() < 1e-4);
    }
}

#[test]
fn empty_samples_or_text_draw_nothing() {
    let text: Vec<char> = "X".chars().collect();
    assert!(layout_mosaic(&[], &text, &params()).is_empty());
    assert!(layout_mosaic(&sample_row(3), &[], &params()).is_empty());
}

proptest! {
    // tile(s).len() >= N for any content of length >= 1 and any N
    #[test]
    fn tiling_reaches_any_target(content in ".{1,40}", n in 0usize..=4000) {
        let tiled = tile_text(&content, n);
        prop_assert!(tiled.len() >= n);
    }

    // Multi-byte text tiles by characters, never by bytes
    #[test]
    fn tiling_handles_multibyte(n in 1usize..=500) {
        let tiled = tile_text("파도  •  소식", n);
        prop_assert!(tiled.len() >= n);
        let rejoined: String = tiled.iter().collect();
        prop_assert!(rejoined.contains("파도"));
    }

    // Glyph count never exceeds the sample count
    #[test]
    fn glyphs_bounded_by_samples(n in 0usize..=64, text in ".{1,24}") {
        let samples = sample_row(n);
        let tiled = tile_for_samples(&text, samples.len());
        let glyphs = layout_mosaic(&samples, &tiled, &params());
        prop_assert!(glyphs.len() <= samples.len());
    }
}
