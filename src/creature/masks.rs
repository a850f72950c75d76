//! Built-in silhouette masks, used when an archetype's PNG is absent so
//! detail views still work without binary assets. `X` cells are opaque.

use glyphsea_silhouette::PixelSource;

/// Pixels per mask cell when rasterizing.
const CELL: u32 = 12;

pub const JELLYFISH_MASK: &[&str] = &[
    "......XXXXXXX......",
    "....XXXXXXXXXXX....",
    "...XXXXXXXXXXXXX...",
    "..XXXXXXXXXXXXXXX..",
    ".XXXXXXXXXXXXXXXXX.",
    ".XXXXXXXXXXXXXXXXX.",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    ".X.X.X.X.X.X.X.X.X.",
    "..X...X...X...X....",
    ".X..X...X...X...X..",
    "..X...X...X...X....",
    ".X..X...X...X...X..",
    "....X...X...X......",
    ".X....X...X....X...",
    "....X...X...X......",
    "..X...X.....X......",
    "....X.....X........",
];

pub const SEAHORSE_MASK: &[&str] = &[
    ".....................",
    "......XX.............",
    ".....XXXXX...........",
    ".XXXXXXXXX...........",
    "...XX......XXX.......",
    ".........XXXXX.......",
    ".......XXXX..........",
    ".....XXXXX...........",
    "...XXXXXX............",
    "....XXXXXX...........",
    ".......XXXXXX........",
    ".........XXXXXX......",
    ".........XXXXXX......",
    "........XXXXX........",
    ".........XXXX........",
    "...........XXXXX.....",
    "..............XXX....",
    ".............XXXX....",
    "..XX.......XXXX......",
    "....XX......XX.......",
    ".......XXXXX.........",
];

pub const WHALE_MASK: &[&str] = &[
    "..........XXXX..............",
    "......XXXXXXXXXXXX..........",
    "...XXXXXXXXXXXXXXXXXX.......",
    ".XXXXXXXXXXXXXXXXXXXXXX.....",
    "XXXXXXXXXXXXXXXXXXXXXXXXX...",
    "XXXXXXXXXXXXXXXXXXXXXXXXXX..",
    "XXXXXXXXXXXXXXXXXXXXXXXXXXX.",
    ".XXXXXXXXXXXXXXXXXXXXXXXX...",
    "..XXXXXXXXXXXXXXXXXXXX..X...",
    "....XXXXXXXXXXXXXX....XXX...",
    "......XXXXXXXX.......XXXX...",
    "........XXX.........XXXX....",
    "....................XX......",
];

pub const FISH_MASK: &[&str] = &[
    "........XXXX..........",
    ".....XXXXXXXXXX....X..",
    "...XXXXXXXXXXXXXX.XX..",
    "..XXXXXXXXXXXXXXXXXX..",
    ".XXXXXXXXXXXXXXXXXXX..",
    ".XXXXXXXXXXXXXXXXXX...",
    "..XXXXXXXXXXXXXXXXXX..",
    "...XXXXXXXXXXXXXX.XX..",
    ".....XXXXXXXXXX....X..",
    "........XXXX..........",
];

pub const MINIFISH_MASK: &[&str] = &[
    "....XXX........",
    "..XXXXXXXX..X..",
    ".XXXXXXXXXXXX..",
    ".XXXXXXXXXXX...",
    "..XXXXXXXXXXX..",
    "....XXX.....X..",
];

/// Rasterizes a mask into an RGBA buffer, shading rows from the base color
/// toward a darker bottom so the mosaic gradient has something to bite on.
pub fn rasterize_mask(mask: &[&str], base_rgb: [u8; 3]) -> Option<PixelSource> {
    let rows = mask.len() as u32;
    let cols = mask.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
    if rows == 0 || cols == 0 {
        return None;
    }
    let (w, h) = (cols * CELL, rows * CELL);
    let mut rgba = vec![0u8; (w * h * 4) as usize];
    for (ry, row) in mask.iter().enumerate() {
        let shade = 1.0 - 0.35 * (ry as f32 / rows as f32);
        let rgb = [
            (base_rgb[0] as f32 * shade) as u8,
            (base_rgb[1] as f32 * shade) as u8,
            (base_rgb[2] as f32 * shade) as u8,
        ];
        for (rx, cell) in row.chars().enumerate() {
            if cell != 'X' {
                continue;
            }
            for py in 0..CELL {
                for px in 0..CELL {
                    let x = rx as u32 * CELL + px;
                    let y = ry as u32 * CELL + py;
                    let o = ((y * w + x) * 4) as usize;
                    rgba[o] = rgb[0];
                    rgba[o + 1] = rgb[1];
                    rgba[o + 2] = rgb[2];
                    rgba[o + 3] = 255;
                }
            }
        }
    }
    PixelSource::new(w, h, rgba)
}
