use rand::Rng;

/// Session-wide ocean palette, picked once at startup.
#[derive(Clone, Copy, Debug)]
pub struct OceanTheme {
    pub name: &'static str,
    pub top: [u8; 3],
    pub mid: [u8; 3],
    pub bottom: [u8; 3],
}

pub const OCEAN_THEMES: [OceanTheme; 10] = [
    OceanTheme {
        name: "Classic Blue",
        top: [90, 220, 230],
        mid: [30, 160, 165],
        bottom: [5, 30, 70],
    },
    OceanTheme {
        name: "Golden Ocean",
        top: [255, 220, 150],
        mid: [200, 160, 100],
        bottom: [80, 50, 30],
    },
    OceanTheme {
        name: "Emerald Sea",
        top: [100, 240, 200],
        mid: [40, 180, 150],
        bottom: [10, 80, 60],
    },
    OceanTheme {
        name: "Sunset Ocean",
        top: [255, 180, 140],
        mid: [200, 120, 100],
        bottom: [60, 30, 40],
    },
    OceanTheme {
        name: "Turquoise Sea",
        top: [120, 250, 255],
        mid: [60, 200, 220],
        bottom: [20, 100, 120],
    },
    OceanTheme {
        name: "Mystic Purple",
        top: [180, 160, 240],
        mid: [120, 100, 180],
        bottom: [50, 40, 80],
    },
    OceanTheme {
        name: "Mint Ocean",
        top: [180, 255, 230],
        mid: [120, 220, 190],
        bottom: [50, 100, 85],
    },
    OceanTheme {
        name: "Coral Reef",
        top: [255, 200, 180],
        mid: [220, 150, 130],
        bottom: [100, 60, 50],
    },
    OceanTheme {
        name: "Deep Blue",
        top: [60, 180, 220],
        mid: [30, 120, 160],
        bottom: [5, 40, 70],
    },
    OceanTheme {
        name: "Teal Ocean",
        top: [100, 220, 200],
        mid: [50, 160, 150],
        bottom: [15, 80, 75],
    },
];

pub fn pick_theme<R: Rng>(rng: &mut R) -> OceanTheme {
    OCEAN_THEMES[rng.gen_range(0..OCEAN_THEMES.len())]
}
