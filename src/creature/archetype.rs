use glyphsea_content::IntensitySource;

use super::motion::MotionStyle;

/// Which content collection an archetype draws from. `Sky` creatures are
/// cosmetic: no record, no prompt, no detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    Chat,
    Delivery,
    Shortform,
    Shopping,
    Novel,
    Sky,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::Chat,
        Domain::Delivery,
        Domain::Shortform,
        Domain::Shopping,
        Domain::Novel,
        Domain::Sky,
    ];

    pub fn collection_file(self) -> Option<&'static str> {
        match self {
            Domain::Chat => Some("chats.json"),
            Domain::Delivery => Some("deliveries.json"),
            Domain::Shortform => Some("shorts.json"),
            Domain::Shopping => Some("shopping.json"),
            Domain::Novel => Some("novels.json"),
            Domain::Sky => None,
        }
    }
}

/// Everything that distinguishes one creature species. One table entry per
/// archetype instead of five parallel implementations.
pub struct ArchetypeSpec {
    pub domain: Domain,
    pub name: &'static str,
    pub image_file: &'static str,
    /// Grid spacing for silhouette sampling in source pixels.
    pub grid: u32,
    pub intensity: IntensitySource,
    /// Vertical habitat band as fractions of world height.
    pub band: (f32, f32),
    /// Ambient size range in world units.
    pub size: (f32, f32),
    pub motion: MotionStyle,
    pub prompt_message: &'static str,
    pub title_label: &'static str,
    pub body_rgb: [u8; 3],
}

pub const ARCHETYPES: [ArchetypeSpec; 6] = [
    ArchetypeSpec {
        domain: Domain::Chat,
        name: "chat jellyfish",
        image_file: "jellyfish.png",
        grid: 12,
        intensity: IntensitySource::None,
        band: (0.35, 0.65),
        size: (6.0, 11.0),
        motion: MotionStyle::Pulse,
        prompt_message: "Looks like a chat jellyfish.\nTake a closer look?",
        title_label: "Chat Jellyfish",
        body_rgb: [150, 190, 255],
    },
    ArchetypeSpec {
        domain: Domain::Delivery,
        name: "delivery seahorse",
        image_file: "seahorse.png",
        grid: 12,
        intensity: IntensitySource::None,
        band: (0.88, 0.97),
        size: (4.0, 8.0),
        motion: MotionStyle::Bob,
        prompt_message: "Looks like a delivery seahorse.\nTake a closer look?",
        title_label: "Delivery Seahorse",
        body_rgb: [240, 190, 120],
    },
    ArchetypeSpec {
        domain: Domain::Shortform,
        name: "shortform whale",
        image_file: "whale.png",
        grid: 14,
        intensity: IntensitySource::None,
        band: (0.55, 0.85),
        size: (14.0, 20.0),
        motion: MotionStyle::Glide,
        prompt_message: "Looks like a shortform whale.\nTake a closer look?",
        title_label: "Shortform Whale",
        body_rgb: [90, 130, 200],
    },
    ArchetypeSpec {
        domain: Domain::Shopping,
        name: "shopping drift-fish",
        image_file: "fish.png",
        grid: 10,
        intensity: IntensitySource::WishlistCount,
        band: (0.4, 0.8),
        size: (4.0, 7.0),
        motion: MotionStyle::Dart,
        prompt_message: "Looks like a shopping drift-fish.\nTake a closer look?",
        title_label: "Shopping Drift-Fish",
        body_rgb: [255, 170, 140],
    },
    ArchetypeSpec {
        domain: Domain::Novel,
        name: "novel mini-fish",
        image_file: "minifish.png",
        grid: 8,
        intensity: IntensitySource::ViewCount,
        band: (0.45, 0.75),
        size: (2.0, 4.0),
        motion: MotionStyle::Dart,
        prompt_message: "Looks like a novel mini-fish.\nTake a closer look?",
        title_label: "Novel Mini-Fish",
        body_rgb: [180, 230, 190],
    },
    ArchetypeSpec {
        domain: Domain::Sky,
        name: "bird",
        image_file: "bird.png",
        grid: 10,
        intensity: IntensitySource::None,
        band: (0.02, 0.18),
        size: (3.0, 5.0),
        motion: MotionStyle::Soar,
        prompt_message: "",
        title_label: "",
        body_rgb: [230, 230, 240],
    },
];

pub fn archetype(domain: Domain) -> &'static ArchetypeSpec {
    ARCHETYPES
        .iter()
        .find(|a| a.domain == domain)
        .expect("every domain has a table entry")
}
