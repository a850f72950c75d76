/// External configuration loader.
///
/// Reads an optional `config.toml`; every field falls back to a default so
/// a missing or partial file never blocks startup.
use std::path::Path;

use serde::Deserialize;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub world: WorldConfig,
    pub creatures: CreatureCounts,
    pub popups: PopupTimings,
}

#[derive(Clone, Copy, Debug)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub target_fps: u32,
}

#[derive(Clone, Copy, Debug)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    /// D_in: prompt radius around the avatar. The release radius is 1.5x.
    pub interaction_distance: f32,
    pub default_size_scale: f32,
    pub max_particles: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct CreatureCounts {
    pub jellyfish: (u32, u32),
    pub seahorses: (u32, u32),
    pub whales: (u32, u32),
    pub drift_fish: (u32, u32),
    pub mini_fish: (u32, u32),
    pub birds: (u32, u32),
}

#[derive(Clone, Copy, Debug)]
pub struct PopupTimings {
    pub spawn_interval_ms: f64,
    pub pop_ms: f64,
    pub fade_ms: f64,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    window: TomlWindow,
    #[serde(default)]
    world: TomlWorld,
    #[serde(default)]
    creatures: TomlCreatures,
    #[serde(default)]
    popups: TomlPopups,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
struct TomlWindow {
    width: i32,
    height: i32,
    target_fps: u32,
}

impl Default for TomlWindow {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            target_fps: 60,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
struct TomlWorld {
    width: f32,
    height: f32,
    interaction_distance: f32,
    default_size_scale: f32,
    max_particles: usize,
}

impl Default for TomlWorld {
    fn default() -> Self {
        Self {
            width: 384.0,
            height: 512.0,
            interaction_distance: 25.0,
            default_size_scale: 1.0,
            max_particles: 250,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
struct TomlCreatures {
    jellyfish: [u32; 2],
    seahorses: [u32; 2],
    whales: [u32; 2],
    drift_fish: [u32; 2],
    mini_fish: [u32; 2],
    birds: [u32; 2],
}

impl Default for TomlCreatures {
    fn default() -> Self {
        Self {
            jellyfish: [2, 5],
            seahorses: [2, 5],
            whales: [1, 3],
            drift_fish: [2, 4],
            mini_fish: [3, 6],
            birds: [2, 4],
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
struct TomlPopups {
    spawn_interval_ms: f64,
    pop_ms: f64,
    fade_ms: f64,
}

impl Default for TomlPopups {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 300.0,
            pop_ms: 800.0,
            fade_ms: 4000.0,
        }
    }
}

fn range(pair: [u32; 2]) -> (u32, u32) {
    (pair[0].min(pair[1]), pair[0].max(pair[1]).max(1))
}

impl AppConfig {
    pub fn load(path: &Path) -> Self {
        let toml_cfg = match std::fs::read_to_string(path) {
            Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                Ok(cfg) => cfg,
                Err(e) => {
                    log::warn!("config {} is malformed ({}); using defaults", path.display(), e);
                    TomlConfig::default()
                }
            },
            Err(_) => TomlConfig::default(),
        };
        Self::from_toml(toml_cfg)
    }

    fn from_toml(t: TomlConfig) -> Self {
        Self {
            window: WindowConfig {
                width: t.window.width.max(320),
                height: t.window.height.max(240),
                target_fps: t.window.target_fps.clamp(15, 240),
            },
            world: WorldConfig {
                width: t.world.width.max(64.0),
                height: t.world.height.max(64.0),
                interaction_distance: t.world.interaction_distance.max(1.0),
                default_size_scale: t.world.default_size_scale.clamp(0.5, 2.0),
                max_particles: t.world.max_particles.max(1),
            },
            creatures: CreatureCounts {
                jellyfish: range(t.creatures.jellyfish),
                seahorses: range(t.creatures.seahorses),
                whales: range(t.creatures.whales),
                drift_fish: range(t.creatures.drift_fish),
                mini_fish: range(t.creatures.mini_fish),
                birds: range(t.creatures.birds),
            },
            popups: PopupTimings {
                spawn_interval_ms: t.popups.spawn_interval_ms.max(1.0),
                pop_ms: t.popups.pop_ms.max(1.0),
                fade_ms: t.popups.fade_ms.max(1.0),
            },
        }
    }

    pub fn defaults() -> Self {
        Self::from_toml(TomlConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_missing_file() {
        let cfg = AppConfig::load(Path::new("definitely/not/here.toml"));
        let defaults = AppConfig::defaults();
        assert_eq!(cfg.window.width, defaults.window.width);
        assert_eq!(cfg.world.interaction_distance, 25.0);
        assert_eq!(cfg.world.max_particles, 250);
        assert_eq!(cfg.popups.spawn_interval_ms, 300.0);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let t: TomlConfig = toml::from_str(
            r#"
            [world]
            interaction_distance = 40.0
            "#,
        )
        .unwrap();
        let cfg = AppConfig::from_toml(t);
        assert_eq!(cfg.world.interaction_distance, 40.0);
        assert_eq!(cfg.world.width, 384.0);
        assert_eq!(cfg.creatures.whales, (1, 3));
    }

    #[test]
    fn count_ranges_are_ordered_and_nonzero() {
        let t: TomlConfig = toml::from_str(
            r#"
            [creatures]
            jellyfish = [6, 2]
            whales = [0, 0]
            "#,
        )
        .unwrap();
        let cfg = AppConfig::from_toml(t);
        assert_eq!(cfg.creatures.jellyfish, (2, 6));
        assert_eq!(cfg.creatures.whales, (0, 1));
    }
}
