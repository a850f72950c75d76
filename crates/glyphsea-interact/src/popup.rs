//! Popup keyword callouts: short phrases that pop in near the pointer
//! while it hovers an open detail view, then fade out and expire. One
//! manager per creature, active only while its detail view is open.

use std::f32::consts::TAU;

use glyphsea_geom::{Vec2, ease};
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct PopupConfig {
    /// Minimum gap between spawns; the pointer must also have moved.
    pub spawn_interval_ms: f64,
    /// Overshoot scale-in duration; opacity stays full throughout.
    pub pop_ms: f64,
    /// Linear fade-to-zero duration after the pop completes.
    pub fade_ms: f64,
    /// Spawn offset range from the pointer, any angle.
    pub dist_min: f32,
    pub dist_max: f32,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 300.0,
            pop_ms: 800.0,
            fade_ms: 4000.0,
            dist_min: 30.0,
            dist_max: 60.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PopupKeyword {
    pub text: String,
    pub origin: Vec2,
    pub spawn_ms: f64,
}

/// One frame's draw command for a live popup.
#[derive(Clone, Copy, Debug)]
pub struct PopupDraw<'a> {
    pub text: &'a str,
    pub pos: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Default)]
pub struct PopupKeywordManager {
    cfg: PopupConfig,
    items: Vec<PopupKeyword>,
    last_pointer: Option<Vec2>,
    last_spawn_ms: f64,
}

impl PopupKeywordManager {
    pub fn new(cfg: PopupConfig) -> Self {
        Self {
            cfg,
            items: Vec::new(),
            last_pointer: None,
            last_spawn_ms: 0.0,
        }
    }

    #[inline]
    pub fn config(&self) -> PopupConfig {
        self.cfg
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Spawns at most one phrase: only when the pointer moved since the
    /// last call and the spawn interval has elapsed. Phrase and placement
    /// are picked from `rng`.
    pub fn try_spawn<R: Rng>(
        &mut self,
        now_ms: f64,
        pointer: Vec2,
        phrases: &[String],
        rng: &mut R,
    ) {
        if phrases.is_empty() {
            return;
        }
        let moved = self.last_pointer != Some(pointer);
        if !moved {
            return;
        }
        self.last_pointer = Some(pointer);
        if now_ms - self.last_spawn_ms < self.cfg.spawn_interval_ms {
            return;
        }
        self.last_spawn_ms = now_ms;

        let phrase = &phrases[rng.gen_range(0..phrases.len())];
        let angle = rng.gen_range(0.0..TAU);
        let dist = rng.gen_range(self.cfg.dist_min..=self.cfg.dist_max);
        let origin = pointer + Vec2::new(angle.cos(), angle.sin()) * dist;
        self.items.push(PopupKeyword {
            text: phrase.clone(),
            origin,
            spawn_ms: now_ms,
        });
    }

    /// Expires finished items and returns draw commands for the live ones.
    /// Scale overshoots in during the pop phase at full opacity, then
    /// opacity fades linearly to zero over the fade phase.
    pub fn update(&mut self, now_ms: f64) -> Vec<PopupDraw<'_>> {
        let lifetime = self.cfg.pop_ms + self.cfg.fade_ms;
        self.items.retain(|k| now_ms - k.spawn_ms <= lifetime);

        let cfg = self.cfg;
        self.items
            .iter()
            .filter_map(|k| {
                let elapsed = now_ms - k.spawn_ms;
                if elapsed < 0.0 {
                    return None;
                }
                let scale = if elapsed < cfg.pop_ms {
                    ease::out_back((elapsed / cfg.pop_ms) as f32)
                } else {
                    1.0
                };
                let opacity = if elapsed <= cfg.pop_ms {
                    1.0
                } else {
                    (1.0 - (elapsed - cfg.pop_ms) / cfg.fade_ms) as f32
                };
                let wobble = Vec2::new(
                    ((elapsed * 0.01) as f32).sin() * 2.0,
                    ((elapsed * 0.015) as f32).cos() * 2.0,
                );
                Some(PopupDraw {
                    text: k.text.as_str(),
                    pos: k.origin + wobble,
                    scale,
                    opacity,
                })
            })
            .collect()
    }

    /// Pointer left the interactive region: drop everything and re-arm the
    /// spawn timer.
    pub fn reset(&mut self) {
        self.items.clear();
        self.last_pointer = None;
        self.last_spawn_ms = 0.0;
    }
}
