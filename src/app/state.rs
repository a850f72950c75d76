use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use glyphsea_geom::Vec2;
use glyphsea_interact::InteractionController;
use glyphsea_silhouette::{PixelSource, SilhouetteCache};
use glyphsea_ui::{IRect, ModalTheme, PromptLayout};
use hashbrown::HashMap;
use rand::rngs::StdRng;
use raylib::prelude::Texture2D;

use crate::config::AppConfig;
use crate::content_store::ContentLibrary;
use crate::creature::{Creature, Domain};
use crate::event::EventQueue;
use crate::particles::ParticleField;
use crate::swimmer::Swimmer;
use crate::theme::OceanTheme;

/// Session-wide mutable flags. The app owns one instance; the controller
/// owns modal transitions, each creature owns its own dismissal.
pub struct SessionState {
    pub tick: u64,
    /// Seconds since startup, from the render clock.
    pub clock: f32,
    pub now_ms: f64,
    pub pointer_world: Vec2,
    pub pointer_screen: Vec2,
    size_scale: f32,
    pub show_debug: bool,
    pub collected_cue: Option<CueFlash>,
}

impl SessionState {
    pub fn new(default_size_scale: f32) -> Self {
        Self {
            tick: 0,
            clock: 0.0,
            now_ms: 0.0,
            pointer_world: Vec2::ZERO,
            pointer_screen: Vec2::ZERO,
            size_scale: default_size_scale.clamp(0.5, 2.0),
            show_debug: false,
            collected_cue: None,
        }
    }

    #[inline]
    pub fn size_scale(&self) -> f32 {
        self.size_scale
    }

    /// External size-scale control; the core clamps to [0.5, 2.0].
    pub fn set_size_scale(&mut self, value: f32) {
        self.size_scale = value.clamp(0.5, 2.0);
    }

    pub fn nudge_size_scale(&mut self, delta: f32) {
        self.set_size_scale(self.size_scale + delta);
    }
}

/// One-shot feedback after collecting a creature.
pub struct CueFlash {
    pub label: String,
    pub until_ms: f64,
}

#[derive(Default)]
pub struct DebugStats {
    pub glyphs_drawn: usize,
    pub samples_in_view: usize,
    pub cached_silhouettes: usize,
    pub evt_processed_total: usize,
    pub queued_events: usize,
}

pub struct App {
    pub session: SessionState,
    pub queue: EventQueue,
    pub cfg: AppConfig,
    pub creatures: Vec<Creature>,
    pub swimmer: Swimmer,
    pub controller: InteractionController,
    pub silhouettes: SilhouetteCache,
    pub particles: ParticleField,
    pub library: ContentLibrary,
    pub pixel_sources: HashMap<Domain, PixelSource>,
    pub textures: HashMap<Domain, Texture2D>,
    pub modal_theme: ModalTheme,
    pub ocean: OceanTheme,
    pub rng: StdRng,
    pub assets_root: PathBuf,
    pub debug_stats: DebugStats,
    /// Geometry from the last rendered frame, used for click hit-testing.
    pub(crate) prompt_layout: PromptLayout,
    pub(crate) close_bounds: IRect,
    pub(crate) detail_opened_ms: f64,
    pub(crate) content_event_rx: Receiver<()>,
}
