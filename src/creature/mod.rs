mod archetype;
pub mod masks;
mod motion;

pub use archetype::{ARCHETYPES, ArchetypeSpec, Domain, archetype};
pub use motion::{MotionStyle, draw_sway, step_motion};

use fastnoise_lite::FastNoiseLite;
use glyphsea_content::ContentRecord;
use glyphsea_geom::Vec2;
use glyphsea_interact::{CreatureId, PopupConfig, PopupKeywordManager, ProximityCandidate};
use rand::Rng;

/// One creature in the scene. All species share this shape; the archetype
/// table supplies everything species-specific.
pub struct Creature {
    pub id: CreatureId,
    pub domain: Domain,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub phase: f32,
    pub bob_speed: f32,
    pub bob_amp: f32,
    pub facing_right: bool,
    /// Assigned once when the matching collection arrives; read-only after.
    pub record: Option<ContentRecord>,
    /// false -> true exactly once, never reverts.
    pub dismissed: bool,
    pub hover_since: Option<f64>,
    pub popup: PopupKeywordManager,
}

impl Creature {
    pub fn spawn<R: Rng>(
        id: CreatureId,
        domain: Domain,
        world_w: f32,
        world_h: f32,
        popup_cfg: PopupConfig,
        rng: &mut R,
    ) -> Self {
        let spec = archetype(domain);
        let band_lo = world_h * spec.band.0;
        let band_hi = world_h * spec.band.1;
        let speed = rng.gen_range(4.0..14.0);
        Self {
            id,
            domain,
            pos: Vec2::new(
                rng.gen_range(20.0..(world_w - 20.0).max(21.0)),
                rng.gen_range(band_lo..band_hi.max(band_lo + 1.0)),
            ),
            vel: Vec2::new(if rng.gen_bool(0.5) { speed } else { -speed }, 0.0),
            size: rng.gen_range(spec.size.0..=spec.size.1),
            phase: rng.gen_range(0.0..std::f32::consts::TAU),
            bob_speed: rng.gen_range(0.02..0.04),
            bob_amp: rng.gen_range(0.3..0.8),
            facing_right: true,
            record: None,
            dismissed: false,
            hover_since: None,
            popup: PopupKeywordManager::new(popup_cfg),
        }
    }

    pub fn spec(&self) -> &'static ArchetypeSpec {
        archetype(self.domain)
    }

    pub fn update(&mut self, noise: &FastNoiseLite, clock: f32, dt: f32, world_w: f32, world_h: f32) {
        let spec = self.spec();
        let band = (world_h * spec.band.0, world_h * spec.band.1);
        step_motion(self, spec.motion, noise, clock, dt, world_w, band);
    }

    #[inline]
    pub fn proximity(&self, point: Vec2) -> f32 {
        self.pos.distance(point)
    }

    /// Records are assigned once; later arrivals never replace one.
    pub fn assign_record(&mut self, record: ContentRecord) -> bool {
        if self.record.is_some() || self.domain == Domain::Sky {
            return false;
        }
        self.record = Some(record);
        true
    }

    /// Idempotent and permanent.
    pub fn dismiss(&mut self) {
        if !self.dismissed {
            self.dismissed = true;
            log::info!(target: "modal", "creature {:?} ({}) dismissed", self.id, self.spec().name);
        }
    }

    pub fn interactive(&self) -> bool {
        self.domain != Domain::Sky && self.record.as_ref().is_some_and(|r| r.has_text())
    }

    pub fn candidate(&self, avatar: Vec2) -> ProximityCandidate {
        ProximityCandidate {
            id: self.id,
            distance: self.proximity(avatar),
            has_record: self.interactive(),
            dismissed: self.dismissed,
        }
    }
}
