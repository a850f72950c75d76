use fastnoise_lite::FastNoiseLite;
use glyphsea_geom::Vec2;
use glyphsea_interact::{ModalEffect, ModalState};
use rand::Rng;

use super::{App, state::CueFlash};
use crate::event::Event;

impl App {
    /// One logical tick: drain queued intents, move creatures, then run
    /// the proximity scan against the positions this tick produced.
    pub fn step(&mut self, noise: &FastNoiseLite, dt: f32) {
        self.session.tick = self.session.tick.wrapping_add(1);
        self.queue.emit_now(Event::Tick);

        // 1. Process this tick's events
        let mut processed = 0usize;
        while let Some(env) = self.queue.pop_ready() {
            processed += 1;
            self.process_event(env.kind, env.tick);
        }
        self.queue.advance_tick();
        self.debug_stats.evt_processed_total += processed;
        self.debug_stats.queued_events = self.queue.pending();

        // 2. Avatar chases the pointer; bubbles trail it
        let target = self.session.pointer_world;
        self.swimmer
            .update(target, self.cfg.world.width, self.cfg.world.height, dt);
        if self.swimmer.vel.length() > 12.0 && self.rng.gen_bool(0.3) {
            let behind = self.swimmer.pos - self.swimmer.vel.normalized() * 3.0;
            self.particles.spawn(behind, &mut self.rng);
        }

        // 3. Creature movement, with trailing bubbles for the movers
        let interaction_open = !self.controller.is_idle();
        for c in self.creatures.iter_mut() {
            c.update(
                noise,
                self.session.clock,
                dt,
                self.cfg.world.width,
                self.cfg.world.height,
            );
            // Recordless creatures adopt a record as collections arrive
            if c.record.is_none() {
                if let Some(rec) = self.library.pick(c.domain, &mut self.rng) {
                    if c.assign_record(rec) {
                        log::debug!(target: "content", "assigned a record to {:?}", c.id);
                    }
                }
            }
        }
        if let Some(c) = self.creatures.iter().find(|c| c.vel.x.abs() > 8.0) {
            if self.rng.gen_bool(0.04) {
                let behind = c.pos - Vec2::new(c.vel.x.signum() * c.size * 0.5, 0.0);
                self.particles.spawn(behind, &mut self.rng);
            }
        }
        self.particles.update(dt, self.session.clock);

        // 4. Proximity scan (positions from this tick), unless a modal
        //    already owns the screen
        if !interaction_open {
            let avatar = self.swimmer.pos;
            let candidates: Vec<_> = self.creatures.iter().map(|c| c.candidate(avatar)).collect();
            if let Some(ModalEffect::Prompted(id)) = self.controller.scan(candidates) {
                log::debug!(target: "events", "[tick {}] prompt opened for {:?}", self.session.tick, id);
            }
        } else {
            // Keep the re-arm memo fresh even while a modal is open
            let avatar = self.swimmer.pos;
            let candidates: Vec<_> = self.creatures.iter().map(|c| c.candidate(avatar)).collect();
            let _ = self.controller.scan(candidates);
        }

        // 5. Expire the collected cue
        if let Some(cue) = &self.session.collected_cue {
            if self.session.now_ms > cue.until_ms {
                self.session.collected_cue = None;
            }
        }
    }

    fn process_event(&mut self, kind: Event, tick: u64) {
        match kind {
            Event::Tick => {
                log::trace!(target: "events", "[tick {tick}] Tick");
            }
            Event::PointerMoved { x, y } => {
                log::trace!(target: "events", "[tick {tick}] PointerMoved ({x:.1}, {y:.1})");
                self.session.pointer_world = Vec2::new(x, y);
            }
            Event::ConfirmPressed => {
                log::info!(target: "events", "[tick {tick}] ConfirmPressed");
                if let Some(ModalEffect::Opened(id)) = self.controller.confirm() {
                    self.detail_opened_ms = self.session.now_ms;
                    if let Some(c) = self.creature_mut(id) {
                        c.popup.reset();
                        c.hover_since = None;
                    }
                }
            }
            Event::CancelPressed => {
                log::info!(target: "events", "[tick {tick}] CancelPressed");
                let effect = match self.controller.state() {
                    ModalState::Prompt(_) => self.controller.cancel(),
                    ModalState::Detail(_) => self.controller.close_detail(),
                    ModalState::Idle => None,
                };
                match effect {
                    Some(ModalEffect::Passed(id)) => {
                        if let Some(c) = self.creature_mut(id) {
                            c.dismiss();
                        }
                    }
                    Some(ModalEffect::Collected(id)) => {
                        let label = self
                            .creature_mut(id)
                            .map(|c| {
                                c.dismiss();
                                c.popup.reset();
                                c.spec().title_label
                            })
                            .unwrap_or("creature");
                        self.session.collected_cue = Some(CueFlash {
                            label: format!("{label} collected"),
                            until_ms: self.session.now_ms + 1800.0,
                        });
                    }
                    _ => {}
                }
            }
            Event::SizeScaleChanged { delta } => {
                self.session.nudge_size_scale(delta);
                log::info!(
                    target: "events",
                    "[tick {tick}] SizeScaleChanged -> {:.2}",
                    self.session.size_scale()
                );
            }
            Event::ContentDirChanged => {
                log::info!(target: "events", "[tick {tick}] ContentDirChanged");
                let changed = self.library.reload(&self.assets_root);
                for (domain, count) in changed {
                    self.queue.emit_now(Event::ContentArrived { domain, count });
                }
            }
            Event::ContentArrived { domain, count } => {
                log::info!(target: "content", "[tick {tick}] {count} records for {domain:?}");
            }
            Event::DebugToggled => {
                self.session.show_debug = !self.session.show_debug;
            }
        }
    }

    fn creature_mut(
        &mut self,
        id: glyphsea_interact::CreatureId,
    ) -> Option<&mut crate::creature::Creature> {
        self.creatures.iter_mut().find(|c| c.id == id)
    }
}
