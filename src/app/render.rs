use glyphsea_geom::Vec2;
use glyphsea_interact::ModalState;
use glyphsea_mosaic::{MosaicParams, compose_content, layout_mosaic, tile_for_samples};
use glyphsea_silhouette::SampleParams;
use glyphsea_ui::{IRect, ModalChrome, UiTextRenderer};
use raylib::prelude::*;

use super::App;
use crate::creature::{MotionStyle, draw_sway};
use crate::view::ViewTransform;

impl App {
    pub fn render(&mut self, d: &mut RaylibDrawHandle, vt: &ViewTransform, font: &WeakFont) {
        let sw = d.get_screen_width();
        let sh = d.get_screen_height();
        self.debug_stats.glyphs_drawn = 0;
        self.debug_stats.samples_in_view = 0;

        self.draw_backdrop(d, vt);
        self.draw_particles(d, vt);
        self.draw_creatures(d, vt);
        self.draw_swimmer(d, vt);

        match self.controller.state() {
            ModalState::Idle => {
                self.prompt_layout = Default::default();
                self.close_bounds = IRect::default();
            }
            ModalState::Prompt(id) => {
                ModalChrome::draw_dim_overlay(d, &self.modal_theme, sw, sh, false);
                let layout = ModalChrome::layout_prompt(&self.modal_theme, sw, sh);
                let mouse = d.get_mouse_position();
                let hover = layout.hit(mouse);
                let message = self
                    .creatures
                    .iter()
                    .find(|c| c.id == id)
                    .map(|c| c.spec().prompt_message)
                    .unwrap_or("Take a closer look?");
                ModalChrome::draw_prompt(d, &self.modal_theme, &layout, message, hover);
                self.prompt_layout = layout;
                self.close_bounds = IRect::default();
            }
            ModalState::Detail(id) => {
                ModalChrome::draw_dim_overlay(d, &self.modal_theme, sw, sh, true);
                self.close_bounds = self.render_detail(d, id, sw, sh, font);
                self.prompt_layout = Default::default();
            }
        }

        self.draw_collected_cue(d, sw);
        self.draw_hud(d, sh);
        self.debug_stats.cached_silhouettes = self.silhouettes.len();
    }

    fn draw_backdrop(&self, d: &mut RaylibDrawHandle, vt: &ViewTransform) {
        let sw = d.get_screen_width();
        let sh = d.get_screen_height();
        d.clear_background(Color::BLACK);

        let surface = vt.to_screen(Vec2::new(0.0, self.cfg.world.height * 0.25)).y as i32;
        let mid = vt.to_screen(Vec2::new(0.0, self.cfg.world.height * 0.6)).y as i32;
        let [tr, tg, tb] = self.ocean.top;
        let [mr, mg, mb] = self.ocean.mid;
        let [br, bg, bb] = self.ocean.bottom;

        // Sky: washed-out top color above the surface line
        d.draw_rectangle_gradient_v(
            0,
            0,
            sw,
            surface.max(0),
            Color::new(
                tr.saturating_add(40),
                tg.saturating_add(30),
                tb.saturating_add(20),
                255,
            ),
            Color::new(tr, tg, tb, 255),
        );
        // Water: top -> mid -> bottom bands
        d.draw_rectangle_gradient_v(
            0,
            surface.max(0),
            sw,
            (mid - surface).max(0),
            Color::new(tr, tg, tb, 255),
            Color::new(mr, mg, mb, 255),
        );
        d.draw_rectangle_gradient_v(
            0,
            mid.max(0),
            sw,
            (sh - mid).max(0),
            Color::new(mr, mg, mb, 255),
            Color::new(br, bg, bb, 255),
        );
    }

    fn draw_particles(&self, d: &mut RaylibDrawHandle, vt: &ViewTransform) {
        for p in self.particles.iter() {
            let s = vt.to_screen(p.pos);
            d.draw_circle_lines(
                s.x as i32,
                s.y as i32,
                (p.radius * vt.scale).max(1.0),
                Color::new(255, 255, 255, 90),
            );
        }
    }

    fn draw_creatures(&self, d: &mut RaylibDrawHandle, vt: &ViewTransform) {
        let clock = self.session.clock;
        for c in self.creatures.iter() {
            let spec = c.spec();
            let sway = draw_sway(spec.motion, clock, c.phase);
            let s = vt.to_screen(c.pos + sway);
            let px = c.size * vt.scale;

            if let Some(tex) = self.textures.get(&c.domain) {
                let (tw, th) = (tex.width() as f32, tex.height() as f32);
                let scale = (px * 2.0) / tw.max(1.0);
                let src = Rectangle::new(0.0, 0.0, if c.facing_right { -tw } else { tw }, th);
                let dest = Rectangle::new(s.x, s.y, tw * scale, th * scale);
                let [r, g, b] = spec.body_rgb;
                d.draw_texture_pro(
                    tex,
                    src,
                    dest,
                    Vector2::new(tw * scale / 2.0, th * scale / 2.0),
                    0.0,
                    Color::new(r, g, b, 235),
                );
            } else {
                self.draw_procedural_body(d, c, s, px, clock);
            }

            // Dismissed creatures dim slightly so collected ones read as spent
            if c.dismissed {
                d.draw_circle_v(
                    Vector2::new(s.x, s.y),
                    px * 1.1,
                    Color::new(0, 0, 0, 60),
                );
            }
        }
    }

    fn draw_procedural_body(
        &self,
        d: &mut RaylibDrawHandle,
        c: &crate::creature::Creature,
        s: Vec2,
        px: f32,
        clock: f32,
    ) {
        let spec = c.spec();
        let [r, g, b] = spec.body_rgb;
        let body = Color::new(r, g, b, 210);
        let glow = Color::new(255, 255, 255, 70);
        match spec.motion {
            MotionStyle::Pulse => {
                // Dome plus trailing tentacle dots
                let breathe = 1.0 + (clock * 2.0 + c.phase).sin() * 0.08;
                d.draw_ellipse(s.x as i32, s.y as i32, px * breathe, px * 0.8 * breathe, body);
                for i in 0..4 {
                    let tx = s.x + (i as f32 - 1.5) * px * 0.4;
                    let ty = s.y + px * (0.9 + 0.25 * ((clock * 3.0 + i as f32).sin() * 0.5 + 0.5));
                    d.draw_circle_v(Vector2::new(tx, ty), px * 0.1, body);
                }
            }
            MotionStyle::Soar => {
                // Two short wing arcs
                let flap = (clock * 6.0 + c.phase).sin() * px * 0.4;
                d.draw_triangle(
                    Vector2::new(s.x - px, s.y - flap),
                    Vector2::new(s.x, s.y),
                    Vector2::new(s.x - px * 0.2, s.y),
                    body,
                );
                d.draw_triangle(
                    Vector2::new(s.x + px * 0.2, s.y),
                    Vector2::new(s.x, s.y),
                    Vector2::new(s.x + px, s.y - flap),
                    body,
                );
            }
            _ => {
                let dir = if c.facing_right { 1.0 } else { -1.0 };
                d.draw_ellipse(s.x as i32, s.y as i32, px, px * 0.55, body);
                // Tail fin
                d.draw_triangle(
                    Vector2::new(s.x - dir * px, s.y),
                    Vector2::new(s.x - dir * px * 1.5, s.y - px * 0.45),
                    Vector2::new(s.x - dir * px * 1.5, s.y + px * 0.45),
                    body,
                );
                d.draw_circle_v(
                    Vector2::new(s.x + dir * px * 0.5, s.y - px * 0.12),
                    (px * 0.09).max(1.0),
                    Color::new(10, 20, 30, 255),
                );
            }
        }
        // Sparkle pass shared by all species
        let tw = (clock * 4.0 + c.phase).sin() * 0.5 + 0.5;
        d.draw_circle_v(
            Vector2::new(s.x - px * 0.3, s.y - px * 0.2),
            (px * 0.12 * tw).max(0.5),
            glow,
        );
    }

    fn draw_swimmer(&self, d: &mut RaylibDrawHandle, vt: &ViewTransform) {
        let s = vt.to_screen(self.swimmer.pos);
        let px = 6.0 * vt.scale;
        let dir = if self.swimmer.facing_right() { 1.0 } else { -1.0 };
        d.draw_ellipse(s.x as i32, s.y as i32, px, px * 0.5, Color::new(240, 240, 250, 230));
        d.draw_circle_v(
            Vector2::new(s.x + dir * px * 0.6, s.y - px * 0.1),
            px * 0.22,
            Color::new(40, 60, 90, 255),
        );
    }

    /// Detail view: silhouette mosaic + title + hover popups + close
    /// affordance. Returns the close button bounds, degenerate when the
    /// view cannot render (missing raster or record).
    fn render_detail(
        &mut self,
        d: &mut RaylibDrawHandle,
        id: glyphsea_interact::CreatureId,
        sw: i32,
        sh: i32,
        font: &WeakFont,
    ) -> IRect {
        let Some(idx) = self.creatures.iter().position(|c| c.id == id) else {
            return IRect::default();
        };
        let spec = self.creatures[idx].spec();
        let Some(src) = self.pixel_sources.get(&self.creatures[idx].domain) else {
            return IRect::default();
        };
        let Some(record) = self.creatures[idx].record.clone() else {
            return IRect::default();
        };

        // Target box: keep the raster's aspect inside 60% of the screen
        let display_w = (sw.min(sh) as f32) * 0.6;
        let display_h = display_w * (src.height() as f32 / src.width() as f32);
        let cx = sw as f32 / 2.0;
        let cy = sh as f32 / 2.0 - 40.0;
        let origin = Vec2::new(cx - display_w / 2.0, cy - display_h / 2.0);

        let params = SampleParams::new(spec.grid, display_w, display_h);
        let samples = self
            .silhouettes
            .get_or_sample(spec.image_file, src, &params);
        self.debug_stats.samples_in_view = samples.len();

        let content = compose_content(&record);
        let text = tile_for_samples(&content, samples.len());
        // Animation clock restarts when the view opens; closing a view
        // discards its animation state with it.
        let view_clock = ((self.session.now_ms - self.detail_opened_ms) / 1000.0) as f32;
        let glyphs = layout_mosaic(
            &samples,
            &text,
            &MosaicParams {
                clock: view_clock,
                size_scale: self.session.size_scale(),
                intensity: spec.intensity.intensity(&record),
            },
        );
        self.debug_stats.glyphs_drawn = glyphs.len();

        let mut ch_buf = [0u8; 4];
        for g in &glyphs {
            let pos = origin + g.pos;
            let text = g.ch.encode_utf8(&mut ch_buf);
            let [or, og, ob, oa] = g.outline;
            let outline = Color::new(or, og, ob, oa);
            for (ox, oy) in [(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)] {
                d.draw_text_pro(
                    font,
                    text,
                    Vector2::new(pos.x + ox, pos.y + oy),
                    Vector2::zero(),
                    g.rotation.to_degrees(),
                    g.font_px,
                    1.0,
                    outline,
                );
            }
            let [fr, fg, fb] = g.fill;
            d.draw_text_pro(
                font,
                text,
                Vector2::new(pos.x, pos.y),
                Vector2::zero(),
                g.rotation.to_degrees(),
                g.font_px,
                1.0,
                Color::new(fr, fg, fb, 255),
            );
        }

        // Hover callouts around the pointer while it stays on the body
        let center = Vec2::new(cx, cy);
        let radius = display_w.max(display_h) / 2.0;
        let pointer = self.session.pointer_screen;
        let hovering = pointer.distance(center) < radius * 1.2;
        let now_ms = self.session.now_ms;
        {
            let c = &mut self.creatures[idx];
            if hovering {
                if c.hover_since.is_none() {
                    c.hover_since = Some(now_ms);
                }
                let phrases = record.key_phrases();
                c.popup.try_spawn(now_ms, pointer, &phrases, &mut self.rng);
                for p in c.popup.update(now_ms) {
                    ModalChrome::draw_popup_chip(
                        d,
                        Vector2::new(p.pos.x, p.pos.y),
                        p.text,
                        p.scale,
                        p.opacity,
                    );
                }
            } else {
                c.hover_since = None;
                c.popup.reset();
            }
        }

        // Title above the silhouette
        let title = match record.headline() {
            Some(h) if !h.is_empty() => {
                let mut h = h;
                if h.chars().count() > 18 {
                    h = h.chars().take(18).collect::<String>() + "...";
                }
                format!("{}: {}", spec.title_label, h)
            }
            _ => spec.title_label.to_string(),
        };
        ModalChrome::draw_title(
            d,
            &self.modal_theme,
            &title,
            cx as i32,
            (origin.y - 40.0) as i32,
        );

        // Close affordance under the body
        let btn_cy = (cy + display_h / 2.0 + 55.0) as i32;
        let mouse = d.get_mouse_position();
        let hovered = self.close_bounds.contains(mouse) && !self.close_bounds.is_degenerate();
        ModalChrome::draw_close_button(d, &self.modal_theme, cx as i32, btn_cy, hovered)
    }

    fn draw_collected_cue(&self, d: &mut RaylibDrawHandle, sw: i32) {
        if let Some(cue) = &self.session.collected_cue {
            let remaining = (cue.until_ms - self.session.now_ms).max(0.0);
            let alpha = ((remaining / 1800.0).clamp(0.0, 1.0) * 255.0) as u8;
            d.ui_draw_text_centered(&cue.label, sw / 2, 60, 22, Color::new(255, 240, 180, alpha));
        }
    }

    fn draw_hud(&self, d: &mut RaylibDrawHandle, sh: i32) {
        let scale_line = format!("glyph scale {:.1}x  ([ / ] to adjust)", self.session.size_scale());
        d.ui_draw_text(&scale_line, 12, sh - 26, 14, Color::new(235, 240, 250, 170));

        if self.session.show_debug {
            let stats = &self.debug_stats;
            let lines = [
                format!("tick {}", self.session.tick),
                format!("theme {}", self.ocean.name),
                format!("creatures {}", self.creatures.len()),
                format!("particles {}", self.particles.len()),
                format!(
                    "glyphs {} / samples {} / cached {}",
                    stats.glyphs_drawn, stats.samples_in_view, stats.cached_silhouettes
                ),
                format!(
                    "events {} processed, {} queued",
                    stats.evt_processed_total, stats.queued_events
                ),
            ];
            for (i, line) in lines.iter().enumerate() {
                d.draw_text(line, 12, 12 + i as i32 * 18, 14, Color::new(220, 230, 245, 220));
            }
        }
    }
}
