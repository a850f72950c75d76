//! Ambient movement. Cosmetic by contract: bounded, continuous,
//! non-jittery. Each style mixes a horizontal cruise with a periodic or
//! noise-driven vertical component, clamped to the archetype's habitat
//! band.

use fastnoise_lite::FastNoiseLite;
use glyphsea_geom::Vec2;

use super::Creature;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionStyle {
    /// Slow vertical breathing with a gentle sideways drift (jellyfish).
    Pulse,
    /// Anchored sway on a tight vertical bob (seahorse).
    Bob,
    /// Long horizontal cruise, turning at the edges (whale).
    Glide,
    /// Quicker cruise with noise-wander on the vertical (fish).
    Dart,
    /// Above-surface glide with a shallow sine wave (bird).
    Soar,
}

pub fn step_motion(
    c: &mut Creature,
    style: MotionStyle,
    noise: &FastNoiseLite,
    clock: f32,
    dt: f32,
    world_w: f32,
    band: (f32, f32),
) {
    let t = clock + c.phase;
    match style {
        MotionStyle::Pulse => {
            c.pos.x += c.vel.x * dt;
            c.pos.y += (t * 0.8).sin() * c.bob_amp * dt * 6.0 - 2.0 * dt;
            // Drifted past the top of the band: sink back in
            if c.pos.y < band.0 {
                c.pos.y = band.0;
            }
        }
        MotionStyle::Bob => {
            c.pos.x += c.vel.x * dt;
            c.pos.y += (c.bob_speed * clock * 60.0 + c.phase).sin() * c.bob_amp * dt * 8.0;
        }
        MotionStyle::Glide => {
            c.pos.x += c.vel.x * dt;
            c.pos.y += (t * 0.3).sin() * c.bob_amp * dt * 3.0;
        }
        MotionStyle::Dart => {
            c.pos.x += c.vel.x * dt;
            let wander = noise.get_noise_2d(c.phase * 37.0, clock * 18.0);
            c.pos.y += wander * 14.0 * dt;
        }
        MotionStyle::Soar => {
            c.pos.x += c.vel.x * dt;
            c.pos.y += (t * 0.5).sin() * c.bob_amp * dt * 4.0;
        }
    }

    // Turn around at the horizontal margins
    let margin = 15.0;
    if c.pos.x < margin {
        c.pos.x = margin;
        c.vel.x = c.vel.x.abs();
    } else if c.pos.x > world_w - margin {
        c.pos.x = world_w - margin;
        c.vel.x = -c.vel.x.abs();
    }
    if c.vel.x > 0.0 {
        c.facing_right = true;
    } else if c.vel.x < 0.0 {
        c.facing_right = false;
    }

    // Habitat band is a hard clamp
    c.pos.y = c.pos.y.clamp(band.0, band.1);
}

/// Small coherent offset applied at draw time so the body sways without
/// moving the proximity anchor.
pub fn draw_sway(style: MotionStyle, clock: f32, phase: f32) -> Vec2 {
    let t = clock * 3.0 + phase;
    match style {
        MotionStyle::Pulse => Vec2::new((t * 0.8).sin() * 0.6, (t * 0.6).cos() * 1.2),
        MotionStyle::Bob => Vec2::new((t * 0.8).sin() * 0.6, (t * 0.6).cos() * 0.4),
        MotionStyle::Glide => Vec2::new(0.0, (t * 0.25).sin() * 1.5),
        MotionStyle::Dart => Vec2::new((t * 1.2).sin() * 0.5, (t * 0.9).cos() * 0.5),
        MotionStyle::Soar => Vec2::new(0.0, (t * 0.5).sin() * 0.8),
    }
}
