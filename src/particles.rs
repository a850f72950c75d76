use std::collections::VecDeque;

use glyphsea_geom::Vec2;
use rand::Rng;

/// One drifting bubble. Rises with a sinusoidal sway and pops at the
/// surface band.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub radius: f32,
    pub sway_phase: f32,
    pub rise_speed: f32,
}

/// Bounded drift field. Capacity is a config knob; when full, the oldest
/// particle is evicted first.
pub struct ParticleField {
    items: VecDeque<Particle>,
    capacity: usize,
    surface_y: f32,
}

impl ParticleField {
    pub fn new(capacity: usize, surface_y: f32) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity.min(1024)),
            capacity: capacity.max(1),
            surface_y,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn spawn<R: Rng>(&mut self, pos: Vec2, rng: &mut R) {
        if pos.y <= self.surface_y {
            return;
        }
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(Particle {
            pos,
            radius: rng.gen_range(0.6..2.2),
            sway_phase: rng.gen_range(0.0..std::f32::consts::TAU),
            rise_speed: rng.gen_range(8.0..22.0),
        });
    }

    pub fn update(&mut self, dt: f32, clock: f32) {
        for p in self.items.iter_mut() {
            p.pos.y -= p.rise_speed * dt;
            p.pos.x += (clock * 2.0 + p.sway_phase).sin() * 6.0 * dt;
        }
        let surface = self.surface_y;
        self.items.retain(|p| p.pos.y > surface);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn capacity_is_a_hard_bound_with_fifo_eviction() {
        let mut field = ParticleField::new(5, 10.0);
        let mut rng = StdRng::seed_from_u64(2);
        for i in 0..20 {
            field.spawn(Vec2::new(i as f32, 100.0 + i as f32), &mut rng);
            assert!(field.len() <= 5);
        }
        assert_eq!(field.len(), 5);
        // Oldest evicted: survivors are the last five spawned
        let xs: Vec<f32> = field.iter().map(|p| p.pos.x).collect();
        assert_eq!(xs, vec![15.0, 16.0, 17.0, 18.0, 19.0]);
    }

    #[test]
    fn bubbles_pop_at_the_surface() {
        let mut field = ParticleField::new(16, 50.0);
        let mut rng = StdRng::seed_from_u64(3);
        field.spawn(Vec2::new(0.0, 52.0), &mut rng);
        assert_eq!(field.len(), 1);
        for _ in 0..120 {
            field.update(1.0 / 30.0, 0.0);
        }
        assert_eq!(field.len(), 0);
    }

    #[test]
    fn spawns_above_surface_are_rejected() {
        let mut field = ParticleField::new(16, 128.0);
        let mut rng = StdRng::seed_from_u64(4);
        field.spawn(Vec2::new(0.0, 100.0), &mut rng);
        assert_eq!(field.len(), 0);
    }
}
