use glyphsea_geom::Vec2;

/// The avatar the proximity scan measures against. Eases toward the
/// pointer's world position; bounded to the world so creatures at the
/// edges stay reachable.
pub struct Swimmer {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Swimmer {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    pub fn update(&mut self, target: Vec2, world_w: f32, world_h: f32, dt: f32) {
        // Critically-damped-ish chase: accelerate toward the target, bleed
        // velocity each tick so the avatar settles without orbiting.
        let to_target = target - self.pos;
        self.vel = (self.vel + to_target * (6.0 * dt)) * 0.85;
        let max_speed = 160.0;
        let speed = self.vel.length();
        if speed > max_speed {
            self.vel = self.vel * (max_speed / speed);
        }
        self.pos += self.vel * dt;
        self.pos.x = self.pos.x.clamp(0.0, world_w);
        self.pos.y = self.pos.y.clamp(0.0, world_h);
    }

    pub fn facing_right(&self) -> bool {
        self.vel.x >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_toward_a_stationary_target() {
        let mut s = Swimmer::new(Vec2::new(10.0, 10.0));
        let target = Vec2::new(200.0, 300.0);
        let start = s.pos.distance(target);
        for _ in 0..300 {
            s.update(target, 384.0, 512.0, 1.0 / 60.0);
        }
        assert!(s.pos.distance(target) < start * 0.1);
    }

    #[test]
    fn never_leaves_the_world() {
        let mut s = Swimmer::new(Vec2::new(5.0, 5.0));
        for _ in 0..200 {
            s.update(Vec2::new(-500.0, 9999.0), 384.0, 512.0, 1.0 / 60.0);
        }
        assert!(s.pos.x >= 0.0 && s.pos.x <= 384.0);
        assert!(s.pos.y >= 0.0 && s.pos.y <= 512.0);
    }
}
