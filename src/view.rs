use glyphsea_geom::Vec2;

/// World-to-screen mapping, recomputed once per frame. The world keeps the
/// original fixed proportions; the view letterboxes it into the window.
#[derive(Clone, Copy, Debug)]
pub struct ViewTransform {
    pub scale: f32,
    pub offset: Vec2,
}

impl ViewTransform {
    pub fn compute(screen_w: f32, screen_h: f32, world_w: f32, world_h: f32) -> Self {
        let scale = (screen_w / world_w).min(screen_h / world_h).max(0.01);
        let offset = Vec2::new(
            (screen_w - world_w * scale) * 0.5,
            (screen_h - world_h * scale) * 0.5,
        );
        Self { scale, offset }
    }

    #[inline]
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world * self.scale + self.offset
    }

    #[inline]
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_world_and_screen() {
        let vt = ViewTransform::compute(1280.0, 800.0, 384.0, 512.0);
        let p = Vec2::new(100.0, 250.0);
        let back = vt.to_world(vt.to_screen(p));
        assert!((back.x - p.x).abs() < 1e-3);
        assert!((back.y - p.y).abs() < 1e-3);
    }

    #[test]
    fn world_fits_inside_screen() {
        let vt = ViewTransform::compute(1280.0, 800.0, 384.0, 512.0);
        let tl = vt.to_screen(Vec2::ZERO);
        let br = vt.to_screen(Vec2::new(384.0, 512.0));
        assert!(tl.x >= 0.0 && tl.y >= 0.0);
        assert!(br.x <= 1280.0 + 1e-3 && br.y <= 800.0 + 1e-3);
    }
}
