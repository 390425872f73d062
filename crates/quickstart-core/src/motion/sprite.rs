use crate::coords::{Rect, Vec2, Viewport};

/// Bouncing, spinning sprite state.
///
/// `position` is the top-left corner of the sprite's bounding box.
/// `rotation` and `spin` are in degrees and degrees per second.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sprite {
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f32,
    pub spin: f32,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            position: Vec2::new(400.0, 200.0),
            velocity: Vec2::new(200.0, 200.0),
            rotation: 0.0,
            spin: 90.0,
        }
    }
}

impl Sprite {
    pub const fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity, rotation: 0.0, spin: 90.0 }
    }

    /// Advances the sprite by `dt` seconds inside `bounds`.
    ///
    /// An axis bounces when the sprite has reached either edge and is still
    /// moving outward; the position itself is not clamped.
    pub fn step(&mut self, dt: f32, bounds: Viewport, size: Vec2) {
        if !(dt > 0.0 && dt.is_finite()) {
            return;
        }

        self.position += self.velocity * dt;
        self.rotation = (self.rotation + self.spin * dt).rem_euclid(360.0);

        let max = bounds.max_origin(size);
        self.velocity.x = reflect(self.position.x, self.velocity.x, max.x);
        self.velocity.y = reflect(self.position.y, self.velocity.y, max.y);
    }

    /// Destination rectangle for a rotated draw: centred on the sprite's
    /// middle, with the rotation origin at half the size.
    pub fn draw_rect(&self, size: Vec2) -> Rect {
        Rect::from_origin_size(self.position + size / 2.0, size)
    }

    pub fn bounds(&self, size: Vec2) -> Rect {
        Rect::from_origin_size(self.position, size)
    }
}

fn reflect(pos: f32, vel: f32, max: f32) -> f32 {
    if (pos <= 0.0 && vel < 0.0) || (pos >= max && vel > 0.0) {
        -vel
    } else {
        vel
    }
}
