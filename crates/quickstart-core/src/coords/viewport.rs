use super::Vec2;

/// Screen size in pixels; the area the sprite bounces inside.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Largest top-left position an object of `size` can take while staying
    /// fully on screen. Never negative, even for objects larger than the screen.
    #[inline]
    pub fn max_origin(self, size: Vec2) -> Vec2 {
        Vec2::new((self.width - size.x).max(0.0), (self.height - size.y).max(0.0))
    }
}
