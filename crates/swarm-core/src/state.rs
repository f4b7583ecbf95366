//! Geometry value objects handed to the simulation by the host.
//!
//! The simulation never queries a rendering surface. The host measures the
//! container and the card boxes and passes the result in, which keeps the
//! physics testable without a display.

use glam::Vec2;

/// Container size in CSS pixels. Particle positions are local to its top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest top-left position a box of `size` may take and still fit.
    /// Never negative: an oversized box pins to the origin.
    #[inline]
    pub fn max_origin(&self, size: Vec2) -> Vec2 {
        Vec2::new(
            (self.width - size.x).max(0.0),
            (self.height - size.y).max(0.0),
        )
    }

    #[inline]
    pub fn clamp_origin(&self, position: Vec2, size: Vec2) -> Vec2 {
        position.clamp(Vec2::ZERO, self.max_origin(size))
    }
}

/// One measurement pass: the container box plus the rendered size of every
/// card, in catalog order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Measurement {
    pub container: Bounds,
    pub card_sizes: Vec<Vec2>,
}
