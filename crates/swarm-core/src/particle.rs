use crate::state::{Bounds, Measurement};
use glam::Vec2;
use rand::Rng;

/// Kinematic state of one card. `position` is the top-left corner of the
/// card's box in container-local pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParticleState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
}

impl ParticleState {
    pub fn new(position: Vec2, velocity: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity,
            size,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }
}

/// Owns every particle; index `i` belongs to catalog card `i`.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    particles: Vec<ParticleState>,
}

impl ParticleStore {
    /// One zeroed particle per card.
    pub fn initialize(count: usize) -> Self {
        Self {
            particles: vec![ParticleState::default(); count],
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[ParticleState] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [ParticleState] {
        &mut self.particles
    }

    pub fn positions(&self) -> Vec<Vec2> {
        self.particles.iter().map(|p| p.position).collect()
    }

    /// Copies the measured card sizes in. Sizes beyond the particle count are
    /// ignored; particles without a size keep their previous one.
    pub fn measure(&mut self, measurement: &Measurement) {
        for (p, size) in self.particles.iter_mut().zip(&measurement.card_sizes) {
            p.size = *size;
        }
    }

    /// Random placement inside `bounds` and a small random drift.
    pub fn scatter<R: Rng>(&mut self, bounds: Bounds, scatter_speed: f32, rng: &mut R) {
        for p in &mut self.particles {
            let span = bounds.max_origin(p.size);
            p.position = Vec2::new(rng.gen::<f32>() * span.x, rng.gen::<f32>() * span.y);
            p.velocity = if scatter_speed > 0.0 {
                Vec2::new(
                    rng.gen_range(-scatter_speed..=scatter_speed),
                    rng.gen_range(-scatter_speed..=scatter_speed),
                )
            } else {
                Vec2::ZERO
            };
        }
    }

    /// Pulls every particle back inside `bounds`. Velocities are untouched.
    pub fn clamp_into(&mut self, bounds: Bounds) {
        for p in &mut self.particles {
            p.position = bounds.clamp_origin(p.position, p.size);
        }
    }
}
