//! Per-tick force accumulation.
//!
//! Every contribution is added straight into the particle velocities, so the
//! order below (attraction, separation, edge push) does not change the result.
//! Damping and integration happen afterwards in [`crate::integrator`].

use crate::config::SimulationConfig;
use crate::particle::ParticleState;
use crate::pointer::PointerState;
use crate::state::Bounds;
use glam::Vec2;

/// Pointer distances measured during the attraction pass. The highlight
/// detector consumes this instead of measuring again.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerProximity {
    distances: Vec<f32>,
    nearest: Option<(usize, f32)>,
}

impl PointerProximity {
    /// Proximity for an inactive pointer: nothing is near.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_distances(distances: Vec<f32>) -> Self {
        let mut nearest: Option<(usize, f32)> = None;
        for (i, &d) in distances.iter().enumerate() {
            // strict `<` keeps the lowest index on ties
            if nearest.map_or(true, |(_, best)| d < best) {
                nearest = Some((i, d));
            }
        }
        Self { distances, nearest }
    }

    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    pub fn nearest(&self) -> Option<(usize, f32)> {
        self.nearest
    }
}

/// Runs the whole force model for one tick.
pub fn accumulate(
    particles: &mut [ParticleState],
    pointer: &PointerState,
    bounds: Bounds,
    cfg: &SimulationConfig,
) -> PointerProximity {
    let proximity = attract(particles, pointer, cfg);
    separate(particles, cfg);
    push_from_edges(particles, bounds, cfg);
    proximity
}

/// Pull toward the pointer. The magnitude grows with distance and never
/// drops below `attraction * attraction_min_distance`.
pub fn attract(
    particles: &mut [ParticleState],
    pointer: &PointerState,
    cfg: &SimulationConfig,
) -> PointerProximity {
    if !pointer.active {
        return PointerProximity::none();
    }
    let distances = particles
        .iter_mut()
        .map(|p| {
            let offset = pointer.position - p.center();
            let dist = offset.length();
            let magnitude = cfg.attraction * dist.max(cfg.attraction_min_distance);
            // zero offset has no direction; such a card is already on target
            p.velocity += offset.normalize_or_zero() * magnitude;
            dist
        })
        .collect();
    PointerProximity::from_distances(distances)
}

/// Impulse added to the particle centered at `a` by its neighbour at `b`.
/// The neighbour receives the negation. `None` when the pair is out of range
/// or exactly coincident.
#[inline]
pub fn separation_impulse(a: Vec2, b: Vec2, cfg: &SimulationConfig) -> Option<Vec2> {
    let delta = a - b;
    let dist = delta.length();
    if dist >= cfg.separation_distance || dist <= 0.0 {
        return None;
    }
    let force = (cfg.separation_distance - dist) / cfg.separation_distance * cfg.separation_force;
    Some(delta / dist * force)
}

/// Soft pairwise repulsion over every unordered pair.
pub fn separate(particles: &mut [ParticleState], cfg: &SimulationConfig) {
    let centers: Vec<Vec2> = particles.iter().map(ParticleState::center).collect();
    let n = particles.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if let Some(impulse) = separation_impulse(centers[i], centers[j], cfg) {
                particles[i].velocity += impulse;
                particles[j].velocity -= impulse;
            }
        }
    }
}

/// Constant inward nudge for every edge a card's box crosses.
pub fn push_from_edges(particles: &mut [ParticleState], bounds: Bounds, cfg: &SimulationConfig) {
    for p in particles {
        if p.position.x < 0.0 {
            p.velocity.x += cfg.edge_push;
        }
        if p.position.x + p.size.x > bounds.width {
            p.velocity.x -= cfg.edge_push;
        }
        if p.position.y < 0.0 {
            p.velocity.y += cfg.edge_push;
        }
        if p.position.y + p.size.y > bounds.height {
            p.velocity.y -= cfg.edge_push;
        }
    }
}
