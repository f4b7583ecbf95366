use crate::config::SimulationConfig;
use crate::particle::ParticleState;
use crate::state::Bounds;
use glam::Vec2;

/// Damps, caps and applies one explicit Euler step, then clamps into `bounds`.
pub fn integrate(particles: &mut [ParticleState], bounds: Bounds, cfg: &SimulationConfig) {
    for p in particles {
        p.velocity = cap_speed(p.velocity * cfg.damping, cfg.max_speed);
        p.position = bounds.clamp_origin(p.position + p.velocity, p.size);
    }
}

/// Rescales `velocity` to exactly `max_speed` when it is faster, keeping its
/// direction.
#[inline]
pub fn cap_speed(velocity: Vec2, max_speed: f32) -> Vec2 {
    let speed = velocity.length();
    if speed > max_speed {
        velocity / speed * max_speed
    } else {
        velocity
    }
}
