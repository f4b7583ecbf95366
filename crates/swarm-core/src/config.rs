//! Tunable simulation parameters.
//!
//! `SimulationConfig` is immutable once handed to the engine. Hosts may start
//! from [`SimulationConfig::default`] and apply string overrides (e.g. from
//! `data-swarm-*` attributes) with [`SimulationConfig::apply_override`].

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("`{key}` must be a finite number greater than zero (got {value})")]
    NonPositive { key: &'static str, value: f32 },
    #[error("`{key}` must be within [{min}, {max}] (got {value})")]
    OutOfRange {
        key: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("unknown swarm setting `{0}`")]
    UnknownKey(String),
    #[error("could not parse `{value}` for `{key}`")]
    Parse { key: String, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub attraction: f32,
    pub attraction_min_distance: f32,
    pub separation_distance: f32,
    pub separation_force: f32,
    pub damping: f32,
    pub max_speed: f32,
    pub edge_push: f32,
    pub active_radius: f32,
    pub scatter_speed: f32,
    pub frame_duration_sec: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            attraction: ATTRACTION,
            attraction_min_distance: ATTRACTION_MIN_DISTANCE,
            separation_distance: SEPARATION_DISTANCE,
            separation_force: SEPARATION_FORCE,
            damping: DAMPING,
            max_speed: MAX_SPEED,
            edge_push: EDGE_PUSH,
            active_radius: ACTIVE_RADIUS,
            scatter_speed: SCATTER_SPEED,
            frame_duration_sec: FRAME_DURATION_SEC,
        }
    }
}

/// Keys accepted by [`SimulationConfig::apply_override`].
pub const OVERRIDE_KEYS: &[&str] = &[
    "attraction",
    "attraction-min-distance",
    "separation-distance",
    "separation-force",
    "damping",
    "max-speed",
    "edge-push",
    "active-radius",
    "scatter-speed",
];

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("attraction", self.attraction)?;
        positive("attraction-min-distance", self.attraction_min_distance)?;
        positive("separation-distance", self.separation_distance)?;
        positive("separation-force", self.separation_force)?;
        positive("max-speed", self.max_speed)?;
        positive("active-radius", self.active_radius)?;
        positive("frame-duration", self.frame_duration_sec)?;
        in_range("damping", self.damping, 0.0, 1.0)?;
        in_range("edge-push", self.edge_push, 0.0, f32::MAX)?;
        in_range("scatter-speed", self.scatter_speed, 0.0, f32::MAX)?;
        Ok(())
    }

    /// Returns a copy with one setting replaced. The copy is validated as a
    /// whole, so `self` is never left half-updated.
    pub fn apply_override(&self, key: &str, value: &str) -> Result<Self, ConfigError> {
        let parsed: f32 = value.trim().parse().map_err(|_| ConfigError::Parse {
            key: key.to_string(),
            value: value.to_string(),
        })?;
        let mut next = self.clone();
        let slot = match key {
            "attraction" => &mut next.attraction,
            "attraction-min-distance" => &mut next.attraction_min_distance,
            "separation-distance" => &mut next.separation_distance,
            "separation-force" => &mut next.separation_force,
            "damping" => &mut next.damping,
            "max-speed" => &mut next.max_speed,
            "edge-push" => &mut next.edge_push,
            "active-radius" => &mut next.active_radius,
            "scatter-speed" => &mut next.scatter_speed,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        *slot = parsed;
        next.validate()?;
        Ok(next)
    }

    /// Applies every override in order, skipping (and logging) the ones that
    /// fail. Returns the resulting config and the rejected overrides.
    pub fn with_overrides<'a, I>(&self, overrides: I) -> (Self, Vec<ConfigError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut cfg = self.clone();
        let mut rejected = Vec::new();
        for (key, value) in overrides {
            match cfg.apply_override(key, value) {
                Ok(next) => cfg = next,
                Err(e) => {
                    log::warn!("ignoring swarm override: {e}");
                    rejected.push(e);
                }
            }
        }
        (cfg, rejected)
    }
}

fn positive(key: &'static str, value: f32) -> Result<(), ConfigError> {
    // also rejects NaN and infinities
    if !(value.is_finite() && value > 0.0) {
        return Err(ConfigError::NonPositive { key, value });
    }
    Ok(())
}

fn in_range(key: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            key,
            value,
            min,
            max,
        });
    }
    Ok(())
}
