use crate::constants::SWARM_ATTR_PREFIX;
use glam::Vec2;

/// CSS `transform` value for a card at `position`, one decimal per axis.
#[inline]
pub fn translate_css(position: Vec2) -> String {
    format!("translate({:.1}px,{:.1}px)", position.x, position.y)
}

/// Client coordinates relative to an element's top-left corner. Not clamped.
#[inline]
pub fn local_point(client_x: f32, client_y: f32, left: f32, top: f32) -> Vec2 {
    Vec2::new(client_x - left, client_y - top)
}

/// `data-swarm-max-speed` -> `max-speed`. Other attributes yield `None`.
#[inline]
pub fn override_key(attribute: &str) -> Option<&str> {
    attribute
        .strip_prefix(SWARM_ATTR_PREFIX)
        .filter(|key| !key.is_empty())
}
