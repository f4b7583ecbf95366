use crate::constants::POINTER_PARKED;
use glam::Vec2;

/// Pointer events scoped to the container, already in container-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move(Vec2),
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub active: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vec2::from(POINTER_PARKED),
            active: false,
        }
    }
}

impl PointerState {
    /// Pure transition. Positions are not clamped: the pointer may sit outside
    /// the container for a moment before `Leave` arrives.
    #[must_use]
    pub fn apply(self, event: PointerEvent) -> PointerState {
        match event {
            PointerEvent::Move(position) => PointerState {
                position,
                active: true,
            },
            PointerEvent::Leave => PointerState {
                active: false,
                ..self
            },
        }
    }
}
