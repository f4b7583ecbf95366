//! Visibility gate and motion policy.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    /// Before the first start, or after teardown.
    #[default]
    Idle,
    Running,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateEvent {
    Start { visible: bool },
    Visibility(bool),
    Stop,
    Dispose,
}

impl GateState {
    #[must_use]
    pub fn apply(self, event: GateEvent) -> GateState {
        use GateState::*;
        match (self, event) {
            (_, GateEvent::Dispose) => Idle,
            (Idle, GateEvent::Start { visible: true }) => Running,
            (Idle, GateEvent::Start { visible: false }) => Paused,
            // visibility and stop only matter once started
            (Idle, _) => Idle,
            (state, GateEvent::Start { .. }) => state,
            (_, GateEvent::Visibility(true)) => Running,
            (_, GateEvent::Visibility(false)) | (_, GateEvent::Stop) => Paused,
        }
    }

    pub fn is_running(self) -> bool {
        self == GateState::Running
    }
}

/// Whether the swarm animates at all on this device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPolicy {
    #[default]
    Animated,
    /// Cards are shown but never move.
    Static,
}

impl MotionPolicy {
    /// Touch-primary pointers and reduced-motion requests get the static layout.
    pub fn from_environment(coarse_pointer: bool, reduced_motion: bool) -> Self {
        if coarse_pointer || reduced_motion {
            MotionPolicy::Static
        } else {
            MotionPolicy::Animated
        }
    }

    pub fn is_static(self) -> bool {
        self == MotionPolicy::Static
    }
}
