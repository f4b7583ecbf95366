// Shared swarm tuning constants. `SimulationConfig::default()` is built from these.

// Pointer attraction
pub const ATTRACTION: f32 = 0.0008; // velocity gained per px of pointer distance
pub const ATTRACTION_MIN_DISTANCE: f32 = 50.0; // floor applied to the pointer distance

// Card-to-card separation
pub const SEPARATION_DISTANCE: f32 = 120.0; // centers closer than this push apart
pub const SEPARATION_FORCE: f32 = 0.8; // impulse at zero distance

// Integration
pub const DAMPING: f32 = 0.92; // per-tick velocity multiplier
pub const MAX_SPEED: f32 = 4.0; // px per tick
pub const EDGE_PUSH: f32 = 0.3; // constant inward nudge when a card crosses an edge

// Interaction
pub const ACTIVE_RADIUS: f32 = 80.0; // nearest card within this distance is highlighted

// Scatter
pub const SCATTER_SPEED: f32 = 0.25; // initial velocity drawn from [-SCATTER_SPEED, SCATTER_SPEED]

// Nominal frame length; the integrator steps once per frame regardless.
pub const FRAME_DURATION_SEC: f32 = 1.0 / 60.0;

// Pointer position before the first move event.
pub const POINTER_PARKED: [f32; 2] = [-9999.0, -9999.0];
