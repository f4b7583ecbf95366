use crate::catalog::Card;
use crate::config::SimulationConfig;
use crate::forces;
use crate::gate::{GateEvent, GateState, MotionPolicy};
use crate::highlight::{ActiveHighlight, HighlightChange};
use crate::integrator;
use crate::particle::ParticleStore;
use crate::pointer::{PointerEvent, PointerState};
use crate::state::{Bounds, Measurement};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Host frame pump. `request_tick` must arrange for exactly one later call to
/// [`SwarmEngine::frame`]; `cancel_tick` withdraws a pending request.
pub trait FrameScheduler {
    fn request_tick(&mut self);
    fn cancel_tick(&mut self);
}

/// Receives the settled state of a tick.
pub trait RenderSink {
    fn set_translation(&mut self, index: usize, position: Vec2);
    fn set_active(&mut self, index: usize, active: bool);
}

/// The whole swarm: catalog, particles, pointer, highlight and gate.
///
/// Typical usage:
/// - Construct with `SwarmEngine::new(catalog, config, policy, seed)`
/// - Feed host events through `on_pointer`, `on_visibility` and `on_resize`
/// - Call `start` once the cards are laid out, then `frame` from every tick the
///   scheduler delivers
/// - `stop` pauses and `dispose` tears the swarm down for good
pub struct SwarmEngine {
    catalog: Vec<Card>,
    store: ParticleStore,
    pointer: PointerState,
    highlight: ActiveHighlight,
    gate: GateState,
    config: SimulationConfig,
    policy: MotionPolicy,
    bounds: Bounds,
    visible: bool,
    tick_pending: bool,
    disposed: bool,
    ticks: u64,
    rng: StdRng,
}

impl SwarmEngine {
    pub fn new(catalog: Vec<Card>, config: SimulationConfig, policy: MotionPolicy, seed: u64) -> Self {
        let store = ParticleStore::initialize(catalog.len());
        Self {
            catalog,
            store,
            pointer: PointerState::default(),
            highlight: ActiveHighlight::default(),
            gate: GateState::Idle,
            config,
            policy,
            bounds: Bounds::default(),
            // assumed visible until the host reports otherwise
            visible: true,
            tick_pending: false,
            disposed: false,
            ticks: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn catalog(&self) -> &[Card] {
        &self.catalog
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    /// Direct access for hosts that lay particles out themselves.
    pub fn store_mut(&mut self) -> &mut ParticleStore {
        &mut self.store
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn active_index(&self) -> Option<usize> {
        self.highlight.index()
    }

    pub fn gate(&self) -> GateState {
        self.gate
    }

    pub fn policy(&self) -> MotionPolicy {
        self.policy
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn is_tick_pending(&self) -> bool {
        self.tick_pending
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Ticks simulated since construction.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Copies a fresh measurement in without moving anything.
    pub fn measure(&mut self, measurement: &Measurement) {
        self.store.measure(measurement);
        self.bounds = measurement.container;
    }

    /// Measures, scatters and opens the gate. A static or disposed engine does
    /// nothing here.
    pub fn start(&mut self, measurement: &Measurement, scheduler: &mut dyn FrameScheduler) {
        if self.disposed || self.policy.is_static() {
            return;
        }
        self.measure(measurement);
        self.store
            .scatter(self.bounds, self.config.scatter_speed, &mut self.rng);
        self.transition(GateEvent::Start {
            visible: self.visible,
        });
        log::info!(
            "swarm started: {} cards in {:.0}x{:.0}",
            self.store.len(),
            self.bounds.width,
            self.bounds.height
        );
        self.schedule_if_running(scheduler);
    }

    pub fn on_pointer(&mut self, event: PointerEvent) {
        self.pointer = self.pointer.apply(event);
    }

    /// Visibility reported before `start` is remembered for it.
    pub fn on_visibility(&mut self, visible: bool, scheduler: &mut dyn FrameScheduler) {
        self.visible = visible;
        if self.disposed || self.policy.is_static() {
            return;
        }
        self.transition(GateEvent::Visibility(visible));
        self.schedule_if_running(scheduler);
    }

    /// Re-measures and pulls every card back inside the new container.
    /// Velocities are left alone.
    pub fn on_resize(&mut self, measurement: &Measurement) {
        if self.disposed || self.policy.is_static() {
            return;
        }
        self.measure(measurement);
        self.store.clamp_into(self.bounds);
    }

    /// Pauses and withdraws the pending tick. This is not sticky: the next
    /// `on_visibility(true)` reopens the gate and schedules again.
    pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.transition(GateEvent::Stop);
        self.cancel_pending(scheduler);
    }

    /// Final teardown: cancels the pending tick and clears the highlight. The
    /// engine never schedules again.
    pub fn dispose(&mut self, scheduler: &mut dyn FrameScheduler, sink: &mut dyn RenderSink) {
        self.cancel_pending(scheduler);
        apply_highlight(self.highlight.clear(), sink);
        self.transition(GateEvent::Dispose);
        self.disposed = true;
    }

    /// Entry point for a delivered tick. Runs the pipeline and asks for the
    /// next tick while the gate is open; otherwise lets the loop lapse.
    /// Returns whether a tick was simulated.
    pub fn frame(
        &mut self,
        bounds: Bounds,
        scheduler: &mut dyn FrameScheduler,
        sink: &mut dyn RenderSink,
    ) -> bool {
        self.tick_pending = false;
        if self.disposed || self.policy.is_static() || !self.gate.is_running() {
            log::debug!("swarm frame skipped ({:?}), loop not rescheduled", self.gate);
            return false;
        }
        self.tick(bounds, sink);
        self.schedule_if_running(scheduler);
        true
    }

    /// One simulation step: forces, integration, detection, then render.
    pub fn tick(&mut self, bounds: Bounds, sink: &mut dyn RenderSink) {
        self.bounds = bounds;
        let cfg = &self.config;
        let particles = self.store.particles_mut();

        let proximity = forces::accumulate(particles, &self.pointer, bounds, cfg);
        integrator::integrate(particles, bounds, cfg);
        let change = self.highlight.update(&proximity, cfg.active_radius);

        apply_highlight(change, sink);
        for (i, p) in self.store.particles().iter().enumerate() {
            sink.set_translation(i, p.position);
        }
        self.ticks += 1;
    }

    fn transition(&mut self, event: GateEvent) {
        let next = self.gate.apply(event);
        if next != self.gate {
            log::debug!("swarm gate {:?} -> {:?} on {:?}", self.gate, next, event);
        }
        self.gate = next;
    }

    fn schedule_if_running(&mut self, scheduler: &mut dyn FrameScheduler) {
        if self.gate.is_running() && !self.tick_pending {
            scheduler.request_tick();
            self.tick_pending = true;
        }
    }

    fn cancel_pending(&mut self, scheduler: &mut dyn FrameScheduler) {
        if self.tick_pending {
            scheduler.cancel_tick();
            self.tick_pending = false;
        }
    }
}

fn apply_highlight(change: HighlightChange, sink: &mut dyn RenderSink) {
    if let HighlightChange::Changed { previous, current } = change {
        if let Some(i) = previous {
            sink.set_active(i, false);
        }
        if let Some(i) = current {
            sink.set_active(i, true);
        }
    }
}
