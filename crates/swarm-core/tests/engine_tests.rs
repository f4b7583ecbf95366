// Host-side tests for the engine lifecycle: gate, scheduling, highlight and resize.

use glam::Vec2;
use std::collections::BTreeSet;
use swarm_core::*;

#[derive(Default)]
struct FakeScheduler {
    pending: bool,
    requested: u32,
    cancelled: u32,
}

impl FrameScheduler for FakeScheduler {
    fn request_tick(&mut self) {
        assert!(!self.pending, "a tick was requested twice");
        self.pending = true;
        self.requested += 1;
    }

    fn cancel_tick(&mut self) {
        self.pending = false;
        self.cancelled += 1;
    }
}

#[derive(Default)]
struct FakeSink {
    active: BTreeSet<usize>,
    activations: Vec<(usize, bool)>,
    translations: Vec<(usize, Vec2)>,
}

impl RenderSink for FakeSink {
    fn set_translation(&mut self, index: usize, position: Vec2) {
        self.translations.push((index, position));
    }

    fn set_active(&mut self, index: usize, active: bool) {
        self.activations.push((index, active));
        if active {
            self.active.insert(index);
        } else {
            self.active.remove(&index);
        }
        assert!(self.active.len() <= 1, "two cards highlighted at once");
    }
}

const CARD: Vec2 = Vec2::new(100.0, 40.0);

fn measurement(width: f32, height: f32, cards: usize) -> Measurement {
    Measurement {
        container: Bounds::new(width, height),
        card_sizes: vec![CARD; cards],
    }
}

fn engine(cards: usize, policy: MotionPolicy) -> SwarmEngine {
    SwarmEngine::new(
        DEFAULT_CATALOG[..cards].to_vec(),
        SimulationConfig::default(),
        policy,
        7,
    )
}

/// Delivers the pending tick, if any, the way a frame pump would.
fn pump(engine: &mut SwarmEngine, sched: &mut FakeScheduler, sink: &mut FakeSink) -> bool {
    if !sched.pending {
        return false;
    }
    sched.pending = false;
    let bounds = engine.bounds();
    engine.frame(bounds, sched, sink)
}

/// Places card centers and zeroes their velocities.
fn place(engine: &mut SwarmEngine, centers: &[Vec2]) {
    for (p, c) in engine.store_mut().particles_mut().iter_mut().zip(centers) {
        p.position = *c - p.size * 0.5;
        p.velocity = Vec2::ZERO;
    }
}

#[test]
fn start_scatters_inside_the_container_and_schedules_once() {
    let mut e = engine(20, MotionPolicy::Animated);
    let mut sched = FakeScheduler::default();
    e.start(&measurement(1200.0, 700.0, 20), &mut sched);

    assert_eq!(e.gate(), GateState::Running);
    assert_eq!(sched.requested, 1);
    assert!(e.is_tick_pending());
    for p in e.store().particles() {
        assert_eq!(p.size, CARD);
        assert!(p.position.x >= 0.0 && p.position.x <= 1100.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 660.0);
        assert!(p.velocity.x.abs() <= 0.25 && p.velocity.y.abs() <= 0.25);
    }
}

#[test]
fn each_frame_renders_every_card_and_requests_one_more() {
    let mut e = engine(5, MotionPolicy::Animated);
    let mut sched = FakeScheduler::default();
    let mut sink = FakeSink::default();
    e.start(&measurement(800.0, 600.0, 5), &mut sched);

    for _ in 0..10 {
        assert!(pump(&mut e, &mut sched, &mut sink));
    }

    assert_eq!(e.tick_count(), 10);
    assert_eq!(sched.requested, 11);
    assert_eq!(sink.translations.len(), 50);
    let last: Vec<Vec2> = sink.translations[45..].iter().map(|(_, p)| *p).collect();
    assert_eq!(last, e.store().positions());
}

#[test]
fn paused_swarm_does_not_move_or_reschedule() {
    let mut e = engine(6, MotionPolicy::Animated);
    let mut sched = FakeScheduler::default();
    let mut sink = FakeSink::default();
    e.start(&measurement(800.0, 600.0, 6), &mut sched);
    e.on_pointer(PointerEvent::Move(Vec2::new(400.0, 300.0)));
    for _ in 0..5 {
        pump(&mut e, &mut sched, &mut sink);
    }

    e.on_visibility(false, &mut sched);
    assert_eq!(e.gate(), GateState::Paused);
    let snapshot = e.store().positions();
    let requested = sched.requested;

    // the in-flight tick checks the gate and lets the loop lapse
    assert!(!pump(&mut e, &mut sched, &mut sink));
    assert!(!sched.pending);
    assert!(!e.frame(e.bounds(), &mut sched, &mut sink));
    assert_eq!(sched.requested, requested);
    assert_eq!(e.store().positions(), snapshot);

    e.on_visibility(true, &mut sched);
    assert_eq!(e.gate(), GateState::Running);
    assert!(sched.pending);
    assert_eq!(e.store().positions(), snapshot);
    assert!(pump(&mut e, &mut sched, &mut sink));
    assert_ne!(e.store().positions(), snapshot);
}

#[test]
fn visibility_while_a_tick_is_pending_does_not_double_schedule() {
    let mut e = engine(3, MotionPolicy::Animated);
    let mut sched = FakeScheduler::default();
    e.start(&measurement(800.0, 600.0, 3), &mut sched);

    e.on_visibility(false, &mut sched);
    e.on_visibility(true, &mut sched);
    e.on_visibility(true, &mut sched);

    assert_eq!(sched.requested, 1);
}

#[test]
fn visibility_before_start_is_remembered() {
    let mut e = engine(3, MotionPolicy::Animated);
    let mut sched = FakeScheduler::default();

    e.on_visibility(false, &mut sched);
    assert_eq!(e.gate(), GateState::Idle);
    e.start(&measurement(800.0, 600.0, 3), &mut sched);
    assert_eq!(e.gate(), GateState::Paused);
    assert_eq!(sched.requested, 0);

    e.on_visibility(true, &mut sched);
    assert_eq!(e.gate(), GateState::Running);
    assert_eq!(sched.requested, 1);
}

#[test]
fn stop_cancels_the_pending_tick() {
    let mut e = engine(3, MotionPolicy::Animated);
    let mut sched = FakeScheduler::default();
    e.start(&measurement(800.0, 600.0, 3), &mut sched);

    e.stop(&mut sched);

    assert_eq!(e.gate(), GateState::Paused);
    assert_eq!(sched.cancelled, 1);
    assert!(!e.is_tick_pending());
}

#[test]
fn visibility_reopens_a_stopped_swarm() {
    let mut e = engine(3, MotionPolicy::Animated);
    let mut sched = FakeScheduler::default();
    e.start(&measurement(800.0, 600.0, 3), &mut sched);
    e.stop(&mut sched);

    e.on_visibility(true, &mut sched);

    assert_eq!(e.gate(), GateState::Running);
    assert_eq!(sched.requested, 2);
    assert!(e.is_tick_pending());
}

#[test]
fn dispose_releases_everything_for_good() {
    let mut e = engine(3, MotionPolicy::Animated);
    let mut sched = FakeScheduler::default();
    let mut sink = FakeSink::default();
    e.start(&measurement(800.0, 600.0, 3), &mut sched);
    place(
        &mut e,
        &[Vec2::new(100.0, 100.0), Vec2::new(400.0, 100.0), Vec2::new(700.0, 100.0)],
    );
    e.on_pointer(PointerEvent::Move(Vec2::new(100.0, 100.0)));
    pump(&mut e, &mut sched, &mut sink);
    assert_eq!(e.active_index(), Some(0));

    e.dispose(&mut sched, &mut sink);

    assert_eq!(e.gate(), GateState::Idle);
    assert!(e.is_disposed());
    assert_eq!(sched.cancelled, 1);
    assert!(sink.active.is_empty());
    e.on_visibility(true, &mut sched);
    e.start(&measurement(800.0, 600.0, 3), &mut sched);
    assert!(!sched.pending);
    assert_eq!(e.gate(), GateState::Idle);
}

#[test]
fn highlight_follows_the_nearest_card_without_flicker() {
    let mut e = engine(3, MotionPolicy::Animated);
    let mut sched = FakeScheduler::default();
    let mut sink = FakeSink::default();
    e.start(&measurement(800.0, 600.0, 3), &mut sched);
    place(
        &mut e,
        &[Vec2::new(100.0, 100.0), Vec2::new(400.0, 100.0), Vec2::new(700.0, 100.0)],
    );

    e.on_pointer(PointerEvent::Move(Vec2::new(100.0, 110.0)));
    pump(&mut e, &mut sched, &mut sink);
    pump(&mut e, &mut sched, &mut sink);
    assert_eq!(e.active_index(), Some(0));
    assert_eq!(sink.activations, vec![(0, true)]);

    e.on_pointer(PointerEvent::Move(Vec2::new(700.0, 90.0)));
    pump(&mut e, &mut sched, &mut sink);
    assert_eq!(e.active_index(), Some(2));
    assert_eq!(sink.activations, vec![(0, true), (0, false), (2, true)]);

    e.on_pointer(PointerEvent::Leave);
    pump(&mut e, &mut sched, &mut sink);
    assert_eq!(e.active_index(), None);
    assert!(sink.active.is_empty());
}

#[test]
fn nothing_is_highlighted_outside_the_active_radius() {
    let mut e = engine(2, MotionPolicy::Animated);
    let mut sched = FakeScheduler::default();
    let mut sink = FakeSink::default();
    e.start(&measurement(800.0, 600.0, 2), &mut sched);
    place(&mut e, &[Vec2::new(100.0, 100.0), Vec2::new(600.0, 100.0)]);

    e.on_pointer(PointerEvent::Move(Vec2::new(350.0, 400.0)));
    pump(&mut e, &mut sched, &mut sink);

    assert_eq!(e.active_index(), None);
    assert!(sink.activations.is_empty());
}

#[test]
fn resize_pulls_cards_into_a_shrunk_container() {
    let mut e = engine(2, MotionPolicy::Animated);
    let mut sched = FakeScheduler::default();
    e.start(&measurement(800.0, 600.0, 2), &mut sched);
    {
        let particles = e.store_mut().particles_mut();
        particles[0].position = Vec2::new(800.0 - CARD.x, 200.0);
        particles[0].velocity = Vec2::new(1.5, -0.5);
        particles[1].position = Vec2::new(10.0, 10.0);
    }

    e.on_resize(&measurement(600.0, 600.0, 2));

    let p = e.store().particles();
    assert!(p[0].position.x <= 600.0 - CARD.x);
    assert_eq!(p[0].position.y, 200.0);
    assert_eq!(p[0].velocity, Vec2::new(1.5, -0.5));
    assert_eq!(p[1].position, Vec2::new(10.0, 10.0));
    assert_eq!(e.bounds(), Bounds::new(600.0, 600.0));
}

#[test]
fn reduced_motion_shows_cards_but_never_moves_them() {
    let policy = MotionPolicy::from_environment(false, true);
    let mut e = engine(20, policy);
    let mut sched = FakeScheduler::default();
    let mut sink = FakeSink::default();

    e.start(&measurement(1200.0, 700.0, 20), &mut sched);
    e.on_visibility(true, &mut sched);
    e.on_pointer(PointerEvent::Move(Vec2::new(300.0, 300.0)));
    let snapshot = e.store().positions();
    for _ in 0..50 {
        assert!(!e.frame(Bounds::new(1200.0, 700.0), &mut sched, &mut sink));
    }
    e.on_resize(&measurement(300.0, 300.0, 20));

    assert_eq!(e.catalog().len(), 20);
    assert_eq!(e.store().len(), 20);
    assert_eq!(e.store().positions(), snapshot);
    assert_eq!(sched.requested, 0);
    assert!(sink.translations.is_empty());
    assert_eq!(e.gate(), GateState::Idle);
}

#[test]
fn frames_read_the_geometry_they_are_given() {
    let mut e = engine(4, MotionPolicy::Animated);
    let mut sched = FakeScheduler::default();
    let mut sink = FakeSink::default();
    e.start(&measurement(1000.0, 800.0, 4), &mut sched);
    sched.pending = false;

    let smaller = Bounds::new(300.0, 200.0);
    assert!(e.frame(smaller, &mut sched, &mut sink));

    for p in e.store().particles() {
        assert!(p.position.x <= smaller.width - p.size.x);
        assert!(p.position.y <= smaller.height - p.size.y);
    }
}
