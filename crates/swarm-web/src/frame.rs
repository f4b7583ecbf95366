use crate::dom;
use crate::render::DomSink;
use std::cell::RefCell;
use std::rc::Rc;
use swarm_core::{FrameScheduler, PointerEvent, SwarmEngine};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame`-backed scheduler. The callback is installed once by
/// [`install_tick`] and re-requested by the engine after every frame.
#[derive(Default)]
pub struct RafScheduler {
    callback: Option<Closure<dyn FnMut()>>,
    handle: Option<i32>,
}

impl RafScheduler {
    /// Drops the frame callback; nothing can be scheduled afterwards.
    pub fn release(&mut self) {
        self.cancel_tick();
        self.callback = None;
    }
}

impl FrameScheduler for RafScheduler {
    fn request_tick(&mut self) {
        let (Some(window), Some(callback)) = (web::window(), self.callback.as_ref()) else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel_tick(&mut self) {
        if let (Some(handle), Some(window)) = (self.handle.take(), web::window()) {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

/// Everything the listeners and the frame callback share.
pub struct Swarm {
    pub engine: SwarmEngine,
    pub sink: DomSink,
    pub scheduler: RafScheduler,
    pub hero: web::HtmlElement,
}

impl Swarm {
    pub fn new(engine: SwarmEngine, sink: DomSink, hero: web::HtmlElement) -> Self {
        Self {
            engine,
            sink,
            scheduler: RafScheduler::default(),
            hero,
        }
    }

    /// Measure, scatter and start the loop once the page has laid out.
    pub fn start(&mut self) {
        let measurement = dom::measure(&self.hero, self.sink.cards());
        self.engine.start(&measurement, &mut self.scheduler);
    }

    pub fn frame(&mut self) {
        self.scheduler.handle = None;
        let bounds = dom::bounds(&self.hero);
        self.engine
            .frame(bounds, &mut self.scheduler, &mut self.sink);
    }

    pub fn pointer(&mut self, event: PointerEvent) {
        self.engine.on_pointer(event);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.engine.on_visibility(visible, &mut self.scheduler);
    }

    pub fn resize(&mut self) {
        let measurement = dom::measure(&self.hero, self.sink.cards());
        self.engine.on_resize(&measurement);
    }

    pub fn dispose(&mut self) {
        self.engine.dispose(&mut self.scheduler, &mut self.sink);
        self.scheduler.release();
    }
}

/// Installs the frame callback. It holds only a weak handle so the swarm,
/// its scheduler and the callback do not keep each other alive.
pub fn install_tick(swarm: &Rc<RefCell<Swarm>>) {
    let weak = Rc::downgrade(swarm);
    let tick = Closure::wrap(Box::new(move || {
        if let Some(swarm) = weak.upgrade() {
            swarm.borrow_mut().frame();
        }
    }) as Box<dyn FnMut()>);
    swarm.borrow_mut().scheduler.callback = Some(tick);
}
