use crate::dom;
use crate::frame::Swarm;
use std::cell::RefCell;
use std::rc::Rc;
use swarm_core::PointerEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that unregisters itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {kind} listener: {:?}", e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Reports viewport presence of one element; disconnects when dropped.
pub struct VisibilityObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn new(target: &web::Element, mut on_change: impl FnMut(bool) + 'static) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                // batched entries: the latest one is the current state
                let latest = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                    .last();
                if let Some(entry) = latest {
                    on_change(entry.is_intersecting());
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
        let observer = web::IntersectionObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
        observer.observe(target);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Every listener the swarm registered. Dropping it releases them all.
pub struct Listeners {
    _listeners: Vec<EventListener>,
    _visibility: VisibilityObserver,
}

pub fn wire(window: &web::Window, swarm: &Rc<RefCell<Swarm>>) -> anyhow::Result<Listeners> {
    let hero = swarm.borrow().hero.clone();
    let mut listeners = Vec::with_capacity(4);

    // pointermove
    {
        let swarm_m = swarm.clone();
        let hero_m = hero.clone();
        listeners.push(EventListener::new(&hero, "pointermove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                let at = dom::pointer_local(ev, &hero_m);
                swarm_m.borrow_mut().pointer(PointerEvent::Move(at));
            }
        })?);
    }
    // pointerleave
    {
        let swarm_l = swarm.clone();
        listeners.push(EventListener::new(&hero, "pointerleave", move |_| {
            swarm_l.borrow_mut().pointer(PointerEvent::Leave);
        })?);
    }
    // resize
    {
        let swarm_r = swarm.clone();
        listeners.push(EventListener::new(window, "resize", move |_| {
            swarm_r.borrow_mut().resize();
        })?);
    }
    // load: cards are measured after fonts and layout settle
    {
        let ready = window
            .document()
            .map(|d| d.ready_state() == "complete")
            .unwrap_or(false);
        if ready {
            swarm.borrow_mut().start();
        } else {
            let swarm_s = swarm.clone();
            listeners.push(EventListener::new(window, "load", move |_| {
                swarm_s.borrow_mut().start();
            })?);
        }
    }

    let swarm_v = swarm.clone();
    let visibility = VisibilityObserver::new(&hero, move |visible| {
        swarm_v.borrow_mut().set_visible(visible);
    })?;

    Ok(Listeners {
        _listeners: listeners,
        _visibility: visibility,
    })
}
