#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use swarm_core::{SwarmEngine, DEFAULT_CATALOG};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod markup;
mod render;

use constants::{HERO_ID, SWARM_CONTAINER_ID};
use frame::Swarm;

/// A running swarm and the listeners feeding it.
struct Mounted {
    swarm: Rc<RefCell<Swarm>>,
    listeners: Option<events::Listeners>,
}

impl Mounted {
    fn dispose(mut self) {
        // listeners go first so nothing reaches the engine mid-teardown
        self.listeners = None;
        self.swarm.borrow_mut().dispose();
        log::info!("swarm disposed");
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("swarm-web starting");

    match mount() {
        Ok(Some(mounted)) => MOUNTED.with(|slot| *slot.borrow_mut() = Some(mounted)),
        Ok(None) => {}
        Err(e) => log::error!("swarm init error: {:?}", e),
    }
    Ok(())
}

/// Removes every listener and pending frame. Cards stay in the page, frozen.
#[wasm_bindgen]
pub fn dispose_swarm() {
    if let Some(mounted) = MOUNTED.with(|slot| slot.borrow_mut().take()) {
        mounted.dispose();
    }
}

fn mount() -> anyhow::Result<Option<Mounted>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let (Some(hero_el), Some(container)) = (
        document.get_element_by_id(HERO_ID),
        document.get_element_by_id(SWARM_CONTAINER_ID),
    ) else {
        log::debug!("no #{HERO_ID} or #{SWARM_CONTAINER_ID}; swarm disabled");
        return Ok(None);
    };
    let hero: web::HtmlElement = hero_el
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let cards = dom::create_cards(&document, &container, DEFAULT_CATALOG)?;

    let policy = dom::motion_policy(&window);
    if policy.is_static() {
        log::info!("coarse pointer or reduced motion: static card layout");
        return Ok(None);
    }

    let config = dom::read_config(&container);
    let engine = SwarmEngine::new(DEFAULT_CATALOG.to_vec(), config, policy, rand::random());
    let swarm = Rc::new(RefCell::new(Swarm::new(
        engine,
        render::DomSink::new(cards),
        hero,
    )));
    frame::install_tick(&swarm);
    let listeners = match events::wire(&window, &swarm) {
        Ok(listeners) => listeners,
        Err(e) => {
            // a frame may already be pending from an early start
            swarm.borrow_mut().dispose();
            return Err(e);
        }
    };

    Ok(Some(Mounted {
        swarm,
        listeners: Some(listeners),
    }))
}
