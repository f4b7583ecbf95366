use crate::constants::*;
use crate::markup;
use glam::Vec2;
use swarm_core::{Bounds, Card, Measurement, MotionPolicy, SimulationConfig};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Appends one link per card to `container`, in catalog order.
pub fn create_cards(
    document: &web::Document,
    container: &web::Element,
    catalog: &[Card],
) -> anyhow::Result<Vec<web::HtmlElement>> {
    catalog
        .iter()
        .map(|card| -> anyhow::Result<web::HtmlElement> {
            let link = document
                .create_element(CARD_TAG)
                .map_err(js_err)?
                .dyn_into::<web::HtmlAnchorElement>()
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            link.set_class_name(CARD_CLASS);
            link.set_href(card.href);
            link.set_text_content(Some(card.label));
            link.set_attribute(CARD_TYPE_ATTR, card.category.as_attr())
                .map_err(js_err)?;
            container.append_child(&link).map_err(js_err)?;
            Ok(link.into())
        })
        .collect()
}

#[inline]
pub fn bounds(el: &web::HtmlElement) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds::new(rect.width() as f32, rect.height() as f32)
}

/// Container box plus the laid-out size of every card.
pub fn measure(container: &web::HtmlElement, cards: &[web::HtmlElement]) -> Measurement {
    Measurement {
        container: bounds(container),
        card_sizes: cards
            .iter()
            .map(|el| Vec2::new(el.offset_width() as f32, el.offset_height() as f32))
            .collect(),
    }
}

#[inline]
pub fn pointer_local(ev: &web::MouseEvent, el: &web::HtmlElement) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    markup::local_point(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
    )
}

#[inline]
fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|list| list.matches())
        .unwrap_or(false)
}

pub fn motion_policy(window: &web::Window) -> MotionPolicy {
    MotionPolicy::from_environment(
        media_matches(window, COARSE_POINTER_QUERY),
        media_matches(window, REDUCED_MOTION_QUERY),
    )
}

/// Default config with every `data-swarm-*` override on `el` applied.
/// Invalid overrides are logged and skipped.
pub fn read_config(el: &web::Element) -> SimulationConfig {
    let overrides: Vec<(String, String)> = el
        .get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter_map(|name| {
            let key = markup::override_key(&name)?.to_string();
            let value = el.get_attribute(&name)?;
            Some((key, value))
        })
        .collect();
    let (config, _rejected) = SimulationConfig::default()
        .with_overrides(overrides.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    config
}
