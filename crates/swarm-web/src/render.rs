use crate::constants::CARD_ACTIVE_CLASS;
use crate::markup;
use glam::Vec2;
use swarm_core::RenderSink;
use web_sys as web;

/// Writes engine output onto the card elements.
pub struct DomSink {
    cards: Vec<web::HtmlElement>,
}

impl DomSink {
    pub fn new(cards: Vec<web::HtmlElement>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[web::HtmlElement] {
        &self.cards
    }
}

impl RenderSink for DomSink {
    fn set_translation(&mut self, index: usize, position: Vec2) {
        if let Some(el) = self.cards.get(index) {
            let _ = el
                .style()
                .set_property("transform", &markup::translate_css(position));
        }
    }

    fn set_active(&mut self, index: usize, active: bool) {
        if let Some(el) = self.cards.get(index) {
            let classes = el.class_list();
            let _ = if active {
                classes.add_1(CARD_ACTIVE_CLASS)
            } else {
                classes.remove_1(CARD_ACTIVE_CLASS)
            };
        }
    }
}
