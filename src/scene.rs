use crate::constants::{ids, REVEALED_CLASS};
use crate::core::Layer;
use crate::dom;
use web_sys as web;

/// Collect the parallax layer elements present in the page. Missing layers
/// are skipped; the rest of the scene still animates.
pub fn parallax_layers(document: &web::Document) -> Vec<(Layer, web::HtmlElement)> {
    Layer::ALL
        .iter()
        .filter_map(|&layer| match dom::html_element(document, layer.element_id()) {
            Some(el) => Some((layer, el)),
            None => {
                log::warn!("[scene] missing #{}; layer not animated", layer.element_id());
                None
            }
        })
        .collect()
}

/// Start the intro fade/scale transitions defined in the stylesheet.
#[inline]
pub fn reveal_intro(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(ids::SCENE) {
        dom::add_class(&el, REVEALED_CLASS);
    }
}

#[inline]
pub fn is_revealed(el: &web::Element) -> bool {
    el.class_list().contains(REVEALED_CLASS)
}
