//! Textbook modal.

use crate::constants::{TEXTBOOK_CONTENT_ID, TEXTBOOK_MODAL_ID};
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, html: &str) {
    if let Some(content) = document.get_element_by_id(TEXTBOOK_CONTENT_ID) {
        content.set_inner_html(html);
    }
    if let Some(el) = document.get_element_by_id(TEXTBOOK_MODAL_ID) {
        _ = el.class_list().add_1("open");
        _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(TEXTBOOK_MODAL_ID) {
        _ = el.class_list().remove_1("open");
        _ = el.set_attribute("aria-hidden", "true");
    }
}

#[inline]
pub fn is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(TEXTBOOK_MODAL_ID)
        .map(|el| el.class_list().contains("open"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document, html: &str) {
    if is_open(document) {
        hide(document);
    } else {
        show(document, html);
    }
}
