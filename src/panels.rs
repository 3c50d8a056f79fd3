//! DOM panels derived from the session: navigation, sliders, info panes and
//! the practice card. Event handling lives in `events::controls`.

use crate::constants::*;
use crate::core::catalog::{path_nodes_containing, Principle, PrincipleId, LEARNING_PATH};
use crate::core::params::ParamSpec;
use crate::core::Session;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const DATA_PRINCIPLE: &str = "data-id";
pub const DATA_PATH_NODE: &str = "data-node-id";
pub const DATA_PARAM: &str = "data-param";

fn required(document: &web::Document, element_id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))
}

fn append(parent: &web::Node, child: &web::Node) {
    _ = parent.append_child(child);
}

/// Category groups with one button per principle.
pub fn render_outline(document: &web::Document, session: &Session) -> anyhow::Result<()> {
    let container = required(document, OUTLINE_ID)?;
    container.set_inner_html("");
    for (category, ids) in session.outline() {
        let group: web::HtmlElement = dom::create(document, "div")?;
        group.set_class_name("outline-group");
        let header: web::HtmlElement = dom::create(document, "button")?;
        header.set_class_name("outline-group-header");
        header.set_text_content(Some(category.label()));
        let list: web::HtmlElement = dom::create(document, "div")?;
        list.set_class_name("outline-items");
        for id in ids {
            let item: web::HtmlElement = dom::create(document, "button")?;
            item.set_class_name("outline-item");
            item.set_text_content(Some(Principle::lookup(id).name));
            _ = item.set_attribute(DATA_PRINCIPLE, id.as_str());
            append(&list, &item);
        }
        append(&group, &header);
        append(&group, &list);
        append(&container, &group);
    }
    Ok(())
}

pub fn render_learning_path(document: &web::Document) -> anyhow::Result<()> {
    let container = required(document, LEARNING_PATH_ID)?;
    container.set_inner_html("");
    for (index, node) in LEARNING_PATH.iter().enumerate() {
        let button: web::HtmlElement = dom::create(document, "button")?;
        button.set_class_name("path-node");
        button.set_text_content(Some(node.label));
        _ = button.set_attribute(DATA_PATH_NODE, node.id);
        append(&container, &button);
        if index + 1 < LEARNING_PATH.len() {
            let arrow: web::HtmlElement = dom::create(document, "span")?;
            arrow.set_class_name("path-arrow");
            arrow.set_text_content(Some("→"));
            append(&container, &arrow);
        }
    }
    Ok(())
}

fn for_each_marked(document: &web::Document, attr: &str, mut f: impl FnMut(&web::Element, &str)) {
    let Ok(nodes) = document.query_selector_all(&format!("[{}]", attr)) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        if let Some(value) = el.get_attribute(attr) {
            f(&el, &value);
        }
    }
}

/// Mark the active principle in the outline and every path node holding it.
pub fn highlight_navigation(document: &web::Document, active: PrincipleId) {
    for_each_marked(document, DATA_PRINCIPLE, |el, id| {
        _ = el
            .class_list()
            .toggle_with_force("active", id == active.as_str());
    });
    let lit: Vec<&str> = path_nodes_containing(active).map(|n| n.id).collect();
    for_each_marked(document, DATA_PATH_NODE, |el, id| {
        _ = el.class_list().toggle_with_force("active", lit.iter().any(|n| *n == id));
    });
}

fn slider_id(param: &str) -> String {
    format!("slider-{}", param)
}

fn number_id(param: &str) -> String {
    format!("number-{}", param)
}

fn readout_id(param: &str) -> String {
    format!("value-{}", param)
}

fn configure_input(input: &web::HtmlInputElement, kind: &str, spec: &ParamSpec, value: f32) {
    input.set_type(kind);
    input.set_min(&spec.min.to_string());
    input.set_max(&spec.max.to_string());
    input.set_step(&spec.step.to_string());
    input.set_value(&value.to_string());
    _ = input.set_attribute(DATA_PARAM, spec.id);
}

/// One labelled range + number pair per parameter of the active principle.
pub fn render_sliders(document: &web::Document, session: &Session) -> anyhow::Result<()> {
    let container = required(document, SLIDERS_ID)?;
    container.set_inner_html("");
    let params = session.params();
    for spec in session.principle().params {
        let value = params.get(spec.id);
        let wrapper: web::HtmlElement = dom::create(document, "label")?;
        wrapper.set_class_name("slider-control");

        let title: web::HtmlElement = dom::create(document, "span")?;
        title.set_text_content(Some(spec.label));

        let range: web::HtmlInputElement = dom::create(document, "input")?;
        configure_input(&range, "range", spec, value);
        range.set_id(&slider_id(spec.id));

        let number: web::HtmlInputElement = dom::create(document, "input")?;
        configure_input(&number, "number", spec, value);
        number.set_id(&number_id(spec.id));

        let readout: web::HtmlElement = dom::create(document, "div")?;
        readout.set_class_name("slider-value");
        readout.set_id(&readout_id(spec.id));
        readout.set_text_content(Some(&spec.format_value(value)));

        let row: web::HtmlElement = dom::create(document, "div")?;
        row.set_class_name("slider-input-row");
        append(&row, &range);
        append(&row, &number);

        append(&wrapper, &title);
        append(&wrapper, &row);
        append(&wrapper, &readout);
        append(&container, &wrapper);
    }
    Ok(())
}

/// Mirror a stored value into both inputs and the readout.
pub fn sync_slider(document: &web::Document, spec: &ParamSpec, value: f32) {
    for id in [slider_id(spec.id), number_id(spec.id)] {
        if let Some(input) = dom::by_id::<web::HtmlInputElement>(document, &id) {
            input.set_value(&value.to_string());
        }
    }
    dom::set_text(document, &readout_id(spec.id), &spec.format_value(value));
}

pub fn refresh_header(document: &web::Document, session: &Session) {
    let p = session.principle();
    dom::set_text(document, VISUAL_TITLE_ID, p.name);
    dom::set_text(document, VISUAL_BADGE_ID, p.category.label());
}

pub fn refresh_practice(document: &web::Document, session: &mut Session) {
    let Some(view) = session.practice_state() else {
        dom::set_text(document, PRACTICE_PROMPT_ID, "No practice task for this topic.");
        dom::set_text(document, PRACTICE_STATUS_ID, "");
        dom::set_text(document, PRACTICE_VALUE_ID, "");
        return;
    };
    let circumference = 2.0 * std::f64::consts::PI * PRACTICE_RING_RADIUS;
    let offset = circumference * (1.0 - view.ratio as f64);
    if let Some(ring) = document.get_element_by_id(PRACTICE_RING_ID) {
        _ = ring.set_attribute(
            "style",
            &format!(
                "stroke-dasharray:{:.3};stroke-dashoffset:{:.3}",
                circumference, offset
            ),
        );
    }
    dom::set_text(document, PRACTICE_VALUE_ID, &format!("{}%", view.percent));
    dom::set_text(document, PRACTICE_PROMPT_ID, &view.prompt);
    dom::set_text(document, PRACTICE_STATUS_ID, &view.status);
    if let Some(status) = document.get_element_by_id(PRACTICE_STATUS_ID) {
        let color = if view.satisfied {
            STATUS_OK_COLOR
        } else {
            STATUS_PENDING_COLOR
        };
        _ = status.set_attribute("style", &format!("color:{}", color));
    }
}

/// Summary and formula panes, then the practice card.
pub fn refresh_info(document: &web::Document, session: &mut Session) {
    dom::set_html(document, SUMMARY_ID, &session.summary_html());
    dom::set_html(document, FORMULA_ID, &session.formula_html());
    refresh_practice(document, session);
}

pub fn refresh_sound_button(document: &web::Document, enabled: bool) {
    if let Some(button) = document.get_element_by_id(SOUND_BUTTON_ID) {
        button.set_text_content(Some(if enabled { "Sound on" } else { "Sound off" }));
        _ = button.class_list().toggle_with_force("active", enabled);
    }
}

/// Everything that depends on which principle is active.
pub fn refresh_all(document: &web::Document, session: &mut Session) {
    refresh_header(document, session);
    if let Err(e) = render_sliders(document, session) {
        log::error!("slider render error: {:?}", e);
    }
    highlight_navigation(document, session.active());
    refresh_info(document, session);
}
