//! Maps the engine's view state onto the two DOM shapes.
//!
//! The red shape moves by minus half the separation and the green shape by
//! plus half, so the pair stays centered on the crosshair.

use crate::constants::{GREEN_SHAPE_ID, RED_SHAPE_ID};
use vergence_core::{pure_green_color, pure_red_color, ViewState};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn shape_transform(offset_x: f64, offset_y: f64, scale: f64) -> String {
    format!(
        "translate(calc(-50% + {}px), calc(-50% + {}px)) scale({})",
        offset_x, offset_y, scale
    )
}

fn style_shape(document: &web::Document, id: &str, transform: &str, color: &str) {
    let Some(el) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let style = el.style();
    _ = style.set_property("transform", transform);
    // Shapes paint with `currentColor`.
    _ = style.set_property("color", color);
}

pub fn apply(document: &web::Document, view: &ViewState) {
    let half_h = view.horizontal_separation as f64 / 2.0;
    let half_v = view.vertical_separation as f64 / 2.0;
    let size = view.settings.object_size;
    style_shape(
        document,
        RED_SHAPE_ID,
        &shape_transform(-half_h, -half_v, size),
        &pure_red_color(view.settings.red_intensity),
    );
    style_shape(
        document,
        GREEN_SHAPE_ID,
        &shape_transform(half_h, half_v, size),
        &pure_green_color(view.settings.green_intensity),
    );
}
