use crate::constants::*;
use crate::dom;
use vergence_core::{instructions_lines, IntensityControlStyle, ViewState};
use web_sys as web;

/// Fill in the static part of the instructions panel.
pub fn init(document: &web::Document, title: &str, style: IntensityControlStyle) {
    dom::set_text(document, INSTRUCTIONS_TITLE_ID, title);
    let Some(list) = document.get_element_by_id(INSTRUCTIONS_KEYS_ID) else {
        return;
    };
    list.set_inner_html("");
    for (keys, action) in instructions_lines(style) {
        let Ok(row) = document.create_element("p") else {
            continue;
        };
        if let Ok(strong) = document.create_element("strong") {
            strong.set_text_content(Some(keys));
            _ = row.append_child(&strong);
        }
        _ = row.append_with_str_1(&format!(" {}", action));
        _ = list.append_child(&row);
    }
}

#[inline]
pub fn separation_text(view: &ViewState) -> String {
    format!(
        "H: {}px | V: {}px",
        view.horizontal_separation, view.vertical_separation
    )
}

#[inline]
pub fn settings_text(view: &ViewState) -> String {
    let s = &view.settings;
    format!(
        "Size: {:.1}x | Red: {}% | Green: {}%",
        s.object_size,
        (s.red_intensity * 100.0).round() as i32,
        (s.green_intensity * 100.0).round() as i32
    )
}

/// Update panel visibility and the live status lines.
pub fn update(document: &web::Document, view: &ViewState) {
    if let Some(panel) = document.get_element_by_id(INSTRUCTIONS_ID) {
        dom::set_hidden(&panel, !view.show_instructions);
    }
    if !view.show_instructions {
        return;
    }
    dom::set_text(document, SEPARATION_STATUS_ID, &separation_text(view));
    dom::set_text(document, SETTINGS_STATUS_ID, &settings_text(view));
    if let Some(badge) = document.get_element_by_id(FULLSCREEN_BADGE_ID) {
        dom::set_hidden(&badge, !view.is_fullscreen);
    }
}
