//! # Tree Operations
//!
//! Recursive operations over a widget forest: lookup, deletion, dynamic
//! field mutation, and id regeneration. All of them descend through every
//! nesting level (tab forests, tile forests, container children) so callers
//! never need to know where in the tree a widget lives.
//!
//! Dynamic mutation (`set_field`) takes a JSON value because the property
//! panel speaks in untyped name/value pairs; the conversion into the typed
//! model happens here, including color canonicalization on write.

use lvforge_schema::color::normalize_hex;
use lvforge_schema::widget::{
    Align, ArcMode, BarMode, Direction, KeyboardMode, MatrixRow, PartStyle, Point, Tab, Tile,
    Widget,
};
use serde_json::Value;

/// Depth-first search across the root list, then every nested forest.
pub fn find<'a>(forest: &'a [Widget], id: &str) -> Option<&'a Widget> {
    for widget in forest {
        if widget.id == id {
            return Some(widget);
        }
        for sub in widget.child_forests() {
            if let Some(found) = find(sub, id) {
                return Some(found);
            }
        }
    }
    None
}

pub fn find_mut<'a>(forest: &'a mut [Widget], id: &str) -> Option<&'a mut Widget> {
    for widget in forest {
        if widget.id == id {
            return Some(widget);
        }
        for sub in widget.child_forests_mut() {
            if let Some(found) = find_mut(sub, id) {
                return Some(found);
            }
        }
    }
    None
}

pub fn contains_id(forest: &[Widget], id: &str) -> bool {
    find(forest, id).is_some()
}

/// Removes the first widget matching `id` at any nesting level.
/// Returns whether anything was removed.
pub fn delete_by_id(forest: &mut Vec<Widget>, id: &str) -> bool {
    if let Some(index) = forest.iter().position(|w| w.id == id) {
        forest.remove(index);
        return true;
    }
    for widget in forest.iter_mut() {
        for sub in widget.child_forests_mut() {
            if delete_by_id(sub, id) {
                return true;
            }
        }
    }
    false
}

/// Re-numbers root z-indices contiguously, 1-based, in sibling order.
pub fn renumber_z(forest: &mut [Widget]) {
    for (index, widget) in forest.iter_mut().enumerate() {
        widget.z_index = index as i32 + 1;
    }
}

/// Collects every id in the forest, nested levels included.
pub fn collect_ids(forest: &[Widget], out: &mut Vec<String>) {
    for widget in forest {
        out.push(widget.id.clone());
        for sub in widget.child_forests() {
            collect_ids(sub, out);
        }
    }
}

/// Deep clone with fresh ids for the widget and everything nested in it.
/// `next` is the shared id counter; each clone consumes one value.
pub fn regenerate_ids(widget: &Widget, next: &mut u32) -> Widget {
    let mut clone = widget.clone();
    clone.id = format!("{}_{}", clone.kind.as_tag(), *next);
    *next += 1;
    for tab in &mut clone.tabs {
        tab.widgets = tab
            .widgets
            .iter()
            .map(|child| regenerate_ids(child, next))
            .collect();
    }
    for tile in &mut clone.tiles {
        tile.widgets = tile
            .widgets
            .iter()
            .map(|child| regenerate_ids(child, next))
            .collect();
    }
    clone.children = clone
        .children
        .iter()
        .map(|child| regenerate_ids(child, next))
        .collect();
    clone
}

/// Mutates one named field in place from an untyped value.
///
/// Supports one level of dotted paths into the part-style sub-objects
/// (`indicator.`, `knob.`, `items.`), including their state blocks
/// (`indicator.pressed.arc_color`). Unknown fields are ignored.
pub fn set_field(widget: &mut Widget, field: &str, value: &Value) {
    if let Some(rest) = field.strip_prefix("indicator.") {
        set_style_field(widget.indicator.get_or_insert_with(PartStyle::default), rest, value);
        return;
    }
    if let Some(rest) = field.strip_prefix("knob.") {
        set_style_field(widget.knob.get_or_insert_with(PartStyle::default), rest, value);
        return;
    }
    if let Some(rest) = field.strip_prefix("items.") {
        set_style_field(widget.items.get_or_insert_with(PartStyle::default), rest, value);
        return;
    }

    match field {
        "x" => {
            if let Some(v) = as_i32(value) {
                widget.x = v;
            }
        }
        "y" => {
            if let Some(v) = as_i32(value) {
                widget.y = v;
            }
        }
        "width" => widget.width = as_i32(value),
        "height" => widget.height = as_i32(value),
        "text" => widget.text = as_string(value),
        "value" => widget.value = value.as_f64(),
        "min_value" => widget.min_value = as_i32(value),
        "max_value" => widget.max_value = as_i32(value),
        "align" => widget.align = value.as_str().and_then(Align::from_token),
        "checkable" => widget.checkable = value.as_bool(),
        "checked" => widget.checked = value.as_bool(),
        "text_color" => widget.text_color = as_color(value),
        "text_opa" => widget.text_opa = as_u8(value),
        "text_font" => widget.text_font = as_string(value),
        "text_line_space" => widget.text_line_space = as_i32(value),
        "bg_color" => widget.bg_color = as_color(value),
        "bg_opa" => widget.bg_opa = as_u8(value),
        "border_color" => widget.border_color = as_color(value),
        "border_width" => widget.border_width = as_i32(value),
        "radius" => widget.radius = as_i32(value),
        "shadow_width" => widget.shadow_width = as_i32(value),
        "shadow_color" => widget.shadow_color = as_color(value),
        "pad_all" => widget.pad_all = as_i32(value),
        "pad_row" => widget.pad_row = as_i32(value),
        "pad_column" => widget.pad_column = as_i32(value),
        "mode" => widget.mode = value.as_str().and_then(BarMode::from_token),
        "arc_mode" => widget.arc_mode = value.as_str().and_then(ArcMode::from_token),
        "keyboard_mode" => {
            widget.keyboard_mode = value.as_str().and_then(KeyboardMode::from_token)
        }
        "start_value" => widget.start_value = as_i32(value),
        "animated" => widget.animated = value.as_bool(),
        "anim_time" => widget.anim_time = value.as_u64().map(|v| v as u32),
        "rotation" => widget.rotation = as_i32(value),
        "adjustable" => widget.adjustable = value.as_bool(),
        "start_angle" => widget.start_angle = as_i32(value),
        "end_angle" => widget.end_angle = as_i32(value),
        "change_rate" => widget.change_rate = as_i32(value),
        "arc_color" => widget.arc_color = as_color(value),
        "arc_opa" => widget.arc_opa = as_u8(value),
        "arc_rounded" => widget.arc_rounded = value.as_bool(),
        "arc_width" => widget.arc_width = as_i32(value),
        "arc_length" => widget.arc_length = as_i32(value),
        "spin_time" => widget.spin_time = value.as_u64().map(|v| v as u32),
        "color" => widget.color = as_color(value),
        "brightness" => widget.brightness = as_u8(value),
        "size" => widget.size = as_i32(value),
        "qr_size" => widget.qr_size = as_i32(value),
        "light_color" => widget.light_color = as_color(value),
        "dark_color" => widget.dark_color = as_color(value),
        "points" => {
            widget.points = serde_json::from_value::<Vec<Point>>(value.clone()).ok();
        }
        "line_width" => widget.line_width = as_i32(value),
        "line_color" => widget.line_color = as_color(value),
        "line_rounded" => widget.line_rounded = value.as_bool(),
        "line_dash_width" => widget.line_dash_width = as_i32(value),
        "line_dash_gap" => widget.line_dash_gap = as_i32(value),
        "options" => {
            widget.options = serde_json::from_value::<Vec<String>>(value.clone()).ok();
        }
        "selected_index" => widget.selected_index = as_i32(value),
        "dir" => widget.dir = value.as_str().and_then(Direction::from_token),
        "symbol" => widget.symbol = as_string(value),
        "visible_row_count" => widget.visible_row_count = as_i32(value),
        "range_from" => widget.range_from = as_i32(value),
        "range_to" => widget.range_to = as_i32(value),
        "digits" => widget.digits = as_i32(value),
        "decimal_places" => widget.decimal_places = as_i32(value),
        "selected_digit" => widget.selected_digit = as_i32(value),
        "rollover" => widget.rollover = value.as_bool(),
        "placeholder_text" => widget.placeholder_text = as_string(value),
        "one_line" => widget.one_line = value.as_bool(),
        "password_mode" => widget.password_mode = value.as_bool(),
        "max_length" => widget.max_length = as_i32(value),
        "accepted_chars" => widget.accepted_chars = as_string(value),
        "textarea" => widget.textarea = as_string(value),
        "one_checked" => widget.one_checked = value.as_bool(),
        "rows" => {
            if let Ok(rows) = serde_json::from_value::<Vec<MatrixRow>>(value.clone()) {
                widget.rows = rows;
            }
        }
        "position" => widget.position = value.as_str().and_then(Direction::from_token),
        "spread_tabs" => widget.spread_tabs = value.as_bool(),
        "tabs" => {
            if let Ok(tabs) = serde_json::from_value::<Vec<Tab>>(value.clone()) {
                widget.tabs = tabs;
            }
        }
        "selectedTabIndex" | "selected_tab_index" => {
            widget.selected_tab_index = value.as_u64().map(|v| v as usize);
        }
        "tiles" => {
            if let Ok(tiles) = serde_json::from_value::<Vec<Tile>>(value.clone()) {
                widget.tiles = tiles;
            }
        }
        "current_tile_row" => widget.current_tile_row = as_i32(value),
        "current_tile_column" => widget.current_tile_column = as_i32(value),
        "obj_id" => widget.obj_id = as_string(value),
        _ => {}
    }
}

/// Mutates one field of a button-matrix cell; `control.` paths toggle the
/// named control flag. Out-of-range coordinates are ignored.
pub fn update_matrix_cell(widget: &mut Widget, row: usize, col: usize, field: &str, value: &Value) {
    let button = match widget.rows.get_mut(row).and_then(|r| r.buttons.get_mut(col)) {
        Some(button) => button,
        None => return,
    };
    if let Some(flag) = field.strip_prefix("control.") {
        let control = button.control.get_or_insert_with(Default::default);
        let set = value.as_bool().unwrap_or(false);
        match flag {
            "checkable" => control.checkable = set,
            "checked" => control.checked = set,
            "click_trig" => control.click_trig = set,
            "custom_1" => control.custom_1 = set,
            "custom_2" => control.custom_2 = set,
            "disabled" => control.disabled = set,
            "hidden" => control.hidden = set,
            "no_repeat" => control.no_repeat = set,
            "popover" => control.popover = set,
            "recolor" => control.recolor = set,
            _ => {}
        }
        return;
    }
    match field {
        "id" => {
            if let Some(id) = as_string(value) {
                button.id = id;
            }
        }
        "text" => button.text = as_string(value),
        "width" => button.width = as_i32(value),
        "key_code" => button.key_code = as_string(value),
        "selected" => button.selected = value.as_bool(),
        _ => {}
    }
}

fn set_style_field(style: &mut PartStyle, path: &str, value: &Value) {
    if let Some(rest) = path.strip_prefix("pressed.") {
        set_style_field(style.pressed.get_or_insert_with(Default::default), rest, value);
        return;
    }
    if let Some(rest) = path.strip_prefix("focused.") {
        set_style_field(style.focused.get_or_insert_with(Default::default), rest, value);
        return;
    }
    if let Some(rest) = path.strip_prefix("checked.") {
        set_style_field(style.checked.get_or_insert_with(Default::default), rest, value);
        return;
    }
    if let Some(rest) = path.strip_prefix("disabled.") {
        set_style_field(style.disabled.get_or_insert_with(Default::default), rest, value);
        return;
    }
    match path {
        "bg_color" => style.bg_color = as_color(value),
        "bg_opa" => style.bg_opa = as_u8(value),
        "text_color" => style.text_color = as_color(value),
        "arc_color" => style.arc_color = as_color(value),
        "arc_width" => style.arc_width = as_i32(value),
        "arc_opa" => style.arc_opa = as_u8(value),
        "arc_rounded" => style.arc_rounded = value.as_bool(),
        "border_color" => style.border_color = as_color(value),
        "border_width" => style.border_width = as_i32(value),
        "border_opa" => style.border_opa = as_u8(value),
        "radius" => style.radius = as_i32(value),
        "pad_all" => style.pad_all = as_i32(value),
        "pad_top" => style.pad_top = as_i32(value),
        "pad_bottom" => style.pad_bottom = as_i32(value),
        "pad_left" => style.pad_left = as_i32(value),
        "pad_right" => style.pad_right = as_i32(value),
        _ => {}
    }
}

fn as_i32(value: &Value) -> Option<i32> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.round() as i64))
        .map(|v| v as i32)
}

fn as_u8(value: &Value) -> Option<u8> {
    value.as_u64().map(|v| v.min(255) as u8)
}

fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_owned)
}

fn as_color(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(normalize_hex(s)),
        Value::Number(n) => n.as_u64().map(|v| format!("0x{:06x}", v & 0xffffff)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lvforge_schema::registry::new_widget;
    use lvforge_schema::widget::WidgetKind;
    use serde_json::json;

    fn sample_forest() -> Vec<Widget> {
        let mut tabview = new_widget("tabview_1", WidgetKind::Tabview, 0, 0);
        let label = new_widget("label_2", WidgetKind::Label, 5, 5);
        tabview.tabs[0].widgets.push(label);
        let button = new_widget("button_3", WidgetKind::Button, 10, 10);
        vec![tabview, button]
    }

    #[test]
    fn find_descends_into_tabs() {
        let forest = sample_forest();
        assert!(find(&forest, "label_2").is_some());
        assert!(find(&forest, "button_3").is_some());
        assert!(find(&forest, "ghost").is_none());
    }

    #[test]
    fn delete_removes_nested_widget_and_keeps_container() {
        let mut forest = sample_forest();
        assert!(delete_by_id(&mut forest, "label_2"));
        assert_eq!(forest.len(), 2);
        assert!(find(&forest, "label_2").is_none());
        assert!(forest[0].tabs[0].widgets.is_empty());
        // Second delete of the same id is a miss.
        assert!(!delete_by_id(&mut forest, "label_2"));
    }

    #[test]
    fn set_field_normalizes_colors() {
        let mut widget = new_widget("slider_1", WidgetKind::Slider, 0, 0);
        set_field(&mut widget, "bg_color", &json!("#A1B2C3"));
        assert_eq!(widget.bg_color.as_deref(), Some("0xa1b2c3"));
    }

    #[test]
    fn set_field_reaches_part_styles() {
        let mut widget = new_widget("arc_1", WidgetKind::Arc, 0, 0);
        set_field(&mut widget, "indicator.arc_color", &json!("0xFF00FF"));
        set_field(&mut widget, "indicator.pressed.arc_color", &json!("#00FF00"));
        let indicator = widget.indicator.as_ref().unwrap();
        assert_eq!(indicator.arc_color.as_deref(), Some("0xff00ff"));
        assert_eq!(
            indicator.pressed.as_ref().unwrap().arc_color.as_deref(),
            Some("0x00ff00")
        );
    }

    #[test]
    fn update_matrix_cell_sets_control_flags() {
        let mut matrix = new_widget("buttonmatrix_1", WidgetKind::Buttonmatrix, 0, 0);
        update_matrix_cell(&mut matrix, 1, 2, "text", &json!("OK"));
        update_matrix_cell(&mut matrix, 1, 2, "control.checkable", &json!(true));
        let button = &matrix.rows[1].buttons[2];
        assert_eq!(button.text.as_deref(), Some("OK"));
        assert!(button.control.as_ref().unwrap().checkable);
        // Out of range is ignored.
        update_matrix_cell(&mut matrix, 9, 9, "text", &json!("nope"));
    }

    #[test]
    fn regenerate_ids_renames_whole_subtree() {
        let forest = sample_forest();
        let mut next = 100;
        let clone = regenerate_ids(&forest[0], &mut next);
        assert_eq!(clone.id, "tabview_100");
        assert_eq!(clone.tabs[0].widgets[0].id, "label_101");
        assert_eq!(next, 102);
        // Source is untouched.
        assert_eq!(forest[0].id, "tabview_1");
    }
}
