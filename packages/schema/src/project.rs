//! Per-kind projection functions: widget attributes → YAML fragment.
//!
//! Each function receives a writer positioned at the widget's attribute
//! indent and emits only the fields that differ from the kind's documented
//! defaults (plus the always-required fields, e.g. the QR payload and size).
//! Container content (tabs/tiles/children) is emitted by the document
//! serializer after these fragments, never here.

use crate::color::{normalize_hex, normalize_hex_lambda};
use crate::emit::{fmt_num, YamlWriter};
use crate::widget::{ArcMode, BarMode, Direction, KeyboardMode, Widget};

fn kv_color(w: &mut YamlWriter, key: &str, value: &Option<String>) {
    if let Some(color) = value {
        w.kv(key, normalize_hex(color));
    }
}

fn kv_color_lambda(w: &mut YamlWriter, key: &str, value: &Option<String>) {
    if let Some(color) = value {
        w.kv(key, normalize_hex_lambda(color));
    }
}

pub fn project_button(widget: &Widget, w: &mut YamlWriter) {
    kv_color(w, "bg_color", &widget.bg_color);
    if widget.checkable == Some(true) {
        w.kv("checkable", true);
    }
    if widget.checked == Some(true) {
        w.key("state");
        w.indent();
        w.kv("checked", true);
        w.dedent();
    }
    // Button text renders as a nested child label.
    if let Some(text) = widget.text.as_deref().filter(|t| !t.trim().is_empty()) {
        w.key("widgets");
        w.indent();
        w.line("- label:");
        w.indent();
        w.indent();
        w.kv("align", widget.align.map_or("center", |a| a.as_token()));
        w.kv_quoted("text", text);
        kv_color(w, "text_color", &widget.text_color);
        w.dedent();
        w.dedent();
        w.dedent();
    }
}

pub fn project_label(widget: &Widget, w: &mut YamlWriter) {
    if let Some(text) = &widget.text {
        w.kv_quoted("text", text);
    }
    kv_color_lambda(w, "text_color", &widget.text_color);
    kv_color_lambda(w, "bg_color", &widget.bg_color);
}

pub fn project_slider(widget: &Widget, w: &mut YamlWriter) {
    if let Some(value) = widget.value {
        w.kv("value", fmt_num(value));
    }
    if let Some(min) = widget.min_value {
        w.kv("min_value", min);
    }
    if let Some(max) = widget.max_value {
        w.kv("max_value", max);
    }
    kv_color(w, "bg_color", &widget.bg_color);
}

pub fn project_bar(widget: &Widget, w: &mut YamlWriter) {
    if let Some(value) = widget.value {
        w.kv("value", fmt_num(value));
    }
    if let Some(min) = widget.min_value {
        w.kv("min_value", min);
    }
    if let Some(max) = widget.max_value {
        w.kv("max_value", max);
    }
    if let Some(mode) = widget.mode.filter(|m| *m != BarMode::Normal) {
        w.kv("mode", mode.as_token());
    }
    if widget.mode == Some(BarMode::Range) {
        if let Some(start) = widget.start_value {
            w.kv("start_value", start);
        }
    }
    if widget.animated == Some(false) {
        w.kv("animated", false);
    }
    if let Some(indicator) = &widget.indicator {
        w.key("indicator");
        w.indent();
        kv_color(w, "bg_color", &indicator.bg_color);
        if let Some(width) = indicator.border_width {
            w.kv("border_width", width);
        }
        kv_color(w, "border_color", &indicator.border_color);
        if let Some(radius) = indicator.radius {
            w.kv("radius", radius);
        }
        w.dedent();
    }
    kv_color(w, "bg_color", &widget.bg_color);
}

pub fn project_arc(widget: &Widget, w: &mut YamlWriter) {
    if let Some(value) = widget.value {
        w.kv("value", fmt_num(value));
    }
    if let Some(min) = widget.min_value {
        w.kv("min_value", min);
    }
    if let Some(max) = widget.max_value {
        w.kv("max_value", max);
    }
    if let Some(adjustable) = widget.adjustable {
        w.kv("adjustable", adjustable);
    }
    if let Some(angle) = widget.start_angle.filter(|a| *a != 135) {
        w.kv("start_angle", angle);
    }
    if let Some(angle) = widget.end_angle.filter(|a| *a != 45) {
        w.kv("end_angle", angle);
    }
    if let Some(rotation) = widget.rotation.filter(|r| *r != 0) {
        w.kv("rotation", rotation);
    }
    if let Some(mode) = widget.arc_mode.filter(|m| *m != ArcMode::Normal) {
        w.kv("mode", mode.as_token());
    }
    if let Some(rate) = widget.change_rate {
        w.kv("change_rate", rate);
    }
    kv_color_lambda(w, "arc_color", &widget.arc_color);
    if let Some(width) = widget.arc_width {
        w.kv("arc_width", width);
    }
    if let Some(opa) = widget.arc_opa {
        w.kv("arc_opa", opa);
    }
    if let Some(rounded) = widget.arc_rounded {
        w.kv("arc_rounded", rounded);
    }
    if let Some(indicator) = &widget.indicator {
        w.key("indicator");
        w.indent();
        kv_color_lambda(w, "arc_color", &indicator.arc_color);
        if let Some(width) = indicator.arc_width {
            w.kv("arc_width", width);
        }
        if let Some(opa) = indicator.arc_opa {
            w.kv("arc_opa", opa);
        }
        if let Some(rounded) = indicator.arc_rounded {
            w.kv("arc_rounded", rounded);
        }
        if let Some(pressed) = &indicator.pressed {
            if pressed.arc_color.is_some() {
                w.key("pressed");
                w.indent();
                kv_color_lambda(w, "arc_color", &pressed.arc_color);
                w.dedent();
            }
        }
        if let Some(focused) = &indicator.focused {
            if focused.arc_color.is_some() {
                w.key("focused");
                w.indent();
                kv_color_lambda(w, "arc_color", &focused.arc_color);
                w.dedent();
            }
        }
        w.dedent();
    }
    if let Some(knob) = &widget.knob {
        w.key("knob");
        w.indent();
        kv_color_lambda(w, "bg_color", &knob.bg_color);
        if let Some(radius) = knob.radius {
            w.kv("radius", radius);
        }
        w.dedent();
    }
}

pub fn project_dropdown(widget: &Widget, w: &mut YamlWriter) {
    if let Some(options) = widget.options.as_ref().filter(|o| !o.is_empty()) {
        w.key("options");
        w.indent();
        for option in options {
            w.line(format!("- \"{}\"", option));
        }
        w.dedent();
    }
    if let Some(index) = widget.selected_index {
        w.kv("selected_index", index);
    }
    if let Some(dir) = widget.dir.filter(|d| *d != Direction::Bottom) {
        w.kv("dir", dir.as_token());
    }
    if let Some(symbol) = &widget.symbol {
        w.kv_quoted("symbol", symbol);
    }
    kv_color(w, "bg_color", &widget.bg_color);
}

pub fn project_line(widget: &Widget, w: &mut YamlWriter) {
    if let Some(points) = widget.points.as_ref().filter(|p| !p.is_empty()) {
        w.key("points");
        w.indent();
        for point in points {
            w.line(format!("- {}, {}", point.x, point.y));
        }
        w.dedent();
    }
    if let Some(width) = widget.line_width.filter(|v| *v != 2) {
        w.kv("line_width", width);
    }
    kv_color(w, "line_color", &widget.line_color);
    if widget.line_rounded == Some(true) {
        w.kv("line_rounded", true);
    }
    if let Some(width) = widget.line_dash_width.filter(|v| *v > 0) {
        w.kv("line_dash_width", width);
    }
    if let Some(gap) = widget.line_dash_gap.filter(|v| *v > 0) {
        w.kv("line_dash_gap", gap);
    }
}

pub fn project_tabview(widget: &Widget, w: &mut YamlWriter) {
    if let Some(position) = widget.position.filter(|p| *p != Direction::Top) {
        w.kv("position", position.as_token());
    }
    if let Some(size) = widget.size.filter(|s| *s != 10) {
        w.line(format!("size: {}%", size));
    }
    if widget.spread_tabs == Some(true) {
        w.kv("spread_tabs", true);
    }
}

pub fn project_tileview(widget: &Widget, w: &mut YamlWriter) {
    if let Some(obj_id) = &widget.obj_id {
        w.kv("obj_id", obj_id);
    }
    kv_color(w, "bg_color", &widget.bg_color);
    if let Some(opa) = widget.bg_opa.filter(|o| *o != 100) {
        w.kv_percent("bg_opa", opa);
    }
    kv_color(w, "border_color", &widget.border_color);
    if let Some(width) = widget.border_width.filter(|v| *v > 0) {
        w.kv("border_width", width);
    }
    if let Some(radius) = widget.radius.filter(|v| *v > 0) {
        w.kv("radius", radius);
    }
    if let Some(pad) = widget.pad_all.filter(|v| *v > 0) {
        w.kv("pad_all", pad);
    }
}

pub fn project_buttonmatrix(widget: &Widget, w: &mut YamlWriter) {
    if widget.one_checked == Some(true) {
        w.kv("one_checked", true);
    }
    kv_color(w, "bg_color", &widget.bg_color);
    if let Some(pad) = widget.pad_row {
        w.kv("pad_row", pad);
    }
    if let Some(pad) = widget.pad_column {
        w.kv("pad_column", pad);
    }
    if let Some(items) = &widget.items {
        w.key("items");
        w.indent();
        kv_color(w, "bg_color", &items.bg_color);
        kv_color(w, "text_color", &items.text_color);
        for (state, style) in [
            ("pressed", &items.pressed),
            ("checked", &items.checked),
            ("disabled", &items.disabled),
        ] {
            if let Some(style) = style {
                if style.bg_color.is_some() {
                    w.key(state);
                    w.indent();
                    kv_color(w, "bg_color", &style.bg_color);
                    w.dedent();
                }
            }
        }
        w.dedent();
    }
    if !widget.rows.is_empty() {
        w.key("rows");
        w.indent();
        for row in &widget.rows {
            w.line("- buttons:");
            w.indent();
            w.indent();
            for button in &row.buttons {
                w.line(format!("- id: {}", button.id));
                w.indent();
                if let Some(text) = &button.text {
                    w.kv_quoted("text", text);
                }
                if let Some(width) = button.width.filter(|v| *v != 1) {
                    w.kv("width", width);
                }
                if let Some(key_code) = &button.key_code {
                    w.kv_quoted("key_code", key_code);
                }
                if button.selected == Some(true) {
                    w.kv("selected", true);
                }
                if let Some(control) = button.control.as_ref().filter(|c| c.any_set()) {
                    w.key("control");
                    w.indent();
                    for (flag, set) in [
                        ("checkable", control.checkable),
                        ("checked", control.checked),
                        ("click_trig", control.click_trig),
                        ("disabled", control.disabled),
                        ("hidden", control.hidden),
                        ("no_repeat", control.no_repeat),
                        ("popover", control.popover),
                        ("recolor", control.recolor),
                        ("custom_1", control.custom_1),
                        ("custom_2", control.custom_2),
                    ] {
                        if set {
                            w.kv(flag, true);
                        }
                    }
                    w.dedent();
                }
                w.dedent();
            }
            w.dedent();
            w.dedent();
        }
        w.dedent();
    }
}

pub fn project_checkbox(widget: &Widget, w: &mut YamlWriter) {
    if let Some(text) = &widget.text {
        w.kv_quoted("text", text);
    }
    if let Some(checked) = widget.checked {
        w.key("state");
        w.indent();
        w.kv("checked", checked);
        w.dedent();
    }
    if let Some(pad) = widget.pad_column {
        w.kv("pad_column", pad);
    }
    kv_color(w, "text_color", &widget.text_color);
    if let Some(opa) = widget.text_opa {
        w.kv_percent("text_opa", opa);
    }
    if let Some(font) = &widget.text_font {
        w.kv("text_font", font);
    }
    if let Some(indicator) = &widget.indicator {
        if !indicator.is_empty() {
            w.key("indicator");
            w.indent();
            kv_color(w, "bg_color", &indicator.bg_color);
            if let Some(opa) = indicator.bg_opa {
                w.kv_percent("bg_opa", opa);
            }
            kv_color(w, "border_color", &indicator.border_color);
            if let Some(width) = indicator.border_width {
                w.kv("border_width", width);
            }
            if let Some(opa) = indicator.border_opa {
                w.kv_percent("border_opa", opa);
            }
            if let Some(radius) = indicator.radius {
                w.kv("radius", radius);
            }
            // pad_all wins over per-side padding when both are set.
            if let Some(pad) = indicator.pad_all {
                w.kv("pad_all", pad);
            } else {
                if let Some(pad) = indicator.pad_top {
                    w.kv("pad_top", pad);
                }
                if let Some(pad) = indicator.pad_bottom {
                    w.kv("pad_bottom", pad);
                }
                if let Some(pad) = indicator.pad_left {
                    w.kv("pad_left", pad);
                }
                if let Some(pad) = indicator.pad_right {
                    w.kv("pad_right", pad);
                }
            }
            w.dedent();
        }
    }
}

pub fn project_keyboard(widget: &Widget, w: &mut YamlWriter) {
    if let Some(textarea) = &widget.textarea {
        w.kv("textarea", textarea);
    }
    if let Some(mode) = widget.keyboard_mode.filter(|m| *m != KeyboardMode::TextLower) {
        w.kv("mode", mode.as_token());
    }
}

pub fn project_led(widget: &Widget, w: &mut YamlWriter) {
    kv_color(w, "color", &widget.color);
    if let Some(brightness) = widget.brightness.filter(|b| *b != 100) {
        w.kv_percent("brightness", brightness);
    }
    kv_color(w, "bg_color", &widget.bg_color);
    if let Some(width) = widget.border_width {
        w.kv("border_width", width);
    }
    kv_color(w, "border_color", &widget.border_color);
    if let Some(radius) = widget.radius {
        w.kv("radius", radius);
    }
    if let Some(width) = widget.shadow_width {
        w.kv("shadow_width", width);
    }
    kv_color(w, "shadow_color", &widget.shadow_color);
}

pub fn project_obj(widget: &Widget, w: &mut YamlWriter) {
    kv_color_lambda(w, "bg_color", &widget.bg_color);
    kv_color_lambda(w, "border_color", &widget.border_color);
    if let Some(width) = widget.border_width {
        w.kv("border_width", width);
    }
    if let Some(radius) = widget.radius {
        w.kv("radius", radius);
    }
}

pub fn project_qrcode(widget: &Widget, w: &mut YamlWriter) {
    if let Some(text) = &widget.text {
        w.kv_quoted("text", text);
    }
    // Payload size is always required downstream.
    w.kv("size", widget.qr_size.unwrap_or(100));
    if let Some(light) = widget.light_color.as_ref().filter(|c| !is_white(c)) {
        w.kv("light_color", normalize_hex(light));
    }
    if let Some(dark) = widget.dark_color.as_ref().filter(|c| !is_black(c)) {
        w.kv("dark_color", normalize_hex(dark));
    }
    kv_color(w, "bg_color", &widget.bg_color);
    if let Some(width) = widget.border_width.filter(|v| *v > 0) {
        w.kv("border_width", width);
    }
    kv_color(w, "border_color", &widget.border_color);
    if let Some(radius) = widget.radius {
        w.kv("radius", radius);
    }
    if let Some(pad) = widget.pad_all.filter(|v| *v > 0) {
        w.kv("pad_all", pad);
    }
}

pub fn project_roller(widget: &Widget, w: &mut YamlWriter) {
    if let Some(options) = widget.options.as_ref().filter(|o| !o.is_empty()) {
        w.key("options");
        w.indent();
        for option in options {
            w.line(format!("- {}", option));
        }
        w.dedent();
    }
    if let Some(index) = widget.selected_index.filter(|i| *i != 0) {
        w.kv("selected_index", index);
    }
    if let Some(mode) = widget.mode.filter(|m| *m != BarMode::Normal) {
        w.kv("mode", mode.as_token());
    }
    if let Some(rows) = widget.visible_row_count.filter(|v| *v != 3) {
        w.kv("visible_row_count", rows);
    }
    if let Some(time) = widget.anim_time {
        w.line(format!("anim_time: {}ms", time));
    }
    kv_color(w, "text_color", &widget.text_color);
    if let Some(space) = widget.text_line_space {
        w.kv("text_line_space", space);
    }
    kv_color(w, "bg_color", &widget.bg_color);
    if let Some(width) = widget.border_width {
        w.kv("border_width", width);
    }
    kv_color(w, "border_color", &widget.border_color);
    if let Some(radius) = widget.radius {
        w.kv("radius", radius);
    }
}

pub fn project_spinbox(widget: &Widget, w: &mut YamlWriter) {
    if let Some(value) = widget.value.filter(|v| *v != 0.0) {
        w.kv("value", fmt_num(value));
    }
    if let Some(from) = widget.range_from.filter(|v| *v != 0) {
        w.kv("range_from", from);
    }
    if let Some(to) = widget.range_to.filter(|v| *v != 100) {
        w.kv("range_to", to);
    }
    if let Some(digits) = widget.digits.filter(|v| *v != 4) {
        w.kv("digits", digits);
    }
    if let Some(places) = widget.decimal_places.filter(|v| *v != 0) {
        w.kv("decimal_places", places);
    }
    if let Some(digit) = widget.selected_digit.filter(|v| *v != 0) {
        w.kv("selected_digit", digit);
    }
    if widget.rollover == Some(true) {
        w.kv("rollover", true);
    }
    if let Some(time) = widget.anim_time {
        w.line(format!("anim_time: {}ms", time));
    }
    kv_color(w, "text_color", &widget.text_color);
    kv_color(w, "bg_color", &widget.bg_color);
    if let Some(width) = widget.border_width {
        w.kv("border_width", width);
    }
    kv_color(w, "border_color", &widget.border_color);
    if let Some(radius) = widget.radius {
        w.kv("radius", radius);
    }
}

pub fn project_spinner(widget: &Widget, w: &mut YamlWriter) {
    w.line(format!("spin_time: {}ms", widget.spin_time.unwrap_or(1000)));
    w.line(format!("arc_length: {}deg", widget.arc_length.unwrap_or(60)));
    if let Some(width) = widget.arc_width.filter(|v| *v != 8) {
        w.kv("arc_width", width);
    }
    kv_color(w, "arc_color", &widget.arc_color);
    if let Some(opa) = widget.arc_opa.filter(|o| *o != 100) {
        w.kv_percent("arc_opa", opa);
    }
    if widget.arc_rounded == Some(true) {
        w.kv("arc_rounded", true);
    }
    kv_color(w, "bg_color", &widget.bg_color);
    if let Some(opa) = widget.bg_opa.filter(|o| *o != 100) {
        w.kv_percent("bg_opa", opa);
    }
    if let Some(indicator) = &widget.indicator {
        let has_styles = indicator.arc_color.is_some()
            || indicator.arc_opa.is_some()
            || indicator.arc_width.is_some();
        if has_styles {
            w.key("indicator");
            w.indent();
            kv_color(w, "arc_color", &indicator.arc_color);
            if let Some(opa) = indicator.arc_opa {
                w.kv_percent("arc_opa", opa);
            }
            if let Some(width) = indicator.arc_width {
                w.kv("arc_width", width);
            }
            w.dedent();
        }
    }
}

pub fn project_switch(widget: &Widget, w: &mut YamlWriter) {
    if widget.checked == Some(true) {
        w.key("state");
        w.indent();
        w.kv("checked", true);
        w.dedent();
    }
    kv_color(w, "bg_color", &widget.bg_color);
    if let Some(opa) = widget.bg_opa.filter(|o| *o != 100) {
        w.kv_percent("bg_opa", opa);
    }
    if let Some(width) = widget.border_width.filter(|v| *v > 0) {
        w.kv("border_width", width);
    }
    kv_color(w, "border_color", &widget.border_color);
    if let Some(radius) = widget.radius {
        w.kv("radius", radius);
    }
    if let Some(indicator) = &widget.indicator {
        if indicator.bg_color.is_some() || indicator.bg_opa.is_some() {
            w.key("indicator");
            w.indent();
            kv_color(w, "bg_color", &indicator.bg_color);
            if let Some(opa) = indicator.bg_opa {
                w.kv_percent("bg_opa", opa);
            }
            w.dedent();
        }
    }
    if let Some(knob) = &widget.knob {
        if knob.bg_color.is_some() || knob.radius.is_some() {
            w.key("knob");
            w.indent();
            kv_color(w, "bg_color", &knob.bg_color);
            if let Some(radius) = knob.radius {
                w.kv("radius", radius);
            }
            w.dedent();
        }
    }
}

pub fn project_textarea(widget: &Widget, w: &mut YamlWriter) {
    if let Some(text) = widget.text.as_deref().filter(|t| !t.is_empty()) {
        w.kv_quoted("text", text);
    }
    if let Some(placeholder) = widget.placeholder_text.as_deref().filter(|t| !t.is_empty()) {
        w.kv_quoted("placeholder_text", placeholder);
    }
    if widget.one_line == Some(true) {
        w.kv("one_line", true);
    }
    if widget.password_mode == Some(true) {
        w.kv("password_mode", true);
    }
    if let Some(max) = widget.max_length {
        w.kv("max_length", max);
    }
    if let Some(chars) = &widget.accepted_chars {
        w.kv_quoted("accepted_chars", chars);
    }
    kv_color(w, "text_color", &widget.text_color);
    kv_color(w, "bg_color", &widget.bg_color);
    if let Some(opa) = widget.bg_opa.filter(|o| *o != 100) {
        w.kv_percent("bg_opa", opa);
    }
    if let Some(width) = widget.border_width.filter(|v| *v > 0) {
        w.kv("border_width", width);
    }
    kv_color(w, "border_color", &widget.border_color);
    if let Some(radius) = widget.radius {
        w.kv("radius", radius);
    }
    if let Some(pad) = widget.pad_all.filter(|v| *v > 0) {
        w.kv("pad_all", pad);
    }
}

pub fn project_container(widget: &Widget, w: &mut YamlWriter) {
    kv_color(w, "bg_color", &widget.bg_color);
    if let Some(opa) = widget.bg_opa.filter(|o| *o != 100) {
        w.kv_percent("bg_opa", opa);
    }
    kv_color(w, "border_color", &widget.border_color);
    if let Some(width) = widget.border_width.filter(|v| *v > 0) {
        w.kv("border_width", width);
    }
    if let Some(radius) = widget.radius.filter(|v| *v > 0) {
        w.kv("radius", radius);
    }
    if let Some(pad) = widget.pad_all.filter(|v| *v > 0) {
        w.kv("pad_all", pad);
    }
}

/// Minimal projection for kinds without a registry entry: text and value only.
pub fn project_generic(widget: &Widget, w: &mut YamlWriter) {
    if let Some(text) = &widget.text {
        w.kv_quoted("text", text);
    }
    if let Some(value) = widget.value {
        w.kv("value", fmt_num(value));
    }
}

fn is_white(color: &str) -> bool {
    matches!(normalize_hex(color).as_str(), "0xffffff")
}

fn is_black(color: &str) -> bool {
    matches!(normalize_hex(color).as_str(), "0x000000")
}
