//! Widget registry: one strategy entry per supported kind.
//!
//! Every entry bundles the factory defaults applied when a widget of that
//! kind is placed, the projection used when serializing it, and an optional
//! validator run before export. Kinds without an entry fall back to a
//! generic projection that carries only `text` and `value`.

use crate::emit::YamlWriter;
use crate::project;
use crate::widget::{
    Direction, KeyboardMode, MatrixButton, MatrixRow, Point, Tab, Tile, TileDir, Widget,
    WidgetKind,
};

/// Strategy entry for one widget kind.
pub struct WidgetSpec {
    /// Fills kind-specific factory defaults on a freshly placed widget.
    pub defaults: fn(&mut Widget),
    /// Emits the kind-specific YAML fragment at the current indent.
    pub project: fn(&Widget, &mut YamlWriter),
    /// Returns a human-readable problem description, or `None` when valid.
    pub validate: Option<fn(&Widget) -> Option<String>>,
}

/// Looks up the registry entry for `kind`, if one is registered.
pub fn spec_for(kind: WidgetKind) -> Option<&'static WidgetSpec> {
    match kind {
        WidgetKind::Arc => Some(&ARC),
        WidgetKind::Bar => Some(&BAR),
        WidgetKind::Button => Some(&BUTTON),
        WidgetKind::Buttonmatrix => Some(&BUTTONMATRIX),
        WidgetKind::Checkbox => Some(&CHECKBOX),
        WidgetKind::Container => Some(&CONTAINER),
        WidgetKind::Dropdown => Some(&DROPDOWN),
        WidgetKind::Keyboard => Some(&KEYBOARD),
        WidgetKind::Label => Some(&LABEL),
        WidgetKind::Led => Some(&LED),
        WidgetKind::Line => Some(&LINE),
        WidgetKind::Obj => Some(&OBJ),
        WidgetKind::Qrcode => Some(&QRCODE),
        WidgetKind::Roller => Some(&ROLLER),
        WidgetKind::Slider => Some(&SLIDER),
        WidgetKind::Spinbox => Some(&SPINBOX),
        WidgetKind::Spinner => Some(&SPINNER),
        WidgetKind::Switch => Some(&SWITCH),
        WidgetKind::Tabview => Some(&TABVIEW),
        WidgetKind::Textarea => Some(&TEXTAREA),
        WidgetKind::Tileview => Some(&TILEVIEW),
        _ => None,
    }
}

/// Creates a widget of `kind` at `(x, y)` with its registered defaults.
pub fn new_widget(id: impl Into<String>, kind: WidgetKind, x: i32, y: i32) -> Widget {
    let mut widget = Widget::new(id, kind, x, y);
    match spec_for(kind) {
        Some(spec) => (spec.defaults)(&mut widget),
        None => {
            widget.width = Some(100);
            widget.height = Some(30);
        }
    }
    widget
}

/// Emits the kind-specific fragment of `widget` through its registry entry.
pub fn project_widget(widget: &Widget, w: &mut YamlWriter) {
    match spec_for(widget.kind) {
        Some(spec) => (spec.project)(widget, w),
        None => project::project_generic(widget, w),
    }
}

/// Runs the registered validator, if any.
pub fn validate_widget(widget: &Widget) -> Option<String> {
    spec_for(widget.kind)
        .and_then(|spec| spec.validate)
        .and_then(|validate| validate(widget))
}

static ARC: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(150);
        w.height = Some(150);
        w.value = Some(50.0);
        w.min_value = Some(0);
        w.max_value = Some(100);
        w.start_angle = Some(135);
        w.end_angle = Some(45);
        w.rotation = Some(0);
        w.adjustable = Some(true);
        w.arc_mode = Some(crate::widget::ArcMode::Normal);
    },
    project: project::project_arc,
    validate: Some(|w| {
        let start = w.start_angle.unwrap_or(135);
        let end = w.end_angle.unwrap_or(45);
        if !(0..=360).contains(&start) || !(0..=360).contains(&end) {
            return Some("arc angles must be between 0 and 360".into());
        }
        None
    }),
};

static BAR: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(200);
        w.height = Some(30);
        w.value = Some(0.0);
        w.min_value = Some(0);
        w.max_value = Some(100);
        w.mode = Some(crate::widget::BarMode::Normal);
        w.animated = Some(true);
    },
    project: project::project_bar,
    validate: Some(range_validator),
};

static BUTTON: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.text = Some("Button".into());
        w.width = Some(100);
        w.height = Some(40);
        w.checkable = Some(false);
        w.align = Some(crate::widget::Align::Center);
    },
    project: project::project_button,
    validate: None,
};

static BUTTONMATRIX: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(220);
        w.height = Some(120);
        w.one_checked = Some(false);
        w.rows = (0..2)
            .map(|row| MatrixRow {
                buttons: (0..3)
                    .map(|col| {
                        let n = row * 3 + col + 1;
                        MatrixButton::new(format!("btn_{}", n), format!("Btn {}", n))
                    })
                    .collect(),
            })
            .collect();
    },
    project: project::project_buttonmatrix,
    validate: Some(|w| {
        if w.rows.is_empty() || w.rows.iter().all(|r| r.buttons.is_empty()) {
            return Some("button matrix needs at least one button".into());
        }
        for row in &w.rows {
            for button in &row.buttons {
                if button.id.trim().is_empty() {
                    return Some("every matrix button needs an id".into());
                }
            }
        }
        None
    }),
};

static CHECKBOX: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.text = Some("Checkbox".into());
        w.checked = Some(false);
        w.pad_column = Some(10);
    },
    project: project::project_checkbox,
    validate: Some(|w| {
        if w.text.as_deref().map_or(true, |t| t.trim().is_empty()) {
            return Some("checkbox text must not be empty".into());
        }
        None
    }),
};

static CONTAINER: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(200);
        w.height = Some(150);
    },
    project: project::project_container,
    validate: None,
};

static DROPDOWN: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(150);
        w.height = Some(40);
        w.options = Some(vec![
            "Option 1".into(),
            "Option 2".into(),
            "Option 3".into(),
        ]);
        w.selected_index = Some(0);
        w.dir = Some(Direction::Bottom);
    },
    project: project::project_dropdown,
    validate: Some(options_validator),
};

static KEYBOARD: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(300);
        w.height = Some(120);
        w.keyboard_mode = Some(KeyboardMode::TextLower);
    },
    project: project::project_keyboard,
    validate: None,
};

static LABEL: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.text = Some("Label".into());
        w.width = Some(100);
        w.height = Some(30);
        w.text_color = Some("0xffffff".into());
    },
    project: project::project_label,
    validate: None,
};

static LED: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(40);
        w.height = Some(40);
        w.color = Some("0xff0000".into());
        w.brightness = Some(100);
    },
    project: project::project_led,
    validate: Some(|w| {
        if w.brightness.is_some_and(|b| b > 100) {
            return Some("led brightness must be between 0 and 100".into());
        }
        None
    }),
};

static LINE: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(200);
        w.height = Some(100);
        w.points = Some(vec![
            Point { x: 0, y: 0 },
            Point { x: 100, y: 50 },
            Point { x: 200, y: 0 },
        ]);
        w.line_width = Some(2);
        w.line_color = Some("0xffffff".into());
        w.line_rounded = Some(false);
    },
    project: project::project_line,
    validate: Some(|w| {
        if w.points.as_ref().map_or(0, Vec::len) < 2 {
            return Some("a line needs at least two points".into());
        }
        None
    }),
};

static OBJ: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(100);
        w.height = Some(100);
        w.bg_color = Some("0x4f46e5".into());
        w.border_color = Some("0x4b5563".into());
        w.border_width = Some(1);
        w.radius = Some(8);
    },
    project: project::project_obj,
    validate: None,
};

static QRCODE: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(120);
        w.height = Some(120);
        w.text = Some("esphome.io".into());
        w.qr_size = Some(100);
        w.light_color = Some("0xffffff".into());
        w.dark_color = Some("0x000000".into());
    },
    project: project::project_qrcode,
    validate: Some(|w| {
        if w.text.as_deref().map_or(true, str::is_empty) {
            return Some("qr code payload must not be empty".into());
        }
        if w.qr_size.is_some_and(|s| s < 50) {
            return Some("qr code size must be at least 50".into());
        }
        None
    }),
};

static ROLLER: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(120);
        w.height = Some(150);
        w.options = Some((1..=5).map(|n| format!("Option {}", n)).collect());
        w.selected_index = Some(0);
        w.mode = Some(crate::widget::BarMode::Normal);
        w.visible_row_count = Some(3);
    },
    project: project::project_roller,
    validate: Some(options_validator),
};

static SLIDER: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(200);
        w.height = Some(20);
        w.value = Some(50.0);
        w.min_value = Some(0);
        w.max_value = Some(100);
    },
    project: project::project_slider,
    validate: Some(range_validator),
};

static SPINBOX: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(120);
        w.height = Some(40);
        w.value = Some(0.0);
        w.range_from = Some(0);
        w.range_to = Some(100);
        w.digits = Some(4);
        w.decimal_places = Some(0);
        w.selected_digit = Some(0);
        w.rollover = Some(false);
    },
    project: project::project_spinbox,
    validate: Some(|w| {
        let from = w.range_from.unwrap_or(0);
        let to = w.range_to.unwrap_or(100);
        if from >= to {
            return Some("spinbox range_from must be below range_to".into());
        }
        if let Some(value) = w.value {
            if value < from as f64 || value > to as f64 {
                return Some("spinbox value is outside its range".into());
            }
        }
        let digits = w.digits.unwrap_or(4);
        if w.selected_digit.is_some_and(|d| d >= digits) {
            return Some("spinbox selected_digit must be below digits".into());
        }
        None
    }),
};

static SPINNER: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(60);
        w.height = Some(60);
        w.spin_time = Some(1000);
        w.arc_length = Some(60);
        w.arc_width = Some(8);
        w.arc_color = Some("0x818cf8".into());
        w.arc_rounded = Some(false);
    },
    project: project::project_spinner,
    validate: Some(|w| {
        if w.spin_time == Some(0) {
            return Some("spinner spin_time must be positive".into());
        }
        if w.arc_length.is_some_and(|l| !(0..=360).contains(&l)) {
            return Some("spinner arc_length must be between 0 and 360".into());
        }
        None
    }),
};

static SWITCH: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(60);
        w.height = Some(30);
        w.checked = Some(false);
    },
    project: project::project_switch,
    validate: None,
};

static TABVIEW: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(300);
        w.height = Some(200);
        w.position = Some(Direction::Top);
        w.size = Some(10);
        w.spread_tabs = Some(false);
        w.tabs = vec![Tab {
            id: "tab1".into(),
            name: "Tab 1".into(),
            widgets: Vec::new(),
        }];
        w.selected_tab_index = Some(0);
    },
    project: project::project_tabview,
    validate: Some(|w| {
        if w.tabs.is_empty() {
            return Some("a tabview needs at least one tab".into());
        }
        if w.tabs.iter().any(|t| t.name.trim().is_empty()) {
            return Some("every tab needs a name".into());
        }
        None
    }),
};

static TEXTAREA: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(200);
        w.height = Some(100);
        w.text = Some(String::new());
        w.placeholder_text = Some("Enter text here".into());
        w.one_line = Some(false);
        w.password_mode = Some(false);
    },
    project: project::project_textarea,
    validate: Some(|w| {
        if w.max_length.is_some_and(|m| m < 1) {
            return Some("textarea max_length must be at least 1".into());
        }
        None
    }),
};

static TILEVIEW: WidgetSpec = WidgetSpec {
    defaults: |w| {
        w.width = Some(300);
        w.height = Some(250);
        w.bg_color = Some("0x1e293b".into());
        w.bg_opa = Some(100);
        w.tiles = (0..2)
            .flat_map(|row| (0..2).map(move |col| Tile::at(row, col)))
            .collect();
        w.current_tile_row = Some(0);
        w.current_tile_column = Some(0);
    },
    project: project::project_tileview,
    validate: Some(|w| {
        if w.tiles.is_empty() {
            return Some("a tileview needs at least one tile".into());
        }
        let mut seen_ids = Vec::new();
        let mut seen_slots = Vec::new();
        for tile in &w.tiles {
            if tile.id.trim().is_empty() {
                return Some("every tile needs an id".into());
            }
            if seen_ids.contains(&tile.id.as_str()) {
                return Some(format!("duplicate tile id `{}`", tile.id));
            }
            seen_ids.push(tile.id.as_str());
            if tile.row < 0 || tile.column < 0 {
                return Some("tile row and column must not be negative".into());
            }
            let slot = (tile.row, tile.column);
            if seen_slots.contains(&slot) {
                return Some(format!(
                    "two tiles share position ({}, {})",
                    tile.row, tile.column
                ));
            }
            seen_slots.push(slot);
            if tile.dir.is_empty() {
                return Some(format!("tile `{}` allows no swipe direction", tile.id));
            }
            if tile.dir.len() > 1 && tile.dir.contains(&TileDir::All) {
                return Some(format!(
                    "tile `{}` mixes ALL with specific directions",
                    tile.id
                ));
            }
        }
        None
    }),
};

fn range_validator(w: &Widget) -> Option<String> {
    let min = w.min_value.unwrap_or(0);
    let max = w.max_value.unwrap_or(100);
    if min >= max {
        return Some("min_value must be below max_value".into());
    }
    if let Some(value) = w.value {
        if value < min as f64 || value > max as f64 {
            return Some("value is outside the min/max range".into());
        }
    }
    None
}

fn options_validator(w: &Widget) -> Option<String> {
    let options = w.options.as_deref().unwrap_or_default();
    if options.is_empty() {
        return Some("at least one option is required".into());
    }
    let count = options.len() as i32;
    if w.selected_index.is_some_and(|i| i < 0 || i >= count) {
        return Some("selected_index points past the option list".into());
    }
    None
}
