//! LVGL YAML document → widget forest.
//!
//! Parsing is two-phase: serde_yaml produces a dynamic `Value`, then the
//! walker locates `lvgl -> pages[0] -> widgets` and rebuilds each entry
//! bottom-up, children before parents. Every widget starts from its kind's
//! registry defaults and parsed attributes are overlaid on top, so a sparse
//! document still materializes a fully-populated model.

use lvforge_schema::color::normalize_hex;
use lvforge_schema::registry::new_widget;
use lvforge_schema::widget::{
    Align, ArcMode, BarMode, Direction, KeyboardMode, LayoutKind, MatrixButton, MatrixControl,
    MatrixRow, PartStyle, Point, Tab, Tile, TileDir, TileLayout, Widget, WidgetKind,
};
use serde_yaml::Value;

use crate::error::{ImportError, ImportResult};

/// Result of a successful import.
#[derive(Debug)]
pub struct ImportOutcome {
    pub widgets: Vec<Widget>,
    /// Largest numeric suffix seen across all parsed ids (after the final
    /// `_`), used to reseed the caller's id counter past existing ids.
    pub max_id_suffix: Option<u32>,
}

/// Parses a full document and rebuilds the widget forest.
pub fn deserialize(text: &str) -> ImportResult<ImportOutcome> {
    let doc: Value = serde_yaml::from_str(text)?;
    let widgets = doc
        .get("lvgl")
        .and_then(|v| v.get("pages"))
        .and_then(|v| v.get(0))
        .and_then(|v| v.get("widgets"))
        .ok_or(ImportError::Structure)?;
    let entries = match widgets {
        // `widgets:` with no entries round-trips an empty canvas.
        Value::Null => return Ok(ImportOutcome { widgets: Vec::new(), max_id_suffix: None }),
        Value::Sequence(entries) => entries,
        _ => return Err(ImportError::Structure),
    };

    let mut ctx = ParseCtx::default();
    let forest = parse_forest(entries, &mut ctx);
    Ok(ImportOutcome {
        widgets: forest,
        max_id_suffix: ctx.max_suffix,
    })
}

#[derive(Default)]
struct ParseCtx {
    max_suffix: Option<u32>,
    anon: u32,
}

impl ParseCtx {
    fn record_id(&mut self, id: &str) {
        if let Some((_, suffix)) = id.rsplit_once('_') {
            if let Ok(n) = suffix.parse::<u32>() {
                self.max_suffix = Some(self.max_suffix.map_or(n, |m| m.max(n)));
            }
        }
    }

    fn fresh_id(&mut self, tag: &str) -> String {
        self.anon += 1;
        format!("{}_imported_{}", tag, self.anon)
    }
}

fn parse_forest(entries: &[Value], ctx: &mut ParseCtx) -> Vec<Widget> {
    let mut forest = Vec::new();
    for entry in entries {
        if let Some(mut widget) = parse_widget(entry, ctx) {
            widget.z_index = forest.len() as i32 + 1;
            forest.push(widget);
        }
    }
    forest
}

/// Rebuilds one `- kind: {attrs}` entry; unknown tags are skipped.
fn parse_widget(entry: &Value, ctx: &mut ParseCtx) -> Option<Widget> {
    let mapping = entry.as_mapping()?;
    let (tag_value, props) = mapping.iter().next()?;
    let tag = tag_value.as_str()?;
    let kind = WidgetKind::from_tag(tag)?;
    let props = props.as_mapping()?;

    let id = props
        .get("id")
        .and_then(str_of)
        .unwrap_or_else(|| ctx.fresh_id(tag));
    ctx.record_id(&id);
    let x = props.get("x").and_then(int_of).unwrap_or(0) as i32;
    let y = props.get("y").and_then(int_of).unwrap_or(0) as i32;

    let mut widget = new_widget(id, kind, x, y);
    for (key, value) in props {
        let key = match key.as_str() {
            Some(key) => key,
            None => continue,
        };
        apply_attr(&mut widget, key, value, ctx);
    }
    Some(widget)
}

fn apply_attr(widget: &mut Widget, key: &str, value: &Value, ctx: &mut ParseCtx) {
    match key {
        "id" | "x" | "y" => {}
        "width" => widget.width = int_of(value).map(|v| v as i32),
        "height" => widget.height = int_of(value).map(|v| v as i32),
        "text" => widget.text = str_of(value),
        "value" => widget.value = value.as_f64(),
        "min_value" => widget.min_value = int_of(value).map(|v| v as i32),
        "max_value" => widget.max_value = int_of(value).map(|v| v as i32),
        "align" => widget.align = value.as_str().and_then(Align::from_token),
        "checkable" => widget.checkable = value.as_bool(),
        "state" => {
            if let Some(checked) = value.get("checked").and_then(Value::as_bool) {
                widget.checked = Some(checked);
            }
        }
        "text_color" => widget.text_color = color_of(value),
        "text_opa" => widget.text_opa = percent_of(value),
        "text_font" => widget.text_font = str_of(value),
        "text_line_space" => widget.text_line_space = int_of(value).map(|v| v as i32),
        "bg_color" => widget.bg_color = color_of(value),
        "bg_opa" => widget.bg_opa = percent_of(value),
        "border_color" => widget.border_color = color_of(value),
        "border_width" => widget.border_width = int_of(value).map(|v| v as i32),
        "radius" => widget.radius = int_of(value).map(|v| v as i32),
        "shadow_width" => widget.shadow_width = int_of(value).map(|v| v as i32),
        "shadow_color" => widget.shadow_color = color_of(value),
        "pad_all" => widget.pad_all = int_of(value).map(|v| v as i32),
        "pad_row" => widget.pad_row = int_of(value).map(|v| v as i32),
        "pad_column" => widget.pad_column = int_of(value).map(|v| v as i32),
        // `mode` is kind-overloaded on the wire.
        "mode" => match widget.kind {
            WidgetKind::Arc => widget.arc_mode = value.as_str().and_then(ArcMode::from_token),
            WidgetKind::Keyboard => {
                widget.keyboard_mode = value.as_str().and_then(KeyboardMode::from_token)
            }
            _ => widget.mode = value.as_str().and_then(BarMode::from_token),
        },
        "start_value" => widget.start_value = int_of(value).map(|v| v as i32),
        "animated" => widget.animated = value.as_bool(),
        "anim_time" => widget.anim_time = suffixed_int(value, "ms").map(|v| v as u32),
        "rotation" => widget.rotation = int_of(value).map(|v| v as i32),
        "adjustable" => widget.adjustable = value.as_bool(),
        "start_angle" => widget.start_angle = int_of(value).map(|v| v as i32),
        "end_angle" => widget.end_angle = int_of(value).map(|v| v as i32),
        "change_rate" => widget.change_rate = int_of(value).map(|v| v as i32),
        "arc_color" => widget.arc_color = color_of(value),
        "arc_opa" => widget.arc_opa = percent_of(value),
        "arc_rounded" => widget.arc_rounded = value.as_bool(),
        "arc_width" => widget.arc_width = int_of(value).map(|v| v as i32),
        "arc_length" => widget.arc_length = suffixed_int(value, "deg").map(|v| v as i32),
        "spin_time" => widget.spin_time = suffixed_int(value, "ms").map(|v| v as u32),
        "indicator" => widget.indicator = parse_part_style(value),
        "knob" => widget.knob = parse_part_style(value),
        "items" => widget.items = parse_part_style(value),
        "color" => widget.color = color_of(value),
        "brightness" => widget.brightness = percent_of(value),
        // `size` is the QR payload size for qrcode, the tab bar size for tabview.
        "size" => match widget.kind {
            WidgetKind::Qrcode => widget.qr_size = int_of(value).map(|v| v as i32),
            _ => widget.size = percent_of(value).map(|v| v as i32),
        },
        "light_color" => widget.light_color = color_of(value),
        "dark_color" => widget.dark_color = color_of(value),
        "points" => widget.points = parse_points(value),
        "line_width" => widget.line_width = int_of(value).map(|v| v as i32),
        "line_color" => widget.line_color = color_of(value),
        "line_rounded" => widget.line_rounded = value.as_bool(),
        "line_dash_width" => widget.line_dash_width = int_of(value).map(|v| v as i32),
        "line_dash_gap" => widget.line_dash_gap = int_of(value).map(|v| v as i32),
        "options" => {
            widget.options = value
                .as_sequence()
                .map(|seq| seq.iter().filter_map(str_of).collect())
        }
        "selected_index" => widget.selected_index = int_of(value).map(|v| v as i32),
        "dir" => widget.dir = value.as_str().and_then(Direction::from_token),
        "symbol" => widget.symbol = str_of(value),
        "visible_row_count" => widget.visible_row_count = int_of(value).map(|v| v as i32),
        "range_from" => widget.range_from = int_of(value).map(|v| v as i32),
        "range_to" => widget.range_to = int_of(value).map(|v| v as i32),
        "digits" => widget.digits = int_of(value).map(|v| v as i32),
        "decimal_places" => widget.decimal_places = int_of(value).map(|v| v as i32),
        "selected_digit" => widget.selected_digit = int_of(value).map(|v| v as i32),
        "rollover" => widget.rollover = value.as_bool(),
        "placeholder_text" => widget.placeholder_text = str_of(value),
        "one_line" => widget.one_line = value.as_bool(),
        "password_mode" => widget.password_mode = value.as_bool(),
        "max_length" => widget.max_length = int_of(value).map(|v| v as i32),
        "accepted_chars" => widget.accepted_chars = str_of(value),
        "textarea" => widget.textarea = str_of(value),
        "one_checked" => widget.one_checked = value.as_bool(),
        "rows" => widget.rows = parse_rows(value),
        "position" => widget.position = value.as_str().and_then(Direction::from_token),
        "spread_tabs" => widget.spread_tabs = value.as_bool(),
        "tabs" => widget.tabs = parse_tabs(value, ctx),
        "tiles" => widget.tiles = parse_tiles(value, ctx),
        "obj_id" => widget.obj_id = str_of(value),
        "widgets" => match widget.kind {
            // A button's nested label carries its caption.
            WidgetKind::Button => absorb_button_label(widget, value),
            WidgetKind::Container => {
                if let Some(entries) = value.as_sequence() {
                    widget.children = parse_forest(entries, ctx);
                }
            }
            _ => {}
        },
        _ => {}
    }
}

fn absorb_button_label(widget: &mut Widget, value: &Value) {
    let label = value
        .get(0)
        .and_then(|entry| entry.get("label"))
        .and_then(Value::as_mapping);
    if let Some(label) = label {
        if let Some(text) = label.get("text").and_then(str_of) {
            widget.text = Some(text);
        }
        if let Some(align) = label.get("align").and_then(Value::as_str) {
            widget.align = Align::from_token(align);
        }
        if let Some(color) = label.get("text_color").and_then(color_of) {
            widget.text_color = Some(color);
        }
    }
}

fn parse_tabs(value: &Value, ctx: &mut ParseCtx) -> Vec<Tab> {
    let entries = match value.as_sequence() {
        Some(entries) => entries,
        None => return Vec::new(),
    };
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| Tab {
            id: format!("tab{}", i + 1),
            name: entry
                .get("name")
                .and_then(str_of)
                .unwrap_or_else(|| format!("Tab {}", i + 1)),
            widgets: entry
                .get("widgets")
                .and_then(Value::as_sequence)
                .map(|seq| parse_forest(seq, ctx))
                .unwrap_or_default(),
        })
        .collect()
}

fn parse_tiles(value: &Value, ctx: &mut ParseCtx) -> Vec<Tile> {
    let entries = match value.as_sequence() {
        Some(entries) => entries,
        None => return Vec::new(),
    };
    entries
        .iter()
        .map(|entry| {
            let row = entry.get("row").and_then(int_of).unwrap_or(0) as i32;
            let column = entry.get("column").and_then(int_of).unwrap_or(0) as i32;
            Tile {
                id: entry
                    .get("id")
                    .and_then(str_of)
                    .unwrap_or_else(|| format!("tile_{}_{}", row, column)),
                row,
                column,
                dir: parse_tile_dir(entry.get("dir")),
                label: Some(format!("Tile {},{}", row, column)),
                layout: entry.get("layout").and_then(parse_layout),
                widgets: entry
                    .get("widgets")
                    .and_then(Value::as_sequence)
                    .map(|seq| parse_forest(seq, ctx))
                    .unwrap_or_default(),
            }
        })
        .collect()
}

fn parse_tile_dir(value: Option<&Value>) -> Vec<TileDir> {
    match value {
        Some(Value::String(token)) => TileDir::from_token(token)
            .map(|d| vec![d])
            .unwrap_or_else(|| vec![TileDir::All]),
        Some(Value::Sequence(tokens)) => {
            let dirs: Vec<TileDir> = tokens
                .iter()
                .filter_map(Value::as_str)
                .filter_map(TileDir::from_token)
                .collect();
            if dirs.is_empty() {
                vec![TileDir::All]
            } else {
                dirs
            }
        }
        _ => vec![TileDir::All],
    }
}

fn parse_layout(value: &Value) -> Option<TileLayout> {
    let mapping = value.as_mapping()?;
    let layout = TileLayout {
        kind: mapping
            .get("type")
            .and_then(Value::as_str)
            .and_then(LayoutKind::from_token),
        flex_flow: mapping.get("flex_flow").and_then(str_of),
        flex_align_main: mapping.get("flex_align_main").and_then(str_of),
        flex_align_cross: mapping.get("flex_align_cross").and_then(str_of),
        pad_row: mapping.get("pad_row").and_then(int_of).map(|v| v as i32),
        pad_column: mapping.get("pad_column").and_then(int_of).map(|v| v as i32),
    };
    layout.kind.map(|_| layout)
}

fn parse_rows(value: &Value) -> Vec<MatrixRow> {
    let entries = match value.as_sequence() {
        Some(entries) => entries,
        None => return Vec::new(),
    };
    entries
        .iter()
        .map(|entry| MatrixRow {
            buttons: entry
                .get("buttons")
                .and_then(Value::as_sequence)
                .map(|buttons| buttons.iter().filter_map(parse_matrix_button).collect())
                .unwrap_or_default(),
        })
        .collect()
}

fn parse_matrix_button(value: &Value) -> Option<MatrixButton> {
    let mapping = value.as_mapping()?;
    Some(MatrixButton {
        id: mapping.get("id").and_then(str_of)?,
        text: mapping.get("text").and_then(str_of),
        width: Some(mapping.get("width").and_then(int_of).unwrap_or(1) as i32),
        key_code: mapping.get("key_code").and_then(str_of),
        selected: mapping.get("selected").and_then(Value::as_bool),
        control: mapping.get("control").and_then(parse_control),
    })
}

fn parse_control(value: &Value) -> Option<MatrixControl> {
    let mapping = value.as_mapping()?;
    let flag = |name: &str| mapping.get(name).and_then(Value::as_bool).unwrap_or(false);
    let control = MatrixControl {
        checkable: flag("checkable"),
        checked: flag("checked"),
        click_trig: flag("click_trig"),
        custom_1: flag("custom_1"),
        custom_2: flag("custom_2"),
        disabled: flag("disabled"),
        hidden: flag("hidden"),
        no_repeat: flag("no_repeat"),
        popover: flag("popover"),
        recolor: flag("recolor"),
    };
    control.any_set().then_some(control)
}

fn parse_part_style(value: &Value) -> Option<PartStyle> {
    let mapping = value.as_mapping()?;
    let style = PartStyle {
        bg_color: mapping.get("bg_color").and_then(color_of),
        bg_opa: mapping.get("bg_opa").and_then(percent_of),
        text_color: mapping.get("text_color").and_then(color_of),
        arc_color: mapping.get("arc_color").and_then(color_of),
        arc_width: mapping.get("arc_width").and_then(int_of).map(|v| v as i32),
        arc_opa: mapping.get("arc_opa").and_then(percent_of),
        arc_rounded: mapping.get("arc_rounded").and_then(Value::as_bool),
        border_color: mapping.get("border_color").and_then(color_of),
        border_width: mapping
            .get("border_width")
            .and_then(int_of)
            .map(|v| v as i32),
        border_opa: mapping.get("border_opa").and_then(percent_of),
        radius: mapping.get("radius").and_then(int_of).map(|v| v as i32),
        pad_all: mapping.get("pad_all").and_then(int_of).map(|v| v as i32),
        pad_top: mapping.get("pad_top").and_then(int_of).map(|v| v as i32),
        pad_bottom: mapping
            .get("pad_bottom")
            .and_then(int_of)
            .map(|v| v as i32),
        pad_left: mapping.get("pad_left").and_then(int_of).map(|v| v as i32),
        pad_right: mapping.get("pad_right").and_then(int_of).map(|v| v as i32),
        pressed: mapping
            .get("pressed")
            .and_then(parse_part_style)
            .map(Box::new),
        focused: mapping
            .get("focused")
            .and_then(parse_part_style)
            .map(Box::new),
        checked: mapping
            .get("checked")
            .and_then(parse_part_style)
            .map(Box::new),
        disabled: mapping
            .get("disabled")
            .and_then(parse_part_style)
            .map(Box::new),
    };
    (!style.is_empty()).then_some(style)
}

fn parse_points(value: &Value) -> Option<Vec<Point>> {
    let entries = value.as_sequence()?;
    let points = entries
        .iter()
        .filter_map(|entry| match entry {
            // Serialized form: `- 12, 34`.
            Value::String(pair) => {
                let (x, y) = pair.split_once(',')?;
                Some(Point {
                    x: x.trim().parse().ok()?,
                    y: y.trim().parse().ok()?,
                })
            }
            Value::Sequence(pair) if pair.len() == 2 => Some(Point {
                x: int_of(&pair[0])? as i32,
                y: int_of(&pair[1])? as i32,
            }),
            _ => None,
        })
        .collect();
    Some(points)
}

fn str_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn int_of(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.round() as i64))
}

/// Colors may arrive as `0x` strings, `#` strings, or bare integers (the
/// YAML resolver turns unquoted hex into numbers).
fn color_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(normalize_hex(s)),
        Value::Number(n) => n.as_u64().map(|v| format!("0x{:06x}", v & 0xffffff)),
        _ => None,
    }
}

fn percent_of(value: &Value) -> Option<u8> {
    match value {
        Value::String(s) => s.trim_end_matches('%').trim().parse().ok(),
        Value::Number(n) => n.as_u64().map(|v| v.min(255) as u8),
        _ => None,
    }
}

/// Accepts both `300` and `300ms` style scalars.
fn suffixed_int(value: &Value, suffix: &str) -> Option<i64> {
    match value {
        Value::String(s) => s.trim_end_matches(suffix).trim().parse().ok(),
        _ => int_of(value),
    }
}
