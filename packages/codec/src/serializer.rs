//! Widget forest → LVGL YAML document.
//!
//! Output is deterministic and indentation-exact: one page, canvas style
//! keys, then the widget list. Container content (tabs, tiles, plain
//! children) is emitted after the container's own attributes and recurses
//! with the same per-widget rendering, so nesting depth and sibling order
//! in the document mirror the live tree.

use lvforge_schema::emit::YamlWriter;
use lvforge_schema::registry::project_widget;
use lvforge_schema::widget::{TileDir, Widget, WidgetKind};

/// Canvas-level style keys rendered into the page header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    pub flags: Vec<String>,
    pub bg_color: Option<String>,
    pub bg_opa: Option<u8>,
    pub pad_all: Option<i32>,
}

/// Renders `forest` as a complete single-page document.
pub fn serialize(forest: &[Widget], meta: &PageMeta) -> String {
    let mut w = YamlWriter::new();
    w.line("lvgl:");
    w.indent();
    w.line("pages:");
    w.indent();
    w.line("- id: main_page");
    w.indent();
    if !meta.flags.is_empty() {
        w.line(format!("flags: [{}]", meta.flags.join(", ")));
    }
    if let Some(color) = &meta.bg_color {
        w.kv("bg_color", lvforge_schema::normalize_hex(color));
    }
    if let Some(opa) = meta.bg_opa {
        w.kv_percent("bg_opa", opa);
    }
    if let Some(pad) = meta.pad_all.filter(|p| *p > 0) {
        w.kv("pad_all", pad);
    }
    w.key("widgets");
    if forest.is_empty() {
        w.indent();
        w.line("# No widgets placed yet");
        w.dedent();
    } else {
        w.indent();
        for widget in forest {
            write_widget(widget, &mut w);
        }
        w.dedent();
    }
    w.dedent();
    w.dedent();
    w.dedent();
    w.finish()
}

/// Emits one widget item (`- kind:` plus its attribute block) at the
/// writer's current level.
fn write_widget(widget: &Widget, w: &mut YamlWriter) {
    w.line(format!("- {}:", widget.kind.as_tag()));
    w.indent();
    w.indent();
    w.kv("id", &widget.id);
    w.kv("x", widget.x);
    w.kv("y", widget.y);
    if let Some(width) = widget.width {
        w.kv("width", width);
    }
    if let Some(height) = widget.height {
        w.kv("height", height);
    }
    project_widget(widget, w);
    match widget.kind {
        WidgetKind::Tabview => write_tabs(widget, w),
        WidgetKind::Tileview => write_tiles(widget, w),
        WidgetKind::Container => write_children(widget, w),
        _ => {}
    }
    w.dedent();
    w.dedent();
}

fn write_tabs(widget: &Widget, w: &mut YamlWriter) {
    if widget.tabs.is_empty() {
        return;
    }
    w.key("tabs");
    w.indent();
    for tab in &widget.tabs {
        w.line(format!("- name: {}", quote(&tab.name)));
        if !tab.widgets.is_empty() {
            w.indent();
            w.key("widgets");
            w.indent();
            for child in &tab.widgets {
                write_widget(child, w);
            }
            w.dedent();
            w.dedent();
        }
    }
    w.dedent();
}

fn write_tiles(widget: &Widget, w: &mut YamlWriter) {
    if widget.tiles.is_empty() {
        return;
    }
    w.key("tiles");
    w.indent();
    for tile in &widget.tiles {
        w.line(format!("- id: {}", tile.id));
        w.indent();
        w.kv("row", tile.row);
        w.kv("column", tile.column);
        // ALL is the implicit default and stays off the wire.
        let is_all = tile.dir.len() == 1 && tile.dir[0] == TileDir::All;
        if !tile.dir.is_empty() && !is_all {
            if tile.dir.len() == 1 {
                w.kv("dir", tile.dir[0].as_token());
            } else {
                w.key("dir");
                w.indent();
                for dir in &tile.dir {
                    w.line(format!("- {}", dir.as_token()));
                }
                w.dedent();
            }
        }
        if let Some(layout) = &tile.layout {
            if let Some(kind) = layout.kind {
                w.key("layout");
                w.indent();
                w.kv("type", kind.as_token());
                if kind == lvforge_schema::LayoutKind::Flex {
                    if let Some(flow) = &layout.flex_flow {
                        w.kv("flex_flow", flow);
                    }
                    if let Some(align) = &layout.flex_align_main {
                        w.kv("flex_align_main", align);
                    }
                    if let Some(align) = &layout.flex_align_cross {
                        w.kv("flex_align_cross", align);
                    }
                }
                if let Some(pad) = layout.pad_row {
                    w.kv("pad_row", pad);
                }
                if let Some(pad) = layout.pad_column {
                    w.kv("pad_column", pad);
                }
                w.dedent();
            }
        }
        if !tile.widgets.is_empty() {
            w.key("widgets");
            w.indent();
            for child in &tile.widgets {
                write_widget(child, w);
            }
            w.dedent();
        }
        w.dedent();
    }
    w.dedent();
}

fn write_children(widget: &Widget, w: &mut YamlWriter) {
    if widget.children.is_empty() {
        return;
    }
    w.key("widgets");
    w.indent();
    for child in &widget.children {
        write_widget(child, w);
    }
    w.dedent();
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
