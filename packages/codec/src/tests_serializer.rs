use lvforge_schema::registry::new_widget;
use lvforge_schema::widget::{Tile, TileDir, Widget, WidgetKind};

use crate::serializer::{serialize, PageMeta};

#[test]
fn test_empty_forest_emits_placeholder() {
    let yaml = serialize(&[], &PageMeta::default());
    let expected =
        "lvgl:\n  pages:\n    - id: main_page\n      widgets:\n        # No widgets placed yet\n";
    assert_eq!(yaml, expected);
}

#[test]
fn test_button_document_shape() {
    let mut button = new_widget("button_1", WidgetKind::Button, 10, 20);
    button.text = Some("Go".into());
    let yaml = serialize(&[button], &PageMeta::default());

    assert!(yaml.contains("        - button:\n"));
    assert!(yaml.contains("            id: button_1\n"));
    assert!(yaml.contains("            x: 10\n"));
    assert!(yaml.contains("            y: 20\n"));
    assert!(yaml.contains("            width: 100\n"));
    assert!(yaml.contains("            height: 40\n"));
    // Button text renders as a nested label child.
    assert!(yaml.contains("            widgets:\n"));
    assert!(yaml.contains("              - label:\n"));
    assert!(yaml.contains("                  align: center\n"));
    assert!(yaml.contains("                  text: \"Go\"\n"));
}

#[test]
fn test_page_meta_keys() {
    let meta = PageMeta {
        flags: vec!["CLICKABLE".into(), "SCROLLABLE".into()],
        bg_color: Some("#112233".into()),
        bg_opa: Some(80),
        pad_all: Some(4),
    };
    let yaml = serialize(&[], &meta);
    assert!(yaml.contains("      flags: [CLICKABLE, SCROLLABLE]\n"));
    assert!(yaml.contains("      bg_color: 0x112233\n"));
    assert!(yaml.contains("      bg_opa: 80%\n"));
    assert!(yaml.contains("      pad_all: 4\n"));
}

#[test]
fn test_page_meta_pad_all_zero_is_omitted() {
    let meta = PageMeta {
        pad_all: Some(0),
        ..PageMeta::default()
    };
    let yaml = serialize(&[], &meta);
    assert!(!yaml.contains("pad_all"));
}

#[test]
fn test_colors_normalize_to_lowercase_hex() {
    let mut slider = new_widget("slider_1", WidgetKind::Slider, 0, 0);
    slider.bg_color = Some("#FF8800".into());
    let yaml = serialize(&[slider], &PageMeta::default());
    assert!(yaml.contains("bg_color: 0xff8800\n"));
}

#[test]
fn test_defaults_stay_off_the_wire() {
    let arc = new_widget("arc_1", WidgetKind::Arc, 0, 0);
    let yaml = serialize(&[arc], &PageMeta::default());
    // 135/45/0/NORMAL are the documented arc defaults.
    assert!(!yaml.contains("start_angle"));
    assert!(!yaml.contains("end_angle"));
    assert!(!yaml.contains("rotation"));
    assert!(!yaml.contains("mode"));
    assert!(yaml.contains("value: 50\n"));
    assert!(yaml.contains("adjustable: true\n"));
}

#[test]
fn test_non_default_arc_fields_are_emitted() {
    let mut arc = new_widget("arc_1", WidgetKind::Arc, 0, 0);
    arc.start_angle = Some(90);
    arc.rotation = Some(180);
    let yaml = serialize(&[arc], &PageMeta::default());
    assert!(yaml.contains("start_angle: 90\n"));
    assert!(yaml.contains("rotation: 180\n"));
}

#[test]
fn test_tabview_emits_tabs_after_attributes() {
    let mut tabview = new_widget("tabview_1", WidgetKind::Tabview, 0, 0);
    let label = new_widget("label_1", WidgetKind::Label, 5, 5);
    tabview.tabs[0].widgets.push(label);
    let yaml = serialize(&[tabview], &PageMeta::default());

    assert!(yaml.contains("            tabs:\n"));
    assert!(yaml.contains("              - name: \"Tab 1\"\n"));
    assert!(yaml.contains("                widgets:\n"));
    assert!(yaml.contains("                  - label:\n"));
    assert!(yaml.contains("                      id: label_1\n"));
    // Tabs come after the widget's own attributes.
    let tabs_at = yaml.find("tabs:").unwrap();
    let id_at = yaml.find("id: tabview_1").unwrap();
    assert!(id_at < tabs_at);
}

#[test]
fn test_tileview_tile_dir_forms() {
    let mut tileview = new_widget("tileview_1", WidgetKind::Tileview, 0, 0);
    tileview.tiles = vec![
        Tile::at(0, 0),
        Tile {
            dir: vec![TileDir::Left],
            ..Tile::at(0, 1)
        },
        Tile {
            dir: vec![TileDir::Top, TileDir::Bottom],
            ..Tile::at(1, 0)
        },
    ];
    let yaml = serialize(&[tileview], &PageMeta::default());

    // ALL is implicit; a single direction is a scalar; several are a list.
    let tile_0_0 = yaml.find("- id: tile_0_0").unwrap();
    let tile_0_1 = yaml.find("- id: tile_0_1").unwrap();
    assert!(!yaml[tile_0_0..tile_0_1].contains("dir"));
    assert!(yaml.contains("                dir: LEFT\n"));
    assert!(yaml.contains("                dir:\n"));
    assert!(yaml.contains("                  - TOP\n"));
    assert!(yaml.contains("                  - BOTTOM\n"));
}

#[test]
fn test_container_children_recurse() {
    let mut container = new_widget("container_1", WidgetKind::Container, 0, 0);
    let mut inner = new_widget("container_2", WidgetKind::Container, 10, 10);
    inner.children.push(new_widget("led_1", WidgetKind::Led, 1, 2));
    container.children.push(inner);
    let yaml = serialize(&[container], &PageMeta::default());

    assert!(yaml.contains("        - container:\n"));
    assert!(yaml.contains("              - container:\n"));
    assert!(yaml.contains("                    - led:\n"));
    assert!(yaml.contains("color: 0xff0000\n"));
}

#[test]
fn test_sibling_order_is_preserved() {
    let widgets: Vec<Widget> = ["a", "b", "c"]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut w = new_widget(format!("label_{}", name), WidgetKind::Label, i as i32, 0);
            w.text = Some(name.to_string());
            w
        })
        .collect();
    let yaml = serialize(&widgets, &PageMeta::default());
    let a = yaml.find("label_a").unwrap();
    let b = yaml.find("label_b").unwrap();
    let c = yaml.find("label_c").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn test_spinner_always_emits_timing() {
    let spinner = new_widget("spinner_1", WidgetKind::Spinner, 0, 0);
    let yaml = serialize(&[spinner], &PageMeta::default());
    assert!(yaml.contains("spin_time: 1000ms\n"));
    assert!(yaml.contains("arc_length: 60deg\n"));
    assert!(yaml.contains("arc_color: 0x818cf8\n"));
}

#[test]
fn test_qrcode_always_emits_payload_and_size() {
    let qr = new_widget("qrcode_1", WidgetKind::Qrcode, 0, 0);
    let yaml = serialize(&[qr], &PageMeta::default());
    assert!(yaml.contains("text: \"esphome.io\"\n"));
    assert!(yaml.contains("size: 100\n"));
    // White light / black dark are the defaults and stay off the wire.
    assert!(!yaml.contains("light_color"));
    assert!(!yaml.contains("dark_color"));
}
