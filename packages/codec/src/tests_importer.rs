use lvforge_schema::registry::new_widget;
use lvforge_schema::widget::{TileDir, Widget, WidgetKind};

use crate::error::ImportError;
use crate::importer::deserialize;
use crate::serializer::{serialize, PageMeta};

fn placed(kind: WidgetKind, n: usize, x: i32, y: i32, z: i32) -> Widget {
    let mut widget = new_widget(format!("{}_{}", kind.as_tag(), n), kind, x, y);
    widget.z_index = z;
    widget
}

#[test]
fn test_basic_round_trip() {
    let mut button = placed(WidgetKind::Button, 1, 10, 20, 1);
    button.text = Some("Go".into());
    let yaml = serialize(&[button.clone()], &PageMeta::default());

    let outcome = deserialize(&yaml).unwrap();
    assert_eq!(outcome.widgets.len(), 1);
    assert_eq!(outcome.widgets[0], button);
    // button_1 ends in 1, so the next-id seed must move past it.
    assert_eq!(outcome.max_id_suffix, Some(1));
}

#[test]
fn test_round_trip_every_registered_kind() {
    let kinds = [
        WidgetKind::Arc,
        WidgetKind::Bar,
        WidgetKind::Button,
        WidgetKind::Buttonmatrix,
        WidgetKind::Checkbox,
        WidgetKind::Container,
        WidgetKind::Dropdown,
        WidgetKind::Keyboard,
        WidgetKind::Label,
        WidgetKind::Led,
        WidgetKind::Line,
        WidgetKind::Obj,
        WidgetKind::Qrcode,
        WidgetKind::Roller,
        WidgetKind::Slider,
        WidgetKind::Spinbox,
        WidgetKind::Spinner,
        WidgetKind::Switch,
        WidgetKind::Tabview,
        WidgetKind::Textarea,
        WidgetKind::Tileview,
    ];
    let forest: Vec<Widget> = kinds
        .iter()
        .enumerate()
        .map(|(i, &kind)| placed(kind, i + 1, i as i32 * 10, 5, i as i32 + 1))
        .collect();

    let yaml = serialize(&forest, &PageMeta::default());
    let outcome = deserialize(&yaml).unwrap();
    assert_eq!(outcome.widgets, forest);
}

#[test]
fn test_round_trip_nested_tab_widgets() {
    let mut tabview = placed(WidgetKind::Tabview, 1, 0, 0, 1);
    let mut label = placed(WidgetKind::Label, 2, 5, 5, 1);
    label.text = Some("inside".into());
    tabview.tabs[0].widgets.push(label);

    let yaml = serialize(&[tabview.clone()], &PageMeta::default());
    let outcome = deserialize(&yaml).unwrap();
    assert_eq!(outcome.widgets, vec![tabview]);
    assert_eq!(outcome.max_id_suffix, Some(2));
}

#[test]
fn test_round_trip_tile_widgets_and_directions() {
    let mut tileview = placed(WidgetKind::Tileview, 1, 0, 0, 1);
    tileview.tiles[1].dir = vec![TileDir::Left, TileDir::Right];
    tileview.tiles[2].dir = vec![TileDir::Hor];
    let mut slider = placed(WidgetKind::Slider, 7, 30, 40, 1);
    slider.value = Some(25.0);
    tileview.tiles[0].widgets.push(slider);

    let yaml = serialize(&[tileview.clone()], &PageMeta::default());
    let outcome = deserialize(&yaml).unwrap();
    assert_eq!(outcome.widgets, vec![tileview]);
    assert_eq!(outcome.max_id_suffix, Some(7));
}

#[test]
fn test_round_trip_container_children() {
    let mut container = placed(WidgetKind::Container, 1, 0, 0, 1);
    container.children.push(placed(WidgetKind::Led, 3, 2, 2, 1));
    container.children.push(placed(WidgetKind::Obj, 4, 8, 8, 2));

    let yaml = serialize(&[container.clone()], &PageMeta::default());
    let outcome = deserialize(&yaml).unwrap();
    assert_eq!(outcome.widgets, vec![container]);
}

#[test]
fn test_empty_document_round_trips() {
    let yaml = serialize(&[], &PageMeta::default());
    let outcome = deserialize(&yaml).unwrap();
    assert!(outcome.widgets.is_empty());
    assert_eq!(outcome.max_id_suffix, None);
}

#[test]
fn test_missing_pages_is_a_structural_error() {
    let err = deserialize("lvgl:\n  other: 1\n").unwrap_err();
    assert!(matches!(err, ImportError::Structure));
    assert_eq!(
        err.to_string(),
        "Invalid YAML structure. Expected lvgl -> pages -> widgets."
    );
}

#[test]
fn test_garbage_is_a_syntax_error() {
    let err = deserialize("lvgl: {unclosed").unwrap_err();
    match err {
        ImportError::Syntax(_) => {}
        other => panic!("expected a syntax error, got {:?}", other),
    }
    assert!(err.to_string().starts_with("Error parsing YAML: "));
}

#[test]
fn test_sparse_document_gets_defaults() {
    let yaml = "lvgl:\n  pages:\n    - id: main_page\n      widgets:\n        - slider:\n            id: slider_9\n            x: 1\n            y: 2\n";
    let outcome = deserialize(yaml).unwrap();
    let slider = &outcome.widgets[0];
    assert_eq!(slider.id, "slider_9");
    assert_eq!((slider.x, slider.y), (1, 2));
    // Unspecified fields fall back to the slider defaults.
    assert_eq!(slider.value, Some(50.0));
    assert_eq!(slider.min_value, Some(0));
    assert_eq!(slider.max_value, Some(100));
    assert_eq!(slider.width, Some(200));
    assert_eq!(outcome.max_id_suffix, Some(9));
}

#[test]
fn test_unknown_tags_are_skipped() {
    let yaml = "lvgl:\n  pages:\n    - id: main_page\n      widgets:\n        - hologram:\n            id: hologram_1\n        - label:\n            id: label_1\n            x: 0\n            y: 0\n";
    let outcome = deserialize(yaml).unwrap();
    assert_eq!(outcome.widgets.len(), 1);
    assert_eq!(outcome.widgets[0].kind, WidgetKind::Label);
    assert_eq!(outcome.widgets[0].z_index, 1);
}

#[test]
fn test_unquoted_hex_colors_parse_as_numbers() {
    // The YAML resolver reads bare 0x literals as integers; the importer
    // must fold them back into canonical color strings.
    let yaml = "lvgl:\n  pages:\n    - id: main_page\n      widgets:\n        - led:\n            id: led_1\n            x: 0\n            y: 0\n            color: 0xFF0000\n";
    let outcome = deserialize(yaml).unwrap();
    assert_eq!(outcome.widgets[0].color.as_deref(), Some("0xff0000"));
}

#[test]
fn test_suffixed_scalars_are_stripped() {
    let yaml = "lvgl:\n  pages:\n    - id: main_page\n      widgets:\n        - spinner:\n            id: spinner_1\n            x: 0\n            y: 0\n            spin_time: 1500ms\n            arc_length: 90deg\n            bg_opa: 40%\n";
    let outcome = deserialize(yaml).unwrap();
    let spinner = &outcome.widgets[0];
    assert_eq!(spinner.spin_time, Some(1500));
    assert_eq!(spinner.arc_length, Some(90));
    assert_eq!(spinner.bg_opa, Some(40));
}

#[test]
fn test_mode_key_is_kind_aware() {
    let yaml = "lvgl:\n  pages:\n    - id: main_page\n      widgets:\n        - arc:\n            id: arc_1\n            x: 0\n            y: 0\n            mode: REVERSE\n        - bar:\n            id: bar_1\n            x: 0\n            y: 0\n            mode: RANGE\n        - keyboard:\n            id: keyboard_1\n            x: 0\n            y: 0\n            mode: NUMBER\n";
    let outcome = deserialize(yaml).unwrap();
    assert_eq!(
        outcome.widgets[0].arc_mode,
        Some(lvforge_schema::ArcMode::Reverse)
    );
    assert_eq!(
        outcome.widgets[1].mode,
        Some(lvforge_schema::BarMode::Range)
    );
    assert_eq!(
        outcome.widgets[2].keyboard_mode,
        Some(lvforge_schema::KeyboardMode::Number)
    );
}

#[test]
fn test_max_suffix_covers_nested_ids() {
    let mut tabview = placed(WidgetKind::Tabview, 2, 0, 0, 1);
    tabview.tabs[0]
        .widgets
        .push(placed(WidgetKind::Button, 41, 0, 0, 1));
    let yaml = serialize(&[tabview], &PageMeta::default());
    let outcome = deserialize(&yaml).unwrap();
    assert_eq!(outcome.max_id_suffix, Some(41));
}
