//! Integration tests for the designer store

use lvforge_editor::{
    DesignerStore, EditorError, ImportError, MoveDirection, WidgetKind, HISTORY_CAP,
};
use serde_json::json;

#[test]
fn test_basic_round_trip_through_store() {
    let mut store = DesignerStore::new();
    let id = store.create(WidgetKind::Button, Some(10), Some(20), None);
    store.update_field(&id, "text", &json!("Go"));
    let yaml = store.serialize_active();

    let mut fresh = DesignerStore::new();
    fresh.import(&yaml).unwrap();
    let widgets = &fresh.active_canvas().widgets;
    assert_eq!(widgets.len(), 1);
    assert_eq!(widgets[0].kind, WidgetKind::Button);
    assert_eq!((widgets[0].x, widgets[0].y), (10, 20));
    assert_eq!(widgets[0].text.as_deref(), Some("Go"));

    // The importing store's id counter moves past the imported suffix.
    let next = fresh.create(WidgetKind::Button, Some(0), Some(0), None);
    assert_ne!(next, id);
}

#[test]
fn test_nested_delete_keeps_container() {
    let mut store = DesignerStore::new();
    let tabview = store.create(WidgetKind::Tabview, Some(0), Some(0), None);
    let label = store.create(WidgetKind::Label, Some(5), Some(5), None);

    // Move the label into the tab by rebuilding the tabs value.
    let label_widget = store.active_canvas().widgets[1].clone();
    store.delete(&label);
    let tabs = json!([{ "id": "tab1", "name": "Tab 1", "widgets": [label_widget] }]);
    store.update_field(&tabview, "tabs", &tabs);
    assert!(lvforge_editor::forest::find(&store.active_canvas().widgets, &label).is_some());

    store.delete(&label);
    let widgets = &store.active_canvas().widgets;
    assert_eq!(widgets.len(), 1);
    assert!(widgets[0].tabs[0].widgets.is_empty());
    assert!(lvforge_editor::forest::find(widgets, &label).is_none());
}

#[test]
fn test_copy_paste_offsets_and_preserves_source() {
    let mut store = DesignerStore::new();
    let source = store.create(WidgetKind::Slider, Some(50), Some(50), None);
    store.copy(&source);
    let pasted = store.paste().unwrap();

    assert_ne!(pasted, source);
    let widgets = &store.active_canvas().widgets;
    assert_eq!(widgets.len(), 2);
    let copy = lvforge_editor::forest::find(widgets, &pasted).unwrap();
    assert_eq!((copy.x, copy.y), (70, 70));
    let original = lvforge_editor::forest::find(widgets, &source).unwrap();
    assert_eq!((original.x, original.y), (50, 50));

    // Copy mode pastes repeatedly.
    assert!(store.paste().is_some());
    assert_eq!(store.active_canvas().widgets.len(), 3);
}

#[test]
fn test_cut_deletes_source_and_pastes_once() {
    let mut store = DesignerStore::new();
    let source = store.create(WidgetKind::Led, Some(5), Some(5), None);
    store.cut(&source);
    assert!(store.active_canvas().widgets.is_empty());

    let pasted = store.paste().unwrap();
    assert_ne!(pasted, source);
    assert_eq!(store.active_canvas().widgets.len(), 1);
    assert!(store.paste().is_none());
}

#[test]
fn test_paste_regenerates_nested_ids() {
    let mut store = DesignerStore::new();
    let tabview = store.create(WidgetKind::Tabview, Some(0), Some(0), None);
    let label = store.create(WidgetKind::Label, Some(5), Some(5), None);
    let label_widget = store.active_canvas().widgets[1].clone();
    store.delete(&label);
    let tabs = json!([{ "id": "tab1", "name": "Tab 1", "widgets": [label_widget] }]);
    store.update_field(&tabview, "tabs", &tabs);

    store.copy(&tabview);
    store.paste().unwrap();

    let mut ids = Vec::new();
    lvforge_editor::forest::collect_ids(&store.active_canvas().widgets, &mut ids);
    // Two tabviews, each with one nested label, all ids distinct.
    assert_eq!(ids.len(), 4);
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(ids.len(), deduped.len());
}

#[test]
fn test_malformed_import_leaves_state_untouched() {
    let mut store = DesignerStore::new();
    store.create(WidgetKind::Button, Some(0), Some(0), None);
    let before = store.active_canvas().widgets.clone();

    let err = store.import("pages:\n  - widgets: []\n").unwrap_err();
    assert!(matches!(err, EditorError::Import(ImportError::Structure)));
    assert_eq!(store.active_canvas().widgets, before);

    let err = store.import("lvgl: {broken").unwrap_err();
    assert!(matches!(err, EditorError::Import(ImportError::Syntax(_))));
    assert_eq!(store.active_canvas().widgets, before);
}

#[test]
fn test_last_canvas_protection() {
    let mut store = DesignerStore::new();
    assert_eq!(store.canvases().len(), 1);
    let only = store.canvases()[0].id.clone();
    store.remove_canvas(&only);
    assert_eq!(store.canvases().len(), 1);

    let second = store.add_canvas(None);
    assert_eq!(store.canvases().len(), 2);
    assert_eq!(store.active_canvas_id(), second);
    store.remove_canvas(&second);
    assert_eq!(store.canvases().len(), 1);
    assert_eq!(store.active_canvas_id(), only);
}

#[test]
fn test_switch_canvas_clears_selection() {
    let mut store = DesignerStore::new();
    let first = store.canvases()[0].id.clone();
    let id = store.create(WidgetKind::Button, Some(0), Some(0), None);
    assert_eq!(store.selected_id(), Some(id.as_str()));

    let second = store.add_canvas(Some("Second".into()));
    assert!(store.selected_id().is_none());
    assert!(store.active_canvas().widgets.is_empty());

    // Unknown ids are ignored.
    store.switch_canvas("canvas_404");
    assert_eq!(store.active_canvas_id(), second);

    store.switch_canvas(&first);
    assert_eq!(store.active_canvas().widgets.len(), 1);
}

#[test]
fn test_history_cap_and_monotonicity() {
    let mut store = DesignerStore::new();
    for i in 0..HISTORY_CAP + 10 {
        store.create(WidgetKind::Label, Some(i as i32), Some(0), None);
    }
    assert_eq!(store.active_canvas().history.len(), HISTORY_CAP);

    // Undo all the way down without erroring.
    let mut steps = 0;
    while store.active_canvas().history.can_undo() {
        store.undo();
        steps += 1;
    }
    assert_eq!(steps, HISTORY_CAP - 1);
}

#[test]
fn test_undo_redo_are_inverse() {
    let mut store = DesignerStore::new();
    store.create(WidgetKind::Button, Some(0), Some(0), None);
    let before = store.active_canvas().widgets.clone();

    let id = store.create(WidgetKind::Slider, Some(10), Some(10), None);
    let after = store.active_canvas().widgets.clone();

    store.undo();
    assert_eq!(store.active_canvas().widgets, before);
    // The slider no longer exists, so it cannot stay selected.
    assert_ne!(store.selected_id(), Some(id.as_str()));

    store.redo();
    assert_eq!(store.active_canvas().widgets, after);
}

#[test]
fn test_undo_restores_canvas_dimensions() {
    let mut store = DesignerStore::new();
    store.set_canvas_size(480, 320);
    assert_eq!(store.active_canvas().resolution(), "480x320");
    store.undo();
    assert_eq!(store.active_canvas().resolution(), "320x240");
    store.redo();
    assert_eq!(store.active_canvas().resolution(), "480x320");
}

#[test]
fn test_z_order_contiguity_after_reorder_and_delete() {
    let mut store = DesignerStore::new();
    let a = store.create(WidgetKind::Button, Some(0), Some(0), None);
    let b = store.create(WidgetKind::Label, Some(0), Some(0), None);
    let c = store.create(WidgetKind::Led, Some(0), Some(0), None);

    store.reorder(&a, MoveDirection::Up);
    let z: Vec<i32> = store.active_canvas().widgets.iter().map(|w| w.z_index).collect();
    assert_eq!(z, vec![1, 2, 3]);
    assert_eq!(store.active_canvas().widgets[0].id, b);
    assert_eq!(store.active_canvas().widgets[1].id, a);

    store.delete(&a);
    let z: Vec<i32> = store.active_canvas().widgets.iter().map(|w| w.z_index).collect();
    assert_eq!(z, vec![1, 2]);
    assert_eq!(store.active_canvas().widgets[1].id, c);

    // Reordering past the ends is a no-op.
    store.reorder(&c, MoveDirection::Up);
    store.reorder(&b, MoveDirection::Down);
    let z: Vec<i32> = store.active_canvas().widgets.iter().map(|w| w.z_index).collect();
    assert_eq!(z, vec![1, 2]);
}

#[test]
fn test_id_uniqueness_across_create_paste_import() {
    let mut store = DesignerStore::new();
    store.create(WidgetKind::Button, Some(0), Some(0), None);
    store.create(WidgetKind::Tabview, Some(0), Some(0), None);
    let slider = store.create(WidgetKind::Slider, Some(0), Some(0), None);
    store.copy(&slider);
    store.paste();
    store.paste();

    let yaml = store.serialize_active();
    store.import(&yaml).unwrap();
    store.create(WidgetKind::Button, Some(1), Some(1), None);

    let mut ids = Vec::new();
    lvforge_editor::forest::collect_ids(&store.active_canvas().widgets, &mut ids);
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(ids.len(), deduped.len());
}

#[test]
fn test_update_on_missing_id_is_silent() {
    let mut store = DesignerStore::new();
    let history_before = store.active_canvas().history.len();
    store.update_field("ghost_1", "text", &json!("boo"));
    store.delete("ghost_1");
    store.select(Some("ghost_1"));
    assert!(store.selected_id().is_none());
    // Silent no-ops must not pollute history.
    assert_eq!(store.active_canvas().history.len(), history_before);
}

#[test]
fn test_persistence_round_trip() -> anyhow::Result<()> {
    let mut store = DesignerStore::new();
    let button = store.create(WidgetKind::Button, Some(10), Some(20), None);
    store.update_field(&button, "text", &json!("Start"));
    store.add_canvas(Some("Screen 2".into()));
    store.set_scale(1.5);
    store.set_theme("light");

    let blob = store.save_state()?;
    let mut restored = DesignerStore::new();
    restored.load_state(&blob)?;

    assert_eq!(restored.canvases().len(), 2);
    assert_eq!(restored.scale(), 1.5);
    assert_eq!(restored.theme(), "light");
    assert_eq!(restored.canvases()[1].name, "Screen 2");
    let first = &restored.canvases()[0];
    assert_eq!(first.widgets.len(), 1);
    assert_eq!(first.widgets[0].text.as_deref(), Some("Start"));
    // Histories restart from the loaded state.
    assert_eq!(first.history.len(), 1);
    Ok(())
}

#[test]
fn test_legacy_blob_migration() -> anyhow::Result<()> {
    let blob = r#"{
        "widgets": [
            {"id": "button_0", "type": "button", "x": 3, "y": 4, "zIndex": 1, "text": "Hi"}
        ],
        "resolution": "480x272",
        "scale": 1,
        "nextWidgetId": 7,
        "isToolboxVisible": false
    }"#;
    let mut store = DesignerStore::new();
    store.load_state(blob)?;

    assert_eq!(store.canvases().len(), 1);
    let canvas = store.active_canvas();
    assert_eq!(canvas.resolution(), "480x272");
    assert_eq!(canvas.widgets.len(), 1);
    assert_eq!(canvas.widgets[0].text.as_deref(), Some("Hi"));
    assert!(!store.toolbox_visible());

    // The migrated counter must not reuse old ids.
    let next = store.create(WidgetKind::Button, Some(0), Some(0), None);
    assert_eq!(next, "button_7");
    Ok(())
}

#[test]
fn test_matrix_cell_updates_through_store() {
    let mut store = DesignerStore::new();
    let matrix = store.create(WidgetKind::Buttonmatrix, Some(0), Some(0), None);
    store.update_matrix_cell(&matrix, 0, 1, "text", &json!("Del"));
    store.update_matrix_cell(&matrix, 0, 1, "control.no_repeat", &json!(true));

    let widget = store.active_canvas().widgets[0].clone();
    let cell = &widget.rows[0].buttons[1];
    assert_eq!(cell.text.as_deref(), Some("Del"));
    assert!(cell.control.as_ref().unwrap().no_repeat);

    store.undo();
    store.undo();
    let widget = &store.active_canvas().widgets[0];
    assert_eq!(widget.rows[0].buttons[1].text.as_deref(), Some("Btn 2"));
}

#[test]
fn test_create_centers_when_coordinates_omitted() {
    let mut store = DesignerStore::new();
    // The default canvas is 320x240.
    let id = store.create(WidgetKind::Button, None, None, None);
    let widget = store.active_canvas().widgets[0].clone();
    assert_eq!(widget.id, id);
    assert_eq!((widget.x, widget.y), (110, 105));

    store.set_canvas_size(640, 480);
    store.create(WidgetKind::Label, None, Some(7), None);
    let widget = &store.active_canvas().widgets[1];
    assert_eq!((widget.x, widget.y), (270, 7));
}

#[test]
fn test_create_applies_seed_attributes() {
    let mut store = DesignerStore::new();
    let seed = json!({ "id": "button_42", "text": "Save", "width": 88 });
    let id = store.create(WidgetKind::Button, Some(10), Some(10), Some(&seed));
    assert_eq!(id, "button_42");
    let widget = &store.active_canvas().widgets[0];
    assert_eq!(widget.text.as_deref(), Some("Save"));
    assert_eq!(widget.width, Some(88));
    // Unseeded fields keep the kind defaults.
    assert_eq!(widget.height, Some(40));
}

#[test]
fn test_delete_container_clears_nested_selection() {
    let mut store = DesignerStore::new();
    let tabview = store.create(WidgetKind::Tabview, Some(0), Some(0), None);
    let label = store.create(WidgetKind::Label, Some(5), Some(5), None);
    let label_widget = store.active_canvas().widgets[1].clone();
    store.delete(&label);
    let tabs = json!([{ "id": "tab1", "name": "Tab 1", "widgets": [label_widget] }]);
    store.update_field(&tabview, "tabs", &tabs);

    store.select(Some(&label));
    assert_eq!(store.selected_id(), Some(label.as_str()));

    store.delete(&tabview);
    assert!(store.active_canvas().widgets.is_empty());
    assert!(store.selected_id().is_none());
}
