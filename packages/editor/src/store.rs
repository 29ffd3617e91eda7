//! # Designer Store
//!
//! The single mutable owner of editor state: the canvas collection, the
//! active-canvas pointer, the widget selection, the clipboard, and the
//! shared id counters. Every method is synchronous and runs to completion;
//! structural mutations snapshot the active canvas into its history,
//! view-state changes (selection, scale, theme, renames) do not.
//!
//! Operations addressed at a missing id are deliberate no-ops rather than
//! errors: the UI may race slightly ahead of state and must not crash the
//! session.

use lvforge_codec::{deserialize, serialize};
use lvforge_schema::registry::new_widget;
use lvforge_schema::widget::{Widget, WidgetKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::canvas::Canvas;
use crate::errors::EditorError;
use crate::forest;

pub const PASTE_OFFSET: i32 = 20;

/// Direction for root-level z reordering. `Up` moves toward the top of the
/// stack (later in the sibling list).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClipboardMode {
    Copy,
    Cut,
}

#[derive(Debug, Clone)]
struct ClipboardEntry {
    widget: Widget,
    mode: ClipboardMode,
}

/// Serialized session state. The shape is stable across releases; older
/// single-canvas blobs are migrated on load.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    canvases: Vec<Canvas>,
    active_canvas_id: String,
    next_canvas_counter: u32,
    scale: f32,
    next_widget_counter: u32,
    toolbox_visible: bool,
    theme: String,
}

/// Pre-multi-canvas blob shape.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyState {
    #[serde(default)]
    widgets: Vec<Widget>,
    resolution: Option<String>,
    scale: Option<f32>,
    #[serde(default)]
    next_widget_id: u32,
    is_toolbox_visible: Option<bool>,
}

#[derive(Debug)]
pub struct DesignerStore {
    canvases: Vec<Canvas>,
    active_canvas_id: String,
    next_canvas_counter: u32,
    next_widget_counter: u32,
    scale: f32,
    toolbox_visible: bool,
    theme: String,
    selected_id: Option<String>,
    clipboard: Option<ClipboardEntry>,
}

impl Default for DesignerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignerStore {
    pub fn new() -> Self {
        Self {
            canvases: vec![Canvas::new("canvas_1", "Canvas 1")],
            active_canvas_id: "canvas_1".into(),
            next_canvas_counter: 2,
            next_widget_counter: 0,
            scale: 2.0,
            toolbox_visible: true,
            theme: "dark".into(),
            selected_id: None,
            clipboard: None,
        }
    }

    // ---- accessors ------------------------------------------------------

    pub fn canvases(&self) -> &[Canvas] {
        &self.canvases
    }

    pub fn active_canvas(&self) -> &Canvas {
        self.canvases
            .iter()
            .find(|c| c.id == self.active_canvas_id)
            .unwrap_or(&self.canvases[0])
    }

    fn active_canvas_mut(&mut self) -> &mut Canvas {
        let index = self
            .canvases
            .iter()
            .position(|c| c.id == self.active_canvas_id)
            .unwrap_or(0);
        &mut self.canvases[index]
    }

    pub fn active_canvas_id(&self) -> &str {
        &self.active_canvas_id
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn selected_widget(&self) -> Option<&Widget> {
        let id = self.selected_id.as_deref()?;
        forest::find(&self.active_canvas().widgets, id)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn toolbox_visible(&self) -> bool {
        self.toolbox_visible
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    // ---- widget mutations -----------------------------------------------

    /// Places a new widget of `kind`, selects it, and returns its id.
    ///
    /// Omitted coordinates center the widget on the active canvas. `seed`
    /// is an optional attribute overlay applied after the kind defaults,
    /// keyed like `update_field`; a seeded `id` replaces the generated one.
    pub fn create(
        &mut self,
        kind: WidgetKind,
        x: Option<i32>,
        y: Option<i32>,
        seed: Option<&Value>,
    ) -> String {
        let canvas = self.active_canvas();
        let x = x.unwrap_or(canvas.width / 2 - 50);
        let y = y.unwrap_or(canvas.height / 2 - 15);
        let seeded_id = seed
            .and_then(|s| s.get("id"))
            .and_then(Value::as_str)
            .map(str::to_owned);
        let id = match seeded_id {
            Some(id) => id,
            None => self.fresh_id(kind),
        };
        let mut widget = new_widget(id.clone(), kind, x, y);
        if let Some(Value::Object(map)) = seed {
            for (key, value) in map {
                if matches!(key.as_str(), "id" | "type" | "x" | "y" | "zIndex") {
                    continue;
                }
                forest::set_field(&mut widget, key, value);
            }
        }
        let canvas = self.active_canvas_mut();
        widget.z_index = canvas.widgets.len() as i32 + 1;
        canvas.widgets.push(widget);
        self.selected_id = Some(id.clone());
        self.record();
        debug!(id = %id, "widget created");
        id
    }

    /// Recursive delete; clears the selection if it pointed anywhere into
    /// the removed subtree.
    pub fn delete(&mut self, id: &str) {
        let canvas = self.active_canvas_mut();
        if !forest::delete_by_id(&mut canvas.widgets, id) {
            return;
        }
        forest::renumber_z(&mut canvas.widgets);
        self.drop_stale_selection();
        self.record();
        debug!(id = %id, "widget deleted");
    }

    /// Selection is view state: never recorded, never an error.
    pub fn select(&mut self, id: Option<&str>) {
        match id {
            None => self.selected_id = None,
            Some(id) => {
                if forest::contains_id(&self.active_canvas().widgets, id) {
                    self.selected_id = Some(id.to_owned());
                }
            }
        }
    }

    pub fn update_field(&mut self, id: &str, field: &str, value: &Value) {
        let canvas = self.active_canvas_mut();
        if let Some(widget) = forest::find_mut(&mut canvas.widgets, id) {
            forest::set_field(widget, field, value);
            self.record();
        }
    }

    pub fn update_matrix_cell(&mut self, id: &str, row: usize, col: usize, field: &str, value: &Value) {
        let canvas = self.active_canvas_mut();
        if let Some(widget) = forest::find_mut(&mut canvas.widgets, id) {
            forest::update_matrix_cell(widget, row, col, field, value);
            self.record();
        }
    }

    /// Swaps root-level sibling positions and renumbers z contiguously.
    /// Nested widgets are not reorderable through this operation.
    pub fn reorder(&mut self, id: &str, direction: MoveDirection) {
        let canvas = self.active_canvas_mut();
        let Some(index) = canvas.widgets.iter().position(|w| w.id == id) else {
            return;
        };
        let target = match direction {
            MoveDirection::Up if index + 1 < canvas.widgets.len() => index + 1,
            MoveDirection::Down if index > 0 => index - 1,
            _ => return,
        };
        canvas.widgets.swap(index, target);
        forest::renumber_z(&mut canvas.widgets);
        self.record();
    }

    // ---- clipboard ------------------------------------------------------

    pub fn copy(&mut self, id: &str) {
        if let Some(widget) = forest::find(&self.active_canvas().widgets, id) {
            self.clipboard = Some(ClipboardEntry {
                widget: widget.clone(),
                mode: ClipboardMode::Copy,
            });
        }
    }

    /// Cut stores the subtree and removes the source immediately.
    pub fn cut(&mut self, id: &str) {
        if let Some(widget) = forest::find(&self.active_canvas().widgets, id) {
            self.clipboard = Some(ClipboardEntry {
                widget: widget.clone(),
                mode: ClipboardMode::Cut,
            });
            self.delete(id);
        }
    }

    /// Pastes the clipboard subtree with fresh ids, offset so the copy is
    /// visually distinguishable from its source. A cut entry pastes once;
    /// a copied entry can be pasted repeatedly. Returns the new root id.
    pub fn paste(&mut self) -> Option<String> {
        let entry = self.clipboard.as_ref()?;
        let mode = entry.mode;
        let mut widget = forest::regenerate_ids(&entry.widget, &mut self.next_widget_counter);
        widget.x += PASTE_OFFSET;
        widget.y += PASTE_OFFSET;
        let id = widget.id.clone();
        let canvas = self.active_canvas_mut();
        widget.z_index = canvas.widgets.len() as i32 + 1;
        canvas.widgets.push(widget);
        self.selected_id = Some(id.clone());
        if mode == ClipboardMode::Cut {
            self.clipboard = None;
        }
        self.record();
        Some(id)
    }

    // ---- history --------------------------------------------------------

    pub fn undo(&mut self) {
        let canvas = self.active_canvas_mut();
        if let Some(snapshot) = canvas.history.undo().cloned() {
            canvas.apply_snapshot(&snapshot);
            self.drop_stale_selection();
        }
    }

    pub fn redo(&mut self) {
        let canvas = self.active_canvas_mut();
        if let Some(snapshot) = canvas.history.redo().cloned() {
            canvas.apply_snapshot(&snapshot);
            self.drop_stale_selection();
        }
    }

    fn drop_stale_selection(&mut self) {
        if let Some(id) = self.selected_id.clone() {
            if !forest::contains_id(&self.active_canvas().widgets, &id) {
                self.selected_id = None;
            }
        }
    }

    /// Snapshots the active canvas after a completed mutation, so the
    /// history tail always equals the live state.
    fn record(&mut self) {
        let canvas = self.active_canvas_mut();
        let snapshot = canvas.snapshot();
        canvas.history.record(snapshot);
    }

    // ---- canvas management ----------------------------------------------

    pub fn add_canvas(&mut self, name: Option<String>) -> String {
        let n = self.next_canvas_counter;
        self.next_canvas_counter += 1;
        let id = format!("canvas_{}", n);
        let name = name.unwrap_or_else(|| format!("Canvas {}", n));
        self.canvases.push(Canvas::new(id.clone(), name));
        self.active_canvas_id = id.clone();
        self.selected_id = None;
        debug!(id = %id, "canvas added");
        id
    }

    /// Removing the last remaining canvas is rejected.
    pub fn remove_canvas(&mut self, id: &str) {
        if self.canvases.len() <= 1 {
            return;
        }
        let Some(index) = self.canvases.iter().position(|c| c.id == id) else {
            return;
        };
        self.canvases.remove(index);
        if self.active_canvas_id == id {
            let fallback = index.saturating_sub(1);
            self.active_canvas_id = self.canvases[fallback].id.clone();
            self.selected_id = None;
        }
        debug!(id = %id, "canvas removed");
    }

    /// No-op unless `id` names a live canvas. Switching clears the
    /// selection; it is not meaningful across documents.
    pub fn switch_canvas(&mut self, id: &str) {
        if self.canvases.iter().any(|c| c.id == id) && self.active_canvas_id != id {
            self.active_canvas_id = id.to_owned();
            self.selected_id = None;
        }
    }

    /// Cosmetic, not undo-tracked.
    pub fn rename_canvas(&mut self, id: &str, name: impl Into<String>) {
        if let Some(canvas) = self.canvases.iter_mut().find(|c| c.id == id) {
            canvas.name = name.into();
        }
    }

    pub fn set_canvas_size(&mut self, width: i32, height: i32) {
        if width <= 0 || height <= 0 {
            return;
        }
        let canvas = self.active_canvas_mut();
        canvas.width = width;
        canvas.height = height;
        self.record();
    }

    pub fn set_resolution(&mut self, label: &str) {
        if self.active_canvas_mut().set_resolution(label) {
            self.record();
        }
    }

    // ---- view state -----------------------------------------------------

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn toggle_toolbox(&mut self) {
        self.toolbox_visible = !self.toolbox_visible;
    }

    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.theme = theme.into();
    }

    // ---- codec boundary -------------------------------------------------

    /// Renders the active canvas as a YAML document.
    pub fn serialize_active(&self) -> String {
        let canvas = self.active_canvas();
        serialize(&canvas.widgets, &canvas.page_meta())
    }

    /// Replaces the active forest with the parsed document. On error the
    /// in-memory state is untouched.
    pub fn import(&mut self, text: &str) -> Result<(), EditorError> {
        let outcome = deserialize(text)?;
        if let Some(suffix) = outcome.max_id_suffix {
            self.next_widget_counter = self.next_widget_counter.max(suffix + 1);
        }
        let count = outcome.widgets.len();
        let canvas = self.active_canvas_mut();
        canvas.widgets = outcome.widgets;
        self.selected_id = None;
        self.record();
        debug!(widgets = count, "document imported");
        Ok(())
    }

    // ---- persistence ----------------------------------------------------

    /// Produces the JSON session blob handed to the persistence layer.
    pub fn save_state(&self) -> Result<String, EditorError> {
        let state = PersistedState {
            canvases: self.canvases.clone(),
            active_canvas_id: self.active_canvas_id.clone(),
            next_canvas_counter: self.next_canvas_counter,
            scale: self.scale,
            next_widget_counter: self.next_widget_counter,
            toolbox_visible: self.toolbox_visible,
            theme: self.theme.clone(),
        };
        Ok(serde_json::to_string(&state)?)
    }

    /// Loads a session blob, migrating the older single-canvas shape if
    /// necessary. Histories are reseeded from the loaded state.
    pub fn load_state(&mut self, blob: &str) -> Result<(), EditorError> {
        let value: Value = serde_json::from_str(blob)?;
        if value.get("canvases").is_some() {
            let state: PersistedState = serde_json::from_value(value)?;
            self.canvases = state.canvases;
            self.active_canvas_id = state.active_canvas_id;
            self.next_canvas_counter = state.next_canvas_counter;
            self.scale = state.scale;
            self.next_widget_counter = state.next_widget_counter;
            self.toolbox_visible = state.toolbox_visible;
            self.theme = state.theme;
        } else {
            let legacy: LegacyState = serde_json::from_value(value)?;
            let mut canvas = Canvas::new("canvas_1", "Canvas 1");
            canvas.widgets = legacy.widgets;
            if let Some(resolution) = legacy.resolution.as_deref() {
                canvas.set_resolution(resolution);
            }
            self.canvases = vec![canvas];
            self.active_canvas_id = "canvas_1".into();
            self.next_canvas_counter = 2;
            self.next_widget_counter = legacy.next_widget_id;
            if let Some(scale) = legacy.scale {
                self.scale = scale;
            }
            self.toolbox_visible = legacy.is_toolbox_visible.unwrap_or(true);
        }

        if self.canvases.is_empty() {
            self.canvases.push(Canvas::new("canvas_1", "Canvas 1"));
            self.active_canvas_id = "canvas_1".into();
        }
        if !self.canvases.iter().any(|c| c.id == self.active_canvas_id) {
            self.active_canvas_id = self.canvases[0].id.clone();
        }
        for canvas in &mut self.canvases {
            canvas.history = crate::history::History::seeded(canvas.snapshot());
        }
        self.selected_id = None;
        self.clipboard = None;
        debug!(canvases = self.canvases.len(), "session loaded");
        Ok(())
    }

    fn fresh_id(&mut self, kind: WidgetKind) -> String {
        let id = format!("{}_{}", kind.as_tag(), self.next_widget_counter);
        self.next_widget_counter += 1;
        id
    }
}
