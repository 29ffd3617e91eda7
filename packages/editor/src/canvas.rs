//! # Canvas
//!
//! One independent document: a forest of root widgets plus pixel
//! dimensions, background styling, and its own undo/redo history. The
//! "WxH" resolution label is derived from width/height, never stored, so
//! the two can't drift apart.

use lvforge_codec::serializer::PageMeta;
use lvforge_schema::widget::Widget;
use serde::{Deserialize, Serialize};

use crate::history::{History, Snapshot};

pub const DEFAULT_WIDTH: i32 = 320;
pub const DEFAULT_HEIGHT: i32 = 240;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Canvas {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub widgets: Vec<Widget>,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_opa: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pad_all: Option<i32>,
    // History is session-local; it restarts from the loaded state.
    #[serde(skip, default)]
    pub history: History,
}

impl Canvas {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let mut canvas = Self {
            id: id.into(),
            name: name.into(),
            widgets: Vec::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            flags: Vec::new(),
            bg_color: None,
            bg_opa: None,
            pad_all: None,
            history: History::default(),
        };
        canvas.history = History::seeded(canvas.snapshot());
        canvas
    }

    /// The "WxH" label shown in the resolution picker.
    pub fn resolution(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// Applies a "WxH" label; malformed or non-positive input is ignored.
    pub fn set_resolution(&mut self, label: &str) -> bool {
        let Some((w, h)) = label.split_once('x') else {
            return false;
        };
        match (w.trim().parse::<i32>(), h.trim().parse::<i32>()) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => {
                self.width = w;
                self.height = h;
                true
            }
            _ => false,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            widgets: self.widgets.clone(),
            width: self.width,
            height: self.height,
        }
    }

    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        self.widgets = snapshot.widgets.clone();
        self.width = snapshot.width;
        self.height = snapshot.height;
    }

    pub fn page_meta(&self) -> PageMeta {
        PageMeta {
            flags: self.flags.clone(),
            bg_color: self.bg_color.clone(),
            bg_opa: self.bg_opa,
            pad_all: self.pad_all,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_label_is_derived() {
        let mut canvas = Canvas::new("canvas_1", "Canvas 1");
        assert_eq!(canvas.resolution(), "320x240");
        assert!(canvas.set_resolution("480x320"));
        assert_eq!((canvas.width, canvas.height), (480, 320));
        assert_eq!(canvas.resolution(), "480x320");
    }

    #[test]
    fn bad_resolution_labels_are_rejected() {
        let mut canvas = Canvas::new("canvas_1", "Canvas 1");
        assert!(!canvas.set_resolution("garbage"));
        assert!(!canvas.set_resolution("0x240"));
        assert!(!canvas.set_resolution("320x-1"));
        assert_eq!(canvas.resolution(), "320x240");
    }

    #[test]
    fn new_canvas_seeds_one_history_entry() {
        let canvas = Canvas::new("canvas_1", "Canvas 1");
        assert_eq!(canvas.history.len(), 1);
        assert!(!canvas.history.can_undo());
    }
}
