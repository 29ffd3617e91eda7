//! # lvforge-editor
//!
//! Editing core for LVGL page documents: the multi-canvas designer store,
//! recursive tree operations over widget forests, per-canvas undo/redo
//! history, and the persistence blob. Serialization to and from YAML is
//! delegated to `lvforge-codec`.
//!
//! ## Quick example
//!
//! ```rust,ignore
//! let mut store = DesignerStore::new();
//! let id = store.create(WidgetKind::Button, Some(10), Some(20), None);
//! store.update_field(&id, "text", &serde_json::json!("Go"));
//! let yaml = store.serialize_active();
//! store.undo();
//! ```

pub mod canvas;
pub mod errors;
pub mod forest;
pub mod history;
pub mod store;

pub use canvas::Canvas;
pub use errors::EditorError;
pub use history::{History, Snapshot, HISTORY_CAP};
pub use store::{DesignerStore, MoveDirection, PASTE_OFFSET};

pub use lvforge_codec::{ImportError, ImportResult};
pub use lvforge_schema::widget::{Widget, WidgetKind};
