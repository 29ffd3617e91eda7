//! Bidirectional YAML codec for LVGL page documents.
//!
//! `serializer` renders a widget forest into the deterministic single-page
//! document shape; `importer` parses that shape (or any hand-written
//! document with the same root structure) back into a forest.

pub mod error;
pub mod importer;
pub mod serializer;

pub use error::{ImportError, ImportResult};
pub use importer::{deserialize, ImportOutcome};
pub use serializer::{serialize, PageMeta};

#[cfg(test)]
mod tests_importer;
#[cfg(test)]
mod tests_serializer;
