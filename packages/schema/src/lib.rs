//! Core document model for LVGL page layouts.
//!
//! This crate defines the widget tree (`Widget`, `Tab`, `Tile`, part
//! styles), the color canonicalization rules shared by the codec and the
//! editor, the low-level YAML writer, and the widget registry that maps
//! each kind to its defaults, projection, and validation.

pub mod color;
pub mod emit;
pub mod project;
pub mod registry;
pub mod widget;

pub use color::{normalize_hex, normalize_hex_lambda, parse_color, Rgb};
pub use emit::YamlWriter;
pub use registry::{new_widget, project_widget, spec_for, validate_widget, WidgetSpec};
pub use widget::{
    Align, ArcMode, BarMode, Direction, KeyboardMode, LayoutKind, MatrixButton, MatrixControl,
    MatrixRow, Point, Tab, Tile, TileDir, TileLayout, Widget, WidgetKind,
};
