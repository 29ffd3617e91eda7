use serde::{Deserialize, Serialize};

/// Variant tag identifying a widget's kind.
///
/// The tag doubles as the YAML mapping key (`- button:`, `- tabview:` ...),
/// so the serde representation is the lowercase token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Arc,
    Bar,
    Button,
    Buttonmatrix,
    Calendar,
    Canvas,
    Chart,
    Checkbox,
    Container,
    Dropdown,
    Image,
    Imagebutton,
    Keyboard,
    Label,
    Led,
    Line,
    List,
    Meter,
    Msgbox,
    Obj,
    Qrcode,
    Roller,
    Slider,
    Spinbox,
    Spinner,
    Switch,
    Table,
    Tabview,
    Textarea,
    Tileview,
    Window,
}

impl WidgetKind {
    pub fn as_tag(&self) -> &'static str {
        match self {
            WidgetKind::Arc => "arc",
            WidgetKind::Bar => "bar",
            WidgetKind::Button => "button",
            WidgetKind::Buttonmatrix => "buttonmatrix",
            WidgetKind::Calendar => "calendar",
            WidgetKind::Canvas => "canvas",
            WidgetKind::Chart => "chart",
            WidgetKind::Checkbox => "checkbox",
            WidgetKind::Container => "container",
            WidgetKind::Dropdown => "dropdown",
            WidgetKind::Image => "image",
            WidgetKind::Imagebutton => "imagebutton",
            WidgetKind::Keyboard => "keyboard",
            WidgetKind::Label => "label",
            WidgetKind::Led => "led",
            WidgetKind::Line => "line",
            WidgetKind::List => "list",
            WidgetKind::Meter => "meter",
            WidgetKind::Msgbox => "msgbox",
            WidgetKind::Obj => "obj",
            WidgetKind::Qrcode => "qrcode",
            WidgetKind::Roller => "roller",
            WidgetKind::Slider => "slider",
            WidgetKind::Spinbox => "spinbox",
            WidgetKind::Spinner => "spinner",
            WidgetKind::Switch => "switch",
            WidgetKind::Table => "table",
            WidgetKind::Tabview => "tabview",
            WidgetKind::Textarea => "textarea",
            WidgetKind::Tileview => "tileview",
            WidgetKind::Window => "window",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "arc" => WidgetKind::Arc,
            "bar" => WidgetKind::Bar,
            "button" => WidgetKind::Button,
            "buttonmatrix" => WidgetKind::Buttonmatrix,
            "calendar" => WidgetKind::Calendar,
            "canvas" => WidgetKind::Canvas,
            "chart" => WidgetKind::Chart,
            "checkbox" => WidgetKind::Checkbox,
            "container" => WidgetKind::Container,
            "dropdown" => WidgetKind::Dropdown,
            "image" => WidgetKind::Image,
            "imagebutton" => WidgetKind::Imagebutton,
            "keyboard" => WidgetKind::Keyboard,
            "label" => WidgetKind::Label,
            "led" => WidgetKind::Led,
            "line" => WidgetKind::Line,
            "list" => WidgetKind::List,
            "meter" => WidgetKind::Meter,
            "msgbox" => WidgetKind::Msgbox,
            "obj" => WidgetKind::Obj,
            "qrcode" => WidgetKind::Qrcode,
            "roller" => WidgetKind::Roller,
            "slider" => WidgetKind::Slider,
            "spinbox" => WidgetKind::Spinbox,
            "spinner" => WidgetKind::Spinner,
            "switch" => WidgetKind::Switch,
            "table" => WidgetKind::Table,
            "tabview" => WidgetKind::Tabview,
            "textarea" => WidgetKind::Textarea,
            "tileview" => WidgetKind::Tileview,
            "window" => WidgetKind::Window,
            _ => return None,
        };
        Some(kind)
    }

    /// Kinds that own nested child forests.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            WidgetKind::Tabview | WidgetKind::Tileview | WidgetKind::Container
        )
    }
}

/// Text alignment token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_token(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "left" => Some(Align::Left),
            "center" => Some(Align::Center),
            "right" => Some(Align::Right),
            _ => None,
        }
    }
}

/// Bar/roller fill mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BarMode {
    Normal,
    Reverse,
    Symmetrical,
    Range,
    Infinite,
}

impl BarMode {
    pub fn as_token(&self) -> &'static str {
        match self {
            BarMode::Normal => "NORMAL",
            BarMode::Reverse => "REVERSE",
            BarMode::Symmetrical => "SYMMETRICAL",
            BarMode::Range => "RANGE",
            BarMode::Infinite => "INFINITE",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "NORMAL" => Some(BarMode::Normal),
            "REVERSE" => Some(BarMode::Reverse),
            "SYMMETRICAL" => Some(BarMode::Symmetrical),
            "RANGE" => Some(BarMode::Range),
            "INFINITE" => Some(BarMode::Infinite),
            _ => None,
        }
    }
}

/// Arc sweep mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArcMode {
    Normal,
    Reverse,
    Symmetrical,
}

impl ArcMode {
    pub fn as_token(&self) -> &'static str {
        match self {
            ArcMode::Normal => "NORMAL",
            ArcMode::Reverse => "REVERSE",
            ArcMode::Symmetrical => "SYMMETRICAL",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "NORMAL" => Some(ArcMode::Normal),
            "REVERSE" => Some(ArcMode::Reverse),
            "SYMMETRICAL" => Some(ArcMode::Symmetrical),
            _ => None,
        }
    }
}

/// Four-way direction token (tabview bar position, dropdown open direction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    pub fn as_token(&self) -> &'static str {
        match self {
            Direction::Top => "TOP",
            Direction::Bottom => "BOTTOM",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "TOP" => Some(Direction::Top),
            "BOTTOM" => Some(Direction::Bottom),
            "LEFT" => Some(Direction::Left),
            "RIGHT" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Directional-scroll token for a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TileDir {
    All,
    Top,
    Bottom,
    Left,
    Right,
    Hor,
    Ver,
}

impl TileDir {
    pub fn as_token(&self) -> &'static str {
        match self {
            TileDir::All => "ALL",
            TileDir::Top => "TOP",
            TileDir::Bottom => "BOTTOM",
            TileDir::Left => "LEFT",
            TileDir::Right => "RIGHT",
            TileDir::Hor => "HOR",
            TileDir::Ver => "VER",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ALL" => Some(TileDir::All),
            "TOP" => Some(TileDir::Top),
            "BOTTOM" => Some(TileDir::Bottom),
            "LEFT" => Some(TileDir::Left),
            "RIGHT" => Some(TileDir::Right),
            "HOR" => Some(TileDir::Hor),
            "VER" => Some(TileDir::Ver),
            _ => None,
        }
    }
}

/// On-screen keyboard mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyboardMode {
    TextLower,
    TextUpper,
    TextSpecial,
    Number,
}

impl KeyboardMode {
    pub fn as_token(&self) -> &'static str {
        match self {
            KeyboardMode::TextLower => "TEXT_LOWER",
            KeyboardMode::TextUpper => "TEXT_UPPER",
            KeyboardMode::TextSpecial => "TEXT_SPECIAL",
            KeyboardMode::Number => "NUMBER",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "TEXT_LOWER" => Some(KeyboardMode::TextLower),
            "TEXT_UPPER" => Some(KeyboardMode::TextUpper),
            "TEXT_SPECIAL" => Some(KeyboardMode::TextSpecial),
            "NUMBER" => Some(KeyboardMode::Number),
            _ => None,
        }
    }
}

/// A point of a line widget, canvas-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Style overrides for one widget part (indicator, knob, matrix items).
///
/// All fields optional; nested entries hold per-state overrides. One shared
/// shape covers every part the original modeled separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_opa: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_opa: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_rounded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_opa: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad_all: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad_top: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad_bottom: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad_left: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad_right: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressed: Option<Box<PartStyle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focused: Option<Box<PartStyle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<Box<PartStyle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<Box<PartStyle>>,
}

impl PartStyle {
    pub fn is_empty(&self) -> bool {
        *self == PartStyle::default()
    }
}

/// Control flags of a single button-matrix button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixControl {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub checkable: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub click_trig: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub custom_1: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub custom_2: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub no_repeat: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub popover: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub recolor: bool,
}

impl MatrixControl {
    pub fn any_set(&self) -> bool {
        *self != MatrixControl::default()
    }
}

/// One button of a button-matrix row. `width` is a relative column span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixButton {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control: Option<MatrixControl>,
}

impl MatrixButton {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: Some(text.into()),
            width: Some(1),
            key_code: None,
            selected: None,
            control: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub buttons: Vec<MatrixButton>,
}

/// One named tab of a tabview; owns an independent child forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

/// Flex/grid layout configuration of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutKind {
    Flex,
    Grid,
    None,
}

impl LayoutKind {
    pub fn as_token(&self) -> &'static str {
        match self {
            LayoutKind::Flex => "FLEX",
            LayoutKind::Grid => "GRID",
            LayoutKind::None => "NONE",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "FLEX" => Some(LayoutKind::Flex),
            "GRID" => Some(LayoutKind::Grid),
            "NONE" => Some(LayoutKind::None),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TileLayout {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<LayoutKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_flow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_align_main: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_align_cross: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad_row: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad_column: Option<i32>,
}

/// One tile of a tileview, keyed by (row, column); owns a child forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub id: String,
    pub row: i32,
    pub column: i32,
    #[serde(default)]
    pub dir: Vec<TileDir>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<TileLayout>,
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl Tile {
    pub fn at(row: i32, column: i32) -> Self {
        Self {
            id: format!("tile_{}_{}", row, column),
            row,
            column,
            dir: vec![TileDir::All],
            label: Some(format!("Tile {},{}", row, column)),
            layout: None,
            widgets: Vec::new(),
        }
    }
}

/// A placed widget: common attributes plus the kind-specific attribute bag.
///
/// The bag is flat optionals rather than one payload enum per kind — the
/// property panel mutates single named fields, and most fields are shared by
/// several kinds (colors, borders, ranges). The registry decides which fields
/// a kind actually projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    pub x: i32,
    pub y: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(rename = "zIndex", default)]
    pub z_index: i32,

    // Shared content/value fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,

    // Style (colors in canonical lowercase 0xrrggbb form)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_opa: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_opa: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad_all: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad_row: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad_column: Option<i32>,

    // Bar / roller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<BarMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anim_time: Option<u32>,

    // Arc / spinner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_mode: Option<ArcMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_angle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_angle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_rate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_opa: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_rounded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spin_time: Option<u32>,

    // Part style overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<PartStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knob: Option<PartStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<PartStyle>,

    // LED
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,

    // QR code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_color: Option<String>,

    // Line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_rounded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_dash_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_dash_gap: Option<i32>,

    // Dropdown / roller option lists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_row_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_line_space: Option<i32>,

    // Spinbox
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_from: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_to: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digits: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_digit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollover: Option<bool>,

    // Textarea
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_line: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_chars: Option<String>,

    // Keyboard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textarea: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard_mode: Option<KeyboardMode>,

    // Buttonmatrix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_checked: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<MatrixRow>,

    // Tabview
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread_tabs: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tabs: Vec<Tab>,
    #[serde(
        rename = "selectedTabIndex",
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_tab_index: Option<usize>,

    // Tileview
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tiles: Vec<Tile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_tile_row: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_tile_column: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obj_id: Option<String>,

    // Generic container
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Widget>,
}

impl Widget {
    /// Bare widget with no kind-specific attributes set. Callers normally go
    /// through `registry::new_widget` so defaults get applied.
    pub fn new(id: impl Into<String>, kind: WidgetKind, x: i32, y: i32) -> Self {
        Self {
            id: id.into(),
            kind,
            x,
            y,
            width: None,
            height: None,
            z_index: 0,
            text: None,
            value: None,
            min_value: None,
            max_value: None,
            align: None,
            checkable: None,
            checked: None,
            text_color: None,
            text_opa: None,
            text_font: None,
            bg_color: None,
            bg_opa: None,
            border_color: None,
            border_width: None,
            radius: None,
            shadow_width: None,
            shadow_color: None,
            pad_all: None,
            pad_row: None,
            pad_column: None,
            mode: None,
            start_value: None,
            animated: None,
            anim_time: None,
            rotation: None,
            arc_mode: None,
            adjustable: None,
            start_angle: None,
            end_angle: None,
            change_rate: None,
            arc_color: None,
            arc_opa: None,
            arc_rounded: None,
            arc_width: None,
            arc_length: None,
            spin_time: None,
            indicator: None,
            knob: None,
            items: None,
            color: None,
            brightness: None,
            qr_size: None,
            light_color: None,
            dark_color: None,
            points: None,
            line_width: None,
            line_color: None,
            line_rounded: None,
            line_dash_width: None,
            line_dash_gap: None,
            options: None,
            selected_index: None,
            dir: None,
            symbol: None,
            visible_row_count: None,
            text_line_space: None,
            range_from: None,
            range_to: None,
            digits: None,
            decimal_places: None,
            selected_digit: None,
            rollover: None,
            placeholder_text: None,
            one_line: None,
            password_mode: None,
            max_length: None,
            accepted_chars: None,
            textarea: None,
            keyboard_mode: None,
            one_checked: None,
            rows: Vec::new(),
            position: None,
            size: None,
            spread_tabs: None,
            tabs: Vec::new(),
            selected_tab_index: None,
            tiles: Vec::new(),
            current_tile_row: None,
            current_tile_column: None,
            obj_id: None,
            children: Vec::new(),
        }
    }

    /// Iterate the widget's directly-owned child forests (tabs, tiles, or
    /// generic children). Leaf widgets yield nothing.
    pub fn child_forests(&self) -> impl Iterator<Item = &Vec<Widget>> {
        let tabs = self.tabs.iter().map(|t| &t.widgets);
        let tiles = self.tiles.iter().map(|t| &t.widgets);
        tabs.chain(tiles).chain(std::iter::once(&self.children))
    }

    pub fn child_forests_mut(&mut self) -> Vec<&mut Vec<Widget>> {
        let mut forests: Vec<&mut Vec<Widget>> = Vec::new();
        for tab in &mut self.tabs {
            forests.push(&mut tab.widgets);
        }
        for tile in &mut self.tiles {
            forests.push(&mut tile.widgets);
        }
        forests.push(&mut self.children);
        forests
    }
}
