use std::fmt::Display;

/// Indent-aware YAML line writer shared by the per-kind projection functions
/// and the document serializer. Output is deterministic: lines are emitted in
/// call order with two-space indentation per level.
pub struct YamlWriter {
    out: String,
    indent_level: usize,
}

impl YamlWriter {
    pub fn new() -> Self {
        Self::at_level(0)
    }

    pub fn at_level(indent_level: usize) -> Self {
        Self {
            out: String::new(),
            indent_level,
        }
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        debug_assert!(self.indent_level > 0);
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn level(&self) -> usize {
        self.indent_level
    }

    /// Raw line at the current indent.
    pub fn line(&mut self, content: impl AsRef<str>) {
        for _ in 0..self.indent_level {
            self.out.push_str("  ");
        }
        self.out.push_str(content.as_ref());
        self.out.push('\n');
    }

    /// `key: value` scalar line.
    pub fn kv(&mut self, key: &str, value: impl Display) {
        self.line(format!("{}: {}", key, value));
    }

    /// `key: "value"` double-quoted string line.
    pub fn kv_quoted(&mut self, key: &str, value: &str) {
        self.line(format!("{}: \"{}\"", key, escape(value)));
    }

    /// `key: N%` percentage line.
    pub fn kv_percent(&mut self, key: &str, value: u8) {
        self.line(format!("{}: {}%", key, value));
    }

    /// Mapping key opening a nested block (`key:`).
    pub fn key(&mut self, key: &str) {
        self.line(format!("{}:", key));
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl Default for YamlWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a numeric widget value without a trailing `.0` for whole numbers.
pub fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
