use thiserror::Error;

pub type ImportResult<T> = Result<T, ImportError>;

#[derive(Error, Debug)]
pub enum ImportError {
    /// The document parsed but lacks the `lvgl -> pages -> widgets` shape.
    #[error("Invalid YAML structure. Expected lvgl -> pages -> widgets.")]
    Structure,

    /// The document is not valid YAML at all; the parser message is kept verbatim.
    #[error("Error parsing YAML: {0}")]
    Syntax(#[from] serde_yaml::Error),
}
