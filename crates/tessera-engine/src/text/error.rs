use std::fmt;

/// Error returned when a glyph-atlas provider cannot bake a font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}
