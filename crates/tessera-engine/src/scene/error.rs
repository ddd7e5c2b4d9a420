use std::fmt;

/// Precondition violations reported by draw-list operations.
///
/// Degenerate geometry is never an error; it is a silent no-op.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawError {
    /// A textured draw was issued with `TextureId::NONE`.
    MissingTexture,
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::MissingTexture => write!(f, "textured draw issued without a texture"),
        }
    }
}

impl std::error::Error for DrawError {}
