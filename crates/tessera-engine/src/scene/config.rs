/// Tessellation quality knobs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TessellationConfig {
    /// Segments per quarter-turn corner arc of a rounded rectangle.
    pub corner_segments: u32,
    /// Segments of the filled circle placed at each rounded polyline joint.
    pub round_join_segments: u32,
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            corner_segments: 8,
            round_join_segments: 8,
        }
    }
}
