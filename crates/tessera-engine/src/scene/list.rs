use crate::coords::{Rect, Vec2};
use crate::paint::Color;

use super::{DrawCommand, DrawVertex, TessellationConfig, TextureId};

/// UVs for a quad pushed in TL, TR, BR, BL order.
pub(crate) const QUAD_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// Per-frame vertex/index/command buffers plus the state that decides batching.
///
/// Lifecycle:
/// - [`clear`](Self::clear) at the start of every frame
/// - shape calls (`add_line`, `fill_rect`, ...) append geometry
/// - the frame sink reads [`vertices`](Self::vertices), [`indices`](Self::indices)
///   and [`commands`](Self::commands) before the next `clear`
///
/// # Batching
///
/// After every completed triangle the current `(clip_rect, texture)` pair is
/// compared with the last command. A difference opens a new command starting
/// right after the previous one; otherwise the last command grows by 3
/// indices. Commands are therefore contiguous, non-overlapping and cover the
/// whole index array.
///
/// Indices are absolute into `vertices`; every command has `vertex_offset == 0`.
#[derive(Debug)]
pub struct DrawList {
    vertices: Vec<DrawVertex>,
    indices: Vec<u32>,
    commands: Vec<DrawCommand>,

    clip_rect: Option<Rect>,
    texture: TextureId,
    /// Packed ABGR color stamped on every pushed vertex.
    current_color: u32,

    config: TessellationConfig,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::with_config(TessellationConfig::default())
    }

    pub fn with_config(config: TessellationConfig) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            commands: Vec::new(),
            clip_rect: None,
            texture: TextureId::NONE,
            current_color: Color::WHITE.to_abgr_u32(),
            config,
        }
    }

    /// Empties all buffers and resets clip, texture and paint state.
    /// Keeps allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.commands.clear();
        self.clip_rect = None;
        self.texture = TextureId::NONE;
        self.current_color = Color::WHITE.to_abgr_u32();
    }

    #[inline]
    pub fn vertices(&self) -> &[DrawVertex] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn config(&self) -> TessellationConfig {
        self.config
    }

    #[inline]
    pub fn set_config(&mut self, config: TessellationConfig) {
        self.config = config;
    }

    // ── state ─────────────────────────────────────────────────────────────

    /// Scissor rect recorded on subsequent commands.
    #[inline]
    pub fn set_clip_rect(&mut self, rect: Rect) {
        self.clip_rect = Some(rect);
    }

    #[inline]
    pub fn reset_clip_rect(&mut self) {
        self.clip_rect = None;
    }

    #[inline]
    pub fn clip_rect(&self) -> Option<Rect> {
        self.clip_rect
    }

    #[inline]
    pub fn set_texture(&mut self, texture: TextureId) {
        self.texture = texture;
    }

    #[inline]
    pub fn texture(&self) -> TextureId {
        self.texture
    }

    // ── raw emitters ──────────────────────────────────────────────────────

    /// Appends one triangle with explicit positions and UVs.
    pub fn add_triangle_raw(&mut self, pos: [Vec2; 3], uvs: [Vec2; 3], color: Color) {
        let base = self.begin_shape(color);
        for (p, uv) in pos.into_iter().zip(uvs) {
            self.push_vertex(p, uv);
        }
        self.push_triangle(base, base + 1, base + 2);
    }

    /// Appends a quad (two triangles: 0-1-2, 0-2-3) with explicit positions and UVs.
    pub fn add_quad_raw(&mut self, pos: [Vec2; 4], uvs: [Vec2; 4], color: Color) {
        let base = self.begin_shape(color);
        for (p, uv) in pos.into_iter().zip(uvs) {
            self.push_vertex(p, uv);
        }
        self.push_triangle(base, base + 1, base + 2);
        self.push_triangle(base, base + 2, base + 3);
    }

    // ── internals shared by shape emitters ────────────────────────────────

    /// Sets the paint color and returns the index the next vertex will get.
    #[inline]
    pub(crate) fn begin_shape(&mut self, color: Color) -> u32 {
        self.current_color = color.to_abgr_u32();
        self.vertices.len() as u32
    }

    #[inline]
    pub(crate) fn push_vertex(&mut self, pos: Vec2, uv: Vec2) {
        self.vertices.push(DrawVertex::new(pos, uv, self.current_color));
    }

    pub(crate) fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
        self.extend_command();
    }

    /// Triangulates every vertex pushed after `center` as a fan around it.
    ///
    /// The perimeter must have been pushed as one contiguous, consistently
    /// wound run right after the center vertex. Emits one triangle per
    /// consecutive perimeter pair plus a closing triangle back to the first
    /// perimeter vertex: `n` triangles for `n` perimeter vertices.
    pub(crate) fn fan_to_mid(&mut self, center: u32) {
        let count = self.vertices.len() as u32 - center - 1;
        if count < 2 {
            return;
        }

        for i in 0..count - 1 {
            self.push_triangle(center, center + i + 1, center + i + 2);
        }
        self.push_triangle(center, center + count, center + 1);
    }

    fn extend_command(&mut self) {
        if self.state_changed() {
            let offset = self.commands.last().map_or(0, DrawCommand::index_end);
            self.commands.push(DrawCommand::open(offset, self.clip_rect, self.texture));
        }
        if let Some(last) = self.commands.last_mut() {
            last.index_count += 3;
        }
    }

    fn state_changed(&self) -> bool {
        match self.commands.last() {
            None => true,
            Some(last) => last.clip_rect != self.clip_rect || last.texture != self.texture,
        }
    }
}
