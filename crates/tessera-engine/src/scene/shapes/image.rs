use crate::coords::{CornerRadius, Rect};
use crate::paint::Color;
use crate::scene::{DrawError, DrawList, TextureId};

impl DrawList {
    /// Blits `texture` into `rect`, tinted by `tint`, optionally rounded.
    ///
    /// The texture applies to this fill only; the list returns to untextured
    /// state afterwards. Passing [`TextureId::NONE`] is a precondition
    /// violation: nothing is drawn and [`DrawError::MissingTexture`] is returned.
    pub fn draw_image(
        &mut self,
        rect: Rect,
        texture: TextureId,
        tint: Color,
        rounding: CornerRadius,
    ) -> Result<(), DrawError> {
        if texture.is_none() {
            log::error!("draw_image: no texture bound for image at {rect:?}");
            return Err(DrawError::MissingTexture);
        }

        self.set_texture(texture);
        self.fill_rect(rect, tint, rounding);
        self.set_texture(TextureId::NONE);
        Ok(())
    }
}
