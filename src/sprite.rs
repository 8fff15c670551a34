//! Sprites and the Draw Batch
//!
//! The entity layer never touches rendering internals; it talks to its
//! visuals through the [`Visual`] capability (position, rotation,
//! visibility, scale) and the batch turns those into rotated, alpha-blended
//! blits at draw time, back-to-front by layer.
//!
//! Screen coordinates here are y-up with the origin at the bottom-left,
//! matching the world math; the blit flips into the buffer's y-down rows.

use std::rc::Rc;

use crate::display::PixelBuffer;
use crate::math2d::Vec2;
use crate::texture::Texture;

/// The four operations an entity may apply to its visual representation.
pub trait Visual {
    fn set_position(&mut self, position: Vec2);
    /// Rotation in degrees, clockwise in screen space
    fn set_rotation(&mut self, degrees: f32);
    fn set_visible(&mut self, visible: bool);
    fn set_scale(&mut self, scale: f32);
}

/// A positioned, rotated, textured quad owned by the batch.
pub struct Sprite {
    texture: Rc<Texture>,
    layer: i32,
    position: Vec2,
    rotation: f32,
    scale: f32,
    visible: bool,
}

impl Sprite {
    fn new(texture: Rc<Texture>, layer: i32) -> Self {
        Self {
            texture,
            layer,
            position: Vec2::zero(),
            rotation: 0.0,
            scale: 1.0,
            visible: true,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Swap in a different texture (shared skins after recolorization)
    pub fn set_texture(&mut self, texture: Rc<Texture>) {
        self.texture = texture;
    }
}

impl Visual for Sprite {
    #[inline]
    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    #[inline]
    fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    #[inline]
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

/// Handle into the batch's sprite arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteId(usize);

/// Owns every sprite and draws them in ascending layer order.
/// Creation order breaks ties within a layer.
pub struct SpriteBatch {
    sprites: Vec<Sprite>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self {
            sprites: Vec::new(),
        }
    }

    pub fn create_sprite(&mut self, texture: Rc<Texture>, layer: i32) -> SpriteId {
        self.sprites.push(Sprite::new(texture, layer));
        SpriteId(self.sprites.len() - 1)
    }

    pub fn sprite(&self, id: SpriteId) -> &Sprite {
        &self.sprites[id.0]
    }

    pub fn sprite_mut(&mut self, id: SpriteId) -> &mut Sprite {
        &mut self.sprites[id.0]
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Render all visible sprites into the buffer, lowest layer first.
    pub fn draw(&self, buffer: &mut PixelBuffer) {
        let mut order: Vec<usize> = (0..self.sprites.len()).collect();
        order.sort_by_key(|&i| self.sprites[i].layer);

        for i in order {
            let sprite = &self.sprites[i];
            if sprite.visible {
                blit_sprite(buffer, sprite);
            }
        }
    }
}

impl Default for SpriteBatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Rotated nearest-neighbor blit about the texture anchor.
///
/// Walks the destination bounding box and inverse-rotates each pixel back
/// into texture space, alpha-blending samples that land inside.
fn blit_sprite(buffer: &mut PixelBuffer, sprite: &Sprite) {
    let tex = &sprite.texture;
    let scale = sprite.scale;
    if scale <= 0.0 {
        return;
    }

    let (ax, ay) = tex.anchor();
    let w = tex.width() as f32;
    let h = tex.height() as f32;

    // Conservative footprint: half the scaled diagonal in every direction
    let radius = ((w * w + h * h).sqrt() / 2.0 * scale) + 1.0;

    let buf_h = buffer.height() as f32;
    let cx = sprite.position.x;
    // Flip into y-down buffer rows
    let cy = buf_h - sprite.position.y;

    let x0 = (cx - radius).floor() as i32;
    let x1 = (cx + radius).ceil() as i32;
    let y0 = (cy - radius).floor() as i32;
    let y1 = (cy + radius).ceil() as i32;

    // Clockwise screen rotation; the inverse map rotates by the same angle
    // in the buffer's y-down frame.
    let (sin, cos) = sprite.rotation.to_radians().sin_cos();

    for dy in y0..=y1 {
        for dx in x0..=x1 {
            let ox = (dx as f32 + 0.5 - cx) / scale;
            let oy = (dy as f32 + 0.5 - cy) / scale;

            // Inverse rotation back into texture space (y-down, anchor origin)
            let tx = ax + ox * cos - oy * sin;
            let ty = ay + ox * sin + oy * cos;

            if tx < 0.0 || ty < 0.0 || tx >= w || ty >= h {
                continue;
            }

            if let Some((r, g, b, a)) = tex.pixel(tx as u32, ty as u32) {
                if a > 0 {
                    buffer.blend_pixel(dx, dy, r, g, b, a);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_texture(size: u32, color: (u8, u8, u8)) -> Rc<Texture> {
        let mut tex = Texture::new(size, size);
        for y in 0..size {
            for x in 0..size {
                tex.set_pixel(x, y, color.0, color.1, color.2, 255);
            }
        }
        tex.center_anchor();
        Rc::new(tex)
    }

    #[test]
    fn test_visual_setters() {
        let mut batch = SpriteBatch::new();
        let id = batch.create_sprite(solid_texture(4, (255, 0, 0)), 10);

        let sprite = batch.sprite_mut(id);
        sprite.set_position(Vec2::new(12.0, 34.0));
        sprite.set_rotation(45.0);
        sprite.set_scale(0.8);
        sprite.set_visible(false);

        let sprite = batch.sprite(id);
        assert_eq!(sprite.position(), Vec2::new(12.0, 34.0));
        assert_eq!(sprite.rotation(), 45.0);
        assert_eq!(sprite.scale(), 0.8);
        assert!(!sprite.visible());
    }

    #[test]
    fn test_draw_centers_on_position() {
        let mut batch = SpriteBatch::new();
        let id = batch.create_sprite(solid_texture(4, (200, 10, 10)), 0);
        batch
            .sprite_mut(id)
            .set_position(Vec2::new(16.0, 16.0));

        let mut buffer = PixelBuffer::with_size(32, 32);
        buffer.clear(0, 0, 0);
        batch.draw(&mut buffer);

        // y-up position 16 lands on buffer row 16 (32 - 16)
        assert_eq!(buffer.get_pixel(16, 16), Some((200, 10, 10)));
        assert_eq!(buffer.get_pixel(0, 0), Some((0, 0, 0)));
    }

    #[test]
    fn test_draw_skips_invisible() {
        let mut batch = SpriteBatch::new();
        let id = batch.create_sprite(solid_texture(4, (200, 10, 10)), 0);
        let sprite = batch.sprite_mut(id);
        sprite.set_position(Vec2::new(16.0, 16.0));
        sprite.set_visible(false);

        let mut buffer = PixelBuffer::with_size(32, 32);
        buffer.clear(0, 0, 0);
        batch.draw(&mut buffer);

        assert_eq!(buffer.get_pixel(16, 16), Some((0, 0, 0)));
    }

    #[test]
    fn test_draw_layers_back_to_front() {
        let mut batch = SpriteBatch::new();
        // Created out of order: the higher layer still lands on top
        let top = batch.create_sprite(solid_texture(4, (0, 0, 250)), 20);
        let bottom = batch.create_sprite(solid_texture(8, (250, 0, 0)), 10);
        batch.sprite_mut(top).set_position(Vec2::new(16.0, 16.0));
        batch.sprite_mut(bottom).set_position(Vec2::new(16.0, 16.0));

        let mut buffer = PixelBuffer::with_size(32, 32);
        buffer.clear(0, 0, 0);
        batch.draw(&mut buffer);

        assert_eq!(buffer.get_pixel(16, 16), Some((0, 0, 250)));
    }
}
