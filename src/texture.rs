//! Texture Storage and Procedural Ship Art
//!
//! RGBA textures with rotation-anchor metadata, plus the procedural
//! grayscale sources used to stamp out ship, shield, and pointer sprites.
//! Every texture carries a process-unique identity so the colorizer cache
//! can distinguish two sources even when their pixels match.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TEXTURE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique texture identity. Two textures with identical pixel
/// content still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(u64);

fn alloc_id() -> TextureId {
    TextureId(NEXT_TEXTURE_ID.fetch_add(1, Ordering::Relaxed))
}

/// A texture stored as RGBA pixels, with an anchor point used as the
/// rotation/positioning origin when the texture is drawn as a sprite.
#[derive(Clone)]
pub struct Texture {
    id: TextureId,
    width: u32,
    height: u32,
    anchor_x: f32,
    anchor_y: f32,
    pixels: Vec<u8>, // RGBA format, 4 bytes per pixel
}

impl Texture {
    /// Create a new transparent texture with the anchor at the origin
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            id: alloc_id(),
            width,
            height,
            anchor_x: 0.0,
            anchor_y: 0.0,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    /// Create texture from raw RGBA data
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() == (width * height * 4) as usize {
            Some(Self {
                id: alloc_id(),
                width,
                height,
                anchor_x: 0.0,
                anchor_y: 0.0,
                pixels: data,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn id(&self) -> TextureId {
        self.id
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn anchor(&self) -> (f32, f32) {
        (self.anchor_x, self.anchor_y)
    }

    pub fn set_anchor(&mut self, x: f32, y: f32) {
        self.anchor_x = x;
        self.anchor_y = y;
    }

    /// Put the anchor at the texture center (the usual case for ships)
    pub fn center_anchor(&mut self) {
        self.anchor_x = self.width as f32 / 2.0;
        self.anchor_y = self.height as f32 / 2.0;
    }

    /// Set a pixel in the texture
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
        if x < self.width && y < self.height {
            let idx = ((y * self.width + x) * 4) as usize;
            self.pixels[idx] = r;
            self.pixels[idx + 1] = g;
            self.pixels[idx + 2] = b;
            self.pixels[idx + 3] = a;
        }
    }

    /// Read a pixel (bounds checked). Returns (r, g, b, a).
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if x < self.width && y < self.height {
            let idx = ((y * self.width + x) * 4) as usize;
            Some((
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            ))
        } else {
            None
        }
    }

    /// Raw RGBA bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

// ============================================================================
// Procedural Ship Art
// ============================================================================
//
// Grayscale-in-RGBA sources for the colorizer: the red channel carries the
// value, alpha carries the silhouette. Generated at startup instead of
// loading image assets.

impl Texture {
    /// A pointed-hull ship silhouette facing +X, brightest along the spine.
    pub fn ship_gray(size: u32) -> Self {
        let mut tex = Self::new(size, size);
        let half = size as f32 / 2.0;

        for y in 0..size {
            for x in 0..size {
                let fx = x as f32 + 0.5;
                let fy = y as f32 + 0.5;
                // Triangular hull: widest at the tail, tapering to the nose
                let span = (1.0 - fx / size as f32) * half * 0.8;
                let dist = (fy - half).abs();
                if dist <= span {
                    // Bright spine fading toward the hull edge
                    let v = 72.0 + (1.0 - dist / half) * 150.0;
                    tex.set_pixel(x, y, v as u8, v as u8, v as u8, 255);
                }
            }
        }

        tex.center_anchor();
        tex
    }

    /// A soft shield ring, mid-gray with a bright rim.
    pub fn shield_gray(size: u32) -> Self {
        let mut tex = Self::new(size, size);
        let half = size as f32 / 2.0;
        let rim = half * 0.85;

        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 + 0.5 - half;
                let dy = y as f32 + 0.5 - half;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist <= rim {
                    let v = 40.0 + (dist / rim) * 180.0;
                    let a = (120.0 * (dist / rim)) as u8;
                    tex.set_pixel(x, y, v as u8, v as u8, v as u8, a);
                }
            }
        }

        tex.center_anchor();
        tex
    }

    /// An arrowhead pointer facing +X.
    pub fn pointer_gray(size: u32) -> Self {
        let mut tex = Self::new(size, size);
        let half = size as f32 / 2.0;

        for y in 0..size {
            for x in 0..size {
                let fx = x as f32 + 0.5;
                let fy = y as f32 + 0.5;
                let span = (1.0 - fx / size as f32) * half;
                if (fy - half).abs() <= span {
                    let v = 72.0 + (fx / size as f32) * 180.0;
                    tex.set_pixel(x, y, v as u8, v as u8, v as u8, 255);
                }
            }
        }

        tex.center_anchor();
        tex
    }
}
