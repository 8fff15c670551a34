//! Texture Colorizer
//!
//! Remaps a grayscale source texture onto a three-point color gradient:
//! pixels at the mid value take the base color, darker pixels fade toward
//! the low color, brighter pixels toward the high color. Results are
//! memoized per (source identity, color triple), so stamping a whole swarm
//! from one source costs a single remap.

use std::collections::HashMap;
use std::rc::Rc;

use crate::texture::{Texture, TextureId};

/// RGB color triple, 0-255 per channel
pub type Rgb = (u8, u8, u8);

/// The observed sweet spot for the grayscale ship art.
pub const DEFAULT_MID_VALUE: u8 = 72;

/// Remap a grayscale-in-RGBA texture onto a low/base/high gradient.
///
/// Only the red channel of each source pixel is read as the value; alpha and
/// the anchor metadata carry over unchanged. Channel math truncates toward
/// zero, matching the integer gradient the skins were tuned against.
///
/// `mid_value` outside `[1, 254]` is a configuration error: both gradient
/// halves divide by a mid-derived span, so 0 and 255 are rejected rather
/// than silently clamped.
pub fn colorize(
    source: &Texture,
    base: Rgb,
    low: Rgb,
    high: Rgb,
    mid_value: u8,
) -> Result<Texture, String> {
    if mid_value == 0 || mid_value == 255 {
        return Err(format!(
            "colorize: mid_value must be in 1..=254, got {}",
            mid_value
        ));
    }

    let mid = mid_value as i32;
    // Truncate the final value, not the intermediate gradient term
    let fade = |from: u8, to: u8, num: i32, den: i32| -> u8 {
        (from as f32 + (to as f32 - from as f32) * num as f32 / den as f32) as u8
    };

    let mut out = Texture::new(source.width(), source.height());
    let (ax, ay) = source.anchor();
    out.set_anchor(ax, ay);

    for y in 0..source.height() {
        for x in 0..source.width() {
            let Some((value, _, _, alpha)) = source.pixel(x, y) else {
                continue;
            };
            let v = value as i32;

            let (r, g, b) = if v < mid {
                (
                    fade(base.0, low.0, mid - v, mid),
                    fade(base.1, low.1, mid - v, mid),
                    fade(base.2, low.2, mid - v, mid),
                )
            } else {
                (
                    fade(base.0, high.0, v - mid, 255 - mid),
                    fade(base.1, high.1, v - mid, 255 - mid),
                    fade(base.2, high.2, v - mid, 255 - mid),
                )
            };

            out.set_pixel(x, y, r, g, b, alpha);
        }
    }

    Ok(out)
}

// ============================================================================
// Memoization
// ============================================================================

type CacheKey = (TextureId, Rgb, Rgb, Rgb);

/// Memoizing front-end for [`colorize`].
///
/// Keyed by source *identity*, not content: two different sources never
/// share a cache entry even if their pixels match. The cache is append-only
/// and lives for the process lifetime; the keyspace is bounded by the number
/// of distinct skins, not by runtime events.
pub struct Colorizer {
    mid_value: u8,
    cache: HashMap<CacheKey, Rc<Texture>>,
}

impl Colorizer {
    pub fn new() -> Self {
        Self::with_mid_value(DEFAULT_MID_VALUE)
    }

    pub fn with_mid_value(mid_value: u8) -> Self {
        Self {
            mid_value,
            cache: HashMap::new(),
        }
    }

    /// Colorized texture for (source, base, low, high), computed on first
    /// use and served from the cache afterwards.
    pub fn get(
        &mut self,
        source: &Texture,
        base: Rgb,
        low: Rgb,
        high: Rgb,
    ) -> Result<Rc<Texture>, String> {
        let key = (source.id(), base, low, high);
        if let Some(cached) = self.cache.get(&key) {
            return Ok(Rc::clone(cached));
        }

        let colored = Rc::new(colorize(source, base, low, high, self.mid_value)?);
        self.cache.insert(key, Rc::clone(&colored));
        Ok(colored)
    }

    /// Number of distinct (source, colors) entries computed so far
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Rgb = (100, 150, 200);
    const LOW: Rgb = (10, 20, 30);
    const HIGH: Rgb = (250, 240, 230);

    fn gray_pixel(value: u8, alpha: u8) -> Texture {
        let mut tex = Texture::new(1, 1);
        tex.set_pixel(0, 0, value, value, value, alpha);
        tex
    }

    #[test]
    fn test_mid_value_maps_to_base() {
        let tex = gray_pixel(72, 255);
        let out = colorize(&tex, BASE, LOW, HIGH, 72).unwrap();
        assert_eq!(out.pixel(0, 0), Some((BASE.0, BASE.1, BASE.2, 255)));
    }

    #[test]
    fn test_extremes_map_to_low_and_high() {
        let out = colorize(&gray_pixel(0, 255), BASE, LOW, HIGH, 72).unwrap();
        assert_eq!(out.pixel(0, 0), Some((LOW.0, LOW.1, LOW.2, 255)));

        let out = colorize(&gray_pixel(255, 255), BASE, LOW, HIGH, 72).unwrap();
        assert_eq!(out.pixel(0, 0), Some((HIGH.0, HIGH.1, HIGH.2, 255)));
    }

    #[test]
    fn test_alpha_preserved() {
        let out = colorize(&gray_pixel(130, 77), BASE, LOW, HIGH, 72).unwrap();
        let (_, _, _, a) = out.pixel(0, 0).unwrap();
        assert_eq!(a, 77);
    }

    #[test]
    fn test_gradient_truncates() {
        // value 71, mid 72: base + (low - base) * 1 / 72 per channel,
        // truncated after the fractional gradient is applied
        let out = colorize(&gray_pixel(71, 255), BASE, LOW, HIGH, 72).unwrap();
        let (r, g, b, _) = out.pixel(0, 0).unwrap();
        assert_eq!(r, 98); // 100 - 1.25 → 98
        assert_eq!(g, 148); // 150 - 1.805 → 148
        assert_eq!(b, 197); // 200 - 2.361 → 197
    }

    #[test]
    fn test_anchor_preserved() {
        let mut tex = gray_pixel(100, 255);
        tex.set_anchor(0.5, 0.25);
        let out = colorize(&tex, BASE, LOW, HIGH, 72).unwrap();
        assert_eq!(out.anchor(), (0.5, 0.25));
    }

    #[test]
    fn test_mid_value_bounds_rejected() {
        let tex = gray_pixel(0, 255);
        assert!(colorize(&tex, BASE, LOW, HIGH, 0).is_err());
        assert!(colorize(&tex, BASE, LOW, HIGH, 255).is_err());
        assert!(colorize(&tex, BASE, LOW, HIGH, 1).is_ok());
        assert!(colorize(&tex, BASE, LOW, HIGH, 254).is_ok());
    }

    #[test]
    fn test_cache_hit_same_source() {
        let tex = gray_pixel(100, 255);
        let mut colorizer = Colorizer::new();
        let first = colorizer.get(&tex, BASE, LOW, HIGH).unwrap();
        let second = colorizer.get(&tex, BASE, LOW, HIGH).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(colorizer.cached_count(), 1);
    }

    #[test]
    fn test_cache_keyed_by_identity_not_content() {
        // Pixel-identical sources, distinct identities
        let a = gray_pixel(100, 255);
        let b = gray_pixel(100, 255);
        assert_eq!(a.as_bytes(), b.as_bytes());

        let mut colorizer = Colorizer::new();
        let from_a = colorizer.get(&a, BASE, LOW, HIGH).unwrap();
        let from_b = colorizer.get(&b, BASE, LOW, HIGH).unwrap();
        assert!(!Rc::ptr_eq(&from_a, &from_b));
        assert_eq!(colorizer.cached_count(), 2);
    }

    #[test]
    fn test_cache_distinguishes_colors() {
        let tex = gray_pixel(100, 255);
        let mut colorizer = Colorizer::new();
        let _ = colorizer.get(&tex, BASE, LOW, HIGH).unwrap();
        let _ = colorizer.get(&tex, (1, 2, 3), LOW, HIGH).unwrap();
        assert_eq!(colorizer.cached_count(), 2);
    }
}
