//! 2D Vector Math
//!
//! Provides the vector operations shared by all moving entities:
//! arithmetic, length, normalization, and magnitude clamping.

use std::ops::{Add, Mul, Neg, Sub};

/// 2D Vector (world positions, velocities, accelerations)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self {
                x: self.x / len,
                y: self.y / len,
            }
        } else {
            *self
        }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Clamp the vector's magnitude to `max`, preserving direction.
    /// Vectors at or below `max` come back unchanged.
    #[inline]
    pub fn clamp_length(&self, max: f32) -> Self {
        let len = self.length();
        if len > max {
            *self * (max / len)
        } else {
            *self
        }
    }

    /// Approximate equality check for floating point comparison
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    #[inline]
    fn mul(self, v: Vec2) -> Vec2 {
        v * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_length_under_max() {
        let v = Vec2::new(3.0, 4.0); // length 5
        assert_eq!(v.clamp_length(50.0), v);
        assert_eq!(v.clamp_length(5.0), v);
    }

    #[test]
    fn test_clamp_length_over_max() {
        let v = Vec2::new(200.0, 0.0);
        let clamped = v.clamp_length(50.0);
        assert!(clamped.approx_eq(&Vec2::new(50.0, 0.0), 0.001));
    }

    #[test]
    fn test_clamp_length_preserves_direction() {
        let v = Vec2::new(30.0, 40.0); // length 50, direction (0.6, 0.8)
        let clamped = (v * 4.0).clamp_length(50.0);
        assert!(clamped.approx_eq(&v, 0.001));
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(Vec2::zero().normalize(), Vec2::zero());
    }
}
