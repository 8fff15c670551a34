//! Kinematic Body
//!
//! Semi-implicit Euler integration of acceleration → velocity → position,
//! shared by the player and every swarm member. `dt` is in seconds
//! everywhere; tuning constants elsewhere assume that unit.

use crate::math2d::Vec2;

/// How far the acceleration vector is allowed to push the shield marker.
const SHIELD_ACCEL_CLAMP: f32 = 50.0;

/// Divisor converting clamped acceleration into the shield lean distance.
const SHIELD_LEAN_SCALE: f32 = 5.0;

/// Position/velocity/acceleration state for one moving entity.
/// Owned and mutated exclusively by the entity that embeds it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

impl Body {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
        }
    }

    /// Replace the acceleration outright (no accumulation).
    #[inline]
    pub fn set_acceleration(&mut self, acceleration: Vec2) {
        self.acceleration = acceleration;
    }

    /// Advance one frame. Velocity integrates before position
    /// (semi-implicit Euler), so the new velocity moves the body this frame.
    pub fn step(&mut self, dt: f32) {
        self.velocity = self.velocity + self.acceleration * dt;
        self.position = self.position + self.velocity * dt;
    }

    /// Facing angle in degrees from the velocity heading.
    /// Y is negated for the screen-space rotation convention.
    #[inline]
    pub fn heading_degrees(&self) -> f32 {
        (-self.velocity.y).atan2(self.velocity.x).to_degrees()
    }

    /// The shield marker leans opposite the thrust direction, saturating
    /// once the acceleration magnitude passes the clamp. Recomputed on
    /// demand, never stored.
    #[inline]
    pub fn shield_center(&self) -> Vec2 {
        self.position - self.acceleration.clamp_length(SHIELD_ACCEL_CLAMP) * (1.0 / SHIELD_LEAN_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_deterministic() {
        let run = || {
            let mut body = Body::at(Vec2::new(10.0, -3.0));
            let inputs = [
                (Vec2::new(100.0, 0.0), 0.016),
                (Vec2::new(0.0, -50.0), 0.017),
                (Vec2::new(-25.0, 25.0), 0.016),
                (Vec2::zero(), 0.033),
            ];
            for (accel, dt) in inputs {
                body.set_acceleration(accel);
                body.step(dt);
            }
            body
        };

        let a = run();
        let b = run();
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
    }

    #[test]
    fn test_step_velocity_before_position() {
        let mut body = Body::at(Vec2::zero());
        body.set_acceleration(Vec2::new(10.0, 0.0));
        body.step(1.0);
        // Semi-implicit: position moves by the *updated* velocity
        assert_eq!(body.velocity, Vec2::new(10.0, 0.0));
        assert_eq!(body.position, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_shield_center_below_clamp() {
        let mut body = Body::at(Vec2::new(100.0, 100.0));
        body.set_acceleration(Vec2::new(25.0, 0.0));
        // |accel| <= 50: offset is exactly accel / 5
        assert!(body
            .shield_center()
            .approx_eq(&Vec2::new(95.0, 100.0), 0.001));
    }

    #[test]
    fn test_shield_center_saturates() {
        let mut body = Body::at(Vec2::new(100.0, 100.0));
        body.set_acceleration(Vec2::new(200.0, 0.0));
        // Clamped to 50 before dividing: offset magnitude caps at 10
        assert!(body
            .shield_center()
            .approx_eq(&Vec2::new(90.0, 100.0), 0.001));

        body.set_acceleration(Vec2::new(2000.0, 0.0));
        assert!(body
            .shield_center()
            .approx_eq(&Vec2::new(90.0, 100.0), 0.001));
    }

    #[test]
    fn test_shield_center_zero_accel() {
        let body = Body::at(Vec2::new(7.0, 8.0));
        assert_eq!(body.shield_center(), body.position);
    }

    #[test]
    fn test_heading_degrees() {
        let mut body = Body::default();
        body.velocity = Vec2::new(1.0, 0.0);
        assert!((body.heading_degrees() - 0.0).abs() < 0.001);
        // Moving "up" in world space faces -90 in screen rotation
        body.velocity = Vec2::new(0.0, 1.0);
        assert!((body.heading_degrees() + 90.0).abs() < 0.001);
    }
}
