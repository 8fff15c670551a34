//! Swarm
//!
//! An ordered collection of alien ships built once at spawn time from
//! shared textures, updated and repositioned as a unit. The swarm is the
//! sole owner of its members; iteration always follows insertion order.

use std::rc::Rc;

use crate::entity::Alien;
use crate::geometry::Viewport;
use crate::math2d::Vec2;
use crate::sprite::SpriteBatch;
use crate::texture::Texture;
use crate::util::Rng;

/// How strongly swarm members thrust toward their steering target.
const SEEK_ACCEL: f32 = 120.0;

/// Spawn scatter radius around the swarm origin.
const SPAWN_SCATTER: f32 = 200.0;

pub struct Swarm {
    members: Vec<Alien>,
}

impl Swarm {
    /// Build `size` aliens scattered around `origin`, all sharing the same
    /// skin textures.
    pub fn new(
        size: usize,
        batch: &mut SpriteBatch,
        ship_texture: &Rc<Texture>,
        shield_texture: &Rc<Texture>,
        pointer_texture: &Rc<Texture>,
        origin: Vec2,
        rng: &mut Rng,
    ) -> Self {
        let mut members = Vec::with_capacity(size);
        for _ in 0..size {
            let scatter = Vec2::new(
                rng.range_f32(-SPAWN_SCATTER, SPAWN_SCATTER),
                rng.range_f32(-SPAWN_SCATTER, SPAWN_SCATTER),
            );
            members.push(Alien::new(
                batch,
                Rc::clone(ship_texture),
                Rc::clone(shield_texture),
                Rc::clone(pointer_texture),
                origin + scatter,
            ));
        }
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alien> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Alien> {
        self.members.iter_mut()
    }

    /// Point every member's thrust at `target` (or coast when already there).
    pub fn set_accelerations_toward(&mut self, target: Vec2) {
        for alien in &mut self.members {
            let dir = (target - alien.body().position).normalize();
            alien.set_acceleration(dir * SEEK_ACCEL);
        }
    }

    /// Cut all thrust (mouse released in the demo)
    pub fn clear_accelerations(&mut self) {
        for alien in &mut self.members {
            alien.set_acceleration(Vec2::zero());
        }
    }

    pub fn update(&mut self, dt: f32, batch: &mut SpriteBatch) {
        for alien in &mut self.members {
            alien.update(dt, batch);
        }
    }

    pub fn reposition_for_camera(&self, camera_offset: Vec2, batch: &mut SpriteBatch) {
        for alien in &self.members {
            alien.reposition_for_camera(camera_offset, batch);
        }
    }

    pub fn set_pointer_positions(
        &mut self,
        viewer: Vec2,
        viewport: &Viewport,
        batch: &mut SpriteBatch,
    ) {
        for alien in &mut self.members {
            alien.set_pointer_position(viewer, viewport, batch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_texture() -> Rc<Texture> {
        let mut tex = Texture::new(4, 4);
        tex.set_pixel(1, 1, 128, 128, 128, 255);
        tex.center_anchor();
        Rc::new(tex)
    }

    fn swarm_of(size: usize, batch: &mut SpriteBatch) -> Swarm {
        let ship = test_texture();
        let shield = test_texture();
        let pointer = test_texture();
        let mut rng = Rng::new(42);
        Swarm::new(size, batch, &ship, &shield, &pointer, Vec2::zero(), &mut rng)
    }

    #[test]
    fn test_swarm_size() {
        let mut batch = SpriteBatch::new();
        let swarm = swarm_of(5, &mut batch);
        assert_eq!(swarm.len(), 5);
        assert!(!swarm.is_empty());
        // Three sprites per member
        assert_eq!(batch.len(), 15);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut batch = SpriteBatch::new();
        let swarm = swarm_of(4, &mut batch);
        let first: Vec<Vec2> = swarm.iter().map(|a| a.body().position).collect();
        let second: Vec<Vec2> = swarm.iter().map(|a| a.body().position).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bulk_update_moves_every_member() {
        let mut batch = SpriteBatch::new();
        let mut swarm = swarm_of(3, &mut batch);
        let before: Vec<Vec2> = swarm.iter().map(|a| a.body().position).collect();

        swarm.set_accelerations_toward(Vec2::new(10_000.0, 10_000.0));
        swarm.update(0.5, &mut batch);

        for (alien, start) in swarm.iter().zip(before) {
            assert!(!alien.body().position.approx_eq(&start, 0.001));
        }
    }

    #[test]
    fn test_seek_acceleration_magnitude() {
        let mut batch = SpriteBatch::new();
        let mut swarm = swarm_of(2, &mut batch);
        swarm.set_accelerations_toward(Vec2::new(5_000.0, 0.0));
        for alien in swarm.iter() {
            assert!((alien.body().acceleration.length() - SEEK_ACCEL).abs() < 0.01);
        }

        swarm.clear_accelerations();
        for alien in swarm.iter() {
            assert_eq!(alien.body().acceleration, Vec2::zero());
        }
    }
}
