//! Ships
//!
//! The player craft and the alien swarm members. Both embed a kinematic
//! [`Body`] and mirror its state into their sprites every tick; aliens
//! additionally drive an off-screen pointer from the indicator geometry.

use std::rc::Rc;

use crate::body::Body;
use crate::geometry::Viewport;
use crate::math2d::Vec2;
use crate::sprite::{SpriteBatch, SpriteId, Visual};
use crate::texture::Texture;

/// Draw order: ships under shields, pointers on the overlay.
pub const LAYER_SHIP: i32 = 10;
pub const LAYER_SHIELD: i32 = 20;
pub const LAYER_OVERLAY: i32 = 30;

const ALIEN_SHIP_SCALE: f32 = 0.8;

/// An alien ship: facing tracks the velocity heading, and an edge pointer
/// marks it whenever its shield center leaves the viewport.
pub struct Alien {
    body: Body,
    ship: SpriteId,
    shield: SpriteId,
    pointer: SpriteId,
    pointer_warned: bool,
}

impl Alien {
    pub fn new(
        batch: &mut SpriteBatch,
        ship_texture: Rc<Texture>,
        shield_texture: Rc<Texture>,
        pointer_texture: Rc<Texture>,
        position: Vec2,
    ) -> Self {
        let ship = batch.create_sprite(ship_texture, LAYER_SHIP);
        let shield = batch.create_sprite(shield_texture, LAYER_SHIELD);
        let pointer = batch.create_sprite(pointer_texture, LAYER_OVERLAY);

        batch.sprite_mut(ship).set_scale(ALIEN_SHIP_SCALE);
        batch.sprite_mut(pointer).set_visible(false);

        Self {
            body: Body::at(position),
            ship,
            shield,
            pointer,
            pointer_warned: false,
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn set_acceleration(&mut self, acceleration: Vec2) {
        self.body.set_acceleration(acceleration);
    }

    /// Integrate one frame and turn the ship to face its velocity heading.
    pub fn update(&mut self, dt: f32, batch: &mut SpriteBatch) {
        self.body.step(dt);
        batch
            .sprite_mut(self.ship)
            .set_rotation(self.body.heading_degrees());
    }

    /// Push world positions through the camera into the sprites.
    /// Projection only; no physics happens here.
    pub fn reposition_for_camera(&self, camera_offset: Vec2, batch: &mut SpriteBatch) {
        batch
            .sprite_mut(self.ship)
            .set_position(self.body.position - camera_offset);
        batch
            .sprite_mut(self.shield)
            .set_position(self.body.shield_center() - camera_offset);
    }

    /// Show, place, and angle the edge pointer when the ship is off screen.
    ///
    /// On-screen hides the pointer. Off-screen with a degenerate direction
    /// (ship exactly at the viewer) keeps the pointer as it was and warns
    /// once.
    pub fn set_pointer_position(
        &mut self,
        viewer: Vec2,
        viewport: &Viewport,
        batch: &mut SpriteBatch,
    ) {
        let shield_center = self.body.shield_center();

        if viewport.contains(viewer, shield_center) {
            batch.sprite_mut(self.pointer).set_visible(false);
            return;
        }

        match viewport.edge_intercept(viewer, shield_center) {
            Some(placement) => {
                let pointer = batch.sprite_mut(self.pointer);
                pointer.set_position(placement.position);
                pointer.set_rotation(placement.rotation);
                pointer.set_visible(true);
            },
            None => {
                if !self.pointer_warned {
                    eprintln!("alien pointer: no edge intercept, keeping previous placement");
                    self.pointer_warned = true;
                }
            },
        }
    }

    pub fn ship_sprite(&self) -> SpriteId {
        self.ship
    }

    pub fn pointer_sprite(&self) -> SpriteId {
        self.pointer
    }
}

/// The player craft. Rotation is steered directly by input deltas rather
/// than derived from the velocity heading.
pub struct Player {
    body: Body,
    rotation: f32,
    ship: SpriteId,
    shield: SpriteId,
}

impl Player {
    pub fn new(
        batch: &mut SpriteBatch,
        ship_texture: Rc<Texture>,
        shield_texture: Rc<Texture>,
        position: Vec2,
    ) -> Self {
        let ship = batch.create_sprite(ship_texture, LAYER_SHIP);
        let shield = batch.create_sprite(shield_texture, LAYER_SHIELD);

        Self {
            body: Body::at(position),
            rotation: 0.0,
            ship,
            shield,
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_acceleration(&mut self, acceleration: Vec2) {
        self.body.set_acceleration(acceleration);
    }

    /// Apply a steering delta in degrees (keyboard turn rate × dt).
    pub fn rotate_by(&mut self, degrees: f32, batch: &mut SpriteBatch) {
        self.rotation += degrees;
        batch.sprite_mut(self.ship).set_rotation(self.rotation);
    }

    /// Kinematics only; facing stays wherever the player steered it.
    pub fn update(&mut self, dt: f32) {
        self.body.step(dt);
    }

    /// The player's shield sits on the hull, not offset by thrust.
    pub fn reposition_for_camera(&self, camera_offset: Vec2, batch: &mut SpriteBatch) {
        let screen = self.body.position - camera_offset;
        batch.sprite_mut(self.ship).set_position(screen);
        batch.sprite_mut(self.shield).set_position(screen);
    }
}
