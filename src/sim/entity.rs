//! Kinematic entity: the craft and every asteroid
//!
//! Integration per update:
//! 1. gravity is added to vertical acceleration (scaled by dt)
//! 2. movement accumulates acceleration
//! 3. position advances by movement * speed
//! 4. acceleration is damped once (not time-normalized)
//! 5. the world transform is rebuilt (translate, then scale)

use glam::{Mat4, Vec3};

use super::animation::{AnimationKind, SpriteSheet};
use super::collision::Aabb;
use crate::consts::*;

/// A movable or stationary physical body
#[derive(Debug, Clone)]
pub struct Entity {
    position: Vec3,
    /// Direction/velocity-like accumulator actually used to move
    movement: Vec3,
    /// Carried for callers, not read by the integrator
    velocity: Vec3,
    acceleration: Vec3,
    scale: Vec3,
    speed: f32,
    gravity: f32,
    /// Stored but not applied
    drag: f32,
    damping: f32,
    fuel: f32,
    model_matrix: Mat4,
    sprite: SpriteSheet,
}

impl Entity {
    pub fn new(sprite: SpriteSheet, speed: f32) -> Self {
        let current = sprite.current;
        let mut entity = Self {
            position: Vec3::ZERO,
            movement: Vec3::ZERO,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            scale: Vec3::new(1.0, 1.0, 1.0),
            speed,
            gravity: GRAVITY,
            drag: DRAG,
            damping: ACCELERATION_DAMPING,
            fuel: STARTING_FUEL,
            model_matrix: Mat4::IDENTITY,
            sprite,
        };
        entity.set_animation_state(current);
        entity
    }

    /// Override the per-entity physics constants
    pub fn with_physics(mut self, gravity: f32, drag: f32, damping: f32) -> Self {
        self.gravity = gravity;
        self.drag = drag;
        self.damping = damping;
        self
    }

    /// Advance physics by `delta_time` seconds
    pub fn update(&mut self, delta_time: f32) {
        self.acceleration.y += self.gravity * delta_time;
        self.movement += self.acceleration * delta_time;
        self.position += self.movement * self.speed * delta_time;
        self.acceleration *= self.damping;
        self.refresh_transform();
    }

    /// Rebuild the world transform from position and scale
    pub fn refresh_transform(&mut self) {
        self.model_matrix = Mat4::from_translation(self.position) * Mat4::from_scale(self.scale);
    }

    /// Box overlap against `other` (XY only, symmetric)
    pub fn check_collision(&self, other: &Entity) -> bool {
        self.bounds().overlaps(&other.bounds())
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_position_scale(self.position, self.scale)
    }

    /// Burn fuel, never dropping below empty
    pub fn consume_fuel(&mut self, amount: f32) {
        self.fuel = (self.fuel - amount).max(0.0);
    }

    /// Switch animation; the animation's table entry also sets the scale
    pub fn set_animation_state(&mut self, kind: AnimationKind) {
        let spec = self.sprite.set_animation(kind);
        self.scale = spec.scale;
    }

    pub fn move_straight(&mut self) {
        if self.sprite.current != AnimationKind::MoveStraight {
            self.set_animation_state(AnimationKind::MoveStraight);
        }
    }

    /// Normalize movement to unit length (zero stays zero)
    pub fn normalise_movement(&mut self) {
        self.movement = self.movement.normalize_or_zero();
    }

    // === Accessors ===

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn movement(&self) -> Vec3 {
        self.movement
    }

    pub fn set_movement(&mut self, movement: Vec3) {
        self.movement = movement;
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    pub fn set_acceleration(&mut self, acceleration: Vec3) {
        self.acceleration = acceleration;
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn drag(&self) -> f32 {
        self.drag
    }

    pub fn fuel(&self) -> f32 {
        self.fuel
    }

    /// Set fuel; negative amounts clamp to empty
    pub fn set_fuel(&mut self, fuel: f32) {
        self.fuel = fuel.max(0.0);
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.model_matrix
    }

    pub fn sprite(&self) -> &SpriteSheet {
        &self.sprite
    }

    pub fn animation(&self) -> AnimationKind {
        self.sprite.current
    }
}
