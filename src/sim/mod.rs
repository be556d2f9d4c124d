//! Simulation module
//!
//! All gameplay logic lives here:
//! - Entity kinematics and box collisions
//! - Session phase (running / won / lost)
//! - The per-frame tick driven by held controls
//!
//! No rendering or platform dependencies.

pub mod animation;
pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;

pub use animation::{AnimationKind, AnimationSpec, SpriteSheet, TextureHandle};
pub use collision::Aabb;
pub use entity::Entity;
pub use state::{EntityTextures, GamePhase, GameState};
pub use tick::{TickInput, commanded_acceleration, tick};
