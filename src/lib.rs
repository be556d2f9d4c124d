//! Lunar Lander - a tiny thrust-and-gravity arcade game
//!
//! Core modules:
//! - `sim`: Simulation (entity physics, collisions, game state, per-frame tick)
//! - `renderer`: Draw ordering against an abstract rendering surface
//! - `platform`: Clock and keyboard collaborators
//! - `app`: The frame loop tying the three together
//! - `settings`: Data-driven game tuning

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{App, AppStatus};
pub use error::{LanderError, Result};
pub use settings::{GravityModel, Settings};

/// Game configuration constants
pub mod consts {
    /// Default fixed simulation timestep when fixed stepping is enabled
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Orthographic view extents (world units)
    pub const VIEW_HALF_WIDTH: f32 = 5.0;
    pub const VIEW_HALF_HEIGHT: f32 = 3.75;

    /// Per-entity physics defaults
    pub const GRAVITY: f32 = -0.5;
    pub const DRAG: f32 = 0.5;
    /// Multiplicative acceleration damping, applied once per update (not time-normalized)
    pub const ACCELERATION_DAMPING: f32 = 0.98;
    pub const STARTING_FUEL: f32 = 100.0;

    /// Player control
    pub const THRUST_ACCELERATION: f32 = 1.5;
    pub const LATERAL_ACCELERATION: f32 = 1.5;
    /// Vertical acceleration written when thrust is not held
    pub const BASELINE_VERTICAL: f32 = -0.5;
    /// Acceleration magnitude (either axis) above which fuel burns
    pub const THRUST_EPSILON: f32 = 0.01;
    /// Fuel units per second while thrusting
    pub const FUEL_BURN_RATE: f32 = 5.0;

    /// Craft wins once its x reaches this
    pub const GOAL_X: f32 = 5.0;

    /// Glyph grid dimension of the font atlas (16x16 cells)
    pub const FONTBANK_SIZE: u32 = 16;
}
