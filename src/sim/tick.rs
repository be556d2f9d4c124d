//! Per-frame simulation tick
//!
//! Order within a running frame: controls -> craft physics -> asteroid
//! physics -> fuel burn -> win check -> collision check.

use glam::Vec3;

use super::state::{GamePhase, GameState};
use crate::settings::{GravityModel, Settings};

/// Held controls for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub thrust: bool,
}

/// Acceleration the controls ask for. Replaces the craft's acceleration wholesale.
///
/// Left wins over right when both are held. An empty tank ignores every key.
pub fn commanded_acceleration(input: &TickInput, fuel: f32, settings: &Settings) -> Vec3 {
    let idle_vertical = settings.idle_vertical();

    if fuel <= 0.0 {
        return Vec3::new(0.0, idle_vertical, 0.0);
    }

    let x = if input.left {
        -settings.lateral_acceleration
    } else if input.right {
        settings.lateral_acceleration
    } else {
        0.0
    };

    let y = if input.thrust {
        settings.thrust_acceleration
    } else {
        idle_vertical
    };

    Vec3::new(x, y, 0.0)
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, settings: &Settings) {
    if state.is_terminal() {
        return;
    }

    let commanded = commanded_acceleration(input, state.craft.fuel(), settings);
    state.craft.set_acceleration(commanded);

    state.craft.update(dt);
    for obstacle in &mut state.obstacles {
        obstacle.update(dt);
    }

    // Compounding judges the burn after integration, gravity included.
    // SingleApplication only burns for what the controls asked for.
    let burn_accel = match settings.gravity_model {
        GravityModel::Compounding => state.craft.acceleration(),
        GravityModel::SingleApplication => commanded,
    };
    let eps = settings.thrust_epsilon;
    if (burn_accel.x.abs() > eps || burn_accel.y.abs() > eps) && state.craft.fuel() > 0.0 {
        state.craft.consume_fuel(settings.fuel_burn_rate * dt);
    }

    state.frame += 1;

    if state.craft.position().x >= settings.goal_x {
        state.phase = GamePhase::Won;
        log::info!(
            "Goal reached on frame {} with {:.1} fuel left",
            state.frame,
            state.craft.fuel()
        );
        return;
    }

    if let Some(index) = state
        .obstacles
        .iter()
        .position(|obstacle| state.craft.check_collision(obstacle))
    {
        state.phase = GamePhase::Lost;
        log::info!(
            "Craft hit asteroid {} on frame {} with {:.1} fuel left",
            index,
            state.frame,
            state.craft.fuel()
        );
    }
}
