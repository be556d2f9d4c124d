//! Game state and session setup
//!
//! One craft, a handful of asteroids and the session phase.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::animation::{SpriteSheet, TextureHandle};
use super::entity::Entity;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Craft reached the goal line
    Won,
    /// Craft hit an asteroid
    Lost,
}

impl GamePhase {
    /// Won and Lost never change again
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Running)
    }
}

/// Textures the session hands to its entities
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityTextures {
    pub craft: TextureHandle,
    pub obstacle: TextureHandle,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the asteroid field was generated from
    pub seed: u64,
    pub phase: GamePhase,
    /// The player's lander
    pub craft: Entity,
    /// Asteroids in spawn order
    pub obstacles: Vec<Entity>,
    /// Frames simulated while running
    pub frame: u64,
}

impl GameState {
    /// Build a session: craft at its start spot, asteroids from the seeded RNG
    pub fn new(settings: &Settings, textures: EntityTextures) -> Self {
        let seed = settings.effective_seed();
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut craft = Entity::new(SpriteSheet::single(textures.craft), settings.craft_speed)
            .with_physics(
                settings.gravity,
                settings.drag,
                settings.acceleration_damping,
            );
        craft.set_scale(settings.craft_scale);
        craft.set_position(settings.craft_start.extend(0.0));
        craft.set_fuel(settings.initial_fuel);
        craft.refresh_transform();

        let make_obstacle = |x: f32, y: f32, speed: f32| {
            let mut obstacle = Entity::new(SpriteSheet::single(textures.obstacle), speed)
                .with_physics(
                    settings.gravity,
                    settings.drag,
                    settings.acceleration_damping,
                );
            obstacle.set_position(Vec3::new(x, y, 0.0));
            obstacle.set_scale(settings.obstacle_scale);
            obstacle.refresh_transform();
            obstacle
        };

        let mut obstacles = Vec::with_capacity(settings.obstacle_count + 1);
        let (min, max) = (settings.spawn_min, settings.spawn_max);
        for _ in 0..settings.obstacle_count {
            let x = sample(&mut rng, min.x, max.x);
            let y = sample(&mut rng, min.y, max.y);
            obstacles.push(make_obstacle(x, y, 0.0));
        }
        if let Some(drifter) = settings.drifter {
            obstacles.push(make_obstacle(
                drifter.position.x,
                drifter.position.y,
                drifter.speed,
            ));
        }

        log::info!(
            "Session started: seed {}, {} asteroids",
            seed,
            obstacles.len()
        );

        Self::from_entities(seed, craft, obstacles)
    }

    /// Assemble a running session from prebuilt entities
    pub fn from_entities(seed: u64, craft: Entity, obstacles: Vec<Entity>) -> Self {
        Self {
            seed,
            phase: GamePhase::Running,
            craft,
            obstacles,
            frame: 0,
        }
    }

    /// Craft collided with an asteroid
    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::Lost
    }

    /// Craft reached the goal
    pub fn game_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }
}

/// Uniform sample in `[lo, hi)`, or `lo` for an empty range
fn sample(rng: &mut Pcg32, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Settings {
        Settings {
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_session_layout() {
        let state = GameState::new(&seeded(42), EntityTextures::default());

        assert_eq!(state.phase, GamePhase::Running);
        assert!(!state.game_over());
        assert!(!state.game_won());
        assert_eq!(state.seed, 42);
        assert_eq!(state.craft.position(), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(state.craft.scale(), Vec3::new(0.5, 0.5, 1.0));
        assert_eq!(state.craft.speed(), 3.0);
        assert_eq!(state.craft.fuel(), 100.0);
        // Five random asteroids plus the drifter
        assert_eq!(state.obstacles.len(), 6);
    }

    #[test]
    fn test_asteroids_inside_spawn_area() {
        let settings = seeded(7);
        let state = GameState::new(&settings, EntityTextures::default());
        for rock in &state.obstacles[..settings.obstacle_count] {
            let p = rock.position();
            assert!(p.x >= -4.0 && p.x < 4.0);
            assert!(p.y >= -2.5 && p.y < 1.5);
            assert_eq!(rock.speed(), 0.0);
            assert_eq!(rock.scale(), Vec3::ONE);
        }
        let drifter = state.obstacles.last().unwrap();
        assert_eq!(drifter.position(), Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(drifter.speed(), 2.0);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = GameState::new(&seeded(99), EntityTextures::default());
        let b = GameState::new(&seeded(99), EntityTextures::default());
        for (ra, rb) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(ra.position(), rb.position());
        }
    }

    #[test]
    fn test_no_drifter() {
        let settings = Settings {
            drifter: None,
            obstacle_count: 3,
            ..seeded(1)
        };
        let state = GameState::new(&settings, EntityTextures::default());
        assert_eq!(state.obstacles.len(), 3);
    }

    #[test]
    fn test_new_session_transforms_match_positions() {
        let state = GameState::new(&seeded(5), EntityTextures::default());
        let bodies = std::iter::once(&state.craft).chain(&state.obstacles);
        for body in bodies {
            let origin = body.model_matrix().transform_point3(Vec3::ZERO);
            assert_eq!(origin, body.position());
        }
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!GamePhase::Running.is_terminal());
        assert!(GamePhase::Won.is_terminal());
        assert!(GamePhase::Lost.is_terminal());
    }
}
