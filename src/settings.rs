//! Game settings and tuning
//!
//! Loaded from an optional JSON file at startup. Every field has a default,
//! so a partial file only overrides what it names.

use std::fs;
use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{LanderError, Result};

/// How gravity reaches the craft's vertical acceleration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GravityModel {
    /// Input writes a -0.5 baseline every frame and the integrator adds
    /// `gravity * dt` on top of it. Classic behaviour.
    #[default]
    Compounding,
    /// Input writes a zero baseline; gravity enters only through the integrator.
    SingleApplication,
}

impl GravityModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GravityModel::Compounding => "Compounding",
            GravityModel::SingleApplication => "SingleApplication",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "compounding" | "classic" => Some(GravityModel::Compounding),
            "single" | "singleapplication" | "single_application" => {
                Some(GravityModel::SingleApplication)
            }
            _ => None,
        }
    }
}

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Gravity added to vertical acceleration per second
    pub gravity: f32,
    /// Stored on every entity, not applied by the integrator
    pub drag: f32,
    /// Per-update multiplicative acceleration damping
    pub acceleration_damping: f32,
    pub gravity_model: GravityModel,

    // === Controls ===
    pub thrust_acceleration: f32,
    pub lateral_acceleration: f32,
    /// Vertical acceleration written when thrust isn't held (Compounding model)
    pub baseline_vertical: f32,
    pub thrust_epsilon: f32,

    // === Fuel ===
    pub initial_fuel: f32,
    /// Fuel burned per second of thrust
    pub fuel_burn_rate: f32,

    // === Goal ===
    pub goal_x: f32,

    // === Session ===
    pub craft_speed: f32,
    pub craft_start: Vec2,
    pub craft_scale: Vec3,
    /// Randomly placed static asteroids
    pub obstacle_count: usize,
    pub obstacle_scale: Vec3,
    /// Lower-left corner of the asteroid spawn area
    pub spawn_min: Vec2,
    /// Upper-right corner of the asteroid spawn area (exclusive)
    pub spawn_max: Vec2,
    /// Extra asteroid with its own speed, `None` to leave it out
    pub drifter: Option<DrifterSettings>,
    /// Obstacle RNG seed, `None` picks one from the clock
    pub seed: Option<u64>,

    // === Timing ===
    /// Fixed simulation step in seconds, `None` for raw frame deltas
    pub fixed_timestep: Option<f32>,
    pub max_substeps: u32,
}

/// The non-static asteroid placed at a fixed spot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrifterSettings {
    pub position: Vec2,
    pub speed: f32,
}

impl Default for DrifterSettings {
    fn default() -> Self {
        Self {
            position: Vec2::new(3.0, 0.0),
            speed: 2.0,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            drag: DRAG,
            acceleration_damping: ACCELERATION_DAMPING,
            gravity_model: GravityModel::Compounding,

            thrust_acceleration: THRUST_ACCELERATION,
            lateral_acceleration: LATERAL_ACCELERATION,
            baseline_vertical: BASELINE_VERTICAL,
            thrust_epsilon: THRUST_EPSILON,

            initial_fuel: STARTING_FUEL,
            fuel_burn_rate: FUEL_BURN_RATE,

            goal_x: GOAL_X,

            craft_speed: 3.0,
            craft_start: Vec2::new(0.0, 2.0),
            craft_scale: Vec3::new(0.5, 0.5, 1.0),
            obstacle_count: 5,
            obstacle_scale: Vec3::ONE,
            spawn_min: Vec2::new(-4.0, -2.5),
            spawn_max: Vec2::new(4.0, 1.5),
            drifter: Some(DrifterSettings::default()),
            seed: None,

            fixed_timestep: None,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl Settings {
    /// Vertical acceleration the controls write when thrust is off
    pub fn idle_vertical(&self) -> f32 {
        match self.gravity_model {
            GravityModel::Compounding => self.baseline_vertical,
            GravityModel::SingleApplication => 0.0,
        }
    }

    /// Seed to use for this session
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        })
    }

    /// Check timing values the frame loop divides or multiplies by
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(step) = self.fixed_timestep {
            if !step.is_finite() || step <= 0.0 {
                return Err(format!("fixed_timestep must be a positive number, got {step}"));
            }
        }
        if self.max_substeps == 0 {
            return Err("max_substeps must be at least 1".to_string());
        }
        Ok(())
    }

    /// Load settings from a JSON file. A missing file yields defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path).map_err(|source| LanderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&json).map_err(|source| LanderError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        settings
            .validate()
            .map_err(|reason| LanderError::InvalidSettings {
                path: path.to_path_buf(),
                reason,
            })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| LanderError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| LanderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "lunar_lander_settings_{}_{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_defaults_match_classic_tuning() {
        let s = Settings::default();
        assert_eq!(s.gravity, -0.5);
        assert_eq!(s.drag, 0.5);
        assert_eq!(s.initial_fuel, 100.0);
        assert_eq!(s.goal_x, 5.0);
        assert_eq!(s.gravity_model, GravityModel::Compounding);
        assert!(s.fixed_timestep.is_none());
    }

    #[test]
    fn test_idle_vertical_follows_gravity_model() {
        let mut s = Settings::default();
        assert_eq!(s.idle_vertical(), -0.5);
        s.gravity_model = GravityModel::SingleApplication;
        assert_eq!(s.idle_vertical(), 0.0);
    }

    #[test]
    fn test_gravity_model_from_str() {
        assert_eq!(GravityModel::from_str("Classic"), Some(GravityModel::Compounding));
        assert_eq!(
            GravityModel::from_str("single"),
            Some(GravityModel::SingleApplication)
        );
        assert_eq!(GravityModel::from_str("bogus"), None);
        assert_eq!(GravityModel::SingleApplication.as_str(), "SingleApplication");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s: Settings = serde_json::from_str(r#"{ "goal_x": 4.0, "seed": 7 }"#).unwrap();
        assert_eq!(s.goal_x, 4.0);
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.craft_speed, 3.0);
        assert_eq!(s.effective_seed(), 7);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let s = Settings::load(temp_path("missing_never_written")).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save_load");
        let mut s = Settings::default();
        s.obstacle_count = 2;
        s.fixed_timestep = Some(1.0 / 60.0);
        s.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, s);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_path("malformed");
        std::fs::write(&path, "{ not json").unwrap();
        let result = Settings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(LanderError::Settings { .. })));
    }

    fn load_json(name: &str, json: &str) -> Result<Settings> {
        let path = temp_path(name);
        std::fs::write(&path, json).unwrap();
        let result = Settings::load(&path);
        let _ = std::fs::remove_file(&path);
        result
    }

    #[test]
    fn test_zero_timestep_rejected() {
        let result = load_json("zero_step", r#"{ "fixed_timestep": 0.0 }"#);
        assert!(matches!(result, Err(LanderError::InvalidSettings { .. })));
    }

    #[test]
    fn test_negative_timestep_rejected() {
        let result = load_json("negative_step", r#"{ "fixed_timestep": -0.1 }"#);
        assert!(matches!(result, Err(LanderError::InvalidSettings { .. })));
    }

    #[test]
    fn test_zero_substeps_rejected() {
        let result = load_json("zero_substeps", r#"{ "max_substeps": 0 }"#);
        assert!(matches!(result, Err(LanderError::InvalidSettings { .. })));
    }

    #[test]
    fn test_nan_timestep_rejected() {
        let s = Settings {
            fixed_timestep: Some(f32::NAN),
            ..Default::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_valid_timing_accepted() {
        let result = load_json("valid_step", r#"{ "fixed_timestep": 0.01, "max_substeps": 1 }"#);
        let s = result.unwrap();
        assert_eq!(s.fixed_timestep, Some(0.01));
        assert_eq!(s.max_substeps, 1);
        assert!(Settings::default().validate().is_ok());
    }
}
