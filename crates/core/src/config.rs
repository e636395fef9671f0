//! Simulation configuration.
//!
//! All gameplay constants live here so a host can tweak them; the defaults
//! are the shipped tuning.

use serde::{Deserialize, Serialize};

/// Configuration for the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Half-extent of the square play area, centered on the origin.
    pub world_half_extent: f32,

    /// Seconds between regular enemy spawns before any difficulty scaling.
    pub base_spawn_interval: f32,

    /// Floor for the spawn interval no matter how hard the game gets.
    pub min_spawn_interval: f32,

    /// Regular enemy speed in units/s before difficulty scaling.
    pub base_enemy_speed: f32,

    /// Difficulty multiplier growth per elapsed minute (compounding).
    pub difficulty_growth: f32,

    /// Player movement speed in units/s.
    pub player_speed: f32,

    /// Camera height above the terrain surface.
    pub eye_height: f32,

    /// Look sensitivity applied to raw mouse deltas (radians per pixel).
    pub mouse_sensitivity: f32,

    /// Projectile speed in units/s.
    pub projectile_speed: f32,

    /// Projectile lifetime in seconds.
    pub projectile_lifetime: f32,

    /// Player starting (and maximum) health.
    pub starting_health: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_half_extent: 50.0,
            base_spawn_interval: 2.0,
            min_spawn_interval: 0.2,
            base_enemy_speed: 2.0,
            difficulty_growth: 1.2,
            player_speed: 5.0,
            eye_height: 1.7,
            mouse_sensitivity: 0.002,
            projectile_speed: 40.0,
            projectile_lifetime: 2.0,
            starting_health: 100,
        }
    }
}
