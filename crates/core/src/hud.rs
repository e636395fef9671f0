//! HUD-facing derived values.
//!
//! The UI collaborator consumes formatted strings once per tick; nothing
//! here feeds back into the simulation.

use serde::{Deserialize, Serialize};

/// Per-tick HUD refresh payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    /// Elapsed time as "mm:ss".
    pub time_display: String,
    /// Health clamped to zero for display.
    pub health: i32,
    pub score: u32,
    /// Difficulty multiplier with one decimal and an "x" suffix.
    pub difficulty_display: String,
}

/// Final payload shown on the game-over screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOverSummary {
    pub time_display: String,
    pub score: u32,
    pub difficulty_display: String,
}

/// Format elapsed seconds as "mm:ss".
pub fn format_time(seconds: f32) -> String {
    let total = seconds.max(0.0) as u32;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Format the difficulty multiplier as e.g. "1.2x".
pub fn format_multiplier(multiplier: f32) -> String {
    format!("{:.1}x", multiplier)
}
