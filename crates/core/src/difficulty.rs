//! Difficulty progression.
//!
//! Spawn rate and enemy speed are pure functions of elapsed game time - no
//! hidden state. The multiplier compounds once per whole elapsed minute.

use crate::config::GameConfig;

/// Derives spawn interval and enemy speed from elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct DifficultyCurve {
    base_spawn_interval: f32,
    min_spawn_interval: f32,
    base_enemy_speed: f32,
    growth: f32,
}

impl DifficultyCurve {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            base_spawn_interval: config.base_spawn_interval,
            min_spawn_interval: config.min_spawn_interval,
            base_enemy_speed: config.base_enemy_speed,
            growth: config.difficulty_growth,
        }
    }

    /// Whole minutes elapsed at the given game time.
    pub fn minutes_elapsed(game_time: f32) -> u32 {
        (game_time / 60.0).floor().max(0.0) as u32
    }

    /// Difficulty multiplier: `growth ^ minutes_elapsed`.
    pub fn multiplier(&self, game_time: f32) -> f32 {
        self.growth.powi(Self::minutes_elapsed(game_time) as i32)
    }

    /// Seconds until the next regular spawn, floored so the spawn rate never
    /// exceeds the configured cap.
    pub fn spawn_interval(&self, game_time: f32) -> f32 {
        (self.base_spawn_interval / self.multiplier(game_time)).max(self.min_spawn_interval)
    }

    /// Regular enemy speed at the given game time. Unbounded growth.
    pub fn enemy_speed(&self, game_time: f32) -> f32 {
        self.base_enemy_speed * self.multiplier(game_time)
    }
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_at_minute_boundaries() {
        let curve = DifficultyCurve::default();
        assert_eq!(curve.multiplier(0.0), 1.0);
        assert_eq!(curve.multiplier(59.9), 1.0);
        assert_eq!(curve.multiplier(60.0), 1.2);
        assert!((curve.multiplier(120.0) - 1.44).abs() < 1e-6);
        assert!((curve.multiplier(180.0) - 1.728).abs() < 1e-6);
    }

    #[test]
    fn enemy_speed_scales_exactly() {
        let curve = DifficultyCurve::default();
        assert_eq!(curve.enemy_speed(0.0), 2.0);
        assert!((curve.enemy_speed(60.0) - 2.4).abs() < 1e-6);
        assert!((curve.enemy_speed(120.0) - 2.88).abs() < 1e-6);
    }

    #[test]
    fn spawn_interval_floored_and_non_increasing() {
        let curve = DifficultyCurve::default();
        let mut previous = f32::INFINITY;
        for minute in 0..120 {
            let interval = curve.spawn_interval(minute as f32 * 60.0);
            assert!(interval >= 0.2, "interval {} below floor", interval);
            assert!(interval <= previous, "interval increased at minute {}", minute);
            previous = interval;
        }
        // Deep into a run the floor dominates.
        assert_eq!(curve.spawn_interval(3600.0 * 4.0), 0.2);
    }

    #[test]
    fn minutes_elapsed_floors() {
        assert_eq!(DifficultyCurve::minutes_elapsed(0.0), 0);
        assert_eq!(DifficultyCurve::minutes_elapsed(59.999), 0);
        assert_eq!(DifficultyCurve::minutes_elapsed(60.0), 1);
        assert_eq!(DifficultyCurve::minutes_elapsed(61.0), 1);
        assert_eq!(DifficultyCurve::minutes_elapsed(125.0), 2);
    }
}
