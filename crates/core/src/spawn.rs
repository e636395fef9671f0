//! Spawn scheduling.
//!
//! Both timers here are self-rescheduling: countdowns advanced by *real*
//! frame time and drained at tick start, never recursive callbacks.
//! They keep ticking while paused or before the first start - only the
//! materialization step checks the phase - and each reschedules itself
//! relative to its own fire time, so at most one regular spawn happens per
//! frame no matter how large the delta was.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::difficulty::DifficultyCurve;
use crate::entities::EnemyKind;
use crate::events::{GameEvent, SoundId};
use crate::physics::WorldBounds;
use crate::random::SeededRandom;
use crate::store::EntityStore;
use crate::terrain::TerrainHeightField;

/// Ambient cue interval range in real seconds.
const AMBIENT_INTERVAL: (f32, f32) = (12.0, 24.0);

/// Everything a spawn decision needs to read.
pub struct SpawnContext<'a> {
    pub curve: &'a DifficultyCurve,
    pub terrain: &'a TerrainHeightField,
    pub bounds: &'a WorldBounds,
    pub player_position: Vec3,
    pub game_time: f32,
}

/// Decides when to create enemies and ambient cues.
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    time_to_regular: f32,
    time_to_ambient: f32,
}

impl SpawnScheduler {
    pub fn new(curve: &DifficultyCurve) -> Self {
        Self {
            time_to_regular: curve.spawn_interval(0.0),
            time_to_ambient: AMBIENT_INTERVAL.0,
        }
    }

    /// Reset both timers, e.g. on restart. Any spawn that was pending fires
    /// into the new run's schedule instead of resurrecting old state.
    pub fn reset(&mut self, curve: &DifficultyCurve) {
        self.time_to_regular = curve.spawn_interval(0.0);
        self.time_to_ambient = AMBIENT_INTERVAL.0;
    }

    /// Advance the timers by real elapsed time. Runs every frame regardless
    /// of phase; `running` gates only the materialization.
    pub fn advance(
        &mut self,
        real_dt: f32,
        running: bool,
        ctx: &SpawnContext<'_>,
        store: &mut EntityStore,
        rng: &mut SeededRandom,
        events: &mut Vec<GameEvent>,
    ) {
        self.time_to_regular -= real_dt;
        if self.time_to_regular <= 0.0 {
            if running {
                spawn_around_player(EnemyKind::Regular, ctx, store, rng, events);
            }
            // Recomputed at every fire so the interval shrinks as the game
            // progresses.
            self.time_to_regular = ctx.curve.spawn_interval(ctx.game_time);
        }

        self.time_to_ambient -= real_dt;
        if self.time_to_ambient <= 0.0 {
            if running {
                events.push(GameEvent::Sound {
                    sound: SoundId::Pickup,
                    volume: 0.2,
                    pitch: rng.next_range(0.8, 1.2),
                });
            }
            self.time_to_ambient = rng.next_range(AMBIENT_INTERVAL.0, AMBIENT_INTERVAL.1);
        }
    }

    /// True when this tick's clock advance crossed a whole-minute boundary.
    /// Fires at most once per tick: minutes skipped inside one huge delta
    /// are not caught up.
    pub fn giant_due(previous_time: f32, current_time: f32) -> bool {
        let minute = DifficultyCurve::minutes_elapsed(current_time);
        minute > DifficultyCurve::minutes_elapsed(previous_time) && minute > 0
    }

    /// Materialize the once-per-minute giant.
    pub fn spawn_giant(
        &self,
        ctx: &SpawnContext<'_>,
        store: &mut EntityStore,
        rng: &mut SeededRandom,
        events: &mut Vec<GameEvent>,
    ) {
        spawn_around_player(EnemyKind::Giant, ctx, store, rng, events);
    }
}

/// Place a new enemy on a random ring around the player, bounds-clamped and
/// ground-snapped, with speed frozen from the current difficulty.
fn spawn_around_player(
    kind: EnemyKind,
    ctx: &SpawnContext<'_>,
    store: &mut EntityStore,
    rng: &mut SeededRandom,
    events: &mut Vec<GameEvent>,
) {
    let angle = rng.next_range(0.0, TAU);
    let (radius_min, radius_max) = kind.spawn_radius_range();
    let radius = rng.next_range(radius_min, radius_max);

    let raw = ctx.player_position + Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);
    let (mut position, _) = ctx.bounds.clamp(raw);
    position.y = ctx.terrain.height(position.x, position.z) + kind.ground_clearance();

    let speed = ctx.curve.enemy_speed(ctx.game_time) * kind.speed_factor();
    let id = store.spawn_enemy(position, speed, kind, events);
    log::debug!(
        "spawned {:?} {:?} at ({:.1}, {:.1}) speed {:.2}",
        kind,
        id,
        position.x,
        position.z,
        speed
    );
}
