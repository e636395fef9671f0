//! The game loop.
//!
//! One `Simulation` owns the whole game state and advances it one frame at
//! a time under a variable-delta model: the host calls [`Simulation::frame`]
//! once per animation callback with the elapsed real time. Discrete controls
//! (start, fire, pause toggle, restart) are explicit methods so their
//! edge-triggered nature stays at the host boundary.

use glam::Vec3;

use crate::combat;
use crate::config::GameConfig;
use crate::difficulty::DifficultyCurve;
use crate::events::{GameEvent, SoundId};
use crate::hud::{self, GameOverSummary, HudSnapshot};
use crate::input::FrameInput;
use crate::physics::WorldBounds;
use crate::player::{Player, PlayerController};
use crate::random::SeededRandom;
use crate::spawn::{SpawnContext, SpawnScheduler};
use crate::store::EntityStore;
use crate::terrain::TerrainHeightField;

/// Game lifecycle phase.
///
/// `NotStarted -> Running <-> Paused`, and `Running -> GameOver`, which is
/// terminal until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

/// The simulation root: orchestrates clock, spawning, movement, combat, and
/// the phase machine.
#[derive(Debug)]
pub struct Simulation {
    pub config: GameConfig,
    pub terrain: TerrainHeightField,
    pub bounds: WorldBounds,
    curve: DifficultyCurve,
    controller: PlayerController,
    scheduler: SpawnScheduler,

    pub phase: GamePhase,
    /// Elapsed game seconds; frozen while paused, reset on restart.
    pub game_time: f32,
    pub player: Player,
    pub store: EntityStore,
    rng: SeededRandom,
    events: Vec<GameEvent>,
}

impl Simulation {
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let terrain = TerrainHeightField::new(config.world_half_extent * 2.0);
        let bounds = WorldBounds::centered(config.world_half_extent);
        let curve = DifficultyCurve::new(&config);
        let controller = PlayerController::new(&config);
        let scheduler = SpawnScheduler::new(&curve);

        let mut player = Player::new(Vec3::ZERO, config.starting_health);
        controller.place(&mut player, 0.0, 0.0, &terrain);

        Self {
            config,
            terrain,
            bounds,
            curve,
            controller,
            scheduler,
            phase: GamePhase::NotStarted,
            game_time: 0.0,
            player,
            store: EntityStore::new(),
            rng: SeededRandom::new(seed),
            events: Vec::new(),
        }
    }

    // ========================================================================
    // Discrete controls
    // ========================================================================

    /// Begin the run. No-op unless the game has not started yet.
    pub fn start(&mut self) {
        if self.phase == GamePhase::NotStarted {
            self.phase = GamePhase::Running;
            log::info!("game started");
        }
    }

    /// Edge-triggered pause toggle. Does not reset any accumulated state;
    /// ignored outside the Running/Paused pair.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => {
                log::info!("paused at {:.1}s", self.game_time);
                GamePhase::Paused
            }
            GamePhase::Paused => {
                log::info!("resumed");
                GamePhase::Running
            }
            other => other,
        };
    }

    /// Fire one projectile from the eye position along the view direction.
    /// Ignored unless running.
    pub fn fire(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }

        let velocity = self.player.look_direction() * self.config.projectile_speed;
        self.store.spawn_projectile(
            self.player.position,
            velocity,
            self.config.projectile_lifetime,
            &mut self.events,
        );
        let pitch = self.rng.next_range(0.95, 1.05);
        self.events.push(GameEvent::Sound {
            sound: SoundId::Gunshot,
            volume: 0.8,
            pitch,
        });
    }

    /// Full reset back into a fresh running state: collections cleared,
    /// clock/health/score reinitialized, player repositioned at the origin
    /// spawn. Pre-restart entity identities are never reused.
    pub fn restart(&mut self) {
        self.store.clear();
        self.events.clear();
        self.scheduler.reset(&self.curve);
        self.game_time = 0.0;

        self.player = Player::new(Vec3::ZERO, self.config.starting_health);
        self.controller
            .place(&mut self.player, 0.0, 0.0, &self.terrain);

        self.phase = GamePhase::Running;
        log::info!("restarted");
    }

    // ========================================================================
    // Per-frame tick
    // ========================================================================

    /// Advance by one frame of `delta_time` real seconds.
    pub fn frame(&mut self, input: &FrameInput, delta_time: f32) {
        let running = self.phase == GamePhase::Running;

        // Spawn and ambient timers tick on real time in every phase; only
        // materialization is gated on Running.
        let ctx = SpawnContext {
            curve: &self.curve,
            terrain: &self.terrain,
            bounds: &self.bounds,
            player_position: self.player.position,
            game_time: self.game_time,
        };
        self.scheduler.advance(
            delta_time,
            running,
            &ctx,
            &mut self.store,
            &mut self.rng,
            &mut self.events,
        );

        if !running {
            return;
        }

        let previous_time = self.game_time;
        self.game_time += delta_time;

        // One giant per crossed minute boundary, at most one per tick.
        if SpawnScheduler::giant_due(previous_time, self.game_time) {
            let ctx = SpawnContext {
                curve: &self.curve,
                terrain: &self.terrain,
                bounds: &self.bounds,
                player_position: self.player.position,
                game_time: self.game_time,
            };
            self.scheduler.spawn_giant(
                &ctx,
                &mut self.store,
                &mut self.rng,
                &mut self.events,
            );
        }

        self.controller.update(
            &mut self.player,
            input,
            &self.terrain,
            &self.bounds,
            delta_time,
            &mut self.rng,
            &mut self.events,
        );

        self.update_enemies(delta_time);
        self.update_projectiles(delta_time);

        let outcome = combat::resolve_combat(&mut self.store, &mut self.player, &mut self.events);
        if outcome.player_died {
            self.enter_game_over();
        }
    }

    /// Enemies seek the player on the ground plane, then get bounds-clamped
    /// and ground-snapped like everything else.
    fn update_enemies(&mut self, delta_time: f32) {
        let target = self.player.position;
        for enemy in &mut self.store.enemies {
            let mut to_player = target - enemy.position;
            to_player.y = 0.0;
            let distance = to_player.length();
            if distance > 1e-4 {
                enemy.position += to_player / distance * enemy.speed * delta_time;
            }

            let (clamped, _) = self.bounds.clamp(enemy.position);
            enemy.position = clamped;
            enemy.position.y = self.terrain.height(enemy.position.x, enemy.position.z)
                + enemy.kind.ground_clearance();
        }
    }

    /// Projectiles fly straight and expire on their life countdown - or
    /// immediately on leaving the world rectangle, where nothing hittable
    /// exists. The mark is swept by the same tick's compaction.
    fn update_projectiles(&mut self, delta_time: f32) {
        for projectile in &mut self.store.projectiles {
            projectile.position += projectile.velocity * delta_time;
            projectile.life -= delta_time;
            if !self.bounds.contains(projectile.position) {
                projectile.life = 0.0;
            }
        }
    }

    fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        let summary = GameOverSummary {
            time_display: hud::format_time(self.game_time),
            score: self.player.score,
            difficulty_display: hud::format_multiplier(self.curve.multiplier(self.game_time)),
        };
        log::info!(
            "game over: {} survived, score {}",
            summary.time_display,
            summary.score
        );
        self.events.push(GameEvent::GameOver { summary });
    }

    // ========================================================================
    // Host-facing reads
    // ========================================================================

    /// Derived UI values for this tick.
    pub fn hud_snapshot(&self) -> HudSnapshot {
        HudSnapshot {
            time_display: hud::format_time(self.game_time),
            health: self.player.display_health(),
            score: self.player.score,
            difficulty_display: hud::format_multiplier(self.curve.multiplier(self.game_time)),
        }
    }

    /// Current difficulty multiplier.
    pub fn difficulty_multiplier(&self) -> f32 {
        self.curve.multiplier(self.game_time)
    }

    /// Take this frame's buffered collaborator events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
