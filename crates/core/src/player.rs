//! Player state and movement controller.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::config::GameConfig;
use crate::events::{GameEvent, SoundId};
use crate::input::FrameInput;
use crate::physics::WorldBounds;
use crate::random::SeededRandom;
use crate::terrain::TerrainHeightField;

/// Chance per moving frame of kicking up ground dust.
const DUST_CHANCE: f32 = 0.3;

/// The player: position, facing, health, score.
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec3,
    /// Heading around the vertical axis, radians. Zero faces -Z.
    pub yaw: f32,
    /// Vertical look angle, radians, clamped to +/- pi/2.
    pub pitch: f32,
    pub health: i32,
    pub max_health: i32,
    /// Monotonically non-decreasing during a run.
    pub score: u32,
}

impl Player {
    pub fn new(position: Vec3, health: i32) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            health,
            max_health: health,
            score: 0,
        }
    }

    /// Horizontal forward direction from the current yaw.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Horizontal right direction from the current yaw.
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Full view direction (aim vector) from yaw and pitch.
    pub fn look_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Health clamped for the HUD; the raw value may go negative on the
    /// killing blow.
    pub fn display_health(&self) -> i32 {
        self.health.max(0)
    }
}

/// Translates input intent into a clamped, terrain-locked position and
/// orientation.
#[derive(Debug, Clone)]
pub struct PlayerController {
    speed: f32,
    eye_height: f32,
    sensitivity: f32,
}

impl PlayerController {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            speed: config.player_speed,
            eye_height: config.eye_height,
            sensitivity: config.mouse_sensitivity,
        }
    }

    /// Place the player at a ground position, eyes at terrain + eye height.
    pub fn place(&self, player: &mut Player, x: f32, z: f32, terrain: &TerrainHeightField) {
        player.position = Vec3::new(x, terrain.height(x, z) + self.eye_height, z);
    }

    /// Advance the player by one frame.
    pub fn update(
        &self,
        player: &mut Player,
        input: &FrameInput,
        terrain: &TerrainHeightField,
        bounds: &WorldBounds,
        delta_time: f32,
        rng: &mut SeededRandom,
        events: &mut Vec<GameEvent>,
    ) {
        // Look first so movement uses this frame's heading.
        player.yaw += input.look_delta.0 * self.sensitivity;
        player.pitch = (player.pitch - input.look_delta.1 * self.sensitivity)
            .clamp(-FRAC_PI_2, FRAC_PI_2);

        let wish = input.movement.wish_dir();
        if wish != glam::Vec2::ZERO {
            let displacement =
                (player.right() * wish.x + player.forward() * wish.y) * self.speed * delta_time;
            let (clamped, _) = bounds.clamp(player.position + displacement);
            player.position = clamped;

            if rng.next_bool(DUST_CHANCE) {
                let foot = Vec3::new(
                    player.position.x,
                    player.position.y - self.eye_height,
                    player.position.z,
                );
                events.push(GameEvent::DustPuff { position: foot });
                events.push(GameEvent::Sound {
                    sound: SoundId::Footstep,
                    volume: 0.15,
                    pitch: rng.next_range(0.9, 1.1),
                });
            }
        }

        // Lock to the ground even when idle: the terrain under the player
        // may differ after a bounds clamp.
        player.position.y =
            terrain.height(player.position.x, player.position.z) + self.eye_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MovementInput;

    fn setup() -> (PlayerController, Player, TerrainHeightField, WorldBounds) {
        let config = GameConfig::default();
        let controller = PlayerController::new(&config);
        let terrain = TerrainHeightField::default();
        let bounds = WorldBounds::centered(config.world_half_extent);
        let mut player = Player::new(Vec3::ZERO, config.starting_health);
        controller.place(&mut player, 0.0, 0.0, &terrain);
        (controller, player, terrain, bounds)
    }

    fn input_forward() -> FrameInput {
        FrameInput {
            movement: MovementInput {
                forward: true,
                ..Default::default()
            },
            look_delta: (0.0, 0.0),
        }
    }

    #[test]
    fn forward_moves_along_heading() {
        let (controller, mut player, terrain, bounds) = setup();
        let mut rng = SeededRandom::new(1);
        let mut events = Vec::new();

        let start = player.position;
        for _ in 0..60 {
            controller.update(
                &mut player,
                &input_forward(),
                &terrain,
                &bounds,
                1.0 / 60.0,
                &mut rng,
                &mut events,
            );
        }

        // One second at 5 units/s, facing -Z.
        assert!((player.position.z - (start.z - 5.0)).abs() < 1e-3);
        assert!((player.position.x - start.x).abs() < 1e-3);
    }

    #[test]
    fn diagonal_not_faster_than_straight() {
        let (controller, mut player, terrain, bounds) = setup();
        let mut rng = SeededRandom::new(1);
        let mut events = Vec::new();

        let diagonal = FrameInput {
            movement: MovementInput {
                forward: true,
                right: true,
                ..Default::default()
            },
            look_delta: (0.0, 0.0),
        };
        let start = player.position;
        controller.update(
            &mut player, &diagonal, &terrain, &bounds, 1.0, &mut rng, &mut events,
        );

        let horizontal = glam::Vec2::new(
            player.position.x - start.x,
            player.position.z - start.z,
        );
        assert!((horizontal.length() - 5.0).abs() < 1e-3);
    }

    #[test]
    fn pitch_clamped_to_vertical() {
        let (controller, mut player, terrain, bounds) = setup();
        let mut rng = SeededRandom::new(1);
        let mut events = Vec::new();

        let look_up_hard = FrameInput {
            movement: MovementInput::default(),
            look_delta: (0.0, -1.0e6),
        };
        controller.update(
            &mut player,
            &look_up_hard,
            &terrain,
            &bounds,
            0.016,
            &mut rng,
            &mut events,
        );
        assert!((player.pitch - FRAC_PI_2).abs() < 1e-6);

        let look_down_hard = FrameInput {
            movement: MovementInput::default(),
            look_delta: (0.0, 1.0e6),
        };
        controller.update(
            &mut player,
            &look_down_hard,
            &terrain,
            &bounds,
            0.016,
            &mut rng,
            &mut events,
        );
        assert!((player.pitch + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn cannot_leave_bounds() {
        let (controller, mut player, terrain, bounds) = setup();
        let mut rng = SeededRandom::new(1);
        let mut events = Vec::new();

        // Walk forward (facing -Z) far longer than the world is wide.
        for _ in 0..1000 {
            controller.update(
                &mut player,
                &input_forward(),
                &terrain,
                &bounds,
                0.1,
                &mut rng,
                &mut events,
            );
        }
        assert!(bounds.contains(player.position));
        assert_eq!(player.position.z, -50.0);
    }

    #[test]
    fn stays_locked_to_terrain() {
        let (controller, mut player, terrain, bounds) = setup();
        let mut rng = SeededRandom::new(9);
        let mut events = Vec::new();

        for _ in 0..200 {
            controller.update(
                &mut player,
                &input_forward(),
                &terrain,
                &bounds,
                0.05,
                &mut rng,
                &mut events,
            );
            let expected = terrain.height(player.position.x, player.position.z) + 1.7;
            assert!((player.position.y - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn look_direction_matches_angles() {
        let (_, mut player, _, _) = setup();
        player.yaw = 0.0;
        player.pitch = 0.0;
        let dir = player.look_direction();
        assert!((dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);

        player.pitch = FRAC_PI_2;
        let up = player.look_direction();
        assert!((up.y - 1.0).abs() < 1e-6);
    }
}
