//! Events emitted toward the external collaborators.
//!
//! The simulation buffers these each frame; the host drains them after the
//! tick and forwards them to the renderer, the audio layer, and the HUD. A
//! host that drops events degrades silently - the simulation never reads
//! anything back.

use glam::Vec3;

use crate::entities::{EnemyKind, EntityId};
use crate::hud::GameOverSummary;

/// Sound cues the audio collaborator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundId {
    Gunshot,
    Hit,
    Explosion,
    Footstep,
    EnemyDeath,
    Pickup,
}

impl SoundId {
    /// Stable name matching the audio capability's `playSound(name, ...)`.
    pub fn name(&self) -> &'static str {
        match self {
            SoundId::Gunshot => "gunshot",
            SoundId::Hit => "hit",
            SoundId::Explosion => "explosion",
            SoundId::Footstep => "footstep",
            SoundId::EnemyDeath => "enemyDeath",
            SoundId::Pickup => "pickup",
        }
    }
}

/// One simulation-to-collaborator notification.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A new enemy exists; the renderer should build its visual.
    EnemySpawned {
        id: EntityId,
        kind: EnemyKind,
        position: Vec3,
    },
    /// An enemy was destroyed or consumed; deregister its visual.
    EnemyRemoved { id: EntityId },
    /// A projectile was fired.
    ProjectileSpawned {
        id: EntityId,
        position: Vec3,
        velocity: Vec3,
    },
    /// A projectile expired or was consumed by a hit.
    ProjectileRemoved { id: EntityId },
    /// A projectile connected; show an impact effect here.
    HitEffect { position: Vec3 },
    /// An enemy died; show its death effect.
    DeathEffect { position: Vec3, kind: EnemyKind },
    /// A giant survived a hit - flash its material briefly. Visual only.
    GiantHitFlash { id: EntityId },
    /// Cosmetic ground dust under a moving player.
    DustPuff { position: Vec3 },
    /// Fire-and-forget sound request.
    Sound {
        sound: SoundId,
        volume: f32,
        pitch: f32,
    },
    /// Terminal transition; emitted exactly once per run.
    GameOver { summary: GameOverSummary },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sound_names_match_audio_capability() {
        assert_eq!(SoundId::Gunshot.name(), "gunshot");
        assert_eq!(SoundId::EnemyDeath.name(), "enemyDeath");
        assert_eq!(SoundId::Pickup.name(), "pickup");
    }
}
