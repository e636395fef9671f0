//! Per-tick collision detection and resolution.
//!
//! Runs once per tick after all movement updates. The scans never remove
//! entities directly - hits zero out health or projectile life, and the
//! store compacts the marks at the end - so every live entity is evaluated
//! exactly once regardless of what dies mid-pass.

use crate::entities::EnemyKind;
use crate::events::{GameEvent, SoundId};
use crate::physics::within_range;
use crate::player::Player;
use crate::store::EntityStore;

/// Damage per projectile hit.
const HIT_DAMAGE: i32 = 100;

/// What the tick needs to know about the pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombatOutcome {
    /// The player's health crossed zero this tick.
    pub player_died: bool,
}

/// Resolve projectile-enemy and enemy-player contacts, then compact.
pub fn resolve_combat(
    store: &mut EntityStore,
    player: &mut Player,
    events: &mut Vec<GameEvent>,
) -> CombatOutcome {
    let mut outcome = CombatOutcome::default();

    // Projectiles vs enemies. A projectile registers at most one hit per
    // tick: once it connects it is consumed and tested no further.
    for projectile in &mut store.projectiles {
        if !projectile.is_live() {
            continue;
        }

        for enemy in &mut store.enemies {
            if !enemy.is_alive() {
                continue;
            }

            if within_range(projectile.position, enemy.position, enemy.kind.hit_radius()) {
                enemy.health -= HIT_DAMAGE;
                projectile.life = 0.0;

                events.push(GameEvent::HitEffect {
                    position: enemy.position,
                });
                events.push(GameEvent::Sound {
                    sound: SoundId::Hit,
                    volume: 0.5,
                    pitch: 1.0,
                });

                if enemy.is_alive() {
                    if enemy.kind == EnemyKind::Giant {
                        events.push(GameEvent::GiantHitFlash { id: enemy.id });
                    }
                } else {
                    player.score += enemy.kind.score_value();
                    events.push(GameEvent::DeathEffect {
                        position: enemy.position,
                        kind: enemy.kind,
                    });
                    events.push(GameEvent::Sound {
                        sound: SoundId::Explosion,
                        volume: 0.7,
                        pitch: 1.0,
                    });
                    events.push(GameEvent::Sound {
                        sound: SoundId::EnemyDeath,
                        volume: 0.6,
                        pitch: 1.0,
                    });
                    log::debug!("killed {:?} {:?}, score {}", enemy.kind, enemy.id, player.score);
                }
                break;
            }
        }
    }

    // Enemies vs the player. A touching enemy is consumed on contact - it
    // deals its damage once and disappears without awarding score.
    for enemy in &mut store.enemies {
        if !enemy.is_alive() {
            continue;
        }

        if within_range(enemy.position, player.position, enemy.kind.collision_radius()) {
            player.health -= enemy.kind.contact_damage();
            enemy.health = 0;

            events.push(GameEvent::Sound {
                sound: SoundId::Hit,
                volume: 0.8,
                pitch: 0.8,
            });
            log::debug!(
                "{:?} {:?} hit the player, health {}",
                enemy.kind,
                enemy.id,
                player.health
            );

            if !player.is_alive() {
                outcome.player_died = true;
            }
        }
    }

    store.compact(events);
    outcome
}
