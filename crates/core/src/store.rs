//! Live entity collections.
//!
//! Plain `Vec`s with ordered iteration. Nothing removes an element while a
//! scan is in flight: combat and expiry only mark entities dead (health or
//! life at zero), and [`EntityStore::compact`] sweeps the marks afterwards.
//! That guarantees every live entity is evaluated exactly once per tick.

use glam::Vec3;

use crate::entities::{Enemy, EnemyKind, EntityId, EntityIdGenerator, Projectile};
use crate::events::GameEvent;

/// Owns the live enemies and projectiles.
#[derive(Debug, Default)]
pub struct EntityStore {
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    ids: EntityIdGenerator,
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            enemies: Vec::with_capacity(64),
            projectiles: Vec::with_capacity(64),
            ids: EntityIdGenerator::new(),
        }
    }

    /// Create an enemy and report it to the renderer.
    pub fn spawn_enemy(
        &mut self,
        position: Vec3,
        speed: f32,
        kind: EnemyKind,
        events: &mut Vec<GameEvent>,
    ) -> EntityId {
        let id = self.ids.next();
        self.enemies.push(Enemy::new(id, position, speed, kind));
        events.push(GameEvent::EnemySpawned { id, kind, position });
        id
    }

    /// Create a projectile and report it to the renderer.
    pub fn spawn_projectile(
        &mut self,
        position: Vec3,
        velocity: Vec3,
        life: f32,
        events: &mut Vec<GameEvent>,
    ) -> EntityId {
        let id = self.ids.next();
        self.projectiles
            .push(Projectile::new(id, position, velocity, life));
        events.push(GameEvent::ProjectileSpawned {
            id,
            position,
            velocity,
        });
        id
    }

    pub fn contains_enemy(&self, id: EntityId) -> bool {
        self.enemies.iter().any(|e| e.id == id)
    }

    /// Sweep out marked-dead entities, emitting a removal event for each so
    /// the renderer can deregister them.
    pub fn compact(&mut self, events: &mut Vec<GameEvent>) {
        self.enemies.retain(|enemy| {
            if enemy.is_alive() {
                true
            } else {
                events.push(GameEvent::EnemyRemoved { id: enemy.id });
                false
            }
        });
        self.projectiles.retain(|projectile| {
            if projectile.is_live() {
                true
            } else {
                events.push(GameEvent::ProjectileRemoved { id: projectile.id });
                false
            }
        });
    }

    /// Drop every entity without removal events. Used on restart, where the
    /// host tears the whole scene down anyway.
    pub fn clear(&mut self) {
        self.enemies.clear();
        self.projectiles.clear();
    }
}
