//! Enemy and projectile entities.
//!
//! Enemy variants share one struct with a tagged kind; all per-variant
//! constants live in the kind's stat table rather than being scattered
//! through the combat logic.

use glam::Vec3;

/// Unique identifier for an entity. Ids are never reused within a process,
/// including across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Monotonic entity id source.
#[derive(Debug, Clone, Default)]
pub struct EntityIdGenerator {
    next_id: u32,
}

impl EntityIdGenerator {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    pub fn next(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Enemy variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Regular,
    /// High-health variant spawned once per elapsed minute.
    Giant,
}

impl EnemyKind {
    /// Health at spawn.
    pub fn max_health(&self) -> i32 {
        match self {
            EnemyKind::Regular => 100,
            EnemyKind::Giant => 1000,
        }
    }

    /// Projectile contact threshold.
    pub fn hit_radius(&self) -> f32 {
        match self {
            EnemyKind::Regular => 1.0,
            EnemyKind::Giant => 1.5,
        }
    }

    /// Player contact threshold.
    pub fn collision_radius(&self) -> f32 {
        match self {
            EnemyKind::Regular => 2.0,
            EnemyKind::Giant => 3.0,
        }
    }

    /// Damage dealt to the player on contact.
    pub fn contact_damage(&self) -> i32 {
        match self {
            EnemyKind::Regular => 10,
            EnemyKind::Giant => 20,
        }
    }

    /// Score awarded for a kill.
    pub fn score_value(&self) -> u32 {
        match self {
            EnemyKind::Regular => 10,
            EnemyKind::Giant => 50,
        }
    }

    /// Multiplier on the difficulty curve's enemy speed.
    pub fn speed_factor(&self) -> f32 {
        match self {
            EnemyKind::Regular => 1.0,
            EnemyKind::Giant => 0.7,
        }
    }

    /// Height above the terrain surface the body sits at.
    pub fn ground_clearance(&self) -> f32 {
        match self {
            EnemyKind::Regular => 1.0,
            EnemyKind::Giant => 2.0,
        }
    }

    /// Spawn ring radius range around the player.
    pub fn spawn_radius_range(&self) -> (f32, f32) {
        match self {
            EnemyKind::Regular => (30.0, 50.0),
            EnemyKind::Giant => (35.0, 50.0),
        }
    }
}

/// Enemy entity.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: EntityId,
    pub position: Vec3,
    /// Movement speed, sampled from the difficulty curve at spawn time and
    /// fixed thereafter.
    pub speed: f32,
    pub health: i32,
    pub max_health: i32,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn new(id: EntityId, position: Vec3, speed: f32, kind: EnemyKind) -> Self {
        Self {
            id,
            position,
            speed,
            health: kind.max_health(),
            max_health: kind.max_health(),
            kind,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Projectile entity. Direction is the player's view direction at fire time;
/// the velocity never changes afterwards.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: EntityId,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Remaining life in seconds; the projectile is removed at zero or on
    /// its first enemy hit, whichever comes first.
    pub life: f32,
}

impl Projectile {
    pub fn new(id: EntityId, position: Vec3, velocity: Vec3, life: f32) -> Self {
        Self {
            id,
            position,
            velocity,
            life,
        }
    }

    pub fn is_live(&self) -> bool {
        self.life > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut ids = EntityIdGenerator::new();
        let a = ids.next();
        let b = ids.next();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn stat_table_values() {
        assert_eq!(EnemyKind::Regular.max_health(), 100);
        assert_eq!(EnemyKind::Giant.max_health(), 1000);
        assert_eq!(EnemyKind::Regular.contact_damage(), 10);
        assert_eq!(EnemyKind::Giant.contact_damage(), 20);
        assert_eq!(EnemyKind::Regular.score_value(), 10);
        assert_eq!(EnemyKind::Giant.score_value(), 50);
        assert_eq!(EnemyKind::Giant.speed_factor(), 0.7);
    }

    #[test]
    fn enemy_starts_at_full_health() {
        let enemy = Enemy::new(EntityId(1), Vec3::ZERO, 2.0, EnemyKind::Giant);
        assert_eq!(enemy.health, enemy.max_health);
        assert!(enemy.is_alive());
    }
}
