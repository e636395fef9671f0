//! Verdant Core - Survival Shooter Simulation
//!
//! This crate contains the complete game simulation: time and difficulty
//! progression, spawn scheduling, movement, collision resolution, scoring,
//! and the pause/game-over state machine. It knows nothing about rendering,
//! audio synthesis, or the DOM - those collaborators consume the typed
//! events the simulation emits each frame.
//!
//! # Design Rules
//!
//! 1. No `rand::thread_rng()` - use `SeededRandom` so a session is
//!    reproducible from a seed and an input script
//! 2. No system time - the host supplies the frame delta
//! 3. Ordered iteration - `Vec` not `HashMap` for entities
//! 4. No panics outside tests - missing collaborators degrade silently
//! 5. No mid-scan removal - entities are marked dead and compacted after

pub mod combat;
pub mod config;
pub mod difficulty;
pub mod entities;
pub mod events;
pub mod hud;
pub mod input;
pub mod physics;
pub mod player;
pub mod random;
pub mod simulation;
pub mod spawn;
pub mod store;
pub mod terrain;

pub use config::GameConfig;
pub use difficulty::DifficultyCurve;
pub use events::{GameEvent, SoundId};
pub use hud::{GameOverSummary, HudSnapshot};
pub use input::FrameInput;
pub use physics::WorldBounds;
pub use random::SeededRandom;
pub use simulation::{GamePhase, Simulation};
pub use terrain::TerrainHeightField;
