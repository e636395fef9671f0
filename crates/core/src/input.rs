//! Per-frame input state.
//!
//! The input collaborator turns key-down/key-up events into these flags and
//! accumulates mouse motion into a per-frame look delta. Discrete triggers
//! (fire, pause toggle, restart) arrive as explicit method calls on the
//! simulation instead, matching their event-edge nature.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Continuous input sampled once per frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameInput {
    /// Movement keys held this frame.
    pub movement: MovementInput,

    /// Mouse delta this frame in pixels (x, y), only non-zero while the
    /// host's capture mode is active.
    pub look_delta: (f32, f32),
}

/// Movement key states (W/S/A/D).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementInput {
    /// Movement intent as a unit vector (x = strafe right, y = forward),
    /// normalized so diagonal movement is not faster. Zero when no keys are
    /// held or opposing keys cancel.
    pub fn wish_dir(&self) -> Vec2 {
        let mut wish = Vec2::ZERO;
        if self.forward {
            wish.y += 1.0;
        }
        if self.backward {
            wish.y -= 1.0;
        }
        if self.right {
            wish.x += 1.0;
        }
        if self.left {
            wish.x -= 1.0;
        }
        if wish == Vec2::ZERO {
            wish
        } else {
            wish.normalize()
        }
    }
}
