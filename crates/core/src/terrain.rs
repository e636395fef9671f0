//! Procedural terrain height field.
//!
//! A pure function from ground coordinates to elevation. Every placement in
//! the game (player, enemies, vegetation on the rendering side) samples this
//! same function, so the simulated ground and the visual ground coincide
//! exactly - there is no separate collision mesh.

use std::f32::consts::TAU;

/// Octave frequencies in cycles across the terrain span.
const OCTAVE_CYCLES: [f32; 3] = [3.0, 6.0, 12.0];

/// Octave amplitudes, matched index-for-index with [`OCTAVE_CYCLES`].
const OCTAVE_AMPLITUDES: [f32; 3] = [2.0, 1.0, 0.3];

/// Below this magnitude of the control sinusoid the ground flattens out.
const PLAINS_THRESHOLD: f32 = 0.3;

/// Elevation scale applied inside the plains.
const PLAINS_SCALE: f32 = 0.2;

/// Sinusoidal ridge terrain over a square span.
#[derive(Debug, Clone, Copy)]
pub struct TerrainHeightField {
    /// Width of the terrain in world units (one full cycle of the lowest
    /// control frequency spans this distance).
    pub span: f32,
}

impl TerrainHeightField {
    pub fn new(span: f32) -> Self {
        Self { span }
    }

    /// Ground elevation at (x, z). Pure, deterministic, continuous over the
    /// play area.
    pub fn height(&self, x: f32, z: f32) -> f32 {
        let u = x / self.span * TAU;
        let v = z / self.span * TAU;

        let mut elevation = 0.0;
        for (cycles, amplitude) in OCTAVE_CYCLES.iter().zip(OCTAVE_AMPLITUDES.iter()) {
            elevation += amplitude * (cycles * u).sin() * (cycles * v).cos();
        }

        // Flatten into plains wherever the low-frequency control wave is weak.
        let control = u.sin() * v.cos();
        if control.abs() < PLAINS_THRESHOLD {
            elevation *= PLAINS_SCALE;
        }

        elevation
    }
}

impl Default for TerrainHeightField {
    fn default() -> Self {
        Self::new(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let terrain = TerrainHeightField::default();
        for i in 0..100 {
            let x = i as f32 * 0.73 - 36.0;
            let z = i as f32 * 1.19 - 59.0;
            assert_eq!(terrain.height(x, z), terrain.height(x, z));
        }
    }

    #[test]
    fn bounded_by_total_amplitude() {
        let terrain = TerrainHeightField::default();
        let max: f32 = OCTAVE_AMPLITUDES.iter().sum();
        for i in 0..50 {
            for j in 0..50 {
                let x = i as f32 * 2.0 - 50.0;
                let z = j as f32 * 2.0 - 50.0;
                let h = terrain.height(x, z);
                assert!(h.abs() <= max, "height {} out of range at ({}, {})", h, x, z);
            }
        }
    }

    #[test]
    fn plains_are_flatter() {
        let terrain = TerrainHeightField::default();
        // At x = 0 the control wave sin(0) = 0, so everything along that
        // line is inside the plains and scaled down.
        for j in 0..20 {
            let z = j as f32 * 3.0 - 30.0;
            let h = terrain.height(0.0, z);
            let max: f32 = OCTAVE_AMPLITUDES.iter().sum();
            assert!(h.abs() <= max * PLAINS_SCALE + 1e-4);
        }
    }
}
