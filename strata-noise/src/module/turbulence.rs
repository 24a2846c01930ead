//! Turbulence: random displacement of the input point.

use crate::error::Result;

use super::fractal::Perlin;
use super::{Module, SharedModule, SourceSlots};

/// Default displacement power for [`Turbulence`].
pub const DEFAULT_TURBULENCE_POWER: f64 = 1.0;

/// Default roughness (internal octave count) for [`Turbulence`].
pub const DEFAULT_TURBULENCE_ROUGHNESS: u32 = 3;

/// Randomly displaces the input point before sampling the source.
///
/// Three internal [`Perlin`] samplers, one per axis, supply the
/// displacement. Each sampler reads from a fixed offset of the input point
/// so the three channels stay decorrelated, and their seeds are derived from
/// the module seed as `seed`, `seed + 1`, `seed + 2`. The displacement is
/// scaled by the power before it is applied.
///
/// Moderate power and roughness warp a pattern subtly; high values shred it
/// into lava-rock or marble textures.
#[derive(Clone)]
pub struct Turbulence {
    sources: SourceSlots<1>,
    power: f64,
    x_distort: Perlin,
    y_distort: Perlin,
    z_distort: Perlin,
}

impl Turbulence {
    /// Creates a turbulence module with default power, roughness, frequency,
    /// and seed, and no source bound.
    #[must_use]
    pub fn new() -> Self {
        let mut module = Self {
            sources: SourceSlots::new(),
            power: DEFAULT_TURBULENCE_POWER,
            x_distort: Perlin::new(),
            y_distort: Perlin::new(),
            z_distort: Perlin::new(),
        };
        module.set_seed(0);
        module.set_frequency(1.0);
        // The default roughness is always in range.
        let _ = module.set_roughness(DEFAULT_TURBULENCE_ROUGHNESS);
        module
    }

    /// Returns the displacement frequency.
    #[must_use]
    pub fn frequency(&self) -> f64 {
        self.x_distort.frequency()
    }

    /// Sets the frequency of the three displacement samplers.
    pub fn set_frequency(&mut self, frequency: f64) {
        self.x_distort.set_frequency(frequency);
        self.y_distort.set_frequency(frequency);
        self.z_distort.set_frequency(frequency);
    }

    /// Returns the displacement power.
    #[must_use]
    pub fn power(&self) -> f64 {
        self.power
    }

    /// Sets the scaling applied to the displacement amount.
    pub fn set_power(&mut self, power: f64) {
        self.power = power;
    }

    /// Returns the roughness (the displacement samplers' octave count).
    #[must_use]
    pub fn roughness(&self) -> u32 {
        self.x_distort.octave_count()
    }

    /// Sets the roughness of the displacement.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidParameter`] if `roughness` is outside
    /// `1..=30`.
    ///
    /// [`NoiseError::InvalidParameter`]: crate::NoiseError::InvalidParameter
    pub fn set_roughness(&mut self, roughness: u32) -> Result<()> {
        self.x_distort.set_octave_count(roughness)?;
        self.y_distort.set_octave_count(roughness)?;
        self.z_distort.set_octave_count(roughness)?;
        Ok(())
    }

    /// Returns the seed.
    #[must_use]
    pub fn seed(&self) -> i32 {
        self.x_distort.seed()
    }

    /// Sets the seed. The three displacement channels use `seed`,
    /// `seed + 1`, and `seed + 2`.
    pub fn set_seed(&mut self, seed: i32) {
        self.x_distort.set_seed(seed);
        self.y_distort.set_seed(seed.wrapping_add(1));
        self.z_distort.set_seed(seed.wrapping_add(2));
    }
}

impl Default for Turbulence {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for Turbulence {
    fn source_count(&self) -> usize {
        1
    }

    fn set_source(&mut self, index: usize, source: SharedModule) -> Result<()> {
        self.sources.set(index, source)
    }

    fn source(&self, index: usize) -> Result<&SharedModule> {
        self.sources.get(index)
    }

    fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
        // Fixed offsets keep the three displacement channels from sampling
        // the same underlying pattern.
        let x0 = x + (12414.0 / 65536.0);
        let y0 = y + (65124.0 / 65536.0);
        let z0 = z + (31337.0 / 65536.0);
        let x1 = x + (26519.0 / 65536.0);
        let y1 = y + (18128.0 / 65536.0);
        let z1 = z + (60493.0 / 65536.0);
        let x2 = x + (53820.0 / 65536.0);
        let y2 = y + (11213.0 / 65536.0);
        let z2 = z + (44845.0 / 65536.0);

        let x_distort = x + self.x_distort.get_value(x0, y0, z0) * self.power;
        let y_distort = y + self.y_distort.get_value(x1, y1, z1) * self.power;
        let z_distort = z + self.z_distort.get_value(x2, y2, z2) * self.power;

        self.sources.require(0).get_value(x_distort, y_distort, z_distort)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::Checkerboard;
    use super::*;

    struct CoordX;

    impl Module for CoordX {
        fn get_value(&self, x: f64, _y: f64, _z: f64) -> f64 {
            x
        }
    }

    #[test]
    fn zero_power_is_the_identity_transform() {
        let mut turbulence = Turbulence::new();
        turbulence.set_power(0.0);
        turbulence.set_source(0, Arc::new(CoordX)).unwrap();
        assert_eq!(turbulence.get_value(1.375, 2.0, -0.5).to_bits(), 1.375_f64.to_bits());
    }

    #[test]
    fn seed_fans_out_across_the_channels() {
        let mut turbulence = Turbulence::new();
        turbulence.set_seed(7);
        assert_eq!(turbulence.seed(), 7);
        assert_eq!(turbulence.x_distort.seed(), 7);
        assert_eq!(turbulence.y_distort.seed(), 8);
        assert_eq!(turbulence.z_distort.seed(), 9);
    }

    #[test]
    fn roughness_forwards_to_the_samplers() {
        let mut turbulence = Turbulence::new();
        turbulence.set_roughness(5).unwrap();
        assert_eq!(turbulence.roughness(), 5);
        assert!(turbulence.set_roughness(31).is_err());
        assert_eq!(turbulence.roughness(), 5);
    }

    #[test]
    fn turbulence_is_deterministic() {
        let mut turbulence = Turbulence::new();
        turbulence.set_source(0, Arc::new(Checkerboard::new())).unwrap();
        let a = turbulence.get_value(0.3, 0.6, 0.9);
        let b = turbulence.get_value(0.3, 0.6, 0.9);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
