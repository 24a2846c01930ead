//! Voronoi cell noise: nearest-seed-point search in a sparse random field.

use crate::math::{SQRT_3, floor};
use crate::noisegen::value_noise_3d;

use super::Module;

/// Default displacement amplitude for [`Voronoi`].
pub const DEFAULT_VORONOI_DISPLACEMENT: f64 = 1.0;

/// Default frequency for [`Voronoi`].
pub const DEFAULT_VORONOI_FREQUENCY: f64 = 1.0;

/// Partitions space into cells around pseudo-random seed points.
///
/// Each unit cube holds one seed point, jittered inside the cube by value
/// noise. The output is a per-cell constant (the displacement hash of the
/// winning seed point), optionally plus the distance to that seed point when
/// distance output is enabled.
#[derive(Debug, Clone)]
pub struct Voronoi {
    displacement: f64,
    enable_distance: bool,
    frequency: f64,
    seed: i32,
}

impl Voronoi {
    /// Creates a Voronoi module with the default parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            displacement: DEFAULT_VORONOI_DISPLACEMENT,
            enable_distance: false,
            frequency: DEFAULT_VORONOI_FREQUENCY,
            seed: 0,
        }
    }

    /// Returns the displacement amplitude applied per cell.
    #[must_use]
    pub fn displacement(&self) -> f64 {
        self.displacement
    }

    /// Sets the displacement amplitude applied per cell.
    pub fn set_displacement(&mut self, displacement: f64) {
        self.displacement = displacement;
    }

    /// Returns whether the distance to the nearest seed point is added to
    /// the output.
    #[must_use]
    pub fn is_distance_enabled(&self) -> bool {
        self.enable_distance
    }

    /// Enables or disables adding the distance to the nearest seed point.
    pub fn enable_distance(&mut self, enable: bool) {
        self.enable_distance = enable;
    }

    /// Returns the cell frequency.
    #[must_use]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Sets the cell frequency. Higher values shrink the cells.
    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    /// Returns the seed.
    #[must_use]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Sets the seed.
    pub fn set_seed(&mut self, seed: i32) {
        self.seed = seed;
    }
}

impl Default for Voronoi {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncation used for the cell origin. Unlike a true floor this maps
/// positive whole numbers to themselves but `0.0` and negative whole numbers
/// one cell down, and that asymmetry is part of the output contract.
#[inline]
fn cell_origin(c: f64) -> i32 {
    if c > 0.0 { c as i32 } else { c as i32 - 1 }
}

impl Module for Voronoi {
    fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
        let x = x * self.frequency;
        let y = y * self.frequency;
        let z = z * self.frequency;

        let x_int = cell_origin(x);
        let y_int = cell_origin(y);
        let z_int = cell_origin(z);

        let mut min_dist = f64::MAX;
        let mut x_candidate = 0.0;
        let mut y_candidate = 0.0;
        let mut z_candidate = 0.0;

        // Seed points can wander up to half a cell from their cube centre,
        // so the nearest one is always within two cubes of the input point.
        for z_cur in (z_int - 2)..=(z_int + 2) {
            for y_cur in (y_int - 2)..=(y_int + 2) {
                for x_cur in (x_int - 2)..=(x_int + 2) {
                    let x_pos = f64::from(x_cur) + value_noise_3d(x_cur, y_cur, z_cur, self.seed);
                    let y_pos = f64::from(y_cur)
                        + value_noise_3d(x_cur, y_cur, z_cur, self.seed.wrapping_add(1));
                    let z_pos = f64::from(z_cur)
                        + value_noise_3d(x_cur, y_cur, z_cur, self.seed.wrapping_add(2));
                    let x_dist = x_pos - x;
                    let y_dist = y_pos - y;
                    let z_dist = z_pos - z;
                    let dist = x_dist * x_dist + y_dist * y_dist + z_dist * z_dist;

                    if dist < min_dist {
                        min_dist = dist;
                        x_candidate = x_pos;
                        y_candidate = y_pos;
                        z_candidate = z_pos;
                    }
                }
            }
        }

        let value = if self.enable_distance {
            let x_dist = x_candidate - x;
            let y_dist = y_candidate - y;
            let z_dist = z_candidate - z;
            (x_dist * x_dist + y_dist * y_dist + z_dist * z_dist).sqrt() * SQRT_3 - 1.0
        } else {
            0.0
        };

        // The per-cell displacement hash always runs with seed 0.
        value
            + self.displacement
                * value_noise_3d(
                    floor(x_candidate),
                    floor(y_candidate),
                    floor(z_candidate),
                    0,
                )
    }
}
