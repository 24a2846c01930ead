//! Transformer modules: rewrite the input coordinates before delegating to
//! a source module.

use tracing::trace;

use crate::error::Result;
use crate::math::DEG_TO_RAD;

use super::{Module, SharedModule, SourceSlots};

/// Shifts the input point by a fixed offset.
#[derive(Clone, Default)]
pub struct TranslatePoint {
    sources: SourceSlots<1>,
    x_translation: f64,
    y_translation: f64,
    z_translation: f64,
}

impl TranslatePoint {
    /// Creates a translation of (0, 0, 0) with no source bound.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: SourceSlots::new(),
            x_translation: 0.0,
            y_translation: 0.0,
            z_translation: 0.0,
        }
    }

    /// Returns the translation along each axis.
    #[must_use]
    pub fn translation(&self) -> (f64, f64, f64) {
        (self.x_translation, self.y_translation, self.z_translation)
    }

    /// Sets the translation along each axis.
    pub fn set_translation(&mut self, x: f64, y: f64, z: f64) {
        self.x_translation = x;
        self.y_translation = y;
        self.z_translation = z;
    }

    /// Sets the same translation on every axis.
    pub fn set_uniform_translation(&mut self, translation: f64) {
        self.set_translation(translation, translation, translation);
    }
}

impl Module for TranslatePoint {
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
        self.sources.require(0).get_value(
            x + self.x_translation,
            y + self.y_translation,
            z + self.z_translation,
        )
    }
}

/// Multiplies the input coordinates by per-axis factors.
#[derive(Clone)]
pub struct ScalePoint {
    sources: SourceSlots<1>,
    x_scale: f64,
    y_scale: f64,
    z_scale: f64,
}

impl ScalePoint {
    /// Creates a scale of (1, 1, 1) with no source bound.
    #[must_use]
    pub fn new() -> Self {
        Self { sources: SourceSlots::new(), x_scale: 1.0, y_scale: 1.0, z_scale: 1.0 }
    }

    /// Returns the scale factor on each axis.
    #[must_use]
    pub fn scale(&self) -> (f64, f64, f64) {
        (self.x_scale, self.y_scale, self.z_scale)
    }

    /// Sets the scale factor on each axis.
    pub fn set_scale(&mut self, x: f64, y: f64, z: f64) {
        self.x_scale = x;
        self.y_scale = y;
        self.z_scale = z;
    }

    /// Sets the same scale factor on every axis.
    pub fn set_uniform_scale(&mut self, scale: f64) {
        self.set_scale(scale, scale, scale);
    }
}

impl Default for ScalePoint {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for ScalePoint {
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
        self.sources
            .require(0)
            .get_value(x * self.x_scale, y * self.y_scale, z * self.z_scale)
    }
}

/// Rotates the input point around the origin by Euler angles, in degrees.
///
/// The 3×3 rotation matrix is rebuilt whenever an angle changes, never
/// during evaluation.
#[derive(Clone)]
pub struct RotatePoint {
    sources: SourceSlots<1>,
    x_angle: f64,
    y_angle: f64,
    z_angle: f64,
    x1_matrix: f64,
    x2_matrix: f64,
    x3_matrix: f64,
    y1_matrix: f64,
    y2_matrix: f64,
    y3_matrix: f64,
    z1_matrix: f64,
    z2_matrix: f64,
    z3_matrix: f64,
}

impl RotatePoint {
    /// Creates a rotation of (0°, 0°, 0°) with no source bound.
    #[must_use]
    pub fn new() -> Self {
        let mut module = Self {
            sources: SourceSlots::new(),
            x_angle: 0.0,
            y_angle: 0.0,
            z_angle: 0.0,
            x1_matrix: 0.0,
            x2_matrix: 0.0,
            x3_matrix: 0.0,
            y1_matrix: 0.0,
            y2_matrix: 0.0,
            y3_matrix: 0.0,
            z1_matrix: 0.0,
            z2_matrix: 0.0,
            z3_matrix: 0.0,
        };
        module.set_angles(0.0, 0.0, 0.0);
        module
    }

    /// Returns the rotation angles (x, y, z) in degrees.
    #[must_use]
    pub fn angles(&self) -> (f64, f64, f64) {
        (self.x_angle, self.y_angle, self.z_angle)
    }

    /// Sets all three rotation angles, in degrees, and rebuilds the rotation
    /// matrix.
    pub fn set_angles(&mut self, x_angle: f64, y_angle: f64, z_angle: f64) {
        let x_cos = (x_angle * DEG_TO_RAD).cos();
        let y_cos = (y_angle * DEG_TO_RAD).cos();
        let z_cos = (z_angle * DEG_TO_RAD).cos();
        let x_sin = (x_angle * DEG_TO_RAD).sin();
        let y_sin = (y_angle * DEG_TO_RAD).sin();
        let z_sin = (z_angle * DEG_TO_RAD).sin();

        self.x1_matrix = y_sin * x_sin * z_sin + y_cos * z_cos;
        self.y1_matrix = x_cos * z_sin;
        self.z1_matrix = y_sin * z_cos - y_cos * x_sin * z_sin;
        self.x2_matrix = y_sin * x_sin * z_cos - y_cos * z_sin;
        self.y2_matrix = x_cos * z_cos;
        self.z2_matrix = -y_cos * x_sin * z_cos - y_sin * z_sin;
        self.x3_matrix = -y_sin * x_cos;
        self.y3_matrix = x_sin;
        self.z3_matrix = y_cos * x_cos;

        self.x_angle = x_angle;
        self.y_angle = y_angle;
        self.z_angle = z_angle;
        trace!(x_angle, y_angle, z_angle, "rebuilt rotation matrix");
    }

    /// Sets the rotation around the x axis, in degrees.
    pub fn set_x_angle(&mut self, x_angle: f64) {
        self.set_angles(x_angle, self.y_angle, self.z_angle);
    }

    /// Sets the rotation around the y axis, in degrees.
    pub fn set_y_angle(&mut self, y_angle: f64) {
        self.set_angles(self.x_angle, y_angle, self.z_angle);
    }

    /// Sets the rotation around the z axis, in degrees.
    pub fn set_z_angle(&mut self, z_angle: f64) {
        self.set_angles(self.x_angle, self.y_angle, z_angle);
    }
}

impl Default for RotatePoint {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for RotatePoint {
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
        let nx = self.x1_matrix * x + self.y1_matrix * y + self.z1_matrix * z;
        let ny = self.x2_matrix * x + self.y2_matrix * y + self.z2_matrix * z;
        let nz = self.x3_matrix * x + self.y3_matrix * y + self.z3_matrix * z;
        self.sources.require(0).get_value(nx, ny, nz)
    }
}

/// Displaces the input point by the values of three displacement sources.
///
/// Slot 0 is the displaced source; slots 1, 2, and 3 supply the x, y, and z
/// offsets, each evaluated at the original input point.
#[derive(Clone, Default)]
pub struct Displace {
    sources: SourceSlots<4>,
}

impl Displace {
    /// Creates a displace module with no sources bound.
    #[must_use]
    pub fn new() -> Self {
        Self { sources: SourceSlots::new() }
    }

    /// Binds the x-displacement source (slot 1).
    pub fn set_x_displace_module(&mut self, module: SharedModule) {
        self.sources.put(1, module);
    }

    /// Binds the y-displacement source (slot 2).
    pub fn set_y_displace_module(&mut self, module: SharedModule) {
        self.sources.put(2, module);
    }

    /// Binds the z-displacement source (slot 3).
    pub fn set_z_displace_module(&mut self, module: SharedModule) {
        self.sources.put(3, module);
    }

    /// Binds all three displacement sources at once.
    pub fn set_displace_modules(
        &mut self,
        x_module: SharedModule,
        y_module: SharedModule,
        z_module: SharedModule,
    ) {
        self.sources.put(1, x_module);
        self.sources.put(2, y_module);
        self.sources.put(3, z_module);
    }
}

impl Module for Displace {
    fn source_count(&self) -> usize {
        4
    }

    fn set_source(&mut self, index: usize, source: SharedModule) -> Result<()> {
        self.sources.set(index, source)
    }

    fn source(&self, index: usize) -> Result<&SharedModule> {
        self.sources.get(index)
    }

    fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
        let x_displace = self.sources.require(1).get_value(x, y, z);
        let y_displace = self.sources.require(2).get_value(x, y, z);
        let z_displace = self.sources.require(3).get_value(x, y, z);
        self.sources
            .require(0)
            .get_value(x + x_displace, y + y_displace, z + z_displace)
    }
}
