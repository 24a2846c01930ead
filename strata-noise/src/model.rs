//! Coordinate-mapping models: evaluate a module graph over a surface or a
//! line instead of raw 3D points.
//!
//! Each model owns a handle to the graph's root module and converts its own
//! parameter space into the 3D point the graph is evaluated at. The sphere
//! model is the usual entry point for planetary textures; the plane model
//! for flat heightmaps.

use crate::math::{DEG_TO_RAD, lat_lon_to_xyz};
use crate::module::SharedModule;

/// Evaluates a module on the surface of a unit sphere, addressed by
/// latitude and longitude in degrees.
#[derive(Clone)]
pub struct Sphere {
    module: SharedModule,
}

impl Sphere {
    /// Creates a sphere model over the given module.
    #[must_use]
    pub fn new(module: SharedModule) -> Self {
        Self { module }
    }

    /// Returns the module being mapped.
    #[must_use]
    pub fn module(&self) -> &SharedModule {
        &self.module
    }

    /// Replaces the module being mapped.
    pub fn set_module(&mut self, module: SharedModule) {
        self.module = module;
    }

    /// Evaluates the module at a latitude/longitude pair, in degrees.
    ///
    /// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`.
    #[must_use]
    pub fn get_value(&self, lat: f64, lon: f64) -> f64 {
        let (x, y, z) = lat_lon_to_xyz(lat, lon);
        self.module.get_value(x, y, z)
    }
}

/// Evaluates a module on the y = 0 plane, addressed by (x, z).
#[derive(Clone)]
pub struct Plane {
    module: SharedModule,
}

impl Plane {
    /// Creates a plane model over the given module.
    #[must_use]
    pub fn new(module: SharedModule) -> Self {
        Self { module }
    }

    /// Returns the module being mapped.
    #[must_use]
    pub fn module(&self) -> &SharedModule {
        &self.module
    }

    /// Replaces the module being mapped.
    pub fn set_module(&mut self, module: SharedModule) {
        self.module = module;
    }

    /// Evaluates the module at `(x, 0, z)`.
    #[must_use]
    pub fn get_value(&self, x: f64, z: f64) -> f64 {
        self.module.get_value(x, 0.0, z)
    }
}

/// Evaluates a module on the surface of an infinite cylinder around the
/// y-axis, addressed by an angle in degrees and a height.
#[derive(Clone)]
pub struct Cylinder {
    module: SharedModule,
}

impl Cylinder {
    /// Creates a cylinder model over the given module.
    #[must_use]
    pub fn new(module: SharedModule) -> Self {
        Self { module }
    }

    /// Returns the module being mapped.
    #[must_use]
    pub fn module(&self) -> &SharedModule {
        &self.module
    }

    /// Replaces the module being mapped.
    pub fn set_module(&mut self, module: SharedModule) {
        self.module = module;
    }

    /// Evaluates the module at the point `(cos θ, height, sin θ)` on the
    /// unit cylinder.
    #[must_use]
    pub fn get_value(&self, angle: f64, height: f64) -> f64 {
        let angle_rad = angle * DEG_TO_RAD;
        self.module.get_value(angle_rad.cos(), height, angle_rad.sin())
    }
}

/// Evaluates a module along a straight line segment, addressed by a
/// parameter `p` from 0 (start point) to 1 (end point).
#[derive(Clone)]
pub struct Line {
    module: SharedModule,
    attenuate: bool,
    start: (f64, f64, f64),
    end: (f64, f64, f64),
}

impl Line {
    /// Creates a line model over the given module, running from the origin
    /// to `(1, 1, 1)` with attenuation enabled.
    #[must_use]
    pub fn new(module: SharedModule) -> Self {
        Self {
            module,
            attenuate: true,
            start: (0.0, 0.0, 0.0),
            end: (1.0, 1.0, 1.0),
        }
    }

    /// Returns the module being mapped.
    #[must_use]
    pub fn module(&self) -> &SharedModule {
        &self.module
    }

    /// Replaces the module being mapped.
    pub fn set_module(&mut self, module: SharedModule) {
        self.module = module;
    }

    /// Returns whether output is attenuated toward zero at the endpoints.
    #[must_use]
    pub fn attenuate(&self) -> bool {
        self.attenuate
    }

    /// Enables or disables endpoint attenuation.
    pub fn set_attenuate(&mut self, attenuate: bool) {
        self.attenuate = attenuate;
    }

    /// Sets the start point of the segment.
    pub fn set_start_point(&mut self, x: f64, y: f64, z: f64) {
        self.start = (x, y, z);
    }

    /// Sets the end point of the segment.
    pub fn set_end_point(&mut self, x: f64, y: f64, z: f64) {
        self.end = (x, y, z);
    }

    /// Evaluates the module at parameter `p` along the segment.
    ///
    /// With attenuation enabled the value is scaled by `4p(1 − p)`, which is
    /// zero at both endpoints, and `p` must lie in `[0, 1]`.
    #[must_use]
    pub fn get_value(&self, p: f64) -> f64 {
        debug_assert!(!self.attenuate || (0.0..=1.0).contains(&p));

        let x = (self.end.0 - self.start.0) * p + self.start.0;
        let y = (self.end.1 - self.start.1) * p + self.start.1;
        let z = (self.end.2 - self.start.2) * p + self.start.2;
        let value = self.module.get_value(x, y, z);

        if self.attenuate {
            value * (p * (1.0 - p) * 4.0)
        } else {
            value
        }
    }
}
