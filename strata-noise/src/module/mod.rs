//! The module graph: pluggable operators evaluated at a 3D point.
//!
//! A graph is built by constructing modules, configuring them through their
//! setters, binding their source slots to already-built modules, and finally
//! wrapping each module in an [`Arc`] so parents can share it. Evaluation is
//! a single recursive descent: [`Module::get_value`] pulls values from the
//! bound sources at possibly transformed coordinates.
//!
//! Children are shared-immutable: a [`SharedModule`] may feed any number of
//! parents across any number of graphs, and once a module is behind an `Arc`
//! no `&mut` path to it exists, which is exactly what makes concurrent
//! evaluation of a shared graph sound. The graph must be acyclic; cycles are
//! not detected and recurse until the stack is exhausted.

mod combiners;
mod curve;
mod fractal;
mod generators;
mod modifiers;
mod selectors;
mod terrace;
mod transformers;
mod turbulence;
mod voronoi;

pub use combiners::{Add, Max, Min, Multiply, Power};
pub use curve::{ControlPoint, Curve};
pub use fractal::{
    Billow, DEFAULT_FRACTAL_FREQUENCY, DEFAULT_FRACTAL_LACUNARITY, DEFAULT_FRACTAL_OCTAVE_COUNT,
    DEFAULT_FRACTAL_PERSISTENCE, MAX_OCTAVE_COUNT, Perlin, RidgedMulti,
};
pub use generators::{
    Checkerboard, Const, Cylinders, DEFAULT_CONST_VALUE, DEFAULT_PATTERN_FREQUENCY, Spheres,
};
pub use modifiers::{
    Abs, Clamp, DEFAULT_BIAS, DEFAULT_CLAMP_LOWER_BOUND, DEFAULT_CLAMP_UPPER_BOUND,
    DEFAULT_EXPONENT, DEFAULT_SCALE, Exponent, Invert, ScaleBias,
};
pub use selectors::{
    Blend, DEFAULT_SELECT_EDGE_FALLOFF, DEFAULT_SELECT_LOWER_BOUND, DEFAULT_SELECT_UPPER_BOUND,
    Select,
};
pub use terrace::Terrace;
pub use transformers::{Displace, RotatePoint, ScalePoint, TranslatePoint};
pub use turbulence::{DEFAULT_TURBULENCE_POWER, DEFAULT_TURBULENCE_ROUGHNESS, Turbulence};
pub use voronoi::{DEFAULT_VORONOI_DISPLACEMENT, DEFAULT_VORONOI_FREQUENCY, Voronoi};

use std::sync::Arc;

use crate::error::{NoiseError, Result};

/// A module shared between parents.
///
/// Binding never transfers ownership: the parent holds a reference-counted
/// handle, and rebinding a slot simply replaces the handle.
pub type SharedModule = Arc<dyn Module>;

/// A noise operator that produces a value at any point in 3D space.
///
/// Every implementation has a fixed number of source slots determined by its
/// kind. Evaluating a module whose required slots are unbound is a
/// programming error and panics with a descriptive message.
pub trait Module: Send + Sync {
    /// Number of source-module slots this module exposes.
    fn source_count(&self) -> usize {
        0
    }

    /// Binds `source` to slot `index`.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidParameter`] if `index` is not below
    /// [`source_count`](Module::source_count).
    fn set_source(&mut self, index: usize, source: SharedModule) -> Result<()> {
        let _ = (index, source);
        Err(NoiseError::InvalidParameter("source slot index out of range"))
    }

    /// Returns the module bound to slot `index`.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::MissingSource`] if the slot is out of range or
    /// nothing is bound to it.
    fn source(&self, index: usize) -> Result<&SharedModule> {
        Err(NoiseError::MissingSource(index))
    }

    /// Evaluates the module at `(x, y, z)`.
    ///
    /// The result is a pure function of the module's configuration and the
    /// input point: the same graph and the same point always produce the
    /// same bit pattern.
    fn get_value(&self, x: f64, y: f64, z: f64) -> f64;
}

/// Fixed-arity storage for source-module bindings.
#[derive(Clone)]
pub(crate) struct SourceSlots<const N: usize> {
    slots: [Option<SharedModule>; N],
}

impl<const N: usize> Default for SourceSlots<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SourceSlots<N> {
    pub(crate) fn new() -> Self {
        Self { slots: [const { None }; N] }
    }

    /// Fallible bind used by [`Module::set_source`].
    pub(crate) fn set(&mut self, index: usize, source: SharedModule) -> Result<()> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(NoiseError::InvalidParameter("source slot index out of range"))?;
        *slot = Some(source);
        Ok(())
    }

    /// Infallible bind for named convenience setters whose slot index is a
    /// compile-time constant below `N`.
    pub(crate) fn put(&mut self, index: usize, source: SharedModule) {
        self.slots[index] = Some(source);
    }

    pub(crate) fn get(&self, index: usize) -> Result<&SharedModule> {
        self.slots
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(NoiseError::MissingSource(index))
    }

    /// Evaluation-path accessor. Panics if the slot is unbound.
    pub(crate) fn require(&self, index: usize) -> &SharedModule {
        self.slots[index]
            .as_ref()
            .expect("source module must be bound before evaluation")
    }
}
