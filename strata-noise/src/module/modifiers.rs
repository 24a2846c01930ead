//! Modifier modules: pointwise transforms of a single source value.

use crate::error::{NoiseError, Result};
use crate::math::clamp;

use super::{Module, SharedModule, SourceSlots};

/// Default lower clamping bound for [`Clamp`].
pub const DEFAULT_CLAMP_LOWER_BOUND: f64 = -1.0;

/// Default upper clamping bound for [`Clamp`].
pub const DEFAULT_CLAMP_UPPER_BOUND: f64 = 1.0;

/// Default exponent for [`Exponent`].
pub const DEFAULT_EXPONENT: f64 = 1.0;

/// Default scale for [`ScaleBias`].
pub const DEFAULT_SCALE: f64 = 1.0;

/// Default bias for [`ScaleBias`].
pub const DEFAULT_BIAS: f64 = 0.0;

/// Outputs the absolute value of its source.
#[derive(Clone, Default)]
pub struct Abs {
    sources: SourceSlots<1>,
}

impl Abs {
    /// Creates an absolute-value module with no source bound.
    #[must_use]
    pub fn new() -> Self {
        Self { sources: SourceSlots::new() }
    }
}

impl Module for Abs {
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
        self.sources.require(0).get_value(x, y, z).abs()
    }
}

/// Clamps the source value onto a fixed range.
#[derive(Clone)]
pub struct Clamp {
    sources: SourceSlots<1>,
    lower_bound: f64,
    upper_bound: f64,
}

impl Clamp {
    /// Creates a clamp module with bounds `[-1, 1]` and no source bound.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: SourceSlots::new(),
            lower_bound: DEFAULT_CLAMP_LOWER_BOUND,
            upper_bound: DEFAULT_CLAMP_UPPER_BOUND,
        }
    }

    /// Returns the lower clamping bound.
    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Returns the upper clamping bound.
    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// Sets the clamping range.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidParameter`] if `lower_bound` exceeds
    /// `upper_bound`.
    pub fn set_bounds(&mut self, lower_bound: f64, upper_bound: f64) -> Result<()> {
        if lower_bound > upper_bound {
            return Err(NoiseError::InvalidParameter("clamp bounds are inverted"));
        }
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        Ok(())
    }
}

impl Default for Clamp {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for Clamp {
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
        clamp(
            self.sources.require(0).get_value(x, y, z),
            self.lower_bound,
            self.upper_bound,
        )
    }
}

/// Maps the source value onto an exponential curve.
///
/// The value is normalised from `[-1, 1]` to `[0, 1]`, raised to the
/// exponent, and rescaled back. The absolute value taken before the power is
/// redundant for in-range sources but deliberately kept, because it changes
/// the result for sources that stray outside `[-1, 1]`.
#[derive(Clone)]
pub struct Exponent {
    sources: SourceSlots<1>,
    exponent: f64,
}

impl Exponent {
    /// Creates an exponent module with exponent 1.0 and no source bound.
    #[must_use]
    pub fn new() -> Self {
        Self { sources: SourceSlots::new(), exponent: DEFAULT_EXPONENT }
    }

    /// Returns the exponent.
    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Sets the exponent.
    pub fn set_exponent(&mut self, exponent: f64) {
        self.exponent = exponent;
    }
}

impl Default for Exponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for Exponent {
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
        let value = self.sources.require(0).get_value(x, y, z);
        let normalized = (value + 1.0) / 2.0;
        normalized.abs().powf(self.exponent) * 2.0 - 1.0
    }
}

/// Negates its source.
#[derive(Clone, Default)]
pub struct Invert {
    sources: SourceSlots<1>,
}

impl Invert {
    /// Creates an invert module with no source bound.
    #[must_use]
    pub fn new() -> Self {
        Self { sources: SourceSlots::new() }
    }
}

impl Module for Invert {
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
        -self.sources.require(0).get_value(x, y, z)
    }
}

/// Applies a linear transform `value · scale + bias` to its source.
#[derive(Clone)]
pub struct ScaleBias {
    sources: SourceSlots<1>,
    scale: f64,
    bias: f64,
}

impl ScaleBias {
    /// Creates a scale/bias module with scale 1.0, bias 0.0, and no source
    /// bound.
    #[must_use]
    pub fn new() -> Self {
        Self { sources: SourceSlots::new(), scale: DEFAULT_SCALE, bias: DEFAULT_BIAS }
    }

    /// Returns the scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Returns the bias.
    #[must_use]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Sets the bias.
    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }
}

impl Default for ScaleBias {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for ScaleBias {
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
        self.sources.require(0).get_value(x, y, z) * self.scale + self.bias
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::Const;
    use super::*;

    fn constant(value: f64) -> SharedModule {
        let mut module = Const::new();
        module.set_const_value(value);
        Arc::new(module)
    }

    #[test]
    fn abs_folds_negative_values() {
        let mut module = Abs::new();
        module.set_source(0, constant(-0.75)).unwrap();
        assert_eq!(module.get_value(0.0, 0.0, 0.0).to_bits(), 0.75_f64.to_bits());
    }

    #[test]
    fn clamp_applies_bounds() {
        let mut module = Clamp::new();
        module.set_source(0, constant(2.0)).unwrap();
        assert_eq!(module.get_value(0.0, 0.0, 0.0).to_bits(), 1.0_f64.to_bits());
        module.set_bounds(0.0, 0.5).unwrap();
        assert_eq!(module.get_value(0.0, 0.0, 0.0).to_bits(), 0.5_f64.to_bits());
    }

    #[test]
    fn clamp_degenerate_bounds_pin_the_output() {
        let mut module = Clamp::new();
        module.set_source(0, constant(-0.3)).unwrap();
        module.set_bounds(0.25, 0.25).unwrap();
        assert_eq!(module.get_value(0.0, 0.0, 0.0).to_bits(), 0.25_f64.to_bits());
    }

    #[test]
    fn clamp_rejects_inverted_bounds() {
        let mut module = Clamp::new();
        assert!(matches!(
            module.set_bounds(1.0, -1.0),
            Err(NoiseError::InvalidParameter(_))
        ));
        // The rejected call must not disturb the previous bounds.
        assert_eq!(module.lower_bound().to_bits(), (-1.0_f64).to_bits());
        assert_eq!(module.upper_bound().to_bits(), 1.0_f64.to_bits());
    }

    #[test]
    fn exponent_of_one_is_near_identity() {
        let mut module = Exponent::new();
        module.set_source(0, constant(0.42)).unwrap();
        assert!((module.get_value(0.0, 0.0, 0.0) - 0.42).abs() < 1e-15);
    }

    #[test]
    fn exponent_squashes_toward_negative_one() {
        let mut module = Exponent::new();
        module.set_exponent(2.0);
        module.set_source(0, constant(0.0)).unwrap();
        // ((0 + 1) / 2)² · 2 − 1 = −0.5
        assert_eq!(module.get_value(0.0, 0.0, 0.0).to_bits(), (-0.5_f64).to_bits());
    }

    #[test]
    fn exponent_keeps_the_absolute_value_for_out_of_range_sources() {
        // A source below -1 normalises to a negative value; the absolute
        // value folds it positive before the power.
        let mut module = Exponent::new();
        module.set_exponent(2.0);
        module.set_source(0, constant(-3.0)).unwrap();
        // normalized = -1, |.|² = 1, output = 1.
        assert_eq!(module.get_value(0.0, 0.0, 0.0).to_bits(), 1.0_f64.to_bits());
    }

    #[test]
    fn invert_is_an_involution() {
        let mut inner = Invert::new();
        inner.set_source(0, constant(0.6)).unwrap();
        let mut outer = Invert::new();
        outer.set_source(0, Arc::new(inner)).unwrap();
        assert_eq!(outer.get_value(1.0, 2.0, 3.0).to_bits(), 0.6_f64.to_bits());
    }

    #[test]
    fn scale_bias_identity_configuration() {
        let mut module = ScaleBias::new();
        module.set_source(0, constant(0.123_456_789)).unwrap();
        assert_eq!(
            module.get_value(4.0, 5.0, 6.0).to_bits(),
            (0.123_456_789_f64 * 1.0 + 0.0).to_bits()
        );
    }

    #[test]
    fn scale_bias_transform() {
        let mut module = ScaleBias::new();
        module.set_scale(0.5);
        module.set_bias(0.25);
        module.set_source(0, constant(1.0)).unwrap();
        assert_eq!(module.get_value(0.0, 0.0, 0.0).to_bits(), 0.75_f64.to_bits());
    }
}
