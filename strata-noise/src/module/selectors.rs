//! Selector modules: a control source steers between two value sources.

use crate::error::{NoiseError, Result};
use crate::math::{linear_interp, s_curve3};

use super::{Module, SharedModule, SourceSlots};

/// Default lower selection bound for [`Select`].
pub const DEFAULT_SELECT_LOWER_BOUND: f64 = -1.0;

/// Default upper selection bound for [`Select`].
pub const DEFAULT_SELECT_UPPER_BOUND: f64 = 1.0;

/// Default edge falloff for [`Select`].
pub const DEFAULT_SELECT_EDGE_FALLOFF: f64 = 0.0;

/// Cross-fades between its first two sources, weighted by a control source.
///
/// The control value is mapped from `[-1, 1]` to a blend alpha in `[0, 1]`:
/// a control of -1 outputs source 0, +1 outputs source 1, and 0 the exact
/// midpoint. Slot 2 carries the control source.
#[derive(Clone, Default)]
pub struct Blend {
    sources: SourceSlots<3>,
}

impl Blend {
    /// Creates a blend module with no sources bound.
    #[must_use]
    pub fn new() -> Self {
        Self { sources: SourceSlots::new() }
    }

    /// Binds the control source (slot 2).
    pub fn set_control_module(&mut self, control: SharedModule) {
        self.sources.put(2, control);
    }
}

impl Module for Blend {
    fn source_count(&self) -> usize {
        3
    }

    fn set_source(&mut self, index: usize, source: SharedModule) -> Result<()> {
        self.sources.set(index, source)
    }

    fn source(&self, index: usize) -> Result<&SharedModule> {
        self.sources.get(index)
    }

    fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
        let v0 = self.sources.require(0).get_value(x, y, z);
        let v1 = self.sources.require(1).get_value(x, y, z);
        let alpha = (self.sources.require(2).get_value(x, y, z) + 1.0) / 2.0;
        linear_interp(v0, v1, alpha)
    }
}

/// Switches between its first two sources depending on where a control value
/// falls relative to a selection range.
///
/// With zero edge falloff the switch is hard: source 1 wins while the
/// control lies inside `[lower_bound, upper_bound]`, source 0 outside. A
/// positive edge falloff widens each boundary into a smooth S-curve
/// transition band. Slot 2 carries the control source.
#[derive(Clone)]
pub struct Select {
    sources: SourceSlots<3>,
    edge_falloff: f64,
    lower_bound: f64,
    upper_bound: f64,
}

impl Select {
    /// Creates a select module with bounds `[-1, 1]`, zero edge falloff, and
    /// no sources bound.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: SourceSlots::new(),
            edge_falloff: DEFAULT_SELECT_EDGE_FALLOFF,
            lower_bound: DEFAULT_SELECT_LOWER_BOUND,
            upper_bound: DEFAULT_SELECT_UPPER_BOUND,
        }
    }

    /// Binds the control source (slot 2).
    pub fn set_control_module(&mut self, control: SharedModule) {
        self.sources.put(2, control);
    }

    /// Returns the edge falloff.
    #[must_use]
    pub fn edge_falloff(&self) -> f64 {
        self.edge_falloff
    }

    /// Sets the edge falloff.
    ///
    /// The stored value is capped at half the selection range so the two
    /// transition bands cannot overlap.
    pub fn set_edge_falloff(&mut self, edge_falloff: f64) {
        let bound_size = self.upper_bound - self.lower_bound;
        self.edge_falloff = if edge_falloff > bound_size / 2.0 {
            bound_size / 2.0
        } else {
            edge_falloff
        };
    }

    /// Returns the lower selection bound.
    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Returns the upper selection bound.
    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// Sets the selection range and re-caps the edge falloff against it.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidParameter`] unless
    /// `lower_bound < upper_bound`.
    pub fn set_bounds(&mut self, lower_bound: f64, upper_bound: f64) -> Result<()> {
        if lower_bound >= upper_bound {
            return Err(NoiseError::InvalidParameter("select bounds are inverted"));
        }
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        self.set_edge_falloff(self.edge_falloff);
        Ok(())
    }
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for Select {
    fn source_count(&self) -> usize {
        3
    }

    fn set_source(&mut self, index: usize, source: SharedModule) -> Result<()> {
        self.sources.set(index, source)
    }

    fn source(&self, index: usize) -> Result<&SharedModule> {
        self.sources.get(index)
    }

    fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
        let control_value = self.sources.require(2).get_value(x, y, z);

        if self.edge_falloff > 0.0 {
            if control_value < self.lower_bound - self.edge_falloff {
                return self.sources.require(0).get_value(x, y, z);
            }
            if control_value < self.lower_bound + self.edge_falloff {
                let lower_curve = self.lower_bound - self.edge_falloff;
                let upper_curve = self.lower_bound + self.edge_falloff;
                let alpha = s_curve3((control_value - lower_curve) / (upper_curve - lower_curve));
                return linear_interp(
                    self.sources.require(0).get_value(x, y, z),
                    self.sources.require(1).get_value(x, y, z),
                    alpha,
                );
            }
            if control_value < self.upper_bound - self.edge_falloff {
                return self.sources.require(1).get_value(x, y, z);
            }
            if control_value < self.upper_bound + self.edge_falloff {
                let lower_curve = self.upper_bound - self.edge_falloff;
                let upper_curve = self.upper_bound + self.edge_falloff;
                let alpha = s_curve3((control_value - lower_curve) / (upper_curve - lower_curve));
                return linear_interp(
                    self.sources.require(1).get_value(x, y, z),
                    self.sources.require(0).get_value(x, y, z),
                    alpha,
                );
            }
            return self.sources.require(0).get_value(x, y, z);
        }

        if control_value < self.lower_bound || control_value > self.upper_bound {
            self.sources.require(0).get_value(x, y, z)
        } else {
            self.sources.require(1).get_value(x, y, z)
        }
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

    fn select_with_control(control: f64) -> Select {
        let mut select = Select::new();
        select.set_source(0, constant(10.0)).unwrap();
        select.set_source(1, constant(20.0)).unwrap();
        select.set_control_module(constant(control));
        select
    }

    #[test]
    fn blend_midpoint() {
        let mut blend = Blend::new();
        blend.set_source(0, constant(-1.0)).unwrap();
        blend.set_source(1, constant(1.0)).unwrap();
        blend.set_control_module(constant(0.0));
        // A control of zero maps to alpha 0.5, the exact midpoint.
        assert_eq!(blend.get_value(0.0, 0.0, 0.0).to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn blend_extremes_pick_a_single_source() {
        let mut blend = Blend::new();
        blend.set_source(0, constant(3.0)).unwrap();
        blend.set_source(1, constant(7.0)).unwrap();
        blend.set_control_module(constant(-1.0));
        assert_eq!(blend.get_value(0.0, 0.0, 0.0).to_bits(), 3.0_f64.to_bits());
        blend.set_control_module(constant(1.0));
        assert_eq!(blend.get_value(0.0, 0.0, 0.0).to_bits(), 7.0_f64.to_bits());
    }

    #[test]
    fn hard_select_switches_at_the_bounds() {
        let mut select = select_with_control(0.0);
        select.set_bounds(-0.5, 0.5).unwrap();
        assert_eq!(select.get_value(0.0, 0.0, 0.0).to_bits(), 20.0_f64.to_bits());

        let mut select = select_with_control(0.75);
        select.set_bounds(-0.5, 0.5).unwrap();
        assert_eq!(select.get_value(0.0, 0.0, 0.0).to_bits(), 10.0_f64.to_bits());

        // The bounds themselves belong to the inside region.
        let mut select = select_with_control(0.5);
        select.set_bounds(-0.5, 0.5).unwrap();
        assert_eq!(select.get_value(0.0, 0.0, 0.0).to_bits(), 20.0_f64.to_bits());
    }

    #[test]
    fn soft_select_is_continuous_at_band_edges() {
        let sample = |control: f64| {
            let mut select = select_with_control(control);
            select.set_bounds(-0.5, 0.5).unwrap();
            select.set_edge_falloff(0.25);
            select.get_value(0.0, 0.0, 0.0)
        };

        // The four band edges, approached from both sides.
        for edge in [-0.75, -0.25, 0.25, 0.75] {
            let before = sample(edge - 1e-9);
            let after = sample(edge + 1e-9);
            assert!(
                (before - after).abs() < 1e-6,
                "discontinuity at {edge}: {before} vs {after}"
            );
        }

        // Mid-band the output is the exact midpoint of the two sources.
        assert!((sample(-0.5) - 15.0).abs() < 1e-12);
        assert!((sample(0.5) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn edge_falloff_is_capped_to_half_the_range() {
        let mut select = select_with_control(0.0);
        select.set_bounds(-0.25, 0.25).unwrap();
        select.set_edge_falloff(10.0);
        assert_eq!(select.edge_falloff().to_bits(), 0.25_f64.to_bits());
    }

    #[test]
    fn set_bounds_rejects_inverted_or_equal_bounds() {
        let mut select = select_with_control(0.0);
        assert!(select.set_bounds(0.5, -0.5).is_err());
        assert!(select.set_bounds(0.5, 0.5).is_err());
        assert_eq!(select.lower_bound().to_bits(), (-1.0_f64).to_bits());
        assert_eq!(select.upper_bound().to_bits(), 1.0_f64.to_bits());
    }
}
