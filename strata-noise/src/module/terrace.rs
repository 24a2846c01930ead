//! Terrace-forming remap of a source value.

use tracing::debug;

use crate::error::{NoiseError, Result};
use crate::math::linear_interp;

use super::{Module, SharedModule, SourceSlots};

/// Remaps its source onto a terrace-forming curve.
///
/// The control points partition the input range into tiers; within each tier
/// the output eases in quadratically from the lower point to the upper one,
/// which flattens the tops of rolling input into stepped plateaus. Inverting
/// the terraces eases against the upper point instead. At least two control
/// points must be present before evaluation.
#[derive(Clone, Default)]
pub struct Terrace {
    sources: SourceSlots<1>,
    control_points: Vec<f64>,
    invert_terraces: bool,
}

impl Terrace {
    /// Creates a terrace with an empty control-point table and no source
    /// bound.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: SourceSlots::new(),
            control_points: Vec::new(),
            invert_terraces: false,
        }
    }

    /// Adds a control point, keeping the table sorted.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidParameter`] if the value is already in
    /// the table, or [`NoiseError::OutOfMemory`] if the table cannot grow.
    pub fn add_control_point(&mut self, value: f64) -> Result<()> {
        let insertion_pos = self.find_insertion_pos(value)?;
        self.control_points
            .try_reserve(1)
            .map_err(|_| NoiseError::OutOfMemory)?;
        self.control_points.insert(insertion_pos, value);
        Ok(())
    }

    /// Removes every control point.
    pub fn clear_control_points(&mut self) {
        self.control_points.clear();
    }

    /// Returns the control points, sorted ascending.
    #[must_use]
    pub fn control_points(&self) -> &[f64] {
        &self.control_points
    }

    /// Returns whether the terraces are inverted.
    #[must_use]
    pub fn is_terraces_inverted(&self) -> bool {
        self.invert_terraces
    }

    /// Inverts the easing direction of the terraces.
    pub fn invert_terraces(&mut self, invert: bool) {
        self.invert_terraces = invert;
    }

    /// Replaces the table with `count` control points spread evenly across
    /// `[-1, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidParameter`] if `count` is less than two.
    pub fn make_control_points(&mut self, count: u32) -> Result<()> {
        if count < 2 {
            return Err(NoiseError::InvalidParameter(
                "a terrace needs at least two control points",
            ));
        }

        self.control_points.clear();

        let terrace_step = 2.0 / f64::from(count - 1);
        let mut cur_value = -1.0;
        for _ in 0..count {
            self.add_control_point(cur_value)?;
            cur_value += terrace_step;
        }
        debug!(count, "rebuilt terrace control points");
        Ok(())
    }

    fn find_insertion_pos(&self, value: f64) -> Result<usize> {
        for (i, &point) in self.control_points.iter().enumerate() {
            if value < point {
                return Ok(i);
            }
            if value == point {
                return Err(NoiseError::InvalidParameter(
                    "terrace control points must be distinct",
                ));
            }
        }
        Ok(self.control_points.len())
    }
}

impl Module for Terrace {
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
        assert!(
            self.control_points.len() >= 2,
            "a terrace needs at least two control points before evaluation"
        );

        let source_value = self.sources.require(0).get_value(x, y, z);

        // Index of the first control point above the source value.
        let index_pos = self
            .control_points
            .iter()
            .position(|&point| source_value < point)
            .unwrap_or(self.control_points.len());

        let last = self.control_points.len() - 1;
        let index0 = index_pos.saturating_sub(1);
        let index1 = index_pos.min(last);

        // Off the ends of the table both indices collapse onto the same
        // edge point.
        if index0 == index1 {
            return self.control_points[index1];
        }

        let mut value0 = self.control_points[index0];
        let mut value1 = self.control_points[index1];
        let mut alpha = (source_value - value0) / (value1 - value0);

        if self.invert_terraces {
            alpha = 1.0 - alpha;
            std::mem::swap(&mut value0, &mut value1);
        }

        // Squaring the alpha produces the flat tier tops.
        alpha *= alpha;

        linear_interp(value0, value1, alpha)
    }
}
