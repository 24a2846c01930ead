//! Cubic-spline remapping of a source value through a control-point table.

use crate::error::{NoiseError, Result};
use crate::math::cubic_interp;

use super::{Module, SharedModule, SourceSlots};

/// A single mapping pair on a [`Curve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// The source value this point applies to.
    pub input_value: f64,
    /// The value the curve outputs at `input_value`.
    pub output_value: f64,
}

/// Remaps its source through an arbitrary curve.
///
/// The curve is defined by control points sorted by input value; between
/// points the output follows a cubic interpolation through the four nearest
/// points, and outside the table it continues from the edge points. At least
/// four control points must be present before evaluation.
#[derive(Clone, Default)]
pub struct Curve {
    sources: SourceSlots<1>,
    control_points: Vec<ControlPoint>,
}

impl Curve {
    /// Creates a curve with an empty control-point table and no source bound.
    #[must_use]
    pub fn new() -> Self {
        Self { sources: SourceSlots::new(), control_points: Vec::new() }
    }

    /// Adds a control point, keeping the table sorted by input value.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidParameter`] if a point with the same
    /// input value already exists, or [`NoiseError::OutOfMemory`] if the
    /// table cannot grow.
    pub fn add_control_point(&mut self, input_value: f64, output_value: f64) -> Result<()> {
        let insertion_pos = self.find_insertion_pos(input_value)?;
        self.control_points
            .try_reserve(1)
            .map_err(|_| NoiseError::OutOfMemory)?;
        self.control_points
            .insert(insertion_pos, ControlPoint { input_value, output_value });
        Ok(())
    }

    /// Removes every control point.
    pub fn clear_control_points(&mut self) {
        self.control_points.clear();
    }

    /// Returns the control points, sorted by input value.
    #[must_use]
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    fn find_insertion_pos(&self, input_value: f64) -> Result<usize> {
        for (i, point) in self.control_points.iter().enumerate() {
            if input_value < point.input_value {
                return Ok(i);
            }
            if input_value == point.input_value {
                return Err(NoiseError::InvalidParameter(
                    "curve control points must have distinct input values",
                ));
            }
        }
        Ok(self.control_points.len())
    }
}

impl Module for Curve {
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
            self.control_points.len() >= 4,
            "a curve needs at least four control points before evaluation"
        );

        let source_value = self.sources.require(0).get_value(x, y, z);

        // Index of the first control point whose input exceeds the source
        // value; the four interpolation points straddle it.
        let index_pos = self
            .control_points
            .iter()
            .position(|point| source_value < point.input_value)
            .unwrap_or(self.control_points.len());

        let last = self.control_points.len() as isize - 1;
        let clamp_index = |i: isize| -> usize {
            usize::try_from(i.clamp(0, last)).unwrap_or(0)
        };
        let index0 = clamp_index(index_pos as isize - 2);
        let index1 = clamp_index(index_pos as isize - 1);
        let index2 = clamp_index(index_pos as isize);
        let index3 = clamp_index(index_pos as isize + 1);

        // Off the ends of the table, both middle indices collapse onto the
        // same edge point.
        if index1 == index2 {
            return self.control_points[index1].output_value;
        }

        let input0 = self.control_points[index1].input_value;
        let input1 = self.control_points[index2].input_value;
        let alpha = (source_value - input0) / (input1 - input0);

        cubic_interp(
            self.control_points[index0].output_value,
            self.control_points[index1].output_value,
            self.control_points[index2].output_value,
            self.control_points[index3].output_value,
            alpha,
        )
    }
}
