//! Combiner modules: pointwise arithmetic over two source values.

use crate::error::Result;

use super::{Module, SharedModule, SourceSlots};

macro_rules! binary_combiner {
    ($(#[$doc:meta])* $name:ident, |$v0:ident, $v1:ident| $combine:expr) => {
        $(#[$doc])*
        #[derive(Clone, Default)]
        pub struct $name {
            sources: SourceSlots<2>,
        }

        impl $name {
            /// Creates the combiner with no sources bound.
            #[must_use]
            pub fn new() -> Self {
                Self { sources: SourceSlots::new() }
            }
        }

        impl Module for $name {
            fn source_count(&self) -> usize {
                2
            }

            fn set_source(&mut self, index: usize, source: SharedModule) -> Result<()> {
                self.sources.set(index, source)
            }

            fn source(&self, index: usize) -> Result<&SharedModule> {
                self.sources.get(index)
            }

            fn get_value(&self, x: f64, y: f64, z: f64) -> f64 {
                let $v0 = self.sources.require(0).get_value(x, y, z);
                let $v1 = self.sources.require(1).get_value(x, y, z);
                $combine
            }
        }
    };
}

binary_combiner!(
    /// Outputs the sum of its two sources.
    Add,
    |v0, v1| v0 + v1
);

binary_combiner!(
    /// Outputs the product of its two sources.
    Multiply,
    |v0, v1| v0 * v1
);

binary_combiner!(
    /// Outputs the larger of its two sources.
    Max,
    |v0, v1| if v0 > v1 { v0 } else { v1 }
);

binary_combiner!(
    /// Outputs the smaller of its two sources.
    Min,
    |v0, v1| if v0 < v1 { v0 } else { v1 }
);

binary_combiner!(
    /// Raises the value of source 1 to the power of the value of source 0.
    ///
    /// Slot 0 carries the exponent and slot 1 the base.
    Power,
    |v0, v1| v1.powf(v0)
);
