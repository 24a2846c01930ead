//! Composable coherent-noise module graphs.
//!
//! A graph of small operator modules — generators, modifiers, combiners,
//! selectors, and coordinate transformers — evaluated as a single scalar
//! function of a 3D point. Graphs drive terrain heightmaps, planetary
//! textures, and volumetric materials.
//!
//! Determinism is absolute: for a fixed graph, seed, and coordinate the
//! output is bit-reproducible across runs and platforms, because every
//! internal hash wraps at 32 bits and the interpolation kernels keep a fixed
//! evaluation order.
//!
//! # Building a graph
//!
//! Modules are configured through setters, wired together through their
//! source slots, and shared between parents with [`Arc`](std::sync::Arc):
//!
//! ```
//! use std::sync::Arc;
//! use strata_noise::module::{Module, Perlin, ScaleBias};
//!
//! let mut mountains = Perlin::new();
//! mountains.set_octave_count(4)?;
//!
//! let mut shaped = ScaleBias::new();
//! shaped.set_scale(0.5);
//! shaped.set_bias(0.25);
//! shaped.set_source(0, Arc::new(mountains))?;
//!
//! let height = shaped.get_value(1.5, 0.0, -2.25);
//! assert!(height.is_finite());
//! # Ok::<(), strata_noise::NoiseError>(())
//! ```
//!
//! # Threading
//!
//! [`Module::get_value`](module::Module::get_value) takes `&self` and reads
//! no mutable state, so any number of threads may evaluate a shared graph
//! concurrently. Configuration requires `&mut` access and therefore cannot
//! race with evaluation.

pub mod error;
pub mod math;
pub mod model;
pub mod module;
pub mod noisegen;

pub use error::{NoiseError, Result};
pub use noisegen::NoiseQuality;
