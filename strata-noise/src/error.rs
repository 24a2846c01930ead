//! Error taxonomy for module-graph configuration.

use thiserror::Error;

/// Errors reported by module configuration operations.
///
/// Evaluation ([`Module::get_value`]) is infallible by contract; only setters,
/// control-point insertion, and source-slot accessors report failures. Every
/// failing operation is fail-fast: the module's state is unchanged when an
/// argument is rejected.
///
/// [`Module::get_value`]: crate::module::Module::get_value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NoiseError {
    /// A parameter was outside its documented range, or a duplicate
    /// control-point input value was inserted.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// No source module is bound to the requested slot.
    #[error("no source module is bound to slot {0}")]
    MissingSource(usize),

    /// An allocation failed while growing a control-point table.
    #[error("out of memory while inserting a control point")]
    OutOfMemory,

    /// Reserved for failures with no more specific kind. Never produced by
    /// this crate.
    #[error("unknown error")]
    Unknown,
}

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, NoiseError>;
