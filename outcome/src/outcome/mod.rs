//! The two outcome shapes and their factories.
//!
//! [`Outcome`] records only success or failure plus error messages.
//! [`ValueOutcome`] wraps an [`Outcome`] and adds an optional value that is
//! only ever populated by a success factory.

mod display;
mod plain;
mod valued;

pub use plain::Outcome;
pub use valued::ValueOutcome;
