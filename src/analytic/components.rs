//! Line, source and load components.

mod continuous_source;
mod terminator;
mod uniform_line;

pub use continuous_source::ContinuousSource;
pub use terminator::MismatchedTerminator;
pub use uniform_line::{UniformLine, UniformLineDescriptor};
