//! Class metadata: explicit descriptions of classes, their members, and
//! their docblock annotations.

pub mod annotation;
pub mod class;

// Re-export commonly used types
pub use annotation::*;
pub use class::*;
