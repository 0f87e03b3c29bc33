//! Virtual property capability tables: descriptors plus the resolver that
//! derives them from class metadata.

pub mod descriptor;
pub mod resolver;

// Re-export commonly used types
pub use descriptor::*;
pub use resolver::*;
