//! Member-access dispatch: routing decisions, event invocation, and the
//! runtime values exchanged with the host.

pub mod access;
pub mod event;
pub mod value;

// Re-export commonly used types
pub use access::*;
pub use event::*;
pub use value::*;
