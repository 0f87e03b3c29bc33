//! Runtime values exchanged between the host and the dispatch layer.

use std::sync::Arc;

/// A callable stored in an event field and invoked when the event fires.
pub type EventHandler = Arc<dyn Fn(&[Value]) + Send + Sync>;

/// Represents a runtime field value handed to dispatch by the host.
///
/// The dispatch layer never stores these; it only inspects the value of an
/// event-shaped field at invocation time and reports the offending type name
/// when the container is invalid.
#[derive(Clone)]
pub enum Value {
    /// Null value
    Null,
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    Text(String),
    /// An ordered collection of event handlers
    Handlers(Vec<EventHandler>),
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Integer(i) => f.debug_tuple("Integer").field(i).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Handlers(handlers) => {
                write!(f, "Handlers(<{} handlers>)", handlers.len())
            }
        }
    }
}

impl Value {
    /// Create an empty handler container.
    pub fn handlers() -> Self {
        Value::Handlers(Vec::new())
    }

    /// The host-facing type name, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "string",
            Value::Handlers(_) => "handlers",
        }
    }

    /// Get the text content if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the stored handlers if this is a handler container.
    pub fn as_handlers(&self) -> Option<&[EventHandler]> {
        match self {
            Value::Handlers(handlers) => Some(handlers),
            _ => None,
        }
    }

    /// Append a handler. Null upgrades to an empty container first; any
    /// other value is left alone and reported as false.
    pub fn push_handler(&mut self, handler: EventHandler) -> bool {
        match self {
            Value::Handlers(handlers) => {
                handlers.push(handler);
                true
            }
            Value::Null => {
                *self = Value::Handlers(vec![handler]);
                true
            }
            _ => false,
        }
    }
}
