//! Event-shaped members and handler invocation.
//!
//! An event property is a declared public instance field whose name starts
//! with `on` followed by an uppercase letter (`onSave`, `onError`). Calling
//! the name like a method invokes every handler stored in the field.

use lazy_static::lazy_static;
use regex::Regex;

use crate::dispatch::value::Value;
use crate::error::{MagusError, Result};

lazy_static! {
    static ref EVENT_NAME_RE: Regex =
        Regex::new(r"^on[A-Z]\w*").expect("event name pattern is valid");
}

/// Check whether a member name is event-shaped.
pub fn is_event_name(name: &str) -> bool {
    EVENT_NAME_RE.is_match(name)
}

/// Invoke every handler stored in an event field, in order, passing `args`
/// to each. Returns the number of handlers invoked. A null field is an
/// event with no listeners; anything that is neither null nor a handler
/// container is a host programming error.
pub fn invoke_handlers(class: &str, name: &str, value: &Value, args: &[Value]) -> Result<usize> {
    match value {
        Value::Handlers(handlers) => {
            for handler in handlers {
                handler(args);
            }
            Ok(handlers.len())
        }
        Value::Null => Ok(0),
        other => Err(MagusError::invalid_event_handlers(
            class,
            name,
            other.type_name(),
        )),
    }
}
