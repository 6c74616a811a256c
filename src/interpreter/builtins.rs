//! Built-in functions.
//!
//! Two native functions are pre-defined in the globals when an interpreter
//! is constructed:
//!
//! | Name | Arity | Returns | Effect |
//! |---|---|---|---|
//! | `time` | 0 | number (epoch seconds) | — |
//! | `sleep` | 1 (seconds) | nil | blocks the interpreter |

use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use super::env::ScopeStack;
use super::error::{RuntimeError, RuntimeErrorKind};
use super::value::{FuncValue, Value};

/// Installs the built-in functions into the globals table.
///
/// Called once at interpreter construction, before any user code runs,
/// so the defines cannot collide.
pub(super) fn install(state: &mut ScopeStack) {
    let time = FuncValue::native("time", vec![], native_time);
    let installed = state.define("time", Value::Func(Rc::new(time)));
    debug_assert!(installed);

    let sleep = FuncValue::native("sleep", vec!["seconds".to_string()], native_sleep);
    let installed = state.define("sleep", Value::Func(Rc::new(sleep)));
    debug_assert!(installed);
}

/// `time()` - seconds since the Unix epoch as a number.
fn native_time(_args: &[Value]) -> Result<Value, RuntimeError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| {
            RuntimeError::without_span(
                RuntimeErrorKind::InvalidArgument,
                format!("System clock is before the Unix epoch: {}", e),
            )
        })?;
    Ok(Value::Number(now.as_secs_f64()))
}

/// `sleep(seconds)` - suspends the process for the given number of
/// seconds; returns nil.
fn native_sleep(args: &[Value]) -> Result<Value, RuntimeError> {
    let seconds = match &args[0] {
        Value::Number(n) => *n,
        other => {
            return Err(RuntimeError::without_span(
                RuntimeErrorKind::InvalidArgument,
                format!("sleep: expected a number of seconds, got {}", other.type_name()),
            ));
        }
    };

    // Duration::from_secs_f64 panics on negative or non-finite input
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(RuntimeError::without_span(
            RuntimeErrorKind::InvalidArgument,
            format!("sleep: seconds must be a non-negative finite number, got {}", seconds),
        ));
    }

    std::thread::sleep(std::time::Duration::from_secs_f64(seconds));
    Ok(Value::Nil)
}
