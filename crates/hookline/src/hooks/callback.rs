//! Callbacks — an identity plus a normalized closure over hook values.
//!
//! Typed closures of a fixed arity are adapted at construction time into a
//! single `Fn(&[HookValue]) -> HookValue` shape, so the registry never has to
//! inspect a callback to decide how to call it. A typed closure that is
//! handed fewer arguments than it declares sees `HookValue::Null` in the
//! missing positions.

use std::fmt;
use std::rc::Rc;

use hookline_core::HookValue;

/// Normalized callback signature: all forwarded arguments in, new data out.
pub type HookFn = dyn Fn(&[HookValue]) -> HookValue;

/// Identity of a callback. Two callbacks are the same iff their ids match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallbackId(String);

impl CallbackId {
    /// Creates a callback id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CallbackId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CallbackId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&CallbackId> for CallbackId {
    fn from(id: &CallbackId) -> Self {
        id.clone()
    }
}

impl From<&Callback> for CallbackId {
    fn from(callback: &Callback) -> Self {
        callback.id.clone()
    }
}

/// A registered unit of behavior.
#[derive(Clone)]
pub struct Callback {
    id: CallbackId,
    func: Rc<HookFn>,
}

impl Callback {
    /// Creates a callback receiving every forwarded argument as a slice.
    pub fn new<F>(id: impl Into<CallbackId>, func: F) -> Self
    where
        F: Fn(&[HookValue]) -> HookValue + 'static,
    {
        Self {
            id: id.into(),
            func: Rc::new(func),
        }
    }

    /// Creates a callback that takes no arguments.
    pub fn nullary<F>(id: impl Into<CallbackId>, func: F) -> Self
    where
        F: Fn() -> HookValue + 'static,
    {
        Self::new(id, move |_args: &[HookValue]| func())
    }

    /// Creates a callback that takes the data value only.
    pub fn unary<F>(id: impl Into<CallbackId>, func: F) -> Self
    where
        F: Fn(HookValue) -> HookValue + 'static,
    {
        Self::new(id, move |args: &[HookValue]| func(arg_at(args, 0)))
    }

    /// Creates a callback that takes the data value and one extra argument.
    pub fn binary<F>(id: impl Into<CallbackId>, func: F) -> Self
    where
        F: Fn(HookValue, HookValue) -> HookValue + 'static,
    {
        Self::new(id, move |args: &[HookValue]| {
            func(arg_at(args, 0), arg_at(args, 1))
        })
    }

    /// Returns the callback identity.
    pub fn id(&self) -> &CallbackId {
        &self.id
    }

    /// Invokes the callback with the already-capped argument list.
    pub(crate) fn invoke(&self, args: &[HookValue]) -> HookValue {
        (self.func)(args)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").field("id", &self.id).finish_non_exhaustive()
    }
}

fn arg_at(args: &[HookValue], index: usize) -> HookValue {
    args.get(index).cloned().unwrap_or(HookValue::Null)
}
