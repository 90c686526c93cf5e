//! The value type threaded through filter chains.

/// A value passed to and returned from hook callbacks.
///
/// Every callback registered under one hook name must agree on the shape of
/// the value it receives and returns. Nothing enforces this; it is a caller
/// convention.
pub type HookValue = serde_json::Value;

/// Placeholder data supplied when an action is fired without arguments.
pub fn empty_action_data() -> HookValue {
    HookValue::String(String::new())
}
