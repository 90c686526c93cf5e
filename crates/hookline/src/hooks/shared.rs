//! Shared registry handle for callbacks that mutate the registry.
//!
//! A [`HookRegistry`] behind `&mut` cannot be reached from inside one of its
//! own callbacks. [`SharedHookRegistry`] wraps it in `Rc<RefCell<_>>` and
//! releases the borrow before any callback runs, so a callback holding a
//! clone of the handle can register or unregister freely. Changes made
//! during a pass apply from the next pass on; the running pass works from a
//! snapshot.

use std::cell::RefCell;
use std::rc::Rc;

use hookline_core::config::registry::RegistryConfig;
use hookline_core::{HookResult, HookValue, NumericInput};

use super::callback::{Callback, CallbackId};
use super::registry::{HookRegistry, run_chain, split_action_args};

/// Cloneable, single-threaded handle to a [`HookRegistry`].
#[derive(Debug, Clone, Default)]
pub struct SharedHookRegistry {
    inner: Rc<RefCell<HookRegistry>>,
}

impl SharedHookRegistry {
    /// Creates a handle to a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handle to a new empty registry with the given defaults.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self::from(HookRegistry::with_config(config))
    }

    /// See [`HookRegistry::try_register`].
    pub fn try_register(
        &self,
        name: &str,
        callback: Callback,
        priority: impl Into<NumericInput>,
        accepted_args: impl Into<NumericInput>,
    ) -> HookResult<()> {
        self.inner
            .borrow_mut()
            .try_register(name, callback, priority, accepted_args)
    }

    /// See [`HookRegistry::register`].
    pub fn register(
        &self,
        name: &str,
        callback: Callback,
        priority: impl Into<NumericInput>,
        accepted_args: impl Into<NumericInput>,
    ) -> bool {
        self.inner
            .borrow_mut()
            .register(name, callback, priority, accepted_args)
    }

    /// See [`HookRegistry::register_action`].
    pub fn register_action(
        &self,
        name: &str,
        callback: Callback,
        priority: impl Into<NumericInput>,
        accepted_args: impl Into<NumericInput>,
    ) -> bool {
        self.inner
            .borrow_mut()
            .register_action(name, callback, priority, accepted_args)
    }

    /// See [`HookRegistry::add_filter`].
    pub fn add_filter(&self, name: &str, callback: Callback) -> bool {
        self.inner.borrow_mut().add_filter(name, callback)
    }

    /// See [`HookRegistry::add_action`].
    pub fn add_action(&self, name: &str, callback: Callback) -> bool {
        self.inner.borrow_mut().add_action(name, callback)
    }

    /// See [`HookRegistry::apply_filters`]. No borrow is held while
    /// callbacks run.
    pub fn apply_filters(&self, name: &str, data: HookValue, extra_args: &[HookValue]) -> HookValue {
        let snapshot = self.inner.borrow_mut().sorted_snapshot(name);
        match snapshot {
            Some(entries) => run_chain(name, &entries, data, extra_args),
            None => data,
        }
    }

    /// See [`HookRegistry::do_action`]. No borrow is held while callbacks run.
    pub fn do_action(&self, name: &str, args: &[HookValue]) -> HookValue {
        let (data, extra_args) = split_action_args(args);
        self.apply_filters(name, data, extra_args)
    }

    /// See [`HookRegistry::try_unregister`].
    pub fn try_unregister(&self, name: &str, callback: impl Into<CallbackId>) -> HookResult<usize> {
        self.inner.borrow_mut().try_unregister(name, callback)
    }

    /// See [`HookRegistry::unregister`].
    pub fn unregister(&self, name: &str, callback: impl Into<CallbackId>) -> bool {
        self.inner.borrow_mut().unregister(name, callback)
    }

    /// See [`HookRegistry::unregister_action`].
    pub fn unregister_action(&self, name: &str, callback: impl Into<CallbackId>) -> bool {
        self.inner.borrow_mut().unregister_action(name, callback)
    }

    /// See [`HookRegistry::has_hooks`].
    pub fn has_hooks(&self, name: &str) -> bool {
        self.inner.borrow().has_hooks(name)
    }

    /// See [`HookRegistry::has_callback`].
    pub fn has_callback(&self, name: &str, callback: impl Into<CallbackId>) -> bool {
        self.inner.borrow().has_callback(name, callback)
    }

    /// See [`HookRegistry::hook_count`].
    pub fn hook_count(&self, name: &str) -> usize {
        self.inner.borrow().hook_count(name)
    }

    /// See [`HookRegistry::registered_hooks`].
    pub fn registered_hooks(&self) -> Vec<String> {
        self.inner.borrow().registered_hooks()
    }

    /// See [`HookRegistry::remove_all`].
    pub fn remove_all(&self, name: &str) -> usize {
        self.inner.borrow_mut().remove_all(name)
    }

    /// See [`HookRegistry::clear`].
    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }
}

impl From<HookRegistry> for SharedHookRegistry {
    fn from(registry: HookRegistry) -> Self {
        Self {
            inner: Rc::new(RefCell::new(registry)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_callback_can_unregister_itself() {
        let shared = SharedHookRegistry::new();
        let handle = shared.clone();
        shared.add_filter(
            "once",
            Callback::unary("once", move |v| {
                handle.unregister("once", "once");
                json!(format!("{}+", v.as_str().unwrap_or_default()))
            }),
        );

        assert_eq!(shared.apply_filters("once", json!("a"), &[]), json!("a+"));
        assert!(!shared.has_hooks("once"));
        assert_eq!(shared.apply_filters("once", json!("a"), &[]), json!("a"));
    }

    #[test]
    fn test_registration_during_pass_applies_next_pass() {
        let shared = SharedHookRegistry::new();
        let handle = shared.clone();
        shared.register(
            "grow",
            Callback::unary("first", move |v| {
                let second = Callback::unary("second", |v| json!(v.as_i64().unwrap_or_default() * 10));
                handle.register("grow", second, 20, 1);
                json!(v.as_i64().unwrap_or_default() + 1)
            }),
            1,
            1,
        );

        assert_eq!(shared.apply_filters("grow", json!(1), &[]), json!(2));
        assert_eq!(shared.hook_count("grow"), 2);
        assert_eq!(shared.apply_filters("grow", json!(1), &[]), json!(20));

        shared.clear();
    }

    #[test]
    fn test_callback_can_inspect_and_remove_hooks() {
        let shared = SharedHookRegistry::new();
        let handle = shared.clone();
        shared.add_action("cleanup", Callback::nullary("noop", || HookValue::Null));
        shared.add_filter(
            "inspect",
            Callback::unary("inspect", move |_| {
                let seen = json!(handle.registered_hooks());
                let has_noop = handle.has_callback("cleanup", "noop");
                let removed = handle.remove_all("cleanup");
                json!({ "hooks": seen, "has_noop": has_noop, "removed": removed })
            }),
        );

        let report = shared.apply_filters("inspect", HookValue::Null, &[]);
        assert_eq!(
            report,
            json!({ "hooks": ["cleanup", "inspect"], "has_noop": true, "removed": 1 })
        );
        assert!(!shared.has_hooks("cleanup"));
        assert_eq!(shared.registered_hooks(), vec!["inspect".to_string()]);

        shared.clear();
    }

    #[test]
    fn test_do_action_defaults_data() {
        let shared = SharedHookRegistry::new();
        shared.add_action("ping", Callback::nullary("pong", || json!("pong")));
        assert_eq!(shared.do_action("ping", &[]), json!("pong"));
        assert_eq!(shared.do_action("silent", &[]), json!(""));
    }
}
