//! Hook registry — callbacks registered by hook name with priority ordering.

use std::collections::HashMap;

use tracing::{debug, info, trace, warn};

use hookline_core::config::registry::RegistryConfig;
use hookline_core::types::value::empty_action_data;
use hookline_core::{HookError, HookResult, HookValue, NumericInput};

use super::callback::{Callback, CallbackId};

/// Entry in the hook registry.
#[derive(Debug, Clone)]
pub(crate) struct HookEntry {
    /// The callback.
    pub(crate) callback: Callback,
    /// Priority (lower = earlier execution).
    pub(crate) priority: u32,
    /// How many leading arguments are forwarded to the callback.
    pub(crate) accepted_args: u32,
}

/// Registry of hook callbacks organized by hook name.
///
/// Filters and actions share the same storage; the only difference between
/// them is the default accepted-args count used by [`add_filter`] and
/// [`add_action`].
///
/// [`add_filter`]: HookRegistry::add_filter
/// [`add_action`]: HookRegistry::add_action
#[derive(Debug, Default)]
pub struct HookRegistry {
    /// Registration defaults.
    config: RegistryConfig,
    /// Hook name → entries, kept in priority order after each dispatch.
    hooks: HashMap<String, Vec<HookEntry>>,
}

impl HookRegistry {
    /// Creates a new empty hook registry with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty hook registry with the given defaults.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            hooks: HashMap::new(),
        }
    }

    /// Returns the registration defaults.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Registers a callback under `name`, explaining any refusal.
    ///
    /// An invalid `priority` becomes the configured default priority and an
    /// invalid `accepted_args` becomes the configured invalid-input count.
    pub fn try_register(
        &mut self,
        name: &str,
        callback: Callback,
        priority: impl Into<NumericInput>,
        accepted_args: impl Into<NumericInput>,
    ) -> HookResult<()> {
        if name.is_empty() {
            return Err(HookError::validation("hook name must not be empty"));
        }

        let entries = self.hooks.get(name);
        if entries.is_some_and(|entries| entries.iter().any(|e| e.callback == callback)) {
            return Err(HookError::conflict(format!(
                "callback '{}' is already registered for hook '{}'",
                callback.id(),
                name
            )));
        }

        let priority_input = priority.into();
        let accepted_input = accepted_args.into();
        let priority = priority_input.resolve(self.config.default_priority);
        let accepted_args = accepted_input.resolve(self.config.invalid_accepted_args);

        if !priority_input.is_valid() || !accepted_input.is_valid() {
            debug!(
                hook = %name,
                callback = %callback.id(),
                priority,
                accepted_args,
                "Invalid registration settings replaced with defaults"
            );
        }

        info!(
            hook = %name,
            callback = %callback.id(),
            priority,
            accepted_args,
            "Hook callback registered"
        );

        self.hooks.entry(name.to_string()).or_default().push(HookEntry {
            callback,
            priority,
            accepted_args,
        });

        Ok(())
    }

    /// Registers a filter callback under `name`.
    ///
    /// Returns `false` without touching the registry when the same callback
    /// is already registered for `name`, or when `name` is empty.
    pub fn register(
        &mut self,
        name: &str,
        callback: Callback,
        priority: impl Into<NumericInput>,
        accepted_args: impl Into<NumericInput>,
    ) -> bool {
        match self.try_register(name, callback, priority, accepted_args) {
            Ok(()) => true,
            Err(e) => {
                warn!(hook = %name, error = %e, "Hook registration ignored");
                false
            }
        }
    }

    /// Registers an action callback under `name`. Same contract as
    /// [`register`](Self::register).
    pub fn register_action(
        &mut self,
        name: &str,
        callback: Callback,
        priority: impl Into<NumericInput>,
        accepted_args: impl Into<NumericInput>,
    ) -> bool {
        self.register(name, callback, priority, accepted_args)
    }

    /// Registers a filter with the default priority and accepted-args count.
    pub fn add_filter(&mut self, name: &str, callback: Callback) -> bool {
        let priority = self.config.default_priority;
        let accepted_args = self.config.filter_accepted_args;
        self.register(name, callback, priority, accepted_args)
    }

    /// Registers an action with the default priority and accepted-args count.
    pub fn add_action(&mut self, name: &str, callback: Callback) -> bool {
        let priority = self.config.default_priority;
        let accepted_args = self.config.action_accepted_args;
        self.register_action(name, callback, priority, accepted_args)
    }

    /// Runs every callback registered under `name` as a chained transform.
    ///
    /// Each callback receives `data` (the previous callback's output) followed
    /// by `extra_args`, capped at its accepted-args count. Returns `data`
    /// untouched when nothing is registered.
    pub fn apply_filters(&mut self, name: &str, data: HookValue, extra_args: &[HookValue]) -> HookValue {
        match self.sorted_snapshot(name) {
            Some(entries) => run_chain(name, &entries, data, extra_args),
            None => data,
        }
    }

    /// Fires the action `name`.
    ///
    /// The first argument is threaded through the chain as data; without any
    /// arguments an empty string is used.
    pub fn do_action(&mut self, name: &str, args: &[HookValue]) -> HookValue {
        let (data, extra_args) = split_action_args(args);
        self.apply_filters(name, data, extra_args)
    }

    /// Removes every registration of `callback` under `name`, returning how
    /// many entries were removed.
    pub fn try_unregister(&mut self, name: &str, callback: impl Into<CallbackId>) -> HookResult<usize> {
        let id = callback.into();

        let Some(entries) = self.hooks.get_mut(name) else {
            return Err(HookError::not_found(format!("no callbacks registered for hook '{name}'")));
        };

        let before = entries.len();
        entries.retain(|e| *e.callback.id() != id);
        let removed = before - entries.len();

        if entries.is_empty() {
            self.hooks.remove(name);
        }

        if removed == 0 {
            return Err(HookError::not_found(format!(
                "callback '{id}' is not registered for hook '{name}'"
            )));
        }

        info!(hook = %name, callback = %id, removed, "Hook callback unregistered");
        Ok(removed)
    }

    /// Removes `callback` from `name`. Returns whether anything was removed.
    pub fn unregister(&mut self, name: &str, callback: impl Into<CallbackId>) -> bool {
        self.try_unregister(name, callback).is_ok()
    }

    /// Removes the action `callback` from `name`. Same contract as
    /// [`unregister`](Self::unregister).
    pub fn unregister_action(&mut self, name: &str, callback: impl Into<CallbackId>) -> bool {
        self.unregister(name, callback)
    }

    /// Removes every callback registered under `name`, returning how many
    /// there were.
    pub fn remove_all(&mut self, name: &str) -> usize {
        let removed = self.hooks.remove(name).map(|entries| entries.len()).unwrap_or(0);
        if removed > 0 {
            info!(hook = %name, removed, "All callbacks removed from hook");
        }
        removed
    }

    /// Removes every callback under every name.
    pub fn clear(&mut self) {
        self.hooks.clear();
    }

    /// Returns whether any callbacks are registered under `name`.
    pub fn has_hooks(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    /// Returns whether `callback` is registered under `name`.
    pub fn has_callback(&self, name: &str, callback: impl Into<CallbackId>) -> bool {
        let id = callback.into();
        self.hooks
            .get(name)
            .map(|entries| entries.iter().any(|e| *e.callback.id() == id))
            .unwrap_or(false)
    }

    /// Returns the number of callbacks registered under `name`.
    pub fn hook_count(&self, name: &str) -> usize {
        self.hooks.get(name).map(|entries| entries.len()).unwrap_or(0)
    }

    /// Returns all hook names that have callbacks, sorted.
    pub fn registered_hooks(&self) -> Vec<String> {
        let mut names: Vec<String> = self.hooks.keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of hook names that have callbacks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns whether no callbacks are registered at all.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Sorts the entries of `name` by priority and returns a copy of them.
    ///
    /// The sort is stable, so equal priorities keep registration order.
    pub(crate) fn sorted_snapshot(&mut self, name: &str) -> Option<Vec<HookEntry>> {
        let entries = self.hooks.get_mut(name)?;
        entries.sort_by_key(|e| e.priority);
        Some(entries.clone())
    }
}

/// Runs `entries` in order, threading data through position zero.
pub(crate) fn run_chain(
    name: &str,
    entries: &[HookEntry],
    data: HookValue,
    extra_args: &[HookValue],
) -> HookValue {
    debug!(hook = %name, handler_count = entries.len(), "Applying filters");

    let mut args = Vec::with_capacity(extra_args.len() + 1);
    args.push(data);
    args.extend_from_slice(extra_args);

    for entry in entries {
        let forwarded = match entry.accepted_args as usize {
            0 => &args[..0],
            n if n >= args.len() => &args[..],
            n => &args[..n],
        };

        trace!(
            hook = %name,
            callback = entry.callback.id().as_str(),
            priority = entry.priority,
            forwarded = forwarded.len(),
            "Invoking callback"
        );

        args[0] = entry.callback.invoke(forwarded);
    }

    args.swap_remove(0)
}

/// Splits action arguments into data and extras, supplying the empty-string
/// placeholder when there are none.
pub(crate) fn split_action_args(args: &[HookValue]) -> (HookValue, &[HookValue]) {
    match args.split_first() {
        Some((data, extra_args)) => (data.clone(), extra_args),
        None => (empty_action_data(), &[]),
    }
}
