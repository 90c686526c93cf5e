//! Registration defaults for the hook registry.

use serde::{Deserialize, Serialize};

/// Priority used when none is given, or when the given one is invalid.
pub const DEFAULT_PRIORITY: u32 = 10;

/// Accepted-args count used by filters when none is given.
pub const DEFAULT_FILTER_ACCEPTED_ARGS: u32 = 1;

/// Accepted-args count used by actions when none is given.
pub const DEFAULT_ACTION_ACCEPTED_ARGS: u32 = 0;

/// Accepted-args count substituted for an invalid input, for filters and
/// actions alike.
pub const DEFAULT_INVALID_ACCEPTED_ARGS: u32 = 1;

/// Hook registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Priority for registrations without a valid priority (lower runs first).
    #[serde(default = "default_priority")]
    pub default_priority: u32,
    /// Accepted-args count for `add_filter`.
    #[serde(default = "default_filter_accepted_args")]
    pub filter_accepted_args: u32,
    /// Accepted-args count for `add_action`.
    #[serde(default = "default_action_accepted_args")]
    pub action_accepted_args: u32,
    /// Accepted-args count substituted for invalid input.
    #[serde(default = "default_invalid_accepted_args")]
    pub invalid_accepted_args: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_priority: default_priority(),
            filter_accepted_args: default_filter_accepted_args(),
            action_accepted_args: default_action_accepted_args(),
            invalid_accepted_args: default_invalid_accepted_args(),
        }
    }
}

fn default_priority() -> u32 {
    DEFAULT_PRIORITY
}

fn default_filter_accepted_args() -> u32 {
    DEFAULT_FILTER_ACCEPTED_ARGS
}

fn default_action_accepted_args() -> u32 {
    DEFAULT_ACTION_ACCEPTED_ARGS
}

fn default_invalid_accepted_args() -> u32 {
    DEFAULT_INVALID_ACCEPTED_ARGS
}
