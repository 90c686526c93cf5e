//! # hookline
//!
//! In-process hook and filter registry. Provides:
//!
//! - Named hooks holding callbacks ordered by priority (lower runs first)
//! - Filters: chained transforms where each callback sees the previous output
//! - Actions: the same dispatch with zero forwarded arguments by default
//! - Lenient registration settings, sanitized to defaults instead of rejected
//! - A shared handle for callbacks that mutate the registry mid-dispatch

pub mod hooks;
pub mod macros;
pub mod prelude;

pub use hookline_core::config::HooklineConfig;
pub use hookline_core::config::registry::RegistryConfig;
pub use hookline_core::{HookError, HookResult, HookValue, NumericInput};
pub use hooks::callback::{Callback, CallbackId};
pub use hooks::registry::HookRegistry;
pub use hooks::shared::SharedHookRegistry;
