//! Prelude for convenient imports.

pub use hookline_core::{HookValue, NumericInput};

pub use crate::hooks::callback::{Callback, CallbackId};
pub use crate::hooks::registry::HookRegistry;
pub use crate::hooks::shared::SharedHookRegistry;

pub use crate::hook_args;
