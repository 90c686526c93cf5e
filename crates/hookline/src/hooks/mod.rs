//! Hook system — callbacks, the registry, and its shared handle.

pub mod callback;
pub mod registry;
pub mod shared;

pub use callback::{Callback, CallbackId, HookFn};
pub use registry::HookRegistry;
pub use shared::SharedHookRegistry;
