//! Convenience result type alias for hookline.

use crate::error::HookError;

/// A specialized `Result` type for hookline operations.
pub type HookResult<T> = Result<T, HookError>;
