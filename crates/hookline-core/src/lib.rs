//! # hookline-core
//!
//! Core crate for hookline. Contains the configuration schema, the
//! registration input types shared by every registry front-end, the value
//! type threaded through filter chains, and the unified error system.
//!
//! This crate has **no** internal dependencies on other hookline crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::HookError;
pub use result::HookResult;
pub use types::numeric::NumericInput;
pub use types::value::HookValue;
