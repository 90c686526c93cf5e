//! Shared types for registration inputs and hook values.

pub mod numeric;
pub mod value;
