//! Convenience macros for firing hooks.

/// Builds a `Vec<HookValue>` argument list from anything `HookValue`
/// converts from.
///
/// # Example
/// ```rust
/// use hookline::prelude::*;
///
/// let mut registry = HookRegistry::new();
/// registry.add_action("saved", Callback::new("log", |args| HookValue::from(args.len())));
///
/// let forwarded = registry.do_action("saved", &hook_args!["post", 42, true]);
/// assert_eq!(forwarded, HookValue::from(0));
/// ```
#[macro_export]
macro_rules! hook_args {
    () => {
        ::std::vec::Vec::<$crate::HookValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::HookValue::from($value)),+]
    };
}

#[cfg(test)]
mod tests {
    use crate::HookValue;
    use serde_json::json;

    #[test]
    fn test_hook_args_converts_values() {
        let args = hook_args!["a", 1, false];
        assert_eq!(args, vec![json!("a"), json!(1), json!(false)]);
    }

    #[test]
    fn test_hook_args_empty() {
        let args: Vec<HookValue> = hook_args![];
        assert!(args.is_empty());
    }
}
