//! hookline demo — wires configuration, logging, and a hook registry
//! together and runs a small publishing pipeline through it.

use std::path::PathBuf;

use serde_json::json;
use tracing_subscriber::{EnvFilter, fmt};

use hookline::prelude::*;
use hookline::{HookError, HooklineConfig};

fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!("Starting hookline demo v{}", env!("CARGO_PKG_VERSION"));
    run(config);
}

/// Load configuration from file and environment
fn load_configuration() -> Result<HooklineConfig, HookError> {
    let config_path = std::env::var("HOOKLINE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config/default.toml"));

    HooklineConfig::load(Some(config_path.as_path()))
}

/// Initialize tracing/logging
fn init_logging(config: &HooklineConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Registers the demo's title filters and publishing actions.
fn register_demo_hooks(registry: &mut HookRegistry) {
    registry.register(
        "the_title",
        Callback::unary("trim", |title| json!(title.as_str().unwrap_or_default().trim())),
        1,
        1,
    );
    registry.register(
        "the_title",
        Callback::binary("prefix_site", |title, site| {
            json!(format!(
                "{} | {}",
                title.as_str().unwrap_or_default(),
                site.as_str().unwrap_or("hookline")
            ))
        }),
        10,
        2,
    );
    // Rejected: the same callback id is already registered on this hook.
    registry.register(
        "the_title",
        Callback::binary("prefix_site", |title, _| title),
        "ignored",
        2,
    );

    registry.register_action(
        "post_published",
        Callback::unary("audit", |post| {
            tracing::info!("Audit trail updated");
            post
        }),
        10,
        1,
    );
    registry.register_action(
        "post_published",
        Callback::unary("notify", |post| {
            tracing::info!(post = %post, "Notifying subscribers");
            post
        }),
        20,
        1,
    );
}

/// Registers a few filters and actions, then fires them.
fn run(config: HooklineConfig) {
    let mut registry = HookRegistry::with_config(config.registry);
    tracing::debug!(
        default_priority = registry.config().default_priority,
        "Registry created"
    );

    register_demo_hooks(&mut registry);

    let title = registry.apply_filters(
        "the_title",
        json!("  Hooks in practice  "),
        &hook_args!["Example Blog"],
    );
    tracing::info!(title = %title, "Filtered title");

    registry.do_action("post_published", &[title]);
    registry.do_action("shutdown", &[]);

    registry.unregister_action("post_published", "notify");
    tracing::info!(
        hooks = ?registry.registered_hooks(),
        remaining = registry.hook_count("post_published"),
        "Demo finished"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_filter_receives_site_name() {
        let mut registry = HookRegistry::new();
        register_demo_hooks(&mut registry);

        let title = registry.apply_filters(
            "the_title",
            json!("  Hooks in practice  "),
            &hook_args!["Example Blog"],
        );
        assert_eq!(title, json!("Hooks in practice | Example Blog"));
        assert_eq!(registry.hook_count("the_title"), 2);
    }

    #[test]
    fn test_publish_action_keeps_post_for_every_callback() {
        let mut registry = HookRegistry::new();
        register_demo_hooks(&mut registry);

        let post = json!("Hooks in practice | Example Blog");
        assert_eq!(registry.do_action("post_published", &[post.clone()]), post);
    }
}
