//! Bounded Cache - demo binary
//!
//! Walks through the cache contract on a small scripted example:
//! put a key, read it back, remove it, and watch the size move 1 -> 0.

use std::str::FromStr;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bounded_cache::{new_cache, Cache, Config, EvictionPolicy};

/// Entry point for the bounded cache demo.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Construct a cache through the policy factory
/// 4. Run the scripted put/get/size/remove walkthrough
fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bounded_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, policy={}",
        config.capacity, config.policy
    );

    let policy = EvictionPolicy::from_str(&config.policy)
        .with_context(|| format!("unusable CACHE_POLICY value '{}'", config.policy))?;
    let mut cache = new_cache::<String, String>(policy, config.capacity)
        .context("failed to construct cache")?;

    cache.put("key1".to_string(), "value1".to_string());
    info!("key1 value is {:?}", cache.get(&"key1".to_string()));
    info!("cache size is {}", cache.len());

    cache.remove(&"key1".to_string());
    info!("cache size is {}", cache.len());

    Ok(())
}
