//! Tree-wide evaluation configuration.

use std::env;

/// Settings applied to a whole tree at build time.
///
/// Per-subtree tracing is requested with
/// [`Node::with_debug`](crate::Node::with_debug); this config only adds a
/// tree-wide switch on top of it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeConfig {
    /// Trace every node of the tree (default: false).
    pub debug: bool,
}

impl TreeConfig {
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BT_DEBUG` - Trace every node (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(debug) = read_env_bool("BT_DEBUG") {
            config.debug = debug;
        }

        config
    }
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
