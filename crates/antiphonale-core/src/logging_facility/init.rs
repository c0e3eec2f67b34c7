use std::str::FromStr;
use std::sync::Once;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Logging profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Human-readable output at debug level
    #[default]
    #[serde(alias = "dev")]
    Development,
    /// JSON lines at info level
    #[serde(alias = "prod")]
    Production,
    /// No output; tests install their own capture layer
    Test,
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Profile::Development),
            "prod" | "production" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(format!("unknown logging profile: {}", other)),
        }
    }
}

static INIT_ONCE: Once = Once::new();

const TARGETS: [&str; 4] = [
    "antiphonale",
    "antiphonale_core",
    "antiphonale_store",
    "antiphonale_cli",
];

fn default_filter(level: &str) -> EnvFilter {
    let directives: Vec<String> = TARGETS.iter().map(|t| format!("{}={}", t, level)).collect();
    EnvFilter::new(directives.join(","))
}

/// Install the global subscriber for `profile`
///
/// Only the first call has any effect. `RUST_LOG` overrides the default
/// filter of the Development and Production profiles.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| default_filter("debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| default_filter("info")),
                )
                .init();
        }
        // init_test_capture() owns the subscriber in tests
        Profile::Test => {}
    });
}
