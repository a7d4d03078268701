//! Client configuration loaded from environment variables.
//!
//! The command line only carries the text and the output path; the API
//! endpoint, credentials and timeout come from the environment. Without an
//! explicit token or key, Application Default Credentials are used.

mod settings;

pub use settings::{
    Config, ConfigError, Credentials, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, ENV_ACCESS_TOKEN,
    ENV_API_KEY, ENV_ENDPOINT, ENV_QUOTA_PROJECT, ENV_TIMEOUT_SECS,
};
