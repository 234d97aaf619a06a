//! Agent runtime configuration from TOML (`[runtime]` section)

use serde::{Deserialize, Serialize};

/// Raw runtime connection configuration from TOML
///
/// # Example
///
/// ```toml
/// [runtime]
/// project = "my-gcp-project"     # GOOGLE_CLOUD_PROJECT overrides this
/// location = "us-central1"       # GOOGLE_CLOUD_LOCATION overrides this
/// ```
///
/// Project and location stay optional: an unset value is passed through
/// to the runtime, where the request fails and is reported in-band like
/// any other dispatch failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRuntimeConfig {
    /// Cloud project that hosts the agent runtime
    pub project: Option<String>,
    /// Runtime region (e.g. "us-central1")
    pub location: Option<String>,
    /// Full base URL override for the runtime endpoint. When unset the
    /// endpoint is derived from `location`.
    pub api_endpoint: Option<String>,
    /// Static bearer token. When unset the gateway asks `gcloud` for one.
    pub access_token: Option<String>,
}
