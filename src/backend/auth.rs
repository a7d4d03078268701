//! Application Default Credentials.
//!
//! Tokens are resolved by `gcp_auth` in the usual ADC order: the
//! service-account file named by `GOOGLE_APPLICATION_CREDENTIALS`, the gcloud
//! user credentials, then the GCE metadata server.

use gcp_auth::TokenProvider as _;
use tracing::debug;

use super::types::BackendError;

/// OAuth scope for the Cloud Text-to-Speech API.
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Fetch an access token through Application Default Credentials.
///
/// Blocks the calling thread on a private single-threaded runtime, so it
/// must not be called from inside an async context.
pub fn application_default_token() -> Result<String, BackendError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| BackendError::AuthFailed(e.to_string()))?;

    runtime.block_on(async {
        let provider = gcp_auth::provider()
            .await
            .map_err(|e| BackendError::AuthFailed(e.to_string()))?;

        let token = provider
            .token(&[CLOUD_PLATFORM_SCOPE])
            .await
            .map_err(|e| BackendError::AuthFailed(e.to_string()))?;

        debug!("obtained access token from application default credentials");
        Ok::<_, BackendError>(token.as_str().to_string())
    })
}
