//! The single mapping from [`AwsSettings`] to per-service client parameters.
//!
//! Both the async and the blocking constructors go through [`sdk_config`],
//! so region, credentials and endpoint wiring live in one place.

use std::fmt;

use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use aws_credential_types::provider::SharedCredentialsProvider;

use super::service::Service;
use crate::core::config::{AwsSettings, redact_key_id};

const CREDENTIALS_PROVIDER_NAME: &str = "file-loader-static";

/// Region/credential/endpoint identity a client handle is bound to for its
/// lifetime. Only the access key id is kept, never the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceBinding {
    pub service: Service,
    pub region: String,
    pub access_key_id: String,
    pub endpoint_url: Option<String>,
}

impl ServiceBinding {
    #[must_use]
    pub fn resolve(settings: &AwsSettings, service: Service) -> Self {
        Self {
            service,
            region: settings.region.clone(),
            access_key_id: settings.access_key_id.clone(),
            endpoint_url: settings.endpoint_for(service).map(str::to_string),
        }
    }
}

impl fmt::Debug for ServiceBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceBinding")
            .field("service", &self.service)
            .field("region", &self.region)
            .field("access_key_id", &redact_key_id(&self.access_key_id))
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

#[must_use]
pub fn credentials(settings: &AwsSettings) -> Credentials {
    Credentials::new(
        settings.access_key_id.clone(),
        settings.secret_access_key.clone(),
        None,
        None,
        CREDENTIALS_PROVIDER_NAME,
    )
}

/// Build the shared SDK config for one service.
///
/// SDK-level retries are disabled: every call is one round trip and retry
/// policy is left to callers.
#[must_use]
pub fn sdk_config(settings: &AwsSettings, binding: &ServiceBinding) -> SdkConfig {
    let mut builder = SdkConfig::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(binding.region.clone()))
        .credentials_provider(SharedCredentialsProvider::new(credentials(settings)))
        .retry_config(RetryConfig::disabled());

    if let Some(endpoint) = &binding.endpoint_url {
        builder = builder.endpoint_url(endpoint.clone());
    }

    builder.build()
}
