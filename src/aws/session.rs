use std::sync::Arc;

use aws_config::SdkConfig;
use aws_credential_types::provider::ProvideCredentials;
use once_cell::sync::OnceCell;
use tracing::{debug, info};

use super::binding::{self, ServiceBinding};
use super::blocking::BlockingClient;
use super::lease::{Lease, LeaseCounter};
use super::service::ServiceClient;
use crate::core::config::AwsSettings;
use crate::errors::ProvisionError;

static GLOBAL_SESSION: OnceCell<Session> = OnceCell::new();

/// Long-lived factory for client handles.
///
/// Holds the configuration read-only; every handle it mints is bound to
/// exactly that region, credential pair and endpoint set.
#[derive(Debug, Clone)]
pub struct Session {
    settings: Arc<AwsSettings>,
    leases: Arc<LeaseCounter>,
}

impl Session {
    #[must_use]
    pub fn new(settings: AwsSettings) -> Self {
        Self {
            settings: Arc::new(settings),
            leases: Arc::new(LeaseCounter::default()),
        }
    }

    /// The process-wide session, built from the environment on first use.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the environment is incomplete. A
    /// failed attempt is not cached, so a later call can still succeed.
    pub fn global() -> Result<&'static Session, ProvisionError> {
        GLOBAL_SESSION.get_or_try_init(|| {
            let settings = AwsSettings::from_env()?;
            info!(region = %settings.region, "Initialized AWS session from environment");
            Ok(Session::new(settings))
        })
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.settings.region
    }

    #[must_use]
    pub fn settings(&self) -> &AwsSettings {
        &self.settings
    }

    /// Number of non-blocking handles currently held.
    #[must_use]
    pub fn active_leases(&self) -> usize {
        self.leases.active()
    }

    /// Acquire a non-blocking client for `C`'s service.
    ///
    /// Resolves the credential identity before returning, so the lease is
    /// ready for requests as soon as this completes.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the credentials provider fails.
    pub async fn acquire<C: ServiceClient>(&self) -> Result<Lease<C>, ProvisionError> {
        let (client, binding, config) = self.build::<C>();

        if let Some(provider) = config.credentials_provider() {
            provider.provide_credentials().await.map_err(|e| {
                ProvisionError::Transport(format!(
                    "resolving credentials for {}: {e}",
                    binding.service
                ))
            })?;
        }

        Ok(Lease::new(client, binding, Arc::clone(&self.leases)))
    }

    /// Acquire a lease, run `scope` with it and release it afterwards.
    ///
    /// # Errors
    ///
    /// Returns acquisition errors; the scope's own result is passed through.
    pub async fn scoped<C, F, T>(&self, scope: F) -> Result<T, ProvisionError>
    where
        C: ServiceClient,
        F: AsyncFnOnce(&C) -> Result<T, ProvisionError>,
    {
        let lease = self.acquire::<C>().await?;
        scope(lease.client()).await
    }

    /// # Errors
    ///
    /// Returns a runtime error if the blocking runtime cannot be started.
    pub fn blocking<C: ServiceClient>(&self) -> Result<BlockingClient<C>, ProvisionError> {
        let (client, binding, _) = self.build::<C>();
        BlockingClient::new(client, binding)
    }

    /// # Errors
    ///
    /// See [`Session::acquire`].
    pub async fn object_store(&self) -> Result<Lease<aws_sdk_s3::Client>, ProvisionError> {
        self.acquire().await
    }

    /// # Errors
    ///
    /// See [`Session::acquire`].
    pub async fn queue(&self) -> Result<Lease<aws_sdk_sqs::Client>, ProvisionError> {
        self.acquire().await
    }

    /// # Errors
    ///
    /// See [`Session::acquire`].
    pub async fn key_value_store(
        &self,
    ) -> Result<Lease<aws_sdk_dynamodb::Client>, ProvisionError> {
        self.acquire().await
    }

    /// # Errors
    ///
    /// See [`Session::blocking`].
    pub fn blocking_object_store(
        &self,
    ) -> Result<BlockingClient<aws_sdk_s3::Client>, ProvisionError> {
        self.blocking()
    }

    /// # Errors
    ///
    /// See [`Session::blocking`].
    pub fn blocking_queue(&self) -> Result<BlockingClient<aws_sdk_sqs::Client>, ProvisionError> {
        self.blocking()
    }

    /// # Errors
    ///
    /// See [`Session::blocking`].
    pub fn blocking_key_value_store(
        &self,
    ) -> Result<BlockingClient<aws_sdk_dynamodb::Client>, ProvisionError> {
        self.blocking()
    }

    fn build<C: ServiceClient>(&self) -> (C, ServiceBinding, SdkConfig) {
        let binding = ServiceBinding::resolve(&self.settings, C::SERVICE);
        let config = binding::sdk_config(&self.settings, &binding);
        debug!(
            service = %binding.service,
            region = %binding.region,
            endpoint = binding.endpoint_url.as_deref().unwrap_or("default"),
            "Provisioning AWS client"
        );
        (C::from_sdk_config(&config), binding, config)
    }
}
