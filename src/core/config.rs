use std::env;
use std::fmt;

use url::Url;

use crate::aws::service::Service;
use crate::errors::ProvisionError;

pub const REGION_VAR: &str = "AWS_REGION";
pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";

/// Region, credentials and per-service endpoint overrides shared by every
/// client this crate hands out.
///
/// An endpoint of `None` means the SDK's default routing for the region.
#[derive(Clone, PartialEq, Eq)]
pub struct AwsSettings {
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub s3_endpoint_url: Option<String>,
    pub sqs_endpoint_url: Option<String>,
    pub dynamodb_endpoint_url: Option<String>,
}

impl AwsSettings {
    /// # Errors
    ///
    /// Returns a configuration error if any of the three values is empty.
    pub fn new(
        region: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Result<Self, ProvisionError> {
        let settings = Self {
            region: region.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            s3_endpoint_url: None,
            sqs_endpoint_url: None,
            dynamodb_endpoint_url: None,
        };
        require_non_empty(REGION_VAR, &settings.region)?;
        require_non_empty(ACCESS_KEY_ID_VAR, &settings.access_key_id)?;
        require_non_empty(SECRET_ACCESS_KEY_VAR, &settings.secret_access_key)?;
        Ok(settings)
    }

    /// Override the endpoint for one service, e.g. to point at LocalStack.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `url` is not an absolute http(s) URL.
    pub fn with_endpoint(
        mut self,
        service: Service,
        url: impl Into<String>,
    ) -> Result<Self, ProvisionError> {
        let url = url.into();
        validate_endpoint(service.endpoint_var(), &url)?;
        *self.endpoint_slot(service) = Some(url);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns a configuration error naming the first missing or malformed variable.
    pub fn from_env() -> Result<Self, ProvisionError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AwsSettings::from_env`] against an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first missing or malformed variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProvisionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ProvisionError::Configuration(format!("{key} is not set")))
        };

        let mut settings = Self::new(
            required(REGION_VAR)?,
            required(ACCESS_KEY_ID_VAR)?,
            required(SECRET_ACCESS_KEY_VAR)?,
        )?;

        for service in Service::ALL {
            let Some(url) = lookup(service.endpoint_var()) else {
                continue;
            };
            // An exported-but-empty override means "default routing".
            if url.trim().is_empty() {
                continue;
            }
            settings = settings.with_endpoint(service, url.trim())?;
        }

        Ok(settings)
    }

    #[must_use]
    pub fn endpoint_for(&self, service: Service) -> Option<&str> {
        match service {
            Service::ObjectStore => self.s3_endpoint_url.as_deref(),
            Service::Queue => self.sqs_endpoint_url.as_deref(),
            Service::KeyValueStore => self.dynamodb_endpoint_url.as_deref(),
        }
    }

    fn endpoint_slot(&mut self, service: Service) -> &mut Option<String> {
        match service {
            Service::ObjectStore => &mut self.s3_endpoint_url,
            Service::Queue => &mut self.sqs_endpoint_url,
            Service::KeyValueStore => &mut self.dynamodb_endpoint_url,
        }
    }
}

impl fmt::Debug for AwsSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsSettings")
            .field("region", &self.region)
            .field("access_key_id", &redact_key_id(&self.access_key_id))
            .field("secret_access_key", &"<redacted>")
            .field("s3_endpoint_url", &self.s3_endpoint_url)
            .field("sqs_endpoint_url", &self.sqs_endpoint_url)
            .field("dynamodb_endpoint_url", &self.dynamodb_endpoint_url)
            .finish()
    }
}

fn require_non_empty(key: &str, value: &str) -> Result<(), ProvisionError> {
    if value.trim().is_empty() {
        return Err(ProvisionError::Configuration(format!("{key} is empty")));
    }
    Ok(())
}

fn validate_endpoint(key: &str, value: &str) -> Result<(), ProvisionError> {
    let parsed = Url::parse(value)
        .map_err(|e| ProvisionError::Configuration(format!("{key}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ProvisionError::Configuration(format!(
            "{key}: unsupported scheme '{other}'"
        ))),
    }
}

/// Keep the last four characters of longer keys so logs can still tell
/// them apart; short keys are hidden entirely.
pub(crate) fn redact_key_id(key_id: &str) -> String {
    const VISIBLE: usize = 4;

    let len = key_id.chars().count();
    if len <= VISIBLE {
        return "****".to_string();
    }
    let suffix: String = key_id.chars().skip(len - VISIBLE).collect();
    format!("****{suffix}")
}
