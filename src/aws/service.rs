use std::fmt;

use aws_config::SdkConfig;

/// The three AWS services this crate provisions clients for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// S3
    ObjectStore,
    /// SQS
    Queue,
    /// DynamoDB
    KeyValueStore,
}

impl Service {
    pub const ALL: [Service; 3] = [Service::ObjectStore, Service::Queue, Service::KeyValueStore];

    /// Environment variable carrying this service's endpoint override.
    #[must_use]
    pub fn endpoint_var(self) -> &'static str {
        match self {
            Service::ObjectStore => "S3_ENDPOINT_URL",
            Service::Queue => "SQS_ENDPOINT_URL",
            Service::KeyValueStore => "DYNAMODB_ENDPOINT_URL",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Service::ObjectStore => "s3",
            Service::Queue => "sqs",
            Service::KeyValueStore => "dynamodb",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An SDK client that can be built from a shared [`SdkConfig`].
pub trait ServiceClient: Clone + Send + Sync + 'static {
    const SERVICE: Service;

    fn from_sdk_config(config: &SdkConfig) -> Self;
}

impl ServiceClient for aws_sdk_s3::Client {
    const SERVICE: Service = Service::ObjectStore;

    fn from_sdk_config(config: &SdkConfig) -> Self {
        // S3-compatible emulators behind an override don't do virtual-host buckets.
        let s3_config = aws_sdk_s3::config::Builder::from(config)
            .force_path_style(config.endpoint_url().is_some())
            .build();
        aws_sdk_s3::Client::from_conf(s3_config)
    }
}

impl ServiceClient for aws_sdk_sqs::Client {
    const SERVICE: Service = Service::Queue;

    fn from_sdk_config(config: &SdkConfig) -> Self {
        aws_sdk_sqs::Client::new(config)
    }
}

impl ServiceClient for aws_sdk_dynamodb::Client {
    const SERVICE: Service = Service::KeyValueStore;

    fn from_sdk_config(config: &SdkConfig) -> Self {
        aws_sdk_dynamodb::Client::new(config)
    }
}
