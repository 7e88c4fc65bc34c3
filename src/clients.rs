//! Client factories backed by the process-wide [`Session`].
//!
//! Convenient for code that doesn't carry a session around. Each call reads
//! the shared session (created from the environment on first use) and hands
//! back a fresh handle.

use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_sqs::Client as SqsClient;

use crate::aws::{BlockingClient, Lease, Session};
use crate::errors::ProvisionError;

/// # Errors
///
/// Returns a configuration error if the environment is incomplete, or a
/// transport error if credentials cannot be resolved.
pub async fn object_store_client() -> Result<Lease<S3Client>, ProvisionError> {
    Session::global()?.object_store().await
}

/// # Errors
///
/// See [`object_store_client`].
pub async fn queue_client() -> Result<Lease<SqsClient>, ProvisionError> {
    Session::global()?.queue().await
}

/// # Errors
///
/// See [`object_store_client`].
pub async fn key_value_store_client() -> Result<Lease<DynamoDbClient>, ProvisionError> {
    Session::global()?.key_value_store().await
}

/// # Errors
///
/// Returns a configuration error if the environment is incomplete, or a
/// runtime error if the blocking runtime cannot be started.
pub fn blocking_object_store_client() -> Result<BlockingClient<S3Client>, ProvisionError> {
    Session::global()?.blocking_object_store()
}

/// # Errors
///
/// See [`blocking_object_store_client`].
pub fn blocking_queue_client() -> Result<BlockingClient<SqsClient>, ProvisionError> {
    Session::global()?.blocking_queue()
}

/// # Errors
///
/// See [`blocking_object_store_client`].
pub fn blocking_key_value_store_client() -> Result<BlockingClient<DynamoDbClient>, ProvisionError>
{
    Session::global()?.blocking_key_value_store()
}
