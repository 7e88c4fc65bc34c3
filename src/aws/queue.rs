use aws_sdk_sqs::Client as SqsClient;
use aws_sdk_sqs::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_sqs::operation::get_queue_url::GetQueueUrlError;
use tracing::{debug, warn};

use super::blocking::BlockingClient;
use crate::errors::ProvisionError;

/// Error code SQS sends for a missing queue on query-compatible endpoints
/// (LocalStack, older ElasticMQ).
const NON_EXISTENT_QUEUE_CODE: &str = "AWS.SimpleQueueService.NonExistentQueue";

/// `__type` shape name of a missing queue in a JSON-protocol reply.
const QUEUE_DOES_NOT_EXIST_CODE: &str = "QueueDoesNotExist";

/// Look up the URL of `queue_name`. One request, no retry, no caching.
///
/// # Errors
///
/// Returns [`ProvisionError::NotFound`] if SQS reports no such queue and
/// [`ProvisionError::Transport`] for any other failure.
pub async fn queue_url(client: &SqsClient, queue_name: &str) -> Result<String, ProvisionError> {
    if queue_name.is_empty() {
        return Err(ProvisionError::Configuration(
            "queue name must not be empty".to_string(),
        ));
    }

    let response = client
        .get_queue_url()
        .queue_name(queue_name)
        .send()
        .await
        .map_err(|e| classify(queue_name, e))?;

    let url = response.queue_url.ok_or_else(|| {
        ProvisionError::Transport(format!("GetQueueUrl for '{queue_name}' returned no QueueUrl"))
    })?;

    debug!(queue = queue_name, url = %url, "Resolved queue URL");
    Ok(url)
}

/// Blocking form of [`queue_url`].
///
/// # Errors
///
/// Same as [`queue_url`], plus [`ProvisionError::Runtime`] when called from
/// inside an async runtime.
pub fn resolve_queue_url(
    client: &BlockingClient<SqsClient>,
    queue_name: &str,
) -> Result<String, ProvisionError> {
    client.block_on(|sqs| queue_url(sqs, queue_name))
}

fn classify<R>(queue_name: &str, error: SdkError<GetQueueUrlError, R>) -> ProvisionError
where
    R: std::fmt::Debug,
{
    let missing = error.as_service_error().is_some_and(|service_error| {
        service_error.is_queue_does_not_exist()
            || matches!(
                service_error.code(),
                Some(NON_EXISTENT_QUEUE_CODE | QUEUE_DOES_NOT_EXIST_CODE)
            )
    });

    if missing {
        warn!(queue = queue_name, "Queue does not exist");
        return ProvisionError::NotFound(format!("queue '{queue_name}'"));
    }

    ProvisionError::Transport(format!(
        "GetQueueUrl for '{queue_name}': {}",
        DisplayErrorContext(&error)
    ))
}
