//! File loader AWS clients - pre-configured S3, SQS and DynamoDB clients.
//!
//! Region, static credentials and per-service endpoint overrides are read
//! once into an [`AwsSettings`] and threaded through every client by a
//! [`Session`]. Each service is available as:
//! - a non-blocking [`aws::Lease`], acquired asynchronously and released on drop
//! - a [`aws::BlockingClient`] for synchronous, setup-time code
//!
//! # Example
//!
//! ```no_run
//! use file_loader::{AwsSettings, Session};
//! use file_loader::aws::Service;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     file_loader::setup_logging();
//!
//!     let settings = AwsSettings::new("us-east-1", "test", "test")?
//!         .with_endpoint(Service::Queue, "http://localhost:4566")?;
//!     let session = Session::new(settings);
//!
//!     let sqs = session.queue().await?;
//!     let url = file_loader::aws::queue_url(&sqs, "orders").await?;
//!     println!("orders queue: {url}");
//!
//!     Ok(())
//! }
//! ```

pub mod aws;
pub mod clients;
pub mod core;
pub mod errors;

pub use crate::aws::Session;
pub use crate::core::config::AwsSettings;
pub use crate::errors::ProvisionError;

/// Configure structured JSON logging.
///
/// Honors `RUST_LOG` and defaults to `info`. Calling it again after a
/// subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// file_loader::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
