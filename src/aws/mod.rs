//! AWS client provisioning
//!
//! - [`session::Session`] - long-lived factory for S3, SQS and DynamoDB clients
//! - [`lease::Lease`] - scoped non-blocking handle, released on drop
//! - [`blocking::BlockingClient`] - handle for synchronous callers
//! - [`queue`] - queue name to URL resolution

pub mod binding;
pub mod blocking;
pub mod lease;
pub mod queue;
pub mod service;
pub mod session;

pub use binding::ServiceBinding;
pub use blocking::BlockingClient;
pub use lease::Lease;
pub use queue::{queue_url, resolve_queue_url};
pub use service::{Service, ServiceClient};
pub use session::Session;
