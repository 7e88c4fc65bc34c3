use std::ops::Deref;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use super::binding::ServiceBinding;
use super::service::ServiceClient;

/// Counts leases that have been handed out and not yet dropped.
#[derive(Debug, Default)]
pub(crate) struct LeaseCounter(AtomicUsize);

impl LeaseCounter {
    pub(crate) fn active(&self) -> usize {
        self.0.load(Ordering::Acquire)
    }
}

/// A scoped, non-blocking client handle.
///
/// Only exists once acquisition has completed. The client is released when
/// the lease is dropped, which covers normal scope exit, `?` returns, panics
/// and cancellation of the owning future.
#[derive(Debug)]
pub struct Lease<C: ServiceClient> {
    client: C,
    binding: ServiceBinding,
    counter: Arc<LeaseCounter>,
}

impl<C: ServiceClient> Lease<C> {
    pub(crate) fn new(client: C, binding: ServiceBinding, counter: Arc<LeaseCounter>) -> Self {
        counter.0.fetch_add(1, Ordering::AcqRel);
        Self {
            client,
            binding,
            counter,
        }
    }

    #[must_use]
    pub fn binding(&self) -> &ServiceBinding {
        &self.binding
    }

    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }
}

impl<C: ServiceClient> Deref for Lease<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.client
    }
}

impl<C: ServiceClient> Drop for Lease<C> {
    fn drop(&mut self) {
        self.counter.0.fetch_sub(1, Ordering::AcqRel);
        debug!(
            service = %self.binding.service,
            region = %self.binding.region,
            "Released client lease"
        );
    }
}
