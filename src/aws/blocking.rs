use std::future::Future;

use tokio::runtime::{Builder, Handle, Runtime};

use super::binding::ServiceBinding;
use super::service::ServiceClient;
use crate::errors::ProvisionError;

/// A client usable from synchronous code.
///
/// Owns a current-thread runtime that drives each SDK call to completion.
/// Calls must be made outside of any async runtime.
#[derive(Debug)]
pub struct BlockingClient<C: ServiceClient> {
    client: C,
    binding: ServiceBinding,
    runtime: Option<Runtime>,
}

impl<C: ServiceClient> BlockingClient<C> {
    pub(crate) fn new(client: C, binding: ServiceBinding) -> Result<Self, ProvisionError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .thread_name(format!("{}-blocking", binding.service))
            .build()?;
        Ok(Self {
            client,
            binding,
            runtime: Some(runtime),
        })
    }

    #[must_use]
    pub fn binding(&self) -> &ServiceBinding {
        &self.binding
    }

    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Run one SDK call to completion on this client's runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::Runtime`] when called from inside an async
    /// runtime, otherwise whatever the call itself returns.
    pub fn block_on<'a, F, Fut, T>(&'a self, call: F) -> Result<T, ProvisionError>
    where
        F: FnOnce(&'a C) -> Fut,
        Fut: Future<Output = Result<T, ProvisionError>>,
    {
        if Handle::try_current().is_ok() {
            return Err(ProvisionError::Runtime(format!(
                "blocking {} client used inside an async runtime",
                self.binding.service
            )));
        }
        let runtime = self.runtime.as_ref().ok_or_else(|| {
            ProvisionError::Runtime(format!("blocking {} client shut down", self.binding.service))
        })?;
        runtime.block_on(call(&self.client))
    }
}

impl<C: ServiceClient> Drop for BlockingClient<C> {
    fn drop(&mut self) {
        // A plain drop panics if this happens inside another runtime.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
