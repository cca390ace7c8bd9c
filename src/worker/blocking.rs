//! Blocking [`CatalogTransport`] over the async worker client.

use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use super::client::WorkerClient;
use super::error::{WorkerError, WorkerResult};
use super::protocol::GenQueryParams;
use crate::config::Settings;
use crate::executor::{CatalogTransport, PageRequest, RawResponse, TransportError};
use crate::query::TranslatedQuery;

/// Drives a [`WorkerClient`] on a private single-threaded runtime so the
/// executor can stay synchronous.
pub struct WorkerTransport {
    runtime: Runtime,
    client: WorkerClient,
}

impl WorkerTransport {
    /// Spawn the worker configured in `settings`.
    pub fn spawn(settings: &Settings) -> WorkerResult<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(WorkerError::SpawnFailed)?;
        let client = runtime.block_on(WorkerClient::spawn_with_settings(settings))?;
        Ok(Self { runtime, client })
    }
}

impl CatalogTransport for WorkerTransport {
    fn send(
        &mut self,
        query: &TranslatedQuery,
        request: &PageRequest,
    ) -> Result<Option<RawResponse>, TransportError> {
        let params = GenQueryParams::for_page(query, request);
        let page = self.runtime.block_on(self.client.gen_query(params))?;
        Ok(page.map(RawResponse::from))
    }

    fn send_close(
        &mut self,
        query: &TranslatedQuery,
        continuation: u32,
    ) -> Result<(), TransportError> {
        debug!(continuation, "closing catalog cursor");
        let params = GenQueryParams::for_close(query, continuation);
        self.runtime.block_on(self.client.close_query(params))?;
        Ok(())
    }
}
