use tracing::{error, info, instrument};

use crate::client::RegistryClient;
use crate::config::SystemConfig;
use crate::error::UserError;
use crate::service::RegistryService;

/// Starts the registry service and manages its lifetime.
///
/// Must be created inside a tokio runtime.
pub struct RegistrySystem {
    pub client: RegistryClient,
    handle: tokio::task::JoinHandle<()>,
}

impl RegistrySystem {
    #[instrument(name = "registry_system", skip(config), fields(buffer_size = config.buffer_size))]
    pub fn new(config: &SystemConfig) -> Self {
        info!("Starting registry system");

        let (service, client) = RegistryService::new(config.buffer_size);
        let handle = tokio::spawn(service.run());

        info!("Registry system started");
        Self { client, handle }
    }

    /// Stops the service and waits for it to finish.
    ///
    /// Clones of `client` held elsewhere stop working once this returns.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), UserError> {
        info!("Shutting down registry system");

        // already gone is fine; the join below still reports a crash
        let _ = self.client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service shutdown error");
            return Err(UserError::ActorCommunicationError(format!("Service task failed: {e}")));
        }

        info!("Registry system shutdown complete");
        Ok(())
    }
}
