//! Actor front-end for [`UserRegistry`].
//!
//! The service owns the registry outright and handles one request at a time,
//! which is all the synchronization concurrent callers need.

use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::client::RegistryClient;
use crate::messages::RegistryRequest;
use crate::password::{PasswordScheme, PlainText};
use crate::registry::UserRegistry;

pub struct RegistryService<S: PasswordScheme = PlainText> {
    receiver: mpsc::Receiver<RegistryRequest>,
    registry: UserRegistry<S>,
}

impl RegistryService<PlainText> {
    pub fn new(buffer_size: usize) -> (Self, RegistryClient) {
        Self::with_registry(buffer_size, UserRegistry::new())
    }
}

impl<S: PasswordScheme> RegistryService<S> {
    /// Wraps an existing registry, e.g. one built with a custom scheme.
    pub fn with_registry(buffer_size: usize, registry: UserRegistry<S>) -> (Self, RegistryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, registry };
        (service, RegistryClient::new(sender))
    }

    /// Main actor loop. Ends on `Shutdown` or once every client is dropped.
    #[instrument(name = "registry_service", skip(self))]
    pub async fn run(mut self) {
        info!("RegistryService starting");

        while let Some(msg) = self.receiver.recv().await {
            if let RegistryRequest::Shutdown = msg {
                info!("RegistryService shutting down");
                break;
            }
            self.handle(msg);
        }

        info!(user_count = self.registry.count(), "RegistryService stopped");
    }

    // A dropped receiver just means the caller stopped waiting.
    fn handle(&mut self, msg: RegistryRequest) {
        match msg {
            RegistryRequest::Register { user, respond_to } => {
                let _ = respond_to.send(self.registry.register_user(user));
            }
            RegistryRequest::Authenticate { email, password, respond_to } => {
                let _ = respond_to.send(Ok(self.registry.authenticate(&email, &password)));
            }
            RegistryRequest::Delete { email, respond_to } => {
                let _ = respond_to.send(Ok(self.registry.delete(&email)));
            }
            RegistryRequest::Find { email, respond_to } => {
                let _ = respond_to.send(Ok(self.registry.find(&email)));
            }
            RegistryRequest::ListAll { respond_to } => {
                let users = self.registry.list_all();
                debug!(user_count = users.len(), "Listed users");
                let _ = respond_to.send(Ok(users));
            }
            RegistryRequest::UpdateName { email, new_name, respond_to } => {
                let _ = respond_to.send(self.registry.update_name(&email, &new_name));
            }
            RegistryRequest::ChangePassword { email, current, new_password, respond_to } => {
                let _ = respond_to.send(self.registry.change_password(&email, &current, &new_password));
            }
            RegistryRequest::Count { respond_to } => {
                let _ = respond_to.send(Ok(self.registry.count()));
            }
            RegistryRequest::Exists { email, respond_to } => {
                let _ = respond_to.send(Ok(self.registry.exists(&email)));
            }
            RegistryRequest::Clear { respond_to } => {
                self.registry.clear();
                let _ = respond_to.send(Ok(()));
            }
            RegistryRequest::Stats { respond_to } => {
                let _ = respond_to.send(Ok(self.registry.stats()));
            }
            RegistryRequest::Shutdown => {}
        }
    }
}
