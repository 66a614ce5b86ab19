use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::{NewUser, User};
use crate::error::UserError;
use crate::messages::RegistryRequest;
use crate::registry::RegistryStats;

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
/// Parameters listed in `skip(..)` stay out of the span (passwords).
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident $(, skip($($skip:ident),*))?) => {
        impl $client {
            #[instrument(skip(self $($(, $skip)*)?))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, UserError> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| UserError::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| UserError::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

/// Cloneable handle to a [`RegistryService`](crate::service::RegistryService).
///
/// Mirrors [`UserRegistry`](crate::registry::UserRegistry) method for method;
/// validation errors come back as-is, a dead actor as
/// [`UserError::ActorCommunicationError`].
#[derive(Clone)]
pub struct RegistryClient {
    sender: mpsc::Sender<RegistryRequest>,
}

impl RegistryClient {
    pub fn new(sender: mpsc::Sender<RegistryRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop. No reply is sent.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), UserError> {
        debug!("Sending shutdown request");
        self.sender
            .send(RegistryRequest::Shutdown)
            .await
            .map_err(|_| UserError::ActorCommunicationError("Actor closed".to_string()))
    }

    /// Adapter over [`register_user`](Self::register_user) taking the fields directly.
    #[instrument(skip(self, password))]
    pub async fn register(&self, email: String, password: String, name: String) -> Result<bool, UserError> {
        self.register_user(NewUser { email, password, name }).await
    }
}

client_method!(RegistryClient => fn register_user(user: NewUser) -> bool as RegistryRequest::Register, skip(user));
client_method!(RegistryClient => fn authenticate(email: String, password: String) -> Option<User> as RegistryRequest::Authenticate, skip(password));
client_method!(RegistryClient => fn delete(email: String) -> bool as RegistryRequest::Delete);
client_method!(RegistryClient => fn find(email: String) -> Option<User> as RegistryRequest::Find);
client_method!(RegistryClient => fn list_all() -> Vec<User> as RegistryRequest::ListAll);
client_method!(RegistryClient => fn update_name(email: String, new_name: String) -> bool as RegistryRequest::UpdateName);
client_method!(RegistryClient => fn change_password(email: String, current: String, new_password: String) -> bool as RegistryRequest::ChangePassword, skip(current, new_password));
client_method!(RegistryClient => fn count() -> usize as RegistryRequest::Count);
client_method!(RegistryClient => fn exists(email: String) -> bool as RegistryRequest::Exists);
client_method!(RegistryClient => fn clear() -> () as RegistryRequest::Clear);
client_method!(RegistryClient => fn stats() -> RegistryStats as RegistryRequest::Stats);
