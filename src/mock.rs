//! # Mock Registry
//!
//! Utilities for testing [`RegistryClient`] without a running service.
//!
//! [`create_mock_client`] hands back a client wired to a receiver the test
//! owns. The `expect_*` helpers pull the next request off that receiver and
//! return its arguments plus the responder, so the test decides the reply.

use tokio::sync::mpsc;

use crate::client::RegistryClient;
use crate::domain::{NewUser, User};
use crate::error::UserError;
use crate::messages::{RegistryRequest, ServiceResponse};

pub fn create_mock_client(buffer_size: usize) -> (RegistryClient, mpsc::Receiver<RegistryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RegistryClient::new(sender), receiver)
}

/// Next message must be a Register request
pub async fn expect_register(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(NewUser, ServiceResponse<bool, UserError>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Register { user, respond_to }) => Some((user, respond_to)),
        _ => None,
    }
}

/// Next message must be an Authenticate request
pub async fn expect_authenticate(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(String, String, ServiceResponse<Option<User>, UserError>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Authenticate { email, password, respond_to }) => {
            Some((email, password, respond_to))
        }
        _ => None,
    }
}

/// Next message must be a ChangePassword request
pub async fn expect_change_password(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(String, String, String, ServiceResponse<bool, UserError>)> {
    match receiver.recv().await {
        Some(RegistryRequest::ChangePassword { email, current, new_password, respond_to }) => {
            Some((email, current, new_password, respond_to))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_expect_rejects_other_requests() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.count().await });

        assert!(expect_register(&mut receiver).await.is_none());
        // the Count responder was dropped along with the unmatched request
        assert!(matches!(
            task.await.unwrap(),
            Err(UserError::ActorCommunicationError(_))
        ));
    }
}
