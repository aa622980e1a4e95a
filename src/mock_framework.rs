//! # Mock Framework
//!
//! Utilities for testing the client in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_deactivate`] to assert behavior.

use tokio::sync::mpsc;

use crate::clients::UserClient;
use crate::domain::UserCreate;
use crate::user_actor::{ServiceResponse, UserRequest};

/// Creates a client wired to a receiver the test controls instead of a running actor.
pub fn create_mock_client(buffer_size: usize) -> (UserClient, mpsc::Receiver<UserRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (UserClient::new(sender), receiver)
}

/// Helper to verify that the next message is a CreateUser request
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<UserRequest>,
) -> Option<(UserCreate, ServiceResponse<crate::domain::User>)> {
    match receiver.recv().await {
        Some(UserRequest::CreateUser { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetUser request
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<UserRequest>,
) -> Option<(String, ServiceResponse<Option<crate::domain::User>>)> {
    match receiver.recv().await {
        Some(UserRequest::GetUser { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a DeactivateUser request
pub async fn expect_deactivate(
    receiver: &mut mpsc::Receiver<UserRequest>,
) -> Option<(String, ServiceResponse<bool>)> {
    match receiver.recv().await {
        Some(UserRequest::DeactivateUser { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_expect_get_rejects_other_requests() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.deactivate_user("user_1".to_string()).await });

        assert!(expect_get(&mut receiver).await.is_none());
        // The reply channel was dropped with the unmatched request
        assert!(task.await.unwrap().is_err());
    }
}
