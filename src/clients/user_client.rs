use tokio::sync::mpsc;

use crate::domain::{User, UserCreate};
use crate::user_actor::UserRequest;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    sender: mpsc::Sender<UserRequest>,
}

impl UserClient {
    pub fn new(sender: mpsc::Sender<UserRequest>) -> Self {
        Self { sender }
    }
}

client_method!(UserClient => fn create_user(payload: UserCreate) -> User as UserRequest::CreateUser);
client_method!(UserClient => fn get_user(id: String) -> Option<User> as UserRequest::GetUser);
client_method!(UserClient => fn deactivate_user(id: String) -> bool as UserRequest::DeactivateUser);
client_method!(UserClient => fn generate_report() -> String as UserRequest::GenerateReport);
client_method!(UserClient => fn user_count() -> usize as UserRequest::UserCount);

#[cfg(any(test, feature = "test-support"))]
client_method!(UserClient => fn clear_store() -> () as UserRequest::ClearStore);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use crate::mock_framework::{create_mock_client, expect_create, expect_deactivate};

    #[tokio::test]
    async fn test_create_user_sends_payload() {
        let (client, mut receiver) = create_mock_client(10);

        let create_task = tokio::spawn(async move {
            client.create_user(UserCreate::new("Test", "test@example.com", 30)).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Test");
        assert_eq!(payload.age, 30);
        responder.send(Err(UserError::underage())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Err(UserError::underage()));
    }

    #[tokio::test]
    async fn test_deactivate_forwards_id() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.deactivate_user("user_7".to_string()).await });

        let (id, responder) = expect_deactivate(&mut receiver).await.expect("Expected Deactivate request");
        assert_eq!(id, "user_7");
        responder.send(Ok(true)).unwrap();

        assert_eq!(task.await.unwrap(), Ok(true));
    }

    #[tokio::test]
    async fn test_closed_actor_is_communication_error() {
        let (client, receiver) = create_mock_client(1);
        drop(receiver);

        let result = client.get_user("user_1".to_string()).await;
        assert_eq!(result, Err(UserError::ActorCommunicationError("Actor closed".to_string())));
    }

    #[tokio::test]
    async fn test_dropped_reply_is_communication_error() {
        let (client, mut receiver) = create_mock_client(1);

        let task = tokio::spawn(async move { client.generate_report().await });
        drop(receiver.recv().await);

        let result = task.await.unwrap();
        assert_eq!(result, Err(UserError::ActorCommunicationError("Actor dropped".to_string())));
    }
}
