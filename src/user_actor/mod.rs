//! Actor that owns a [`UserService`] and serves typed requests over a channel.

pub mod entity;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

use crate::clients::UserClient;
use crate::domain::{User, UserCreate};
use crate::error::UserError;
use crate::service::UserService;

pub type ServiceResponse<T> = oneshot::Sender<Result<T, UserError>>;

/// Typed messages for the user actor. Each variant carries its parameters
/// and a oneshot channel for the reply.
#[derive(Debug)]
pub enum UserRequest {
    CreateUser {
        payload: UserCreate,
        respond_to: ServiceResponse<User>,
    },
    GetUser {
        id: String,
        respond_to: ServiceResponse<Option<User>>,
    },
    DeactivateUser {
        id: String,
        respond_to: ServiceResponse<bool>,
    },
    GenerateReport {
        respond_to: ServiceResponse<String>,
    },
    UserCount {
        respond_to: ServiceResponse<usize>,
    },
    #[cfg(any(test, feature = "test-support"))]
    ClearStore {
        respond_to: ServiceResponse<()>,
    },
}

pub struct UserServiceActor {
    receiver: mpsc::Receiver<UserRequest>,
    service: UserService,
}

impl UserServiceActor {
    pub fn new(buffer_size: usize, service: UserService) -> (Self, UserClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, service };
        (actor, UserClient::new(sender))
    }

    /// Serves requests until every client has been dropped.
    #[instrument(name = "user_service", skip(self))]
    pub async fn run(mut self) {
        info!("UserService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                UserRequest::CreateUser { payload, respond_to } => {
                    self.handle_create_user(payload, respond_to);
                }
                UserRequest::GetUser { id, respond_to } => {
                    self.handle_get_user(id, respond_to);
                }
                UserRequest::DeactivateUser { id, respond_to } => {
                    self.handle_deactivate_user(id, respond_to);
                }
                UserRequest::GenerateReport { respond_to } => {
                    let _ = respond_to.send(Ok(self.service.generate_user_report()));
                }
                UserRequest::UserCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.service.user_count()));
                }
                #[cfg(any(test, feature = "test-support"))]
                UserRequest::ClearStore { respond_to } => {
                    self.service.clear_store();
                    let _ = respond_to.send(Ok(()));
                }
            }
        }
        info!("UserService stopped");
    }

    #[instrument(skip(self, payload, respond_to), fields(user_name = %payload.name, user_email = %payload.email))]
    fn handle_create_user(&mut self, payload: UserCreate, respond_to: ServiceResponse<User>) {
        debug!("Processing create_user request");
        let _ = respond_to.send(self.service.create_user(payload));
    }

    #[instrument(skip(self, id, respond_to), fields(user_id = %id))]
    fn handle_get_user(&self, id: String, respond_to: ServiceResponse<Option<User>>) {
        debug!("Processing get_user request");
        let user = self.service.get_user_by_id(&id);
        match &user {
            Some(user) => info!(user_name = %user.name, "User found"),
            None => debug!("User not found"),
        }
        let _ = respond_to.send(Ok(user));
    }

    #[instrument(skip(self, id, respond_to), fields(user_id = %id))]
    fn handle_deactivate_user(&mut self, id: String, respond_to: ServiceResponse<bool>) {
        debug!("Processing deactivate_user request");
        let _ = respond_to.send(Ok(self.service.deactivate_user(&id)));
    }
}
