use tracing::{error, info};

use crate::clients::UserClient;
use crate::config::RegistryConfig;
use crate::service::UserService;
use crate::user_actor::UserServiceActor;

/// Starts the user actor, hands out its client, and handles shutdown.
pub struct UserSystem {
    pub user_client: UserClient,
    handle: tokio::task::JoinHandle<()>,
}

impl UserSystem {
    /// Must be called from within a tokio runtime.
    pub fn start(config: RegistryConfig) -> Self {
        info!(buffer_size = config.buffer_size, id_strategy = ?config.id_strategy, "Starting user system");
        let service = UserService::with_id_strategy(&config.id_strategy);
        let (actor, user_client) = UserServiceActor::new(config.buffer_size, service);
        let handle = tokio::spawn(actor.run());

        Self { user_client, handle }
    }

    /// Closes the client channel and waits for the actor to drain.
    ///
    /// Clones of the client held elsewhere keep the actor alive until dropped.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
