//! The synchronous user service: business rules over an owned store.

use tracing::{debug, info, warn};

use crate::config::IdStrategy;
use crate::domain::{User, UserAction, UserCreate};
use crate::error::UserError;
use crate::report;
use crate::resource_store::ResourceStore;

/// Creates, looks up, deactivates and reports on users.
///
/// The service exclusively owns its [`ResourceStore`]; every mutation goes
/// through the methods below.
pub struct UserService {
    store: ResourceStore<User>,
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}

impl UserService {
    /// Service with random UUID ids.
    pub fn new() -> Self {
        Self::with_id_strategy(&IdStrategy::Uuid)
    }

    pub fn with_id_strategy(strategy: &IdStrategy) -> Self {
        Self::with_store(ResourceStore::new(strategy.generator()))
    }

    pub fn with_store(store: ResourceStore<User>) -> Self {
        Self { store }
    }

    /// Registers a new active user.
    ///
    /// # Errors
    /// [`UserError::ValidationError`] when the payload's age is below
    /// [`crate::domain::MINIMUM_AGE`], or [`UserError::AlreadyExists`] when the
    /// id generator repeats an id. The store is left unchanged.
    pub fn create_user(&mut self, payload: UserCreate) -> Result<User, UserError> {
        debug!(user_name = %payload.name, user_email = %payload.email, "Creating user");
        match self.store.create(payload) {
            Ok(user) => {
                info!(user_id = %user.id, is_admin = user.is_admin, "User created successfully");
                Ok(user)
            }
            Err(e) => {
                warn!(error = %e, "User creation rejected");
                Err(e)
            }
        }
    }

    pub fn get_user_by_id(&self, id: &str) -> Option<User> {
        self.store.get(id).cloned()
    }

    /// Marks a non-admin user inactive.
    ///
    /// Returns `false` for unknown ids and for admins. Deactivating an
    /// already-inactive user returns `true` again.
    pub fn deactivate_user(&mut self, id: &str) -> bool {
        match self.store.perform_action(id, UserAction::Deactivate) {
            Some(Ok(true)) => {
                info!(user_id = %id, "User deactivated");
                true
            }
            Some(Ok(false)) => {
                warn!(user_id = %id, "Refusing to deactivate admin user");
                false
            }
            Some(Err(e)) => {
                warn!(user_id = %id, error = %e, "Deactivation failed");
                false
            }
            None => {
                debug!(user_id = %id, "User not found");
                false
            }
        }
    }

    pub fn generate_user_report(&self) -> String {
        report::render(self.store.iter())
    }

    pub fn user_count(&self) -> usize {
        self.store.len()
    }

    /// Drops every stored user. Test harnesses only.
    #[cfg(any(test, feature = "test-support"))]
    pub fn clear_store(&mut self) {
        self.store.clear();
    }
}
