use crate::domain::{User, UserAction, UserCreate, UserStatus, MINIMUM_AGE};
use crate::error::UserError;
use crate::resource_store::Entity;

impl Entity for User {
    type Id = String;
    type CreatePayload = UserCreate;
    type Action = UserAction;
    type ActionResult = bool;
    type Error = UserError;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new active User from creation parameters.
    ///
    /// # Errors
    /// Returns [`UserError::ValidationError`] when `age` is below [`MINIMUM_AGE`].
    fn from_create(id: String, params: UserCreate) -> Result<Self, UserError> {
        if params.age < MINIMUM_AGE {
            return Err(UserError::underage());
        }
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            age: params.age,
            status: UserStatus::Active,
            is_admin: params.is_admin,
        })
    }

    fn already_exists(id: &String) -> UserError {
        UserError::AlreadyExists(id.clone())
    }

    /// Handles user-specific actions.
    ///
    /// # Actions
    /// - `Deactivate`: marks a regular user inactive and yields `true`;
    ///   admins are left untouched and yield `false`
    fn handle_action(&mut self, action: UserAction) -> Result<bool, UserError> {
        match action {
            UserAction::Deactivate => {
                if self.is_admin {
                    return Ok(false);
                }
                self.status = UserStatus::Inactive;
                Ok(true)
            }
        }
    }
}
