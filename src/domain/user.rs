use std::fmt;

/// Youngest age accepted at registration.
pub const MINIMUM_AGE: u32 = 18;

/// Lifecycle state of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ativo",
            UserStatus::Inactive => "inativo",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a registered user in the system.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub status: UserStatus,
    pub is_admin: bool,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// Payload for creating a new user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub is_admin: bool,
}

impl UserCreate {
    /// Creates a payload for a regular (non-admin) user.
    ///
    /// # Arguments
    /// * `name` - User's display name, stored verbatim
    /// * `email` - User's email address, stored verbatim
    /// * `age` - Must be at least [`MINIMUM_AGE`] for creation to succeed
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
            is_admin: false,
        }
    }

    /// Marks the user to be created as an admin.
    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }
}

/// Custom actions for User entities.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Moves a non-admin user to [`UserStatus::Inactive`].
    ///
    /// Yields `false` for admins, who cannot be deactivated.
    Deactivate,
}
