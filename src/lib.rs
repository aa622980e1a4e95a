//! # user-registry
//!
//! In-memory user management: register adults, look them up, deactivate
//! regular users, and render a status report.
//!
//! The core is the synchronous [`UserService`], which owns its
//! [`ResourceStore`]. For sharing one registry across tasks, [`UserSystem`]
//! runs the service inside an actor and hands out a cloneable [`UserClient`]
//! with the same operations as `async fn`s.
//!
//! ```
//! use user_registry::{UserCreate, UserService};
//!
//! let mut service = UserService::new();
//! let user = service.create_user(UserCreate::new("Alice", "alice@email.com", 28)).unwrap();
//! assert!(service.deactivate_user(&user.id));
//! assert!(service.generate_user_report().contains("Alice"));
//! ```

pub mod app_system;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod report;
pub mod resource_store;
pub mod service;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, UserSystem};
pub use clients::UserClient;
pub use config::{IdStrategy, RegistryConfig};
pub use domain::{User, UserAction, UserCreate, UserStatus, MINIMUM_AGE};
pub use error::UserError;
pub use resource_store::{Entity, ResourceStore};
pub use service::UserService;
