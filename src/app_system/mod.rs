//! System orchestration, startup, and shutdown logic.

pub mod tracing;
pub mod user_system;

pub use self::tracing::*;
pub use user_system::*;
