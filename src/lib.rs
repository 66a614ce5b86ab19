//! # Registry Recipe
//!
//! Two small in-process components:
//!
//! - [`Calculator`] - stateless arithmetic with checked division and square root.
//! - [`UserRegistry`] - users keyed by email, with registration, authentication,
//!   rename, password change and deletion.
//!
//! The registry itself is plain synchronous code. To share it across tasks,
//! put it behind a [`RegistryService`] actor and talk to it through the
//! cloneable [`RegistryClient`]; [`RegistrySystem`] does that wiring.
//!
//! ## Failures
//!
//! Bad input (malformed email, short password, blank name) is an `Err`.
//! Expected misses (duplicate email, wrong password, unknown user) are
//! `false` or `None`. Callers have to check both.
//!
//! ## Example Usage
//!
//! ```no_run
//! # async fn demo() -> Result<(), registry_recipe::UserError> {
//! use registry_recipe::{RegistrySystem, SystemConfig};
//!
//! let system = RegistrySystem::new(&SystemConfig::default());
//! let created = system
//!     .client
//!     .register("alice@example.com".into(), "s3cret".into(), "Alice".into())
//!     .await?;
//! assert!(created);
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod calculator;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod messages;
pub mod password;
pub mod registry;
pub mod service;
pub mod system;
pub mod telemetry;
pub mod validation;

#[cfg(test)]
mod mock;

pub use calculator::Calculator;
pub use client::RegistryClient;
pub use config::SystemConfig;
pub use domain::{NewUser, User};
pub use error::{CalcError, InvalidField, UserError};
pub use password::{PasswordScheme, PlainText};
pub use registry::{RegistryStats, UserRegistry};
pub use service::RegistryService;
pub use system::RegistrySystem;
pub use telemetry::setup_tracing;
