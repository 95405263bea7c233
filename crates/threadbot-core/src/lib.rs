//! # threadbot-core
//!
//! Foundation crate for the threadbot query router.
//! Defines the shared types, capability traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ThreadbotConfig;
pub use errors::{ThreadbotError, ThreadbotResult};
pub use intent::Intent;
pub use models::{FeatureVector, Neighbor, RoutingDecision, ThreadId, ThreadRecord};
