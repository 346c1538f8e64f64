//! Activities domain - the extracurricular roster and its signup rules
//!
//! Architecture:
//!   HTTP route → ActivityRegistry (single RwLock over the roster)

pub mod errors;
pub mod models;
pub mod registry;
pub mod seed;

// Re-export commonly used types
pub use errors::RegistryError;
pub use models::Activity;
pub use registry::{ActivityRegistry, Enrollment, EnrollmentChange, Roster};
