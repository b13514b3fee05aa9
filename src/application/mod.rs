//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: chat turns, payment simulation, wallet reporting
//! - Errors: Domain-specific errors
//! - Messaging: intent detection and prompt construction

pub mod errors;
pub mod services;
pub mod messaging;
