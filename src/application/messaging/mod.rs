//! Message handling - intent detection and prompt construction

pub mod intent;
pub mod prompt;

pub use intent::IntentDetector;
pub use prompt::system_prompt;
