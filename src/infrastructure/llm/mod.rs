//! LLM integration - OpenAI-compatible chat completions

pub mod traits;
pub mod config;
pub mod providers;


pub use traits::{LLM, LLMResponse, LLMError, LLMResult};
pub use config::LLMConfig;
pub use providers::AimlProvider;
