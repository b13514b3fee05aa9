//! LLM Providers

pub mod aiml;

pub use aiml::AimlProvider;
