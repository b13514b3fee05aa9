//! Application services - Business logic orchestration

pub mod chat_service;
pub mod payment_service;
pub mod wallet_service;

pub use chat_service::{ChatService, FailurePolicy};
pub use payment_service::PaymentService;
pub use wallet_service::WalletService;
