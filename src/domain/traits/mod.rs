//! Domain traits - Abstractions for infrastructure implementations

pub mod store;
pub mod wallet;

pub use store::SessionStore;
pub use wallet::WalletProvider;
