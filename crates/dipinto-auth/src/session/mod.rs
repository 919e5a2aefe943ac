//! Login orchestration and the credential lookup contract.

pub mod manager;
pub mod memory;
pub mod store;

pub use manager::SessionManager;
pub use memory::MemoryCredentialStore;
pub use store::CredentialStore;
