//! # dipinto-auth
//!
//! Stateless session authentication and authorization for the Dipinto
//! storefront.
//!
//! ## Modules
//!
//! - `password`: Argon2id credential verification with a decoy for unknown users
//! - `jwt`: session claims, token issuance, verification, and the renewal policy
//! - `rbac`: role guard over verified claims
//! - `origin`: exact-match request origin guard
//! - `session`: login orchestration and the credential lookup contract

pub mod jwt;
pub mod origin;
pub mod password;
pub mod rbac;
pub mod session;

pub use jwt::{
    Claims, IssuedToken, JwtDecoder, JwtEncoder, SessionDecision, SessionVerifier, TokenSigner,
};
pub use origin::OriginGuard;
pub use password::CredentialVerifier;
pub use rbac::RoleGuard;
pub use session::{CredentialStore, MemoryCredentialStore, SessionManager};
