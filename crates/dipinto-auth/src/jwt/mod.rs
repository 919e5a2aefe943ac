//! Session token claims, issuance, verification, and renewal.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod policy;
pub mod verifier;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::{IssuedToken, JwtEncoder, TokenSigner};
pub use policy::{RejectReason, SessionDecision, decide};
pub use verifier::{SessionVerifier, VerifiedSession};

/// Generic message for every token failure. Callers never learn which
/// check rejected the token.
pub const INVALID_SESSION: &str = "Invalid or missing session";
