//! User identity, role, and stored credential types.

pub mod credential;
pub mod role;
pub mod subject;

pub use credential::UserCredential;
pub use role::UserRole;
pub use subject::SubjectId;
