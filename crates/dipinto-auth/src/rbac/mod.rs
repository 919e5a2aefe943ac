//! Role-based access control over verified session claims.

pub mod guard;

pub use guard::RoleGuard;
