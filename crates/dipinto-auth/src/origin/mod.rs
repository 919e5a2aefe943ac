//! Request origin validation.

pub mod guard;

pub use guard::OriginGuard;
