//! # dipinto-database
//!
//! PostgreSQL connection pool and the `users`-table implementation of the
//! credential lookup contract.

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::user::UserRepository;
