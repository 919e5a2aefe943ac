//! # dipinto-entity
//!
//! Domain types shared by the auth pipeline and its persistence
//! collaborator.

pub mod user;
