//! # Bulletin Core
//!
//! The domain layer of the Bulletin posts service.
//! This crate contains the post entity and storage port with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
