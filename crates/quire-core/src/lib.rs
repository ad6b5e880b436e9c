//! # Quire Core
//!
//! The domain layer of the Quire posts service.
//! This crate contains the post model, error taxonomy and storage ports,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
