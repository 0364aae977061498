//! # Crewplan Core
//!
//! Core types, errors, and domain entities for the Crewplan user-management
//! service. This crate provides the foundational abstractions shared by the
//! repository and service layers.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
