//! # Crewplan Service
//!
//! Business logic for the user-management service: filtered, paginated
//! listing plus the create/update/delete lifecycle with explicit cascade
//! handling.

pub mod dto;
pub mod mappers;
pub mod user_service;

pub mod r#impl;

pub use dto::*;
pub use r#impl::{UserServiceComponent, UserServiceImpl};
pub use user_service::*;
