//! Value objects.

pub mod email;

pub use email::{Email, EmailError};
