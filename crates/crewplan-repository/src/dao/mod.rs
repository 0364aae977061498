//! DAO (Data Access Object) layer.
//!
//! DAOs provide low-level, single-source data access abstractions.
//! Each DAO interface maps to one data source.
//!
//! Hierarchy:
//! ```text
//! Service → Repository (interface + impl) → DAO (interface + impl) → DB
//! ```

pub mod user_dao;

pub mod r#impl;

pub use r#impl::MySqlUserDaoImpl;
pub use user_dao::UserDao;
