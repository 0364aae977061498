//! # Crewplan Repository
//!
//! Data access for the user-management service:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>  (domain interface)
//! UserRepositoryImpl            (repository impl — coordinates DAOs)
//!   ↓  Arc<dyn UserDao>         (DAO interface)
//! MySqlUserDaoImpl              (DAO impl — MySQL / SQLx)
//!   ↓
//! MySQL
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   traits.rs                    ← UserRepository trait
//!   pool.rs                      ← DatabasePool wrapper
//!   impl/
//!     user_repository_impl.rs    ← UserRepositoryImpl
//!   dao/
//!     user_dao.rs                ← UserDao trait
//!     impl/mysql/
//!       user_dao_impl.rs         ← MySqlUserDaoImpl
//! ```

pub mod dao;
pub mod pool;
pub mod traits;

pub mod r#impl;

pub use dao::{MySqlUserDaoImpl, UserDao};
pub use pool::*;
pub use r#impl::UserRepositoryImpl;
pub use traits::*;
