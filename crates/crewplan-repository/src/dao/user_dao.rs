//! `UserDao` trait — low-level user data access abstraction.
//!
//! Implementations connect directly to a single data source. The
//! [`UserRepository`] uses a `UserDao` to fulfil domain-level operations.
//!
//! [`UserRepository`]: crate::traits::UserRepository

use async_trait::async_trait;
use crewplan_core::{CrewplanResult, Interface, User, UserId};

/// Low-level user data access object.
#[async_trait]
pub trait UserDao: Interface + Send + Sync {
    /// Retrieves the full user collection, relations included.
    async fn find_all(&self) -> CrewplanResult<Vec<User>>;

    /// Finds a user by ID with all relation collections loaded.
    async fn find_by_id(&self, id: UserId) -> CrewplanResult<Option<User>>;

    /// Finds a user by ID, loading tasks and projects but not managed
    /// projects or project managers.
    async fn find_without_managed_projects(&self, id: UserId) -> CrewplanResult<Option<User>>;

    /// Finds a user by ID with the managed-projects relation loaded.
    async fn find_with_managed_projects(&self, id: UserId) -> CrewplanResult<Option<User>>;

    /// Inserts or updates a user and synchronizes its owned relation rows.
    async fn save(&self, user: &User) -> CrewplanResult<User>;

    /// Deletes a user row by ID.
    async fn delete_by_id(&self, id: UserId) -> CrewplanResult<()>;
}
