//! Repository trait definitions.

use async_trait::async_trait;
use crewplan_core::{CrewplanResult, Interface, User, UserId};

/// User repository trait — the Entity Store contract the service layer
/// depends on.
///
/// `find_all` returns the whole collection with relations materialized; the
/// service filters and pages in memory.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Retrieves the full user collection, relations included. No store-side
    /// filtering or paging.
    async fn find_all(&self) -> CrewplanResult<Vec<User>>;

    /// Finds a user by ID with all relation collections loaded.
    async fn find_by_id(&self, id: UserId) -> CrewplanResult<Option<User>>;

    /// Finds a user by ID, eagerly loading tasks and projects but omitting
    /// managed projects and project managers.
    async fn find_without_managed_projects(&self, id: UserId) -> CrewplanResult<Option<User>>;

    /// Finds a user by ID with the managed-projects relation loaded.
    async fn find_with_managed_projects(&self, id: UserId) -> CrewplanResult<Option<User>>;

    /// Persists a user: inserts (assigning the identifier) when new,
    /// otherwise updates, synchronizing owned relation rows to the entity's
    /// collections.
    async fn save(&self, user: &User) -> CrewplanResult<User>;

    /// Deletes a user row by ID.
    async fn delete_by_id(&self, id: UserId) -> CrewplanResult<()>;
}
