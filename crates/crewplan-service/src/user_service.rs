//! User service trait definition.

use crate::dto::{UserFilter, UserInput, UserPage, UserView};
use async_trait::async_trait;
use crewplan_core::{CrewplanResult, Interface, PageRequest, User, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Lists users with optional id-set and task-id filters, paged.
    ///
    /// Filtering and slicing happen in memory over the full collection; the
    /// response carries the total matching count so callers can compute page
    /// counts.
    async fn list_users(&self, filter: UserFilter, page: PageRequest) -> CrewplanResult<UserPage>;

    /// Lists users with no filters and the default page (first page of 10,
    /// sorted by identifier).
    async fn list_users_default(&self) -> CrewplanResult<UserPage>;

    /// Gets a single user view by ID. Fails with `NotFound` when absent.
    async fn get_user(&self, id: UserId) -> CrewplanResult<UserView>;

    /// Fetches the raw entity with its managed-projects relation loaded,
    /// for collaborators needing manager data. Returns `Ok(None)` when
    /// absent.
    async fn get_user_with_managed_projects(&self, id: UserId) -> CrewplanResult<Option<User>>;

    /// Creates a new user from the given fields. The store assigns the
    /// identifier; relation collections start empty.
    async fn create_user(&self, input: UserInput) -> CrewplanResult<UserView>;

    /// Merges the given fields onto an existing user. Fails with `NotFound`
    /// when absent. Relation collections are not reset.
    async fn update_user(&self, id: UserId, input: UserInput) -> CrewplanResult<UserView>;

    /// Deletes a user, clearing its owned relation collections first.
    /// Fails with `NotFound` when absent.
    async fn delete_user(&self, id: UserId) -> CrewplanResult<()>;
}
