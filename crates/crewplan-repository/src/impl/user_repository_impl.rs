//! `UserRepositoryImpl` — repository layer implementation.
//!
//! Implements the [`UserRepository`] domain interface by coordinating a
//! [`UserDao`] instance:
//!
//! ```text
//! Service
//!   ↓ Arc<dyn UserRepository>
//! UserRepositoryImpl          ← coordinates DAOs
//!   ↓ Arc<dyn UserDao>
//! MySqlUserDaoImpl
//!   ↓
//! MySQL
//! ```
//!
//! [`UserRepository`]: crate::traits::UserRepository
//! [`UserDao`]: crate::dao::UserDao

use crate::{dao::UserDao, traits::UserRepository};
use async_trait::async_trait;
use crewplan_core::{CrewplanResult, User, UserId};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Repository implementation that delegates to a [`UserDao`].
///
/// [`UserDao`]: crate::dao::UserDao
#[derive(Component)]
#[shaku(interface = UserRepository)]
pub struct UserRepositoryImpl {
    /// Primary data access object.
    #[shaku(inject)]
    user_dao: Arc<dyn UserDao>,
}

impl UserRepositoryImpl {
    /// Creates a new `UserRepositoryImpl` with the given DAO.
    #[must_use]
    pub fn new(user_dao: Arc<dyn UserDao>) -> Self {
        Self { user_dao }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_all(&self) -> CrewplanResult<Vec<User>> {
        debug!("Repository: find_all");
        self.user_dao.find_all().await
    }

    async fn find_by_id(&self, id: UserId) -> CrewplanResult<Option<User>> {
        debug!("Repository: find_by_id {}", id);
        self.user_dao.find_by_id(id).await
    }

    async fn find_without_managed_projects(&self, id: UserId) -> CrewplanResult<Option<User>> {
        debug!("Repository: find_without_managed_projects {}", id);
        self.user_dao.find_without_managed_projects(id).await
    }

    async fn find_with_managed_projects(&self, id: UserId) -> CrewplanResult<Option<User>> {
        debug!("Repository: find_with_managed_projects {}", id);
        self.user_dao.find_with_managed_projects(id).await
    }

    async fn save(&self, user: &User) -> CrewplanResult<User> {
        debug!("Repository: save user {:?}", user.id);
        self.user_dao.save(user).await
    }

    async fn delete_by_id(&self, id: UserId) -> CrewplanResult<()> {
        debug!("Repository: delete_by_id {}", id);
        self.user_dao.delete_by_id(id).await
    }
}

impl std::fmt::Debug for UserRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRepositoryImpl").finish_non_exhaustive()
    }
}
