//! User service implementations.

use crate::dto::{UserFilter, UserInput, UserPage, UserView};
use crate::mappers::{merge_from, to_view};
use crate::user_service::UserService;
use async_trait::async_trait;
use crewplan_core::{CrewplanError, CrewplanResult, Page, PageRequest, SortKey, User, UserId};
use crewplan_repository::UserRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Filters, sorts, and slices the materialized collection.
///
/// The store hands back the whole collection; both filters are pure
/// in-memory predicates and the page is cut out of the filtered sequence.
/// An offset past the end yields an empty page, never an error, and the
/// total always reflects the filtered (pre-slice) count.
fn filter_and_page(mut users: Vec<User>, filter: &UserFilter, page: PageRequest) -> UserPage {
    if let Some(ids) = &filter.ids {
        if !ids.is_empty() {
            users.retain(|u| u.id.is_some_and(|id| ids.contains(&id)));
        }
    }

    if let Some(task_id) = filter.task_id {
        users.retain(|u| u.task_id() == Some(task_id));
    }

    match page.sort {
        SortKey::Id => users.sort_by_key(|u| u.id),
    }

    let views: Vec<UserView> = users.iter().map(to_view).collect();
    let total = views.len();

    let start = page.offset();
    let end = std::cmp::min(start + page.limit(), total);
    let content = if start <= end {
        views[start..end].to_vec()
    } else {
        Vec::new()
    };

    UserPage::from(Page::new(content, page.page, page.size, total as u64))
}

/// Generic user service implementation (non-DI).
pub struct UserServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn list_users(&self, filter: UserFilter, page: PageRequest) -> CrewplanResult<UserPage> {
        debug!("Listing users, page: {}, size: {}", page.page, page.size);

        let users = self.user_repository.find_all().await?;
        Ok(filter_and_page(users, &filter, page))
    }

    async fn list_users_default(&self) -> CrewplanResult<UserPage> {
        self.list_users(UserFilter::default(), PageRequest::default())
            .await
    }

    async fn get_user(&self, id: UserId) -> CrewplanResult<UserView> {
        debug!("Getting user: {}", id);

        let user = self
            .user_repository
            .find_without_managed_projects(id)
            .await?
            .ok_or_else(|| CrewplanError::not_found("User", id))?;

        Ok(to_view(&user))
    }

    async fn get_user_with_managed_projects(&self, id: UserId) -> CrewplanResult<Option<User>> {
        debug!("Getting user with managed projects: {}", id);

        self.user_repository.find_with_managed_projects(id).await
    }

    async fn create_user(&self, input: UserInput) -> CrewplanResult<UserView> {
        debug!("Creating user");

        let mut user = User::new();
        merge_from(&input, &mut user)?;

        // A freshly created user starts with no relations, whatever the
        // merge step may have set.
        user.tasks = Vec::new();
        user.projects = Vec::new();
        user.managed_projects = Vec::new();

        let saved = self.user_repository.save(&user).await?;

        info!("User created: {:?}", saved.id);
        Ok(to_view(&saved))
    }

    async fn update_user(&self, id: UserId, input: UserInput) -> CrewplanResult<UserView> {
        debug!("Updating user: {}", id);

        let mut user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CrewplanError::not_found("User", id))?;

        merge_from(&input, &mut user)?;

        let saved = self.user_repository.save(&user).await?;

        info!("User updated: {}", id);
        Ok(to_view(&saved))
    }

    async fn delete_user(&self, id: UserId) -> CrewplanResult<()> {
        debug!("Deleting user: {}", id);

        let mut user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CrewplanError::not_found("User", id))?;

        // All three owned collections are severed before the row goes away,
        // so no dangling relation row can survive the delete.
        user.tasks.clear();
        user.managed_projects.clear();
        user.projects.clear();
        self.user_repository.save(&user).await?;

        self.user_repository.delete_by_id(id).await?;

        info!("User deleted: {}", id);
        Ok(())
    }
}

impl<R: UserRepository> std::fmt::Debug for UserServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}

/// Concrete user service component for Shaku DI.
///
/// Receives its repository through compile-time verified injection.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceComponent {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
}

#[async_trait]
impl UserService for UserServiceComponent {
    async fn list_users(&self, filter: UserFilter, page: PageRequest) -> CrewplanResult<UserPage> {
        debug!("Listing users, page: {}, size: {}", page.page, page.size);

        let users = self.user_repository.find_all().await?;
        Ok(filter_and_page(users, &filter, page))
    }

    async fn list_users_default(&self) -> CrewplanResult<UserPage> {
        self.list_users(UserFilter::default(), PageRequest::default())
            .await
    }

    async fn get_user(&self, id: UserId) -> CrewplanResult<UserView> {
        debug!("Getting user: {}", id);

        let user = self
            .user_repository
            .find_without_managed_projects(id)
            .await?
            .ok_or_else(|| CrewplanError::not_found("User", id))?;

        Ok(to_view(&user))
    }

    async fn get_user_with_managed_projects(&self, id: UserId) -> CrewplanResult<Option<User>> {
        debug!("Getting user with managed projects: {}", id);

        self.user_repository.find_with_managed_projects(id).await
    }

    async fn create_user(&self, input: UserInput) -> CrewplanResult<UserView> {
        debug!("Creating user");

        let mut user = User::new();
        merge_from(&input, &mut user)?;

        user.tasks = Vec::new();
        user.projects = Vec::new();
        user.managed_projects = Vec::new();

        let saved = self.user_repository.save(&user).await?;

        info!("User created: {:?}", saved.id);
        Ok(to_view(&saved))
    }

    async fn update_user(&self, id: UserId, input: UserInput) -> CrewplanResult<UserView> {
        debug!("Updating user: {}", id);

        let mut user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CrewplanError::not_found("User", id))?;

        merge_from(&input, &mut user)?;

        let saved = self.user_repository.save(&user).await?;

        info!("User updated: {}", id);
        Ok(to_view(&saved))
    }

    async fn delete_user(&self, id: UserId) -> CrewplanResult<()> {
        debug!("Deleting user: {}", id);

        let mut user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CrewplanError::not_found("User", id))?;

        user.tasks.clear();
        user.managed_projects.clear();
        user.projects.clear();
        self.user_repository.save(&user).await?;

        self.user_repository.delete_by_id(id).await?;

        info!("User deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for UserServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceComponent").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewplan_core::{Project, ProjectId, ProjectManager, Task, TaskId};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    /// In-memory repository that assigns identifiers like the store would.
    struct MockUserRepository {
        users: Mutex<HashMap<i64, User>>,
        next_id: AtomicI64,
        last_saved: Mutex<Option<User>>,
    }

    impl MockUserRepository {
        fn new() -> Self {
            Self {
                users: Mutex::new(HashMap::new()),
                next_id: AtomicI64::new(1),
                last_saved: Mutex::new(None),
            }
        }

        fn with_users(users: Vec<User>) -> Self {
            let repo = Self::new();
            for user in users {
                let id = user
                    .id
                    .map_or_else(|| repo.next_id.fetch_add(1, Ordering::SeqCst), UserId::into_inner);
                let mut user = user;
                user.id = Some(UserId::from(id));
                repo.users.lock().unwrap().insert(id, user);
                repo.next_id.fetch_max(id + 1, Ordering::SeqCst);
            }
            repo
        }

        fn user_count(&self) -> usize {
            self.users.lock().unwrap().len()
        }

        fn last_saved(&self) -> Option<User> {
            self.last_saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_all(&self) -> CrewplanResult<Vec<User>> {
            let mut users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
            users.sort_by_key(|u| u.id);
            Ok(users)
        }

        async fn find_by_id(&self, id: UserId) -> CrewplanResult<Option<User>> {
            Ok(self.users.lock().unwrap().get(&id.into_inner()).cloned())
        }

        async fn find_without_managed_projects(&self, id: UserId) -> CrewplanResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .get(&id.into_inner())
                .cloned()
                .map(|mut u| {
                    u.managed_projects = Vec::new();
                    u
                }))
        }

        async fn find_with_managed_projects(&self, id: UserId) -> CrewplanResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .get(&id.into_inner())
                .cloned()
                .map(|mut u| {
                    u.tasks = Vec::new();
                    u.projects = Vec::new();
                    u.project_managers = Vec::new();
                    u
                }))
        }

        async fn save(&self, user: &User) -> CrewplanResult<User> {
            let mut user = user.clone();
            let id = match user.id {
                Some(id) => id,
                None => {
                    let id = UserId::from(self.next_id.fetch_add(1, Ordering::SeqCst));
                    user.id = Some(id);
                    id
                }
            };
            self.users.lock().unwrap().insert(id.into_inner(), user.clone());
            *self.last_saved.lock().unwrap() = Some(user.clone());
            Ok(user)
        }

        async fn delete_by_id(&self, id: UserId) -> CrewplanResult<()> {
            self.users.lock().unwrap().remove(&id.into_inner());
            Ok(())
        }
    }

    fn task(id: i64) -> Task {
        Task {
            id: TaskId::from(id),
            title: format!("task-{}", id),
        }
    }

    fn project(id: i64, name: &str) -> Project {
        Project {
            id: ProjectId::from(id),
            name: name.to_string(),
        }
    }

    fn user_with_id(id: i64, username: &str) -> User {
        let mut user = User::new();
        user.id = Some(UserId::from(id));
        user.username = Some(username.to_string());
        user
    }

    fn create_service(repo: MockUserRepository) -> UserServiceImpl<MockUserRepository> {
        UserServiceImpl::new(Arc::new(repo))
    }

    // =========================================================================
    // Listing
    // =========================================================================

    #[tokio::test]
    async fn test_list_users_no_filter_returns_all() {
        let repo = MockUserRepository::with_users(vec![
            user_with_id(1, "u1"),
            user_with_id(2, "u2"),
            user_with_id(3, "u3"),
        ]);
        let service = create_service(repo);

        let page = service
            .list_users(UserFilter::default(), PageRequest::new(0, 10))
            .await
            .unwrap();

        assert_eq!(page.users.len(), 3);
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_list_users_sorted_by_id() {
        // Insertion order deliberately scrambled.
        let repo = MockUserRepository::with_users(vec![
            user_with_id(3, "u3"),
            user_with_id(1, "u1"),
            user_with_id(2, "u2"),
        ]);
        let service = create_service(repo);

        let page = service.list_users_default().await.unwrap();

        let ids: Vec<i64> = page
            .users
            .iter()
            .map(|v| v.id.unwrap().into_inner())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_list_users_id_filter_retains_only_members() {
        let repo = MockUserRepository::with_users(vec![
            user_with_id(1, "u1"),
            user_with_id(2, "u2"),
            user_with_id(3, "u3"),
        ]);
        let service = create_service(repo);

        let filter = UserFilter {
            ids: Some(vec![UserId::from(1), UserId::from(3)]),
            task_id: None,
        };
        let page = service
            .list_users(filter, PageRequest::new(0, 10))
            .await
            .unwrap();

        assert_eq!(page.total_elements, 2);
        let ids: Vec<i64> = page
            .users
            .iter()
            .map(|v| v.id.unwrap().into_inner())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_list_users_empty_id_filter_applies_nothing() {
        let repo = MockUserRepository::with_users(vec![
            user_with_id(1, "u1"),
            user_with_id(2, "u2"),
        ]);
        let service = create_service(repo);

        let filter = UserFilter {
            ids: Some(Vec::new()),
            task_id: None,
        };
        let page = service
            .list_users(filter, PageRequest::new(0, 10))
            .await
            .unwrap();

        assert_eq!(page.total_elements, 2);
    }

    #[tokio::test]
    async fn test_list_users_task_id_filter() {
        // Users {1,2,3} with derived task ids {10,10,20}.
        let mut u1 = user_with_id(1, "u1");
        u1.tasks = vec![task(10)];
        let mut u2 = user_with_id(2, "u2");
        u2.tasks = vec![task(10)];
        let mut u3 = user_with_id(3, "u3");
        u3.tasks = vec![task(20)];
        let repo = MockUserRepository::with_users(vec![u1, u2, u3]);
        let service = create_service(repo);

        let filter = UserFilter {
            ids: None,
            task_id: Some(TaskId::from(10)),
        };
        let page = service
            .list_users(filter, PageRequest::new(0, 10))
            .await
            .unwrap();

        assert_eq!(page.total_elements, 2);
        let ids: Vec<i64> = page
            .users
            .iter()
            .map(|v| v.id.unwrap().into_inner())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_list_users_combined_filters() {
        let mut u1 = user_with_id(1, "u1");
        u1.tasks = vec![task(10)];
        let mut u2 = user_with_id(2, "u2");
        u2.tasks = vec![task(10)];
        let repo = MockUserRepository::with_users(vec![u1, u2]);
        let service = create_service(repo);

        let filter = UserFilter {
            ids: Some(vec![UserId::from(2)]),
            task_id: Some(TaskId::from(10)),
        };
        let page = service
            .list_users(filter, PageRequest::new(0, 10))
            .await
            .unwrap();

        assert_eq!(page.total_elements, 1);
        assert_eq!(page.users[0].id, Some(UserId::from(2)));
    }

    #[tokio::test]
    async fn test_list_users_page_slicing() {
        let repo = MockUserRepository::with_users(
            (1..=5).map(|i| user_with_id(i, &format!("u{}", i))).collect(),
        );
        let service = create_service(repo);

        let page = service
            .list_users(UserFilter::default(), PageRequest::new(1, 2))
            .await
            .unwrap();

        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
        let ids: Vec<i64> = page
            .users
            .iter()
            .map(|v| v.id.unwrap().into_inner())
            .collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[tokio::test]
    async fn test_list_users_offset_beyond_total_yields_empty_page() {
        let repo = MockUserRepository::with_users(vec![
            user_with_id(1, "u1"),
            user_with_id(2, "u2"),
        ]);
        let service = create_service(repo);

        let page = service
            .list_users(UserFilter::default(), PageRequest::new(5, 10))
            .await
            .unwrap();

        assert!(page.users.is_empty());
        // The total still reflects the true filtered count.
        assert_eq!(page.total_elements, 2);
    }

    #[tokio::test]
    async fn test_list_users_empty_store_default_page() {
        let service = create_service(MockUserRepository::new());

        let page = service.list_users_default().await.unwrap();

        assert!(page.users.is_empty());
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.page, 0);
        assert_eq!(page.size, 10);
    }

    #[tokio::test]
    async fn test_list_users_masks_project_managers() {
        let mut user = user_with_id(1, "lead");
        user.project_managers = vec![ProjectManager {
            project_id: ProjectId::from(4),
            manager_id: UserId::from(9),
        }];
        let repo = MockUserRepository::with_users(vec![user]);
        let service = create_service(repo);

        let page = service.list_users_default().await.unwrap();

        assert_eq!(page.users.len(), 1);
        assert!(page.users[0].project_managers.is_none());
    }

    // =========================================================================
    // Single lookup
    // =========================================================================

    #[tokio::test]
    async fn test_get_user_success() {
        let mut user = user_with_id(7, "ada");
        user.tasks = vec![task(1)];
        user.projects = vec![project(2, "apollo")];
        let repo = MockUserRepository::with_users(vec![user]);
        let service = create_service(repo);

        let view = service.get_user(UserId::from(7)).await.unwrap();

        assert_eq!(view.id, Some(UserId::from(7)));
        assert_eq!(view.username.as_deref(), Some("ada"));
        assert_eq!(view.tasks.len(), 1);
        assert_eq!(view.projects.len(), 1);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let service = create_service(MockUserRepository::new());

        let result = service.get_user(UserId::from(99)).await;
        assert!(matches!(result, Err(CrewplanError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_user_never_exposes_project_managers() {
        let mut user = user_with_id(1, "lead");
        user.project_managers = vec![ProjectManager {
            project_id: ProjectId::from(2),
            manager_id: UserId::from(3),
        }];
        let repo = MockUserRepository::with_users(vec![user]);
        let service = create_service(repo);

        let view = service.get_user(UserId::from(1)).await.unwrap();
        assert!(view.project_managers.is_none());
    }

    #[tokio::test]
    async fn test_get_user_with_managed_projects_found() {
        let mut user = user_with_id(1, "lead");
        user.managed_projects = vec![project(5, "gemini")];
        let repo = MockUserRepository::with_users(vec![user]);
        let service = create_service(repo);

        let found = service
            .get_user_with_managed_projects(UserId::from(1))
            .await
            .unwrap()
            .expect("user exists");
        assert_eq!(found.managed_projects.len(), 1);
    }

    #[tokio::test]
    async fn test_get_user_with_managed_projects_absent_is_none() {
        let service = create_service(MockUserRepository::new());

        let result = service
            .get_user_with_managed_projects(UserId::from(42))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    // =========================================================================
    // Creation
    // =========================================================================

    #[tokio::test]
    async fn test_create_user_assigns_id_and_empty_collections() {
        let service = create_service(MockUserRepository::new());

        let input = UserInput {
            username: Some("ada".to_string()),
            ..UserInput::default()
        };
        let view = service.create_user(input).await.unwrap();

        assert!(view.id.is_some());
        assert!(view.tasks.is_empty());
        assert!(view.projects.is_empty());
        assert!(view.managed_projects.is_empty());
    }

    #[tokio::test]
    async fn test_create_user_ids_are_unique() {
        let service = create_service(MockUserRepository::new());

        let first = service.create_user(UserInput::default()).await.unwrap();
        let second = service.create_user(UserInput::default()).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_create_user_merges_fields() {
        let service = create_service(MockUserRepository::new());

        let input = UserInput {
            username: Some("ada".to_string()),
            email: Some("ada@example.com".to_string()),
            first_name: Some("Ada".to_string()),
            last_name: None,
        };
        let view = service.create_user(input).await.unwrap();

        assert_eq!(view.username.as_deref(), Some("ada"));
        assert_eq!(view.email.as_deref(), Some("ada@example.com"));
        assert_eq!(view.first_name.as_deref(), Some("Ada"));
        assert!(view.last_name.is_none());
    }

    #[tokio::test]
    async fn test_create_user_invalid_email_fails() {
        let service = create_service(MockUserRepository::new());

        let input = UserInput {
            email: Some("not-an-email".to_string()),
            ..UserInput::default()
        };
        let result = service.create_user(input).await;
        assert!(matches!(result, Err(CrewplanError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let repo = MockUserRepository::new();
        let service = create_service(repo);

        let input = UserInput {
            username: Some("grace".to_string()),
            ..UserInput::default()
        };
        let created = service.create_user(input).await.unwrap();
        let id = created.id.unwrap();

        let fetched = service.get_user(id).await.unwrap();
        assert_eq!(fetched.username.as_deref(), Some("grace"));
    }

    // =========================================================================
    // Update
    // =========================================================================

    #[tokio::test]
    async fn test_update_user_merges_partial_input() {
        let mut user = user_with_id(1, "ada");
        user.first_name = Some("Ada".to_string());
        user.last_name = Some("Lovelace".to_string());
        let repo = MockUserRepository::with_users(vec![user]);
        let service = create_service(repo);

        let input = UserInput {
            first_name: Some("Augusta".to_string()),
            ..UserInput::default()
        };
        let view = service.update_user(UserId::from(1), input).await.unwrap();

        assert_eq!(view.first_name.as_deref(), Some("Augusta"));
        // Fields absent from the input keep their persisted values.
        assert_eq!(view.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(view.username.as_deref(), Some("ada"));
    }

    #[tokio::test]
    async fn test_update_user_keeps_relation_collections() {
        let mut user = user_with_id(1, "ada");
        user.tasks = vec![task(3)];
        user.projects = vec![project(4, "apollo")];
        let repo = MockUserRepository::with_users(vec![user]);
        let service = create_service(repo);

        let input = UserInput {
            username: Some("countess".to_string()),
            ..UserInput::default()
        };
        let view = service.update_user(UserId::from(1), input).await.unwrap();

        assert_eq!(view.tasks.len(), 1);
        assert_eq!(view.projects.len(), 1);
    }

    #[tokio::test]
    async fn test_update_user_not_found_leaves_store_untouched() {
        let repo = MockUserRepository::new();
        let service = create_service(repo);

        let input = UserInput {
            first_name: Some("X".to_string()),
            ..UserInput::default()
        };
        let result = service.update_user(UserId::from(5), input).await;

        assert!(matches!(result, Err(CrewplanError::NotFound { .. })));
        assert_eq!(service.user_repository.user_count(), 0);
        assert!(service.user_repository.last_saved().is_none());
    }

    // =========================================================================
    // Deletion
    // =========================================================================

    #[tokio::test]
    async fn test_delete_user_removes_from_listing() {
        let repo = MockUserRepository::with_users(vec![
            user_with_id(1, "u1"),
            user_with_id(2, "u2"),
        ]);
        let service = create_service(repo);

        service.delete_user(UserId::from(1)).await.unwrap();

        let page = service.list_users_default().await.unwrap();
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.users[0].id, Some(UserId::from(2)));
    }

    #[tokio::test]
    async fn test_delete_user_clears_collections_before_delete() {
        let mut user = user_with_id(1, "doomed");
        user.tasks = vec![task(1)];
        user.projects = vec![project(2, "apollo")];
        user.managed_projects = vec![project(3, "gemini")];
        let repo = MockUserRepository::with_users(vec![user]);
        let service = create_service(repo);

        service.delete_user(UserId::from(1)).await.unwrap();

        // The severed state was persisted before the delete call.
        let severed = service
            .user_repository
            .last_saved()
            .expect("severed state saved");
        assert!(severed.tasks.is_empty());
        assert!(severed.projects.is_empty());
        assert!(severed.managed_projects.is_empty());
        assert_eq!(service.user_repository.user_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let service = create_service(MockUserRepository::new());

        let result = service.delete_user(UserId::from(9)).await;
        assert!(matches!(result, Err(CrewplanError::NotFound { .. })));
    }
}
