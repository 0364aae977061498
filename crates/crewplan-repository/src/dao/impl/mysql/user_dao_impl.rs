//! MySQL user DAO implementation.
//!
//! Multi-table mutations (save, cascade delete) run inside one transaction
//! so a concurrent reader never observes a half-severed entity.

use crate::dao::UserDao;
use crate::pool::DatabasePoolInterface;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crewplan_core::{
    CrewplanError, CrewplanResult, Email, Project, ProjectId, ProjectManager, Task, TaskId, User,
    UserId,
};
use shaku::Component;
use sqlx::{FromRow, MySql, Transaction};
use std::sync::Arc;
use tracing::debug;

/// MySQL user DAO.
#[derive(Component)]
#[shaku(interface = UserDao)]
pub struct MySqlUserDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlUserDaoImpl {
    /// Creates a new MySQL user DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: Option<String>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: Some(UserId::from(row.id)),
            username: row.username,
            email: row.email.map(Email::new_unchecked),
            first_name: row.first_name,
            last_name: row.last_name,
            tasks: Vec::new(),
            projects: Vec::new(),
            managed_projects: Vec::new(),
            project_managers: Vec::new(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct TaskRow {
    id: i64,
    title: String,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: TaskId::from(row.id),
            title: row.title,
        }
    }
}

#[derive(Debug, FromRow)]
struct ProjectRow {
    id: i64,
    name: String,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: ProjectId::from(row.id),
            name: row.name,
        }
    }
}

#[derive(Debug, FromRow)]
struct ProjectManagerRow {
    project_id: i64,
    manager_id: i64,
}

impl From<ProjectManagerRow> for ProjectManager {
    fn from(row: ProjectManagerRow) -> Self {
        Self {
            project_id: ProjectId::from(row.project_id),
            manager_id: UserId::from(row.manager_id),
        }
    }
}

const SELECT_USER: &str = "SELECT id, username, email, first_name, last_name, \
                           created_at, updated_at FROM users";

impl MySqlUserDaoImpl {
    async fn fetch_user_row(&self, id: UserId) -> CrewplanResult<Option<User>> {
        let sql = format!("{} WHERE id = ?", SELECT_USER);
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(User::from))
    }

    async fn load_tasks(&self, id: UserId) -> CrewplanResult<Vec<Task>> {
        let rows = sqlx::query_as::<_, TaskRow>(
            "SELECT id, title FROM tasks WHERE user_id = ? ORDER BY id",
        )
        .bind(id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn load_projects(&self, id: UserId) -> CrewplanResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT p.id, p.name
            FROM projects p
            JOIN project_members pm ON pm.project_id = p.id
            WHERE pm.user_id = ?
            ORDER BY p.id
            "#,
        )
        .bind(id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn load_managed_projects(&self, id: UserId) -> CrewplanResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            "SELECT id, name FROM projects WHERE manager_id = ? ORDER BY id",
        )
        .bind(id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn load_project_managers(&self, id: UserId) -> CrewplanResult<Vec<ProjectManager>> {
        let rows = sqlx::query_as::<_, ProjectManagerRow>(
            r#"
            SELECT pm.project_id, p.manager_id
            FROM project_members pm
            JOIN projects p ON p.id = pm.project_id
            WHERE pm.user_id = ? AND p.manager_id IS NOT NULL
            ORDER BY pm.project_id
            "#,
        )
        .bind(id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(ProjectManager::from).collect())
    }

    /// Replaces the user's owned relation rows with the entity's collections.
    ///
    /// Rows no longer referenced are severed (membership rows deleted,
    /// task/manager foreign keys nulled), never left dangling.
    async fn sync_owned_relations(
        &self,
        tx: &mut Transaction<'_, MySql>,
        id: UserId,
        user: &User,
    ) -> CrewplanResult<()> {
        let uid = id.into_inner();

        sqlx::query("UPDATE tasks SET user_id = NULL WHERE user_id = ?")
            .bind(uid)
            .execute(&mut **tx)
            .await?;
        for task in &user.tasks {
            sqlx::query("UPDATE tasks SET user_id = ? WHERE id = ?")
                .bind(uid)
                .bind(task.id.into_inner())
                .execute(&mut **tx)
                .await?;
        }

        sqlx::query("DELETE FROM project_members WHERE user_id = ?")
            .bind(uid)
            .execute(&mut **tx)
            .await?;
        for project in &user.projects {
            sqlx::query("INSERT INTO project_members (user_id, project_id) VALUES (?, ?)")
                .bind(uid)
                .bind(project.id.into_inner())
                .execute(&mut **tx)
                .await?;
        }

        sqlx::query("UPDATE projects SET manager_id = NULL WHERE manager_id = ?")
            .bind(uid)
            .execute(&mut **tx)
            .await?;
        for project in &user.managed_projects {
            sqlx::query("UPDATE projects SET manager_id = ? WHERE id = ?")
                .bind(uid)
                .bind(project.id.into_inner())
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }
}

#[async_trait]
impl UserDao for MySqlUserDaoImpl {
    async fn find_all(&self) -> CrewplanResult<Vec<User>> {
        debug!("Loading full user collection");

        let sql = format!("{} ORDER BY id", SELECT_USER);
        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .fetch_all(self.pool.inner())
            .await?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            let id = UserId::from(row.id);
            let mut user = User::from(row);
            user.tasks = self.load_tasks(id).await?;
            user.projects = self.load_projects(id).await?;
            user.managed_projects = self.load_managed_projects(id).await?;
            user.project_managers = self.load_project_managers(id).await?;
            users.push(user);
        }

        Ok(users)
    }

    async fn find_by_id(&self, id: UserId) -> CrewplanResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let Some(mut user) = self.fetch_user_row(id).await? else {
            return Ok(None);
        };

        user.tasks = self.load_tasks(id).await?;
        user.projects = self.load_projects(id).await?;
        user.managed_projects = self.load_managed_projects(id).await?;
        user.project_managers = self.load_project_managers(id).await?;

        Ok(Some(user))
    }

    async fn find_without_managed_projects(&self, id: UserId) -> CrewplanResult<Option<User>> {
        debug!("Finding user by id (no managed projects): {}", id);

        let Some(mut user) = self.fetch_user_row(id).await? else {
            return Ok(None);
        };

        user.tasks = self.load_tasks(id).await?;
        user.projects = self.load_projects(id).await?;

        Ok(Some(user))
    }

    async fn find_with_managed_projects(&self, id: UserId) -> CrewplanResult<Option<User>> {
        debug!("Finding user by id (with managed projects): {}", id);

        let Some(mut user) = self.fetch_user_row(id).await? else {
            return Ok(None);
        };

        user.managed_projects = self.load_managed_projects(id).await?;

        Ok(Some(user))
    }

    async fn save(&self, user: &User) -> CrewplanResult<User> {
        let mut tx = self.pool.inner().begin().await?;

        let id = match user.id {
            Some(id) => {
                debug!("Updating user: {}", id);
                sqlx::query(
                    "UPDATE users SET username = ?, email = ?, first_name = ?, \
                     last_name = ?, updated_at = ? WHERE id = ?",
                )
                .bind(&user.username)
                .bind(user.email.as_ref().map(Email::as_str))
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(user.updated_at)
                .bind(id.into_inner())
                .execute(&mut *tx)
                .await?;
                id
            }
            None => {
                debug!("Inserting new user");
                let result = sqlx::query(
                    "INSERT INTO users (username, email, first_name, last_name, \
                     created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
                )
                .bind(&user.username)
                .bind(user.email.as_ref().map(Email::as_str))
                .bind(&user.first_name)
                .bind(&user.last_name)
                .bind(user.created_at)
                .bind(user.updated_at)
                .execute(&mut *tx)
                .await?;
                UserId::from(result.last_insert_id() as i64)
            }
        };

        self.sync_owned_relations(&mut tx, id, user).await?;
        tx.commit().await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| CrewplanError::internal("failed to fetch saved user"))
    }

    async fn delete_by_id(&self, id: UserId) -> CrewplanResult<()> {
        debug!("Deleting user: {}", id);

        let uid = id.into_inner();
        let mut tx = self.pool.inner().begin().await?;

        // Sweep any relation row that survived the service-level clear, so
        // the no-dangling-row invariant holds inside this transaction too.
        sqlx::query("DELETE FROM project_members WHERE user_id = ?")
            .bind(uid)
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE tasks SET user_id = NULL WHERE user_id = ?")
            .bind(uid)
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE projects SET manager_id = NULL WHERE manager_id = ?")
            .bind(uid)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(uid)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        if result.rows_affected() == 0 {
            debug!("No user row deleted for id {}", id);
        }
        Ok(())
    }
}

impl std::fmt::Debug for MySqlUserDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserDaoImpl").finish_non_exhaustive()
    }
}
