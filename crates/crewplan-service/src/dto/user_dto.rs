//! User-related DTOs.

use chrono::{DateTime, Utc};
use crewplan_core::{Project, ProjectId, ProjectManager, Task, TaskId, UserId};
use serde::{Deserialize, Serialize};

/// Caller-supplied user fields.
///
/// Applied onto an entity field by field: absent fields leave the target
/// untouched (merge, not overwrite-with-nulls).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Filter for the user listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserFilter {
    /// Retain only users whose identifier is a member of this set.
    /// `None` or an empty set applies no id filtering.
    pub ids: Option<Vec<UserId>>,
    /// Retain only users whose derived task id equals this value.
    pub task_id: Option<TaskId>,
}

/// Task view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    pub id: TaskId,
    pub title: String,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
        }
    }
}

/// Project view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectView {
    pub id: ProjectId,
    pub name: String,
}

impl From<&Project> for ProjectView {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
        }
    }
}

/// Manager relationship view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManagerView {
    pub project_id: ProjectId,
    pub manager_id: UserId,
}

impl From<&ProjectManager> for ProjectManagerView {
    fn from(pm: &ProjectManager) -> Self {
        Self {
            project_id: pm.project_id,
            manager_id: pm.manager_id,
        }
    }
}

/// User view returned by the read paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub id: Option<UserId>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub tasks: Vec<TaskView>,
    pub projects: Vec<ProjectView>,
    pub managed_projects: Vec<ProjectView>,
    /// Always absent on list and single-get paths; the view projection masks
    /// it regardless of what the entity holds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_managers: Option<Vec<ProjectManagerView>>,
    pub created_at: DateTime<Utc>,
}

/// Paginated user list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPage {
    pub users: Vec<UserView>,
    pub page: usize,
    pub size: usize,
    pub total_elements: u64,
    pub total_pages: u64,
}
