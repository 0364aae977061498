//! User entity.

use super::{Project, ProjectManager, Task};
use crate::domain::value_objects::Email;
use crate::{TaskId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity with its owned relation collections.
///
/// The identifier is assigned by the store on first save and never
/// reassigned. Profile fields are optional because they are populated by a
/// field-level merge from caller input; absent fields stay unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier. `None` until first persisted.
    pub id: Option<UserId>,

    /// Login/display name.
    pub username: Option<String>,

    /// Contact email.
    pub email: Option<Email>,

    /// Given name.
    pub first_name: Option<String>,

    /// Family name.
    pub last_name: Option<String>,

    /// Tasks owned by this user. Cleared before the user is deleted.
    pub tasks: Vec<Task>,

    /// Projects this user participates in. Cleared before deletion.
    pub projects: Vec<Project>,

    /// Projects this user manages. Cleared before deletion.
    pub managed_projects: Vec<Project>,

    /// Derived manager relationships over the user's projects.
    ///
    /// Never exposed through list or single-get views; the view mapper masks
    /// this field instead of mutating the entity.
    pub project_managers: Vec<ProjectManager>,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, unsaved user with no profile data and empty relations.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: None,
            username: None,
            email: None,
            first_name: None,
            last_name: None,
            tasks: Vec::new(),
            projects: Vec::new(),
            managed_projects: Vec::new(),
            project_managers: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The identifier of the user's primary (first) task, if any.
    ///
    /// Derived from the `tasks` collection; used only as a listing filter
    /// key and not independently mutable.
    #[must_use]
    pub fn task_id(&self) -> Option<TaskId> {
        self.tasks.first().map(|t| t.id)
    }

    /// Returns the user's full name, if any name parts are set.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }

    /// Marks the entity as modified.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}
