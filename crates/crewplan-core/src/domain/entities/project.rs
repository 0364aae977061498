//! Project entity and the project-manager relationship row.

use crate::{ProjectId, UserId};
use serde::{Deserialize, Serialize};

/// Project reference as seen from a user's relation collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
}

/// A manager relationship row: who manages one of the user's projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManager {
    /// The project being managed.
    pub project_id: ProjectId,
    /// The managing user.
    pub manager_id: UserId,
}
