//! Task entity.

use crate::TaskId;
use serde::{Deserialize, Serialize};

/// Task reference as seen from a user's `tasks` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Short task description.
    pub title: String,
}
