//! Entity-DTO mappers.

use crate::dto::{ProjectView, TaskView, UserInput, UserPage, UserView};
use crewplan_core::{CrewplanError, CrewplanResult, Email, Page, User};

/// Projects a user entity to its view.
///
/// `project_managers` is always masked here: the read contract never exposes
/// it, and masking in the projection keeps the entity untouched.
#[must_use]
pub fn to_view(user: &User) -> UserView {
    UserView {
        id: user.id,
        username: user.username.clone(),
        email: user.email.as_ref().map(|e| e.as_str().to_string()),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        tasks: user.tasks.iter().map(TaskView::from).collect(),
        projects: user.projects.iter().map(ProjectView::from).collect(),
        managed_projects: user.managed_projects.iter().map(ProjectView::from).collect(),
        project_managers: None,
        created_at: user.created_at,
    }
}

/// Applies the fields present in `input` onto `user`.
///
/// Absent fields keep their current values — a field-level merge, not a
/// replacement. The entity's update timestamp is touched.
pub fn merge_from(input: &UserInput, user: &mut User) -> CrewplanResult<()> {
    if let Some(username) = &input.username {
        user.username = Some(username.clone());
    }
    if let Some(email) = &input.email {
        let email = Email::new(email).map_err(|e| CrewplanError::validation(e.to_string()))?;
        user.email = Some(email);
    }
    if let Some(first_name) = &input.first_name {
        user.first_name = Some(first_name.clone());
    }
    if let Some(last_name) = &input.last_name {
        user.last_name = Some(last_name.clone());
    }
    user.touch();
    Ok(())
}

/// Converts a page of views to the list response.
impl From<Page<UserView>> for UserPage {
    fn from(page: Page<UserView>) -> Self {
        Self {
            users: page.content,
            page: page.info.page,
            size: page.info.size,
            total_elements: page.info.total_elements,
            total_pages: page.info.total_pages,
        }
    }
}
