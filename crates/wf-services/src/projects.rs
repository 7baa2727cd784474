use wf_core::{Id, ResultExt, WfResult};
use wf_db::Repository;
use wf_models::{NewProject, Project, ProjectName, UpdateProject};

use crate::WorkforceService;

impl WorkforceService {
    pub async fn projects(&self) -> WfResult<Vec<Project>> {
        self
            .projects
            .list()
            .await
            .context("failed to list projects")
    }

    pub async fn get_project(&self, id: Id) -> WfResult<Project> {
        self.projects.get(id).await.context("failed to get project")
    }

    pub async fn add_project(&self, new: &NewProject) -> WfResult<Project> {
        let id = self
            .projects
            .add(new)
            .await
            .context("failed to add project")?;
        tracing::info!(project_id = id, "Project created");
        self.get_project(id).await
    }

    pub async fn update_project(&self, id: Id, update: &UpdateProject) -> WfResult<Project> {
        self.projects
            .update(id, update)
            .await
            .context("failed to update project")?;
        self.get_project(id).await
    }

    /// Removes the project with its accommodations, cars and assignments
    pub async fn remove_project(&self, id: Id) -> WfResult<()> {
        self.projects
            .remove(id)
            .await
            .context("failed to remove project")?;
        tracing::info!(project_id = id, "Project removed");
        Ok(())
    }

    pub async fn project_names(&self) -> WfResult<Vec<ProjectName>> {
        self.projects
            .names()
            .await
            .context("failed to list project names")
    }
}
