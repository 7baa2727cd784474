//! Project repository
//!
//! A project owns one contact person; employee, free-place and car counts are
//! derived on read.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use wf_core::Id;
use wf_models::{NewProject, Project, ProjectName, UpdateProject};

use crate::repository::{DbContext, Repository, RepositoryError, RepositoryResult};

/// Shared projection for list and get
macro_rules! project_select {
    () => {
        r#"
        SELECT p.id, p.name, p.office_address, p.project_nip,
               COALESCE(emp.employee_count, 0)::BIGINT AS employee_amount,
               COALESCE(acc.free_places, 0)::BIGINT AS free_places,
               COALESCE(cars.car_count, 0)::BIGINT AS amount_cars,
               cp.first_name, cp.last_name, cp.phone, cp.position
        FROM project p
        LEFT JOIN contact_person cp ON cp.project_id = p.id
        LEFT JOIN (
            SELECT project_id, COUNT(DISTINCT employee_id) AS employee_count
            FROM employee_project
            GROUP BY project_id
        ) emp ON emp.project_id = p.id
        LEFT JOIN (
            SELECT a.project_id, SUM(a.number_of_places - COALESCE(o.taken, 0)) AS free_places
            FROM accommodation a
            LEFT JOIN (
                SELECT accommodation_id, COUNT(employee_id) AS taken
                FROM employee_accommodation
                GROUP BY accommodation_id
            ) o ON o.accommodation_id = a.id
            GROUP BY a.project_id
        ) acc ON acc.project_id = p.id
        LEFT JOIN (
            SELECT project_id, COUNT(*) AS car_count
            FROM car
            GROUP BY project_id
        ) cars ON cars.project_id = p.id
        "#
    };
}

/// Project database row
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub name: String,
    pub office_address: String,
    pub project_nip: String,
    pub employee_amount: i64,
    pub free_places: i64,
    pub amount_cars: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            name: row.name,
            office_address: row.office_address,
            project_nip: row.project_nip,
            employee_amount: row.employee_amount,
            free_places: row.free_places,
            amount_cars: row.amount_cars,
            first_name: row.first_name,
            last_name: row.last_name,
            phone: row.phone,
            position: row.position,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
struct ProjectNameRow {
    id: i64,
    name: String,
}

/// Project repository implementation
#[derive(Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Id/name pairs for selection lists
    pub async fn names(&self) -> RepositoryResult<Vec<ProjectName>> {
        let rows = sqlx::query_as::<_, ProjectNameRow>("SELECT id, name FROM project ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("failed to list project names")?;

        Ok(rows
            .into_iter()
            .map(|row| ProjectName {
                id: row.id,
                name: row.name,
            })
            .collect())
    }
}

#[async_trait]
impl Repository for ProjectRepository {
    type Record = Project;
    type New = NewProject;
    type Update = UpdateProject;

    async fn list(&self) -> RepositoryResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(concat!(project_select!(), " ORDER BY p.id"))
            .fetch_all(&self.pool)
            .await
            .context("failed to list projects")?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn get(&self, id: Id) -> RepositoryResult<Project> {
        sqlx::query_as::<_, ProjectRow>(concat!(project_select!(), " WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("failed to get project")?
            .map(Project::from)
            .ok_or_else(|| RepositoryError::not_found("project", id))
    }

    async fn add(&self, new: &NewProject) -> RepositoryResult<Id> {
        let mut tx = self.pool.begin().await.context("failed to add project")?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO project (name, office_address, project_nip)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&new.name)
        .bind(&new.office_address)
        .bind(&new.project_nip)
        .fetch_one(&mut *tx)
        .await
        .context("failed to add project")?;

        sqlx::query(
            r#"
            INSERT INTO contact_person (project_id, first_name, last_name, phone, position)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.phone)
        .bind(&new.position)
        .execute(&mut *tx)
        .await
        .context("failed to add project contact person")?;

        tx.commit().await.context("failed to add project")?;

        tracing::debug!(project_id = id, "Project added");
        Ok(id)
    }

    async fn update(&self, id: Id, update: &UpdateProject) -> RepositoryResult<()> {
        let mut tx = self.pool.begin().await.context("failed to update project")?;

        sqlx::query(
            r#"
            UPDATE project
            SET name = $2, office_address = $3, project_nip = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.office_address)
        .bind(&update.project_nip)
        .execute(&mut *tx)
        .await
        .context("failed to update project")?;

        sqlx::query(
            r#"
            UPDATE contact_person
            SET first_name = $2, last_name = $3, phone = $4, position = $5
            WHERE project_id = $1
            "#,
        )
        .bind(id)
        .bind(&update.first_name)
        .bind(&update.last_name)
        .bind(&update.phone)
        .bind(&update.position)
        .execute(&mut *tx)
        .await
        .context("failed to update project contact person")?;

        tx.commit().await.context("failed to update project")?;

        tracing::debug!(project_id = id, "Project updated");
        Ok(())
    }

    async fn remove(&self, id: Id) -> RepositoryResult<()> {
        // Children first: accommodations and cars belong to the project and
        // employees may be assigned to any of them.
        const STATEMENTS: [&str; 11] = [
            "DELETE FROM payment WHERE accommodation_id IN (SELECT id FROM accommodation WHERE project_id = $1)",
            "DELETE FROM contact WHERE accommodation_id IN (SELECT id FROM accommodation WHERE project_id = $1)",
            "DELETE FROM employee_accommodation WHERE accommodation_id IN (SELECT id FROM accommodation WHERE project_id = $1)",
            "DELETE FROM accommodation WHERE project_id = $1",
            "DELETE FROM leasing WHERE car_id IN (SELECT id FROM car WHERE project_id = $1)",
            "DELETE FROM car_service WHERE car_id IN (SELECT id FROM car WHERE project_id = $1)",
            "DELETE FROM employee_car WHERE car_id IN (SELECT id FROM car WHERE project_id = $1)",
            "DELETE FROM car WHERE project_id = $1",
            "DELETE FROM employee_project WHERE project_id = $1",
            "DELETE FROM contact_person WHERE project_id = $1",
            "DELETE FROM project WHERE id = $1",
        ];

        let mut tx = self.pool.begin().await.context("failed to remove project")?;
        for statement in STATEMENTS {
            sqlx::query(statement)
                .bind(id)
                .execute(&mut *tx)
                .await
                .context("failed to remove project")?;
        }
        tx.commit().await.context("failed to remove project")?;

        tracing::debug!(project_id = id, "Project removed");
        Ok(())
    }
}
