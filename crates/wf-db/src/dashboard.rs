//! Dashboard aggregates
//!
//! Read-only queries over every table; the project ranking roll-up is a pure
//! function so it can be checked without a database.

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use wf_models::{AccommodationOccupancy, CarInspection, EmployeesPerProject, ExpiringDocument};

use crate::repository::{DbContext, RepositoryResult};

/// Projects listed individually in the employee ranking
pub const TOP_PROJECTS: usize = 10;

/// Name of the entry that collects every project past [`TOP_PROJECTS`]
pub const OTHER_PROJECTS_LABEL: &str = "Pozostałe";

const OCCUPANCY_LIMIT: i64 = 10;
const INSPECTION_LIMIT: i64 = 5;
const EXPIRING_DOCUMENT_LIMIT: i64 = 50;

/// Keep the first `limit` counts and fold the rest into one `label` entry
///
/// `counts` must already be ordered by count, highest first. The extra entry
/// is only added when something was folded.
pub fn rollup_project_counts(
    mut counts: Vec<EmployeesPerProject>,
    limit: usize,
    label: &str,
) -> Vec<EmployeesPerProject> {
    if counts.len() <= limit {
        return counts;
    }

    let rest: i64 = counts.drain(limit..).map(|entry| entry.count).sum();
    counts.push(EmployeesPerProject {
        name: label.to_string(),
        count: rest,
    });
    counts
}

#[derive(Debug, FromRow)]
struct ProjectCountRow {
    name: String,
    count: i64,
}

#[derive(Debug, FromRow)]
struct OccupancyRow {
    name: String,
    free: i64,
    taken: i64,
}

#[derive(Debug, FromRow)]
struct InspectionRow {
    inspection_to: NaiveDate,
    registration_number: String,
}

#[derive(Debug, FromRow)]
struct DocumentRow {
    first_name: String,
    last_name: String,
    document: String,
    expiry_date: NaiveDate,
}

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Employees per project, for projects with at least one employee
    pub async fn employee_counts_by_project(&self) -> RepositoryResult<Vec<EmployeesPerProject>> {
        let rows = sqlx::query_as::<_, ProjectCountRow>(
            r#"
            SELECT p.name, COUNT(*)::BIGINT AS count
            FROM employee_project ep
            JOIN project p ON p.id = ep.project_id
            GROUP BY p.id, p.name
            ORDER BY count DESC, p.name, p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to query employee counts by project")?;

        Ok(rows
            .into_iter()
            .map(|row| EmployeesPerProject {
                name: row.name,
                count: row.count,
            })
            .collect())
    }

    /// Free and taken places per project, most free places first
    pub async fn accommodation_occupancy(&self) -> RepositoryResult<Vec<AccommodationOccupancy>> {
        let rows = sqlx::query_as::<_, OccupancyRow>(
            r#"
            SELECT p.name,
                   COALESCE(SUM(a.number_of_places - COALESCE(o.taken, 0)), 0)::BIGINT AS free,
                   COALESCE(SUM(COALESCE(o.taken, 0)), 0)::BIGINT AS taken
            FROM project p
            LEFT JOIN accommodation a ON a.project_id = p.id
            LEFT JOIN (
                SELECT accommodation_id, COUNT(employee_id) AS taken
                FROM employee_accommodation
                GROUP BY accommodation_id
            ) o ON o.accommodation_id = a.id
            GROUP BY p.id, p.name
            ORDER BY free DESC, p.name, p.id
            LIMIT $1
            "#,
        )
        .bind(OCCUPANCY_LIMIT)
        .fetch_all(&self.pool)
        .await
        .context("failed to query accommodation occupancy")?;

        Ok(rows
            .into_iter()
            .map(|row| AccommodationOccupancy {
                name: row.name,
                taken: row.taken,
                free: row.free,
            })
            .collect())
    }

    /// Cars whose inspection runs out first
    pub async fn upcoming_car_inspections(&self) -> RepositoryResult<Vec<CarInspection>> {
        let rows = sqlx::query_as::<_, InspectionRow>(
            r#"
            SELECT inspection_to, registration_number
            FROM car
            ORDER BY inspection_to, registration_number
            LIMIT $1
            "#,
        )
        .bind(INSPECTION_LIMIT)
        .fetch_all(&self.pool)
        .await
        .context("failed to query car inspections")?;

        Ok(rows
            .into_iter()
            .map(|row| CarInspection {
                date: row.inspection_to,
                registration_number: row.registration_number,
            })
            .collect())
    }

    /// Earliest-expiring permits and medical documents across all employees
    pub async fn expiring_documents(&self) -> RepositoryResult<Vec<ExpiringDocument>> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT first_name, last_name, document, expiry_date
            FROM (
                SELECT e.first_name, e.last_name, 'OSH'::TEXT AS document, m.osh_valid_until AS expiry_date
                FROM employee e JOIN medicals m ON m.employee_id = e.id
                WHERE m.osh_valid_until IS NOT NULL
                UNION ALL
                SELECT e.first_name, e.last_name, 'Psychotests', m.psychotests_valid_until
                FROM employee e JOIN medicals m ON m.employee_id = e.id
                WHERE m.psychotests_valid_until IS NOT NULL
                UNION ALL
                SELECT e.first_name, e.last_name, 'Medical', m.medical_valid_until
                FROM employee e JOIN medicals m ON m.employee_id = e.id
                WHERE m.medical_valid_until IS NOT NULL
                UNION ALL
                SELECT e.first_name, e.last_name, 'Sanitary', m.sanitary_valid_until
                FROM employee e JOIN medicals m ON m.employee_id = e.id
                WHERE m.sanitary_valid_until IS NOT NULL
                UNION ALL
                SELECT e.first_name, e.last_name, 'Bio', r.bio
                FROM employee e JOIN residence_card r ON r.employee_id = e.id
                WHERE r.bio IS NOT NULL
                UNION ALL
                SELECT e.first_name, e.last_name, 'Visa', r.visa
                FROM employee e JOIN residence_card r ON r.employee_id = e.id
                WHERE r.visa IS NOT NULL
                UNION ALL
                SELECT e.first_name, e.last_name, 'TCard', r.tcard
                FROM employee e JOIN residence_card r ON r.employee_id = e.id
                WHERE r.tcard IS NOT NULL
            ) documents
            ORDER BY expiry_date, last_name, first_name, document
            LIMIT $1
            "#,
        )
        .bind(EXPIRING_DOCUMENT_LIMIT)
        .fetch_all(&self.pool)
        .await
        .context("failed to query expiring documents")?;

        Ok(rows
            .into_iter()
            .map(|row| ExpiringDocument {
                first_name: row.first_name,
                last_name: row.last_name,
                document: row.document,
                date: row.expiry_date,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(values: &[i64]) -> Vec<EmployeesPerProject> {
        values
            .iter()
            .enumerate()
            .map(|(i, count)| EmployeesPerProject {
                name: format!("P{}", i + 1),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn test_rollup_within_limit_is_unchanged() {
        let input = counts(&[5, 3, 1]);
        assert_eq!(
            rollup_project_counts(input.clone(), TOP_PROJECTS, OTHER_PROJECTS_LABEL),
            input
        );
    }

    #[test]
    fn test_rollup_exactly_at_limit_adds_nothing() {
        let input = counts(&[10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        let ranked = rollup_project_counts(input, TOP_PROJECTS, OTHER_PROJECTS_LABEL);
        assert_eq!(ranked.len(), 10);
        assert!(ranked
            .iter()
            .all(|entry| entry.name != OTHER_PROJECTS_LABEL));
    }

    #[test]
    fn test_rollup_folds_remainder() {
        let input = counts(&[20, 18, 15, 12, 11, 10, 9, 8, 7, 6, 5, 4, 1]);
        let ranked = rollup_project_counts(input, TOP_PROJECTS, OTHER_PROJECTS_LABEL);

        assert_eq!(ranked.len(), 11);
        assert_eq!(ranked[0].name, "P1");
        assert_eq!(ranked[9].name, "P10");
        assert_eq!(
            ranked[10],
            EmployeesPerProject {
                name: OTHER_PROJECTS_LABEL.to_string(),
                count: 10,
            }
        );
    }

    #[test]
    fn test_rollup_empty() {
        let ranked = rollup_project_counts(Vec::new(), TOP_PROJECTS, OTHER_PROJECTS_LABEL);
        assert!(ranked.is_empty());
    }
}
