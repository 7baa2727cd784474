//! Employee repository
//!
//! An employee owns a residence card, an employment record and medicals, and
//! may be assigned to one project, one accommodation and one car through the
//! join tables. Each detail table is unique per employee, so the joins below
//! yield at most one row per employee.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use wf_core::Id;
use wf_models::{Employee, Employment, Medicals, NewEmployee, ResidenceCard, UpdateEmployee};

use crate::repository::{DbContext, Repository, RepositoryError, RepositoryResult};

macro_rules! employee_select {
    () => {
        r#"
        SELECT e.id, e.last_name, e.first_name, e.passport_number, e.pesel, e.email,
               e.date_of_birth, e.father_name, e.mother_name, e.maiden_name,
               e.mother_maiden_name, e.bank_account, e.address_poland, e.home_address,
               e.login,
               m.osh_valid_until, m.psychotests_valid_until, m.medical_valid_until,
               m.sanitary_valid_until,
               em.contract_type, em.start_date, em.end_date, em.authorizations,
               rc.bio, rc.visa, rc.tcard,
               ep.project_id, ea.accommodation_id, ec.car_id
        FROM employee e
        LEFT JOIN (
            SELECT employee_id, osh_valid_until, psychotests_valid_until,
                   medical_valid_until, sanitary_valid_until
            FROM medicals
        ) m ON m.employee_id = e.id
        LEFT JOIN (
            SELECT employee_id, contract_type, start_date, end_date, authorizations
            FROM employment
        ) em ON em.employee_id = e.id
        LEFT JOIN (
            SELECT employee_id, bio, visa, tcard
            FROM residence_card
        ) rc ON rc.employee_id = e.id
        LEFT JOIN (SELECT employee_id, project_id FROM employee_project) ep
            ON ep.employee_id = e.id
        LEFT JOIN (SELECT employee_id, accommodation_id FROM employee_accommodation) ea
            ON ea.employee_id = e.id
        LEFT JOIN (SELECT employee_id, car_id FROM employee_car) ec
            ON ec.employee_id = e.id
        "#
    };
}

/// Flat employee row; the password column is never selected
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRow {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub passport_number: String,
    pub pesel: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub father_name: String,
    pub mother_name: String,
    pub maiden_name: String,
    pub mother_maiden_name: String,
    pub bank_account: String,
    pub address_poland: String,
    pub home_address: Option<String>,
    pub login: Option<String>,
    pub osh_valid_until: Option<NaiveDate>,
    pub psychotests_valid_until: Option<NaiveDate>,
    pub medical_valid_until: Option<NaiveDate>,
    pub sanitary_valid_until: Option<NaiveDate>,
    pub contract_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub authorizations: Option<String>,
    pub bio: Option<NaiveDate>,
    pub visa: Option<NaiveDate>,
    pub tcard: Option<NaiveDate>,
    pub project_id: Option<i64>,
    pub accommodation_id: Option<i64>,
    pub car_id: Option<i64>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: row.id,
            last_name: row.last_name,
            first_name: row.first_name,
            passport_number: row.passport_number,
            pesel: row.pesel,
            email: row.email,
            date_of_birth: row.date_of_birth,
            father_name: row.father_name,
            mother_name: row.mother_name,
            maiden_name: row.maiden_name,
            mother_maiden_name: row.mother_maiden_name,
            bank_account: row.bank_account,
            address_poland: row.address_poland,
            home_address: row.home_address,
            login: row.login,
            residence_card: ResidenceCard {
                bio: row.bio,
                visa: row.visa,
                tcard: row.tcard,
            },
            employment: Employment {
                contract_type: row.contract_type,
                start_date: row.start_date,
                end_date: row.end_date,
                authorizations: row.authorizations,
            },
            medicals: Medicals {
                osh_valid_until: row.osh_valid_until,
                psychotests_valid_until: row.psychotests_valid_until,
                medical_valid_until: row.medical_valid_until,
                sanitary_valid_until: row.sanitary_valid_until,
            },
            project_id: row.project_id,
            accommodation_id: row.accommodation_id,
            car_id: row.car_id,
        }
    }
}

/// Employee-to-resource join tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Assignment {
    Project,
    Accommodation,
    Car,
}

impl Assignment {
    const ALL: [Assignment; 3] = [Self::Project, Self::Accommodation, Self::Car];

    fn target(self, employee: &NewEmployee) -> Option<Id> {
        match self {
            Self::Project => employee.assigned_project(),
            Self::Accommodation => employee.assigned_accommodation(),
            Self::Car => employee.assigned_car(),
        }
    }

    fn exists_sql(self) -> &'static str {
        match self {
            Self::Project => "SELECT EXISTS(SELECT 1 FROM employee_project WHERE employee_id = $1)",
            Self::Accommodation => {
                "SELECT EXISTS(SELECT 1 FROM employee_accommodation WHERE employee_id = $1)"
            }
            Self::Car => "SELECT EXISTS(SELECT 1 FROM employee_car WHERE employee_id = $1)",
        }
    }

    fn insert_sql(self) -> &'static str {
        match self {
            Self::Project => {
                "INSERT INTO employee_project (employee_id, project_id) VALUES ($1, $2)"
            }
            Self::Accommodation => {
                "INSERT INTO employee_accommodation (employee_id, accommodation_id) VALUES ($1, $2)"
            }
            Self::Car => "INSERT INTO employee_car (employee_id, car_id) VALUES ($1, $2)",
        }
    }

    fn update_sql(self) -> &'static str {
        match self {
            Self::Project => "UPDATE employee_project SET project_id = $2 WHERE employee_id = $1",
            Self::Accommodation => {
                "UPDATE employee_accommodation SET accommodation_id = $2 WHERE employee_id = $1"
            }
            Self::Car => "UPDATE employee_car SET car_id = $2 WHERE employee_id = $1",
        }
    }

    fn delete_sql(self) -> &'static str {
        match self {
            Self::Project => "DELETE FROM employee_project WHERE employee_id = $1",
            Self::Accommodation => "DELETE FROM employee_accommodation WHERE employee_id = $1",
            Self::Car => "DELETE FROM employee_car WHERE employee_id = $1",
        }
    }

    fn context(self) -> &'static str {
        match self {
            Self::Project => "failed to assign project",
            Self::Accommodation => "failed to assign accommodation",
            Self::Car => "failed to assign car",
        }
    }

    /// Insert or replace the join row, or drop it when unassigned
    async fn apply(
        self,
        tx: &mut Transaction<'_, Postgres>,
        employee_id: Id,
        target: Option<Id>,
    ) -> RepositoryResult<()> {
        let Some(target) = target else {
            sqlx::query(self.delete_sql())
                .bind(employee_id)
                .execute(&mut **tx)
                .await
                .context(self.context())?;
            return Ok(());
        };

        let exists = sqlx::query_scalar::<_, bool>(self.exists_sql())
            .bind(employee_id)
            .fetch_one(&mut **tx)
            .await
            .context(self.context())?;

        let statement = if exists {
            self.update_sql()
        } else {
            self.insert_sql()
        };

        sqlx::query(statement)
            .bind(employee_id)
            .bind(target)
            .execute(&mut **tx)
            .await
            .context(self.context())?;

        Ok(())
    }
}

/// Employee repository implementation
#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for EmployeeRepository {
    type Record = Employee;
    type New = NewEmployee;
    type Update = UpdateEmployee;

    async fn list(&self) -> RepositoryResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(concat!(employee_select!(), " ORDER BY e.id"))
            .fetch_all(&self.pool)
            .await
            .context("failed to list employees")?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn get(&self, id: Id) -> RepositoryResult<Employee> {
        sqlx::query_as::<_, EmployeeRow>(concat!(employee_select!(), " WHERE e.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("failed to get employee")?
            .map(Employee::from)
            .ok_or_else(|| RepositoryError::not_found("employee", id))
    }

    async fn add(&self, new: &NewEmployee) -> RepositoryResult<Id> {
        let mut tx = self.pool.begin().await.context("failed to add employee")?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO employee (last_name, first_name, passport_number, pesel, email,
                                  date_of_birth, father_name, mother_name, maiden_name,
                                  mother_maiden_name, bank_account, address_poland, home_address)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id
            "#,
        )
        .bind(&new.last_name)
        .bind(&new.first_name)
        .bind(&new.passport_number)
        .bind(&new.pesel)
        .bind(&new.email)
        .bind(new.date_of_birth)
        .bind(&new.father_name)
        .bind(&new.mother_name)
        .bind(&new.maiden_name)
        .bind(&new.mother_maiden_name)
        .bind(&new.bank_account)
        .bind(&new.address_poland)
        .bind(&new.home_address)
        .fetch_one(&mut *tx)
        .await
        .context("failed to add employee")?;

        sqlx::query(
            "INSERT INTO residence_card (employee_id, bio, visa, tcard) VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(new.residence_card.bio.into_option())
        .bind(new.residence_card.visa.into_option())
        .bind(new.residence_card.tcard.into_option())
        .execute(&mut *tx)
        .await
        .context("failed to add residence card")?;

        sqlx::query(
            r#"
            INSERT INTO medicals (employee_id, osh_valid_until, psychotests_valid_until,
                                  medical_valid_until, sanitary_valid_until)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(new.medicals.osh_valid_until)
        .bind(new.medicals.psychotests_valid_until.into_option())
        .bind(new.medicals.medical_valid_until)
        .bind(new.medicals.sanitary_valid_until.into_option())
        .execute(&mut *tx)
        .await
        .context("failed to add medicals")?;

        sqlx::query(
            r#"
            INSERT INTO employment (employee_id, contract_type, start_date, end_date, authorizations)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(&new.employment.contract_type)
        .bind(new.employment.start_date)
        .bind(new.employment.end_date.into_option())
        .bind(&new.employment.authorizations)
        .execute(&mut *tx)
        .await
        .context("failed to add employment")?;

        for assignment in Assignment::ALL {
            if let Some(target) = assignment.target(new) {
                sqlx::query(assignment.insert_sql())
                    .bind(id)
                    .bind(target)
                    .execute(&mut *tx)
                    .await
                    .context(assignment.context())?;
            }
        }

        tx.commit().await.context("failed to add employee")?;

        tracing::debug!(employee_id = id, "Employee added");
        Ok(id)
    }

    async fn update(&self, id: Id, update: &UpdateEmployee) -> RepositoryResult<()> {
        let mut tx = self.pool.begin().await.context("failed to update employee")?;

        sqlx::query(
            r#"
            UPDATE employee
            SET last_name = $2, first_name = $3, passport_number = $4, pesel = $5, email = $6,
                date_of_birth = $7, father_name = $8, mother_name = $9, maiden_name = $10,
                mother_maiden_name = $11, bank_account = $12, address_poland = $13,
                home_address = $14
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.last_name)
        .bind(&update.first_name)
        .bind(&update.passport_number)
        .bind(&update.pesel)
        .bind(&update.email)
        .bind(update.date_of_birth)
        .bind(&update.father_name)
        .bind(&update.mother_name)
        .bind(&update.maiden_name)
        .bind(&update.mother_maiden_name)
        .bind(&update.bank_account)
        .bind(&update.address_poland)
        .bind(&update.home_address)
        .execute(&mut *tx)
        .await
        .context("failed to update employee")?;

        sqlx::query(
            "UPDATE residence_card SET bio = $2, visa = $3, tcard = $4 WHERE employee_id = $1",
        )
        .bind(id)
        .bind(update.residence_card.bio.into_option())
        .bind(update.residence_card.visa.into_option())
        .bind(update.residence_card.tcard.into_option())
        .execute(&mut *tx)
        .await
        .context("failed to update residence card")?;

        sqlx::query(
            r#"
            UPDATE medicals
            SET osh_valid_until = $2, psychotests_valid_until = $3,
                medical_valid_until = $4, sanitary_valid_until = $5
            WHERE employee_id = $1
            "#,
        )
        .bind(id)
        .bind(update.medicals.osh_valid_until)
        .bind(update.medicals.psychotests_valid_until.into_option())
        .bind(update.medicals.medical_valid_until)
        .bind(update.medicals.sanitary_valid_until.into_option())
        .execute(&mut *tx)
        .await
        .context("failed to update medicals")?;

        sqlx::query(
            r#"
            UPDATE employment
            SET contract_type = $2, start_date = $3, end_date = $4, authorizations = $5
            WHERE employee_id = $1
            "#,
        )
        .bind(id)
        .bind(&update.employment.contract_type)
        .bind(update.employment.start_date)
        .bind(update.employment.end_date.into_option())
        .bind(&update.employment.authorizations)
        .execute(&mut *tx)
        .await
        .context("failed to update employment")?;

        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM employee WHERE id = $1)")
                .bind(id)
                .fetch_one(&mut *tx)
                .await
                .context("failed to update employee")?;

        // Join rows reference the employee, so only touch them when it exists
        if exists {
            for assignment in Assignment::ALL {
                assignment
                    .apply(&mut tx, id, assignment.target(update))
                    .await?;
            }
        }

        tx.commit().await.context("failed to update employee")?;

        tracing::debug!(employee_id = id, "Employee updated");
        Ok(())
    }

    async fn remove(&self, id: Id) -> RepositoryResult<()> {
        const STATEMENTS: [&str; 7] = [
            "DELETE FROM employee_car WHERE employee_id = $1",
            "DELETE FROM employee_accommodation WHERE employee_id = $1",
            "DELETE FROM employee_project WHERE employee_id = $1",
            "DELETE FROM employment WHERE employee_id = $1",
            "DELETE FROM medicals WHERE employee_id = $1",
            "DELETE FROM residence_card WHERE employee_id = $1",
            "DELETE FROM employee WHERE id = $1",
        ];

        let mut tx = self.pool.begin().await.context("failed to remove employee")?;
        for statement in STATEMENTS {
            sqlx::query(statement)
                .bind(id)
                .execute(&mut *tx)
                .await
                .context("failed to remove employee")?;
        }
        tx.commit().await.context("failed to remove employee")?;

        tracing::debug!(employee_id = id, "Employee removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row() -> EmployeeRow {
        EmployeeRow {
            id: 1,
            last_name: "Kowalski".to_string(),
            first_name: "Jan".to_string(),
            passport_number: "AB123456".to_string(),
            pesel: "90010112345".to_string(),
            email: "jan@example.com".to_string(),
            date_of_birth: date(1990, 1, 1),
            father_name: "Piotr".to_string(),
            mother_name: "Anna".to_string(),
            maiden_name: String::new(),
            mother_maiden_name: "Nowak".to_string(),
            bank_account: "PL61109010140000071219812874".to_string(),
            address_poland: "ul. Polna 1, Warszawa".to_string(),
            home_address: None,
            login: None,
            osh_valid_until: Some(date(2025, 1, 1)),
            psychotests_valid_until: None,
            medical_valid_until: Some(date(2025, 6, 30)),
            sanitary_valid_until: None,
            contract_type: Some("UZ".to_string()),
            start_date: Some(date(2024, 2, 1)),
            end_date: None,
            authorizations: Some(String::new()),
            bio: Some(date(2026, 5, 1)),
            visa: None,
            tcard: None,
            project_id: Some(3),
            accommodation_id: None,
            car_id: None,
        }
    }

    #[test]
    fn test_row_maps_identity_fields_in_order() {
        let employee = Employee::from(row());
        assert_eq!(employee.last_name, "Kowalski");
        assert_eq!(employee.first_name, "Jan");
        assert_eq!(employee.pesel, "90010112345");
        assert_eq!(employee.passport_number, "AB123456");
    }

    #[test]
    fn test_row_maps_details_and_assignments() {
        let employee = Employee::from(row());
        assert_eq!(employee.residence_card.bio, Some(date(2026, 5, 1)));
        assert_eq!(employee.employment.contract_type.as_deref(), Some("UZ"));
        assert_eq!(
            employee.medicals.medical_valid_until,
            Some(date(2025, 6, 30))
        );
        assert_eq!(employee.project_id, Some(3));
        assert_eq!(employee.accommodation_id, None);
    }

    #[test]
    fn test_projection_never_reads_password() {
        assert!(!employee_select!().contains("password"));
    }

    #[test]
    fn test_assignment_statements_target_their_table() {
        assert!(Assignment::Project
            .insert_sql()
            .contains("employee_project"));
        assert!(Assignment::Accommodation
            .update_sql()
            .contains("employee_accommodation"));
        assert!(Assignment::Car.delete_sql().contains("employee_car"));
        assert!(Assignment::Car.exists_sql().starts_with("SELECT EXISTS"));
    }
}
