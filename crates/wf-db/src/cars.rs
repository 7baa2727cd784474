//! Car repository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use wf_core::Id;
use wf_models::{Car, CarNumber, LeasingDetails, NewCar, ServiceDetails, UpdateCar};

use crate::repository::{DbContext, Repository, RepositoryError, RepositoryResult};

/// List and get share one projection, so both return service and leasing
macro_rules! car_select {
    () => {
        r#"
        SELECT c.id, c.model, c.color, c.registration_number, c.vin,
               c.inspection_from, c.inspection_to, c.insurance_from, c.insurance_to,
               c.fleet_card_number, c.project_id, p.name AS project_name,
               s.id AS service_id, s.service_name, s.address AS service_address,
               s.phone_number AS service_phone_number,
               l.amount AS leasing_amount, l.monthly_payment AS leasing_monthly_payment,
               l.payment_day AS leasing_payment_day
        FROM car c
        LEFT JOIN project p ON p.id = c.project_id
        LEFT JOIN car_service s ON s.car_id = c.id
        LEFT JOIN leasing l ON l.car_id = c.id
        "#
    };
}

/// Flat car row joined with project name, service and leasing
#[derive(Debug, Clone, FromRow)]
pub struct CarRow {
    pub id: i64,
    pub model: String,
    pub color: String,
    pub registration_number: String,
    pub vin: String,
    pub inspection_from: NaiveDate,
    pub inspection_to: NaiveDate,
    pub insurance_from: NaiveDate,
    pub insurance_to: NaiveDate,
    pub fleet_card_number: String,
    pub project_id: i64,
    pub project_name: Option<String>,
    pub service_id: Option<i64>,
    pub service_name: Option<String>,
    pub service_address: Option<String>,
    pub service_phone_number: Option<String>,
    pub leasing_amount: Option<f64>,
    pub leasing_monthly_payment: Option<f64>,
    pub leasing_payment_day: Option<i32>,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Car {
            id: row.id,
            model: row.model,
            color: row.color,
            registration_number: row.registration_number,
            vin: row.vin,
            inspection_from: row.inspection_from,
            inspection_to: row.inspection_to,
            insurance_from: row.insurance_from,
            insurance_to: row.insurance_to,
            fleet_card_number: row.fleet_card_number,
            project_id: row.project_id,
            project_name: row.project_name,
            service: ServiceDetails {
                id: row.service_id,
                service_name: row.service_name,
                address: row.service_address,
                phone_number: row.service_phone_number,
            },
            leasing: LeasingDetails {
                amount: row.leasing_amount,
                monthly_payment: row.leasing_monthly_payment,
                payment_day: row.leasing_payment_day,
            },
        }
    }
}

#[derive(Debug, Clone, FromRow)]
struct CarNumberRow {
    id: i64,
    registration_number: String,
}

/// Car repository implementation
#[derive(Clone)]
pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registration numbers in alphabetical order
    pub async fn registration_numbers(&self) -> RepositoryResult<Vec<CarNumber>> {
        let rows = sqlx::query_as::<_, CarNumberRow>(
            "SELECT id, registration_number FROM car ORDER BY registration_number, id",
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to list car numbers")?;

        Ok(rows
            .into_iter()
            .map(|row| CarNumber {
                id: row.id,
                registration_number: row.registration_number,
            })
            .collect())
    }
}

#[async_trait]
impl Repository for CarRepository {
    type Record = Car;
    type New = NewCar;
    type Update = UpdateCar;

    async fn list(&self) -> RepositoryResult<Vec<Car>> {
        let rows = sqlx::query_as::<_, CarRow>(concat!(car_select!(), " ORDER BY c.id"))
            .fetch_all(&self.pool)
            .await
            .context("failed to list cars")?;

        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn get(&self, id: Id) -> RepositoryResult<Car> {
        sqlx::query_as::<_, CarRow>(concat!(car_select!(), " WHERE c.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("failed to get car")?
            .map(Car::from)
            .ok_or_else(|| RepositoryError::not_found("car", id))
    }

    async fn add(&self, new: &NewCar) -> RepositoryResult<Id> {
        let mut tx = self.pool.begin().await.context("failed to add car")?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO car (model, color, registration_number, vin, inspection_from,
                             inspection_to, insurance_from, insurance_to, fleet_card_number,
                             project_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(&new.model)
        .bind(&new.color)
        .bind(&new.registration_number)
        .bind(&new.vin)
        .bind(new.inspection_from)
        .bind(new.inspection_to)
        .bind(new.insurance_from)
        .bind(new.insurance_to)
        .bind(&new.fleet_card_number)
        .bind(new.id_project)
        .fetch_one(&mut *tx)
        .await
        .context("failed to add car")?;

        sqlx::query(
            r#"
            INSERT INTO car_service (car_id, service_name, address, phone_number)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(&new.service.service_name)
        .bind(&new.service.address)
        .bind(&new.service.phone_number)
        .execute(&mut *tx)
        .await
        .context("failed to add service")?;

        sqlx::query(
            r#"
            INSERT INTO leasing (car_id, amount, monthly_payment, payment_day)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(new.leasing.amount)
        .bind(new.leasing.monthly_payment)
        .bind(new.leasing.payment_day)
        .execute(&mut *tx)
        .await
        .context("failed to add leasing")?;

        tx.commit().await.context("failed to add car")?;

        tracing::debug!(car_id = id, "Car added");
        Ok(id)
    }

    async fn update(&self, id: Id, update: &UpdateCar) -> RepositoryResult<()> {
        let mut tx = self.pool.begin().await.context("failed to update car")?;

        sqlx::query(
            r#"
            UPDATE car
            SET model = $2, color = $3, registration_number = $4, vin = $5,
                inspection_from = $6, inspection_to = $7, insurance_from = $8,
                insurance_to = $9, fleet_card_number = $10, project_id = $11
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.model)
        .bind(&update.color)
        .bind(&update.registration_number)
        .bind(&update.vin)
        .bind(update.inspection_from)
        .bind(update.inspection_to)
        .bind(update.insurance_from)
        .bind(update.insurance_to)
        .bind(&update.fleet_card_number)
        .bind(update.id_project)
        .execute(&mut *tx)
        .await
        .context("failed to update car")?;

        sqlx::query(
            r#"
            UPDATE car_service
            SET service_name = $2, address = $3, phone_number = $4
            WHERE car_id = $1
            "#,
        )
        .bind(id)
        .bind(&update.service.service_name)
        .bind(&update.service.address)
        .bind(&update.service.phone_number)
        .execute(&mut *tx)
        .await
        .context("failed to update service")?;

        sqlx::query(
            r#"
            UPDATE leasing
            SET amount = $2, monthly_payment = $3, payment_day = $4
            WHERE car_id = $1
            "#,
        )
        .bind(id)
        .bind(update.leasing.amount)
        .bind(update.leasing.monthly_payment)
        .bind(update.leasing.payment_day)
        .execute(&mut *tx)
        .await
        .context("failed to update leasing")?;

        tx.commit().await.context("failed to update car")?;

        tracing::debug!(car_id = id, "Car updated");
        Ok(())
    }

    async fn remove(&self, id: Id) -> RepositoryResult<()> {
        const STATEMENTS: [&str; 4] = [
            "DELETE FROM leasing WHERE car_id = $1",
            "DELETE FROM car_service WHERE car_id = $1",
            "DELETE FROM employee_car WHERE car_id = $1",
            "DELETE FROM car WHERE id = $1",
        ];

        let mut tx = self.pool.begin().await.context("failed to remove car")?;
        for statement in STATEMENTS {
            sqlx::query(statement)
                .bind(id)
                .execute(&mut *tx)
                .await
                .context("failed to remove car")?;
        }
        tx.commit().await.context("failed to remove car")?;

        tracing::debug!(car_id = id, "Car removed");
        Ok(())
    }
}
