//! Accommodation repository

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use wf_core::Id;
use wf_models::{
    Accommodation, AccommodationAddress, ContactDetails, NewAccommodation, PaymentDetails,
    UpdateAccommodation,
};

use crate::repository::{DbContext, Repository, RepositoryError, RepositoryResult};

macro_rules! accommodation_select {
    () => {
        r#"
        SELECT a.id, a.project_id, pro.name AS project_name, a.city,
               a.accommodation_address, a.number_of_places,
               c.id AS contact_id, c.first_name AS contact_first_name,
               c.last_name AS contact_last_name, c.phone_number AS contact_phone_number,
               p.id AS payment_id, p.cost, p.deposit, p.contract, p.account_number,
               p.payment_day
        FROM accommodation a
        LEFT JOIN contact c ON c.accommodation_id = a.id
        LEFT JOIN payment p ON p.accommodation_id = a.id
        LEFT JOIN project pro ON pro.id = a.project_id
        "#
    };
}

/// Flat accommodation row joined with contact, payment and project name
#[derive(Debug, Clone, FromRow)]
pub struct AccommodationRow {
    pub id: i64,
    pub project_id: i64,
    pub project_name: Option<String>,
    pub city: String,
    pub accommodation_address: String,
    pub number_of_places: i32,
    pub contact_id: Option<i64>,
    pub contact_first_name: Option<String>,
    pub contact_last_name: Option<String>,
    pub contact_phone_number: Option<String>,
    pub payment_id: Option<i64>,
    pub cost: Option<f64>,
    pub deposit: Option<f64>,
    pub contract: Option<String>,
    pub account_number: Option<String>,
    pub payment_day: Option<i32>,
}

impl From<AccommodationRow> for Accommodation {
    fn from(row: AccommodationRow) -> Self {
        Accommodation {
            id: row.id,
            project_id: row.project_id,
            project_name: row.project_name,
            city: row.city,
            accommodation_address: row.accommodation_address,
            number_of_places: row.number_of_places,
            contact: ContactDetails {
                id: row.contact_id,
                first_name: row.contact_first_name,
                last_name: row.contact_last_name,
                phone_number: row.contact_phone_number,
            },
            payment: PaymentDetails {
                id: row.payment_id,
                cost: row.cost,
                deposit: row.deposit,
                contract: row.contract,
                account_number: row.account_number,
                payment_day: row.payment_day,
            },
        }
    }
}

#[derive(Debug, Clone, FromRow)]
struct AddressRow {
    id: i64,
    address: String,
}

/// Accommodation repository implementation
#[derive(Clone)]
pub struct AccommodationRepository {
    pool: PgPool,
}

impl AccommodationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// `"<city> <address>"` per accommodation, ordered by id
    pub async fn addresses(&self) -> RepositoryResult<Vec<AccommodationAddress>> {
        let rows = sqlx::query_as::<_, AddressRow>(
            r#"
            SELECT id, city || ' ' || accommodation_address AS address
            FROM accommodation
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to list accommodation addresses")?;

        Ok(rows
            .into_iter()
            .map(|row| AccommodationAddress {
                id: row.id,
                address: row.address,
            })
            .collect())
    }
}

#[async_trait]
impl Repository for AccommodationRepository {
    type Record = Accommodation;
    type New = NewAccommodation;
    type Update = UpdateAccommodation;

    async fn list(&self) -> RepositoryResult<Vec<Accommodation>> {
        let rows = sqlx::query_as::<_, AccommodationRow>(concat!(
            accommodation_select!(),
            " ORDER BY a.id"
        ))
        .fetch_all(&self.pool)
        .await
        .context("failed to list accommodations")?;

        Ok(rows.into_iter().map(Accommodation::from).collect())
    }

    async fn get(&self, id: Id) -> RepositoryResult<Accommodation> {
        sqlx::query_as::<_, AccommodationRow>(concat!(accommodation_select!(), " WHERE a.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("failed to get accommodation")?
            .map(Accommodation::from)
            .ok_or_else(|| RepositoryError::not_found("accommodation", id))
    }

    async fn add(&self, new: &NewAccommodation) -> RepositoryResult<Id> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("failed to add accommodation")?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO accommodation (project_id, city, accommodation_address, number_of_places)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(new.project_id)
        .bind(&new.city)
        .bind(&new.address)
        .bind(new.number_of_places)
        .fetch_one(&mut *tx)
        .await
        .context("failed to add accommodation")?;

        sqlx::query(
            r#"
            INSERT INTO contact (accommodation_id, first_name, last_name, phone_number)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(&new.contact.first_name)
        .bind(&new.contact.last_name)
        .bind(&new.contact.phone_number)
        .execute(&mut *tx)
        .await
        .context("failed to add contact")?;

        sqlx::query(
            r#"
            INSERT INTO payment (accommodation_id, cost, deposit, contract, account_number, payment_day)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(new.payment.cost)
        .bind(new.payment.deposit)
        .bind(&new.payment.contract)
        .bind(&new.payment.account_number)
        .bind(new.payment.payment_day)
        .execute(&mut *tx)
        .await
        .context("failed to add payment")?;

        tx.commit().await.context("failed to add accommodation")?;

        tracing::debug!(accommodation_id = id, "Accommodation added");
        Ok(id)
    }

    async fn update(&self, id: Id, update: &UpdateAccommodation) -> RepositoryResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("failed to update accommodation")?;

        sqlx::query(
            r#"
            UPDATE accommodation
            SET project_id = $2, city = $3, accommodation_address = $4, number_of_places = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(update.project_id)
        .bind(&update.city)
        .bind(&update.address)
        .bind(update.number_of_places)
        .execute(&mut *tx)
        .await
        .context("failed to update accommodation")?;

        sqlx::query(
            r#"
            UPDATE contact
            SET first_name = $2, last_name = $3, phone_number = $4
            WHERE accommodation_id = $1
            "#,
        )
        .bind(id)
        .bind(&update.contact.first_name)
        .bind(&update.contact.last_name)
        .bind(&update.contact.phone_number)
        .execute(&mut *tx)
        .await
        .context("failed to update contact")?;

        sqlx::query(
            r#"
            UPDATE payment
            SET cost = $2, deposit = $3, contract = $4, account_number = $5, payment_day = $6
            WHERE accommodation_id = $1
            "#,
        )
        .bind(id)
        .bind(update.payment.cost)
        .bind(update.payment.deposit)
        .bind(&update.payment.contract)
        .bind(&update.payment.account_number)
        .bind(update.payment.payment_day)
        .execute(&mut *tx)
        .await
        .context("failed to update payment")?;

        tx.commit().await.context("failed to update accommodation")?;

        tracing::debug!(accommodation_id = id, "Accommodation updated");
        Ok(())
    }

    async fn remove(&self, id: Id) -> RepositoryResult<()> {
        const STATEMENTS: [&str; 4] = [
            "DELETE FROM contact WHERE accommodation_id = $1",
            "DELETE FROM payment WHERE accommodation_id = $1",
            "DELETE FROM employee_accommodation WHERE accommodation_id = $1",
            "DELETE FROM accommodation WHERE id = $1",
        ];

        let mut tx = self
            .pool
            .begin()
            .await
            .context("failed to remove accommodation")?;
        for statement in STATEMENTS {
            sqlx::query(statement)
                .bind(id)
                .execute(&mut *tx)
                .await
                .context("failed to remove accommodation")?;
        }
        tx.commit().await.context("failed to remove accommodation")?;

        tracing::debug!(accommodation_id = id, "Accommodation removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_without_contact_or_payment() {
        let row = AccommodationRow {
            id: 1,
            project_id: 2,
            project_name: Some("Acme".to_string()),
            city: "Gdańsk".to_string(),
            accommodation_address: "Długa 10/2".to_string(),
            number_of_places: 10,
            contact_id: None,
            contact_first_name: None,
            contact_last_name: None,
            contact_phone_number: None,
            payment_id: None,
            cost: None,
            deposit: None,
            contract: None,
            account_number: None,
            payment_day: None,
        };

        let accommodation = Accommodation::from(row);
        assert_eq!(accommodation.project_name.as_deref(), Some("Acme"));
        assert_eq!(accommodation.contact, ContactDetails::default());
        assert_eq!(accommodation.payment, PaymentDetails::default());
    }

    #[test]
    fn test_row_maps_nested_details() {
        let row = AccommodationRow {
            id: 1,
            project_id: 2,
            project_name: None,
            city: "Gdańsk".to_string(),
            accommodation_address: "Długa 10/2".to_string(),
            number_of_places: 6,
            contact_id: Some(11),
            contact_first_name: Some("Ewa".to_string()),
            contact_last_name: Some("Zielińska".to_string()),
            contact_phone_number: Some("600100200".to_string()),
            payment_id: Some(12),
            cost: Some(4200.0),
            deposit: Some(4200.0),
            contract: Some("UM/12".to_string()),
            account_number: Some("PL00".to_string()),
            payment_day: Some(5),
        };

        let accommodation = Accommodation::from(row);
        assert_eq!(accommodation.contact.id, Some(11));
        assert_eq!(accommodation.contact.first_name.as_deref(), Some("Ewa"));
        assert_eq!(accommodation.payment.id, Some(12));
        assert_eq!(accommodation.payment.payment_day, Some(5));
    }
}
