//! Accommodation model
//!
//! Tables: accommodation, contact, payment

use serde::{Deserialize, Serialize};
use wf_core::Id;

/// Employee housing with its on-site contact and rent terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: Id,
    pub project_id: Id,
    pub project_name: Option<String>,
    pub city: String,
    pub accommodation_address: String,
    pub number_of_places: i32,
    pub contact: ContactDetails,
    pub payment: PaymentDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub id: Option<Id>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub id: Option<Id>,
    pub cost: Option<f64>,
    pub deposit: Option<f64>,
    pub contract: Option<String>,
    pub account_number: Option<String>,
    pub payment_day: Option<i32>,
}

/// Address lookup entry (`"<city> <address>"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccommodationAddress {
    pub id: Id,
    pub address: String,
}

/// Payload for creating or replacing an accommodation
///
/// Creation sends the project as `idProject`, updates send `projectId`;
/// both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccommodation {
    #[serde(rename = "idProject", alias = "projectId")]
    pub project_id: Id,
    pub city: String,
    #[serde(rename = "accommodationAddress")]
    pub address: String,
    pub number_of_places: i32,
    pub contact: NewContact,
    pub payment: NewPayment,
}

pub type UpdateAccommodation = NewAccommodation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub cost: f64,
    pub deposit: f64,
    pub contract: String,
    pub account_number: String,
    pub payment_day: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(project_key: &str) -> String {
        format!(
            r#"{{
                "{}": 7,
                "city": "Gdańsk",
                "accommodationAddress": "Długa 10/2",
                "numberOfPlaces": 6,
                "contact": {{"firstName": "Ewa", "lastName": "Zielińska", "phoneNumber": "600100200"}},
                "payment": {{"cost": 4200.0, "deposit": 4200.0, "contract": "UM/12", "accountNumber": "PL00", "paymentDay": 5}}
            }}"#,
            project_key
        )
    }

    #[test]
    fn test_both_project_spellings() {
        let created: NewAccommodation = serde_json::from_str(&body("idProject")).unwrap();
        let updated: UpdateAccommodation = serde_json::from_str(&body("projectId")).unwrap();

        assert_eq!(created.project_id, 7);
        assert_eq!(created, updated);
        assert_eq!(created.address, "Długa 10/2");
        assert_eq!(created.payment.payment_day, 5);
    }

    #[test]
    fn test_missing_project_is_rejected() {
        assert!(serde_json::from_str::<NewAccommodation>(r#"{"city": "Gdańsk"}"#).is_err());
    }
}
