//! Employee model
//!
//! Tables: employee, residence_card, employment, medicals and the
//! employee_project / employee_accommodation / employee_car join tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wf_core::Id;

use crate::date::NullableDate;

/// Employee with all owned detail records and current assignments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Id,
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
    /// Login name, only present for employees that can sign in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    pub residence_card: ResidenceCard,
    pub employment: Employment,
    pub medicals: Medicals,
    pub project_id: Option<Id>,
    pub accommodation_id: Option<Id>,
    pub car_id: Option<Id>,
}

/// Residence card expiry dates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResidenceCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visa: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcard: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employment {
    pub contract_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizations: Option<String>,
}

/// Occupational health and safety documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Medicals {
    pub osh_valid_until: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psychotests_valid_until: Option<NaiveDate>,
    pub medical_valid_until: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitary_valid_until: Option<NaiveDate>,
}

/// Payload for creating an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
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
    #[serde(default)]
    pub home_address: Option<String>,
    #[serde(default)]
    pub residence_card: NewResidenceCard,
    pub employment: NewEmployment,
    pub medicals: NewMedicals,
    #[serde(default)]
    pub project_id: Option<Id>,
    #[serde(default)]
    pub accommodation_id: Option<Id>,
    #[serde(default)]
    pub car_id: Option<Id>,
}

/// Full replacement payload; carries the same fields as [`NewEmployee`]
pub type UpdateEmployee = NewEmployee;

impl NewEmployee {
    pub fn assigned_project(&self) -> Option<Id> {
        assigned(self.project_id)
    }

    pub fn assigned_accommodation(&self) -> Option<Id> {
        assigned(self.accommodation_id)
    }

    pub fn assigned_car(&self) -> Option<Id> {
        assigned(self.car_id)
    }
}

/// Clients send `0` for "not assigned"
fn assigned(id: Option<Id>) -> Option<Id> {
    id.filter(|id| *id > 0)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewResidenceCard {
    #[serde(default)]
    pub bio: NullableDate,
    #[serde(default)]
    pub visa: NullableDate,
    #[serde(default)]
    pub tcard: NullableDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployment {
    pub contract_type: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: NullableDate,
    #[serde(default)]
    pub authorizations: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedicals {
    pub osh_valid_until: NaiveDate,
    #[serde(default)]
    pub psychotests_valid_until: NullableDate,
    pub medical_valid_until: NaiveDate,
    #[serde(default)]
    pub sanitary_valid_until: NullableDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEW_EMPLOYEE: &str = r#"{
        "lastName": "Kowalski",
        "firstName": "Jan",
        "passportNumber": "AB123456",
        "pesel": "90010112345",
        "email": "jan@example.com",
        "dateOfBirth": "1990-01-01",
        "fatherName": "Piotr",
        "motherName": "Anna",
        "maidenName": "",
        "motherMaidenName": "Nowak",
        "bankAccount": "PL61109010140000071219812874",
        "addressPoland": "ul. Polna 1, Warszawa",
        "homeAddress": "Lviv",
        "residenceCard": {"bio": "2026-05-01", "visa": null},
        "employment": {"contractType": "UZ", "startDate": "2024-02-01"},
        "medicals": {"oshValidUntil": "2025-01-01", "medicalValidUntil": "2025-06-30", "sanitaryValidUntil": ""},
        "projectId": 3,
        "accommodationId": 0
    }"#;

    #[test]
    fn test_decode_new_employee() {
        let employee: NewEmployee = serde_json::from_str(NEW_EMPLOYEE).unwrap();

        assert_eq!(employee.first_name, "Jan");
        assert_eq!(
            employee.residence_card.bio.into_option(),
            NaiveDate::from_ymd_opt(2026, 5, 1)
        );
        assert!(employee.residence_card.visa.is_unset());
        assert!(employee.residence_card.tcard.is_unset());
        assert!(employee.employment.end_date.is_unset());
        assert_eq!(employee.employment.authorizations, "");
        assert!(employee.medicals.sanitary_valid_until.is_unset());
        assert_eq!(employee.home_address.as_deref(), Some("Lviv"));
    }

    #[test]
    fn test_assignments() {
        let employee: NewEmployee = serde_json::from_str(NEW_EMPLOYEE).unwrap();

        assert_eq!(employee.assigned_project(), Some(3));
        assert_eq!(employee.assigned_accommodation(), None);
        assert_eq!(employee.assigned_car(), None);
    }

    #[test]
    fn test_encode_omits_missing_details() {
        let employee = Employee {
            id: 1,
            last_name: "Kowalski".into(),
            first_name: "Jan".into(),
            passport_number: "AB123456".into(),
            pesel: "90010112345".into(),
            email: "jan@example.com".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            father_name: String::new(),
            mother_name: String::new(),
            maiden_name: String::new(),
            mother_maiden_name: String::new(),
            bank_account: String::new(),
            address_poland: String::new(),
            home_address: None,
            login: None,
            residence_card: ResidenceCard::default(),
            employment: Employment::default(),
            medicals: Medicals::default(),
            project_id: None,
            accommodation_id: None,
            car_id: Some(4),
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["date_of_birth"], "1990-01-01");
        assert_eq!(json["residence_card"], serde_json::json!({}));
        assert!(json.get("login").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["car_id"], 4);
        assert!(json["project_id"].is_null());
    }
}
