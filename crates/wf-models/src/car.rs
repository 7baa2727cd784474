//! Car model
//!
//! Tables: car, car_service, leasing

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wf_core::Id;

/// Company car with its maintenance contact and leasing terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: Id,
    pub model: String,
    pub color: String,
    pub registration_number: String,
    pub vin: String,
    pub inspection_from: NaiveDate,
    pub inspection_to: NaiveDate,
    pub insurance_from: NaiveDate,
    pub insurance_to: NaiveDate,
    pub fleet_card_number: String,
    pub project_id: Id,
    pub project_name: Option<String>,
    pub service: ServiceDetails,
    pub leasing: LeasingDetails,
}

/// Maintenance contact; every field is null when no service row exists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetails {
    #[serde(rename = "id_service")]
    pub id: Option<Id>,
    #[serde(rename = "serviceName")]
    pub service_name: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeasingDetails {
    pub amount: Option<f64>,
    pub monthly_payment: Option<f64>,
    pub payment_day: Option<i32>,
}

/// Registration number lookup entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarNumber {
    pub id: Id,
    pub registration_number: String,
}

/// Payload for creating a car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    pub model: String,
    pub color: String,
    pub registration_number: String,
    pub vin: String,
    pub inspection_from: NaiveDate,
    pub inspection_to: NaiveDate,
    pub insurance_from: NaiveDate,
    pub insurance_to: NaiveDate,
    #[serde(default)]
    pub fleet_card_number: String,
    pub id_project: Id,
    pub service: NewService,
    pub leasing: NewLeasing,
}

/// Full replacement payload; carries the same fields as [`NewCar`]
pub type UpdateCar = NewCar;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub service_name: String,
    pub address: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeasing {
    pub amount: f64,
    pub monthly_payment: f64,
    pub payment_day: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_new_car_ignores_service_id() {
        let car: NewCar = serde_json::from_str(
            r#"{
                "model": "Skoda Octavia",
                "color": "grey",
                "registrationNumber": "WX 12345",
                "vin": "TMBJJ7NE0J0123456",
                "inspectionFrom": "2024-04-01",
                "inspectionTo": "2025-04-01",
                "insuranceFrom": "2024-01-01",
                "insuranceTo": "2024-12-31",
                "idProject": 2,
                "service": {"id_service": 9, "serviceName": "Auto Serwis", "address": "Kolejowa 5", "phoneNumber": "500600700"},
                "leasing": {"amount": 80000.0, "monthlyPayment": 1500.5, "paymentDay": 10}
            }"#,
        )
        .unwrap();

        assert_eq!(car.id_project, 2);
        assert_eq!(car.fleet_card_number, "");
        assert_eq!(car.service.service_name, "Auto Serwis");
        assert_eq!(car.leasing.payment_day, 10);
    }

    #[test]
    fn test_missing_required_date_is_rejected() {
        let result = serde_json::from_str::<NewCar>(
            r#"{"model": "Fiat", "color": "red", "registrationNumber": "K1", "vin": "V",
                "inspectionFrom": "2024-04-01", "insuranceFrom": "2024-01-01", "insuranceTo": "2024-12-31",
                "idProject": 1, "service": {"serviceName": "", "address": "", "phoneNumber": ""},
                "leasing": {"amount": 0, "monthlyPayment": 0, "paymentDay": 1}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_car_field_names() {
        let car = Car {
            id: 5,
            model: "Fiat".into(),
            color: "red".into(),
            registration_number: "K1".into(),
            vin: "V".into(),
            inspection_from: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            inspection_to: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            insurance_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            insurance_to: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            fleet_card_number: String::new(),
            project_id: 1,
            project_name: Some("Acme".into()),
            service: ServiceDetails::default(),
            leasing: LeasingDetails::default(),
        };

        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(json["registration_number"], "K1");
        assert_eq!(json["inspection_to"], "2025-04-01");
        assert!(json["service"]["id_service"].is_null());
        assert!(json["leasing"]["monthlyPayment"].is_null());
    }
}
