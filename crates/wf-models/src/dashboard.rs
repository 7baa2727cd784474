//! Dashboard read models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub employees_project: Vec<EmployeesPerProject>,
    pub accommodations: Vec<AccommodationOccupancy>,
    pub car_inspections: Vec<CarInspection>,
    pub employee_permits: Vec<ExpiringDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeesPerProject {
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccommodationOccupancy {
    pub name: String,
    pub taken: i64,
    pub free: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarInspection {
    pub date: NaiveDate,
    pub registration_number: String,
}

/// A permit or medical document and when it expires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiringDocument {
    pub first_name: String,
    pub last_name: String,
    pub document: String,
    pub date: NaiveDate,
}
