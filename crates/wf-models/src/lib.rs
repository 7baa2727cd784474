//! # wf-models
//!
//! Domain records and request payloads for Workforce RS.
//!
//! Records (what the API returns) serialize with snake_case keys. Creation and
//! update payloads keep the camelCase keys existing clients send.

pub use wf_core::Id;

pub mod accommodation;
pub mod auth;
pub mod car;
pub mod dashboard;
pub mod date;
pub mod employee;
pub mod project;

pub use accommodation::{
    Accommodation, AccommodationAddress, ContactDetails, NewAccommodation, NewContact, NewPayment,
    PaymentDetails, UpdateAccommodation,
};
pub use auth::{LoginRequest, LoginResponse};
pub use car::{
    Car, CarNumber, LeasingDetails, NewCar, NewLeasing, NewService, ServiceDetails, UpdateCar,
};
pub use dashboard::{
    AccommodationOccupancy, CarInspection, Dashboard, EmployeesPerProject, ExpiringDocument,
};
pub use date::NullableDate;
pub use employee::{
    Employee, Employment, Medicals, NewEmployee, NewEmployment, NewMedicals, NewResidenceCard,
    ResidenceCard, UpdateEmployee,
};
pub use project::{NewProject, Project, ProjectName, UpdateProject};
