//! API request handlers

pub mod accommodations;
pub mod auth;
pub mod cars;
pub mod dashboard;
pub mod employees;
pub mod health;
pub mod projects;
