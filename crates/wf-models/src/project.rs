//! Project model
//!
//! Tables: project, contact_person

use serde::{Deserialize, Serialize};
use wf_core::Id;

/// Project with its contact person and derived counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Id,
    pub name: String,
    pub office_address: String,
    pub project_nip: String,
    /// Employees assigned to the project
    pub employee_amount: i64,
    /// Sum of unoccupied places over the project's accommodations
    pub free_places: i64,
    pub amount_cars: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectName {
    pub id: Id,
    pub name: String,
}

/// Payload for creating a project together with its contact person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub office_address: String,
    #[serde(default)]
    pub project_nip: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub position: String,
}

pub type UpdateProject = NewProject;

impl NewProject {
    /// Project with only a name and an empty contact person
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            office_address: String::new(),
            project_nip: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            position: String::new(),
        }
    }
}
