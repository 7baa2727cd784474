use wf_core::{Id, ResultExt, WfResult};
use wf_db::Repository;
use wf_models::{Employee, NewEmployee, UpdateEmployee};

use crate::WorkforceService;

impl WorkforceService {
    pub async fn employees(&self) -> WfResult<Vec<Employee>> {
        self
            .employees
            .list()
            .await
            .context("failed to list employees")
    }

    pub async fn get_employee(&self, id: Id) -> WfResult<Employee> {
        self
            .employees
            .get(id)
            .await
            .context("failed to get employee")
    }

    pub async fn add_employee(&self, new: &NewEmployee) -> WfResult<Employee> {
        let id = self
            .employees
            .add(new)
            .await
            .context("failed to add employee")?;
        tracing::info!(employee_id = id, "Employee created");
        self.get_employee(id).await
    }

    pub async fn update_employee(&self, id: Id, update: &UpdateEmployee) -> WfResult<Employee> {
        self.employees
            .update(id, update)
            .await
            .context("failed to update employee")?;
        self.get_employee(id).await
    }

    pub async fn remove_employee(&self, id: Id) -> WfResult<()> {
        self.employees
            .remove(id)
            .await
            .context("failed to remove employee")?;
        tracing::info!(employee_id = id, "Employee removed");
        Ok(())
    }
}
