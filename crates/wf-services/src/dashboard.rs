use wf_core::{ResultExt, WfResult};
use wf_db::{rollup_project_counts, OTHER_PROJECTS_LABEL, TOP_PROJECTS};
use wf_models::Dashboard;

use crate::WorkforceService;

impl WorkforceService {
    /// All four dashboard reads, run concurrently; any failure fails the call
    pub async fn dashboard(&self) -> WfResult<Dashboard> {
        let (counts, accommodations, car_inspections, employee_permits) = tokio::try_join!(
            async {
                self.dashboard
                    .employee_counts_by_project()
                    .await
                    .context("failed to load employees per project")
            },
            async {
                self.dashboard
                    .accommodation_occupancy()
                    .await
                    .context("failed to load accommodation occupancy")
            },
            async {
                self.dashboard
                    .upcoming_car_inspections()
                    .await
                    .context("failed to load car inspections")
            },
            async {
                self.dashboard
                    .expiring_documents()
                    .await
                    .context("failed to load employee permits")
            },
        )?;

        Ok(Dashboard {
            employees_project: rollup_project_counts(counts, TOP_PROJECTS, OTHER_PROJECTS_LABEL),
            accommodations,
            car_inspections,
            employee_permits,
        })
    }
}
