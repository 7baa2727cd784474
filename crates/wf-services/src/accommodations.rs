use wf_core::{Id, ResultExt, WfResult};
use wf_db::Repository;
use wf_models::{Accommodation, AccommodationAddress, NewAccommodation, UpdateAccommodation};

use crate::WorkforceService;

impl WorkforceService {
    pub async fn accommodations(&self) -> WfResult<Vec<Accommodation>> {
        self.accommodations
            .list()
            .await
            .context("failed to list accommodations")
    }

    pub async fn get_accommodation(&self, id: Id) -> WfResult<Accommodation> {
        self.accommodations
            .get(id)
            .await
            .context("failed to get accommodation")
    }

    pub async fn add_accommodation(&self, new: &NewAccommodation) -> WfResult<Accommodation> {
        let id = self
            .accommodations
            .add(new)
            .await
            .context("failed to add accommodation")?;
        tracing::info!(accommodation_id = id, "Accommodation created");
        self.get_accommodation(id).await
    }

    pub async fn update_accommodation(
        &self,
        id: Id,
        update: &UpdateAccommodation,
    ) -> WfResult<Accommodation> {
        self.accommodations
            .update(id, update)
            .await
            .context("failed to update accommodation")?;
        self.get_accommodation(id).await
    }

    pub async fn remove_accommodation(&self, id: Id) -> WfResult<()> {
        self.accommodations
            .remove(id)
            .await
            .context("failed to remove accommodation")?;
        tracing::info!(accommodation_id = id, "Accommodation removed");
        Ok(())
    }

    pub async fn accommodation_addresses(&self) -> WfResult<Vec<AccommodationAddress>> {
        self.accommodations
            .addresses()
            .await
            .context("failed to list accommodation addresses")
    }
}
