use wf_core::{Id, ResultExt, WfResult};
use wf_db::Repository;
use wf_models::{Car, CarNumber, NewCar, UpdateCar};

use crate::WorkforceService;

impl WorkforceService {
    pub async fn cars(&self) -> WfResult<Vec<Car>> {
        self.cars.list().await.context("failed to list cars")
    }

    pub async fn get_car(&self, id: Id) -> WfResult<Car> {
        self.cars.get(id).await.context("failed to get car")
    }

    pub async fn add_car(&self, new: &NewCar) -> WfResult<Car> {
        let id = self.cars.add(new).await.context("failed to add car")?;
        tracing::info!(car_id = id, "Car created");
        self.get_car(id).await
    }

    pub async fn update_car(&self, id: Id, update: &UpdateCar) -> WfResult<Car> {
        self.cars
            .update(id, update)
            .await
            .context("failed to update car")?;
        self.get_car(id).await
    }

    pub async fn remove_car(&self, id: Id) -> WfResult<()> {
        self.cars.remove(id).await.context("failed to remove car")?;
        tracing::info!(car_id = id, "Car removed");
        Ok(())
    }

    pub async fn car_numbers(&self) -> WfResult<Vec<CarNumber>> {
        self.cars
            .registration_numbers()
            .await
            .context("failed to list car numbers")
    }
}
