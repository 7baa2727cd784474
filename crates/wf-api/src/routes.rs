//! API routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::extractors::AppState;
use crate::handlers::{accommodations, auth, cars, dashboard, employees, health, projects};

/// Create the complete API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(auth::login))
        .route("/ping", get(health::ping))
        .route("/health", get(health::readiness))
        .route("/dashboard", get(dashboard::get_dashboard))
        .merge(employee_routes())
        .merge(car_routes())
        .merge(accommodation_routes())
        .merge(project_routes())
        .with_state(state)
}

fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(employees::list_employees))
        .route("/employee", post(employees::create_employee))
        .route(
            "/employee/:id",
            get(employees::get_employee).delete(employees::delete_employee),
        )
        .route("/employee/:id/update", post(employees::update_employee))
}

fn car_routes() -> Router<AppState> {
    Router::new()
        .route("/cars", get(cars::list_cars))
        .route("/car", post(cars::create_car))
        .route("/car/numbers", get(cars::list_car_numbers))
        .route("/car/:id", get(cars::get_car).delete(cars::delete_car))
        .route("/car/:id/update", post(cars::update_car))
}

fn accommodation_routes() -> Router<AppState> {
    Router::new()
        .route("/accommodations", get(accommodations::list_accommodations))
        .route("/accommodation", post(accommodations::create_accommodation))
        .route(
            "/accommodation/addresses",
            get(accommodations::list_accommodation_addresses),
        )
        .route(
            "/accommodation/:id",
            get(accommodations::get_accommodation).delete(accommodations::delete_accommodation),
        )
        .route(
            "/accommodation/:id/update",
            post(accommodations::update_accommodation),
        )
}

fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(projects::list_projects))
        .route("/project", post(projects::create_project))
        .route("/project/names", get(projects::list_project_names))
        .route(
            "/project/:id",
            get(projects::get_project).delete(projects::delete_project),
        )
        .route("/project/:id/update", post(projects::update_project))
}
