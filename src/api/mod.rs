use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::HolidayCatalog;

pub mod holidays;
pub mod middleware;

pub use middleware::*;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn HolidayCatalog>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/holidays",
            get(holidays::get_holidays).post(holidays::add_holiday),
        )
        .route(
            "/api/v1/holidays/range",
            post(holidays::add_holidays_between),
        )
        .route(
            "/api/v1/holidays/workdays",
            get(holidays::count_working_days),
        )
        .route(
            "/api/v1/holidays/:id",
            axum::routing::patch(holidays::update_holiday).delete(holidays::delete_holiday),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
