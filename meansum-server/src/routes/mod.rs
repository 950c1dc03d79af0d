use axum::{
    routing::{get, post},
    Router,
};

mod calculate;
mod home;

pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/calculate", post(calculate::calculate))
}
