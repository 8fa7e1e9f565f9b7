use super::restaurant;
use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().nest("/restaurants", restaurant::routes::get_router())
}
