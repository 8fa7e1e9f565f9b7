mod consumption_methods;
mod get;
mod menu;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(consumption_methods::get_router())
        .merge(get::get_router())
        .merge(menu::get_router())
}
