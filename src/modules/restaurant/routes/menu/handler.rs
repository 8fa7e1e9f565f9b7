use super::{service::service, types::request};
use crate::types::Context;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(slug): Path<String>,
    query: request::Query,
) -> impl IntoResponse {
    service(ctx, request::Payload { slug, query }).await
}
