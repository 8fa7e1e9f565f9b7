use super::types::{request, response};
use crate::{
    modules::restaurant::{
        gate::{self, MenuRequest, RenderDecision},
        views,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let request = MenuRequest {
        slug: payload.slug,
        consumption_method: payload.query.consumption_method,
    };

    match gate::resolve_menu_request(ctx.restaurants.as_ref(), &request).await {
        Ok(RenderDecision::Render(restaurant)) => {
            Ok(response::Success::Menu(views::render_page(&restaurant)))
        }
        Ok(RenderDecision::NotFound) => Err(response::Error::RestaurantNotFound),
        Err(_) => Err(response::Error::FailedToFetchRestaurant),
    }
}
