use super::types::response;
use crate::{
    modules::restaurant::{consumption_method::ConsumptionMethod, views::header},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, slug: String) -> response::Response {
    let restaurant = ctx
        .restaurants
        .find_by_slug(&slug)
        .await
        .map_err(|_| response::Error::FailedToFetchRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)?;

    Ok(response::Success::Restaurant(response::LandingPage {
        restaurant: header::render(&restaurant),
        consumption_methods: ConsumptionMethod::ALL.to_vec(),
    }))
}
