//! Decides whether a menu request is rendered or ends in "not found".
//!
//! The consumption method is checked before any lookup is issued. An invalid
//! method and an unknown slug both collapse to [`RenderDecision::NotFound`];
//! the cause is only kept in debug logs.

use super::{
    consumption_method::validate_consumption_method,
    repository::{self, Restaurant, RestaurantLookup},
};
use validator::Validate;

#[derive(Validate, Clone, Debug, PartialEq)]
pub struct MenuRequest {
    pub slug: String,
    #[validate(custom(function = "validate_consumption_method"))]
    pub consumption_method: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderDecision {
    NotFound,
    Render(Restaurant),
}

#[derive(Debug)]
enum Rejection {
    InvalidConsumptionMethod,
    UnknownSlug,
}

impl RenderDecision {
    fn rejected(request: &MenuRequest, rejection: Rejection) -> Self {
        tracing::debug!(
            slug = %request.slug,
            consumption_method = %request.consumption_method,
            "Menu request rejected: {:?}",
            rejection
        );
        Self::NotFound
    }
}

/// Lookup faults are passed through untouched; only an absent restaurant
/// becomes `NotFound`.
pub async fn resolve_menu_request(
    lookup: &dyn RestaurantLookup,
    request: &MenuRequest,
) -> Result<RenderDecision, repository::Error> {
    if request.validate().is_err() {
        return Ok(RenderDecision::rejected(
            request,
            Rejection::InvalidConsumptionMethod,
        ));
    }

    match lookup.find_by_slug(&request.slug).await? {
        Some(restaurant) => Ok(RenderDecision::Render(restaurant)),
        None => Ok(RenderDecision::rejected(request, Rejection::UnknownSlug)),
    }
}
