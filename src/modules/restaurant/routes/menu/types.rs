pub mod request {
    use axum::{
        async_trait,
        extract::{self, FromRequestParts},
        http::request::Parts,
        RequestPartsExt,
    };
    use serde::Deserialize;
    use std::convert::Infallible;

    /// A query string that fails to parse reads as an empty consumption
    /// method, which the gate turns into "not found".
    #[derive(Deserialize, Default)]
    pub struct Query {
        #[serde(rename = "consumptionMethod", default)]
        pub consumption_method: String,
    }

    #[async_trait]
    impl<S: Send + Sync> FromRequestParts<S> for Query {
        type Rejection = Infallible;

        async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
            match parts.extract::<extract::Query<Query>>().await {
                Ok(extract::Query(query)) => Ok(query),
                Err(err) => {
                    tracing::debug!("Unreadable menu query: {}", err);
                    Ok(Query::default())
                }
            }
        }
    }

    pub struct Payload {
        pub slug: String,
        pub query: Query,
    }
}

pub mod response {
    use crate::modules::restaurant::views::MenuPage;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Menu(MenuPage),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Menu(page) => (StatusCode::OK, Json(page)).into_response(),
            }
        }
    }

    pub enum Error {
        RestaurantNotFound,
        FailedToFetchRestaurant,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Restaurant not found" })),
                )
                    .into_response(),
                Self::FailedToFetchRestaurant => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch restaurant" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
