pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use std::convert::Infallible;

    pub enum Success {
        ConsumptionMethods(Vec<&'static str>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ConsumptionMethods(methods) => {
                    (StatusCode::OK, Json(json!(methods))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Infallible>;
}
