//! Format-agnostic request binding: accepts a JSON body or an urlencoded
//! form and produces the same untyped input. Structural bind failures are
//! validation errors; semantic checks live on the input type itself.

use crate::error::AppError;
use crate::model::SimpleInput;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};

#[async_trait]
impl<S> FromRequest<S> for SimpleInput
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if content_type.starts_with("application/json") {
            let Json(input) = Json::<SimpleInput>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.to_string()))?;
            Ok(input)
        } else {
            let Form(input) = Form::<SimpleInput>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.to_string()))?;
            Ok(input)
        }
    }
}
