use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::extract::{rejection::QueryRejection, Query, State};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    params: Result<Query<request::Params>, QueryRejection>,
) -> response::Response {
    let Query(params) = params.map_err(|err| {
        tracing::error!("Failed to parse list query params: {}", err);
        response::Error::ServerError
    })?;

    service(ctx, request::Payload { params }).await
}
