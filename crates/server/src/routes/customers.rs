use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::info;

use models::customer::{self, CustomerPayload};

use crate::{errors::JsonApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/api/customers", tag = "customers",
    responses(
        (status = 200, description = "All customers", body = [crate::openapi::CustomerDoc]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<customer::Model>>, JsonApiError> {
    let list = state.customers.get_all_customers().await?;
    info!(count = list.len(), "list customers");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/api/customers", tag = "customers",
    request_body = crate::openapi::CustomerDoc,
    responses(
        (status = 200, description = "Created; id assigned by storage", body = crate::openapi::CustomerDoc),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CustomerPayload>,
) -> Result<Json<customer::Model>, JsonApiError> {
    let created = state.customers.add_customer(input).await?;
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = crate::openapi::CustomerDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<CustomerPayload>,
) -> Result<Json<customer::Model>, JsonApiError> {
    let updated = state.customers.update_customer(id, input).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Deleted, or nothing to delete"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.customers.delete_customer(id).await?;
    Ok(StatusCode::OK)
}
