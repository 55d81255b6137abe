use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::property::{PropertyInput, PropertyPatch, PropertyRecord};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

/// List every stored property in insertion order.
pub async fn list_properties(State(state): State<ServerState>) -> Json<Vec<PropertyRecord>> {
    Json(state.properties.list().await)
}

/// Append a new property. Cannot fail: absent fields are stored as null.
pub async fn create_property(
    State(state): State<ServerState>,
    Json(input): Json<PropertyInput>,
) -> (StatusCode, Json<serde_json::Value>) {
    let id = state.properties.create(input).await;
    (
        StatusCode::CREATED,
        Json(serde_json::json!({"message": "Propriedade cadastrada!", "id": id})),
    )
}

/// Shallow-merge the supplied fields into an existing property.
pub async fn update_property(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    Json(patch): Json<PropertyPatch>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.properties.update(id, patch).await?;
    Ok(Json(serde_json::json!({"message": "Propriedade atualizada!"})))
}

/// Remove a property. Deleting an id that does not exist still reports
/// success; the operation is idempotent.
pub async fn delete_property(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> Json<serde_json::Value> {
    state.properties.delete(id).await;
    Json(serde_json::json!({"message": "Propriedade deletada!"}))
}
