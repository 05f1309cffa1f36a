//! Segment management API routes.
//!
//! These routes let trusted external tooling write media segments through
//! the host: a metadata probe, segment creation, and segment deletion. All
//! storage belongs to the host; the handlers only validate and forward.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::host::{HostError, ItemId, MediaSegment, ProviderId, SegmentId};
use crate::plugin;
use super::PluginContext;

/// Create segment management routes.
pub fn segment_routes() -> Router<PluginContext> {
    Router::new()
        .route("/MediaSegmentsApi", get(plugin_metadata))
        .route(
            "/MediaSegmentsApi/{id}",
            post(create_segment).delete(delete_segment),
        )
}

// ============================================================================
// Request/Response types
// ============================================================================

/// Plugin metadata reported by the probe endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct PluginMetadataResponse {
    /// Plugin version as `major.minor.patch`.
    pub version: String,
}

/// Query parameters accepted by segment creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSegmentQuery {
    /// Display name of the provider the segment is attributed to.
    pub provider_id: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Report plugin metadata.
#[utoipa::path(
    get,
    path = "/MediaSegmentsApi",
    tag = "segments",
    responses(
        (status = 200, description = "Plugin metadata", body = PluginMetadataResponse)
    )
)]
pub async fn plugin_metadata() -> impl IntoResponse {
    Json(PluginMetadataResponse {
        version: plugin::version(),
    })
}

/// Create a segment on an item.
#[utoipa::path(
    post,
    path = "/MediaSegmentsApi/{itemId}",
    tag = "segments",
    params(
        ("itemId" = Uuid, Path, description = "Item the segment belongs to"),
        ("providerId" = Option<String>, Query, description = "Display name of the provider the segment is attributed to")
    ),
    request_body = MediaSegment,
    responses(
        (status = 200, description = "Stored segment", body = MediaSegment),
        (status = 404, description = "Unknown item, missing body, or inactive provider"),
        (status = 500, description = "Host rejected the segment")
    )
)]
pub async fn create_segment(
    State(ctx): State<PluginContext>,
    Path(item_id): Path<ItemId>,
    Query(query): Query<CreateSegmentQuery>,
    body: Option<Json<MediaSegment>>,
) -> impl IntoResponse {
    let item = ctx.library_manager.item(item_id);
    let (Some(item), Some(provider_name), Some(Json(segment))) = (item, query.provider_id, body)
    else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let requested = ProviderId::from_name(&provider_name);
    let options = ctx.library_manager.library_options(&item);
    if !ctx.providers.is_active(&requested, &options) {
        tracing::error!("Provider with id '{}' not found", provider_name);
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "message": format!("Provider with id '{provider_name}' not found.")
            })),
        )
            .into_response();
    }

    // The host assigns the segment ID; the item reference always comes from
    // the path, never from the body.
    let segment = MediaSegment {
        id: SegmentId::nil(),
        item_id: item.id,
        start_ticks: segment.start_ticks,
        end_ticks: segment.end_ticks,
        kind: segment.kind,
    };

    tracing::info!(
        "Creating segment on item {} for provider '{}'",
        item.id,
        provider_name
    );

    match ctx.segment_manager.create_segment(segment, &requested).await {
        Ok(stored) => Json(stored).into_response(),
        Err(HostError::NotFound(msg)) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"message": msg})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

/// Delete a segment.
#[utoipa::path(
    delete,
    path = "/MediaSegmentsApi/{segmentId}",
    tag = "segments",
    params(
        ("segmentId" = Uuid, Path, description = "Segment to delete")
    ),
    responses(
        (status = 200, description = "Segment no longer exists"),
        (status = 500, description = "Host failed to delete the segment")
    )
)]
pub async fn delete_segment(
    State(ctx): State<PluginContext>,
    Path(segment_id): Path<SegmentId>,
) -> impl IntoResponse {
    tracing::info!("Deleting segment {}", segment_id);

    match ctx.segment_manager.delete_segment(segment_id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}
