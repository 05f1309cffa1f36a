//! OpenAPI documentation for the plugin API.
//!
//! The document is served as plain JSON so host tooling and API clients can
//! discover the segment management surface.

use axum::Json;
use utoipa::OpenApi;

/// OpenAPI documentation for the segment management API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Media Segments API",
        version = "0.1.0",
        description = "Segment management endpoints backed by the host media server",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
    ),
    servers(
        (url = "/", description = "Default server")
    ),
    paths(
        super::routes_segments::plugin_metadata,
        super::routes_segments::create_segment,
        super::routes_segments::delete_segment,
    ),
    components(
        schemas(
            super::routes_segments::PluginMetadataResponse,
            crate::host::model::MediaSegment,
            crate::host::model::SegmentType,
            crate::host::ids::ItemId,
            crate::host::ids::SegmentId,
        )
    ),
    tags(
        (name = "segments", description = "Media segment management endpoints"),
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
