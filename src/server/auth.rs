//! Elevation middleware guarding the plugin routes.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeader,
};

use crate::host::AccessDecision;
use crate::server::PluginContext;

/// Middleware requiring the host's elevation policy to pass.
///
/// Every plugin route sits behind this check; the policy itself is host
/// territory, so the plugin only maps its decision onto status codes.
pub async fn require_elevation(
    State(ctx): State<PluginContext>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, &'static str)> {
    let bearer_token = bearer.map(|b| b.token().to_string());

    match ctx.policy.authorize(bearer_token.as_deref()).await {
        AccessDecision::Granted => Ok(next.run(request).await),
        AccessDecision::Unauthenticated => {
            Err((StatusCode::UNAUTHORIZED, "Authentication required"))
        }
        AccessDecision::Forbidden => Err((StatusCode::FORBIDDEN, "Elevated access required")),
    }
}
