use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::infrastructure::config::Config;

/// Caller identity resolved from an optional bearer credential. `None`
/// marks an anonymous caller.
#[derive(Debug, Clone, Copy)]
pub struct CallerIdentity(pub Option<Uuid>);

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[allow(dead_code)]
    exp: usize,
}

/// Best-effort identity middleware: a missing, malformed, or expired
/// bearer token downgrades the request to anonymous instead of rejecting
/// it. Unauthenticated use is a supported mode, not an error.
pub async fn identity_middleware(
    State(config): State<Arc<Config>>,
    mut request: Request,
    next: Next,
) -> Response {
    let caller = resolve_bearer(&request, &config.jwt_secret);

    if caller.is_none() {
        tracing::debug!("No caller identity resolved; treating request as anonymous");
    }

    request.extensions_mut().insert(CallerIdentity(caller));
    next.run(request).await
}

fn resolve_bearer(request: &Request, secret: &str) -> Option<Uuid> {
    let header = request.headers().get("authorization")?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()?;

    Uuid::parse_str(&data.claims.sub).ok()
}
