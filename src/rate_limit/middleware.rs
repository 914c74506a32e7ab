use crate::constant::{
    RATE_LIMIT_LIMIT_HEADER, RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER,
    TOO_MANY_CONTACT_ATTEMPTS,
};
use crate::rate_limit::{RateLimitDecision, RateLimiter};
use crate::utils;
use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::error::ErrorInternalServerError;
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue, RETRY_AFTER};
use actix_web::http::StatusCode;
use actix_web::web;
use actix_web_lab::middleware::Next;

/// Where the rate limiter reads the client address from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClientKeySource {
    /// The TCP peer. Headers are ignored, so clients cannot pick their own key.
    #[default]
    PeerAddress,
    /// `Forwarded` / `X-Forwarded-For`, falling back to the peer.
    /// Only safe behind a proxy that overwrites those headers.
    ForwardedFor,
}

/// Short-circuits with a 429 once a client has used up its window.
///
/// Mounted with `actix_web_lab::middleware::from_fn` on the submission route only.
/// Every request counts, whatever the handler later answers. The 429 must be
/// returned as `Ok`: `Cors` only adds its headers to successful responses.
pub async fn limit_contact_attempts<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, actix_web::Error> {
    let limiter = req
        .app_data::<web::Data<RateLimiter>>()
        .cloned()
        .ok_or_else(|| {
            tracing::error!("Rate limiter is missing from the application data");
            ErrorInternalServerError("Internal Server Error")
        })?;
    let source = req
        .app_data::<web::Data<ClientKeySource>>()
        .map(|source| *source.get_ref())
        .unwrap_or_default();

    let client = client_key(&req, source);
    let decision = limiter.check(&client);

    if !decision.allowed {
        tracing::warn!(client = %client, "Contact rate limit exceeded");
        let mut response = utils::json_failure(
            StatusCode::TOO_MANY_REQUESTS,
            TOO_MANY_CONTACT_ATTEMPTS,
        );
        let headers = response.headers_mut();
        insert_rate_limit_headers(headers, &decision);
        headers.insert(RETRY_AFTER, HeaderValue::from(reset_seconds(&decision)));
        return Ok(req.into_response(response).map_into_right_body());
    }

    let mut response = next.call(req).await?;
    insert_rate_limit_headers(response.headers_mut(), &decision);
    Ok(response.map_into_left_body())
}

/// Client IP without the port, so every connection from one host shares a window.
fn client_key(req: &ServiceRequest, source: ClientKeySource) -> String {
    match source {
        ClientKeySource::PeerAddress => req
            .peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        ClientKeySource::ForwardedFor => req
            .connection_info()
            .realip_remote_addr()
            .map(strip_port)
            .unwrap_or("unknown")
            .to_string(),
    }
}

/// `realip_remote_addr` falls back to `ip:port` when no header is present.
fn strip_port(addr: &str) -> &str {
    match addr.parse::<std::net::SocketAddr>() {
        Ok(_) => addr.rsplit_once(':').map_or(addr, |(ip, _)| ip),
        Err(_) => addr,
    }
}

fn insert_rate_limit_headers(headers: &mut HeaderMap, decision: &RateLimitDecision) {
    headers.insert(
        HeaderName::from_static(RATE_LIMIT_LIMIT_HEADER),
        HeaderValue::from(decision.limit),
    );
    headers.insert(
        HeaderName::from_static(RATE_LIMIT_REMAINING_HEADER),
        HeaderValue::from(decision.remaining),
    );
    headers.insert(
        HeaderName::from_static(RATE_LIMIT_RESET_HEADER),
        HeaderValue::from(reset_seconds(decision)),
    );
}

/// Whole seconds, rounded up so clients never retry early.
fn reset_seconds(decision: &RateLimitDecision) -> u64 {
    let reset = decision.reset_after;
    reset.as_secs() + u64::from(reset.subsec_nanos() > 0)
}
