//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: reads the body, matches the
//! route, runs the endpoint and writes the access log line.

use crate::api::{self, ApiError, ApiResult, Envelope};
use crate::config::AppState;
use crate::http::{self, response::JSON_CONTENT_TYPE};
use crate::logger::{self, AccessLogEntry};
use crate::routing::{self, Endpoint, RouteResolution};
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body as _, Bytes, Incoming};
use hyper::header::{HeaderMap, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE, REFERER, SERVER, USER_AGENT};
use hyper::{Method, Request, Response, StatusCode, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<Incoming>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let (parts, body) = req.into_parts();

    let response = match read_body(&parts.headers, body, state.config.http.max_body_size).await {
        Ok(bytes) => route_request(
            &state,
            &parts.method,
            parts.uri.path(),
            parts.uri.query(),
            header_str(&parts.headers, CONTENT_TYPE.as_str()),
            &bytes,
        ),
        Err(response) => response,
    };
    let response = with_server_header(response, &state.config.http.server_name);

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            remote_addr.ip().to_string(),
            parts.method.to_string(),
            parts.uri.path().to_string(),
        );
        entry.query = parts.uri.query().map(ToString::to_string);
        entry.http_version = version_label(parts.version).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or_default();
        entry.referer = header_str(&parts.headers, REFERER.as_str()).map(ToString::to_string);
        entry.user_agent = header_str(&parts.headers, USER_AGENT.as_str()).map(ToString::to_string);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route a fully read request to its endpoint
///
/// Pure with respect to the shared state, which is only read.
pub fn route_request(
    state: &AppState,
    method: &Method,
    path: &str,
    query: Option<&str>,
    content_type: Option<&str>,
    body: &[u8],
) -> Response<Full<Bytes>> {
    let response = match routing::match_route(method, path) {
        RouteResolution::Matched { endpoint, param } => {
            dispatch(state, endpoint, param, query, content_type, body)
        }
        RouteResolution::MethodNotAllowed(allow) => {
            logger::log_warning(&format!("Method not allowed: {method} {path}"));
            http::build_405_response(&allow)
        }
        RouteResolution::NotFound => envelope_response(&Err(ApiError::RouteNotFound)),
    };

    if method == Method::HEAD {
        http::strip_body(response)
    } else {
        response
    }
}

/// Dispatch to specific endpoint handler
fn dispatch(
    state: &AppState,
    endpoint: Endpoint,
    param: Option<String>,
    query: Option<&str>,
    content_type: Option<&str>,
    body: &[u8],
) -> Response<Full<Bytes>> {
    let handle: fn(&api::Payload) -> ApiResult = match endpoint {
        Endpoint::Root => return http::build_text_response(StatusCode::OK, api::GREETING),
        Endpoint::Data => {
            return http::build_bytes_response(
                StatusCode::OK,
                JSON_CONTENT_TYPE,
                state.static_data.body(),
            )
        }
        Endpoint::Inquiry => {
            let id = http::resolve_id(param, query);
            return envelope_response(&api::handle_inquiry(&state.catalog, id.as_deref()));
        }
        Endpoint::Order => api::handle_order,
        Endpoint::Payment => api::handle_payment,
        Endpoint::Product => api::handle_product,
        Endpoint::User => api::handle_user,
    };

    match http::parse_payload(content_type, body) {
        Ok(payload) => envelope_response(&handle(&payload)),
        Err(e) => {
            logger::log_warning(&format!("Rejected request body: {e}"));
            envelope_response(&Err(ApiError::MalformedBody))
        }
    }
}

fn envelope_response(result: &ApiResult) -> Response<Full<Bytes>> {
    let (status, envelope) = Envelope::from_result(result);
    http::build_json_response(status, &envelope)
}

/// Collect the request body, enforcing the configured size limit
async fn read_body(
    headers: &HeaderMap,
    body: Incoming,
    max_body_size: u64,
) -> Result<Bytes, Response<Full<Bytes>>> {
    if let Some(resp) = check_body_size(headers, max_body_size) {
        return Err(resp);
    }

    let limit = usize::try_from(max_body_size).unwrap_or(usize::MAX);
    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            logger::log_warning(&format!(
                "Request body too large (max: {max_body_size} bytes)"
            ));
            Err(http::build_413_response())
        }
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            Err(envelope_response(&Err(ApiError::MalformedBody)))
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(headers: &HeaderMap, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let size_str = header_str(headers, CONTENT_LENGTH.as_str())?;
    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_warning(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_413_response())
        }
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: '{size_str}', skipping size check"
            ));
            None
        }
        _ => None,
    }
}

fn with_server_header(mut response: Response<Full<Bytes>>, server_name: &str) -> Response<Full<Bytes>> {
    match HeaderValue::from_str(server_name) {
        Ok(value) => {
            response.headers_mut().insert(SERVER, value);
        }
        Err(_) => logger::log_warning(&format!("Invalid server name header: '{server_name}'")),
    }
    response
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
