use axum::{
    extract::Request,
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Origins allowed to read responses. Any port on the loopback host qualifies.
pub const ALLOWED_ORIGIN_PREFIXES: [&str; 2] = ["http://localhost:", "http://127.0.0.1:"];

pub fn is_allowed_origin(origin: &str) -> bool {
    ALLOWED_ORIGIN_PREFIXES
        .iter()
        .any(|prefix| origin.starts_with(prefix))
}

/// Local-development CORS policy.
///
/// The request `Origin` is reflected only when it is on the allow-list; the
/// method/header/max-age headers are sent on every response. `OPTIONS` requests
/// are answered here with `204 No Content` and never reach a handler.
pub async fn cors_middleware(req: Request, next: Next) -> Response {
    let allowed_origin = req
        .headers()
        .get(header::ORIGIN)
        .filter(|value| value.to_str().map(is_allowed_origin).unwrap_or(false))
        .cloned();

    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };

    let headers = response.headers_mut();
    if let Some(origin) = allowed_origin {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static("3600"),
    );

    response
}
