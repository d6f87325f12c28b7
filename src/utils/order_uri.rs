//! Absolute order URIs for the `Location` header.

use axum::http::{HeaderMap, header};
use serde_json::json;
use url::Url;

use crate::domain::entities::OrderId;
use crate::error::AppError;

/// Header set by reverse proxies carrying the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Resolves the origin (`{scheme}://{host}`) a request was addressed to.
///
/// - Scheme comes from `X-Forwarded-Proto` (`http` or `https`), else `http`.
/// - Host comes from the `Host` header, port included. When the header is
///   absent `fallback_host` is used.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the `Host` header is not valid UTF-8,
/// does not form a valid URL authority, or carries a path, query, fragment
/// or userinfo.
pub fn request_origin(headers: &HeaderMap, fallback_host: &str) -> Result<Url, AppError> {
    let scheme = request_scheme(headers);

    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?,
        None => fallback_host,
    };

    let origin = Url::parse(&format!("{scheme}://{host}")).map_err(|e| {
        AppError::bad_request(
            "Invalid Host header",
            json!({ "host": host, "reason": e.to_string() }),
        )
    })?;

    if !is_bare_authority(&origin) {
        return Err(AppError::bad_request(
            "Invalid Host header",
            json!({ "host": host, "reason": "host must not carry a path, query or userinfo" }),
        ));
    }

    Ok(origin)
}

/// `Host` is an authority only: `host[:port]`.
fn is_bare_authority(url: &Url) -> bool {
    url.path() == "/"
        && url.query().is_none()
        && url.fragment().is_none()
        && url.username().is_empty()
        && url.password().is_none()
}

/// Builds `{origin}/order/{id}`.
pub fn order_uri(origin: &Url, id: OrderId) -> String {
    format!("{}/order/{id}", origin.as_str().trim_end_matches('/'))
}

fn request_scheme(headers: &HeaderMap) -> &'static str {
    let proto = headers
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim);

    match proto {
        Some(p) if p.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header};

    fn uri_for(headers: &HeaderMap, id: OrderId) -> Result<String, AppError> {
        let origin = request_origin(headers, "0.0.0.0:3000")?;
        Ok(order_uri(&origin, id))
    }

    #[test]
    fn test_order_uri_from_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

        assert_eq!(uri_for(&headers, 7).unwrap(), "http://localhost:3000/order/7");
    }

    #[test]
    fn test_order_uri_forwarded_https() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("orders.example.com"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("https, http"));

        assert_eq!(
            uri_for(&headers, 42).unwrap(),
            "https://orders.example.com/order/42"
        );
    }

    #[test]
    fn test_order_uri_unknown_proto_falls_back_to_http() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("orders.example.com"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("gopher"));

        assert_eq!(
            uri_for(&headers, 1).unwrap(),
            "http://orders.example.com/order/1"
        );
    }

    #[test]
    fn test_order_uri_missing_host_uses_fallback() {
        let headers = HeaderMap::new();

        let origin = request_origin(&headers, "127.0.0.1:3000").unwrap();
        assert_eq!(order_uri(&origin, 3), "http://127.0.0.1:3000/order/3");
    }

    #[test]
    fn test_order_uri_ipv6_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("[::1]:8080"));

        assert_eq!(uri_for(&headers, 5).unwrap(), "http://[::1]:8080/order/5");
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("bad host:abc"));

        let result = request_origin(&headers, "0.0.0.0:3000");
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_host_with_path_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("evil.com/x"));

        let result = request_origin(&headers, "0.0.0.0:3000");
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_host_with_query_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("a?b"));

        let result = request_origin(&headers, "0.0.0.0:3000");
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_host_with_fragment_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("orders.test#top"));

        let result = request_origin(&headers, "0.0.0.0:3000");
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_host_with_userinfo_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("user@orders.test"));
        assert!(request_origin(&headers, "0.0.0.0:3000").is_err());

        headers.insert(header::HOST, HeaderValue::from_static("user:pw@orders.test"));
        assert!(request_origin(&headers, "0.0.0.0:3000").is_err());
    }

    #[test]
    fn test_invalid_utf8_host_is_rejected() {
        let mut headers = HeaderMap::new();
        let invalid_bytes = vec![0xFF, 0xFE, 0xFD];
        if let Ok(header_value) = HeaderValue::from_bytes(&invalid_bytes) {
            headers.insert(header::HOST, header_value);

            let result = request_origin(&headers, "0.0.0.0:3000");
            assert!(result.is_err());
        }
    }
}
