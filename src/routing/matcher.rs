//! Route matching module
//!
//! Matches a request method and path against the fixed route table.
//! Literal segments compare ASCII case-insensitively and one trailing slash
//! is tolerated, so `/Order/` reaches the same endpoint as `/order`.

use hyper::Method;

use crate::http::decode_segment;

/// Endpoint a request is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Root,
    Order,
    Inquiry,
    Payment,
    Product,
    User,
    Data,
}

/// Route table entry
pub struct Route {
    pub method: Method,
    /// `/`-separated segments; `:name` captures a segment, `:name?` an optional last one
    pub pattern: &'static str,
    pub endpoint: Endpoint,
}

pub const ROUTES: &[Route] = &[
    Route { method: Method::GET, pattern: "/", endpoint: Endpoint::Root },
    Route { method: Method::POST, pattern: "/order", endpoint: Endpoint::Order },
    Route { method: Method::GET, pattern: "/inquiry/:id?", endpoint: Endpoint::Inquiry },
    Route { method: Method::POST, pattern: "/payment", endpoint: Endpoint::Payment },
    Route { method: Method::POST, pattern: "/product", endpoint: Endpoint::Product },
    Route { method: Method::POST, pattern: "/user", endpoint: Endpoint::User },
    Route { method: Method::GET, pattern: "/data", endpoint: Endpoint::Data },
];

/// Result of looking a request up in the route table
#[derive(Debug, PartialEq, Eq)]
pub enum RouteResolution {
    Matched {
        endpoint: Endpoint,
        /// Decoded value of the captured path segment, if any
        param: Option<String>,
    },
    /// Path exists but not for this method; carries the `Allow` header value
    MethodNotAllowed(String),
    NotFound,
}

/// Find the route for a method and path
///
/// HEAD is served by GET routes.
pub fn match_route(method: &Method, path: &str) -> RouteResolution {
    let lookup_method = if method == Method::HEAD {
        &Method::GET
    } else {
        method
    };

    let mut allowed: Vec<&str> = Vec::new();
    for route in ROUTES {
        let Some(param) = match_path(route.pattern, path) else {
            continue;
        };
        if route.method == *lookup_method {
            return RouteResolution::Matched {
                endpoint: route.endpoint,
                param,
            };
        }
        allowed.push(route.method.as_str());
        if route.method == Method::GET {
            allowed.push(Method::HEAD.as_str());
        }
    }

    if allowed.is_empty() {
        RouteResolution::NotFound
    } else {
        RouteResolution::MethodNotAllowed(allowed.join(", "))
    }
}

/// Check if a path matches a pattern
///
/// Returns `None` on mismatch, otherwise the captured parameter (if any).
pub fn match_path(pattern: &str, path: &str) -> Option<Option<String>> {
    let pattern_segments = segments(pattern);
    let path_segments = segments(path);
    let mut param = None;

    for (i, pattern_segment) in pattern_segments.iter().enumerate() {
        let path_segment = path_segments.get(i);
        match (pattern_segment.strip_prefix(':'), path_segment) {
            // Optional capture with nothing left to capture
            (Some(name), None) if name.ends_with('?') => {}
            (Some(_), Some(value)) if !value.is_empty() => param = Some(decode_segment(value)),
            (None, Some(value)) if value.eq_ignore_ascii_case(pattern_segment) => {}
            _ => return None,
        }
    }

    if path_segments.len() > pattern_segments.len() {
        return None;
    }
    Some(param)
}

/// Split a path into segments, ignoring the leading slash and one trailing slash
fn segments(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(endpoint: Endpoint, param: Option<&str>) -> RouteResolution {
        RouteResolution::Matched {
            endpoint,
            param: param.map(String::from),
        }
    }

    #[test]
    fn test_match_every_route() {
        assert_eq!(match_route(&Method::GET, "/"), matched(Endpoint::Root, None));
        assert_eq!(match_route(&Method::POST, "/order"), matched(Endpoint::Order, None));
        assert_eq!(match_route(&Method::GET, "/inquiry"), matched(Endpoint::Inquiry, None));
        assert_eq!(
            match_route(&Method::GET, "/inquiry/3"),
            matched(Endpoint::Inquiry, Some("3"))
        );
        assert_eq!(match_route(&Method::POST, "/payment"), matched(Endpoint::Payment, None));
        assert_eq!(match_route(&Method::POST, "/product"), matched(Endpoint::Product, None));
        assert_eq!(match_route(&Method::POST, "/user"), matched(Endpoint::User, None));
        assert_eq!(match_route(&Method::GET, "/data"), matched(Endpoint::Data, None));
    }

    #[test]
    fn test_case_and_trailing_slash_tolerated() {
        assert_eq!(match_route(&Method::POST, "/Order/"), matched(Endpoint::Order, None));
        assert_eq!(match_route(&Method::GET, "/inquiry/"), matched(Endpoint::Inquiry, None));
        assert_eq!(
            match_route(&Method::GET, "/INQUIRY/2/"),
            matched(Endpoint::Inquiry, Some("2"))
        );
    }

    #[test]
    fn test_param_is_decoded_and_case_kept() {
        assert_eq!(
            match_route(&Method::GET, "/inquiry/%31"),
            matched(Endpoint::Inquiry, Some("1"))
        );
        assert_eq!(
            match_route(&Method::GET, "/inquiry/Abc"),
            matched(Endpoint::Inquiry, Some("Abc"))
        );
    }

    #[test]
    fn test_head_uses_get_routes() {
        assert_eq!(match_route(&Method::HEAD, "/data"), matched(Endpoint::Data, None));
    }

    #[test]
    fn test_wrong_method_reports_allow() {
        assert_eq!(
            match_route(&Method::GET, "/order"),
            RouteResolution::MethodNotAllowed("POST".to_string())
        );
        assert_eq!(
            match_route(&Method::POST, "/inquiry/1"),
            RouteResolution::MethodNotAllowed("GET, HEAD".to_string())
        );
    }

    #[test]
    fn test_options_is_not_routed() {
        // No route answers OPTIONS; the Allow list still reaches the client with the 405
        assert_eq!(
            match_route(&Method::OPTIONS, "/order"),
            RouteResolution::MethodNotAllowed("POST".to_string())
        );
        assert_eq!(
            match_route(&Method::OPTIONS, "/data"),
            RouteResolution::MethodNotAllowed("GET, HEAD".to_string())
        );
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(match_route(&Method::GET, "/orders"), RouteResolution::NotFound);
        assert_eq!(match_route(&Method::GET, "/inquiry/1/2"), RouteResolution::NotFound);
        assert_eq!(match_route(&Method::POST, "/order/1"), RouteResolution::NotFound);
        assert_eq!(match_route(&Method::GET, "//data"), RouteResolution::NotFound);
    }

    #[test]
    fn test_match_path_root() {
        assert_eq!(match_path("/", "/"), Some(None));
        assert_eq!(match_path("/", "/x"), None);
    }
}
