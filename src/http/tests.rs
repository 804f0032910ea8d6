//! Tests for the host-facing HTTP types.

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::http::{Error, HttpRequest, HttpResponse, Method, StatusCode};

    #[test]
    fn test_method_from_str() {
        assert_eq!(Method::from_str("GET").unwrap(), Method::GET);
        assert_eq!(Method::from_str("PATCH").unwrap(), Method::PATCH);
        assert_eq!(Method::from_str("DELETE").unwrap(), Method::DELETE);
    }

    #[test]
    fn test_method_from_str_is_case_sensitive() {
        let result = Method::from_str("get");
        assert!(matches!(result, Err(Error::InvalidMethod(ref m)) if m == "get"));
    }

    #[test]
    fn test_method_into_route_key() {
        let key: String = Method::POST.into();
        assert_eq!(key, "POST");
        assert_eq!(Method::OPTIONS.to_string(), "OPTIONS");
    }

    #[test]
    fn test_request_method_token() {
        let request = HttpRequest::new("PUT");
        assert_eq!(request.method_token(), "PUT");

        let request = HttpRequest::without_method();
        assert_eq!(request.method, None);
        assert_eq!(request.method_token(), "");
    }

    #[test]
    fn test_request_headers_are_case_insensitive() {
        let request = HttpRequest::new("GET").with_header("Content-Type", "text/plain");
        assert_eq!(request.header("content-type"), Some("text/plain"));
        assert!(request.has_header("CONTENT-TYPE"));
        assert!(!request.has_header("Accept"));
    }

    #[test]
    fn test_request_query_params() {
        let request = HttpRequest::new("GET").with_path("/api/hello?name=Ada&debug");
        assert_eq!(request.path, "/api/hello?name=Ada&debug");
        assert_eq!(request.query_param("name"), Some("Ada"));
        assert_eq!(request.query_param("debug"), Some(""));
        assert_eq!(request.query_param("missing"), None);
    }

    #[test]
    fn test_request_body() {
        let request = HttpRequest::new("POST").with_body("payload");
        assert_eq!(request.body_str(), Some("payload"));
    }

    #[test]
    fn test_response_defaults() {
        let response = HttpResponse::new();
        assert_eq!(response.status_code(), StatusCode::Ok);
        assert!(response.body().is_empty());
        assert!(!response.is_sent());
    }

    #[test]
    fn test_response_status_and_send() {
        let mut response = HttpResponse::new();
        response.status(StatusCode::NotFound).send("not found");

        assert_eq!(response.status_code(), StatusCode::NotFound);
        assert_eq!(response.body_str(), Some("not found"));
        assert_eq!(response.get_header("content-length"), Some("9"));
        assert!(response.is_sent());
    }

    #[test]
    fn test_response_send_twice_replaces_body() {
        let mut response = HttpResponse::new();
        response.send("first");
        response.send("second body");

        assert_eq!(response.body_str(), Some("second body"));
        assert_eq!(response.get_header("Content-Length"), Some("11"));
    }

    #[test]
    fn test_status_code_conversions() {
        assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
        assert_eq!(StatusCode::try_from(404).unwrap(), StatusCode::NotFound);
        assert!(matches!(StatusCode::try_from(418), Err(Error::UnsupportedStatus(418))));
        assert_eq!(StatusCode::MethodNotAllowed.to_string(), "405 Method Not Allowed");
    }
}
