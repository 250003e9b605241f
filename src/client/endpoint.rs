//! Socket endpoint derivation.
//!
//! The endpoint lives on the same host as the page, at `/ws`, and is secure
//! exactly when the page was loaded securely.

use url::Url;

use crate::client::error::EndpointError;

/// Path of the event socket on the dashboard server.
pub const SOCKET_PATH: &str = "/ws";

/// `<ws|wss>://<host[:port]>/ws` for a page URL.
pub fn endpoint_for_page(page: &Url) -> Result<Url, EndpointError> {
    let scheme = match page.scheme() {
        "https" => "wss",
        "http" => "ws",
        other => return Err(EndpointError::UnsupportedScheme(other.to_string())),
    };
    let host = page.host_str().ok_or(EndpointError::MissingHost)?;

    let authority = match page.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };
    Ok(Url::parse(&format!("{}://{}{}", scheme, authority, SOCKET_PATH))?)
}

/// Parse an explicit endpoint override.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, EndpointError> {
    let url = Url::parse(endpoint)?;
    match url.scheme() {
        "ws" | "wss" => {}
        other => return Err(EndpointError::UnsupportedScheme(other.to_string())),
    }
    if url.host_str().is_none() {
        return Err(EndpointError::MissingHost);
    }
    Ok(url)
}

/// Endpoint from an override if given, else derived from the page URL.
pub fn resolve_endpoint(page_url: &str, endpoint: Option<&str>) -> Result<Url, EndpointError> {
    match endpoint {
        Some(endpoint) => parse_endpoint(endpoint),
        None => endpoint_for_page(&Url::parse(page_url)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(page: &str) -> String {
        endpoint_for_page(&Url::parse(page).unwrap())
            .unwrap()
            .to_string()
    }

    #[test]
    fn plain_page_uses_ws() {
        assert_eq!(derive("http://localhost:8000/"), "ws://localhost:8000/ws");
    }

    #[test]
    fn secure_page_uses_wss() {
        assert_eq!(derive("https://dash.example.com/messages"), "wss://dash.example.com/ws");
    }

    #[test]
    fn query_fragment_and_credentials_dropped() {
        assert_eq!(
            derive("http://user:pw@example.com:9000/bots?page=2#top"),
            "ws://example.com:9000/ws"
        );
    }

    #[test]
    fn ipv6_host_kept_bracketed() {
        assert_eq!(derive("http://[::1]:8000/"), "ws://[::1]:8000/ws");
    }

    #[test]
    fn other_schemes_rejected() {
        let err = endpoint_for_page(&Url::parse("file:///tmp/page.html").unwrap()).unwrap_err();
        assert!(matches!(err, EndpointError::UnsupportedScheme(s) if s == "file"));
    }

    #[test]
    fn override_wins() {
        let url = resolve_endpoint("http://localhost:8000/", Some("ws://10.0.0.5:9000/events"))
            .unwrap();
        assert_eq!(url.as_str(), "ws://10.0.0.5:9000/events");

        assert!(resolve_endpoint("http://localhost:8000/", Some("http://x/ws")).is_err());
    }
}
