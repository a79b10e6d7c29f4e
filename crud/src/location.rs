use crate::domain::UserId;
use crate::error::{Error, Result};
use url::Url;

/// The parts of the page address the widget derives its URLs from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    scheme: String,
    hostname: String,
    port: Option<u16>,
    pathname: String,
}

impl PageLocation {
    pub fn new(secure: bool, hostname: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            scheme: if secure { "https" } else { "http" }.to_string(),
            hostname: hostname.into(),
            port,
            pathname: "/".to_string(),
        }
    }

    /// Parse an absolute `http` or `https` address.
    pub fn parse(href: &str) -> Result<Self> {
        let url = Url::parse(href)?;
        let scheme = match url.scheme() {
            "http" | "https" => url.scheme().to_string(),
            other => {
                return Err(Error::InvalidLocation(format!(
                    "unsupported scheme '{other}' in {href}"
                )));
            }
        };
        let hostname = url
            .host_str()
            .ok_or_else(|| Error::InvalidLocation(format!("missing host in {href}")))?
            .to_string();

        Ok(Self {
            scheme,
            hostname,
            port: url.port(),
            pathname: url.path().to_string(),
        })
    }

    /// Build from the pieces a browser exposes on `window.location`
    /// (`protocol` keeps its trailing colon, `port` is empty for the default).
    pub fn from_parts(protocol: &str, hostname: &str, port: &str, pathname: &str) -> Result<Self> {
        let port = if port.is_empty() {
            String::new()
        } else {
            format!(":{port}")
        };
        Self::parse(&format!("{protocol}//{hostname}{port}{pathname}"))
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn is_secure(&self) -> bool {
        self.scheme == "https"
    }

    /// `protocol//hostname[:port]`, without a trailing slash.
    pub fn origin(&self) -> String {
        self.origin_with_scheme(&self.scheme)
    }

    /// The address shown to the operator for a namespace.
    pub fn channel_target(&self, namespace: &str) -> String {
        format!("{}{}", self.origin(), normalize_namespace(namespace))
    }

    /// The socket address actually dialled for a namespace.
    pub fn websocket_url(&self, namespace: &str) -> String {
        let scheme = if self.is_secure() { "wss" } else { "ws" };
        format!(
            "{}{}",
            self.origin_with_scheme(scheme),
            normalize_namespace(namespace)
        )
    }

    pub fn edit_url(&self, id: UserId) -> String {
        format!("{}/crud/websocket-edit/{}", self.origin(), id)
    }

    /// Endpoint that accepts the delete form.
    pub fn delete_form_url(&self) -> String {
        format!("{}/crud/basic", self.origin())
    }

    fn origin_with_scheme(&self, scheme: &str) -> String {
        match self.port {
            Some(port) => format!("{scheme}://{}:{port}", self.hostname),
            None => format!("{scheme}://{}", self.hostname),
        }
    }
}

fn normalize_namespace(namespace: &str) -> String {
    if namespace.starts_with('/') {
        namespace.to_string()
    } else {
        format!("/{namespace}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::USER_REFRESH_NAMESPACE;

    #[test]
    fn test_channel_target_with_port() {
        let location = PageLocation::parse("http://127.0.0.1:5001/crud/websocket").unwrap();
        assert_eq!(
            location.channel_target(USER_REFRESH_NAMESPACE),
            "http://127.0.0.1:5001/websocket/user_refresh"
        );
        assert_eq!(location.pathname(), "/crud/websocket");
    }

    #[test]
    fn test_channel_target_without_port() {
        let location = PageLocation::from_parts("https:", "admin.example.com", "", "/crud/").unwrap();
        assert_eq!(
            location.channel_target(USER_REFRESH_NAMESPACE),
            "https://admin.example.com/websocket/user_refresh"
        );
    }

    #[test]
    fn test_websocket_scheme_follows_page_scheme() {
        let plain = PageLocation::from_parts("http:", "localhost", "5001", "/").unwrap();
        let secure = PageLocation::from_parts("https:", "localhost", "8443", "/").unwrap();

        assert_eq!(
            plain.websocket_url(USER_REFRESH_NAMESPACE),
            "ws://localhost:5001/websocket/user_refresh"
        );
        assert_eq!(
            secure.websocket_url("websocket/user_refresh"),
            "wss://localhost:8443/websocket/user_refresh"
        );
    }

    #[test]
    fn test_edit_and_delete_urls() {
        let location = PageLocation::parse("http://localhost:5001/crud/websocket").unwrap();
        assert_eq!(
            location.edit_url(UserId(3)),
            "http://localhost:5001/crud/websocket-edit/3"
        );
        assert_eq!(location.delete_form_url(), "http://localhost:5001/crud/basic");
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = PageLocation::parse("file:///tmp/index.html").unwrap_err();
        assert!(matches!(err, Error::InvalidLocation(_)));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(PageLocation::parse("not a url").is_err());
    }
}
