use crud::{Config, PageLocation};
use dioxus::prelude::{info, warn};

/// Location of the hosting page, or the configured server outside a browser.
pub fn page_location(config: &Config) -> PageLocation {
    match window_location() {
        Some(Ok(location)) => return location,
        Some(Err(e)) => warn!("Unusable window.location: {}", e),
        None => info!("No browser window, using {}", config.http_server),
    }

    PageLocation::parse(&config.http_server).unwrap_or_else(|e| {
        warn!("CRUD_HTTP_SERVER is invalid ({}), falling back to localhost", e);
        PageLocation::new(false, "localhost", Some(5001))
    })
}

fn window_location() -> Option<crud::Result<PageLocation>> {
    let location = web_sys::window()?.location();
    let protocol = location.protocol().ok()?;
    let hostname = location.hostname().ok()?;
    let port = location.port().ok()?;
    let pathname = location.pathname().ok()?;

    Some(PageLocation::from_parts(&protocol, &hostname, &port, &pathname))
}
