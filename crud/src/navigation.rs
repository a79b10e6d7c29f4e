/// One entry of the sidebar `ul.list-group`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }

    pub fn is_active(&self, current_path: &str) -> bool {
        self.href == current_path
    }
}

/// Routes of the `crud` blueprint that the sidebar links to.
pub fn default_links() -> Vec<NavLink> {
    vec![
        NavLink::new("/crud/", "首页"),
        NavLink::new("/crud/basic", "基础 CRUD"),
        NavLink::new("/crud/websocket", "WebSocket CRUD"),
    ]
}

/// Index of the link whose href equals `current_path` exactly.
pub fn active_index(links: &[NavLink], current_path: &str) -> Option<usize> {
    links.iter().position(|link| link.is_active(current_path))
}
