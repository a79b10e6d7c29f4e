use crud::navigation::{self, NavLink};
use dioxus::prelude::*;

/// Off-canvas sidebar. The entry whose href equals `current_path` is marked active.
#[component]
pub fn Sidebar(current_path: String, links: Vec<NavLink>) -> Element {
    let active = navigation::active_index(&links, &current_path);

    let items = links.iter().enumerate().map(|(i, link)| {
        let class = if active == Some(i) {
            "list-group-item active"
        } else {
            "list-group-item"
        };
        rsx! {
            li { key: "{link.href}", class: "{class}",
                a { href: "{link.href}", "{link.label}" }
            }
        }
    });

    rsx! {
        div { class: "col-xs-6 col-sm-3 sidebar-offcanvas", id: "sidebar",
            ul { class: "list-group", {items} }
        }
    }
}
