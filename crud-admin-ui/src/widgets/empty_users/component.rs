use crud::{ConnectionState, Locale};
use dioxus::prelude::*;

/// Shown in place of an empty user table. Offers a reconnect when the
/// channel is down, since no list will arrive until it is back.
#[component]
pub fn EmptyUsers(
    locale: Locale,
    state: ConnectionState,
    on_reconnect: EventHandler<MouseEvent>,
) -> Element {
    let title = locale.no_users_title();
    let description = locale.no_users_description(state.is_connected());
    let reconnect_label = locale.reconnect_label();

    rsx! {
        div { class: "empty-state",
            div { class: "empty-icon", "👥" }
            h3 { class: "empty-title", "{title}" }
            p { class: "empty-description", "{description}" }
            if state.can_reconnect() {
                button {
                    class: "btn btn-primary btn-sm",
                    r#type: "button",
                    onclick: move |e| on_reconnect.call(e),
                    "{reconnect_label}"
                }
            }
        }
    }
}
