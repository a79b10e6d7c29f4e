use crud::{ConnectionState, Locale};
use dioxus::prelude::*;

#[component]
pub fn ConnectionStatus(
    channel_target: String,
    state: ConnectionState,
    locale: Locale,
    #[props(!optional)] last_update: Option<String>,
    on_disconnect: EventHandler<MouseEvent>,
    on_reconnect: EventHandler<MouseEvent>,
) -> Element {
    let dot_class = state.dot_class();
    let connected = state.is_connected();
    let status = state.describe(locale);
    let status_label = locale.channel_status_label();
    let last_update_label = locale.last_update_label();
    let disconnect_label = locale.disconnect_label();
    let reconnect_label = locale.reconnect_label();

    rsx! {
        div { class: "server-status",
            span { class: "{dot_class}" }
            span { "{status_label}: {status}" }
            if let Some(at) = last_update {
                span { class: "last-update", "{last_update_label}: {at}" }
            }
            if connected {
                button {
                    class: "btn btn-default btn-xs",
                    r#type: "button",
                    onclick: move |e| on_disconnect.call(e),
                    "{disconnect_label}"
                }
            } else {
                button {
                    class: "btn btn-default btn-xs",
                    r#type: "button",
                    onclick: move |e| on_reconnect.call(e),
                    "{reconnect_label}"
                }
            }
        }
        p { id: "url_show", "websocket URL: {channel_target}" }
    }
}
