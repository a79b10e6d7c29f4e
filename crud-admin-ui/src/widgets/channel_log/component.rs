use dioxus::prelude::*;

/// `#log`: one line per `server_response`, always rendered as text.
#[component]
pub fn ChannelLogView(lines: Vec<String>) -> Element {
    let entries = lines.iter().enumerate().map(|(i, line)| {
        rsx! {
            span { key: "{i}",
                br {}
                "{line}"
            }
        }
    });

    rsx! {
        div { id: "log", {entries} }
    }
}
