use crate::api::ApiClient;
use crate::channel::{self, ChannelCommand, LiveState};
use crate::widgets::channel_log::ChannelLogView;
use crate::widgets::connection_status::ConnectionStatus;
use crate::widgets::empty_users::EmptyUsers;
use crate::widgets::sidebar::Sidebar;
use crate::widgets::user_table::UserTable;
use crud::{Config, ConnectionState, OffcanvasState, PageLocation, UserId};
use crud::{navigation, table};
use dioxus::prelude::*;
use shared_http::LiveModel;

#[component]
pub fn LiveUsers() -> Element {
    let config = use_context::<Config>();
    let location = use_context::<PageLocation>();
    let api = use_context::<ApiClient>();

    let mut offcanvas = use_signal(OffcanvasState::default);
    let model = use_signal(|| LiveModel::new(config.locale, config.log_capacity));
    let connection = use_signal(ConnectionState::default);
    let last_update = use_signal(|| None);

    let state = LiveState {
        model,
        connection,
        last_update,
    };
    let socket_url = location.websocket_url(&config.namespace);
    let backoff = config.backoff;
    let live_channel = use_coroutine(move |rx| channel::run(rx, socket_url.clone(), backoff, state));

    let locale = config.locale;
    let rows = table::build_rows(model.read().users(), locale, &location);
    let is_empty = rows.is_empty();
    let log_lines: Vec<String> = model.read().log().lines().map(str::to_string).collect();
    let last_update_text = last_update().map(|at| at.format("%H:%M:%S").to_string());
    let toggle_label = locale.toggle_nav_label();
    let container_class = offcanvas.read().container_class();
    let channel_target = location.channel_target(&config.namespace);
    let current_path = location.pathname().to_string();

    let on_delete = move |id: UserId| {
        let api = api.clone();
        spawn(async move {
            match api.delete_user(id).await {
                Ok(()) => info!("Delete of user {} submitted", id),
                Err(e) => warn!("Delete of user {} failed: {}", id, e),
            }
        });
    };

    rsx! {
        div { class: "container",
            div { class: "{container_class}",
                div { class: "col-xs-12 col-sm-9",
                    p { class: "pull-right visible-xs",
                        button {
                            r#type: "button",
                            class: "btn btn-primary btn-xs",
                            "data-toggle": "offcanvas",
                            onclick: move |_| offcanvas.write().toggle(),
                            "{toggle_label}"
                        }
                    }

                    ConnectionStatus {
                        channel_target,
                        state: connection(),
                        locale,
                        last_update: last_update_text,
                        on_disconnect: move |_| live_channel.send(ChannelCommand::Disconnect),
                        on_reconnect: move |_| live_channel.send(ChannelCommand::Reconnect),
                    }

                    UserTable { rows, locale, on_delete }

                    if is_empty {
                        EmptyUsers {
                            locale,
                            state: connection(),
                            on_reconnect: move |_| live_channel.send(ChannelCommand::Reconnect),
                        }
                    }

                    ChannelLogView { lines: log_lines }
                }

                Sidebar {
                    current_path,
                    links: navigation::default_links(),
                }
            }
        }
    }
}
