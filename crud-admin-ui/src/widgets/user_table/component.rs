use crud::{Locale, UserId, UserRow};
use dioxus::prelude::*;

/// The live user table. `#users_show` is rebuilt from `rows` on every update;
/// every delete link reports its row's id through the one `on_delete` handler.
#[component]
pub fn UserTable(rows: Vec<UserRow>, locale: Locale, on_delete: EventHandler<UserId>) -> Element {
    let headings = locale.table_headings().into_iter().map(|heading| {
        rsx! {
            th { key: "{heading}", "{heading}" }
        }
    });

    let body = rows.iter().map(|row| {
        let id = row.id;
        rsx! {
            tr { key: "{row.number}-{row.id}",
                th { "{row.number}" }
                td { "{row.username}" }
                td { "{row.email}" }
                td { "{row.role_label}" }
                td { "{row.status_label}" }
                td {
                    a { href: "{row.edit_href}", " {row.edit_label}" }
                    " | "
                    a {
                        href: "#",
                        onclick: move |e: MouseEvent| {
                            e.prevent_default();
                            on_delete.call(id);
                        },
                        "{row.delete_label}"
                    }
                }
            }
        }
    });

    rsx! {
        table { class: "table table-striped table-hover",
            thead {
                tr { {headings} }
            }
            tbody { id: "users_show", {body} }
        }
    }
}
