use dioxus::prelude::*;

mod api;
mod browser;
mod channel;
mod pages;
mod widgets;

use crate::api::ApiClient;
use crud::Config;
use pages::LiveUsers;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(Config::from_env);
    let location = use_hook(|| browser::page_location(&config));
    let api_client = use_hook(|| ApiClient::new(&config, location.clone()));

    use_context_provider(|| config.clone());
    use_context_provider(|| location.clone());
    use_context_provider(|| api_client.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        LiveUsers {}
    }
}
