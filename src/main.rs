//! VaultX web client
//!
//! The renderer is chosen by a platform feature and none is on by default, so
//! native `cargo test` stays free of browser bindings. Serve the app with
//! `dx serve --platform web` (which enables the `web` feature), or build it with
//! `--features web`.

mod api;
mod config;
mod error;
mod filter;
mod model;
mod profile;
mod session;
mod toast;
mod utils;
mod views;

use crate::api::{ApiClient, HttpBankApi};
use crate::config::AppConfig;
use crate::session::Session;
use crate::toast::Toaster;
use dioxus::prelude::*;
use views::{
    Accounts, CompleteProfile, Dashboard, Investments, Login, NewTransaction, NotFound,
    Notifications, Profile, Settings, ToastViewport, Transactions,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/auth/login")]
    Login {},
    #[route("/auth/register")]
    CompleteProfile {},
    #[redirect("/", || Route::Dashboard {})]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/dashboard/accounts")]
    Accounts {},
    #[route("/dashboard/transactions")]
    Transactions {},
    #[route("/dashboard/transactions/new")]
    NewTransaction {},
    #[route("/dashboard/investments")]
    Investments {},
    #[route("/dashboard/notifications")]
    Notifications {},
    #[route("/dashboard/settings")]
    Settings {},
    #[route("/dashboard/profile")]
    Profile {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    #[cfg(not(feature = "web"))]
    log::warn!("Built without a renderer, run `dx serve --platform web` or pass `--features web`");

    dioxus::launch(App);
}

fn load_config() -> AppConfig {
    match AppConfig::load() {
        Ok(config) => {
            log::info!("Using API at {}", config.api_base_url);
            config
        }
        Err(e) => {
            log::error!("Invalid build configuration, falling back to defaults: {}", e);
            AppConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);
    let session = use_context_provider(Session::for_platform);
    use_context_provider(|| ApiClient::new(HttpBankApi::new(&config.api_base_url)));
    use_context_provider(|| Toaster::new(config.toast_duration()));
    let theme = use_context_provider(|| Signal::new(session.theme()));

    let root_class = format!("app-container theme-{}", theme.read().as_str());

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: root_class,
            Router::<Route> {}
            ToastViewport {}
        }
    }
}
